use leptos::prelude::*;

use crate::config::Timings;
use crate::content::{AVATAR, HERO_PHRASES, OWNER, SOCIAL_LINKS};
use crate::timer::{chain_timeouts, TimeoutChain};
use crate::typewriter::Typewriter;

use super::timers::{BrowserHandle, BrowserScheduler};

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="relative w-40 h-40 md:w-48 md:h-48 mx-auto">
            <div class="absolute inset-0 rounded-full bg-gradient-to-tr from-pink-500 via-purple-500 to-indigo-500 blur-md opacity-75 animate-pulse"></div>
            <img
                src=AVATAR
                alt=OWNER
                class="relative w-full h-full rounded-full object-cover border-4 border-gray-900"
            />
        </div>
    }
}

#[component]
fn TypedRole() -> impl IntoView {
    let timings = use_context::<Timings>().unwrap_or_default();
    let typewriter = match Typewriter::new(HERO_PHRASES, timings.typewriter()) {
        Ok(t) => RwSignal::new(t),
        Err(e) => {
            log::error!("hero typewriter disabled: {e}");
            return ().into_any();
        }
    };

    let chain = StoredValue::new_local(None::<TimeoutChain<BrowserHandle>>);
    Effect::new(move |_| {
        let first = typewriter.with_untracked(Typewriter::first_delay);
        match chain_timeouts(&BrowserScheduler, first, move || {
            typewriter.try_update(Typewriter::step)
        }) {
            Ok(c) => chain.set_value(Some(c)),
            Err(e) => log::warn!("hero typewriter won't animate: {e}"),
        }
    });
    on_cleanup(move || {
        chain.try_update_value(Option::take);
    });

    view! {
        <p class="text-xl md:text-2xl text-gray-300 h-8">
            {move || typewriter.with(Typewriter::text)}
            <span class="ml-1 border-r-2 border-purple-400 animate-pulse"></span>
        </p>
    }
    .into_any()
}

#[component]
pub fn Hero() -> impl IntoView {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-900 via-indigo-950 to-gray-900 relative overflow-hidden"
        >
            <div class=move || {
                if mounted.get() {
                    "container mx-auto px-4 text-center transition-all duration-1000 opacity-100 translate-y-0"
                } else {
                    "container mx-auto px-4 text-center transition-all duration-1000 opacity-0 translate-y-8"
                }
            }>
                <Avatar />
                <h1 class="text-5xl md:text-7xl font-bold mt-8 mb-4">
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-pink-500 via-purple-500 to-indigo-500 bg-clip-text text-transparent">
                        {OWNER}
                    </span>
                </h1>
                <TypedRole />
                <div class="flex flex-wrap justify-center gap-4 mt-10">
                    <a
                        href="#projects"
                        class="px-8 py-3 rounded-full bg-gradient-to-r from-purple-600 to-indigo-600 font-medium hover:shadow-lg hover:shadow-purple-500/30 transition-all duration-300"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 rounded-full border border-purple-500 font-medium hover:bg-purple-500/10 transition-all duration-300"
                    >
                        "Contact Me"
                    </a>
                </div>
                <div class="flex justify-center gap-6 mt-10 text-2xl text-gray-400">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    aria-label=link.platform
                                    class="hover:text-white transition-colors duration-300"
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <a
                href="#skills"
                aria-label="Scroll down"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-gray-400 animate-bounce"
            >
                "↓"
            </a>
        </section>
    }
}
