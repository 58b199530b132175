use leptos::{html, prelude::*};
use leptos_use::use_element_hover;

use crate::config::Timings;
use crate::content::PROJECTS;
use crate::showcase::{start_auto_advance, Showcase, ShowcaseEvent, ShowcaseItem};

use super::timers::BrowserScheduler;

#[component]
fn ProjectDetails(item: ShowcaseItem) -> impl IntoView {
    let demo_style = format!(
        "background: linear-gradient(to right, {0}, {0}cc)",
        item.color
    );

    view! {
        <div class="animate-fadeIn">
            <p class="text-gray-300 text-lg mb-6 leading-relaxed">{item.description}</p>
            <h4 class="text-sm uppercase tracking-wider text-gray-500 mb-3">"Highlights"</h4>
            <ul class="space-y-2 mb-6">
                {item
                    .highlights
                    .iter()
                    .map(|h| {
                        view! {
                            <li class="flex items-center gap-2 text-gray-300">
                                <span
                                    class="w-2 h-2 rounded-full"
                                    style=format!("background-color: {}", item.color)
                                ></span>
                                {*h}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2 mb-8">
                {item
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-3 py-1 rounded-full text-sm bg-gray-800 border border-gray-700">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4">
                <a
                    href=item.links.repository
                    class="px-5 py-2 rounded-lg bg-gray-800 hover:bg-gray-700 transition-colors"
                >
                    <i class="devicon-github-plain mr-2"></i>
                    "Code"
                </a>
                <a href=item.links.demo class="px-5 py-2 rounded-lg font-medium" style=demo_style>
                    "Live Demo"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectShowcase() -> impl IntoView {
    let timings = use_context::<Timings>().unwrap_or_default();
    let showcase = match Showcase::new(PROJECTS) {
        Ok(s) => RwSignal::new(s),
        Err(e) => {
            log::error!("project showcase disabled: {e}");
            return ().into_any();
        }
    };
    let active = Memo::new(move |_| showcase.with(|s| s.active_item().clone()));
    let dispatch = move |event: ShowcaseEvent| {
        if let Some(Err(e)) = showcase.try_update(|s| s.apply(event)) {
            log::debug!("ignored {event:?}: {e}");
        }
    };

    Effect::new(move |_| {
        match start_auto_advance(&BrowserScheduler, timings.showcase_interval(), move || {
            dispatch(ShowcaseEvent::Tick)
        }) {
            Ok(guard) => on_cleanup(move || drop(guard)),
            Err(e) => log::warn!("project showcase won't auto-advance: {e}"),
        }
    });

    // pointer or keyboard focus inside the featured project pauses rotation
    let region = NodeRef::<html::Div>::new();
    let hovered = use_element_hover(region);
    let (focused, set_focused) = signal(false);
    Effect::watch(
        move || hovered.get() || focused.get(),
        move |&suspended, _, _| {
            dispatch(if suspended {
                ShowcaseEvent::HoverEnter
            } else {
                ShowcaseEvent::HoverExit
            })
        },
        false,
    );

    let items = showcase.with_untracked(|s| s.items().to_vec());

    view! {
        <section
            id="projects"
            class="py-24 bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900 overflow-hidden relative"
        >
            <div class="container mx-auto px-4 relative z-10">
                <div class="mb-16 text-center">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        <span class="bg-gradient-to-r from-pink-500 via-purple-500 to-indigo-500 bg-clip-text text-transparent">
                            "My Creations"
                        </span>
                    </h2>
                    <p class="text-gray-400 max-w-xl mx-auto mt-4 text-lg">
                        "Projects I've built with love, creativity, and a bit of coding magic ✨"
                    </p>
                </div>
                <div
                    node_ref=region
                    on:focusin=move |_| set_focused.set(true)
                    on:focusout=move |_| set_focused.set(false)
                    class="mb-20 grid lg:grid-cols-12 gap-8 items-center"
                >
                    <div class="lg:col-span-7 relative rounded-2xl overflow-hidden shadow-2xl group">
                        <div class="absolute inset-0 bg-gradient-to-tr from-gray-900 to-transparent opacity-60 z-10"></div>
                        <img
                            src=move || active.get().media
                            alt=move || active.get().title
                            class="w-full aspect-video object-cover transition-transform duration-700 group-hover:scale-105"
                        />
                        <div class="absolute bottom-0 left-0 w-full p-6 z-20">
                            <div class="flex items-center gap-3 mb-2">
                                <span
                                    class="w-3 h-3 rounded-full"
                                    style=move || format!("background-color: {}", active.get().color)
                                ></span>
                                <h3 class="text-3xl font-bold">{move || active.get().title}</h3>
                            </div>
                            <p class="text-gray-300">{move || active.get().tagline}</p>
                        </div>
                    </div>
                    <div class="lg:col-span-5">
                        {move || view! { <ProjectDetails item=active.get() /> }}
                    </div>
                </div>
                <div class="flex flex-wrap justify-center gap-3">
                    {items
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let ShowcaseItem { title, color, .. } = item;
                            let is_active = move || showcase.with(|s| s.is_active(index));
                            view! {
                                <button
                                    on:click=move |_| dispatch(ShowcaseEvent::Select(index))
                                    class=move || {
                                        if is_active() {
                                            "px-4 py-2 rounded-lg text-white transition-all duration-300"
                                        } else {
                                            "px-4 py-2 rounded-lg text-gray-400 hover:text-white hover:bg-gray-700/50 transition-all duration-300"
                                        }
                                    }
                                    style=move || {
                                        if is_active() {
                                            format!("background-color: {color}")
                                        } else {
                                            String::new()
                                        }
                                    }
                                >
                                    {title}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
    .into_any()
}
