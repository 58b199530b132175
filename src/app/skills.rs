use leptos::prelude::*;

use crate::config::Timings;
use crate::content::TECHNOLOGIES;
use crate::skills::{start_reveal, CategoryFilter, RevealStep, Skill, SkillGrid};
use crate::timer::TimeoutChain;

use super::timers::{BrowserHandle, BrowserScheduler};

#[component]
fn SkillCard(skill: Skill, position: usize, revealed: Signal<bool>) -> impl IntoView {
    let glow = format!(
        "background: radial-gradient(circle at center, {}33, transparent 70%)",
        skill.color
    );
    let bar = format!(
        "width: {}%; background: linear-gradient(to right, {}aa, {})",
        skill.level, skill.color, skill.color
    );

    view! {
        <div
            class=move || {
                if revealed.get() {
                    "group relative p-6 rounded-xl bg-gray-800/60 border border-gray-700 hover:-translate-y-1 transition-transform duration-300 animate-fadeIn"
                } else {
                    "group relative p-6 rounded-xl bg-gray-800/60 border border-gray-700 opacity-0"
                }
            }
            style=format!("animation-delay: {:.1}s", position as f32 * 0.1)
        >
            <div
                class="absolute inset-0 rounded-xl opacity-0 group-hover:opacity-100 transition-opacity duration-300"
                style=glow
            ></div>
            <div class="relative flex items-center gap-3 mb-4">
                <i class=format!("{} text-3xl", skill.icon) style=format!("color: {}", skill.color)></i>
                <h3 class="font-semibold">{skill.name}</h3>
            </div>
            <div class="relative h-2 rounded-full bg-gray-700 overflow-hidden">
                <div class="h-full rounded-full" style=bar></div>
            </div>
            <p class="relative mt-2 text-right text-sm text-gray-400">{format!("{}%", skill.level)}</p>
        </div>
    }
}

#[component]
pub fn TechStack() -> impl IntoView {
    let timings = use_context::<Timings>().unwrap_or_default();
    let grid = RwSignal::new(SkillGrid::new(TECHNOLOGIES));
    let visible = Memo::new(move |_| grid.with(|g| g.visible().to_vec()));
    let generation = Memo::new(move |_| grid.with(|g| g.reveal().generation()));
    let reveal = StoredValue::new_local(None::<TimeoutChain<BrowserHandle>>);

    // a new generation means the filter changed and the sequence restarted
    Effect::watch(
        move || generation.get(),
        move |&generation, _, _| {
            let timer = start_reveal(
                &BrowserScheduler,
                timings.reveal_delay(),
                timings.reveal_step(),
                move || {
                    matches!(
                        grid.try_update(|g| g.reveal_step(generation)),
                        Some(RevealStep::Revealed(_))
                    )
                },
            );
            match timer {
                // replacing the previous timer cancels it
                Ok(t) => reveal.set_value(Some(t)),
                Err(e) => {
                    log::warn!("showing all skills at once: {e}");
                    reveal.set_value(None);
                    grid.update(SkillGrid::reveal_all);
                }
            }
        },
        true,
    );
    on_cleanup(move || {
        reveal.try_update_value(Option::take);
    });

    view! {
        <section id="skills" class="py-24 bg-gray-900">
            <div class="container mx-auto px-4">
                <div class="mb-12 text-center">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        <span class="bg-gradient-to-r from-cyan-400 to-indigo-500 bg-clip-text text-transparent">
                            "Tech Stack"
                        </span>
                    </h2>
                    <p class="text-gray-400 max-w-xl mx-auto text-lg">
                        "The tools and technologies I use to bring ideas to life"
                    </p>
                </div>
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {CategoryFilter::TABS
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    on:click=move |_| {
                                        grid.update(|g| {
                                            g.set_category(tab);
                                        });
                                    }
                                    class=move || {
                                        if grid.with(|g| g.filter() == tab) {
                                            "px-5 py-2 rounded-full bg-gradient-to-r from-cyan-500 to-indigo-500 text-white font-medium"
                                        } else {
                                            "px-5 py-2 rounded-full bg-gray-800 text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
                                        }
                                    }
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(position, skill)| {
                                let revealed = Signal::derive(move || {
                                    grid.with(|g| g.is_revealed(position))
                                });
                                view! { <SkillCard skill=skill position=position revealed=revealed /> }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
