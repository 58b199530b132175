use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::{OWNER, SOCIAL_LINKS};

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} {OWNER}. All rights reserved."),
        None => format!("© {OWNER}. All rights reserved."),
    };

    view! {
        <footer class="py-10 bg-gray-950 border-t border-gray-800">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-6">
                <a href="#home" class="text-2xl font-bold bg-gradient-to-r from-pink-500 via-purple-500 to-indigo-500 bg-clip-text text-transparent">
                    {OWNER}
                </a>
                <nav class="flex gap-6 text-gray-400">
                    <a href="#skills" class="hover:text-white transition-colors">"Skills"</a>
                    <a href="#projects" class="hover:text-white transition-colors">"Projects"</a>
                    <a href="#contact" class="hover:text-white transition-colors">"Contact"</a>
                </nav>
                <div class="flex gap-4 text-xl text-gray-400">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href aria-label=link.platform class="hover:text-white transition-colors">
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <p class="mt-8 text-center text-sm text-gray-500">{copyright}</p>
        </footer>
    }
}
