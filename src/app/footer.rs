use leptos::prelude::*;

use super::layout::Pill;
use crate::content::{FOOTER_PILLS, PROFILE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200/80 dark:border-white/10 py-10">
            <div class="mx-auto max-w-6xl px-4 text-sm text-slate-600 dark:text-slate-400">
                <div class="flex flex-col items-start justify-between gap-4 md:flex-row md:items-center">
                    <div>
                        {format!(
                            "© {} {}. All rights reserved. Built with Rust & Leptos.",
                            env!("BUILD_YEAR"),
                            PROFILE.name,
                        )}
                        " · "
                        <a href="/rss.xml" class="hover:underline">
                            "RSS"
                        </a>
                    </div>
                    <div class="flex flex-wrap items-center gap-2">
                        {FOOTER_PILLS.iter().map(|p| view! { <Pill>{*p}</Pill> }).collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
