use leptos::prelude::*;

use super::{hooks::use_typing, layout::Pill};
use crate::{
    content::{anchors, PROFILE, TYPING_PHRASES},
    navigation::anchor_href,
    typing::TypingTiming,
};

#[component]
pub fn Hero() -> impl IntoView {
    let (typed, cursor) = use_typing(TYPING_PHRASES, TypingTiming::default());

    view! {
        <section id=anchors::HOME class="relative isolate overflow-hidden">
            <div class="absolute inset-0 -z-10 bg-[radial-gradient(50%_50%_at_50%_0%,rgba(29,78,216,0.20),transparent_60%)]"></div>
            <div class="mx-auto grid max-w-6xl grid-cols-1 items-center gap-10 px-4 py-20 md:grid-cols-2 md:py-28">
                <div class="order-2 md:order-1 animate-fade-up">
                    <h1 class="text-3xl md:text-5xl font-extrabold leading-tight text-slate-900 dark:text-white">
                        {PROFILE.name}
                    </h1>
                    <p class="mt-2 text-slate-600 dark:text-slate-300">{PROFILE.hero_tagline}</p>
                    <div class="mt-6 text-lg font-semibold text-slate-900 dark:text-slate-50">
                        <span class="opacity-70">"Saya adalah "</span>
                        <span class="bg-gradient-to-r from-blue-700 to-yellow-500 bg-clip-text text-transparent">
                            {typed}
                        </span>
                        <span
                            class=move || {
                                if cursor.get() {
                                    "ml-1 inline-block w-1 bg-slate-900 dark:bg-white opacity-100"
                                } else {
                                    "ml-1 inline-block w-1 bg-slate-900 dark:bg-white opacity-0"
                                }
                            }
                            aria-hidden="true"
                        >
                            "\u{00a0}"
                        </span>
                    </div>
                    <div class="mt-8 flex flex-wrap items-center gap-3">
                        <a
                            href=anchor_href(anchors::CONTACT)
                            class="inline-flex items-center gap-2 rounded-xl bg-gradient-to-r from-blue-700 to-yellow-500 px-4 py-2 font-semibold text-white shadow hover:opacity-95"
                        >
                            "Ayo Kolaborasi →"
                        </a>
                        <a
                            href=PROFILE.cv_path
                            download=""
                            class="inline-flex items-center gap-2 rounded-xl border border-slate-200 dark:border-white/10 bg-white px-4 py-2 font-medium hover:bg-slate-50 dark:bg-slate-800 dark:hover:bg-slate-800/80"
                        >
                            "⬇ CV PDF"
                        </a>
                    </div>
                    <div class="mt-6 flex flex-wrap gap-2">
                        <Pill>"📍 " {PROFILE.location}</Pill>
                        <Pill>"🎓 " {PROFILE.status}</Pill>
                    </div>
                </div>
                <div class="order-1 md:order-2 animate-fade-up">
                    <div class="relative mx-auto h-64 w-64 md:h-80 md:w-80">
                        <div class="absolute inset-0 rounded-[2rem] bg-gradient-to-tr from-blue-700 to-yellow-500 blur-2xl opacity-30"></div>
                        <img
                            alt=format!("Foto {}", PROFILE.nickname)
                            src=PROFILE.portrait
                            class="relative h-full w-full rounded-[2rem] object-cover shadow-2xl"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
