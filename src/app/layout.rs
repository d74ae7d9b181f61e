use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::{content::Level, navigation::anchor_href};

/// A page section that fades up the first time it scrolls into view.
#[component]
pub fn Section(
    id: &'static str,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(node);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });

    view! {
        <section
            id=id
            node_ref=node
            class=move || {
                if revealed.get() {
                    "scroll-mt-24 py-16 md:py-24 transition-all duration-700 ease-out opacity-100 translate-y-0"
                } else {
                    "scroll-mt-24 py-16 md:py-24 transition-all duration-700 ease-out opacity-0 translate-y-6"
                }
            }
        >
            <div class="mx-auto max-w-6xl px-4">
                {(title.is_some() || subtitle.is_some())
                    .then(|| {
                        view! {
                            <div class="mb-10">
                                {subtitle
                                    .map(|s| {
                                        view! {
                                            <div class="mb-2 text-xs font-semibold uppercase tracking-widest text-blue-600 dark:text-blue-400">
                                                {s}
                                            </div>
                                        }
                                    })}
                                {title
                                    .map(|t| {
                                        view! {
                                            <h2 class="text-2xl md:text-4xl font-bold text-slate-900 dark:text-slate-50">
                                                {t}
                                            </h2>
                                        }
                                    })}
                            </div>
                        }
                    })}
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-2xl border border-slate-200 dark:border-white/10 bg-white dark:bg-slate-900/60 shadow-sm {class}",
        )>{children()}</div>
    }
}

#[component]
pub fn CardBody(children: Children) -> impl IntoView {
    view! { <div class="p-5 md:p-6">{children()}</div> }
}

#[component]
pub fn Pill(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-2 rounded-full border border-slate-200 dark:border-white/10 bg-white/70 dark:bg-white/5 px-3 py-1 text-xs font-medium text-slate-700 dark:text-slate-200 backdrop-blur">
            {children()}
        </span>
    }
}

/// Link to a home page section.
#[component]
pub fn NavLink(
    id: &'static str,
    label: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <a
            href=anchor_href(id)
            class="text-sm md:text-base px-3 py-2 rounded-xl hover:bg-slate-100 dark:hover:bg-white/5 transition"
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {label}
        </a>
    }
}

/// Labelled horizontal bar filled to `level`.
#[component]
pub fn ProgressBar(label: &'static str, level: Level) -> impl IntoView {
    view! {
        <div>
            <div class="mb-1 flex items-center justify-between text-sm">
                <span>{label}</span>
                <span class="opacity-70">{level.to_string()}</span>
            </div>
            <div
                class="h-2 w-full rounded-full bg-slate-200 dark:bg-white/10"
                role="progressbar"
                aria-label=label
                aria-valuenow=level.get().to_string()
                aria-valuemin="0"
                aria-valuemax="100"
            >
                <div
                    class="h-2 rounded-full bg-gradient-to-r from-blue-700 to-yellow-500"
                    style:width=level.to_string()
                ></div>
            </div>
        </div>
    }
}
