use leptos::prelude::*;

use super::{
    hooks::{use_mounted, use_theme},
    icons::MenuIcon,
    layout::NavLink,
};
use crate::{
    content::{anchors, NAV_LINKS, PROFILE},
    navigation::anchor_href,
};

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_: ()| set_menu_open.set(false));

    view! {
        <header class="sticky top-0 z-40 border-b border-slate-200/70 bg-white/80 backdrop-blur dark:border-slate-800 dark:bg-slate-950/80">
            <nav class="mx-auto flex max-w-6xl items-center justify-between px-4 py-3">
                <a href=anchor_href(anchors::HOME) class="flex items-center gap-3">
                    <div class="h-8 w-8 rounded-xl bg-gradient-to-tr from-blue-700 to-yellow-500"></div>
                    <span class="font-bold text-slate-900 dark:text-slate-50">
                        {PROFILE.short_name}
                    </span>
                </a>
                <div class="hidden items-center gap-1 md:flex">
                    {NAV_LINKS
                        .iter()
                        .map(|item| view! { <NavLink id=item.id label=item.label /> })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-2">
                    <a
                        href=PROFILE.cv_path
                        download=""
                        class="hidden rounded-xl bg-blue-700 px-4 py-2 text-sm font-semibold text-white shadow hover:bg-blue-800 sm:inline-block"
                    >
                        "⬇ Download CV"
                    </a>
                    <ThemeToggle />
                    <button
                        class="rounded-lg p-2 text-slate-700 hover:bg-slate-100 dark:text-slate-200 dark:hover:bg-slate-800 md:hidden"
                        aria-label="Menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <MenuIcon open=menu_open />
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="flex flex-col gap-1 border-t border-slate-200 px-4 py-3 dark:border-slate-800 md:hidden">
                    {NAV_LINKS
                        .iter()
                        .map(|item| {
                            view! { <NavLink id=item.id label=item.label on_click=close_menu /> }
                        })
                        .collect_view()}
                    <a
                        href=PROFILE.cv_path
                        download=""
                        class="mt-2 rounded-xl bg-blue-700 px-4 py-2 text-center text-sm font-semibold text-white"
                    >
                        "⬇ Download CV"
                    </a>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = use_theme();
    // server always renders light, stored choice only exists in the browser
    let mounted = use_mounted();
    let dark = move || mounted.get() && theme.get().is_dark();

    view! {
        <button
            class="rounded-xl border border-slate-200 px-3 py-2 text-sm hover:bg-slate-100 dark:border-slate-700 dark:hover:bg-slate-800"
            aria-label="Toggle theme"
            title=move || if dark() { "Mode terang" } else { "Mode gelap" }
            on:click=move |_| set_theme.set(theme.get_untracked().toggle())
        >
            {move || if dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
