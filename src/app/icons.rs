use leptos::prelude::*;

#[component]
pub fn StarIcon() -> impl IntoView {
    view! {
        <svg class="h-4 w-4 fill-amber-400" viewBox="0 0 20 20" aria-hidden="true">
            <path d="M10 1.5l2.6 5.3 5.9.9-4.2 4.1 1 5.8L10 14.9l-5.3 2.7 1-5.8L1.5 7.7l5.9-.9z" />
        </svg>
    }
}

#[component]
pub fn MenuIcon(open: ReadSignal<bool>) -> impl IntoView {
    view! {
        <svg class="h-5 w-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d=move || {
                if open.get() { "M6 6l12 12M18 6L6 18" } else { "M4 7h16M4 12h16M4 17h16" }
            } />
        </svg>
    }
}
