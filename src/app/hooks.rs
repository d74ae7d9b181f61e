use codee::string::FromToStringCodec;
use leptos::{ev, prelude::*};
use leptos_use::{storage::use_local_storage, use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::{
    navigation::anchor_target,
    theme::{Theme, DARK_CLASS, STORAGE_KEY},
    typing::{Typewriter, TypingTiming, BLINK_INTERVAL},
};

/// Drives a [`Typewriter`] off browser timers.
///
/// Returns the visible text and whether the cursor is currently shown.
pub fn use_typing(
    phrases: &[&'static str],
    timing: TypingTiming,
) -> (ReadSignal<String>, ReadSignal<bool>) {
    let (text, set_text) = signal(String::new());
    let (cursor, set_cursor) = signal(true);

    let typewriter = match Typewriter::new(phrases, timing) {
        Ok(tw) => StoredValue::new(tw),
        Err(e) => {
            log::error!("typing animation disabled: {e}");
            return (text, cursor);
        }
    };
    let (step, set_step) = signal(0u64);

    Effect::new(move |_| {
        step.track();
        let delay = typewriter.with_value(|tw| tw.delay());
        let tick = move || {
            typewriter.update_value(|tw| tw.advance());
            set_text.set(typewriter.with_value(|tw| tw.text()));
            set_step.update(|s| *s = s.wrapping_add(1));
        };
        match set_timeout_with_handle(tick, delay) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::error!("couldn't schedule typing step: {e:?}"),
        }
    });

    Effect::new(move |_| {
        match set_interval_with_handle(move || set_cursor.update(|on| *on = !*on), BLINK_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::error!("couldn't start cursor blink: {e:?}"),
        }
    });

    (text, cursor)
}

/// Persisted theme, mirrored onto the `dark` class of `<html>`.
pub fn use_theme() -> (Signal<Theme>, WriteSignal<Theme>) {
    let (theme, set_theme, _) = use_local_storage::<Theme, FromToStringCodec>(STORAGE_KEY);

    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
            log::warn!("couldn't apply theme: {e:?}");
        }
    });

    (theme, set_theme)
}

/// Smoothly scrolls to a section when any `#id` link on the page is clicked.
///
/// Links whose target isn't on the current page fall through to the router.
pub fn use_smooth_scroll() {
    let _ = use_event_listener(use_document(), ev::click, |ev| {
        if ev.default_prevented() || ev.button() != 0 || ev.ctrl_key() || ev.meta_key() {
            return;
        }
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href]").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(section) = anchor_target(&href).and_then(|id| document().get_element_by_id(id))
        else {
            return;
        };
        ev.prevent_default();
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&opts);
    });
}

/// `true` once the component has run in the browser.
///
/// Guards markup that depends on browser-only state so hydration sees the
/// same tree the server rendered.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted
}
