use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::layout::Section;
use crate::{
    content::{anchors, GALLERY},
    lightbox::Lightbox,
};

#[component]
pub fn Gallery() -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(GALLERY.len()));

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if !lightbox.get_untracked().is_open() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => lightbox.update(Lightbox::close),
            "ArrowRight" => lightbox.update(Lightbox::next),
            "ArrowLeft" => lightbox.update(Lightbox::prev),
            _ => return,
        }
        ev.prevent_default();
    });

    let current = move || {
        lightbox
            .get()
            .current()
            .and_then(|i| GALLERY.get(i).map(|img| (i, img)))
    };

    view! {
        <Section id=anchors::GALLERY subtitle="Galeri" title="Foto Kegiatan, Desain, & Konten">
            <div class="grid grid-cols-2 gap-3 md:grid-cols-3 md:gap-6">
                {GALLERY
                    .iter()
                    .enumerate()
                    .map(|(i, img)| {
                        view! {
                            <button
                                class="group overflow-hidden rounded-2xl shadow focus:outline-none focus:ring-2 focus:ring-blue-600"
                                aria-label=format!("Perbesar: {}", img.alt)
                                on:click=move |_| lightbox.update(|lb| lb.open(i))
                            >
                                <img
                                    src=img.src
                                    alt=img.alt
                                    loading="lazy"
                                    class="aspect-video w-full object-cover transition-transform duration-300 group-hover:scale-[1.02]"
                                />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                current()
                    .map(|(i, img)| {
                        view! {
                            <div
                                class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
                                role="dialog"
                                aria-modal="true"
                                aria-label=img.alt
                                on:click=move |_| lightbox.update(Lightbox::close)
                            >
                                <button
                                    class="absolute left-4 top-1/2 -translate-y-1/2 rounded-full bg-white/10 px-3 py-2 text-2xl text-white hover:bg-white/20"
                                    aria-label="Sebelumnya"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        lightbox.update(Lightbox::prev);
                                    }
                                >
                                    "‹"
                                </button>
                                <figure class="max-h-full max-w-5xl" on:click=|ev| ev.stop_propagation()>
                                    <img src=img.src alt=img.alt class="max-h-[80vh] w-auto rounded-2xl object-contain" />
                                    <figcaption class="mt-3 text-center text-sm text-white/80">
                                        {format!("{} ({}/{})", img.alt, i + 1, GALLERY.len())}
                                    </figcaption>
                                </figure>
                                <button
                                    class="absolute right-4 top-1/2 -translate-y-1/2 rounded-full bg-white/10 px-3 py-2 text-2xl text-white hover:bg-white/20"
                                    aria-label="Berikutnya"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        lightbox.update(Lightbox::next);
                                    }
                                >
                                    "›"
                                </button>
                                <button
                                    class="absolute right-4 top-4 rounded-full bg-white/10 px-3 py-1 text-xl text-white hover:bg-white/20"
                                    aria-label="Tutup"
                                    on:click=move |_| lightbox.update(Lightbox::close)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
        </Section>
    }
}
