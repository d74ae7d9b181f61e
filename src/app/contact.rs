use leptos::{html, prelude::*};

use super::layout::{Card, CardBody, Section};
use crate::{
    contact::{ContactError, ContactMessage},
    content::{anchors, CONTACT_NOTE, PROFILE},
};

/// Validates a contact form submission and records it in the server log.
#[server]
pub async fn send_contact_message(
    name: String,
    email: String,
    message: String,
) -> Result<String, ServerFnError> {
    match ContactMessage::validate(&name, &email, &message) {
        Ok(msg) => {
            tracing::info!(
                name = %msg.name,
                email = %msg.email,
                chars = msg.message.chars().count(),
                "contact message received"
            );
            Ok(msg.acknowledgement())
        }
        Err(e) => {
            tracing::warn!("rejected contact message: {e}");
            Err(ServerFnError::ServerError(e.to_string()))
        }
    }
}

/// Checks the form in the browser before it is sent. The server validates again.
fn submission(name: &str, email: &str, message: &str) -> Result<SendContactMessage, ContactError> {
    ContactMessage::validate(name, email, message).map(|msg| SendContactMessage {
        name: msg.name,
        email: msg.email,
        message: msg.message,
    })
}

const INPUT_CLASS: &str =
    "rounded-xl border border-slate-200 dark:border-white/10 bg-white dark:bg-slate-800 px-4 py-2";

#[component]
pub fn Contact() -> impl IntoView {
    let send = ServerAction::<SendContactMessage>::new();
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (client_error, set_client_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        match submission(&name.value(), &email.value(), &message.value()) {
            Ok(args) => {
                set_client_error.set(None);
                send.dispatch(args);
            }
            Err(e) => set_client_error.set(Some(e.to_string())),
        }
    };

    Effect::new(move |_| {
        if let Some(Ok(_)) = send.value().get() {
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
        }
    });

    let status = move || {
        if let Some(msg) = client_error.get() {
            return Some(
                view! {
                    <p class="rounded-xl bg-red-500/10 px-4 py-2 text-sm text-red-700 dark:text-red-400" role="alert">
                        {msg}
                    </p>
                }
                .into_any(),
            );
        }
        send.value().get().map(|res| match res {
            Ok(ack) => view! {
                <p class="rounded-xl bg-green-500/10 px-4 py-2 text-sm text-green-700 dark:text-green-400" role="status">
                    {ack}
                </p>
            }
            .into_any(),
            Err(e) => {
                let msg = match e {
                    ServerFnError::ServerError(msg) => msg,
                    _ => "Pesan gagal dikirim, coba lagi nanti.".to_string(),
                };
                view! {
                    <p class="rounded-xl bg-red-500/10 px-4 py-2 text-sm text-red-700 dark:text-red-400" role="alert">
                        {msg}
                    </p>
                }
                .into_any()
            }
        })
    };

    let socials = PROFILE.socials;
    let links = [
        ("📸", "@ridhopasii", socials.instagram),
        ("📸", "@edunara.academy", socials.instagram2),
        ("🌐", "Threads @ridhopasii", socials.threads),
        ("📘", "Facebook", socials.facebook),
        ("▶️", "YouTube", socials.youtube),
        ("✉️", PROFILE.email_address(), socials.email),
    ];

    view! {
        <Section id=anchors::CONTACT subtitle="Kontak" title="Mari Kolaborasi">
            <div class="grid gap-6 md:grid-cols-2">
                <Card>
                    <CardBody>
                        <h4 class="mb-4 font-semibold">{format!("Hubungi {}", PROFILE.nickname)}</h4>
                        <form node_ref=form_ref class="grid gap-4" on:submit=on_submit>
                            <input
                                node_ref=name_ref
                                name="name"
                                required
                                placeholder="Nama"
                                class=INPUT_CLASS
                            />
                            <input
                                node_ref=email_ref
                                name="email"
                                type="email"
                                required
                                placeholder="Email"
                                class=INPUT_CLASS
                            />
                            <textarea
                                node_ref=message_ref
                                name="message"
                                required
                                rows=4
                                placeholder="Pesan"
                                class=INPUT_CLASS
                            ></textarea>
                            <button
                                type="submit"
                                disabled=move || send.pending().get()
                                class="inline-flex items-center justify-center gap-2 rounded-xl bg-gradient-to-r from-blue-700 to-yellow-500 px-4 py-2 font-semibold text-white shadow hover:opacity-95 disabled:opacity-60"
                            >
                                {move || if send.pending().get() { "Mengirim…" } else { "Kirim →" }}
                            </button>
                            {status}
                        </form>
                    </CardBody>
                </Card>
                <Card>
                    <CardBody>
                        <h4 class="mb-4 font-semibold">"Sosial Media & Link"</h4>
                        <ul class="grid gap-3 text-sm">
                            {links
                                .into_iter()
                                .map(|(icon, label, href)| {
                                    view! {
                                        <li class="flex items-center gap-2">
                                            <span aria-hidden="true">{icon}</span>
                                            <a class="hover:underline" href=href target="_blank" rel="noopener noreferrer">
                                                {label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="mt-6 text-xs opacity-70">{CONTACT_NOTE}</div>
                    </CardBody>
                </Card>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_check_trims_before_sending() {
        let args = submission(" Ridho ", " ridho@mail.id ", " Halo ").unwrap();
        assert_eq!(args.name, "Ridho");
        assert_eq!(args.email, "ridho@mail.id");
        assert_eq!(args.message, "Halo");
    }

    #[test]
    fn browser_check_blocks_invalid_input() {
        assert_eq!(
            submission("Ridho", "bukan-email", "Halo").map(|_| ()),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(
            submission("", "ridho@mail.id", "Halo").map(|_| ()),
            Err(ContactError::MissingName)
        );
    }
}
