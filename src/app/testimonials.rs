use leptos::prelude::*;

use super::layout::{Card, CardBody, Section};
use crate::content::{anchors, TESTIMONIALS};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <Section id=anchors::TESTIMONIALS subtitle="Testimoni" title="Kata Mereka">
            <div class="grid gap-6 md:grid-cols-3">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <Card>
                                <CardBody>
                                    <div class="flex items-center gap-3">
                                        <div class="h-10 w-10 rounded-full bg-gradient-to-br from-blue-700 to-yellow-500"></div>
                                        <div>
                                            <div class="font-semibold">{t.name}</div>
                                            <div class="text-xs opacity-70">{t.role}</div>
                                        </div>
                                    </div>
                                    <p class="mt-3 text-sm text-slate-600 dark:text-slate-300">
                                        {format!("“{}”", t.text)}
                                    </p>
                                </CardBody>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
