use leptos::prelude::*;

use super::{
    charts::{Datum, LineChart},
    layout::{Card, CardBody, Section},
};
use crate::content::{anchors, ROADMAP};

#[component]
pub fn Roadmap() -> impl IntoView {
    let progress = ROADMAP
        .iter()
        .map(|r| Datum::new(r.year.to_string(), r.progress.get()))
        .collect::<Vec<_>>();

    view! {
        <Section id=anchors::ROADMAP subtitle="Cita-cita & Roadmap" title="Langkah Strategis ke Depan">
            <div class="grid gap-6 md:grid-cols-2">
                <Card>
                    <CardBody>
                        <h4 class="mb-4 font-semibold">"Roadmap Karier"</h4>
                        <div class="h-72 w-full">
                            <LineChart data=progress />
                        </div>
                    </CardBody>
                </Card>
                <Card>
                    <CardBody>
                        <h4 class="mb-4 font-semibold">"Detail Tahapan"</h4>
                        <ol class="relative ml-3 border-l border-slate-200 dark:border-white/10">
                            {ROADMAP
                                .iter()
                                .map(|r| {
                                    view! {
                                        <li class="mb-6 ml-4">
                                            <div class="absolute -left-1.5 mt-1.5 h-3 w-3 rounded-full bg-yellow-500"></div>
                                            <div class="flex items-start justify-between">
                                                <div>
                                                    <div class="font-semibold">
                                                        {format!("{} — {}", r.year, r.phase)}
                                                    </div>
                                                    <ul class="mt-1 list-disc pl-5 text-sm text-slate-600 dark:text-slate-300">
                                                        {r.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                                    </ul>
                                                </div>
                                                <span class="rounded-lg bg-yellow-500/10 px-2 py-1 text-xs font-semibold text-yellow-700 dark:text-yellow-400">
                                                    {r.progress.to_string()}
                                                </span>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    </CardBody>
                </Card>
            </div>
        </Section>
    }
}
