use leptos::prelude::*;

use super::{
    icons::StarIcon,
    layout::{Card, CardBody, Pill, Section},
};
use crate::content::{anchors, ABOUT, PROFILE};

#[component]
pub fn About() -> impl IntoView {
    let facts_left = [
        ("Nama", PROFILE.name),
        ("Panggilan", PROFILE.nickname),
        ("TTL", PROFILE.birth),
        ("Usia", PROFILE.age),
    ];
    let facts_right = [("Status", PROFILE.status), ("Domisili", PROFILE.location)];
    let fact_list = |facts: &[(&'static str, &'static str)]| {
        facts
            .iter()
            .map(|(label, value)| {
                view! {
                    <div>
                        <span class="font-semibold">{format!("{label}:")}</span>
                        " "
                        {*value}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Section id=anchors::ABOUT subtitle="Tentang Saya" title="Profil Singkat & Timeline">
            <div class="grid gap-6 md:grid-cols-3">
                <Card class="md:col-span-2">
                    <CardBody>
                        <h3 class="mb-3 text-xl font-bold">
                            {format!("Halo, saya {} 👋", PROFILE.nickname)}
                        </h3>
                        <p class="leading-relaxed text-slate-600 dark:text-slate-300">{ABOUT.bio}</p>
                        <div class="mt-4 flex flex-wrap gap-2">
                            {ABOUT.roles.iter().map(|r| view! { <Pill>"✔ " {*r}</Pill> }).collect_view()}
                        </div>
                        <div class="mt-6 grid grid-cols-1 gap-4 sm:grid-cols-2">
                            <div class="space-y-1 text-sm">{fact_list(&facts_left)}</div>
                            <div class="space-y-1 text-sm">{fact_list(&facts_right)}</div>
                        </div>
                    </CardBody>
                </Card>
                <Card>
                    <CardBody>
                        <h4 class="mb-4 text-sm font-semibold uppercase tracking-wider text-slate-500">
                            "Role Model"
                        </h4>
                        <ul class="space-y-2 text-sm">
                            {ABOUT
                                .role_models
                                .iter()
                                .map(|m| {
                                    view! {
                                        <li class="flex items-center gap-2">
                                            <StarIcon />
                                            {*m}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </CardBody>
                </Card>
            </div>
            <div class="mt-6 grid gap-6 md:grid-cols-2">
                <Card>
                    <CardBody>
                        <h4 class="mb-4 text-sm font-semibold uppercase tracking-wider text-slate-500">
                            "Timeline Hidup"
                        </h4>
                        <ol class="relative ml-3 border-l border-slate-200 dark:border-white/10">
                            {ABOUT
                                .timeline
                                .iter()
                                .map(|t| {
                                    view! {
                                        <li class="mb-6 ml-4">
                                            <div class="absolute -left-1.5 mt-1.5 h-3 w-3 rounded-full bg-blue-600"></div>
                                            <div class="font-semibold">{t.year}</div>
                                            <div class="text-slate-600 dark:text-slate-300">{t.text}</div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    </CardBody>
                </Card>
                <Card>
                    <CardBody>
                        <h4 class="mb-4 text-sm font-semibold uppercase tracking-wider text-slate-500">
                            "Visi & Misi"
                        </h4>
                        <ul class="grid gap-3 text-sm">
                            <li class="flex items-center gap-2">"🎯 Visi: " {ABOUT.vision}</li>
                            <li class="flex items-center gap-2">"✅ Misi: " {ABOUT.mission}</li>
                        </ul>
                    </CardBody>
                </Card>
            </div>
        </Section>
    }
}
