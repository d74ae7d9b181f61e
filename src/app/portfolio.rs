use leptos::prelude::*;

use super::layout::{Card, CardBody, Section};
use crate::content::{anchors, PortfolioItem, PORTFOLIO};

#[component]
fn ItemColumn(
    heading: &'static str,
    link_label: &'static str,
    items: &'static [PortfolioItem],
) -> impl IntoView {
    view! {
        <Card>
            <CardBody>
                <h4 class="mb-2 font-semibold">{heading}</h4>
                <ul class="space-y-3 text-sm">
                    {items
                        .iter()
                        .map(|p| {
                            view! {
                                <li class="rounded-xl border border-slate-200 dark:border-white/10 p-3">
                                    <div class="font-semibold">{p.title}</div>
                                    <div class="text-slate-600 dark:text-slate-300">{p.desc}</div>
                                    {p
                                        .link
                                        .map(|href| {
                                            view! {
                                                <a
                                                    href=href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="mt-2 inline-flex items-center gap-1 text-blue-700 dark:text-blue-400"
                                                >
                                                    {link_label}
                                                    " ↗"
                                                </a>
                                            }
                                        })}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </CardBody>
        </Card>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <Section id=anchors::PORTFOLIO subtitle="Portofolio" title="Project Coding, Desain, & Konten">
            <div class="grid gap-6 md:grid-cols-3">
                <ItemColumn heading="Project Coding" link_label="Demo" items=PORTFOLIO.coding />
                <ItemColumn heading="Desain" link_label="Lihat" items=PORTFOLIO.design />
                <ItemColumn heading="Konten Digital" link_label="Kunjungi" items=PORTFOLIO.content />
            </div>
            <Card class="mt-6">
                <CardBody>
                    <h4 class="mb-2 font-semibold">"Aktivitas & Karya Pra-Kuliah"</h4>
                    <ul class="grid gap-3 md:grid-cols-2">
                        {PORTFOLIO
                            .activities
                            .iter()
                            .map(|a| {
                                view! {
                                    <li class="rounded-xl border border-slate-200 dark:border-white/10 p-3">
                                        <div class="font-semibold">{a.title}</div>
                                        <div class="text-slate-600 dark:text-slate-300">{a.desc}</div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </CardBody>
            </Card>
        </Section>
    }
}
