use leptos::prelude::*;

use super::{
    charts::{BarChart, Datum, RadarChart},
    layout::{Card, CardBody, ProgressBar, Section},
};
use crate::content::{anchors, Skill, SKILLS};

fn data(skills: &[Skill]) -> Vec<Datum> {
    skills
        .iter()
        .map(|s| Datum::new(s.name, s.level.get()))
        .collect()
}

#[component]
fn SkillBars(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <div class="grid gap-3">
            {skills
                .iter()
                .map(|s| view! { <ProgressBar label=s.name level=s.level /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <Section id=anchors::SKILLS subtitle="Skill & Kompetensi" title="Hard, Soft, dan Bahasa">
            <div class="grid gap-6 md:grid-cols-2">
                <Card>
                    <CardBody>
                        <h4 class="mb-4 font-semibold">"Hard Skill (Radar)"</h4>
                        <div class="h-72 w-full">
                            <RadarChart data=data(SKILLS.hard) name="Hard Skill" />
                        </div>
                    </CardBody>
                </Card>
                <Card>
                    <CardBody>
                        <h4 class="mb-4 font-semibold">"Bahasa (Bar)"</h4>
                        <div class="h-72 w-full">
                            <BarChart data=data(SKILLS.languages) />
                        </div>
                    </CardBody>
                </Card>
            </div>
            <div class="mt-6 grid gap-6 md:grid-cols-2">
                <Card>
                    <CardBody>
                        <h4 class="mb-4 font-semibold">"Detail Hard Skill"</h4>
                        <SkillBars skills=SKILLS.hard />
                    </CardBody>
                </Card>
                <Card>
                    <CardBody>
                        <h4 class="mb-4 font-semibold">"Soft Skill"</h4>
                        <SkillBars skills=SKILLS.soft />
                    </CardBody>
                </Card>
            </div>
        </Section>
    }
}
