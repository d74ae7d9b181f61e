use leptos::prelude::*;

use crate::charts::{
    bar_layout, label_anchor, line_points, monotone_path, polar_to_cartesian, polygon_points,
    radar_angle, radar_points, radar_ring, ticks, Point, Viewport,
};

const BLUE: &str = "#1d4ed8";
const AMBER: &str = "#f59e0b";
const GRID: &str = "#cbd5e1";
const MAX: f64 = 100.0;
const TICK_STEP: u32 = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: impl Into<f64>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

fn values(data: &[Datum]) -> Vec<f64> {
    data.iter().map(|d| d.value).collect()
}

/// Dashed horizontal grid with a labelled 0..=100 y axis.
#[component]
fn YGrid(vp: Viewport) -> impl IntoView {
    ticks(MAX as u32, TICK_STEP)
        .into_iter()
        .map(|t| {
            let y = vp.y_for(t as f64, MAX);
            view! {
                <line
                    x1=vp.left()
                    x2=vp.right()
                    y1=y
                    y2=y
                    stroke=GRID
                    stroke-dasharray="3 3"
                />
                <text
                    x=vp.left() - 6.0
                    y=y
                    text-anchor="end"
                    dominant-baseline="middle"
                    class="fill-slate-500 text-[10px]"
                >
                    {t}
                </text>
            }
        })
        .collect_view()
}

/// Small label box shown above a hovered mark.
#[component]
fn Tooltip(at: Point, text: String) -> impl IntoView {
    let width = 12.0 + 6.0 * text.chars().count() as f64;
    let x = at.x - width / 2.0;
    let y = (at.y - 30.0).max(0.0);
    view! {
        <g pointer-events="none">
            <rect
                x=x
                y=y
                width=width
                height=22
                rx=4
                class="fill-white stroke-slate-300 dark:fill-slate-800 dark:stroke-slate-600"
            />
            <text
                x=at.x
                y=y + 11.0
                text-anchor="middle"
                dominant-baseline="middle"
                class="fill-slate-800 text-[11px] dark:fill-slate-100"
            >
                {text}
            </text>
        </g>
    }
}

#[component]
pub fn RadarChart(data: Vec<Datum>, #[prop(default = "Skill")] name: &'static str) -> impl IntoView {
    let n = data.len();
    let center = Point::new(160.0, 150.0);
    let radius = 100.0;

    let rings = (1..=4)
        .map(|k| {
            let ring = radar_ring(n, center, radius * k as f64 / 4.0);
            view! { <polygon points=polygon_points(&ring) fill="none" stroke=GRID /> }
        })
        .collect_view();

    let spokes = (0..n)
        .map(|i| {
            let end = polar_to_cartesian(center, radius, radar_angle(i, n));
            view! { <line x1=center.x y1=center.y x2=end.x y2=end.y stroke=GRID /> }
        })
        .collect_view();

    let labels = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let angle = radar_angle(i, n);
            let at = polar_to_cartesian(center, radius + 14.0, angle);
            view! {
                <text
                    x=at.x
                    y=at.y
                    text-anchor=label_anchor(angle)
                    dominant-baseline="middle"
                    class="fill-slate-600 text-[12px] dark:fill-slate-300"
                >
                    {d.label.clone()}
                </text>
            }
        })
        .collect_view();

    // radius axis runs along the 30 degree line
    let axis = ticks(MAX as u32, TICK_STEP)
        .into_iter()
        .map(|t| {
            let at = polar_to_cartesian(center, radius * t as f64 / MAX, 30.0);
            view! {
                <text x=at.x y=at.y class="fill-slate-400 text-[9px]">
                    {t}
                </text>
            }
        })
        .collect_view();

    let shape = polygon_points(&radar_points(&values(&data), MAX, center, radius));

    view! {
        <svg viewBox="0 0 320 300" class="h-full w-full" role="img" aria-label=name>
            {rings}
            {spokes}
            <polygon points=shape fill=BLUE fill-opacity="0.4" stroke=BLUE stroke-width="2" />
            {labels}
            {axis}
        </svg>
    }
}

#[component]
pub fn BarChart(data: Vec<Datum>) -> impl IntoView {
    let vp = Viewport::default();
    let bars = bar_layout(&values(&data), MAX, &vp);
    let hovered = RwSignal::new(None::<usize>);

    let marks = bars
        .iter()
        .zip(&data)
        .enumerate()
        .map(|(i, (bar, d))| {
            view! {
                <rect
                    x=bar.x
                    y=bar.y
                    width=bar.width
                    height=bar.height
                    fill=AMBER
                    class="transition-opacity"
                    opacity=move || if hovered.get() == Some(i) { "0.8" } else { "1" }
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
                <text
                    x=bar.center_x()
                    y=vp.bottom() + 16.0
                    text-anchor="middle"
                    class="fill-slate-600 text-[12px] dark:fill-slate-300"
                >
                    {d.label.clone()}
                </text>
            }
        })
        .collect_view();

    let tooltip = move || {
        hovered.get().and_then(|i| {
            let (bar, d) = (bars.get(i)?, data.get(i)?);
            Some(view! {
                <Tooltip
                    at=Point::new(bar.center_x(), bar.y)
                    text=format!("{}: {}", d.label, d.value)
                />
            })
        })
    };

    view! {
        <svg viewBox=vp.view_box() class="h-full w-full" role="img">
            <YGrid vp />
            {marks}
            {tooltip}
        </svg>
    }
}

#[component]
pub fn LineChart(data: Vec<Datum>) -> impl IntoView {
    let vp = Viewport::default();
    let points = line_points(&values(&data), MAX, &vp);
    let path = monotone_path(&points);
    let hovered = RwSignal::new(None::<usize>);

    let marks = points
        .iter()
        .zip(&data)
        .enumerate()
        .map(|(i, (p, d))| {
            view! {
                <circle
                    cx=p.x
                    cy=p.y
                    r=move || if hovered.get() == Some(i) { "7" } else { "5" }
                    fill="white"
                    stroke=BLUE
                    stroke-width="2"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
                <text
                    x=p.x
                    y=vp.bottom() + 16.0
                    text-anchor="middle"
                    class="fill-slate-600 text-[12px] dark:fill-slate-300"
                >
                    {d.label.clone()}
                </text>
            }
        })
        .collect_view();

    let tooltip = move || {
        hovered.get().and_then(|i| {
            let (p, d) = (points.get(i)?, data.get(i)?);
            Some(view! { <Tooltip at=*p text=format!("{}: {}", d.label, d.value) /> })
        })
    };

    view! {
        <svg viewBox=vp.view_box() class="h-full w-full" role="img">
            <YGrid vp />
            <path d=path fill="none" stroke=BLUE stroke-width="3" />
            {marks}
            {tooltip}
        </svg>
    }
}
