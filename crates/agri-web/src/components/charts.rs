//! SVG Charts
//!
//! Geometry is computed in plain functions so it can be unit tested off
//! the browser; the components only lay out the resulting shapes.

use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::prelude::*;

const BAR_CHART_WIDTH: f64 = 400.0;
const BAR_CHART_HEIGHT: f64 = 220.0;
const BAR_GAP: f64 = 12.0;
const AXIS_PAD: f64 = 24.0;

const PALETTE: [&str; 3] = ["#2f7d32", "#e0a526", "#2a9d8f"];

/// One bar, in SVG user units
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out bars left to right, scaled so the tallest fills `height`
pub fn layout_bars(values: &[f64], width: f64, height: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    let bar_width = ((width - BAR_GAP * (count + 1.0)) / count).max(1.0);

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let h = if max > 0.0 { v.max(0.0) / max * height } else { 0.0 };
            #[allow(clippy::cast_precision_loss)]
            let x = BAR_GAP + i as f64 * (bar_width + BAR_GAP);
            Bar {
                x,
                y: height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

/// Start/end angles (radians, clockwise from 12 o'clock) per slice
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let end = start + v.max(0.0) / total * TAU;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

/// SVG path for a pie wedge centred at (`cx`, `cy`)
pub fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    // A single arc cannot draw a full circle
    if end - start >= TAU - 1e-9 {
        return format!(
            "M {cx} {top} A {r} {r} 0 1 1 {cx} {bottom} A {r} {r} 0 1 1 {cx} {top} Z",
            top = cy - r,
            bottom = cy + r
        );
    }
    let point = |angle: f64| {
        let a = angle - FRAC_PI_2;
        (cx + r * a.cos(), cy + r * a.sin())
    };
    let (x1, y1) = point(start);
    let (x2, y2) = point(end);
    let large_arc = u8::from(end - start > std::f64::consts::PI);
    format!("M {cx} {cy} L {x1:.3} {y1:.3} A {r} {r} 0 {large_arc} 1 {x2:.3} {y2:.3} Z")
}

#[component]
pub fn BarChart(
    /// `(label, value)` pairs
    #[prop(into)]
    data: Signal<Vec<(String, f64)>>,
    #[prop(optional)] unit: &'static str,
) -> impl IntoView {
    let plot_height = BAR_CHART_HEIGHT - AXIS_PAD;

    view! {
        <svg
            class="chart bar-chart"
            viewBox=format!("0 0 {BAR_CHART_WIDTH} {BAR_CHART_HEIGHT}")
            role="img"
        >
            <line
                class="axis"
                x1="0"
                x2=BAR_CHART_WIDTH.to_string()
                y1=plot_height.to_string()
                y2=plot_height.to_string()
            />
            {move || {
                let data = data.get();
                let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
                layout_bars(&values, BAR_CHART_WIDTH, plot_height - 16.0)
                    .into_iter()
                    .zip(data)
                    .map(|(bar, (label, value))| {
                        let cx = bar.x + bar.width / 2.0;
                        let top = bar.y + 16.0;
                        view! {
                            <g class="bar">
                                <rect
                                    x=format!("{:.2}", bar.x)
                                    y=format!("{top:.2}")
                                    width=format!("{:.2}", bar.width)
                                    height=format!("{:.2}", bar.height)
                                    rx="4"
                                    fill={PALETTE[0]}
                                />
                                <text
                                    class="value"
                                    x=format!("{cx:.2}")
                                    y=format!("{:.2}", top - 4.0)
                                    text-anchor="middle"
                                >
                                    {format!("{value:.1}{unit}")}
                                </text>
                                <text
                                    class="label"
                                    x=format!("{cx:.2}")
                                    y=format!("{:.2}", BAR_CHART_HEIGHT - 6.0)
                                    text-anchor="middle"
                                >
                                    {label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}

#[component]
pub fn PieChart(
    /// `(label, value)` pairs
    #[prop(into)]
    data: Signal<Vec<(String, f64)>>,
) -> impl IntoView {
    const SIZE: f64 = 200.0;
    let r = SIZE / 2.0 - 4.0;

    view! {
        <div class="pie-chart">
            <svg class="chart" viewBox=format!("0 0 {SIZE} {SIZE}") role="img">
                {move || {
                    let data = data.get();
                    let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
                    pie_angles(&values)
                        .into_iter()
                        .enumerate()
                        .map(|(i, (start, end))| view! {
                            <path
                                d={wedge_path(SIZE / 2.0, SIZE / 2.0, r, start, end)}
                                fill={PALETTE[i % PALETTE.len()]}
                            />
                        })
                        .collect_view()
                }}
            </svg>
            <ul class="legend">
                {move || {
                    data.get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, (label, value))| view! {
                            <li>
                                <span class="swatch" style={format!("background:{}", PALETTE[i % PALETTE.len()])}></span>
                                {format!("{label}: {value:.1}")}
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

/// Horizontal meter for a value inside `[0, max]`
#[component]
pub fn ProgressBar(
    #[prop(into)] label: String,
    value: f64,
    max: f64,
    #[prop(optional)] unit: &'static str,
) -> impl IntoView {
    let percent = if max > 0.0 { (value / max * 100.0).clamp(0.0, 100.0) } else { 0.0 };

    view! {
        <div class="progress">
            <div class="progress-label">
                <span>{label}</span>
                <span>{format!("{value:.1}{unit}")}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style=format!("width:{percent:.1}%")></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_scale_to_tallest() {
        let bars = layout_bars(&[2.0, 4.0], 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert!((bars[1].height - 100.0).abs() < 1e-9);
        assert!((bars[0].height - 50.0).abs() < 1e-9);
        assert!((bars[0].y - 50.0).abs() < 1e-9);
        assert!(bars[1].x > bars[0].x + bars[0].width);
    }

    #[test]
    fn test_bars_empty_and_zero() {
        assert!(layout_bars(&[], 100.0, 100.0).is_empty());
        let bars = layout_bars(&[0.0, 0.0], 100.0, 100.0);
        assert!(bars.iter().all(|b| b.height == 0.0));
    }

    #[test]
    fn test_pie_angles_cover_circle() {
        let angles = pie_angles(&[45.0, 32.0, 58.0]);
        assert_eq!(angles.len(), 3);
        assert!(angles[0].0.abs() < 1e-12);
        assert!((angles[2].1 - TAU).abs() < 1e-9);
        assert!((angles[0].1 - angles[1].0).abs() < 1e-12);
        assert!(pie_angles(&[0.0]).is_empty());
    }

    #[test]
    fn test_wedge_path() {
        let half = wedge_path(100.0, 100.0, 50.0, 0.0, std::f64::consts::PI);
        assert!(half.starts_with("M 100 100 L 100.000 50.000"));
        assert!(half.contains(" 0 0 1 "));

        let most = wedge_path(100.0, 100.0, 50.0, 0.0, 4.0);
        assert!(most.contains(" 0 1 1 "));

        let full = wedge_path(100.0, 100.0, 50.0, 0.0, TAU);
        assert!(full.ends_with('Z'));
        assert!(!full.contains(" L "));
    }
}
