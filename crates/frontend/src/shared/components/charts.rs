//! In-house SVG bar and pie charts for the impact dashboard.
//!
//! The stats payload is tiny (tens of buckets at most), so the charts are
//! plain SVG built from the data with a couple of pure geometry helpers.

use contracts::dashboards::stats::NameCount;
use leptos::prelude::*;

/// Slice palette, cycled when there are more buckets than colors.
pub const CHART_COLORS: [&str; 8] = [
    "#4f46e5", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

/// Height of a bar scaled into the plot area. Zero when the data has no
/// positive maximum.
pub fn bar_height(count: i64, max: i64, plot_height: f64) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    (count.max(0) as f64 / max as f64) * plot_height
}

/// Start/end angles in degrees for each slice, clockwise from 12 o'clock.
/// Empty when the counts sum to zero.
pub fn slice_angles(data: &[NameCount]) -> Vec<(f64, f64)> {
    let total: i64 = data.iter().map(|d| d.count.max(0)).sum();
    if total <= 0 {
        return Vec::new();
    }
    let mut angles = Vec::with_capacity(data.len());
    let mut start = 0.0;
    for bucket in data {
        let sweep = (bucket.count.max(0) as f64 / total as f64) * 360.0;
        angles.push((start, start + sweep));
        start += sweep;
    }
    angles
}

/// Point on a circle, angle measured clockwise from the top.
pub fn polar_point(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + r * rad.sin(), cy - r * rad.cos())
}

/// SVG path for one pie slice.
pub fn pie_slice_path(cx: f64, cy: f64, r: f64, start_deg: f64, end_deg: f64) -> String {
    let (sx, sy) = polar_point(cx, cy, r, start_deg);
    let (ex, ey) = polar_point(cx, cy, r, end_deg);
    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    format!(
        "M {cx:.3} {cy:.3} L {sx:.3} {sy:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {ex:.3} {ey:.3} Z"
    )
}

/// Vertical bar chart with rotated bucket labels.
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<NameCount>>,
    /// Bar fill color
    #[prop(optional)]
    fill: Option<&'static str>,
) -> impl IntoView {
    const WIDTH: f64 = 600.0;
    const HEIGHT: f64 = 320.0;
    const PLOT_HEIGHT: f64 = 220.0;
    const LEFT: f64 = 20.0;

    let fill = fill.unwrap_or("#4f46e5");

    view! {
        <svg class="chart chart--bar" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
            <line
                x1=LEFT
                y1=PLOT_HEIGHT + 10.0
                x2=WIDTH - LEFT
                y2=PLOT_HEIGHT + 10.0
                stroke="#e5e7eb"
            />
            {move || {
                let buckets = data.get();
                if buckets.is_empty() {
                    return ().into_any();
                }
                let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
                let band = (WIDTH - 2.0 * LEFT) / buckets.len() as f64;
                let bar_w = band * 0.6;
                buckets
                    .into_iter()
                    .enumerate()
                    .map(|(i, bucket)| {
                        let h = bar_height(bucket.count, max, PLOT_HEIGHT);
                        let x = LEFT + i as f64 * band + (band - bar_w) / 2.0;
                        let y = PLOT_HEIGHT + 10.0 - h;
                        let label_x = LEFT + i as f64 * band + band / 2.0;
                        let label_y = PLOT_HEIGHT + 26.0;
                        view! {
                            <g>
                                <rect x=x y=y width=bar_w height=h rx="3" fill=fill>
                                    <title>{format!("{}: {}", bucket.name, bucket.count)}</title>
                                </rect>
                                <text
                                    x=label_x
                                    y=y - 6.0
                                    text-anchor="middle"
                                    class="chart__count"
                                >
                                    {bucket.count.to_string()}
                                </text>
                                <text
                                    x=label_x
                                    y=label_y
                                    text-anchor="end"
                                    class="chart__label"
                                    transform=format!("rotate(-45 {} {})", label_x, label_y)
                                >
                                    {bucket.name}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </svg>
    }
}

/// Pie chart with a color-keyed legend showing each bucket's share.
#[component]
pub fn PieChart(#[prop(into)] data: Signal<Vec<NameCount>>) -> impl IntoView {
    const CX: f64 = 130.0;
    const CY: f64 = 130.0;
    const R: f64 = 120.0;

    view! {
        <div class="chart chart--pie">
            <svg viewBox="0 0 260 260">
                {move || {
                    let buckets = data.get();
                    let angles = slice_angles(&buckets);
                    if angles.len() == 1 {
                        // single bucket fills the whole circle; an arc of
                        // 360 degrees degenerates, so draw a circle
                        return view! {
                            <circle cx=CX cy=CY r=R fill=CHART_COLORS[0]/>
                        }
                        .into_any();
                    }
                    angles
                        .into_iter()
                        .zip(buckets)
                        .enumerate()
                        .map(|(i, ((start, end), bucket))| {
                            let color = CHART_COLORS[i % CHART_COLORS.len()];
                            view! {
                                <path d=pie_slice_path(CX, CY, R, start, end) fill=color>
                                    <title>{format!("{}: {}", bucket.name, bucket.count)}</title>
                                </path>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </svg>
            <ul class="chart__legend">
                {move || {
                    let buckets = data.get();
                    let total: i64 = buckets.iter().map(|b| b.count.max(0)).sum();
                    buckets
                        .into_iter()
                        .enumerate()
                        .map(|(i, bucket)| {
                            let color = CHART_COLORS[i % CHART_COLORS.len()];
                            let share = if total > 0 {
                                (bucket.count.max(0) as f64 / total as f64 * 100.0).round()
                            } else {
                                0.0
                            };
                            view! {
                                <li class="chart__legend-item">
                                    <span
                                        class="chart__legend-swatch"
                                        style=format!("background: {}", color)
                                    ></span>
                                    {format!("{}: {:.0}%", bucket.name, share)}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str, count: i64) -> NameCount {
        NameCount {
            name: name.into(),
            count,
        }
    }

    #[test]
    fn bar_height_scales_against_max() {
        assert_eq!(bar_height(30, 30, 220.0), 220.0);
        assert_eq!(bar_height(15, 30, 220.0), 110.0);
        assert_eq!(bar_height(0, 30, 220.0), 0.0);
        assert_eq!(bar_height(5, 0, 220.0), 0.0);
    }

    #[test]
    fn slices_are_proportional() {
        // 30:20 split must yield 216 and 144 degree sweeps
        let angles = slice_angles(&[bucket("Education", 30), bucket("Health", 20)]);
        assert_eq!(angles.len(), 2);
        assert!((angles[0].0 - 0.0).abs() < 1e-9);
        assert!((angles[0].1 - 216.0).abs() < 1e-9);
        assert!((angles[1].0 - 216.0).abs() < 1e-9);
        assert!((angles[1].1 - 360.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_produces_no_slices() {
        assert!(slice_angles(&[]).is_empty());
        assert!(slice_angles(&[bucket("A", 0)]).is_empty());
    }

    #[test]
    fn polar_point_starts_at_twelve_oclock() {
        let (x, y) = polar_point(100.0, 100.0, 50.0, 0.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);

        let (x, y) = polar_point(100.0, 100.0, 50.0, 90.0);
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn large_slices_set_the_large_arc_flag() {
        let big = pie_slice_path(0.0, 0.0, 10.0, 0.0, 216.0);
        assert!(big.contains(" 1 1 "));
        let small = pie_slice_path(0.0, 0.0, 10.0, 216.0, 360.0);
        assert!(small.contains(" 0 1 "));
    }
}
