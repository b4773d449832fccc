use leptos::*;

use crate::stats::{
    format::{metric_color, metric_noun},
    transform::build_delta_series,
    types::DeltaPoint,
};

use super::dashboard::{HistoricalSignal, SelectedMetricSignal};

const CHART_WIDTH: f64 = 520.0;
const CHART_HEIGHT: f64 = 220.0;

/// Day-over-day trend of the selected metric over the fetched history
/// window, drawn as an SVG polyline with a filled area beneath.
#[component]
pub fn TrendChart() -> impl IntoView {
    let historical = use_context::<HistoricalSignal>().expect("historical context missing");
    let selected_metric =
        use_context::<SelectedMetricSignal>().expect("selected metric context missing");

    let deltas = create_memo(move |_| {
        let metric = selected_metric.0.get();
        historical
            .0
            .with(|series| build_delta_series(series.series_for(metric)))
    });

    view! {
        <section class="trend-chart">
            <h3>
                {move || format!("Worldwide new {}", metric_noun(selected_metric.0.get()))}
            </h3>
            <Show
                when=move || deltas.with(|points| points.len() >= 2)
                fallback=move || view! { <p class="trend-chart__empty">"Loading history..."</p> }
            >
                {move || {
                    let points = deltas.get();
                    let color = metric_color(selected_metric.0.get());
                    compute_chart_geometry(&points, CHART_WIDTH, CHART_HEIGHT).map(|geometry| {
                        view! {
                            <div class="trend-chart__content">
                                <svg
                                    width=CHART_WIDTH
                                    height=CHART_HEIGHT
                                    viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                                    class="trend-chart__svg"
                                >
                                    <polygon
                                        class="trend-chart__area"
                                        fill=color
                                        fill-opacity="0.25"
                                        points=geometry.area_points.clone()
                                    />
                                    <polyline
                                        class="trend-chart__line"
                                        fill="none"
                                        stroke=color
                                        points=geometry.points.clone()
                                    />
                                </svg>
                                <footer class="trend-chart__footer">
                                    <span>{format!("Latest: {}", geometry.latest)}</span>
                                    <span>{format!("High: {}", geometry.max_delta)}</span>
                                    <span>{format!("Low: {}", geometry.min_delta)}</span>
                                </footer>
                            </div>
                        }
                    })
                }}
            </Show>
        </section>
    }
}

#[derive(Debug, PartialEq)]
struct ChartGeometry {
    points: String,
    area_points: String,
    latest: i64,
    min_delta: i64,
    max_delta: i64,
}

/// Dates in a trailing daily window are evenly spaced, so points are laid
/// out by index. A flat series still renders, as a midline.
fn compute_chart_geometry(deltas: &[DeltaPoint], width: f64, height: f64) -> Option<ChartGeometry> {
    if deltas.len() < 2 || width <= 0.0 || height <= 0.0 {
        return None;
    }

    let min_delta = deltas.iter().map(|point| point.delta).min()?;
    let max_delta = deltas.iter().map(|point| point.delta).max()?;
    let span = (max_delta - min_delta) as f64;
    let step = width / (deltas.len() - 1) as f64;

    let points_vec: Vec<String> = deltas
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = i as f64 * step;
            let y = if span > 0.0 {
                height - ((point.delta - min_delta) as f64 / span) * height
            } else {
                height / 2.0
            };
            format!("{:.2},{:.2}", x, y)
        })
        .collect();
    let points = points_vec.join(" ");
    let area_points = format!("{} {:.2},{:.2} 0,{:.2}", points, width, height, height);

    Some(ChartGeometry {
        points,
        area_points,
        latest: deltas.last().map(|point| point.delta)?,
        min_delta,
        max_delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(date: &str, delta: i64) -> DeltaPoint {
        DeltaPoint {
            date: date.to_string(),
            delta,
        }
    }

    #[test]
    fn geometry_produces_one_point_per_delta() {
        let deltas = vec![
            delta("1/23/20", 20),
            delta("1/24/20", 30),
            delta("1/25/20", 10),
        ];

        let geometry = compute_chart_geometry(&deltas, 100.0, 50.0).expect("geometry");
        assert_eq!(geometry.points.split(' ').count(), 3);
        assert_eq!(geometry.max_delta, 30);
        assert_eq!(geometry.min_delta, 10);
        assert_eq!(geometry.latest, 10);
        assert!(geometry.area_points.ends_with("100.00,50.00 0,50.00"));
    }

    #[test]
    fn geometry_spans_full_viewport() {
        let deltas = vec![delta("a", 0), delta("b", 100)];

        let geometry = compute_chart_geometry(&deltas, 100.0, 50.0).expect("geometry");
        // min delta at the bottom edge, max at the top
        assert!(geometry.points.starts_with("0.00,50.00"));
        assert!(geometry.points.ends_with("100.00,0.00"));
    }

    #[test]
    fn geometry_draws_flat_series_as_midline() {
        let deltas = vec![delta("a", 42), delta("b", 42), delta("c", 42)];

        let geometry = compute_chart_geometry(&deltas, 100.0, 50.0).expect("geometry");
        for point in geometry.points.split(' ') {
            let y = point.split(',').nth(1).expect("y coordinate");
            assert_eq!(y, "25.00");
        }
    }

    #[test]
    fn geometry_rejects_insufficient_data() {
        assert!(compute_chart_geometry(&[], 100.0, 50.0).is_none());
        assert!(compute_chart_geometry(&[delta("a", 1)], 100.0, 50.0).is_none());
    }
}
