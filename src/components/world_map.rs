use leptos::*;

use crate::stats::{
    format::{format_grouped, metric_color},
    types::{CountryStat, Metric},
};

use super::dashboard::{CountriesSignal, MapFocus, MapFocusSignal, SelectedMetricSignal};

// World plane: 2 SVG units per degree, equirectangular.
const WORLD_WIDTH: f64 = 720.0;
const WORLD_HEIGHT: f64 = 360.0;

/// Marker map with one circle per country, sized by the square root of the
/// selected metric's count and centered on the selected region.
#[component]
pub fn WorldMap() -> impl IntoView {
    let countries = use_context::<CountriesSignal>().expect("countries context missing");
    let selected_metric =
        use_context::<SelectedMetricSignal>().expect("selected metric context missing");
    let map_focus = use_context::<MapFocusSignal>().expect("map focus context missing");

    let markers = create_memo(move |_| {
        let metric = selected_metric.0.get();
        countries.0.with(|rows| {
            rows.iter()
                .map(|row| marker_for(row, metric))
                .collect::<Vec<Marker>>()
        })
    });

    view! {
        <div class="world-map">
            <svg
                class="world-map__svg"
                viewBox=move || view_box(map_focus.0.get())
                preserveAspectRatio="xMidYMid slice"
            >
                <rect
                    class="world-map__ocean"
                    x="0" y="0"
                    width=WORLD_WIDTH
                    height=WORLD_HEIGHT
                />
                <For
                    each=move || markers.get()
                    key=|marker| marker.name.clone()
                    children=move |marker: Marker| {
                        let color = move || metric_color(selected_metric.0.get());
                        view! {
                            <circle
                                class="world-map__marker"
                                cx=marker.x
                                cy=marker.y
                                r=marker.radius
                                fill=color
                                fill-opacity="0.4"
                                stroke=color
                            >
                                <title>{format!("{}: {}", marker.name, format_grouped(marker.count))}</title>
                            </circle>
                        }
                    }
                />
            </svg>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Marker {
    name: String,
    x: f64,
    y: f64,
    radius: f64,
    count: u64,
}

fn marker_for(stat: &CountryStat, metric: Metric) -> Marker {
    let (x, y) = project(stat.country_info.lat, stat.country_info.long);
    let count = stat.total(metric);
    Marker {
        name: stat.country.clone(),
        x,
        y,
        radius: marker_radius(count, metric),
        count,
    }
}

/// Equirectangular projection onto the world plane.
fn project(lat: f64, long: f64) -> (f64, f64) {
    let x = (long + 180.0) / 360.0 * WORLD_WIDTH;
    let y = (90.0 - lat) / 180.0 * WORLD_HEIGHT;
    (x, y)
}

/// Square-root scaling keeps large outbreaks from swallowing the map while
/// small ones stay visible. Deaths run an order of magnitude below cases,
/// so their multiplier compensates.
fn marker_radius(count: u64, metric: Metric) -> f64 {
    let multiplier = match metric {
        Metric::Cases => 0.004,
        Metric::Recovered => 0.004,
        Metric::Deaths => 0.02,
    };
    (count as f64).sqrt() * multiplier
}

/// viewBox for the current focus, clamped to the world plane.
fn view_box(focus: MapFocus) -> String {
    let width = (focus.span * 2.0).clamp(1.0, WORLD_WIDTH);
    let height = (width / 2.0).min(WORLD_HEIGHT);
    let (cx, cy) = project(focus.lat, focus.long);
    let x = (cx - width / 2.0).clamp(0.0, WORLD_WIDTH - width);
    let y = (cy - height / 2.0).clamp(0.0, WORLD_HEIGHT - height);
    format!("{:.1} {:.1} {:.1} {:.1}", x, y, width, height)
}
