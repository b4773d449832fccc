use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
mod logging;
pub mod stats;

pub use components::dashboard::Dashboard;
pub use logging::init_logging;
pub use stats::api::{fetch_countries, fetch_historical, fetch_snapshot, FetchError};
pub use stats::transform::{build_delta_series, sort_by_cases};
pub use stats::types::{
    CountryStat, DeltaPoint, HistoricalSeries, Metric, Region, Snapshot,
};

/// Root component bootstrapping the dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Covid-19 Tracker" />
        <main class="app-root">
            <Dashboard />
        </main>
    }
}

/// WASM entry point called automatically by `trunk`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
    init_logging();
    console_error_panic_hook::set_once();

    leptos::mount_to_body(|| view! { <App /> });
    Ok(())
}
