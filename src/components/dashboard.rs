use leptos::*;

use crate::stats::types::{CountryStat, HistoricalSeries, Metric, Region, Snapshot};

#[cfg(target_arch = "wasm32")]
use crate::stats::api::{self, HISTORY_DAYS};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

use super::{
    country_table::CountryTable, info_cards::InfoCards, region_select::RegionSelect,
    trend_chart::TrendChart, world_map::WorldMap,
};

#[derive(Clone, Copy)]
pub struct SnapshotSignal(pub RwSignal<Snapshot>);

#[derive(Clone, Copy)]
pub struct CountriesSignal(pub RwSignal<Vec<CountryStat>>);

#[derive(Clone, Copy)]
pub struct HistoricalSignal(pub RwSignal<HistoricalSeries>);

#[derive(Clone, Copy)]
pub struct SelectedRegionSignal(pub RwSignal<Region>);

#[derive(Clone, Copy)]
pub struct SelectedMetricSignal(pub RwSignal<Metric>);

/// Map viewport target: a center and the width of the visible longitude
/// band. Worldwide shows the whole band; selecting a country narrows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFocus {
    pub lat: f64,
    pub long: f64,
    pub span: f64,
}

impl MapFocus {
    pub const WORLDWIDE: MapFocus = MapFocus {
        lat: 34.807,
        long: -40.479,
        span: 360.0,
    };

    pub fn country(lat: f64, long: f64) -> Self {
        MapFocus {
            lat,
            long,
            span: 60.0,
        }
    }
}

#[derive(Clone, Copy)]
pub struct MapFocusSignal(pub RwSignal<MapFocus>);

/// Top-level dashboard wrapper owning shared application state via context.
#[component]
pub fn Dashboard() -> impl IntoView {
    let snapshot = create_rw_signal(Snapshot::default());
    let countries = create_rw_signal(Vec::<CountryStat>::new());
    let historical = create_rw_signal(HistoricalSeries::default());
    let selected_region = create_rw_signal(Region::Worldwide);
    let selected_metric = create_rw_signal(Metric::Cases);
    let map_focus = create_rw_signal(MapFocus::WORLDWIDE);

    #[cfg(target_arch = "wasm32")]
    init_data_feeds(snapshot, countries, historical, selected_region, map_focus);

    provide_context(SnapshotSignal(snapshot));
    provide_context(CountriesSignal(countries));
    provide_context(HistoricalSignal(historical));
    provide_context(SelectedRegionSignal(selected_region));
    provide_context(SelectedMetricSignal(selected_metric));
    provide_context(MapFocusSignal(map_focus));

    view! {
        <div class="dashboard">
            <div class="dashboard__left">
                <header class="dashboard__header">
                    <h1>"Covid-19 Tracker"</h1>
                    <RegionSelect />
                </header>
                <InfoCards />
                <WorldMap />
            </div>
            <aside class="dashboard__right">
                <h3>"Live Cases by Country"</h3>
                <CountryTable />
                <TrendChart />
            </aside>
        </div>
    }
}

/// Wire the one-shot country and history fetches plus the region-driven
/// snapshot fetch. Snapshot responses carry the generation current when the
/// request was issued; a response older than the latest request is dropped,
/// so rapid region switches cannot apply a stale snapshot.
#[cfg(target_arch = "wasm32")]
fn init_data_feeds(
    snapshot: RwSignal<Snapshot>,
    countries: RwSignal<Vec<CountryStat>>,
    historical: RwSignal<HistoricalSeries>,
    selected_region: RwSignal<Region>,
    map_focus: RwSignal<MapFocus>,
) {
    spawn_local(async move {
        match api::fetch_countries().await {
            Ok(rows) => countries.set(rows),
            Err(err) => log::error!("country list fetch failed: {err}"),
        }
    });

    spawn_local(async move {
        match api::fetch_historical(HISTORY_DAYS).await {
            Ok(series) => historical.set(series),
            Err(err) => log::error!("historical fetch failed: {err}"),
        }
    });

    let generation = create_rw_signal(0u64);
    create_effect(move |_| {
        let region = selected_region.get();
        let issued = generation.get_untracked() + 1;
        generation.set_untracked(issued);

        spawn_local(async move {
            let fetched = api::fetch_snapshot(&region).await;
            if generation.get_untracked() != issued {
                log::debug!("dropping stale snapshot for {:?}", region.select_value());
                return;
            }
            match fetched {
                Ok(data) => {
                    let focus = data
                        .coordinates()
                        .map(|(lat, long)| MapFocus::country(lat, long))
                        .unwrap_or(MapFocus::WORLDWIDE);
                    map_focus.set(focus);
                    snapshot.set(data);
                }
                Err(err) => log::warn!("snapshot fetch failed: {err}"),
            }
        });
    });
}
