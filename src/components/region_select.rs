use leptos::{ev, event_target_value, *};

use crate::stats::types::Region;

use super::dashboard::{CountriesSignal, SelectedRegionSignal};

/// Dropdown offering the worldwide aggregate plus every fetched country.
///
/// Countries the upstream lists without an ISO2 code cannot be queried by
/// code, so they are left out of the options.
#[component]
pub fn RegionSelect() -> impl IntoView {
    let countries = use_context::<CountriesSignal>().expect("countries context missing");
    let selected_region =
        use_context::<SelectedRegionSignal>().expect("selected region context missing");

    let options = create_memo(move |_| {
        countries.0.with(|rows| {
            rows.iter()
                .filter_map(|row| {
                    row.country_info
                        .iso2
                        .clone()
                        .map(|code| (code, row.country.clone()))
                })
                .collect::<Vec<(String, String)>>()
        })
    });

    let on_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        selected_region.0.set(Region::from_select_value(&value));
    };

    view! {
        <select
            class="region-select"
            on:change=on_change
            prop:value=move || selected_region.0.get().select_value().to_string()
        >
            <option value=Region::WORLDWIDE_VALUE>"Worldwide"</option>
            <For
                each=move || options.get()
                key=|(code, _)| code.clone()
                children=move |(code, name): (String, String)| {
                    view! { <option value=code>{name}</option> }
                }
            />
        </select>
    }
}
