use leptos::*;

use crate::stats::{format::format_grouped, transform::sort_by_cases, types::CountryStat};

use super::dashboard::CountriesSignal;

/// Scrollable two-column table of countries ordered by case count.
#[component]
pub fn CountryTable() -> impl IntoView {
    let countries = use_context::<CountriesSignal>().expect("countries context missing");

    let rows = create_memo(move |_| countries.0.with(|stats| sort_by_cases(stats)));

    view! {
        <div class="country-table">
            <table>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|stat| stat.country.clone()
                        children=move |stat: CountryStat| {
                            view! {
                                <tr>
                                    <td>{stat.country.clone()}</td>
                                    <td class="country-table__cases">
                                        {format_grouped(stat.cases)}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
