use leptos::*;

use crate::stats::{
    format::{format_stat, metric_class, metric_label},
    types::Metric,
};

use super::dashboard::{SelectedMetricSignal, SnapshotSignal};

/// Row of three metric toggle cards fed by the current snapshot.
#[component]
pub fn InfoCards() -> impl IntoView {
    view! {
        <div class="info-cards">
            <For
                each=move || Metric::ALL.into_iter()
                key=|metric| *metric
                children=move |metric: Metric| view! { <InfoCard metric=metric /> }
            />
        </div>
    }
}

#[component]
fn InfoCard(metric: Metric) -> impl IntoView {
    let snapshot = use_context::<SnapshotSignal>().expect("snapshot context missing");
    let selected_metric =
        use_context::<SelectedMetricSignal>().expect("selected metric context missing");

    let today = create_memo(move |_| snapshot.0.with(|data| data.today(metric)));
    let total = create_memo(move |_| snapshot.0.with(|data| data.total(metric)));
    let active = move || selected_metric.0.get() == metric;

    view! {
        <button
            class=card_class(metric)
            class:selected=active
            on:click=move |_| selected_metric.0.set(metric)
        >
            <span class="info-card__title">{metric_label(metric)}</span>
            <span class="info-card__today">{move || format_stat(today.get())}</span>
            <span class="info-card__total">{move || format!("{} Total", format_stat(total.get()))}</span>
        </button>
    }
}

/// Base classes for a card: the metric's accent class is fixed per card,
/// so it is baked into the attribute rather than toggled.
fn card_class(metric: Metric) -> String {
    format!("info-card {}", metric_class(metric))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_class_carries_metric_accent() {
        assert_eq!(card_class(Metric::Cases), "info-card orange");
        assert_eq!(card_class(Metric::Recovered), "info-card green");
        assert_eq!(card_class(Metric::Deaths), "info-card red");
    }
}
