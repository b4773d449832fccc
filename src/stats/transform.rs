use indexmap::IndexMap;

use super::types::{CountryStat, DeltaPoint};

/// Convert a cumulative date-keyed series into day-over-day changes.
///
/// Dates are visited in the map's insertion order; the caller guarantees the
/// source delivers them in ascending chronological order. The first sample
/// only seeds the diff and emits no point, so the output always has one
/// fewer entry than the input (empty for inputs of size 0 or 1).
pub fn build_delta_series(series: &IndexMap<String, u64>) -> Vec<DeltaPoint> {
    let mut points = Vec::with_capacity(series.len().saturating_sub(1));
    let mut previous: Option<u64> = None;

    for (date, &cumulative) in series {
        if let Some(prev) = previous {
            points.push(DeltaPoint {
                date: date.clone(),
                delta: cumulative as i64 - prev as i64,
            });
        }
        previous = Some(cumulative);
    }

    points
}

/// Return a new vector of the given stats ordered by case count descending.
///
/// The sort is stable, so rows with equal case counts keep their input
/// order. The input slice is left untouched.
pub fn sort_by_cases(stats: &[CountryStat]) -> Vec<CountryStat> {
    let mut sorted = stats.to_vec();
    sorted.sort_by(|a, b| b.cases.cmp(&a.cases));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cumulative(entries: &[(&str, u64)]) -> IndexMap<String, u64> {
        entries
            .iter()
            .map(|(date, count)| (date.to_string(), *count))
            .collect()
    }

    fn country(name: &str, cases: u64) -> CountryStat {
        CountryStat {
            country: name.to_string(),
            country_info: Default::default(),
            cases,
            today_cases: 0,
            deaths: 0,
            today_deaths: 0,
            recovered: 0,
            today_recovered: 0,
        }
    }

    #[test]
    fn delta_series_diffs_consecutive_days() {
        let series = cumulative(&[("1/22/20", 100), ("1/23/20", 120), ("1/24/20", 150)]);

        let deltas = build_delta_series(&series);
        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas[0].date, "1/23/20");
        assert_eq!(deltas[0].delta, 20);
        assert_eq!(deltas[1].date, "1/24/20");
        assert_eq!(deltas[1].delta, 30);
    }

    #[test]
    fn delta_series_is_empty_for_trivial_inputs() {
        assert!(build_delta_series(&IndexMap::new()).is_empty());
        assert!(build_delta_series(&cumulative(&[("1/22/20", 100)])).is_empty());
    }

    #[test]
    fn delta_series_has_one_point_fewer_than_input() {
        let series = cumulative(&[
            ("1/22/20", 0),
            ("1/23/20", 5),
            ("1/24/20", 5),
            ("1/25/20", 12),
            ("1/26/20", 40),
        ]);

        assert_eq!(build_delta_series(&series).len(), series.len() - 1);
    }

    #[test]
    fn delta_series_allows_negative_corrections() {
        // Upstream occasionally revises a cumulative total downward.
        let series = cumulative(&[("3/1/20", 900), ("3/2/20", 850)]);

        let deltas = build_delta_series(&series);
        assert_eq!(deltas[0].delta, -50);
    }

    #[test]
    fn delta_series_does_not_mutate_input() {
        let series = cumulative(&[("1/22/20", 100), ("1/23/20", 120)]);
        let before = series.clone();

        let _ = build_delta_series(&series);
        assert_eq!(series, before);
    }

    #[test]
    fn sort_orders_by_cases_descending() {
        let stats = vec![country("A", 50), country("B", 200), country("C", 125)];

        let sorted = sort_by_cases(&stats);
        let order: Vec<&str> = sorted.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(order, ["B", "C", "A"]);
        assert!(sorted.windows(2).all(|pair| pair[0].cases >= pair[1].cases));
    }

    #[test]
    fn sort_is_stable_for_equal_case_counts() {
        let stats = vec![country("A", 50), country("B", 200), country("C", 200)];

        let sorted = sort_by_cases(&stats);
        let order: Vec<&str> = sorted.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(order, ["B", "C", "A"]);
    }

    #[test]
    fn sort_preserves_input_and_elements() {
        let stats = vec![country("A", 1), country("B", 3), country("C", 2)];
        let before = stats.clone();

        let sorted = sort_by_cases(&stats);
        assert_eq!(stats, before);
        assert_eq!(sorted.len(), stats.len());
        for stat in &stats {
            assert!(sorted.contains(stat));
        }
    }

    #[test]
    fn sort_is_idempotent() {
        let stats = vec![country("A", 7), country("B", 7), country("C", 9)];

        let once = sort_by_cases(&stats);
        let twice = sort_by_cases(&once);
        assert_eq!(once, twice);
    }
}
