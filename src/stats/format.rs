use super::types::Metric;

pub fn metric_label(metric: Metric) -> &'static str {
    match metric {
        Metric::Cases => "Coronavirus Cases",
        Metric::Deaths => "Deaths",
        Metric::Recovered => "Recovered",
    }
}

/// Lowercase noun for inline copy such as the chart heading.
pub fn metric_noun(metric: Metric) -> &'static str {
    match metric {
        Metric::Cases => "cases",
        Metric::Deaths => "deaths",
        Metric::Recovered => "recoveries",
    }
}

/// CSS modifier attached to the active info card and the chart stroke.
pub fn metric_class(metric: Metric) -> &'static str {
    match metric {
        Metric::Cases => "orange",
        Metric::Deaths => "red",
        Metric::Recovered => "green",
    }
}

pub fn metric_color(metric: Metric) -> &'static str {
    match metric {
        Metric::Cases => "#cc1034",
        Metric::Deaths => "#fb4443",
        Metric::Recovered => "#7dd71d",
    }
}

/// Abbreviate a count for the info cards: `+1.2M`, `+34.5K`, `+862`.
///
/// Counts that would round to `1000.0K` promote to the next magnitude
/// instead.
pub fn format_stat(count: u64) -> String {
    if count == 0 {
        return "0".to_string();
    }
    let (value, suffix) = if count >= 999_950 {
        (count as f64 / 1_000_000.0, "M")
    } else if count >= 1_000 {
        (count as f64 / 1_000.0, "K")
    } else {
        return format!("+{count}");
    };
    format!("+{value:.1}{suffix}")
}

/// Group digits with commas for the table column: `38,997,490`.
pub fn format_grouped(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(metric_label(Metric::Cases), "Coronavirus Cases");
        assert_eq!(metric_class(Metric::Recovered), "green");
        assert_eq!(metric_color(Metric::Deaths), "#fb4443");
    }

    #[test]
    fn format_stat_abbreviates_at_magnitude_boundaries() {
        assert_eq!(format_stat(0), "0");
        assert_eq!(format_stat(862), "+862");
        assert_eq!(format_stat(1_000), "+1.0K");
        assert_eq!(format_stat(34_501), "+34.5K");
        assert_eq!(format_stat(1_500_000), "+1.5M");
    }

    #[test]
    fn format_stat_promotes_at_rounding_boundary() {
        assert_eq!(format_stat(999_949), "+999.9K");
        assert_eq!(format_stat(999_950), "+1.0M");
        assert_eq!(format_stat(999_999), "+1.0M");
    }

    #[test]
    fn format_grouped_inserts_separators() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(38_997_490), "38,997,490");
    }
}
