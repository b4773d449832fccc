use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Statistic currently being visualized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Cases,
    Deaths,
    Recovered,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cases, Metric::Recovered, Metric::Deaths];
}

/// Region whose snapshot is shown: the worldwide aggregate or one country
/// identified by its ISO2 code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    Worldwide,
    Country(String),
}

impl Region {
    /// Sentinel used as the dropdown value for the worldwide entry.
    pub const WORLDWIDE_VALUE: &'static str = "worldwide";

    pub fn from_select_value(value: &str) -> Self {
        if value == Self::WORLDWIDE_VALUE {
            Region::Worldwide
        } else {
            Region::Country(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            Region::Worldwide => Self::WORLDWIDE_VALUE,
            Region::Country(code) => code,
        }
    }
}

/// Identity and coordinates block nested in each country payload.
///
/// `iso2` is null for a handful of territories; those rows still render in
/// the table and map but cannot be selected in the dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CountryInfo {
    #[serde(rename = "_id", default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
}

/// One country's current snapshot row, replaced wholesale on each fetch.
///
/// Absent counts deserialize to 0 so downstream consumers never see a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStat {
    pub country: String,
    #[serde(default)]
    pub country_info: CountryInfo,
    #[serde(default)]
    pub cases: u64,
    #[serde(default)]
    pub today_cases: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub today_deaths: u64,
    #[serde(default)]
    pub recovered: u64,
    #[serde(default)]
    pub today_recovered: u64,
}

impl CountryStat {
    /// Running total for the given metric.
    pub fn total(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Cases => self.cases,
            Metric::Deaths => self.deaths,
            Metric::Recovered => self.recovered,
        }
    }

    /// Today's new count for the given metric.
    pub fn today(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Cases => self.today_cases,
            Metric::Deaths => self.today_deaths,
            Metric::Recovered => self.today_recovered,
        }
    }
}

/// Point-in-time totals for the selected region.
///
/// The worldwide endpoint carries no coordinates; country snapshots do, and
/// the map recenters on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_info: Option<CountryInfo>,
    #[serde(default)]
    pub cases: u64,
    #[serde(default)]
    pub today_cases: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub today_deaths: u64,
    #[serde(default)]
    pub recovered: u64,
    #[serde(default)]
    pub today_recovered: u64,
}

impl Snapshot {
    pub fn total(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Cases => self.cases,
            Metric::Deaths => self.deaths,
            Metric::Recovered => self.recovered,
        }
    }

    pub fn today(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Cases => self.today_cases,
            Metric::Deaths => self.today_deaths,
            Metric::Recovered => self.today_recovered,
        }
    }

    /// `(lat, long)` when the snapshot belongs to a country.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let info = self.country_info.as_ref()?;
        Some((info.lat, info.long))
    }
}

/// Cumulative time series per metric, date-keyed.
///
/// `IndexMap` preserves the JSON insertion order, which the upstream source
/// delivers in ascending chronological order. The delta builder relies on
/// that order and does not sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HistoricalSeries {
    #[serde(default)]
    pub cases: IndexMap<String, u64>,
    #[serde(default)]
    pub deaths: IndexMap<String, u64>,
    #[serde(default)]
    pub recovered: IndexMap<String, u64>,
}

impl HistoricalSeries {
    pub fn series_for(&self, metric: Metric) -> &IndexMap<String, u64> {
        match metric {
            Metric::Cases => &self.cases,
            Metric::Deaths => &self.deaths,
            Metric::Recovered => &self.recovered,
        }
    }
}

/// One day-over-day change derived from a cumulative series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaPoint {
    pub date: String,
    pub delta: i64,
}
