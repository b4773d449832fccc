use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::types::{CountryStat, HistoricalSeries, Region, Snapshot};

/// Upstream read-only JSON API serving the dashboard.
pub const API_BASE: &str = "https://disease.sh/v3/covid-19";

/// Trailing window of the historical endpoint, in days.
pub const HISTORY_DAYS: u32 = 120;

/// Errors that can surface while fetching a dashboard payload.
#[derive(Debug)]
pub enum FetchError {
    Http(String),
    Deserialize(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Http(err) => write!(f, "request failed: {err}"),
            FetchError::Deserialize(err) => write!(f, "malformed response: {err}"),
        }
    }
}

/// Current totals for the given region.
pub async fn fetch_snapshot(region: &Region) -> Result<Snapshot, FetchError> {
    get_json(&snapshot_url(region)).await
}

/// Per-country snapshot rows feeding the dropdown, table, and map.
pub async fn fetch_countries() -> Result<Vec<CountryStat>, FetchError> {
    get_json(&format!("{API_BASE}/countries")).await
}

/// Worldwide cumulative series over the trailing `last_days` window.
pub async fn fetch_historical(last_days: u32) -> Result<HistoricalSeries, FetchError> {
    get_json(&historical_url(last_days)).await
}

fn snapshot_url(region: &Region) -> String {
    match region {
        Region::Worldwide => format!("{API_BASE}/all"),
        Region::Country(code) => format!("{API_BASE}/countries/{code}"),
    }
}

fn historical_url(last_days: u32) -> String {
    format!("{API_BASE}/historical/all?lastdays={last_days}")
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| FetchError::Http(err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http(format!(
            "{} returned status {}",
            url,
            response.status()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| FetchError::Deserialize(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_url_selects_endpoint_per_region() {
        assert_eq!(
            snapshot_url(&Region::Worldwide),
            "https://disease.sh/v3/covid-19/all"
        );
        assert_eq!(
            snapshot_url(&Region::Country("IN".into())),
            "https://disease.sh/v3/covid-19/countries/IN"
        );
    }

    #[test]
    fn historical_url_carries_window() {
        assert_eq!(
            historical_url(HISTORY_DAYS),
            "https://disease.sh/v3/covid-19/historical/all?lastdays=120"
        );
    }
}
