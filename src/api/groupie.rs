use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::{Client, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::concerts::format_relation;
use crate::models::{Artist, DateSet, LocationSet, RelationSet};

#[derive(Debug, Error)]
pub enum GroupieError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to parse response from {url}: {reason}")]
    Parse { url: String, reason: String },
}

/// Read-only client for the four Groupie Trackers collections.
///
/// Every call issues a fresh GET; nothing is cached between requests.
#[derive(Clone)]
pub struct GroupieClient {
    http: Client,
    artists_url: String,
    locations_url: String,
    dates_url: String,
    relations_url: String,
}

impl GroupieClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent())
            .build()
            .context("unable to construct http client")?;

        Ok(Self {
            http,
            artists_url: config.artists_url(),
            locations_url: config.locations_url(),
            dates_url: config.dates_url(),
            relations_url: config.relations_url(),
        })
    }

    pub async fn fetch_artists(&self) -> Result<Vec<Artist>, GroupieError> {
        self.get_json(&self.artists_url).await
    }

    pub async fn fetch_locations(&self) -> Result<LocationSet, GroupieError> {
        let body: IndexResponse<LocationItem> = self.get_json(&self.locations_url).await?;

        Ok(body
            .index
            .into_iter()
            .map(|item| (item.id, item.locations))
            .collect())
    }

    pub async fn fetch_dates(&self) -> Result<DateSet, GroupieError> {
        let body: IndexResponse<DateItem> = self.get_json(&self.dates_url).await?;

        Ok(body
            .index
            .into_iter()
            .map(|item| (item.id, item.dates))
            .collect())
    }

    pub async fn fetch_relations(&self) -> Result<RelationSet, GroupieError> {
        let body: IndexResponse<RelationItem> = self.get_json(&self.relations_url).await?;

        Ok(body
            .index
            .into_iter()
            .map(|item| (item.id, relation_lines(item.dates_locations)))
            .collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GroupieError> {
        tracing::debug!(url, "fetching upstream collection");

        let response = self.http.get(url).send().await?.error_for_status()?;

        response.json::<T>().await.map_err(|err| GroupieError::Parse {
            url: url.to_string(),
            reason: err.to_string(),
        })
    }
}

/// Flattens a `datesLocations` map into `"{date} → {location}"` lines,
/// ordered by concert date where the key parses as one.
fn relation_lines(dates_locations: HashMap<String, OneOrMany>) -> Vec<String> {
    let mut pairs = dates_locations
        .into_iter()
        .flat_map(|(date, locations)| {
            locations
                .into_vec()
                .into_iter()
                .map(move |location| (date.clone(), location))
        })
        .collect::<Vec<_>>();

    pairs.sort_by(|a, b| {
        parse_date(&a.0)
            .cmp(&parse_date(&b.0))
            .then_with(|| a.0.cmp(&b.0))
            .then_with(|| a.1.cmp(&b.1))
    });

    pairs
        .iter()
        .map(|(date, location)| format_relation(date, location))
        .collect()
}

/// Upstream dates look like `23-08-2019`; upcoming shows carry a `*` prefix.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim_start_matches('*');
    if value.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(value, "%d-%m-%Y").ok()
}

#[derive(Debug, Clone, Deserialize)]
struct IndexResponse<T> {
    #[serde(default = "Vec::new")]
    index: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
struct LocationItem {
    id: i64,
    #[serde(default)]
    locations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct DateItem {
    id: i64,
    #[serde(default)]
    dates: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RelationItem {
    id: i64,
    #[serde(rename = "datesLocations", default)]
    dates_locations: HashMap<String, OneOrMany>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}
