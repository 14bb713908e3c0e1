use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::error::Error;

use crate::config::Config;
use crate::models::{Coordinate, Station};

/// HERE Discover API response structure
#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    #[serde(default)]
    items: Vec<DiscoverItem>,
}

#[derive(Debug, Deserialize)]
struct DiscoverItem {
    title: String,
    #[serde(default)]
    address: DiscoverAddress,
    position: DiscoverPosition,
    distance: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct DiscoverAddress {
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DiscoverPosition {
    lat: f64,
    lng: f64,
}

/// Client for the HERE Discover place-search API.
#[derive(Debug, Clone)]
pub struct DiscoverClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DiscoverClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("station-finder/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.discover_base_url.trim_end_matches('/').to_string(),
            api_key: config.here_api_key.clone(),
        })
    }

    /// Search for named places around a coordinate. Returns the places in
    /// the order the service ranked them; an empty list means the search
    /// succeeded but found nothing.
    pub async fn discover(
        &self,
        at: &Coordinate,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Station>> {
        tracing::info!(
            "Querying discover service at ({}, {}) for {:?}",
            at.latitude,
            at.longitude,
            query
        );

        let url = format!("{}/v1/discover", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("at", format!("{},{}", at.latitude, at.longitude)),
                ("q", query.to_string()),
                ("limit", limit.to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                // Log full error chain for debugging
                let mut error_msg = format!("Discover request failed: {}", e);
                let mut source = e.source();
                while let Some(err) = source {
                    error_msg.push_str(&format!("\n  Caused by: {}", err));
                    source = err.source();
                }
                tracing::warn!("{}", error_msg);
                anyhow!(error_msg)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Discover service returned HTTP {}", status);
            return Err(anyhow!("Discover service returned error: {}", status));
        }

        let data: DiscoverResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse discover response: {}", e))?;

        let stations: Vec<Station> = data
            .items
            .into_iter()
            .map(|item| {
                let address = item.address.label.unwrap_or_default();
                Station {
                    title: item.title,
                    address,
                    position: Coordinate::new(item.position.lat, item.position.lng),
                    reported_distance_m: item.distance,
                }
            })
            .collect();

        tracing::debug!("Discover service returned {} items", stations.len());
        Ok(stations)
    }
}
