use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::error::Error;

use crate::config::Config;
use crate::models::{Coordinate, RouteSummary};

/// HERE Router v8 response structure
#[derive(Debug, Deserialize)]
struct RouterResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct Section {
    polyline: String,
    #[serde(rename = "travelSummary", default)]
    travel_summary: TravelSummary,
    #[serde(default)]
    actions: Vec<Action>,
}

#[derive(Debug, Deserialize, Default)]
struct TravelSummary {
    #[serde(default)]
    length: u64,
    #[serde(default)]
    duration: u64,
}

#[derive(Debug, Deserialize)]
struct Action {
    instruction: Option<String>,
}

/// Client for the HERE Router v8 API.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    include_instructions: bool,
}

impl RoutingClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("station-finder/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.router_base_url.trim_end_matches('/').to_string(),
            api_key: config.here_api_key.clone(),
            include_instructions: config.show_instructions,
        })
    }

    /// Calculate a fast car route between two coordinates and flatten the
    /// sections into a single drawable summary.
    pub async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteSummary> {
        tracing::info!(
            "Requesting route ({}, {}) -> ({}, {})",
            origin.latitude,
            origin.longitude,
            destination.latitude,
            destination.longitude
        );

        let url = format!("{}/v8/routes", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("routingMode", "fast"),
                ("transportMode", "car"),
                (
                    "origin",
                    &format!("{},{}", origin.latitude, origin.longitude),
                ),
                (
                    "destination",
                    &format!("{},{}", destination.latitude, destination.longitude),
                ),
                ("return", "polyline,travelSummary,actions"),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| {
                let mut error_msg = format!("Routing request failed: {}", e);
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
            tracing::warn!("Routing service returned HTTP {}", status);
            return Err(anyhow!("Routing service returned error: {}", status));
        }

        let data: RouterResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse routing response: {}", e))?;

        let route = data
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Routing service returned no routes"))?;

        Ok(self.summarize(route))
    }

    fn summarize(&self, route: Route) -> RouteSummary {
        let mut polylines = Vec::new();
        let mut length_m = 0;
        let mut duration_s = 0;
        let mut instructions = Vec::new();

        for section in route.sections {
            length_m += section.travel_summary.length;
            duration_s += section.travel_summary.duration;
            if self.include_instructions {
                instructions.extend(
                    section
                        .actions
                        .into_iter()
                        .filter_map(|action| action.instruction),
                );
            }
            polylines.push(section.polyline);
        }

        RouteSummary {
            polylines,
            length_m,
            duration_s,
            instructions,
        }
    }
}
