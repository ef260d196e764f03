//! HTTP client for the convoy server API.

use anyhow::{Context, Result};
use convoy_core::models::{ConvoyRequest, ConvoyUpdate, Incident, ThreatZone};
use reqwest::Client;

use crate::snapshot::ThreatSnapshot;

/// Thin async client over the convoy server REST API.
pub struct ConvoyClient {
    client: Client,
    base_url: String,
}

impl ConvoyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Submit a convoy and get back its planned route.
    pub async fn create_convoy(&self, request: &ConvoyRequest) -> Result<ConvoyUpdate> {
        let resp = self
            .client
            .post(format!("{}/api/convoys", self.base_url))
            .json(request)
            .send()
            .await
            .context("Failed to reach convoy server")?
            .error_for_status()
            .context("Convoy server rejected the request")?;
        Ok(resp.json().await?)
    }

    /// Fetch the server's current threat picture.
    pub async fn fetch_snapshot(&self) -> Result<ThreatSnapshot> {
        let threat_zones: Vec<ThreatZone> = self
            .client
            .get(format!("{}/api/threat_zones", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let incidents: Vec<Incident> = self
            .client
            .get(format!("{}/api/incidents", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(ThreatSnapshot {
            threat_zones,
            incidents,
        })
    }
}
