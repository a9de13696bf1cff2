use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;

use crate::rule::{parse_rule_list, Rule};
use crate::RuleApi;

/// Base URL used when neither flags, environment nor config set one.
pub const DEFAULT_URL: &str = "https://localhost:8443";

/// Connection settings for the web service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WsConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify: bool,
    pub timeout: Option<Duration>,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            username: None,
            password: None,
            verify: true,
            timeout: None,
        }
    }
}

/// Blocking [`RuleApi`] implementation backed by the web service.
pub struct RuleWsApi {
    client: Client,
    config: WsConfig,
}

impl RuleWsApi {
    pub fn new(config: WsConfig) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.verify)
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.url.trim_end_matches('/'), path)
    }

    fn get(&self, path: &str) -> Result<String> {
        let url = self.endpoint(path);
        debug!(url = %url, "GET");
        let mut req = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(user) = &self.config.username {
            req = req.basic_auth(user, self.config.password.as_ref());
        }
        let resp = req
            .send()
            .with_context(|| format!("failed to reach rule service at {url}"))?;
        let status = resp.status();
        let body = resp
            .text()
            .with_context(|| format!("failed to read response from {url}"))?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        if !status.is_success() {
            let body = body.trim();
            if body.is_empty() {
                bail!("rule service returned {status}");
            }
            bail!("rule service returned {status}: {body}");
        }
        Ok(body)
    }
}

impl RuleApi for RuleWsApi {
    fn get_rule_list(&self) -> Result<Vec<Rule>> {
        let body = self.get("v1/rules/")?;
        let rules = parse_rule_list(&body)?;
        debug!(count = rules.len(), "rules fetched");
        Ok(rules)
    }
}
