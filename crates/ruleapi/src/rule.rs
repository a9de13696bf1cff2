use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Policy engine rule as reported by the web service.
pub struct Rule {
    pub application_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Rule {
    pub fn new(application_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            name: name.into(),
            description: None,
            status: None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.application_name, self.name)
    }
}

#[derive(Deserialize)]
struct RuleListResponse {
    #[serde(default)]
    rules: Vec<Rule>,
}

/// Decodes the body of a `GET v1/rules/` response.
///
/// # Example
///
/// ```
/// let rules = ruleapi::parse_rule_list(
///     r#"{"rules": [{"applicationName": "compute", "name": "idle-nodes"}]}"#,
/// ).unwrap();
/// assert_eq!(rules[0].to_string(), "compute/idle-nodes");
/// ```
pub fn parse_rule_list(body: &str) -> Result<Vec<Rule>> {
    let resp: RuleListResponse =
        serde_json::from_str(body).context("failed to decode rule list response")?;
    Ok(resp.rules)
}
