//! Access to the Tortuga Simple Policy Engine rules exposed by the
//! web service, plus the [`Rule`] type those calls return.

use anyhow::Result;

mod client;
mod rule;

pub use client::{RuleWsApi, WsConfig, DEFAULT_URL};
pub use rule::{parse_rule_list, Rule};

/// Operations of the rule API used by the command-line tools.
pub trait RuleApi {
    /// Returns every active rule, in the order the service reports them.
    fn get_rule_list(&self) -> Result<Vec<Rule>>;
}
