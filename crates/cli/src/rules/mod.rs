//! Rule commands. Each command resolves its settings through
//! [`connect`] and then talks to the rule API.

use anyhow::Result;
use ruleapi::{RuleApi, RuleWsApi};
use std::io::{self, Write};
use tracing::{debug, info};

use crate::args::{CommonArgs, GetRuleListCli};
use crate::config::{load_selected_config, resolve_ws_config};
use crate::output::print_lines;

/// Builds a web service client from the common options, environment and
/// config file.
pub fn connect(args: &CommonArgs) -> Result<RuleWsApi> {
    let config = load_selected_config(args)?;
    let ws = resolve_ws_config(args, &config);
    debug!(
        url = %ws.url,
        user = ws.username.as_deref().unwrap_or("-"),
        verify = ws.verify,
        "connecting to rule service"
    );
    RuleWsApi::new(ws)
}

/// Fetches the rule list and prints one rule per line.
///
/// The whole list is fetched before anything is written, so a failing call
/// leaves `out` untouched.
pub fn get_rule_list<A, W>(api: &A, out: &mut W) -> Result<()>
where
    A: RuleApi + ?Sized,
    W: Write,
{
    let rules = api.get_rule_list()?;
    info!(count = rules.len(), "Rules listed");
    print_lines(out, &rules)
}

pub fn run_get_rule_list(cli: &GetRuleListCli) -> Result<()> {
    let api = connect(&cli.common)?;
    let stdout = io::stdout();
    get_rule_list(&api, &mut stdout.lock())
}
