use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args as ClapArgs, Parser};
use std::path::PathBuf;

/// Description shown by `get-rule-list --help`.
pub const GET_RULE_LIST_DESCRIPTION: &str = "\
The get-rule-list tool returns the list of Tortuga Simple Policy Engine
rules that are active in the system.  New rules can be added with
add-rule.";

fn parse_timeout(s: &str) -> Result<u64, String> {
    let v: u64 = s
        .parse()
        .map_err(|e: std::num::ParseIntError| e.to_string())?;
    if v == 0 {
        Err("timeout must be greater than 0".into())
    } else {
        Ok(v)
    }
}

/// Options shared by every rule command.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Show version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
    /// Base URL of the Tortuga web service
    #[arg(long, env = "TORTUGA_WS_URL")]
    pub url: Option<String>,
    /// Web service user name
    #[arg(long, env = "TORTUGA_WS_USERNAME")]
    pub username: Option<String>,
    /// Web service password
    #[arg(long, env = "TORTUGA_WS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// Skip TLS certificate verification
    #[arg(
        long = "no-verify",
        env = "TORTUGA_WS_NO_VERIFY",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub no_verify: bool,
    /// Request timeout in seconds
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<u64>,
    /// Path to the configuration file
    #[arg(long, env = "TORTUGA_CONFIG")]
    pub config: Option<PathBuf>,
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "get-rule-list",
    author,
    version,
    about = GET_RULE_LIST_DESCRIPTION,
    disable_version_flag = true
)]
pub struct GetRuleListCli {
    #[command(flatten)]
    pub common: CommonArgs,
}
