//! Entry point for `get-rule-list`.
//! Parses the command line, sets up logging and hands over to the
//! rule command handler.

use clap::Parser;
use tortuga_rule_cli::args::GetRuleListCli;
use tortuga_rule_cli::logging::init_logging;
use tortuga_rule_cli::rules::run_get_rule_list;

fn main() -> anyhow::Result<()> {
    let cli = GetRuleListCli::parse();
    init_logging(cli.common.debug);
    run_get_rule_list(&cli)
}
