//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every stage
    Full,
    /// Layer roll-ups and the decision only
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for ethica
#[derive(Parser, Debug)]
#[command(name = "ethica")]
#[command(author, version, about = "Multi-stage decision analysis through layered LLM evaluation")]
#[command(long_about = r#"
Ethica evaluates a proposed action through ten fixed analysis stages grouped
into four layers:

  Strategic:   purpose validation, insight generation, contextual analysis
  Operational: opportunity identification, risk assessment, conflict resolution
  Tactical:    sustainability evaluation, implementation planning
  Execution:   integration, final decision

Proposals that fail purpose validation are rejected immediately without
running the remaining stages.

Configuration files are loaded from (in priority order):
1. ETHICA_* environment variables
2. --config <path>     Explicit config file
3. ./ethica.toml       Project-level config
4. ~/.config/ethica/config.toml   Global config

Example:
  ethica "Make public transit free city-wide" -c "Pilot funding approved"
  ethica "Deploy the triage model" -s "Patients" -s "Nurses" -o json
  ethica --serve --port 8000
"#)]
pub struct Cli {
    /// The proposed action to analyze (not required with --serve)
    pub action: Option<String>,

    /// Supporting context for the action
    #[arg(short, long, default_value = "")]
    pub context: String,

    /// Known stakeholder (can be specified multiple times)
    #[arg(short, long = "stakeholder", value_name = "NAME")]
    pub stakeholders: Vec<String>,

    /// Run the HTTP API server instead of a one-shot analysis
    #[arg(long)]
    pub serve: bool,

    /// Port for the HTTP API server
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Write the full result JSON to this path (auto-named when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Skip writing the result file
    #[arg(long)]
    pub no_export: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_invocation() {
        let cli = Cli::parse_from([
            "ethica",
            "Make transit free",
            "-c",
            "Pilot funding approved",
            "-s",
            "Riders",
            "-s",
            "Council",
        ]);
        assert_eq!(cli.action.as_deref(), Some("Make transit free"));
        assert_eq!(cli.stakeholders, vec!["Riders", "Council"]);
        assert!(!cli.serve);
        assert_eq!(cli.output, OutputFormat::Full);
    }

    #[test]
    fn test_serve_invocation_needs_no_action() {
        let cli = Cli::parse_from(["ethica", "--serve", "--port", "9001"]);
        assert!(cli.action.is_none());
        assert!(cli.serve);
        assert_eq!(cli.port, 9001);
    }
}
