use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use textsummary::config::Config;
use textsummary::logging::init_tracing;

/// Summarize text with a remote summarization endpoint.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the TOML config file (default: <config dir>/textsummary/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Summarization endpoint URL, overriding the config file.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    textsummary::ui::run(config).context("terminal UI failed")?;
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    match &cli.endpoint {
        Some(url) => Ok(config.with_endpoint(url.clone())?),
        None => Ok(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_flag_overrides_default() {
        let cli = Cli::parse_from([
            "textsummary",
            "--config",
            "/nonexistent/textsummary.toml",
            "--endpoint",
            "http://127.0.0.1:7860/summarize",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.endpoint.url, "http://127.0.0.1:7860/summarize");
    }

    #[test]
    fn invalid_endpoint_flag_is_rejected() {
        let cli = Cli::parse_from([
            "textsummary",
            "--config",
            "/nonexistent/textsummary.toml",
            "--endpoint",
            "ftp://example.com",
        ]);
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
