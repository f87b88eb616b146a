use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use deps_upgrade_assistant::config::{self, AppConfig};
use deps_upgrade_assistant::runner::{self, RunPaths};

/// Report which pinned NuGet package versions support the baseline framework
#[derive(Parser, Debug)]
#[command(name = "deps-upgrade-assistant")]
#[command(version, about)]
struct Cli {
    /// Project root to scan for packages.config files
    #[arg(value_name = "PATH")]
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = config::data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;
    let _log_guard = deps_upgrade_assistant::log::init(&config::log_path())?;
    let app_config = AppConfig::load(&config::config_path())?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(runner::run(&cli.root, &app_config, &RunPaths::from_data_dir()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_positional_root() {
        let cli = Cli::try_parse_from(["deps-upgrade-assistant", "/src/solution"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/src/solution"));
    }

    #[test]
    fn cli_requires_root() {
        assert!(Cli::try_parse_from(["deps-upgrade-assistant"]).is_err());
    }

    #[test]
    fn cli_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["deps-upgrade-assistant", "/a", "/b"]).is_err());
    }
}
