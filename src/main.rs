use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use tuido::config::Config;
use tuido::logging::init_tracing;
use tuido::store::TaskStore;
use tuido::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "tuido", version, about = "Terminal task tracker")]
struct Cli {
    /// Config file path (default: {config_dir}/tuido/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tasks file path, overriding config and the default location.
    #[arg(long)]
    tasks: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let store = TaskStore::new(resolve_tasks_path(cli.tasks, &config));
    tracing::info!(path = %store.path().display(), "starting");

    runtime::run(&config, store).context("terminal UI failed")?;
    Ok(())
}

/// CLI flag wins over config; both fall back to the platform data dir.
fn resolve_tasks_path(cli_override: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_override
        .or_else(|| config.storage.path.clone())
        .unwrap_or_else(TaskStore::default_path)
}

#[cfg(test)]
mod tests {
    use super::resolve_tasks_path;
    use tuido::config::Config;
    use std::path::PathBuf;

    #[test]
    fn cli_override_wins() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/from/config.json"));
        let path = resolve_tasks_path(Some(PathBuf::from("/from/cli.json")), &config);
        assert_eq!(path, PathBuf::from("/from/cli.json"));
    }

    #[test]
    fn config_path_used_without_cli_override() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/from/config.json"));
        let path = resolve_tasks_path(None, &config);
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn defaults_when_nothing_is_configured() {
        let path = resolve_tasks_path(None, &Config::default());
        assert!(path.ends_with(PathBuf::from("tuido").join("tasks.json")));
    }
}
