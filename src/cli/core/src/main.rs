/* src/cli/core/src/main.rs */

mod check;
mod config;
mod serve;
mod sitemap;
mod translate;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unisite_core::{Locale, RoutingTable};

use config::{SiteConfig, find_site_config, load_site_config};

#[derive(Parser)]
#[command(name = "unisite", about = "Locale-aware routing for the bilingual university site")]
struct Cli {
  /// Path to unisite.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve pages, menu, sitemap.xml and robots.txt
  Serve {
    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Write sitemap.xml built from the live Content API
  Sitemap {
    /// Output file path
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Translate a public path into another locale
  Translate {
    /// Public path, e.g. /universitet/tarix or /en/university/history
    path: String,
    /// Target locale (az or en)
    #[arg(long)]
    to: Locale,
  },
  /// Validate unisite.toml and the routing table
  Check,
}

/// Resolve config path (explicit or auto-detected), parse it and apply env overrides
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, SiteConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_site_config(&cwd)?
    }
  };
  let mut config = load_site_config(&path)?;
  config.apply_env(|key| std::env::var(key).ok())?;
  Ok((path, config))
}

/// Routing table from unisite.toml when one is found, otherwise the built-in table
fn try_routing_table(explicit: Option<PathBuf>) -> Result<RoutingTable> {
  if explicit.is_some() {
    return resolve_config(explicit)?.1.routing_table();
  }
  let found = std::env::current_dir().ok().and_then(|cwd| find_site_config(&cwd).ok());
  match found {
    Some(path) => load_site_config(&path)?.routing_table(),
    None => Ok(RoutingTable::builtin()),
  }
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing();

  match cli.command {
    Command::Serve { port } => {
      ui::banner("serve");
      let (_, mut config) = resolve_config(cli.config)?;
      if let Some(port) = port {
        config.server.port = port;
      }
      serve::run_serve(&config).await?;
    }
    Command::Sitemap { out } => {
      ui::banner("sitemap");
      let (_, config) = resolve_config(cli.config)?;
      let out = out.unwrap_or_else(|| PathBuf::from("sitemap.xml"));
      sitemap::run_sitemap(&config, &out).await?;
    }
    Command::Translate { path, to } => {
      let table = try_routing_table(cli.config)?;
      translate::run_translate(&table, &path, to);
    }
    Command::Check => {
      ui::banner("check");
      let (path, config) = match resolve_config(cli.config) {
        Ok(found) => found,
        Err(e) => {
          ui::fail(&format!("{e:#}"));
          return Err(e);
        }
      };
      check::run_check(&path, &config)?;
      ui::blank();
    }
  }
  Ok(())
}
