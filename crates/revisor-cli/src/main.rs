//! revisor binary.
//!
//! Loads a JSON fixture document (revisions, people, attachments), compares
//! two revisions through the full pipeline, and prints a side-by-side diff
//! report.

mod report;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use revisor_compare::{Comparer, attachments::attachment_fetches, panes::PanePair, render};
use revisor_core::RevisionId;
use revisor_mem::MemorySource;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use report::ReportConfig;

#[derive(Parser)]
#[command(author, version, about = "Side-by-side revision comparison")]
struct Cli {
  /// Path to the JSON fixture file with revisions, people, and attachments.
  #[arg(short, long)]
  fixtures: PathBuf,

  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "revisor.toml")]
  config: PathBuf,

  /// The left-hand (usually older) revision id.
  left: RevisionId,

  /// The right-hand (usually newer) revision id.
  right: RevisionId,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("REVISOR"))
    .build()
    .context("failed to read config file")?;
  let report_config: ReportConfig = settings
    .try_deserialize()
    .context("failed to deserialise ReportConfig")?;

  let raw = std::fs::read_to_string(&cli.fixtures)
    .with_context(|| format!("failed to read fixtures at {:?}", cli.fixtures))?;
  let source = Arc::new(
    MemorySource::from_json(&raw).context("failed to parse fixtures")?,
  );

  let comparer = Comparer::new(Arc::clone(&source), Arc::clone(&source));
  let comparison = comparer
    .compare(cli.left, cli.right)
    .await
    .with_context(|| {
      format!("failed to compare revisions {} and {}", cli.left, cli.right)
    })?;

  // Attachment listings run independently of the comparison itself.
  let sides = vec![comparison.left.clone(), comparison.right.clone()];
  let fetches = attachment_fetches(&source, &sides);

  let sections = vec![comparison.paired.clone()];
  let mut panes = PanePair::for_sections(&sections);
  render::render_sections(&sections, &mut panes);

  let stdout = std::io::stdout();
  let mut out = stdout.lock();
  report::write_header(&mut out, &comparison)?;
  report::write_panes(&mut out, &panes, &report_config)?;

  for fetch in fetches {
    let attachments = fetch.await.context("attachment fetch panicked")??;
    if !attachments.is_empty() {
      use std::io::Write as _;
      writeln!(out, "\nattachments ({}):", attachments.len())?;
      for attachment in attachments {
        writeln!(out, "  {} (#{})", attachment.title, attachment.id)?;
      }
    }
  }

  Ok(())
}
