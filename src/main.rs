use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use footerbuilder::{config, FooterBuilder, MemoryPage, SnippetOptions};
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "footerbuilder", version, about = "Build the site footer as a page edit or a tag-manager snippet")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tag-manager snippet
    Snippet {
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Warn in the browser console when jQuery fails to load
        #[arg(long)]
        diagnostics: bool,
        /// Print the snippet's SHA-256 to stderr
        #[arg(long)]
        fingerprint: bool,
    },
    /// Mount the footer into an HTML file and print the resulting page
    Apply {
        #[command(flatten)]
        overrides: OverrideArgs,
        /// HTML page to edit
        #[arg(long)]
        page: PathBuf,
    },
    /// Print the resolved configuration as JSON
    Config {
        #[command(flatten)]
        overrides: OverrideArgs,
    },
}

#[derive(Args)]
struct OverrideArgs {
    /// JSON file with configuration overrides
    #[arg(long)]
    config: Option<PathBuf>,
    /// Single override, e.g. `--set mostrarNavegacao=true` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
}

impl OverrideArgs {
    fn load(&self) -> anyhow::Result<Map<String, Value>> {
        let mut overrides = match &self.config {
            Some(path) => read_overrides(path)?,
            None => Map::new(),
        };
        for pair in &self.set {
            let (key, value) = config::parse_assignment(pair)?;
            overrides.insert(key, value);
        }
        Ok(overrides)
    }
}

fn read_overrides(path: &Path) -> anyhow::Result<Map<String, Value>> {
    config::load_overrides(path)
        .with_context(|| format!("loading overrides from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Snippet {
            overrides,
            diagnostics,
            fingerprint,
        } => {
            let options = SnippetOptions {
                load_diagnostics: diagnostics,
                ..Default::default()
            };
            let snippet = FooterBuilder::new(&overrides.load()?).snippet_with(&options);
            if fingerprint {
                eprintln!("sha256: {}", snippet.fingerprint());
            }
            println!("{}", snippet);
        }
        Command::Apply { overrides, page } => {
            let html = fs::read_to_string(&page)
                .with_context(|| format!("reading page {}", page.display()))?;
            let mut doc = MemoryPage::parse(&html);
            let report = FooterBuilder::new(&overrides.load()?).apply_with_report(&mut doc);
            log::info!("mounted into {}: {:?}", page.display(), report);
            println!("{}", doc.to_html());
        }
        Command::Config { overrides } => {
            let resolved = config::resolve(&overrides.load()?);
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
    }
    Ok(())
}
