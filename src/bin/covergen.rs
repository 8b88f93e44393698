use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "covergen", version, about = "Generate social cover images")]
struct Cli {
    /// Main title text (required unless --spec is given).
    #[arg(long)]
    title: Option<String>,

    /// Subtitle, or list items separated by `|` for the list template.
    #[arg(long)]
    subtitle: Option<String>,

    /// Template style.
    #[arg(long, default_value = "gradient")]
    template: String,

    /// Color scheme.
    #[arg(long, default_value = "warm")]
    color: String,

    /// Output file path (defaults to workspace/<timestamp>/cover.png).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Explicit list item for the list template (repeatable).
    #[arg(long = "item")]
    items: Vec<String>,

    /// Load the whole cover spec from a JSON file instead of direct flags.
    #[arg(long)]
    spec: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let spec = match &cli.spec {
        Some(path) => read_spec_json(path)?,
        None => spec_from_flags(&cli)?,
    };

    let path = covergen::write_cover(&spec)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn spec_from_flags(cli: &Cli) -> anyhow::Result<covergen::CoverSpec> {
    let title = cli
        .title
        .clone()
        .context("--title is required unless --spec is given")?;

    Ok(covergen::CoverSpec {
        title,
        subtitle: cli.subtitle.clone(),
        template: cli.template.clone(),
        color: cli.color.clone(),
        items: if cli.items.is_empty() {
            None
        } else {
            Some(cli.items.clone())
        },
        output: cli.output.clone(),
    })
}

fn read_spec_json(path: &Path) -> anyhow::Result<covergen::CoverSpec> {
    let f = File::open(path).with_context(|| format!("open cover spec '{}'", path.display()))?;
    let r = BufReader::new(f);
    let spec: covergen::CoverSpec =
        serde_json::from_reader(r).with_context(|| "parse cover spec JSON")?;
    Ok(spec)
}
