#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use guidebook_core::GuidebookContent;
use tracing_subscriber::EnvFilter;

/// Guidebook content, loaded once at startup
static CONTENT: OnceLock<GuidebookContent> = OnceLock::new();

/// Initial window width in logical pixels
static WINDOW_WIDTH: OnceLock<f64> = OnceLock::new();

/// Get the loaded guidebook content.
///
/// `main` stores the content before launch; the built-in copy only backs
/// callers that run without it.
pub fn get_content() -> &'static GuidebookContent {
    CONTENT.get_or_init(|| {
        GuidebookContent::builtin().unwrap_or_else(|e| panic!("built-in content is invalid: {e}"))
    })
}

/// Get the initial window width.
pub fn get_window_width() -> f64 {
    WINDOW_WIDTH.get().copied().unwrap_or(DEFAULT_WIDTH)
}

const DEFAULT_WIDTH: f64 = 420.0;
const DEFAULT_HEIGHT: f64 = 860.0;

/// Guidebook - digital guidebook for a holiday property
#[derive(Parser, Debug)]
#[command(name = "guidebook-desktop")]
#[command(about = "Digital guidebook for a holiday property")]
struct Args {
    /// Guidebook content file (JSON). Defaults to <config dir>/guidebook/guidebook.json
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// Override the window title
    #[arg(short, long)]
    title: Option<String>,
}

fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("guidebook").join("guidebook.json"))
}

/// Load the content file. An explicit path must load; the default path is
/// optional and anything wrong with it falls back to the built-in content.
fn load_content(explicit: Option<PathBuf>) -> anyhow::Result<GuidebookContent> {
    if let Some(path) = explicit {
        return GuidebookContent::from_path(&path)
            .with_context(|| format!("loading content from {}", path.display()));
    }

    match default_content_path() {
        Some(path) if path.exists() => match GuidebookContent::from_path(&path) {
            Ok(content) => Ok(content),
            Err(e) => {
                tracing::warn!("Ignoring {:?}: {}", path, e);
                Ok(GuidebookContent::builtin()?)
            }
        },
        _ => Ok(GuidebookContent::builtin()?),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("guidebook=info,guidebook_core=info")),
        )
        .init();

    let args = Args::parse();

    let content = load_content(args.content)?;
    let title = args
        .title
        .unwrap_or_else(|| format!("{} - Digital Guidebook", content.property.name));

    tracing::info!("Starting '{}' ({}x{})", title, args.width, args.height);

    let _ = CONTENT.set(content);
    let _ = WINDOW_WIDTH.set(args.width);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
