//! kigo - Art + Haiku Studio CLI
//!
//! Command-line surface for the studio engine. One-shot subcommands cover
//! image generation, haiku generation, and catalog listings; `kigo session`
//! opens an interactive loop that owns a gallery for its lifetime.
//!
//! # Usage
//!
//! ```bash
//! # Generate an image (requires CLIPDROP_API_KEY; falls back to a
//! # placeholder reference without one)
//! kigo generate "misty mountain lake" --style realistic
//!
//! # Generate a haiku from text, export it as a .txt file
//! kigo haiku "old man feeding birds" --export ./poems
//!
//! # Generate a haiku from a mood
//! kigo mood serene
//!
//! # Interactive session with a gallery
//! kigo session
//! ```
//!
//! # Environment Variables
//!
//! - `CLIPDROP_API_KEY`: ClipDrop API key
//! - `CLIPDROP_API_URL`: Override the ClipDrop endpoint
//! - `KIGO_STYLE`: Default art style id
//! - `KIGO_MEDIA_DIR`: Directory for persisted image bytes
//! - `KIGO_TIMEOUT_SECS`: Generation timeout before placeholder fallback
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)
//!
//! # Files
//!
//! - Config: `$XDG_CONFIG_HOME/kigo/studio.toml` (or `~/.config/kigo/studio.toml`)

mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use studio_core::{
    default_config_path, load_config_from_path, ClipDropBackend, ConfigOverrides, Emotion,
    GeneratedImage, Haiku, Studio, StudioConfig,
};

#[derive(Parser)]
#[command(name = "kigo", version, about = "Text-to-image gallery and haiku studio")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for persisted image bytes
    #[arg(long, global = true, value_name = "DIR")]
    media_dir: Option<PathBuf>,

    /// Generation timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an image from a prompt
    Generate {
        /// The text prompt
        prompt: String,
        /// Art style id (see `kigo styles`)
        #[arg(long)]
        style: Option<String>,
        /// Also download the result into this directory
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Generate a haiku from free text
    Haiku {
        /// The text to classify
        text: String,
        /// Explicit emotion label (random when omitted)
        #[arg(long)]
        emotion: Option<Emotion>,
        /// Export the poem as a .txt file into this directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a haiku driven purely by mood
    Mood {
        /// The emotion label
        emotion: Emotion,
        /// Export the poem as a .txt file into this directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List prompt suggestions
    Suggest,
    /// List the art style catalog
    Styles,
    /// Interactive session with a gallery
    Session,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config_path = cli.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(config_path)?;

    let mut overrides = ConfigOverrides::new();
    if let Some(dir) = cli.media_dir.clone() {
        overrides = overrides.with_media_dir(dir);
    }
    if let Some(secs) = cli.timeout_secs {
        overrides = overrides.with_timeout_secs(secs);
    }
    overrides.apply(&mut config);
    config.validate()?;
    debug!(source = %config.source(), "Configuration resolved");

    let backend = ClipDropBackend::new(
        config.api_url.clone(),
        config.api_key.clone(),
        config.timeout,
    )?;
    let mut studio = Studio::new(backend, StudioConfig::from_file(&config));

    match cli.command {
        Command::Generate { prompt, style, out } => {
            let style = style.unwrap_or_else(|| studio.config().default_style.clone());
            let image = studio.generate_image(&prompt, &style).await;
            print_image(&image);
            if let Some(dir) = out {
                let path = studio.download_image(&image.id, &dir).await?;
                println!("saved: {}", path.display());
            }
        }
        Command::Haiku {
            text,
            emotion,
            export,
            json,
        } => {
            let haiku = studio.compose_from_text(&text, emotion);
            print_haiku(&haiku, json)?;
            if let Some(dir) = export {
                let path = studio.export_haiku(&haiku, &dir).await?;
                println!("exported: {}", path.display());
            }
        }
        Command::Mood {
            emotion,
            export,
            json,
        } => {
            let haiku = studio.compose_from_emotion(emotion);
            print_haiku(&haiku, json)?;
            if let Some(dir) = export {
                let path = studio.export_haiku(&haiku, &dir).await?;
                println!("exported: {}", path.display());
            }
        }
        Command::Suggest => {
            for (i, suggestion) in studio.suggestions().iter().enumerate() {
                println!("{:>2}. {suggestion}", i + 1);
            }
        }
        Command::Styles => print_styles(&studio),
        Command::Session => session::run(&mut studio).await?,
    }

    Ok(())
}

/// Initialize logging; the library never installs a subscriber
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("studio_cli={level}").parse()?)
                .add_directive(format!("studio_core={level}").parse()?),
        )
        .with_target(true)
        .init();
    Ok(())
}

fn print_image(image: &GeneratedImage) {
    println!("id:     {}", image.id);
    println!("prompt: {}", image.prompt);
    println!("style:  {}", image.style);
    println!("image:  {}", image.reference);
}

fn print_haiku(haiku: &Haiku, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(haiku)?);
        return Ok(());
    }
    let accent = ansi_accent(haiku.emotion);
    for line in &haiku.lines {
        println!("{accent}{line}\x1b[0m");
    }
    println!(
        "  - {} / {} ({})",
        haiku.emotion,
        haiku.theme,
        haiku.created_at_local()
    );
    Ok(())
}

fn print_styles<B: studio_core::ImageBackend>(studio: &Studio<B>) {
    let default_id = &studio.config().default_style;
    for style in studio.styles().iter() {
        let marker = if style.id == default_id { "*" } else { " " };
        println!("{marker} {:<14} {:<14} {}", style.id, style.name, style.description);
    }
}

/// Truecolor escape for an emotion's accent color
fn ansi_accent(emotion: Emotion) -> String {
    let hex = emotion.accent_color().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(255)
    };
    format!("\x1b[38;2;{};{};{}m", channel(0..2), channel(2..4), channel(4..6))
}
