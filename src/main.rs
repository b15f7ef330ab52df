use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_tools::models::{PipelineConfig, CONFIG_FILE_NAME, DEFAULT_CONFIG_YAML};
use asset_tools::services::{dimensions, downscale, heic, logo_variants, svg_logo, LogoRecolorer};
use pixel_recolor::TargetColor;

#[derive(Parser)]
#[command(name = "asset-tools")]
#[command(about = "Image asset utilities for the website")]
struct Cli {
    /// Configuration file (default: <project-root>/asset-tools.yaml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory that configured paths are relative to
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the colored logo variants from the white source logo
    Logo,
    /// Recolor a single image with a target color
    Recolor {
        /// Source image (white or grayscale artwork on transparency)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Target color as hex ("#a0c8f0", "a0c8f0", "#abc") or "r,g,b"
        #[arg(short, long)]
        color: TargetColor,
    },
    /// Recolor the SVG logo and build the padded pattern variant
    Svg {
        /// Also render the padded SVG to a PNG this many pixels wide
        #[arg(long, value_name = "WIDTH")]
        rasterize: Option<u32>,
    },
    /// Convert HEIC photos to JPEG
    Heic {
        /// Directory to scan (default: heic.input_dir from the config)
        dir: Option<PathBuf>,

        /// JPEG quality 1-100 (default: heic.quality from the config)
        #[arg(short, long)]
        quality: Option<u8>,
    },
    /// Report image dimensions and orientation for layout decisions
    Dimensions {
        /// Print a JSON array instead of the grouped report
        #[arg(long)]
        json: bool,
    },
    /// Downscale oversized images (dry run unless --apply)
    Resize {
        /// Rewrite the files instead of only reporting
        #[arg(long)]
        apply: bool,
    },
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_tools=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let root = cli.project_root.as_path();
    let explicit = cli.config.as_deref();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Logo) => {
            let config = load_config(explicit, root)?;
            logo_variants::run(&config, root, &mut out).context("Logo recoloring failed")?;
        }
        Some(Commands::Recolor {
            input,
            output,
            color,
        }) => run_recolor_command(&input, &output, color, &mut out)?,
        Some(Commands::Svg { rasterize }) => {
            let config = load_config(explicit, root)?;
            svg_logo::run(&config.svg, root, rasterize, &mut out)
                .context("SVG logo recoloring failed")?;
        }
        Some(Commands::Heic { dir, quality }) => {
            let config = load_config(explicit, root)?;
            let dir = root.join(dir.unwrap_or(config.heic.input_dir));
            let quality = quality.unwrap_or(config.heic.quality);
            heic::run(&dir, quality, &mut out).context("Failed to write report")?;
        }
        Some(Commands::Dimensions { json }) => {
            let config = load_config(explicit, root)?;
            let public_dir = config.public_dir_in(root);
            dimensions::run(&public_dir, &config.dimensions, json, &mut out)
                .context("Failed to write report")?;
        }
        Some(Commands::Resize { apply }) => {
            let config = load_config(explicit, root)?;
            let public_dir = config.public_dir_in(root);
            downscale::run(&public_dir, &config.resize, apply, &mut out)
                .context("Failed to write report")?;
        }
        Some(Commands::Init { force }) => run_init_command(explicit, root, force, &mut out)?,
        None => run_status_command(explicit, root, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn load_config(explicit: Option<&Path>, root: &Path) -> anyhow::Result<PipelineConfig> {
    PipelineConfig::load(explicit, root).context("Failed to load configuration")
}

/// Recolor one explicitly named file. A missing source is an error here.
fn run_recolor_command<W: Write>(
    input: &Path,
    output: &Path,
    color: TargetColor,
    out: &mut W,
) -> anyhow::Result<()> {
    let result = LogoRecolorer::new(color)
        .recolor_file(input, output)
        .with_context(|| format!("Failed to recolor {}", input.display()))?;

    writeln!(
        out,
        "Created {} logo at: {} ({}x{})",
        color,
        result.path.display(),
        result.width,
        result.height
    )?;
    Ok(())
}

/// Write the embedded default configuration
fn run_init_command<W: Write>(
    explicit: Option<&Path>,
    root: &Path,
    force: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));

    if path.exists() && !force {
        writeln!(
            out,
            "Skipped {} (exists, use --force to overwrite)",
            path.display()
        )?;
        return Ok(());
    }

    std::fs::write(&path, DEFAULT_CONFIG_YAML)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writeln!(out, "Wrote default configuration to {}", path.display())?;
    Ok(())
}

/// Display resolved paths and available commands
fn run_status_command<W: Write>(
    explicit: Option<&Path>,
    root: &Path,
    out: &mut W,
) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config = load_config(explicit, root)?;
    let implicit = root.join(CONFIG_FILE_NAME);
    let config_source = match explicit {
        Some(path) => path.display().to_string(),
        None if implicit.is_file() => implicit.display().to_string(),
        None => "built-in defaults".to_string(),
    };

    fn presence(path: &Path) -> &'static str {
        if path.exists() {
            "found"
        } else {
            "missing"
        }
    }

    let public_dir = config.public_dir_in(root);
    let logo = public_dir.join(&config.logo.input);
    let svg = root.join(&config.svg.input);

    writeln!(out, "asset-tools v{VERSION}")?;
    writeln!(out, "Image asset utilities for the website\n")?;

    writeln!(out, "Paths:")?;
    writeln!(out, "  Project root: {}", root.display())?;
    writeln!(out, "  Config:       {config_source}")?;
    writeln!(
        out,
        "  Public dir:   {} ({})",
        public_dir.display(),
        presence(&public_dir)
    )?;
    writeln!(out, "  Logo source:  {} ({})", logo.display(), presence(&logo))?;
    writeln!(out, "  SVG source:   {} ({})", svg.display(), presence(&svg))?;

    writeln!(out, "\nLogo variants:")?;
    for variant in &config.logo.variants {
        writeln!(
            out,
            "  {:<16} {} -> {}",
            variant.kind,
            variant.color,
            variant.output.display()
        )?;
    }

    writeln!(out, "\nCommands:")?;
    writeln!(out, "  asset-tools logo         Create the colored logo variants")?;
    writeln!(out, "  asset-tools recolor      Recolor a single image")?;
    writeln!(out, "  asset-tools svg          Recolor the SVG logo and pad it")?;
    writeln!(out, "  asset-tools heic         Convert HEIC photos to JPEG")?;
    writeln!(out, "  asset-tools dimensions   Report image dimensions")?;
    writeln!(out, "  asset-tools resize       Downscale oversized images")?;
    writeln!(out, "  asset-tools init         Write the default config file")?;
    writeln!(out, "\nRun 'asset-tools --help' for more details.")?;
    Ok(())
}
