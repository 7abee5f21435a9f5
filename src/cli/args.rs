use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use favforge::{FitMode, IconSet, RasterBackend};

#[derive(Parser)]
#[command(name = "favforge", version, about = "favforge CLI")]
pub struct CliArgs {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate an icon set from a PNG or SVG source
    Generate(GenerateArgs),
    /// Replace near-white pixels with transparency in PNG files
    Transparent(TransparentArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Source image (PNG, JPEG or SVG)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory the icons are written to
    #[arg(short, long, default_value = "icons")]
    pub output_dir: PathBuf,

    /// JSON preset with generation parameters; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Built-in icon set (essential, full, web-app)
    #[arg(short = 's', long, value_enum)]
    pub set: Option<IconSet>,

    /// Custom icon manifest (JSON); replaces the built-in set
    #[arg(short, long, conflicts_with = "set")]
    pub manifest: Option<PathBuf>,

    /// How to handle targets whose aspect differs from the source (stretch, pad)
    #[arg(long, value_enum)]
    pub fit: Option<FitMode>,

    /// SVG rasterizer (resvg, magick)
    #[arg(long, value_enum)]
    pub backend: Option<RasterBackend>,

    /// ImageMagick program used by the magick backend
    #[arg(long)]
    pub magick_program: Option<String>,

    /// Also run the transparency pass over every generated icon
    #[arg(long, default_value_t = false)]
    pub transparent: bool,

    /// Skip the transparency pass even if the preset enables it
    #[arg(long, default_value_t = false, conflicts_with = "transparent")]
    pub no_transparent: bool,

    /// Channel threshold for the transparency pass (pixels strictly above are cleared)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Write the web app manifest `icons` fragment to this file (inside the output directory)
    #[arg(long)]
    pub webmanifest: Option<String>,

    /// Prefix for `src` entries in the web app manifest fragment (e.g. /static/icons)
    #[arg(long)]
    pub src_prefix: Option<String>,

    /// Stop at the first icon that fails instead of continuing
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}

#[derive(Args)]
pub struct TransparentArgs {
    /// PNG files and/or directories of PNG files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output file (only with a single input file); default overwrites the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Channel threshold (pixels with every channel strictly above are cleared)
    #[arg(long, default_value_t = favforge::DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Stop at the first file that fails instead of continuing
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}
