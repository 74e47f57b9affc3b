use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ascii_art::{ConvertOptions, Converter, Gradient};
use clap::{Parser, ValueEnum};
use log::debug;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert an image to ASCII art")]
struct Cli {
    /// Path to the input image (jpg/png/etc.)
    #[arg(short, long)]
    input: PathBuf,
    /// Output width in characters
    #[arg(short, long, default_value_t = 100)]
    width: u32,
    /// Vertical scale factor compensating for character aspect ratio
    #[arg(short = 's', long = "y-scale", default_value_t = 0.5)]
    y_scale: f32,
    /// Invert brightness mapping (bright pixels use darker characters)
    #[arg(long, default_value_t = false)]
    invert: bool,
    /// Gradient preset used when no custom gradient is given
    #[arg(long, value_enum, default_value = "standard")]
    preset: GradientPreset,
    /// Custom gradient string from darkest to lightest (e.g. "@%#*+=-:. ")
    #[arg(long)]
    gradient: Option<String>,
    /// Write the ASCII art to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum GradientPreset {
    Standard,
    Detailed,
    Blocks,
    Binary,
}

impl GradientPreset {
    fn to_gradient(self) -> Gradient {
        match self {
            GradientPreset::Standard => Gradient::standard(),
            GradientPreset::Detailed => Gradient::detailed(),
            GradientPreset::Blocks => Gradient::blocks(),
            GradientPreset::Binary => Gradient::binary(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let gradient = match &cli.gradient {
        Some(chars) => Gradient::new(chars.clone())?,
        None => cli.preset.to_gradient(),
    };
    let options = ConvertOptions {
        width: cli.width,
        y_scale: cli.y_scale,
        invert: cli.invert,
        gradient,
    };

    let canvas = Converter::default()
        .convert_path(&cli.input, &options)
        .with_context(|| format!("failed to convert {:?}", cli.input))?;
    debug!("converted {:?} to {} columns x {} rows", cli.input, canvas.width(), canvas.height());

    match &cli.output {
        Some(path) => {
            fs::write(path, canvas.to_text())
                .with_context(|| format!("failed to write {:?}", path))?;
            println!("ASCII art written to: {}", path.display());
        },
        None => println!("{canvas}"),
    }

    Ok(())
}
