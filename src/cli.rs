use crate::config::load_config;
#[cfg(feature = "png")]
use crate::render::write_output_png;
use crate::render::{ensure_extension, render_svg, write_output_svg};
use crate::storyboard::sample_storyboard;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sbr", version, about = "Storyboard renderer in Rust (plot points and gradient arrows)")]
pub struct Args {
    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width override
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Canvas height override
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }

    let scene = sample_storyboard().resolve(&config)?;
    let svg = render_svg(&scene, &config);

    if !config.save_image {
        print!("{svg}");
        return Ok(());
    }

    match args.output_format {
        OutputFormat::Svg => match args.output.as_deref() {
            Some(path) => write_output_svg(&svg, Some(&ensure_extension(path, "svg")))?,
            None => write_output_svg(&svg, None)?,
        },
        #[cfg(feature = "png")]
        OutputFormat::Png => {
            let output = args
                .output
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
            write_output_png(&svg, &ensure_extension(output, "png"), &config)?;
        }
        #[cfg(not(feature = "png"))]
        OutputFormat::Png => {
            return Err(anyhow::anyhow!("png output requires the 'png' feature"));
        }
    }

    Ok(())
}
