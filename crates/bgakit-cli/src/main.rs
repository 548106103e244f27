use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, LevelFilter};

use bgakit::pipeline::{self, FootprintParams, OutputFormat};
use bgakit::plot::PinCorner;

/// Generate a PCB footprint from a photograph of a BGA package.
#[derive(Parser, Debug)]
#[command(name = "bgakit", version, about)]
struct Cli {
    /// Input photograph (any common raster format, read as grayscale).
    image: PathBuf,

    /// Number of ball columns in the photograph.
    #[arg(long)]
    nx: usize,

    /// Number of ball rows in the photograph.
    #[arg(long)]
    ny: usize,

    /// Ball pitch in mm.
    #[arg(long)]
    pitch: f64,

    /// Pad diameter in mm.
    #[arg(long)]
    pad_diameter: f64,

    /// Package body width in mm.
    #[arg(long)]
    width: f64,

    /// Package body height in mm.
    #[arg(long)]
    height: f64,

    /// Package corner carrying pin A1, as seen in the photograph.
    #[arg(long, value_enum, default_value_t = CornerArg::Nw)]
    pin_a1: CornerArg,

    /// The photograph shows the ball side from below (mirrors the grid).
    #[arg(long)]
    bottom_view: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Eagle)]
    format: FormatArg,

    /// Write the output here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Save the bin/ball verification overlay as a PNG.
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Verbose logging (repeat for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CornerArg {
    Nw,
    Ne,
    Se,
    Sw,
}

impl From<CornerArg> for PinCorner {
    fn from(c: CornerArg) -> Self {
        match c {
            CornerArg::Nw => PinCorner::Nw,
            CornerArg::Ne => PinCorner::Ne,
            CornerArg::Se => PinCorner::Se,
            CornerArg::Sw => PinCorner::Sw,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Eagle,
    Xml,
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Eagle => OutputFormat::EagleScript,
            FormatArg::Xml => OutputFormat::Xml,
            FormatArg::Tsv => OutputFormat::Tsv,
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let params = FootprintParams {
        nx: cli.nx,
        ny: cli.ny,
        pitch: cli.pitch,
        pad_diameter: cli.pad_diameter,
        package_width: cli.width,
        package_height: cli.height,
        pin_a1_corner: cli.pin_a1.into(),
        bottom_view: cli.bottom_view,
    };

    let img = pipeline::load_gray(&cli.image)?;
    let grid = pipeline::extract_grid(&img, &params)?;

    if let Some(overlay_path) = &cli.overlay {
        let overlay = pipeline::draw_overlay(&img, &grid);
        overlay.save(overlay_path)?;
        log::info!("overlay written to {}", overlay_path.display());
    }

    let output = pipeline::render_footprint(&grid, &params, cli.format.into())?;
    match &cli.out {
        Some(path) => std::fs::write(path, output)?,
        None => println!("{output}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    let _ = bgakit::core::init_with_level(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
