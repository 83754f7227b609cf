//! Tetra Net CLI
//!
//! Usage:
//!   tetra-net [OPTIONS]
//!
//! Options:
//!   -o, --output <FILE>    Output SVG file [default: triangle.svg]
//!   -c, --config <FILE>    Net file with preset values (TOML format)
//!   --scale <LEN>          Side length of the outer triangle
//!   --x0 <X>, --y0 <Y>     Position of the first outer vertex
//!   --profile <PROFILE>    SVG profile (tiny, full)
//!   --midpoint             Compute the inner triangle from edge midpoints
//!   --stdout               Print the SVG document instead of writing a file
//!   -h, --help             Print help
//!
//! Without options the reference layout (scale 100 at offset 2,2) is written
//! to `triangle.svg`.

use std::io;
use std::path::PathBuf;

use clap::Parser;

use tetra_net::{build_drawing, InnerMethod, NetError, NetFile, Overrides, Profile, Resolved};

#[derive(Parser)]
#[command(name = "tetra-net")]
#[command(about = "Laser-cutting layout for a foldable tetrahedron net")]
struct Cli {
    /// Output SVG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Net file with preset values (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of the outer triangle
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// Horizontal position of the first outer vertex
    #[arg(long, allow_negative_numbers = true)]
    x0: Option<f64>,

    /// Vertical position of the first outer vertex
    #[arg(long, allow_negative_numbers = true)]
    y0: Option<f64>,

    /// SVG profile declared in the document
    #[arg(long, value_enum)]
    profile: Option<Profile>,

    /// Compute the inner triangle by averaging outer edge endpoints
    #[arg(long)]
    midpoint: bool,

    /// Print the SVG document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), NetError> {
    let file = match &cli.config {
        Some(path) => NetFile::from_file(path)?,
        None => NetFile::default(),
    };

    let overrides = Overrides {
        scale: cli.scale,
        x0: cli.x0,
        y0: cli.y0,
        inner: cli.midpoint.then_some(InnerMethod::Midpoint),
        profile: cli.profile,
        output: cli.output,
    };
    let Resolved { net, svg, output } = file.resolve(&overrides);

    let drawing = build_drawing(&net, output, svg)?;
    drawing.emit(cli.stdout, &mut io::stdout().lock())
}
