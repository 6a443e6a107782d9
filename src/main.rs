use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mandelbrot_viewer::{
    CliRenderController, ColourScheme, NavigationStep, Navigator, Raster, presenter_for_path,
};

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_viewer")]
#[command(about = "Render a view of the Mandelbrot set to an image file")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// banded-grayscale, linear-grayscale or smooth-hsv
    #[arg(long, default_value = "banded-grayscale")]
    scheme: ColourScheme,

    /// Start from a shared view, e.g. "zoom=0.25&xrange=-2%2C2&yrange=-1%2C1"
    #[arg(long)]
    view: Option<String>,

    /// Navigation step applied after restoring: in:X,Y, out:X,Y or reset
    #[arg(long = "navigate", value_name = "STEP")]
    steps: Vec<NavigationStep>,

    /// Output file, .png or .ppm
    #[arg(short, long, default_value = "output/mandelbrot.png")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let raster = Raster::new(args.width, args.height)?;
    let presenter = presenter_for_path(&args.output)?;

    let mut navigator = Navigator::new(raster, args.scheme);
    navigator.restore(args.view.as_deref());

    let mut controller = CliRenderController::new(presenter, navigator);
    controller.navigate(&args.steps);
    controller.generate();

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    controller.write(&args.output)?;

    let navigator = controller.navigator();
    println!("{}", navigator.status());
    println!("View: ?{}", navigator.query_string());

    Ok(())
}
