use std::num::{NonZeroU32, NonZeroUsize};
use std::path::PathBuf;
use std::time::SystemTime;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use mandelbrot_explorer::{
    CONTROLS_HELP, DEFAULT_HEIGHT, DEFAULT_POSITION, DEFAULT_RESOLUTION, DEFAULT_TILE_EDGE,
    DEFAULT_WIDTH, DEFAULT_ZOOM, EngineConfig, ExplorerController, FilePresenterPort,
    FractalRenderEngine, MandelbrotConfig, NavigationCommand, NavigationLimits, Position,
    PpmFilePresenter, RenderReport, TileSize, Viewport, format_render_time,
    format_rendering_parameters, screenshot_file_name,
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer", version, after_help = CONTROLS_HELP)]
struct Cli {
    /// Image width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Edge length of the square tiles the image is split into.
    #[arg(long, default_value_t = DEFAULT_TILE_EDGE, value_parser = clap::value_parser!(u32).range(1..))]
    tile_size: u32,

    /// Render worker threads (defaults to available parallelism).
    #[arg(long)]
    threads: Option<NonZeroUsize>,

    /// Initial zoom factor.
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    zoom: f64,

    /// Initial iteration budget.
    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: u32,

    /// Initial horizontal position as a fraction of the zoomed canvas.
    #[arg(long, default_value_t = DEFAULT_POSITION.x, allow_negative_numbers = true)]
    x: f64,

    /// Initial vertical position as a fraction of the zoomed canvas.
    #[arg(long, default_value_t = DEFAULT_POSITION.y, allow_negative_numbers = true)]
    y: f64,

    /// Navigation step applied after the initial render. Repeatable.
    #[arg(long = "step")]
    steps: Vec<NavigationCommand>,

    /// Output PPM path (defaults to screenshot-<unix time>.ppm).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        let viewport = Viewport::new(
            Position {
                x: self.x,
                y: self.y,
            },
            self.zoom,
            self.resolution,
        )
        .context("invalid initial view")?;
        let tile_edge = NonZeroU32::new(self.tile_size).context("tile size must be positive")?;

        Ok(EngineConfig {
            width: self.width,
            height: self.height,
            tile_size: TileSize::square(tile_edge),
            worker_threads: self.threads,
            mandelbrot: MandelbrotConfig {
                viewport,
                ..MandelbrotConfig::default()
            },
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let (report, out) = run(&cli)?;

    println!("{}", format_render_time(report.duration));
    println!("{}", format_rendering_parameters(&report.viewport));
    eprintln!("wrote {}", out.display());

    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<(RenderReport, PathBuf)> {
    let engine = FractalRenderEngine::new(cli.engine_config()?)
        .context("failed to create render engine")?;
    let mut controller = ExplorerController::new(engine, NavigationLimits::default());

    let mut report = controller.render().context("initial render failed")?;
    for &step in &cli.steps {
        report = controller
            .apply(step)
            .with_context(|| format!("step '{step}' failed"))?;
    }

    let out = cli
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(screenshot_file_name(SystemTime::now())));

    if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    PpmFilePresenter::new()
        .present(controller.engine().buffer(), &out)
        .with_context(|| format!("write ppm '{}'", out.display()))?;

    Ok((report, out))
}
