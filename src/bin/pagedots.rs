use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use pagedots::{
    Configuration, Container, CpuBackend, FrameRGBA, HostEnv, PageControl, RenderSettings, Rgba8,
    compute_shape_set,
};

#[derive(Parser, Debug)]
#[command(name = "pagedots", version)]
struct Cli {
    /// Log layout and transition decisions to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the laid-out shapes as JSON.
    Shapes(LayoutArgs),
    /// Render the indicator as a single PNG.
    Frame(FrameArgs),
    /// Render the transition to another step as a numbered PNG sequence.
    Animate(AnimateArgs),
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container width (one point per output pixel).
    #[arg(long, default_value_t = 120)]
    width: u32,

    /// Container height.
    #[arg(long, default_value_t = 20)]
    height: u32,

    /// Tint color as #rrggbb or #rrggbbaa.
    #[arg(long, default_value = "#007aff")]
    tint: String,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    layout: LayoutArgs,

    /// Background color; transparent when omitted.
    #[arg(long)]
    background: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    layout: LayoutArgs,

    /// Background color; transparent when omitted.
    #[arg(long)]
    background: Option<String>,

    /// Step to move the selection to.
    #[arg(long)]
    to: usize,

    /// Frames per second of the output sequence.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Directory receiving frame_0000.png, frame_0001.png, ...
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Shapes(args) => cmd_shapes(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn load(layout: &LayoutArgs) -> anyhow::Result<(Configuration, HostEnv)> {
    let config = match &layout.config {
        Some(path) => Configuration::from_path(path)
            .with_context(|| format!("load configuration '{}'", path.display()))?,
        None => Configuration::default(),
    };
    let tint = Rgba8::parse_hex(&layout.tint)?;
    let container = Container::new(f64::from(layout.width), f64::from(layout.height));
    Ok((config, HostEnv::new(container, tint)))
}

fn backend_for(layout: &LayoutArgs, background: Option<&str>) -> anyhow::Result<CpuBackend> {
    let clear_rgba = background
        .map(Rgba8::parse_hex)
        .transpose()?
        .map(|c| [c.r, c.g, c.b, c.a]);
    Ok(CpuBackend::new(RenderSettings {
        width: layout.width,
        height: layout.height,
        clear_rgba,
    })?)
}

fn cmd_shapes(args: LayoutArgs) -> anyhow::Result<()> {
    let (config, env) = load(&args)?;
    let shapes = compute_shape_set(&config, env);
    let json = serde_json::to_string_pretty(&shapes).context("serialize shapes")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (config, env) = load(&args.layout)?;
    let backend = backend_for(&args.layout, args.background.as_deref())?;
    let mut control = PageControl::new(config, env, backend)?;

    let frame = control.backend_mut().render_frame()?;
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    let (config, env) = load(&args.layout)?;
    let backend = backend_for(&args.layout, args.background.as_deref())?;
    let mut control = PageControl::new(config, env, backend)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    control.set_selected_step(args.to)?;
    let dt = 1.0 / f64::from(args.fps);
    let mut index = 0usize;
    loop {
        let backend = control.backend_mut();
        let frame = backend.render_frame()?;
        write_png(&args.out_dir.join(format!("frame_{index:04}.png")), &frame)?;
        index += 1;
        if !backend.is_animating() {
            break;
        }
        backend.advance(dt);
    }
    control.transition_finished();

    eprintln!("wrote {index} frames to {}", args.out_dir.display());
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
