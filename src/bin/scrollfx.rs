use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use scrollfx::{Choreography, Host, HostEvent, Millis, Page, PreviewOpts, Viewport};

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump a built-in choreography as JSON.
    Preset(PresetArgs),
    /// Print a section's style values at evenly spaced raw progress values.
    Sample(SampleArgs),
    /// Scroll a page of sections and print every frame.
    Simulate(SimulateArgs),
    /// Render a section at one progress value as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Preset name (hero, about-hero, values, all-work, portfolio, intro, home, about).
    #[arg(long)]
    name: String,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input choreography JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Section id.
    #[arg(long)]
    section: String,

    /// Number of intervals; prints `steps + 1` lines.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    steps: u32,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input choreography JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Section id to report.
    #[arg(long)]
    section: String,

    /// Document scroll target, px.
    #[arg(long)]
    scroll_to: f64,

    /// Frames to run.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Frame interval, ms.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Jump instantly instead of smooth scrolling.
    #[arg(long, default_value_t = false)]
    instant: bool,

    /// Viewport width (defaults to the document's, then 1280).
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height (defaults to the document's, then 800).
    #[arg(long)]
    height: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input choreography JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Section id.
    #[arg(long)]
    section: String,

    /// Progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Canvas height.
    #[arg(long, default_value_t = 400)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Preset(args) => cmd_preset(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load(path: &Path) -> anyhow::Result<Choreography> {
    Choreography::from_path(path)
        .with_context(|| format!("load choreography '{}'", path.display()))
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let doc = scrollfx::presets::by_name(&args.name)?;
    let text = doc.to_json_pretty()?;
    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, text)
                .with_context(|| format!("write preset '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let spec = doc.require_section(&args.section)?;
    for i in 0..=args.steps {
        let p = f64::from(i) / f64::from(args.steps);
        let style = spec.phases.evaluate(p);
        let active = spec.steps.map(|s| s.index_at(p));
        println!(
            "{}",
            json!({ "progress": p, "active": active, "values": style.values })
        );
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let fallback = doc.viewport.unwrap_or(Viewport {
        width: 1280.0,
        height: 800.0,
    });
    let viewport = Viewport::new(
        args.width.unwrap_or(fallback.width),
        args.height.unwrap_or(fallback.height),
    )?;

    let mut host = Host::new(Page::new(viewport, doc.document_height(viewport)));
    let mut target = None;
    for (spec, layout) in doc.sections.iter().zip(doc.layouts(viewport)) {
        let id = host.mount_section(spec.clone(), layout)?;
        if spec.id == args.section {
            target = Some(id);
        }
    }
    let target = target.with_context(|| format!("unknown section '{}'", args.section))?;

    if args.instant {
        host.scroll_to(args.scroll_to);
    } else {
        host.smooth_scroll_to(args.scroll_to);
    }

    for i in 1..=args.frames {
        let now = Millis(u64::from(i) * args.frame_ms);
        let events = host.tick(now);
        let frame = events
            .into_iter()
            .find_map(|e| match e {
                HostEvent::Section { id, frame } if id == target => Some(frame),
                _ => None,
            })
            .or_else(|| host.render_section(target))
            .context("section vanished")?;
        let raw = host.section(target).map(|s| s.raw_progress());
        println!(
            "{}",
            json!({
                "frame": i,
                "t_ms": now.0,
                "scroll_y": host.page().scroll_y(),
                "raw": raw,
                "progress": frame.progress,
                "active": frame.active,
                "step": frame.step.as_ref().map(|s| json!({
                    "previous": s.change.previous,
                    "current": s.change.current,
                    "label": s.label,
                })),
            })
        );
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.progress.is_finite() && (0.0..=1.0).contains(&args.progress),
        "--progress must be within [0, 1]"
    );
    let doc = load(&args.in_path)?;
    let spec = doc.require_section(&args.section)?;
    let style = spec.phases.evaluate(args.progress);
    tracing::info!(
        active = ?spec.steps.map(|s| s.index_at(args.progress)),
        elements = style.elements().len(),
        "rendering frame"
    );
    let img = scrollfx::rasterize(
        &style,
        PreviewOpts {
            width: args.width,
            height: args.height,
            ..PreviewOpts::default()
        },
    )?;
    scrollfx::save_png(&img, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
