use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sketchline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample SVG path data and print the samples as JSON.
    ///
    /// Malformed path data prints a zero-length sampling with `"measured": false`.
    Sample(SampleArgs),
    /// Evaluate a scene and print one JSON frame state per line.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// SVG path data, e.g. "M0 0 L100 0".
    #[arg(long)]
    d: String,

    /// Maximum spacing between samples, in path units.
    #[arg(long, default_value_t = sketchline::path::sample::DEFAULT_SAMPLE_INTERVAL)]
    interval: f64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Seconds to evaluate. Defaults to the time the last item completes.
    #[arg(long)]
    duration: Option<f64>,
}

const MAX_FRAMES: u64 = 1_000_000;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<sketchline::SceneDef> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: sketchline::SceneDef =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let min = sketchline::path::sample::MIN_SAMPLE_INTERVAL;
    if !(args.interval.is_finite() && args.interval >= min) {
        anyhow::bail!("--interval must be finite and >= {min}");
    }
    let sampled = sketchline::sample_path(
        &args.d,
        sketchline::SampleOptions {
            interval: args.interval,
        },
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    serde_json::to_writer(&mut out, &sampled).with_context(|| "write samples")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be finite and > 0");
    }
    let def = read_scene_json(&args.in_path)?;
    let mut scene = sketchline::Scene::prepare(&def)
        .with_context(|| format!("prepare scene '{}'", args.in_path.display()))?;

    let duration = args.duration.unwrap_or_else(|| scene.duration());
    if !(duration.is_finite() && duration >= 0.0) {
        anyhow::bail!("--duration must be finite and >= 0");
    }
    let frame_span = (duration * args.fps).ceil();
    if frame_span >= MAX_FRAMES as f64 {
        anyhow::bail!("--duration at --fps would produce more than {MAX_FRAMES} frames");
    }
    let frames = frame_span as u64 + 1;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for i in 0..frames {
        let t = (i as f64 / args.fps).min(duration);
        let state = scene.eval_frame(t);
        serde_json::to_writer(&mut out, &state).with_context(|| format!("write frame {i}"))?;
        writeln!(out)?;
    }
    out.flush()?;

    eprintln!("wrote {frames} frames");
    Ok(())
}
