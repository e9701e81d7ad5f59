use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use viewsweep::{
    FilePattern, Settings, SystemRunner, VideoRequest, create_video, delete_frame_files,
    plan_samples,
};

#[derive(Parser, Debug)]
#[command(name = "viewsweep", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sample values a sweep would capture.
    Plan(PlanArgs),
    /// Assemble an already-captured numbered image sequence into a video
    /// (requires a configured `ffmpeg`).
    Encode(EncodeArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// First sample value.
    #[arg(long)]
    start: f64,

    /// Last sample value.
    #[arg(long)]
    end: f64,

    /// Number of samples (at least 2).
    #[arg(long)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Directory holding the numbered frame files.
    #[arg(long)]
    dir: PathBuf,

    /// Frame file name pattern with one integer placeholder.
    #[arg(long, default_value = "image_%05d.png")]
    pattern: String,

    /// Number of frames in the sequence (indices 0..frames).
    #[arg(long)]
    frames: usize,

    /// Output video file name, created inside the frame directory.
    #[arg(long, default_value = "capture.avi")]
    out: String,

    /// Frames per second.
    #[arg(long, default_value_t = 25.0)]
    fps: f64,

    /// Bit rate in megabits per second.
    #[arg(long, default_value_t = 2.0)]
    quality: f64,

    /// Path to the ffmpeg executable. Defaults to the stored setting and is
    /// persisted when it differs from it.
    #[arg(long)]
    ffmpeg: Option<PathBuf>,

    /// Leave the frame files on disk after the video is written.
    #[arg(long)]
    keep_frames: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Encode(args) => cmd_encode(args),
    }
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let samples = plan_samples(args.start, args.end, args.steps)?;
    for (index, value) in samples.iter().enumerate() {
        println!("{index}\t{value}");
    }
    Ok(())
}

fn settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "viewsweep")
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let settings_path = settings_path();
    let mut settings = match &settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(ffmpeg) = &args.ffmpeg
        && settings.set_ffmpeg_path(ffmpeg)
        && let Some(path) = &settings_path
    {
        settings.save(path)?;
    }

    let pattern = FilePattern::parse(&args.pattern)?;
    let request = VideoRequest {
        bit_rate: args.quality,
        frame_rate: args.fps,
        file_name: args.out.clone(),
    };

    let mut log = |line: &str| eprintln!("{line}");
    let video_path = create_video(
        &mut SystemRunner,
        settings.ffmpeg_path.as_deref(),
        &request,
        &args.dir,
        &pattern,
        &mut log,
    )
    .with_context(|| format!("assemble video '{}'", args.out))?;

    if !args.keep_frames {
        delete_frame_files(&args.dir, &pattern, args.frames)?;
    }

    eprintln!("wrote {}", video_path.display());
    Ok(())
}
