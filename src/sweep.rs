use std::path::PathBuf;

use crate::capture::{LogSink, capture_sweep};
use crate::cleanup::delete_frame_files;
use crate::encode::{CommandRunner, VideoRequest, create_video};
use crate::error::{SweepError, SweepResult};
use crate::pattern::{FilePattern, random_frame_pattern};
use crate::plan::plan_samples;
use crate::view::{RotationSweepDriver, SliceSweepDriver, SliceView, ThreeDView, ViewDriver};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepMode {
    /// Sweep a 2D slice view's offset between two absolute values.
    SliceOffset,
    /// Rotate a 3D view's camera between two yaw angles relative to its pose.
    Rotation,
}

/// One capture action, constructed per request and discarded afterwards.
#[derive(Clone, Debug)]
pub struct SweepRequest {
    pub mode: SweepMode,
    pub start: f64,
    pub end: f64,
    pub step_count: u32,
    pub output_dir: PathBuf,
    /// Pattern for frame file names, e.g. `image_%05d.png`. Ignored when video
    /// export is requested (a random temporary pattern is used instead).
    pub file_pattern: String,
}

/// Optional video assembly step appended to the capture action.
#[derive(Clone, Debug)]
pub struct VideoExport {
    pub request: VideoRequest,
    pub encoder_path: Option<PathBuf>,
}

/// The view being swept. Which variant is required is decided by
/// [`SweepRequest::mode`]; a mismatch is rejected before any frame is captured.
pub enum SweepTarget<'a> {
    Slice(&'a mut dyn SliceView),
    ThreeD(&'a mut dyn ThreeDView),
}

#[derive(Clone, Debug)]
pub struct SweepOutcome {
    /// Frame files written during capture, in index order. Already deleted
    /// from disk when a video was assembled.
    pub frames: Vec<PathBuf>,
    pub video: Option<PathBuf>,
}

/// Run a full capture action: plan the samples, capture one frame per sample,
/// then optionally assemble a video and delete the intermediate frames.
///
/// When `video` is requested the frames are written under a random temporary
/// pattern so they cannot mix with files already in the output directory, and
/// `request.file_pattern` is not consulted.
pub fn run_sweep(
    target: SweepTarget<'_>,
    request: &SweepRequest,
    video: Option<&VideoExport>,
    runner: &mut dyn CommandRunner,
    log: LogSink,
) -> SweepResult<SweepOutcome> {
    let pattern = if video.is_some() {
        FilePattern::parse(&random_frame_pattern())?
    } else {
        FilePattern::parse(&request.file_pattern)?
    };

    let samples = plan_samples(request.start, request.end, request.step_count)?;

    let mut slice_driver;
    let mut rotation_driver;
    let driver: &mut dyn ViewDriver = match (request.mode, target) {
        (SweepMode::SliceOffset, SweepTarget::Slice(view)) => {
            slice_driver = SliceSweepDriver::new(view);
            &mut slice_driver
        }
        (SweepMode::Rotation, SweepTarget::ThreeD(view)) => {
            rotation_driver =
                RotationSweepDriver::new(view, request.start, request.end, request.step_count)?;
            &mut rotation_driver
        }
        _ => {
            return Err(SweepError::invalid_parameter(
                "sweep mode does not match the selected view kind",
            ));
        }
    };

    let frames = capture_sweep(driver, &samples, &request.output_dir, &pattern, log)?;

    let video_path = match video {
        Some(export) => {
            let path = create_video(
                runner,
                export.encoder_path.as_deref(),
                &export.request,
                &request.output_dir,
                &pattern,
                log,
            )?;
            delete_frame_files(&request.output_dir, &pattern, frames.len())?;
            Some(path)
        }
        None => None,
    };

    log("Done.");
    Ok(SweepOutcome {
        frames,
        video: video_path,
    })
}
