//! Viewsweep captures an image sequence from a host-owned view while sweeping
//! a parameter over a range, and can assemble the sequence into a video via an
//! external `ffmpeg` process.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `(start, end, step_count) -> Vec<f64>` sample values
//! 2. **Capture**: per sample, apply it to the view, force a render, grab the
//!    pixels and write a numbered image file
//! 3. **Assemble** (optional): run `ffmpeg` over the numbered sequence, then
//!    delete the intermediate frames
//!
//! The host's view is reached only through the [`ViewDriver`] capability (with
//! [`SliceView`] and [`ThreeDView`] adapters), and the encoder only through
//! [`CommandRunner`], so the whole pipeline runs against fakes in tests.
//! Whatever view state a sweep disturbs is restored on every exit path.
#![forbid(unsafe_code)]

pub mod capture;
pub mod cleanup;
pub mod encode;
pub mod error;
pub mod pattern;
pub mod plan;
pub mod settings;
pub mod sweep;
pub mod view;

pub use capture::{LogSink, capture_sweep, save_frame};
pub use cleanup::delete_frame_files;
pub use encode::{CommandRunner, ProcessOutput, SystemRunner, VideoRequest, create_video, encoder_args};
pub use error::{SweepError, SweepResult};
pub use pattern::{FilePattern, random_frame_pattern};
pub use plan::{plan_samples, rotation_step_size};
pub use settings::Settings;
pub use sweep::{SweepMode, SweepOutcome, SweepRequest, SweepTarget, VideoExport, run_sweep};
pub use view::{
    FrameRgba, RotationSweepDriver, SliceSweepDriver, SliceView, ThreeDView, ViewDriver,
    YawDirection, slice_sweep_bounds,
};
