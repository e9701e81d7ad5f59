use std::path::{Path, PathBuf};

use crate::error::{SweepError, SweepResult};
use crate::pattern::FilePattern;
use crate::view::{FrameRgba, ViewDriver};

/// Observer for user-facing progress lines (one call per line, no trailing
/// newline). Purely observational, never affects control flow.
pub type LogSink<'a> = &'a mut dyn FnMut(&str);

/// Capture one frame per sample, in strictly increasing index order.
///
/// Creates `output_dir` if absent, applies each sample to the view, forces a
/// synchronous render, grabs the pixels and writes them to the pattern-derived
/// path. The driver's `end_sweep` runs on every exit path, so view state saved
/// in `begin_sweep` is restored even when a capture fails partway; frames
/// already written stay on disk. Returns the written paths in capture order.
pub fn capture_sweep(
    driver: &mut dyn ViewDriver,
    samples: &[f64],
    output_dir: &Path,
    pattern: &FilePattern,
    log: LogSink,
) -> SweepResult<Vec<PathBuf>> {
    if !driver.is_visible() {
        return Err(SweepError::view_not_visible(
            "selected view is not visible in the current layout",
        ));
    }

    std::fs::create_dir_all(output_dir).map_err(|e| {
        SweepError::io(format!(
            "failed to create output directory '{}': {e}",
            output_dir.display()
        ))
    })?;

    // end_sweep runs even when begin_sweep fails partway, so state the
    // adapter already saved is still restored.
    let captured = match driver.begin_sweep() {
        Ok(()) => capture_all(driver, samples, output_dir, pattern, log),
        Err(e) => Err(e),
    };
    let restored = driver.end_sweep();

    // A capture failure takes precedence over a restore failure.
    let paths = captured?;
    restored?;
    Ok(paths)
}

fn capture_all(
    driver: &mut dyn ViewDriver,
    samples: &[f64],
    output_dir: &Path,
    pattern: &FilePattern,
    log: LogSink,
) -> SweepResult<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(samples.len());
    for (index, &value) in samples.iter().enumerate() {
        driver.apply_sample(index, value)?;
        driver.force_render()?;
        let frame = driver.grab_frame()?;

        let path = pattern.frame_path(output_dir, index);
        log(&format!("Write {}", path.display()));
        save_frame(&frame, &path)?;
        paths.push(path);

        driver.pump_events();
    }
    Ok(paths)
}

/// Write a captured frame to `path`; the extension selects the image format.
pub fn save_frame(frame: &FrameRgba, path: &Path) -> SweepResult<()> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(SweepError::invalid_parameter(format!(
            "frame buffer is {} bytes, expected {expected} for {}x{} rgba8",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    image::save_buffer(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
    )
    .map_err(|e| SweepError::io(format!("failed to write '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_frame_rejects_short_buffer() {
        let frame = FrameRgba {
            width: 4,
            height: 4,
            data: vec![0u8; 16],
        };
        assert!(matches!(
            save_frame(&frame, Path::new("target/never_written.png")),
            Err(SweepError::InvalidParameter(_))
        ));
    }
}
