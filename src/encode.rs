use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::capture::LogSink;
use crate::error::{SweepError, SweepResult};
use crate::pattern::FilePattern;

/// Video assembly parameters. `bit_rate` is in megabits per second and is
/// passed to the encoder as `<N>M`.
#[derive(Clone, Debug)]
pub struct VideoRequest {
    pub bit_rate: f64,
    pub frame_rate: f64,
    pub file_name: String,
}

/// Result of running an external command to completion.
#[derive(Clone, Debug)]
pub struct ProcessOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Synchronous command execution boundary, so video assembly is testable
/// without spawning a real encoder.
pub trait CommandRunner {
    fn run(&mut self, program: &Path, args: &[OsString]) -> SweepResult<ProcessOutput>;
}

/// Runs the command via `std::process::Command`, capturing stdout and stderr.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &Path, args: &[OsString]) -> SweepResult<ProcessOutput> {
        let output = std::process::Command::new(program)
            .args(args)
            .output()
            .map_err(|e| {
                SweepError::io(format!("failed to run '{}': {e}", program.display()))
            })?;

        Ok(ProcessOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Encoder argument list for assembling the numbered frame sequence in
/// `output_dir` into `output_dir/<file_name>`: overwrite without prompting,
/// target frame rate and bit rate, frame numbering starting at 0.
pub fn encoder_args(
    request: &VideoRequest,
    output_dir: &Path,
    pattern: &FilePattern,
) -> Vec<OsString> {
    let video_path = output_dir.join(&request.file_name);
    vec![
        OsString::from("-y"),
        OsString::from("-r"),
        OsString::from(request.frame_rate.to_string()),
        OsString::from("-vb"),
        OsString::from(format!("{}M", request.bit_rate)),
        OsString::from("-start_number"),
        OsString::from("0"),
        OsString::from("-i"),
        pattern.pattern_path(output_dir).into_os_string(),
        video_path.into_os_string(),
    ]
}

/// Invoke the external encoder over the captured frame sequence.
///
/// `encoder_path` must be configured and point at an existing file; both are
/// checked before any process is spawned. Success is judged by exit status
/// alone, the produced file is never inspected. On a non-zero exit the
/// captured stderr is logged and attached to the error.
pub fn create_video(
    runner: &mut dyn CommandRunner,
    encoder_path: Option<&Path>,
    request: &VideoRequest,
    output_dir: &Path,
    pattern: &FilePattern,
    log: LogSink,
) -> SweepResult<PathBuf> {
    log("Export to video...");

    let Some(encoder_path) = encoder_path else {
        return Err(SweepError::encoder_not_configured(
            "ffmpeg executable path is not defined",
        ));
    };
    if !encoder_path.is_file() {
        return Err(SweepError::encoder_path_invalid(format!(
            "ffmpeg executable path does not exist: {}",
            encoder_path.display()
        )));
    }

    let args = encoder_args(request, output_dir, pattern);
    tracing::debug!(encoder = %encoder_path.display(), ?args, "encoder invocation");

    let output = runner.run(encoder_path, &args)?;
    if !output.success() {
        log(&format!("ffmpeg error output: {}", output.stderr.trim()));
        return Err(SweepError::EncoderFailed {
            status: output.status,
            stderr: output.stderr,
        });
    }

    let video_path = output_dir.join(&request.file_name);
    log(&format!(
        "Video export succeeded to file: {}",
        video_path.display()
    ));
    tracing::debug!(stdout = %output.stdout.trim(), stderr = %output.stderr.trim(), "encoder output");
    Ok(video_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg_strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn args_carry_rate_quality_and_start_number() {
        let request = VideoRequest {
            bit_rate: 2.0,
            frame_rate: 25.0,
            file_name: "out.avi".to_string(),
        };
        let pattern = FilePattern::parse("image_%05d.png").unwrap();
        let args = arg_strings(&encoder_args(&request, Path::new("frames"), &pattern));

        let pos = |needle: &str| args.iter().position(|a| a == needle).unwrap();
        assert_eq!(args[pos("-r") + 1], "25");
        assert_eq!(args[pos("-vb") + 1], "2M");
        assert_eq!(args[pos("-start_number") + 1], "0");
        assert!(args[pos("-i") + 1].ends_with("image_%05d.png"));
        assert!(args.last().unwrap().ends_with("out.avi"));
        assert_eq!(args[0], "-y");
    }

    #[test]
    fn fractional_rates_are_passed_through() {
        let request = VideoRequest {
            bit_rate: 0.5,
            frame_rate: 12.5,
            file_name: "clip.mp4".to_string(),
        };
        let pattern = FilePattern::parse("f%d.png").unwrap();
        let args = arg_strings(&encoder_args(&request, Path::new("."), &pattern));
        assert!(args.contains(&"12.5".to_string()));
        assert!(args.contains(&"0.5M".to_string()));
    }
}
