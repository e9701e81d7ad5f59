use std::path::{Path, PathBuf};

use crate::error::{SweepError, SweepResult};

/// A file name pattern with exactly one printf-style integer placeholder,
/// e.g. `image_%05d.png`. The placeholder is substituted with the zero-based
/// frame index to produce each output file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePattern {
    raw: String,
    prefix: String,
    suffix: String,
    width: usize,
    zero_pad: bool,
}

impl FilePattern {
    pub fn parse(raw: &str) -> SweepResult<Self> {
        let mut placeholder: Option<(usize, usize, usize, bool)> = None;

        let bytes = raw.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'%' {
                i += 1;
                continue;
            }
            let start = i;
            i += 1;
            let zero_pad = i < bytes.len() && bytes[i] == b'0';
            if zero_pad {
                i += 1;
            }
            let digits_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i >= bytes.len() || bytes[i] != b'd' {
                return Err(SweepError::invalid_parameter(format!(
                    "file pattern '{raw}' contains a malformed placeholder (expected %d or %0<N>d)"
                )));
            }
            if placeholder.is_some() {
                return Err(SweepError::invalid_parameter(format!(
                    "file pattern '{raw}' must contain exactly one integer placeholder"
                )));
            }
            let width = raw[digits_start..i].parse::<usize>().unwrap_or(0);
            i += 1;
            placeholder = Some((start, i, width, zero_pad));
        }

        let Some((start, end, width, zero_pad)) = placeholder else {
            return Err(SweepError::invalid_parameter(format!(
                "file pattern '{raw}' must contain an integer placeholder such as %05d"
            )));
        };

        Ok(Self {
            raw: raw.to_string(),
            prefix: raw[..start].to_string(),
            suffix: raw[end..].to_string(),
            width,
            zero_pad,
        })
    }

    /// The unsubstituted pattern text, as handed to the encoder's `-i` argument.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// File name for the given zero-based frame index.
    pub fn file_name(&self, index: usize) -> String {
        let digits = if self.zero_pad {
            format!("{index:0width$}", width = self.width)
        } else {
            format!("{index:width$}", width = self.width)
        };
        format!("{}{}{}", self.prefix, digits, self.suffix)
    }

    /// Full path for the given zero-based frame index within `dir`.
    pub fn frame_path(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(self.file_name(index))
    }

    /// The unsubstituted pattern joined onto `dir`.
    pub fn pattern_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.raw)
    }
}

/// Fresh pattern for temporary frame files, e.g. `tmp-R7KQ2-%05d.png`.
///
/// Used when the frames only exist to feed the video encoder, so they never
/// collide with files already present in the output directory.
pub fn random_frame_pattern() -> String {
    use rand::Rng as _;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::rng();
    let tag: String = (0..5)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    format!("tmp-{tag}-%05d.png")
}
