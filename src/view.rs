use crate::error::SweepResult;
use crate::plan::rotation_step_size;

/// A captured frame as straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Uniform "apply one sample value" boundary over a host view.
///
/// The capture loop is mode-agnostic: it calls `begin_sweep` once, then
/// `apply_sample`, `force_render` and `grab_frame` in strictly increasing index
/// order, and finally `end_sweep` on every exit path (success or failure).
/// Anything mode-specific — saving/restoring the slice offset, converting
/// absolute sample values into relative yaw steps — lives in the adapter that
/// implements this trait, never in the loop.
pub trait ViewDriver {
    /// Whether the view is currently mapped in the host's layout.
    fn is_visible(&self) -> bool;

    /// Save whatever state the sweep will disturb and move to the start pose.
    fn begin_sweep(&mut self) -> SweepResult<()>;

    /// Put the view into the state for the given sample.
    fn apply_sample(&mut self, index: usize, value: f64) -> SweepResult<()>;

    /// Restore the state saved in `begin_sweep`.
    fn end_sweep(&mut self) -> SweepResult<()>;

    /// Force a synchronous render of the view.
    fn force_render(&mut self) -> SweepResult<()>;

    /// Grab the rendered view's pixels.
    fn grab_frame(&mut self) -> SweepResult<FrameRgba>;

    /// Optional hook to keep the host's event loop responsive mid-sweep.
    fn pump_events(&mut self) {}
}

/// Host capability for a 2D slice view, parameterized by a scalar offset
/// along its normal axis.
pub trait SliceView {
    fn is_visible(&self) -> bool;
    fn offset(&self) -> f64;
    fn set_offset(&mut self, offset: f64) -> SweepResult<()>;
    /// Valid offset range as reported by the host, `(min, max)`.
    fn offset_range(&self) -> (f64, f64);
    fn force_render(&mut self) -> SweepResult<()>;
    fn grab_frame(&mut self) -> SweepResult<FrameRgba>;
    fn pump_events(&mut self) {}
}

/// Offset bounds usable for a sweep. When the host reports an empty range
/// (no volume shown in the view), widen to current offset ± 100 so a sweep
/// is still possible.
pub fn slice_sweep_bounds(view: &dyn SliceView) -> (f64, f64) {
    let (min, max) = view.offset_range();
    if min == max {
        let current = view.offset();
        (current - 100.0, current + 100.0)
    } else {
        (min, max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YawDirection {
    Left,
    Right,
}

/// Host capability for a 3D view whose rotation primitive is relative:
/// `yaw` turns the camera by the configured increment in the configured
/// direction, there is no set-to-angle operation.
pub trait ThreeDView {
    fn is_visible(&self) -> bool;
    fn rotation_increment(&self) -> f64;
    fn set_rotation_increment(&mut self, degrees: f64);
    fn yaw_direction(&self) -> YawDirection;
    fn set_yaw_direction(&mut self, direction: YawDirection);
    fn yaw(&mut self) -> SweepResult<()>;
    fn force_render(&mut self) -> SweepResult<()>;
    fn grab_frame(&mut self) -> SweepResult<FrameRgba>;
    fn pump_events(&mut self) {}
}

/// Drives a slice view by setting absolute offsets, restoring the pre-sweep
/// offset in `end_sweep`.
pub struct SliceSweepDriver<'a> {
    view: &'a mut dyn SliceView,
    saved_offset: Option<f64>,
}

impl<'a> SliceSweepDriver<'a> {
    pub fn new(view: &'a mut dyn SliceView) -> Self {
        Self {
            view,
            saved_offset: None,
        }
    }
}

impl ViewDriver for SliceSweepDriver<'_> {
    fn is_visible(&self) -> bool {
        self.view.is_visible()
    }

    fn begin_sweep(&mut self) -> SweepResult<()> {
        self.saved_offset = Some(self.view.offset());
        Ok(())
    }

    fn apply_sample(&mut self, _index: usize, value: f64) -> SweepResult<()> {
        self.view.set_offset(value)
    }

    fn end_sweep(&mut self) -> SweepResult<()> {
        if let Some(offset) = self.saved_offset.take() {
            self.view.set_offset(offset)?;
        }
        Ok(())
    }

    fn force_render(&mut self) -> SweepResult<()> {
        self.view.force_render()
    }

    fn grab_frame(&mut self) -> SweepResult<FrameRgba> {
        self.view.grab_frame()
    }

    fn pump_events(&mut self) {
        self.view.pump_events();
    }
}

/// Drives a 3D view through relative yaw steps.
///
/// `begin_sweep` yaws left by the full `start` angle to reach the start pose,
/// then configures right yaws of `(end + start) / (step_count - 1)` degrees.
/// `apply_sample` yaws once per sample after the first (the start pose already
/// is sample 0). `end_sweep` yaws left by `end` to return to the original pose
/// and restores the increment and direction the view had before the sweep.
pub struct RotationSweepDriver<'a> {
    view: &'a mut dyn ThreeDView,
    start: f64,
    end: f64,
    step: f64,
    saved: Option<(f64, YawDirection)>,
}

impl<'a> RotationSweepDriver<'a> {
    pub fn new(
        view: &'a mut dyn ThreeDView,
        start: f64,
        end: f64,
        step_count: u32,
    ) -> SweepResult<Self> {
        let step = rotation_step_size(start, end, step_count)?;
        Ok(Self {
            view,
            start,
            end,
            step,
            saved: None,
        })
    }
}

impl ViewDriver for RotationSweepDriver<'_> {
    fn is_visible(&self) -> bool {
        self.view.is_visible()
    }

    fn begin_sweep(&mut self) -> SweepResult<()> {
        self.saved = Some((self.view.rotation_increment(), self.view.yaw_direction()));

        self.view.set_rotation_increment(self.start);
        self.view.set_yaw_direction(YawDirection::Left);
        self.view.yaw()?;

        self.view.set_rotation_increment(self.step);
        self.view.set_yaw_direction(YawDirection::Right);
        Ok(())
    }

    fn apply_sample(&mut self, index: usize, _value: f64) -> SweepResult<()> {
        if index > 0 {
            self.view.yaw()?;
        }
        Ok(())
    }

    fn end_sweep(&mut self) -> SweepResult<()> {
        if let Some((increment, direction)) = self.saved.take() {
            self.view.set_yaw_direction(YawDirection::Left);
            self.view.set_rotation_increment(self.end);
            let yawed = self.view.yaw();
            // The saved configuration comes back even when the restore yaw
            // fails on a broken view.
            self.view.set_rotation_increment(increment);
            self.view.set_yaw_direction(direction);
            yawed?;
        }
        Ok(())
    }

    fn force_render(&mut self) -> SweepResult<()> {
        self.view.force_render()
    }

    fn grab_frame(&mut self) -> SweepResult<FrameRgba> {
        self.view.grab_frame()
    }

    fn pump_events(&mut self) {
        self.view.pump_events();
    }
}
