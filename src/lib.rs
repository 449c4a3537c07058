//! Deterministic spin animation engine for live prize draws.
//!
//! Given an entrant list and the ticket that won, the engine plays a spin that decelerates
//! along a cubic Bézier easing curve and comes to rest exactly on that entry.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `target index + list size + SpinSettings -> SpinPlan` (forward-only travel,
//!    duration, easing curve)
//! 2. **Ease**: `time fraction -> progress` by inverting the curve's time axis
//! 3. **Virtualize**: `position -> VisibleWindow` (a bounded set of rows, whatever the list size)
//! 4. **Drive**: [`AnimationController`] steps frames from a [`FrameClock`] and reports to a
//!    [`SpinObserver`], ending with exactly one completion event or a cancellation
//!
//! The engine performs no I/O. The winner is chosen by the caller.
#![forbid(unsafe_code)]

mod curve;
mod foundation;
mod sample;
mod source;
mod spin;

pub use curve::bezier::{
    CurveParameters, MAX_BISECTION_ITERATIONS, MAX_NEWTON_ITERATIONS, PROGRESS_TOLERANCE,
};
pub use curve::editor::{ControlPoint, CurveEditor};
pub use curve::presets::{CurvePreset, DecelerationProfile};
pub use foundation::core::{Entry, EntryList, Point};
pub use foundation::error::{SpinError, SpinResult};
pub use sample::sample_entries;
pub use source::{EntrySource, InMemorySource};
pub use spin::clock::{FrameClock, ManualClock, SystemClock};
pub use spin::controller::{
    AnimationController, CancelToken, ControllerOpts, FrameOutcome, SpinOutcome, SpinPhase,
};
pub use spin::observer::{FnObserver, NoopObserver, SpinObserver};
pub use spin::plan::{MAX_AVERAGE_ITEMS_PER_SEC, SpinPlan, plan, plan_from};
pub use spin::settings::SpinSettings;
pub use spin::window::{
    MAX_WINDOW_RADIUS, VisibleWindow, WindowSlot, visible_window, visible_window_into,
};
