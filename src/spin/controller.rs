use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::foundation::core::{Entry, EntryList};
use crate::foundation::error::{SpinError, SpinResult};
use crate::source::EntrySource;
use crate::spin::clock::FrameClock;
use crate::spin::observer::SpinObserver;
use crate::spin::plan::{SpinPlan, plan_from};
use crate::spin::settings::SpinSettings;
use crate::spin::window::{MAX_WINDOW_RADIUS, VisibleWindow, visible_window_into};

/// Options for [`AnimationController`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ControllerOpts {
    /// Rows rendered on each side of the pointer.
    pub window_radius: usize,
}

impl Default for ControllerOpts {
    fn default() -> Self {
        Self { window_radius: 4 }
    }
}

impl ControllerOpts {
    pub fn validate(&self) -> SpinResult<()> {
        if self.window_radius > MAX_WINDOW_RADIUS {
            return Err(SpinError::invalid_configuration(format!(
                "window radius must be <= {MAX_WINDOW_RADIUS} (got {})",
                self.window_radius
            )));
        }
        Ok(())
    }
}

/// Cloneable cancellation flag, safe to trip from another thread.
///
/// A tripped token ends the active spin at its next frame without a completion event.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Coarse view of the controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
}

/// Result of one [`AnimationController::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Nothing to do: no spin is active.
    Idle,
    /// A position update was emitted; another frame is needed.
    Continue,
    /// The final position was emitted and the completion event fired.
    Completed(Entry),
    /// The spin was cancelled through its [`CancelToken`].
    Cancelled,
}

/// How a spin driven by [`AnimationController::run`] ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SpinOutcome {
    Completed(Entry),
    Cancelled,
}

#[derive(Clone, Debug)]
struct ActiveSpin {
    plan: SpinPlan,
    started_at_ms: f64,
    winner_index: usize,
    /// Snapshot taken at start; later list replacements don't touch the running spin.
    entries: Arc<EntryList>,
}

#[derive(Clone, Debug)]
enum AnimationState {
    Idle,
    Spinning(ActiveSpin),
    Completed(Entry),
    Cancelled,
}

/// Drives one spin at a time from `start` to its completion event.
///
/// Time comes from the injected [`FrameClock`]; every frame emits `(position, window)` to the
/// [`SpinObserver`], and the last frame lands exactly on the requested ticket.
pub struct AnimationController<C, O> {
    entries: Arc<EntryList>,
    settings: SpinSettings,
    opts: ControllerOpts,
    clock: C,
    observer: O,
    state: AnimationState,
    cancel: CancelToken,
    rest_position: f64,
    window: VisibleWindow,
}

impl<C, O> AnimationController<C, O>
where
    C: FrameClock,
    O: SpinObserver,
{
    pub fn new(entries: EntryList, settings: SpinSettings, clock: C, observer: O) -> Self {
        Self {
            entries: Arc::new(entries),
            settings,
            opts: ControllerOpts::default(),
            clock,
            observer,
            state: AnimationState::Idle,
            cancel: CancelToken::default(),
            rest_position: 0.0,
            window: VisibleWindow::default(),
        }
    }

    pub fn with_opts(mut self, opts: ControllerOpts) -> SpinResult<Self> {
        opts.validate()?;
        self.opts = opts;
        Ok(self)
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn settings(&self) -> &SpinSettings {
        &self.settings
    }

    pub fn opts(&self) -> &ControllerOpts {
        &self.opts
    }

    /// Replace the entry list. A running spin keeps its own snapshot.
    pub fn set_entries(&mut self, entries: EntryList) {
        self.entries = Arc::new(entries);
    }

    /// Replace the settings. A running spin keeps its plan.
    pub fn set_settings(&mut self, settings: SpinSettings) {
        self.settings = settings;
    }

    /// Take fresh snapshots of entries and settings from `source`.
    pub fn refresh_from(&mut self, source: &dyn EntrySource) -> SpinResult<()> {
        let entries = source.entries()?;
        let settings = source.settings()?;
        self.set_entries(entries);
        self.set_settings(settings);
        Ok(())
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn phase(&self) -> SpinPhase {
        match self.state {
            AnimationState::Spinning(_) => SpinPhase::Spinning,
            AnimationState::Idle | AnimationState::Completed(_) | AnimationState::Cancelled => {
                SpinPhase::Idle
            }
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.phase() == SpinPhase::Spinning
    }

    /// Last emitted position (where the list currently rests when idle).
    pub fn position(&self) -> f64 {
        self.rest_position
    }

    /// Plan of the running spin, in on-screen positions.
    pub fn active_plan(&self) -> Option<&SpinPlan> {
        match &self.state {
            AnimationState::Spinning(active) => Some(&active.plan),
            _ => None,
        }
    }

    /// How the most recent spin ended, until the next `start`.
    pub fn last_outcome(&self) -> Option<SpinOutcome> {
        match &self.state {
            AnimationState::Completed(winner) => Some(SpinOutcome::Completed(winner.clone())),
            AnimationState::Cancelled => Some(SpinOutcome::Cancelled),
            AnimationState::Idle | AnimationState::Spinning(_) => None,
        }
    }

    /// Begin a spin that comes to rest on the entry holding `ticket`.
    ///
    /// All validation happens here; on error the controller stays idle and nothing is
    /// scheduled.
    #[tracing::instrument(skip(self), fields(entries = self.entries.len()))]
    pub fn start(&mut self, ticket: &str) -> SpinResult<()> {
        if self.is_spinning() {
            return Err(SpinError::AlreadySpinning);
        }
        if self.entries.is_empty() {
            return Err(SpinError::EmptyDataset);
        }
        self.settings.validate()?;
        let winner_index = self
            .entries
            .find_ticket(ticket)
            .ok_or_else(|| SpinError::target_not_found(ticket))?;

        // Same row on screen, without the whole passes of earlier spins.
        let origin = self.rest_position.rem_euclid(self.entries.len() as f64);
        let plan = plan_from(origin, winner_index, self.entries.len(), &self.settings)?;
        let started_at_ms = self.clock.now_ms();
        tracing::debug!(
            winner_index,
            origin,
            end = plan.end_position,
            duration_ms = plan.duration_ms,
            "spin started"
        );

        self.cancel.reset();
        self.state = AnimationState::Spinning(ActiveSpin {
            plan,
            started_at_ms,
            winner_index,
            entries: Arc::clone(&self.entries),
        });
        Ok(())
    }

    /// Stop the running spin immediately. No completion event fires. No-op when idle.
    pub fn cancel(&mut self) {
        if !self.is_spinning() {
            return;
        }
        self.state = AnimationState::Cancelled;
        tracing::debug!(position = self.rest_position, "spin cancelled");
    }

    /// Advance one frame.
    ///
    /// Emits a position update while spinning. The frame whose time fraction reaches 1 emits
    /// the exact end position and then the completion event. Ticks after completion or
    /// cancellation are no-ops.
    pub fn tick(&mut self) -> FrameOutcome {
        if self.cancel.is_cancelled() && self.is_spinning() {
            self.cancel();
            return FrameOutcome::Cancelled;
        }

        let AnimationState::Spinning(active) = &self.state else {
            return FrameOutcome::Idle;
        };

        let elapsed = self.clock.now_ms() - active.started_at_ms;
        let time_fraction = active.plan.time_fraction(elapsed);
        let position = active.plan.position_at(time_fraction);
        let total = active.plan.total_items;
        let done = time_fraction >= 1.0;
        let winner = if done {
            active.entries.get(active.winner_index).cloned()
        } else {
            None
        };

        visible_window_into(position, total, self.opts.window_radius, &mut self.window);
        self.rest_position = position;
        tracing::trace!(time_fraction, position, "frame");
        self.observer.on_position_update(position, &self.window);

        // The observer may have tripped the token while handling this frame.
        if self.cancel.is_cancelled() {
            self.cancel();
            return FrameOutcome::Cancelled;
        }
        if !done {
            return FrameOutcome::Continue;
        }

        let Some(winner) = winner else {
            // Unreachable: the index was resolved against this very snapshot.
            self.state = AnimationState::Idle;
            return FrameOutcome::Idle;
        };
        tracing::debug!(ticket = %winner.ticket_number, position, "spin completed");
        self.state = AnimationState::Completed(winner.clone());
        self.observer.on_spin_complete(&winner);
        FrameOutcome::Completed(winner)
    }

    /// Drive the active spin to its end, waiting on the clock between frames.
    ///
    /// Returns `None` when no spin is active.
    pub fn run(&mut self) -> Option<SpinOutcome> {
        loop {
            match self.tick() {
                FrameOutcome::Idle => return None,
                FrameOutcome::Continue => self.clock.wait_for_next_frame(),
                FrameOutcome::Completed(winner) => return Some(SpinOutcome::Completed(winner)),
                FrameOutcome::Cancelled => return Some(SpinOutcome::Cancelled),
            }
        }
    }

    /// [`start`](Self::start) followed by [`run`](Self::run).
    pub fn spin(&mut self, ticket: &str) -> SpinResult<SpinOutcome> {
        self.start(ticket)?;
        Ok(self.run().unwrap_or(SpinOutcome::Cancelled))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spin/controller.rs"]
mod tests;
