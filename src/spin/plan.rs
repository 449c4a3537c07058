use crate::curve::bezier::CurveParameters;
use crate::foundation::error::{SpinError, SpinResult};
use crate::spin::settings::SpinSettings;

/// Upper bound on average speed, in entries per second. Spins covering more ground than
/// `min_duration_secs` allows at this speed are lengthened.
pub const MAX_AVERAGE_ITEMS_PER_SEC: f64 = 1200.0;

/// Precomputed trajectory for one spin.
///
/// Positions are in item units: one unit is one entry's display extent, and
/// `floor(position) mod total_items` is the entry under the pointer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SpinPlan {
    pub target_index: usize,
    pub total_items: usize,
    pub start_position: f64,
    pub end_position: f64,
    pub duration_ms: f64,
    pub curve: CurveParameters,
}

impl SpinPlan {
    /// Elapsed wall time as a fraction of the plan, clamped to `[0, 1]`.
    pub fn time_fraction(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || elapsed_ms.is_nan() {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn progress_at(&self, time_fraction: f64) -> f64 {
        self.curve.progress_at(time_fraction)
    }

    /// Position at `time_fraction`. A fraction of 1 yields exactly `end_position`.
    pub fn position_at(&self, time_fraction: f64) -> f64 {
        if time_fraction >= 1.0 {
            return self.end_position;
        }
        let p = self.progress_at(time_fraction);
        self.start_position + (self.end_position - self.start_position) * p
    }

    pub fn distance(&self) -> f64 {
        self.end_position - self.start_position
    }
}

/// Build the trajectory that lands on `target_index` after `rotation_count` full passes.
///
/// Travel is always forward. The plan starts at 0; see [`plan_from`] for a plan that
/// continues from an arbitrary on-screen position.
pub fn plan(
    target_index: usize,
    total_items: usize,
    settings: &SpinSettings,
) -> SpinResult<SpinPlan> {
    plan_from(0.0, target_index, total_items, settings)
}

/// Like [`plan`], starting at `start_position` instead of 0.
///
/// A fractional start first runs forward to the next whole row, so `end_position` is always
/// a whole number whose `floor mod total_items` is `target_index`.
#[tracing::instrument(skip(settings), fields(rotations = settings.rotation_count))]
pub fn plan_from(
    start_position: f64,
    target_index: usize,
    total_items: usize,
    settings: &SpinSettings,
) -> SpinResult<SpinPlan> {
    if total_items == 0 {
        return Err(SpinError::EmptyDataset);
    }
    if target_index >= total_items {
        return Err(SpinError::target_not_found(format!("#{target_index}")));
    }
    if !start_position.is_finite() || start_position < 0.0 {
        return Err(SpinError::invalid_configuration(format!(
            "start position must be finite and >= 0 (got {start_position})"
        )));
    }
    settings.validate()?;

    let base = start_position.ceil();
    let base_index = (base.rem_euclid(total_items as f64) as usize) % total_items;
    let ahead = (target_index + total_items - base_index) % total_items;
    let end_position =
        base + ahead as f64 + f64::from(settings.rotation_count) * total_items as f64;

    let travel = end_position - start_position;
    let floor_secs = travel / MAX_AVERAGE_ITEMS_PER_SEC;
    let duration_secs = settings.min_duration_secs.max(floor_secs);
    if floor_secs > settings.min_duration_secs {
        tracing::debug!(
            travel,
            duration_secs,
            "spin lengthened to keep average speed plausible"
        );
    }

    Ok(SpinPlan {
        target_index,
        total_items,
        start_position,
        end_position,
        duration_ms: duration_secs * 1000.0,
        curve: settings.resolved_curve(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/spin/plan.rs"]
mod tests;
