use crate::curve::bezier::CurveParameters;
use crate::curve::presets::DecelerationProfile;
use crate::foundation::error::{SpinError, SpinResult};

/// Operator-facing spin configuration, read once when a spin starts.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpinSettings {
    /// Lower bound on the spin length. The planner may lengthen a spin, never shorten it.
    pub min_duration_secs: f64,
    pub deceleration: DecelerationProfile,
    /// Overrides `deceleration` when present.
    pub custom_curve: Option<CurveParameters>,
    /// Full passes over the list before landing on the target.
    pub rotation_count: u32,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            min_duration_secs: 5.0,
            deceleration: DecelerationProfile::default(),
            custom_curve: None,
            rotation_count: 3,
        }
    }
}

impl SpinSettings {
    pub fn from_json_str(s: &str) -> SpinResult<Self> {
        let settings: Self =
            serde_json::from_str(s).map_err(|e| SpinError::serde(format!("settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> SpinResult<()> {
        if !self.min_duration_secs.is_finite() || self.min_duration_secs <= 0.0 {
            return Err(SpinError::invalid_configuration(format!(
                "min_duration_secs must be > 0 (got {})",
                self.min_duration_secs
            )));
        }
        if let Some(curve) = &self.custom_curve {
            curve.validate()?;
        }
        Ok(())
    }

    /// The easing curve a spin with these settings uses.
    pub fn resolved_curve(&self) -> CurveParameters {
        self.custom_curve
            .unwrap_or_else(|| self.deceleration.curve())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spin/settings.rs"]
mod tests;
