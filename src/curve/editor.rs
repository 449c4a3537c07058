use kurbo::Point;

use crate::curve::bezier::CurveParameters;
use crate::curve::presets::CurvePreset;

/// Which of the two draggable handles is being moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlPoint {
    First,
    Second,
}

/// Editable easing curve backing the settings screen.
///
/// Edits are clamped into the unit square, so the parameters handed to the planner always
/// validate. The editor has no notion of time; a new curve takes effect on the next spin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveEditor {
    params: CurveParameters,
}

impl CurveEditor {
    pub fn new(params: CurveParameters) -> Self {
        Self {
            params: params.clamped(),
        }
    }

    pub fn from_preset(preset: CurvePreset) -> Self {
        Self::new(preset.curve())
    }

    pub fn params(&self) -> CurveParameters {
        self.params
    }

    pub fn control_point(&self, which: ControlPoint) -> Point {
        match which {
            ControlPoint::First => Point::new(self.params.x1, self.params.y1),
            ControlPoint::Second => Point::new(self.params.x2, self.params.y2),
        }
    }

    /// Move one handle to `(x, y)`, clamping each coordinate into `[0, 1]`.
    pub fn set_control_point(&mut self, which: ControlPoint, x: f64, y: f64) {
        let mut next = self.params;
        match which {
            ControlPoint::First => {
                next.x1 = x;
                next.y1 = y;
            }
            ControlPoint::Second => {
                next.x2 = x;
                next.y2 = y;
            }
        }
        self.params = next.clamped();
        tracing::trace!(?which, params = ?self.params, "curve control point moved");
    }

    pub fn apply_preset(&mut self, preset: CurvePreset) {
        self.params = preset.curve();
    }

    /// The preset whose parameters equal the current curve, if any.
    pub fn matching_preset(&self) -> Option<CurvePreset> {
        CurvePreset::ALL
            .into_iter()
            .find(|p| p.curve() == self.params)
    }

    pub fn reset(&mut self) {
        self.params = CurveParameters::default();
    }

    /// Points for the editor's preview graph.
    pub fn preview(&self, samples: usize) -> Vec<Point> {
        self.params.sample_points(samples)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/editor.rs"]
mod tests;
