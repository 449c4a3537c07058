use crate::curve::bezier::CurveParameters;

/// Named easing curves offered by the curve editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurvePreset {
    Linear,
    EaseInOut,
    EaseOut,
    EaseIn,
    /// Very fast launch followed by a long, teasing crawl onto the winner.
    Dramatic,
    SmoothStop,
}

impl CurvePreset {
    pub const ALL: [Self; 6] = [
        Self::Linear,
        Self::EaseInOut,
        Self::EaseOut,
        Self::EaseIn,
        Self::Dramatic,
        Self::SmoothStop,
    ];

    pub const fn curve(self) -> CurveParameters {
        match self {
            Self::Linear => CurveParameters::LINEAR,
            Self::EaseInOut => CurveParameters::new(0.42, 0.0, 0.58, 1.0),
            Self::EaseOut => CurveParameters::new(0.0, 0.0, 0.58, 1.0),
            Self::EaseIn => CurveParameters::new(0.42, 0.0, 1.0, 1.0),
            Self::Dramatic => CurveParameters::new(0.05, 0.9, 0.1, 1.0),
            Self::SmoothStop => CurveParameters::new(0.2, 0.6, 0.35, 1.0),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::EaseInOut => "Ease In-Out",
            Self::EaseOut => "Ease Out",
            Self::EaseIn => "Ease In",
            Self::Dramatic => "Dramatic",
            Self::SmoothStop => "Smooth Stop",
        }
    }
}

/// How quickly the spin settles onto the winner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecelerationProfile {
    /// Long tail: most of the travel happens early, the last entries crawl past.
    Slow,
    #[default]
    Medium,
    /// Short tail: close to constant speed until a brisk stop.
    Fast,
}

impl DecelerationProfile {
    pub const fn curve(self) -> CurveParameters {
        match self {
            Self::Slow => CurveParameters::new(0.1, 0.85, 0.2, 1.0),
            Self::Medium => CurveParameters::new(0.15, 0.6, 0.3, 1.0),
            Self::Fast => CurveParameters::new(0.3, 0.45, 0.5, 1.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/presets.rs"]
mod tests;
