//! Ball record types and quadrant classification
//!
//! A record is one parsed row of the spec sheet; the quadrant is the
//! static classification of the RG/Differential plane used for shading
//! and the ball details text.

/// Canonical RG window of the chart (low, high).
pub const RG_AXIS: (f64, f64) = (2.425, 2.550);

/// Canonical Differential window of the chart (low, high).
pub const DIFF_AXIS: (f64, f64) = (0.0425, 0.0600);

/// RG split point between the Early Roll and Later Roll halves.
pub const RG_MID: f64 = (RG_AXIS.0 + RG_AXIS.1) / 2.0;

/// Differential split point between the Light Oil and Heavy Oil halves.
pub const DIFF_MID: f64 = (DIFF_AXIS.0 + DIFF_AXIS.1) / 2.0;

/// One plottable bowling ball, parsed from a spec sheet row.
///
/// Records are immutable after parsing and rebuilt from scratch on every
/// reload; input row order is preserved by the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct BallRecord {
    pub name: String,
    /// Radius of gyration.
    pub rg: f64,
    /// RGmax - RGmin.
    pub differential: f64,
    /// RGint - RGmin. `None` for symmetric cores (blank in the input).
    pub mass_bias_differential: Option<f64>,
    /// Icon reference as given in the input; resolution happens at load time.
    pub icon_path: Option<String>,
}

impl BallRecord {
    /// Asymmetric cores are the ones that carry an intermediate differential.
    pub fn is_asymmetric(&self) -> bool {
        self.mass_bias_differential.is_some()
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::classify(self.rg, self.differential)
    }
}

/// Quadrant of the RG/Differential plane, split at the fixed midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    HighRgLowDiff,
    HighRgHighDiff,
    LowRgLowDiff,
    LowRgHighDiff,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::HighRgLowDiff,
        Quadrant::HighRgHighDiff,
        Quadrant::LowRgLowDiff,
        Quadrant::LowRgHighDiff,
    ];

    /// Classify a ball by its core numbers. The split points are fixed, not
    /// derived from the loaded data, so a ball keeps its quadrant when other
    /// rows come and go.
    pub fn classify(rg: f64, differential: f64) -> Self {
        match (rg > RG_MID, differential >= DIFF_MID) {
            (true, false) => Quadrant::HighRgLowDiff,
            (true, true) => Quadrant::HighRgHighDiff,
            (false, false) => Quadrant::LowRgLowDiff,
            (false, true) => Quadrant::LowRgHighDiff,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::HighRgLowDiff => "High RG / Low Diff",
            Quadrant::HighRgHighDiff => "High RG / High Diff",
            Quadrant::LowRgLowDiff => "Low RG / Low Diff",
            Quadrant::LowRgHighDiff => "Low RG / High Diff",
        }
    }

    /// Roll descriptor for the RG half.
    pub fn roll(&self) -> &'static str {
        match self {
            Quadrant::HighRgLowDiff | Quadrant::HighRgHighDiff => "Later Roll",
            Quadrant::LowRgLowDiff | Quadrant::LowRgHighDiff => "Early Roll",
        }
    }

    /// Oil descriptor for the Differential half.
    pub fn oil(&self) -> &'static str {
        match self {
            Quadrant::HighRgHighDiff | Quadrant::LowRgHighDiff => "Heavy Oil",
            Quadrant::HighRgLowDiff | Quadrant::LowRgLowDiff => "Light Oil",
        }
    }

    /// Ideal lane conditions blurb shown in the ball details panel.
    pub fn ideal_conditions(&self) -> &'static str {
        match self {
            Quadrant::HighRgLowDiff => {
                "Best for light to medium oil with a controllable backend."
            }
            Quadrant::HighRgHighDiff => "Medium to heavy oil with length and backend pop.",
            Quadrant::LowRgLowDiff => "Medium oil; smooth, early rolling ball.",
            Quadrant::LowRgHighDiff => "Heavy oil with early roll and strong backend.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rg: f64, differential: f64) -> BallRecord {
        BallRecord {
            name: "Test Ball".to_string(),
            rg,
            differential,
            mass_bias_differential: None,
            icon_path: None,
        }
    }

    #[test]
    fn midpoints_sit_inside_the_canonical_window() {
        assert!(RG_AXIS.0 < RG_MID && RG_MID < RG_AXIS.1);
        assert!(DIFF_AXIS.0 < DIFF_MID && DIFF_MID < DIFF_AXIS.1);
    }

    #[test]
    fn classify_covers_all_four_quadrants() {
        assert_eq!(Quadrant::classify(2.51, 0.047), Quadrant::HighRgLowDiff);
        assert_eq!(Quadrant::classify(2.51, 0.054), Quadrant::HighRgHighDiff);
        assert_eq!(Quadrant::classify(2.47, 0.048), Quadrant::LowRgLowDiff);
        assert_eq!(Quadrant::classify(2.47, 0.056), Quadrant::LowRgHighDiff);
    }

    #[test]
    fn classify_boundary_follows_the_midpoints() {
        // Exactly on the RG split counts as low RG, exactly on the Diff
        // split counts as high Diff.
        assert_eq!(Quadrant::classify(RG_MID, DIFF_MID), Quadrant::LowRgHighDiff);
    }

    #[test]
    fn quadrant_descriptors_agree_with_the_halves() {
        assert_eq!(record(2.51, 0.047).quadrant().roll(), "Later Roll");
        assert_eq!(record(2.47, 0.047).quadrant().roll(), "Early Roll");
        assert_eq!(record(2.47, 0.056).quadrant().oil(), "Heavy Oil");
        assert_eq!(record(2.47, 0.047).quadrant().oil(), "Light Oil");
    }

    #[test]
    fn quadrant_texts_are_distinct() {
        for (i, a) in Quadrant::ALL.iter().enumerate() {
            for b in &Quadrant::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.ideal_conditions(), b.ideal_conditions());
            }
        }
    }

    #[test]
    fn asymmetry_is_presence_of_the_mass_bias_value() {
        let mut ball = record(2.49, 0.047);
        assert!(!ball.is_asymmetric());
        ball.mass_bias_differential = Some(0.015);
        assert!(ball.is_asymmetric());
    }
}
