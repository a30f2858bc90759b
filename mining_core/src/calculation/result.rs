//! CalculationResult - Outcome of a breakability check

use super::constants::{LP_DIVISOR, RESISTANCE_SCALE};
use super::resistance::ResistanceResolution;
use crate::rock::Rock;
use serde::{Deserialize, Serialize};

/// Whether a requirement can never be met by any amount of power
///
/// True when the adjusted resistance is at or above 100, or the requirement
/// is infinite, NaN or negative.
fn is_unbreakable(adjusted_resistance: f64, adjusted_lp_needed: f64) -> bool {
    adjusted_resistance >= 100.0 || !adjusted_lp_needed.is_finite() || adjusted_lp_needed < 0.0
}

/// Serde adapter for figures that may be infinite
///
/// JSON has no literal for infinity or NaN, so non-finite values are written
/// as the strings `"inf"`, `"-inf"` and `"NaN"` and read back from them.
mod non_finite {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid number: {}", other))),
            },
        }
    }
}

/// Laser power needed to break `mass` at `resistance` percent
///
/// `mass / (1 - resistance × 0.01) / 5`. Resistance at 100 yields infinity
/// and above 100 a negative requirement; neither panics.
pub fn lp_required(mass: f64, resistance: f64) -> f64 {
    if mass == 0.0 {
        return 0.0;
    }
    mass / (1.0 - resistance * RESISTANCE_SCALE) / LP_DIVISOR
}

/// How the effective resistance was derived from a scanned value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceContext {
    /// Base resistance recovered from the recorded value
    pub derived_base_resistance: f64,
    /// Multiplier divided out of the recorded value
    pub scan_modifier: f64,
    /// Multiplier applied to the derived base
    pub applied_modifier: f64,
}

/// Result of checking equipment against a rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    // === Power ===
    /// Combined power of all contributing lasers
    pub total_laser_power: f64,

    // === Resistance ===
    /// Combined laser equipment multiplier
    pub equipment_modifier: f64,
    /// Combined gadget multiplier
    pub gadget_modifier: f64,
    /// Multiplier actually applied (equipment × gadget)
    pub total_resistance_modifier: f64,
    /// Resistance used for the break check
    pub adjusted_resistance: f64,

    // === Requirements ===
    /// Power needed at the rock's recorded resistance
    #[serde(with = "non_finite")]
    pub base_lp_needed: f64,
    /// Power needed at the adjusted resistance (the break threshold)
    #[serde(with = "non_finite")]
    pub adjusted_lp_needed: f64,

    // === Verdict ===
    pub can_break: bool,
    /// Surplus (or deficit) of power over the threshold
    #[serde(with = "non_finite")]
    pub power_margin: f64,
    #[serde(with = "non_finite")]
    pub power_margin_percent: f64,

    /// Present only when a scanned value was reversed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistance_context: Option<ResistanceContext>,
}

impl CalculationResult {
    /// Assemble a result from resolved inputs
    pub fn new(
        total_laser_power: f64,
        equipment_modifier: f64,
        gadget_modifier: f64,
        rock: &Rock,
        resolution: ResistanceResolution,
    ) -> Self {
        let adjusted_resistance = resolution.effective_resistance;
        let base_lp_needed = lp_required(rock.mass, rock.resistance);
        let adjusted_lp_needed = lp_required(rock.mass, adjusted_resistance);
        let power_margin = total_laser_power - adjusted_lp_needed;
        let unbreakable = is_unbreakable(adjusted_resistance, adjusted_lp_needed);

        // Zero or unbounded requirements have no meaningful percentage
        let power_margin_percent = if adjusted_lp_needed == 0.0 || !adjusted_lp_needed.is_finite() {
            0.0
        } else {
            power_margin / adjusted_lp_needed * 100.0
        };

        CalculationResult {
            total_laser_power,
            equipment_modifier,
            gadget_modifier,
            total_resistance_modifier: equipment_modifier * gadget_modifier,
            adjusted_resistance,
            base_lp_needed,
            adjusted_lp_needed,
            can_break: !unbreakable && total_laser_power >= adjusted_lp_needed,
            power_margin,
            power_margin_percent,
            resistance_context: resolution.context,
        }
    }

    /// Result when nothing contributes: no power, neutral modifiers, no verdict
    pub fn empty(rock: &Rock) -> Self {
        let base_lp_needed = lp_required(rock.mass, rock.resistance);
        CalculationResult {
            total_laser_power: 0.0,
            equipment_modifier: 1.0,
            gadget_modifier: 1.0,
            total_resistance_modifier: 1.0,
            adjusted_resistance: rock.resistance,
            base_lp_needed,
            adjusted_lp_needed: base_lp_needed,
            can_break: false,
            power_margin: 0.0,
            power_margin_percent: 0.0,
            resistance_context: None,
        }
    }

    /// Whether the rock is effectively unbreakable regardless of power
    pub fn is_degenerate(&self) -> bool {
        is_unbreakable(self.adjusted_resistance, self.adjusted_lp_needed)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.is_degenerate() {
            return format!(
                "Cannot break: resistance {:.1}% is at or above 100%",
                self.adjusted_resistance
            );
        }

        let verdict = if self.can_break { "Can break" } else { "Cannot break" };
        format!(
            "{}: {:.0} LP vs {:.0} needed ({:+.1}%)",
            verdict, self.total_laser_power, self.adjusted_lp_needed, self.power_margin_percent
        )
    }
}
