//! Resistance resolution - Recover base resistance from a scanned value
//!
//! A rock's recorded resistance may already include the scanning laser's
//! resistance multiplier (modified mode) or the multiplier of gadgets that
//! were on the rock at scan time. Resolution divides those out and applies
//! the multiplier the caller wants going forward:
//!
//! - `forward = equipment × gadget`
//! - `derived_base = recorded / scan_modifier`
//! - `effective = derived_base × forward`

use super::result::ResistanceContext;
use crate::types::{is_neutral, ResistanceMode};

/// Everything the resolver needs to know about a scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceInputs {
    /// Recorded resistance value
    pub resistance: f64,
    pub mode: ResistanceMode,
    /// Whether gadgets were on the rock when it was scanned
    pub includes_gadgets_in_scan: bool,
    /// Equipment multiplier to apply going forward
    pub equipment_modifier: f64,
    /// Gadget multiplier to apply going forward
    pub gadget_modifier: f64,
    /// Gadget multiplier active during the scan
    pub scan_gadget_modifier: f64,
    /// Multiplier of the laser that performed the scan, when known
    pub scan_equipment_modifier: Option<f64>,
}

impl ResistanceInputs {
    /// Inputs for a rock with no gadgets and no known scanning laser
    pub fn new(resistance: f64, mode: ResistanceMode, equipment_modifier: f64) -> Self {
        ResistanceInputs {
            resistance,
            mode,
            includes_gadgets_in_scan: false,
            equipment_modifier,
            gadget_modifier: 1.0,
            scan_gadget_modifier: 1.0,
            scan_equipment_modifier: None,
        }
    }

    /// Multiplier applied to whatever base value is resolved
    pub fn forward_modifier(&self) -> f64 {
        self.equipment_modifier * self.gadget_modifier
    }

    /// Multiplier baked into the recorded value, if any
    fn scan_modifier(&self) -> Option<f64> {
        let scan_gadgets = if self.includes_gadgets_in_scan {
            self.scan_gadget_modifier
        } else {
            1.0
        };

        match self.mode {
            ResistanceMode::Base => {
                (self.includes_gadgets_in_scan && !is_neutral(scan_gadgets)).then_some(scan_gadgets)
            }
            ResistanceMode::Modified => {
                let scan_equipment =
                    self.scan_equipment_modifier.unwrap_or(self.equipment_modifier);
                Some(scan_equipment * scan_gadgets)
            }
        }
    }
}

/// Outcome of resistance resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceResolution {
    /// Resistance to use in the break check
    pub effective_resistance: f64,
    /// Present only when a reversal took place
    pub context: Option<ResistanceContext>,
}

/// Resolve the effective resistance of a scanned rock
pub fn resolve_resistance(inputs: &ResistanceInputs) -> ResistanceResolution {
    let forward = inputs.forward_modifier();
    let forward_only = ResistanceResolution {
        effective_resistance: inputs.resistance * forward,
        context: None,
    };

    let Some(scan_modifier) = inputs.scan_modifier() else {
        return forward_only;
    };

    if scan_modifier == 0.0 || !scan_modifier.is_finite() {
        tracing::warn!(scan_modifier, "cannot reverse resistance through this modifier");
        return forward_only;
    }

    let derived_base = inputs.resistance / scan_modifier;
    tracing::debug!(
        recorded = inputs.resistance,
        scan_modifier,
        derived_base,
        forward,
        "reversed scanned resistance"
    );

    ResistanceResolution {
        effective_resistance: derived_base * forward,
        context: Some(ResistanceContext {
            derived_base_resistance: derived_base,
            scan_modifier,
            applied_modifier: forward,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_mode_is_forward_only() {
        let mut inputs = ResistanceInputs::new(17.0, ResistanceMode::Base, 0.7);
        inputs.gadget_modifier = 0.5;

        let res = resolve_resistance(&inputs);
        assert!((res.effective_resistance - 17.0 * 0.7 * 0.5).abs() < 1e-9);
        assert!(res.context.is_none());
    }

    #[test]
    fn test_base_mode_with_scan_gadgets_reverses() {
        // Scanned 10 with a 0.5 gadget on the rock; true base is 20
        let inputs = ResistanceInputs {
            resistance: 10.0,
            mode: ResistanceMode::Base,
            includes_gadgets_in_scan: true,
            equipment_modifier: 0.7,
            gadget_modifier: 1.0,
            scan_gadget_modifier: 0.5,
            scan_equipment_modifier: None,
        };

        let res = resolve_resistance(&inputs);
        let context = res.context.unwrap();
        assert!((context.derived_base_resistance - 20.0).abs() < 1e-9);
        assert!((context.scan_modifier - 0.5).abs() < 1e-9);
        assert!((res.effective_resistance - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_base_mode_with_neutral_scan_gadgets_does_not_reverse() {
        let mut inputs = ResistanceInputs::new(30.0, ResistanceMode::Base, 0.7);
        inputs.includes_gadgets_in_scan = true;

        let res = resolve_resistance(&inputs);
        assert!(res.context.is_none());
        assert!((res.effective_resistance - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_modified_mode_falls_back_to_forward_equipment() {
        // Scanned 21 through a 0.7 laser; base 30; same laser going forward
        let inputs = ResistanceInputs::new(21.0, ResistanceMode::Modified, 0.7);

        let res = resolve_resistance(&inputs);
        let context = res.context.unwrap();
        assert!((context.derived_base_resistance - 30.0).abs() < 1e-9);
        assert!((res.effective_resistance - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_modified_mode_uses_scanning_laser() {
        // Ship has two 0.7 lasers (0.49 forward) but only one scanned
        let mut inputs = ResistanceInputs::new(21.0, ResistanceMode::Modified, 0.49);
        inputs.scan_equipment_modifier = Some(0.7);

        let res = resolve_resistance(&inputs);
        let context = res.context.unwrap();
        assert!((context.derived_base_resistance - 30.0).abs() < 1e-9);
        assert!((context.applied_modifier - 0.49).abs() < 1e-9);
        assert!((res.effective_resistance - 14.7).abs() < 1e-9);
    }

    #[test]
    fn test_modified_mode_divides_scan_gadgets() {
        let inputs = ResistanceInputs {
            resistance: 10.5,
            mode: ResistanceMode::Modified,
            includes_gadgets_in_scan: true,
            equipment_modifier: 0.7,
            gadget_modifier: 1.0,
            scan_gadget_modifier: 0.5,
            scan_equipment_modifier: None,
        };

        // 10.5 / (0.7 × 0.5) = 30; gadget removed going forward
        let res = resolve_resistance(&inputs);
        assert!((res.context.unwrap().derived_base_resistance - 30.0).abs() < 1e-9);
        assert!((res.effective_resistance - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_scan_gadgets_ignored_when_not_in_scan() {
        let mut inputs = ResistanceInputs::new(21.0, ResistanceMode::Modified, 0.7);
        inputs.scan_gadget_modifier = 0.5;

        let res = resolve_resistance(&inputs);
        assert!((res.context.unwrap().scan_modifier - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_zero_modifier_never_divides() {
        let inputs = ResistanceInputs::new(21.0, ResistanceMode::Modified, 0.0);

        let res = resolve_resistance(&inputs);
        assert!(res.context.is_none());
        assert!(res.effective_resistance.abs() < f64::EPSILON);

        let mut scan_zero = ResistanceInputs::new(21.0, ResistanceMode::Modified, 0.7);
        scan_zero.scan_equipment_modifier = Some(0.0);
        let res = resolve_resistance(&scan_zero);
        assert!(res.context.is_none());
        assert!((res.effective_resistance - 14.7).abs() < 1e-9);
    }
}
