//! Breakability calculation - Laser power vs. rock resistance

mod breakdown;
mod group;
mod resistance;
mod result;
mod single;

pub use breakdown::{
    combined_secondary_modifiers, modifier_breakdown, ModifierContribution, ModifierKind,
};
pub use group::calculate_group_breakability;
pub use resistance::{resolve_resistance, ResistanceInputs, ResistanceResolution};
pub use result::{lp_required, CalculationResult, ResistanceContext};
pub use single::calculate_breakability;

use crate::equipment::Gadget;

/// Breakability formula constants
pub mod constants {
    use crate::types::ShipType;

    /// Converts a resistance percentage into a fraction
    pub const RESISTANCE_SCALE: f64 = 0.01;

    /// Laser power needed = mass / (1 - resistance) / LP_DIVISOR
    pub const LP_DIVISOR: f64 = 5.0;

    /// Ship type whose lasers can be left unmanned
    pub const MULTI_CREW_SHIP: ShipType = ShipType::Mole;
}

/// Product of gadget resistance multipliers, skipping `"none"` entries
pub fn gadget_resistance_modifier(gadgets: &[Gadget]) -> f64 {
    gadgets
        .iter()
        .filter(|g| !g.is_none())
        .map(|g| g.resistance_modifier)
        .product()
}
