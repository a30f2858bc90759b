//! Modifier breakdown - Which equipment is actually changing the numbers

use crate::equipment::{Gadget, SecondaryModifiers};
use crate::laser::{
    contributing_modules, laser_secondary_modifiers, ActivationPolicy, MiningConfiguration,
};
use crate::types::{is_neutral, ShipType};
use serde::{Deserialize, Serialize};

/// What a contribution modifies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Power,
    Resistance,
}

/// A single non-neutral multiplier affecting a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierContribution {
    /// Laser the contribution sits on (`None` for gadgets)
    pub laser_index: Option<usize>,
    pub source_id: String,
    pub source_name: String,
    pub kind: ModifierKind,
    pub value: f64,
}

impl ModifierContribution {
    /// Signed percentage change (e.g., 0.7 → -30%)
    pub fn percent(&self) -> f64 {
        (self.value - 1.0) * 100.0
    }
}

/// List every multiplier that currently affects a ship's calculation
///
/// Multipliers of exactly 1 are never listed.
pub fn modifier_breakdown(
    config: &MiningConfiguration,
    gadgets: &[Gadget],
    ship_type: Option<ShipType>,
) -> Vec<ModifierContribution> {
    let mut contributions = Vec::new();
    let mut push =
        |laser_index: Option<usize>, id: &str, name: &str, kind: ModifierKind, value: f64| {
            if !is_neutral(value) {
                contributions.push(ModifierContribution {
                    laser_index,
                    source_id: id.to_string(),
                    source_name: name.to_string(),
                    kind,
                    value,
                });
            }
        };

    for (index, laser) in config.contributing_lasers(ship_type) {
        let Some(head) = laser.laser_head.as_ref() else {
            continue;
        };
        push(Some(index), &head.id, &head.name, ModifierKind::Resistance, head.resistance_modifier);

        for module in contributing_modules(laser, ActivationPolicy::Respect) {
            push(Some(index), &module.id, &module.name, ModifierKind::Power, module.power_modifier);
            push(
                Some(index),
                &module.id,
                &module.name,
                ModifierKind::Resistance,
                module.resistance_modifier,
            );
        }
    }

    for gadget in gadgets.iter().filter(|g| !g.is_none()) {
        push(None, &gadget.id, &gadget.name, ModifierKind::Resistance, gadget.resistance_modifier);
    }

    contributions
}

/// Secondary multipliers of all contributing lasers and gadgets combined
pub fn combined_secondary_modifiers(
    config: &MiningConfiguration,
    gadgets: &[Gadget],
    ship_type: Option<ShipType>,
) -> SecondaryModifiers {
    let lasers = config
        .contributing_lasers(ship_type)
        .map(|(_, laser)| laser_secondary_modifiers(laser, ActivationPolicy::Respect))
        .fold(SecondaryModifiers::default(), |acc, m| acc.combine(&m));

    gadgets
        .iter()
        .filter(|g| !g.is_none())
        .fold(lasers, |acc, g| acc.combine(&g.secondary))
}
