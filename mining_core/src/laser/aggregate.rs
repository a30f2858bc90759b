//! Laser aggregation - Fold a head and its modules into power and resistance
//!
//! Power uses additive stacking off the head's base power:
//! `power = max_power × (1 + Σ(power_modifier - 1))`
//!
//! Resistance multiplies through the head and every contributing module:
//! `resistance = head_resistance × Π(module_resistance)`

use super::LaserConfiguration;
use crate::equipment::{Module, SecondaryModifiers};

/// Whether module activation flags are honoured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivationPolicy {
    /// Active modules contribute only while activated
    #[default]
    Respect,
    /// Every module contributes (preview of the laser's full potential)
    Ignore,
}

/// Modules that currently affect the laser
pub(crate) fn contributing_modules(
    laser: &LaserConfiguration,
    policy: ActivationPolicy,
) -> impl Iterator<Item = &Module> {
    laser
        .modules
        .iter()
        .enumerate()
        .filter_map(move |(slot, module)| {
            let module = module.as_ref().filter(|m| !m.is_none())?;
            let contributes = module.is_passive()
                || policy == ActivationPolicy::Ignore
                || laser.is_module_active(slot);
            contributes.then_some(module)
        })
}

/// Power of a single laser (0 when unequipped)
pub fn laser_power(laser: &LaserConfiguration, policy: ActivationPolicy) -> f64 {
    let Some(head) = laser.laser_head.as_ref() else {
        return 0.0;
    };

    let bonus: f64 = contributing_modules(laser, policy)
        .map(|m| m.power_modifier - 1.0)
        .sum();

    let power = head.max_power * (1.0 + bonus);
    tracing::trace!(head = %head.id, power, bonus, "laser power");
    power
}

/// Resistance multiplier of a single laser (1 when unequipped)
pub fn laser_resistance_modifier(laser: &LaserConfiguration, policy: ActivationPolicy) -> f64 {
    let Some(head) = laser.laser_head.as_ref() else {
        return 1.0;
    };

    contributing_modules(laser, policy).fold(head.resistance_modifier, |acc, m| {
        acc * m.resistance_modifier
    })
}

/// Secondary multipliers of a single laser (neutral when unequipped)
pub fn laser_secondary_modifiers(
    laser: &LaserConfiguration,
    policy: ActivationPolicy,
) -> SecondaryModifiers {
    let Some(head) = laser.laser_head.as_ref() else {
        return SecondaryModifiers::default();
    };

    contributing_modules(laser, policy).fold(head.secondary, |acc, m| acc.combine(&m.secondary))
}
