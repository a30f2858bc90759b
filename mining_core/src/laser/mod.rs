//! Laser mounts and ship configurations

mod activation;
mod aggregate;

pub use activation::toggle_activation;
pub(crate) use aggregate::contributing_modules;
pub use aggregate::{
    laser_power, laser_resistance_modifier, laser_secondary_modifiers, ActivationPolicy,
};

use crate::equipment::{EquipmentCatalog, LaserHead, Module};
use crate::types::ShipType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error editing a laser mount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaserError {
    #[error("Module slot {slot} out of range (laser has {slots} slots)")]
    SlotOutOfRange { slot: usize, slots: usize },
}

fn default_true() -> bool {
    true
}

/// One laser mount: head, module slots and which slots are activated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserConfiguration {
    /// Equipped head (`None` = unequipped)
    #[serde(default)]
    pub laser_head: Option<LaserHead>,
    /// Module slots, sized to the head's slot count
    #[serde(default)]
    pub modules: Vec<Option<Module>>,
    /// Activation flag per slot (only meaningful for active modules)
    #[serde(default)]
    pub active_modules: Vec<bool>,
    /// Whether the mount is crewed (multi-crew ships only)
    #[serde(default = "default_true")]
    pub is_manned: bool,
}

impl Default for LaserConfiguration {
    fn default() -> Self {
        LaserConfiguration::new(None)
    }
}

impl LaserConfiguration {
    /// Create a manned mount with empty, inactive module slots
    pub fn new(laser_head: Option<LaserHead>) -> Self {
        let slots = laser_head.as_ref().map_or(0, |h| h.module_slots);
        LaserConfiguration {
            laser_head,
            modules: vec![None; slots],
            active_modules: vec![false; slots],
            is_manned: true,
        }
    }

    /// Add a module to the next free slot (builder style)
    pub fn with_module(mut self, module: Module) -> Self {
        if let Some(slot) = self.modules.iter().position(Option::is_none) {
            self.modules[slot] = Some(module);
        }
        self
    }

    /// Set the manned flag (builder style)
    pub fn manned(mut self, is_manned: bool) -> Self {
        self.is_manned = is_manned;
        self
    }

    /// Number of module slots on the equipped head
    pub fn module_slots(&self) -> usize {
        self.laser_head.as_ref().map_or(0, |h| h.module_slots)
    }

    pub fn is_equipped(&self) -> bool {
        self.laser_head.is_some()
    }

    /// Swap the head, discarding all modules and activation state
    pub fn set_laser_head(&mut self, laser_head: Option<LaserHead>) {
        let is_manned = self.is_manned;
        *self = LaserConfiguration::new(laser_head);
        self.is_manned = is_manned;
    }

    /// Place a module in a slot; the slot starts inactive
    pub fn set_module(&mut self, slot: usize, module: Option<Module>) -> Result<(), LaserError> {
        self.check_slot(slot)?;
        self.normalize_activation();
        self.modules[slot] = module.filter(|m| !m.is_none());
        self.active_modules[slot] = false;
        Ok(())
    }

    /// Toggle an active module, returning the slot's new state
    ///
    /// Activating a sustained module deactivates the other sustained
    /// modules on this laser. Passive and empty slots are left alone.
    pub fn toggle_module(&mut self, slot: usize) -> Result<bool, LaserError> {
        self.check_slot(slot)?;
        self.active_modules = toggle_activation(&self.modules, &self.active_modules, slot);
        Ok(self.active_modules[slot])
    }

    /// Whether the module in `slot` is activated
    pub fn is_module_active(&self, slot: usize) -> bool {
        self.active_modules.get(slot).copied().unwrap_or(false)
    }

    /// Number of activated active modules
    pub fn active_module_count(&self) -> usize {
        self.modules
            .iter()
            .enumerate()
            .filter(|(slot, m)| {
                let is_active_module = matches!(m, Some(m) if m.is_active() && !m.is_none());
                is_active_module && self.is_module_active(*slot)
            })
            .count()
    }

    /// Power contribution of this laser, respecting activation state
    pub fn power(&self) -> f64 {
        laser_power(self, ActivationPolicy::Respect)
    }

    /// Resistance multiplier of this laser, respecting activation state
    pub fn resistance_modifier(&self) -> f64 {
        laser_resistance_modifier(self, ActivationPolicy::Respect)
    }

    fn check_slot(&self, slot: usize) -> Result<(), LaserError> {
        let slots = self.modules.len();
        if slot >= slots {
            return Err(LaserError::SlotOutOfRange { slot, slots });
        }
        Ok(())
    }

    fn normalize_activation(&mut self) {
        self.active_modules.resize(self.modules.len(), false);
    }
}

/// All laser mounts of one ship
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiningConfiguration {
    pub lasers: Vec<LaserConfiguration>,
}

impl MiningConfiguration {
    pub fn new(lasers: Vec<LaserConfiguration>) -> Self {
        MiningConfiguration { lasers }
    }

    /// Stock configuration: the ship's default head on every mount
    pub fn for_ship(ship_type: ShipType, catalog: &EquipmentCatalog) -> Self {
        let head = catalog.laser_head(ship_type.default_laser_head_id()).cloned();
        if head.is_none() {
            tracing::warn!(
                ship = ship_type.id(),
                head = ship_type.default_laser_head_id(),
                "default laser head missing from catalog"
            );
        }
        let lasers = (0..ship_type.laser_slots())
            .map(|_| LaserConfiguration::new(head.clone()))
            .collect();
        MiningConfiguration { lasers }
    }

    /// Lasers that count towards totals on the given ship type
    ///
    /// Unmanned lasers only drop out on multi-crew ships.
    pub fn contributing_lasers(
        &self,
        ship_type: Option<ShipType>,
    ) -> impl Iterator<Item = (usize, &LaserConfiguration)> {
        let multi_crew = ship_type.is_some_and(|t| t.is_multi_crew());
        self.lasers
            .iter()
            .enumerate()
            .filter(move |(_, laser)| !multi_crew || laser.is_manned)
    }

    /// Sum of laser power over contributing lasers
    pub fn total_power(&self, ship_type: Option<ShipType>) -> f64 {
        self.contributing_lasers(ship_type)
            .map(|(_, laser)| laser.power())
            .sum()
    }

    /// Product of resistance multipliers over contributing, equipped lasers
    pub fn equipment_resistance_modifier(&self, ship_type: Option<ShipType>) -> f64 {
        self.contributing_lasers(ship_type)
            .filter(|(_, laser)| laser.is_equipped())
            .map(|(_, laser)| laser.resistance_modifier())
            .product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivationKind;

    fn helix() -> LaserHead {
        LaserHead::new("helix_1", "Helix I", 1, 3360.0, 0.7, 2)
    }

    #[test]
    fn test_new_laser_sizes_slots() {
        let laser = LaserConfiguration::new(Some(helix()));
        assert_eq!(laser.modules.len(), 2);
        assert_eq!(laser.active_modules, vec![false, false]);
        assert!(laser.is_manned);

        let empty = LaserConfiguration::new(None);
        assert!(empty.modules.is_empty());
    }

    #[test]
    fn test_set_laser_head_resets_modules() {
        let mut laser = LaserConfiguration::new(Some(helix()))
            .with_module(Module::active("surge", "Surge", ActivationKind::Sustained, 1.5, 0.85));
        laser.toggle_module(0).unwrap();
        laser.is_manned = false;

        laser.set_laser_head(Some(LaserHead::new("helix_2", "Helix II", 2, 4080.0, 0.7, 3)));
        assert_eq!(laser.modules, vec![None, None, None]);
        assert_eq!(laser.active_modules, vec![false, false, false]);
        assert!(!laser.is_manned);
        assert!((laser.power() - 4080.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_module_out_of_range() {
        let mut laser = LaserConfiguration::new(Some(helix()));
        let err = laser.set_module(2, None).unwrap_err();
        assert_eq!(err, LaserError::SlotOutOfRange { slot: 2, slots: 2 });
    }

    #[test]
    fn test_set_module_clears_activation() {
        let mut laser = LaserConfiguration::new(Some(helix()))
            .with_module(Module::active("surge", "Surge", ActivationKind::Sustained, 1.5, 0.85));
        assert!(laser.toggle_module(0).unwrap());

        laser
            .set_module(0, Some(Module::active("brandt", "Brandt", ActivationKind::Sustained, 1.35, 1.15)))
            .unwrap();
        assert!(!laser.is_module_active(0));
        assert_eq!(laser.active_module_count(), 0);
    }

    #[test]
    fn test_unmanned_only_drops_on_multi_crew() {
        let config = MiningConfiguration::new(vec![
            LaserConfiguration::new(Some(helix())),
            LaserConfiguration::new(Some(helix())).manned(false),
        ]);

        assert!((config.total_power(None) - 6720.0).abs() < f64::EPSILON);
        assert!((config.total_power(Some(ShipType::Prospector)) - 6720.0).abs() < f64::EPSILON);
        assert!((config.total_power(Some(ShipType::Mole)) - 3360.0).abs() < f64::EPSILON);
        assert!((config.equipment_resistance_modifier(Some(ShipType::Mole)) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_equipment_modifier_multiplies_across_lasers() {
        let config = MiningConfiguration::new(vec![
            LaserConfiguration::new(Some(helix())),
            LaserConfiguration::new(Some(helix())),
            LaserConfiguration::new(None),
        ]);
        assert!((config.equipment_resistance_modifier(None) - 0.49).abs() < 1e-9);
    }

    #[test]
    fn test_no_equipped_lasers_is_neutral() {
        let config = MiningConfiguration::new(vec![LaserConfiguration::new(None)]);
        assert!((config.equipment_resistance_modifier(None) - 1.0).abs() < f64::EPSILON);
        assert!(config.total_power(None).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_manned_field_means_manned() {
        let json = r#"{"laser_head":null,"modules":[],"active_modules":[]}"#;
        let laser: LaserConfiguration = serde_json::from_str(json).unwrap();
        assert!(laser.is_manned);
    }
}
