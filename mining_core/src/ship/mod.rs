//! Ships and mining groups

use crate::equipment::{EquipmentCatalog, LaserHead};
use crate::laser::MiningConfiguration;
use crate::types::ShipType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of ships in a mining group
pub const MAX_GROUP_SIZE: usize = 4;

/// Error editing a mining group
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("Mining group is full ({max} ships)")]
    FleetFull { max: usize },
    #[error("Ship '{0}' is already in the group")]
    DuplicateShipId(String),
    #[error("Ship '{0}' not found in the group")]
    ShipNotFound(String),
}

fn default_true() -> bool {
    true
}

/// One ship in a mining group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipInstance {
    pub id: String,
    pub ship_type: ShipType,
    pub name: String,
    pub config: MiningConfiguration,
    /// Inactive ships contribute nothing
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ShipInstance {
    pub fn new(id: &str, ship_type: ShipType, name: &str, config: MiningConfiguration) -> Self {
        ShipInstance {
            id: id.to_string(),
            ship_type,
            name: name.to_string(),
            config,
            is_active: true,
        }
    }

    /// A ship fitted with its stock laser heads
    pub fn stock(id: &str, ship_type: ShipType, catalog: &EquipmentCatalog) -> Self {
        ShipInstance::new(
            id,
            ship_type,
            ship_type.name(),
            MiningConfiguration::for_ship(ship_type, catalog),
        )
    }

    /// Whether a laser head fits this ship's mounts
    pub fn accepts(&self, head: &LaserHead) -> bool {
        head.size <= self.ship_type.max_laser_size()
    }

    /// Total power of this ship's contributing lasers
    pub fn total_power(&self) -> f64 {
        self.config.total_power(Some(self.ship_type))
    }

    /// Product of this ship's contributing laser resistance multipliers
    pub fn equipment_resistance_modifier(&self) -> f64 {
        self.config.equipment_resistance_modifier(Some(self.ship_type))
    }
}

/// A fleet of independently configured ships
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiningGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ships: Vec<ShipInstance>,
}

impl MiningGroup {
    pub fn new() -> Self {
        MiningGroup::default()
    }

    /// Set the display name (builder style)
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Add a ship to the end of the group
    pub fn add_ship(&mut self, ship: ShipInstance) -> Result<(), GroupError> {
        if self.ships.len() >= MAX_GROUP_SIZE {
            return Err(GroupError::FleetFull { max: MAX_GROUP_SIZE });
        }
        if self.ship(&ship.id).is_some() {
            return Err(GroupError::DuplicateShipId(ship.id));
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Remove a ship by ID
    pub fn remove_ship(&mut self, id: &str) -> Result<ShipInstance, GroupError> {
        let index = self
            .ships
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| GroupError::ShipNotFound(id.to_string()))?;
        Ok(self.ships.remove(index))
    }

    pub fn ship(&self, id: &str) -> Option<&ShipInstance> {
        self.ships.iter().find(|s| s.id == id)
    }

    pub fn ship_mut(&mut self, id: &str) -> Option<&mut ShipInstance> {
        self.ships.iter_mut().find(|s| s.id == id)
    }

    /// Flip a ship's active flag, returning the new state
    pub fn toggle_ship(&mut self, id: &str) -> Result<bool, GroupError> {
        let ship = self
            .ship_mut(id)
            .ok_or_else(|| GroupError::ShipNotFound(id.to_string()))?;
        ship.is_active = !ship.is_active;
        Ok(ship.is_active)
    }

    /// Ships that contribute to calculations
    pub fn active_ships(&self) -> impl Iterator<Item = &ShipInstance> {
        self.ships.iter().filter(|s| s.is_active)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }
}
