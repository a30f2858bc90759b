//! Core types shared across the mining calculator

use serde::{Deserialize, Serialize};

/// Sentinel identifier for an empty module or gadget slot
pub const NONE_ID: &str = "none";

/// Check whether an identifier refers to an empty slot
pub fn is_none_id(id: &str) -> bool {
    id.is_empty() || id == NONE_ID
}

/// Check whether a multiplier has no effect (exactly 1)
pub fn is_neutral(multiplier: f64) -> bool {
    (multiplier - 1.0).abs() < f64::EPSILON
}

/// How a rock's recorded resistance value was obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResistanceMode {
    /// The untouched resistance of the rock
    #[default]
    Base,
    /// Observed through a laser whose resistance multiplier distorted it
    Modified,
}

/// Whether a module is always on or needs activating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleCategory {
    Passive,
    Active,
}

/// How an active module coexists with other active modules on the same laser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    /// Only one sustained module may run per laser
    #[default]
    Sustained,
    /// Runs alongside any other active module
    Stackable,
}

/// Mining ship hulls and their laser mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipType {
    Prospector,
    Mole,
    Golem,
}

impl ShipType {
    /// Get all ship types
    pub fn all() -> &'static [ShipType] {
        &[ShipType::Prospector, ShipType::Mole, ShipType::Golem]
    }

    /// Stable identifier used in stored configurations
    pub fn id(&self) -> &'static str {
        match self {
            ShipType::Prospector => "prospector",
            ShipType::Mole => "mole",
            ShipType::Golem => "golem",
        }
    }

    /// Look up a ship type by identifier
    pub fn from_id(id: &str) -> Option<ShipType> {
        ShipType::all().iter().copied().find(|t| t.id() == id)
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ShipType::Prospector => "MISC Prospector",
            ShipType::Mole => "ARGO MOLE",
            ShipType::Golem => "Drake Golem",
        }
    }

    /// Number of laser mounts
    pub fn laser_slots(&self) -> usize {
        match self {
            ShipType::Prospector | ShipType::Golem => 1,
            ShipType::Mole => 3,
        }
    }

    /// Largest laser head size a mount accepts
    pub fn max_laser_size(&self) -> u8 {
        match self {
            ShipType::Prospector | ShipType::Golem => 1,
            ShipType::Mole => 2,
        }
    }

    /// Whether individual lasers can be left unmanned
    pub fn is_multi_crew(&self) -> bool {
        *self == crate::calculation::constants::MULTI_CREW_SHIP
    }

    /// Laser head fitted on a stock ship
    pub fn default_laser_head_id(&self) -> &'static str {
        match self {
            ShipType::Prospector => "arbor_mh1",
            ShipType::Mole => "arbor_mh2",
            ShipType::Golem => "pitman",
        }
    }
}
