//! Prelude module for convenient imports
//!
//! ```rust
//! use mining_core::prelude::*;
//! ```

// Equipment
pub use crate::equipment::{EquipmentCatalog, Gadget, LaserHead, Module, SecondaryModifiers};
pub use crate::config::default_catalog;

// Configurations
pub use crate::laser::{LaserConfiguration, MiningConfiguration};
pub use crate::rock::{Rock, ScanSource};
pub use crate::ship::{MiningGroup, ShipInstance};
pub use crate::types::{ActivationKind, ModuleCategory, ResistanceMode, ShipType};

// Calculation
pub use crate::calculation::{
    calculate_breakability, calculate_group_breakability, CalculationResult, ResistanceContext,
};
