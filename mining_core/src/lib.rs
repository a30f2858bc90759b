//! mining_core - Breakability calculation engine for mining equipment
//!
//! This library provides:
//! - EquipmentCatalog: Laser heads, modules and gadgets loaded from config
//! - LaserConfiguration: One laser mount with its modules and activation state
//! - Resistance resolution: Recovering base resistance from scanned values
//! - Breakability: Single-ship and fleet power vs. resistance checks

pub mod calculation;
pub mod config;
pub mod equipment;
pub mod laser;
pub mod prelude;
pub mod rock;
pub mod ship;
pub mod types;

// Re-export core types for convenience
pub use calculation::{
    calculate_breakability, calculate_group_breakability, combined_secondary_modifiers,
    modifier_breakdown, resolve_resistance, CalculationResult, ModifierContribution,
    ResistanceContext, ResistanceResolution,
};
pub use config::{default_catalog, load_catalog, parse_catalog, ConfigError};
pub use equipment::{CatalogError, EquipmentCatalog, Gadget, LaserHead, Module, SecondaryModifiers};
pub use laser::{LaserConfiguration, LaserError, MiningConfiguration};
pub use rock::{Rock, ScanSource};
pub use ship::{GroupError, MiningGroup, ShipInstance, MAX_GROUP_SIZE};
pub use types::{ActivationKind, ModuleCategory, ResistanceMode, ShipType, NONE_ID};
