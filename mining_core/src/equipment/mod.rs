//! Equipment catalog - Read-only reference data looked up by identifier

mod secondary;
mod types;

pub use secondary::SecondaryModifiers;
pub use types::{Gadget, LaserHead, Module};

use crate::laser::LaserConfiguration;
use crate::types::is_none_id;
use std::collections::HashMap;
use thiserror::Error;

/// Error resolving equipment identifiers against a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown {kind} '{id}'")]
    UnknownEquipment { kind: &'static str, id: String },
}

/// Immutable lookup table of all known equipment
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    laser_heads: HashMap<String, LaserHead>,
    modules: HashMap<String, Module>,
    gadgets: HashMap<String, Gadget>,
}

impl EquipmentCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        EquipmentCatalog::default()
    }

    /// Register a laser head, returning any entry it replaced
    pub fn register_laser_head(&mut self, head: LaserHead) -> Option<LaserHead> {
        self.laser_heads.insert(head.id.clone(), head)
    }

    /// Register a module, returning any entry it replaced
    pub fn register_module(&mut self, module: Module) -> Option<Module> {
        self.modules.insert(module.id.clone(), module)
    }

    /// Register a gadget, returning any entry it replaced
    pub fn register_gadget(&mut self, gadget: Gadget) -> Option<Gadget> {
        self.gadgets.insert(gadget.id.clone(), gadget)
    }

    /// Get a laser head by ID
    pub fn laser_head(&self, id: &str) -> Option<&LaserHead> {
        if is_none_id(id) {
            return None;
        }
        self.laser_heads.get(id)
    }

    /// Get a module by ID
    pub fn module(&self, id: &str) -> Option<&Module> {
        if is_none_id(id) {
            return None;
        }
        self.modules.get(id)
    }

    /// Get a gadget by ID
    pub fn gadget(&self, id: &str) -> Option<&Gadget> {
        if is_none_id(id) {
            return None;
        }
        self.gadgets.get(id)
    }

    /// All laser heads sorted by name
    pub fn laser_heads(&self) -> Vec<&LaserHead> {
        let mut heads: Vec<_> = self.laser_heads.values().collect();
        heads.sort_by(|a, b| a.name.cmp(&b.name));
        heads
    }

    /// Laser heads of the given size class, sorted by name
    pub fn laser_heads_for_size(&self, size: u8) -> Vec<&LaserHead> {
        self.laser_heads()
            .into_iter()
            .filter(|head| head.size == size)
            .collect()
    }

    /// All modules sorted by name
    pub fn modules(&self) -> Vec<&Module> {
        let mut modules: Vec<_> = self.modules.values().collect();
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        modules
    }

    /// All gadgets sorted by name
    pub fn gadgets(&self) -> Vec<&Gadget> {
        let mut gadgets: Vec<_> = self.gadgets.values().collect();
        gadgets.sort_by(|a, b| a.name.cmp(&b.name));
        gadgets
    }

    /// Build a laser mount from a head ID and module IDs
    ///
    /// `"none"` leaves a slot (or the head) empty. Module IDs beyond the
    /// head's slot count are dropped.
    pub fn laser_configuration(
        &self,
        head_id: &str,
        module_ids: &[&str],
    ) -> Result<LaserConfiguration, CatalogError> {
        let head = if is_none_id(head_id) {
            None
        } else {
            Some(self.laser_head(head_id).cloned().ok_or_else(|| CatalogError::UnknownEquipment {
                kind: "laser head",
                id: head_id.to_string(),
            })?)
        };

        let mut laser = LaserConfiguration::new(head);
        let slots = laser.module_slots();
        let dropped = dropped_module_count(module_ids, slots);
        if dropped > 0 {
            tracing::warn!(
                head = head_id,
                slots,
                dropped,
                "dropping modules beyond the head's slot count"
            );
        }

        for (slot, id) in module_ids.iter().take(slots).enumerate() {
            if is_none_id(id) {
                continue;
            }
            let module = self.module(id).cloned().ok_or_else(|| CatalogError::UnknownEquipment {
                kind: "module",
                id: id.to_string(),
            })?;
            laser.modules[slot] = Some(module);
        }

        Ok(laser)
    }

    /// Resolve gadget IDs, skipping `"none"` entries
    pub fn gadget_list(&self, ids: &[&str]) -> Result<Vec<Gadget>, CatalogError> {
        ids.iter()
            .filter(|id| !is_none_id(id))
            .map(|id| {
                self.gadget(id).cloned().ok_or_else(|| CatalogError::UnknownEquipment {
                    kind: "gadget",
                    id: id.to_string(),
                })
            })
            .collect()
    }

    /// Number of entries of every kind
    pub fn len(&self) -> usize {
        self.laser_heads.len() + self.modules.len() + self.gadgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of real modules listed past the last slot
fn dropped_module_count(module_ids: &[&str], slots: usize) -> usize {
    module_ids.iter().skip(slots).filter(|id| !is_none_id(id)).count()
}
