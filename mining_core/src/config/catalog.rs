//! Equipment catalog loading and validation

use super::ConfigError;
use crate::equipment::{EquipmentCatalog, Gadget, LaserHead, Module};
use crate::types::is_none_id;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Most module slots any laser head carries
pub const MAX_MODULE_SLOTS: usize = 3;

/// On-disk shape of an equipment catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub laser_heads: Vec<LaserHead>,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub gadgets: Vec<Gadget>,
}

fn check_id(kind: &str, id: &str, seen: &mut HashSet<String>) -> Result<(), ConfigError> {
    if is_none_id(id) {
        return Err(ConfigError::ValidationError(format!(
            "{kind} uses reserved identifier '{id}'"
        )));
    }
    if !seen.insert(id.to_string()) {
        return Err(ConfigError::ValidationError(format!("duplicate {kind} '{id}'")));
    }
    Ok(())
}

fn check_multipliers(
    id: &str,
    values: impl IntoIterator<Item = f64>,
) -> Result<(), ConfigError> {
    for value in values {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "'{id}' has invalid multiplier {value}"
            )));
        }
    }
    Ok(())
}

impl CatalogFile {
    /// Validate entries and build an immutable catalog
    pub fn into_catalog(self) -> Result<EquipmentCatalog, ConfigError> {
        let mut catalog = EquipmentCatalog::new();

        let mut seen = HashSet::new();
        for head in self.laser_heads {
            check_id("laser head", &head.id, &mut seen)?;
            if !(1..=2).contains(&head.size) {
                return Err(ConfigError::ValidationError(format!(
                    "laser head '{}' has size {} (expected 1 or 2)",
                    head.id, head.size
                )));
            }
            if head.module_slots > MAX_MODULE_SLOTS {
                return Err(ConfigError::ValidationError(format!(
                    "laser head '{}' has {} module slots (max {MAX_MODULE_SLOTS})",
                    head.id, head.module_slots
                )));
            }
            if !head.max_power.is_finite() || head.max_power < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "laser head '{}' has invalid power {}",
                    head.id, head.max_power
                )));
            }
            check_multipliers(
                &head.id,
                std::iter::once(head.resistance_modifier).chain(head.secondary.values()),
            )?;
            catalog.register_laser_head(head);
        }

        let mut seen = HashSet::new();
        for module in self.modules {
            check_id("module", &module.id, &mut seen)?;
            check_multipliers(
                &module.id,
                [module.power_modifier, module.resistance_modifier]
                    .into_iter()
                    .chain(module.secondary.values()),
            )?;
            catalog.register_module(module);
        }

        let mut seen = HashSet::new();
        for gadget in self.gadgets {
            check_id("gadget", &gadget.id, &mut seen)?;
            check_multipliers(
                &gadget.id,
                std::iter::once(gadget.resistance_modifier).chain(gadget.secondary.values()),
            )?;
            catalog.register_gadget(gadget);
        }

        Ok(catalog)
    }
}

/// Load a catalog from a `.toml` or `.json` file
pub fn load_catalog(path: &Path) -> Result<EquipmentCatalog, ConfigError> {
    let file: CatalogFile = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => super::load_toml(path)?,
        Some("json") => super::load_json(path)?,
        other => {
            return Err(ConfigError::ValidationError(format!(
                "unsupported catalog format: {}",
                other.unwrap_or("<none>")
            )))
        }
    };
    file.into_catalog()
}

/// Parse a catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<EquipmentCatalog, ConfigError> {
    let file: CatalogFile = super::parse_toml(content)?;
    file.into_catalog()
}

/// Parse a catalog from a JSON string
pub fn parse_catalog_json(content: &str) -> Result<EquipmentCatalog, ConfigError> {
    let file: CatalogFile = serde_json::from_str(content)?;
    file.into_catalog()
}

/// The bundled catalog, parsed once per process
pub fn default_catalog() -> &'static EquipmentCatalog {
    static CATALOG: OnceLock<EquipmentCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let toml = include_str!("../../config/equipment.toml");
        parse_catalog(toml).unwrap_or_else(|e| {
            tracing::error!(error = %e, "bundled equipment catalog is invalid");
            EquipmentCatalog::new()
        })
    })
}
