//! SecondaryModifiers - Optional multipliers beyond power and resistance

use serde::{Deserialize, Serialize};

/// Secondary multipliers carried by heads, modules and gadgets
///
/// Every field is a multiplier where `None` means "no effect" and is
/// treated exactly like `Some(1.0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondaryModifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_window: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inert_materials: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<f64>,
}

fn combine_field(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x * y),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

impl SecondaryModifiers {
    /// Instability multiplier (1 when absent)
    pub fn instability(&self) -> f64 {
        self.instability.unwrap_or(1.0)
    }

    /// Charge rate multiplier (1 when absent)
    pub fn charge_rate(&self) -> f64 {
        self.charge_rate.unwrap_or(1.0)
    }

    /// Optimal charge window multiplier (1 when absent)
    pub fn charge_window(&self) -> f64 {
        self.charge_window.unwrap_or(1.0)
    }

    /// Inert materials multiplier (1 when absent)
    pub fn inert_materials(&self) -> f64 {
        self.inert_materials.unwrap_or(1.0)
    }

    /// Cluster multiplier (1 when absent)
    pub fn cluster(&self) -> f64 {
        self.cluster.unwrap_or(1.0)
    }

    /// Multiply two sets of modifiers field by field
    pub fn combine(&self, other: &SecondaryModifiers) -> SecondaryModifiers {
        SecondaryModifiers {
            instability: combine_field(self.instability, other.instability),
            charge_rate: combine_field(self.charge_rate, other.charge_rate),
            charge_window: combine_field(self.charge_window, other.charge_window),
            inert_materials: combine_field(self.inert_materials, other.inert_materials),
            cluster: combine_field(self.cluster, other.cluster),
        }
    }

    /// Iterate over the multipliers that are present
    pub fn values(&self) -> impl Iterator<Item = f64> {
        [
            self.instability,
            self.charge_rate,
            self.charge_window,
            self.inert_materials,
            self.cluster,
        ]
        .into_iter()
        .flatten()
    }

    /// True when no field changes anything
    pub fn is_neutral(&self) -> bool {
        self.values().all(crate::types::is_neutral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_neutral() {
        let mods = SecondaryModifiers::default();
        assert!(mods.is_neutral());
        assert!((mods.instability() - 1.0).abs() < f64::EPSILON);
        assert!((mods.cluster() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_combine_multiplies_present_fields() {
        let a = SecondaryModifiers {
            instability: Some(0.9),
            charge_window: Some(1.4),
            ..Default::default()
        };
        let b = SecondaryModifiers {
            instability: Some(0.5),
            cluster: Some(1.3),
            ..Default::default()
        };

        let combined = a.combine(&b);
        assert!((combined.instability() - 0.45).abs() < 1e-9);
        assert!((combined.charge_window() - 1.4).abs() < 1e-9);
        assert!((combined.cluster() - 1.3).abs() < 1e-9);
        assert_eq!(combined.charge_rate, None);
    }

    #[test]
    fn test_explicit_one_is_neutral() {
        let mods = SecondaryModifiers {
            inert_materials: Some(1.0),
            ..Default::default()
        };
        assert!(mods.is_neutral());
    }
}
