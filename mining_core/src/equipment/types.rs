//! Equipment reference data - laser heads, modules and gadgets

use super::SecondaryModifiers;
use crate::types::{is_none_id, ActivationKind, ModuleCategory, NONE_ID};
use serde::{Deserialize, Serialize};

fn default_multiplier() -> f64 {
    1.0
}

/// A mining laser head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserHead {
    /// Unique identifier (e.g., "helix_1")
    pub id: String,
    /// Display name
    pub name: String,
    /// Mount size class (1 or 2)
    pub size: u8,
    /// Maximum laser power
    pub max_power: f64,
    /// Resistance multiplier applied to rocks mined with this head
    #[serde(default = "default_multiplier")]
    pub resistance_modifier: f64,
    /// Number of module slots
    #[serde(default)]
    pub module_slots: usize,
    #[serde(flatten)]
    pub secondary: SecondaryModifiers,
}

impl LaserHead {
    /// Create a head with no secondary modifiers
    pub fn new(
        id: &str,
        name: &str,
        size: u8,
        max_power: f64,
        resistance_modifier: f64,
        module_slots: usize,
    ) -> Self {
        LaserHead {
            id: id.to_string(),
            name: name.to_string(),
            size,
            max_power,
            resistance_modifier,
            module_slots,
            secondary: SecondaryModifiers::default(),
        }
    }
}

/// A laser module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub name: String,
    pub category: ModuleCategory,
    /// Only meaningful for active modules; defaults to sustained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation: Option<ActivationKind>,
    #[serde(default = "default_multiplier")]
    pub power_modifier: f64,
    #[serde(default = "default_multiplier")]
    pub resistance_modifier: f64,
    #[serde(flatten)]
    pub secondary: SecondaryModifiers,
}

impl Module {
    /// Create a passive module
    pub fn passive(id: &str, name: &str, power_modifier: f64, resistance_modifier: f64) -> Self {
        Module {
            id: id.to_string(),
            name: name.to_string(),
            category: ModuleCategory::Passive,
            activation: None,
            power_modifier,
            resistance_modifier,
            secondary: SecondaryModifiers::default(),
        }
    }

    /// Create an active module
    pub fn active(
        id: &str,
        name: &str,
        activation: ActivationKind,
        power_modifier: f64,
        resistance_modifier: f64,
    ) -> Self {
        Module {
            id: id.to_string(),
            name: name.to_string(),
            category: ModuleCategory::Active,
            activation: Some(activation),
            power_modifier,
            resistance_modifier,
            secondary: SecondaryModifiers::default(),
        }
    }

    /// Whether this entry is the empty-slot sentinel
    pub fn is_none(&self) -> bool {
        is_none_id(&self.id)
    }

    pub fn is_passive(&self) -> bool {
        self.category == ModuleCategory::Passive
    }

    pub fn is_active(&self) -> bool {
        self.category == ModuleCategory::Active
    }

    /// Activation kind for active modules, `None` for passive ones
    pub fn activation_kind(&self) -> Option<ActivationKind> {
        match self.category {
            ModuleCategory::Passive => None,
            ModuleCategory::Active => Some(self.activation.unwrap_or_default()),
        }
    }

    pub fn is_sustained(&self) -> bool {
        self.activation_kind() == Some(ActivationKind::Sustained)
    }
}

/// A gadget placed on the rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gadget {
    pub id: String,
    pub name: String,
    #[serde(default = "default_multiplier")]
    pub resistance_modifier: f64,
    #[serde(flatten)]
    pub secondary: SecondaryModifiers,
}

impl Gadget {
    pub fn new(id: &str, name: &str, resistance_modifier: f64) -> Self {
        Gadget {
            id: id.to_string(),
            name: name.to_string(),
            resistance_modifier,
            secondary: SecondaryModifiers::default(),
        }
    }

    /// The empty gadget slot
    pub fn none() -> Self {
        Gadget::new(NONE_ID, "None", 1.0)
    }

    /// Whether this entry is the empty-slot sentinel
    pub fn is_none(&self) -> bool {
        is_none_id(&self.id)
    }
}
