//! Rock - The mineable object being checked

use crate::types::ResistanceMode;
use serde::{Deserialize, Serialize};

/// Identifies the laser that produced a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSource {
    /// Ship that scanned (group calculations only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_id: Option<String>,
    /// Index of the scanning laser on that ship
    pub laser_index: usize,
}

impl ScanSource {
    /// A laser on the ship being calculated
    pub fn laser(laser_index: usize) -> Self {
        ScanSource {
            ship_id: None,
            laser_index,
        }
    }

    /// A laser on a specific ship of a group
    pub fn ship_laser(ship_id: &str, laser_index: usize) -> Self {
        ScanSource {
            ship_id: Some(ship_id.to_string()),
            laser_index,
        }
    }
}

/// A scanned rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rock {
    /// Mass in mass units
    pub mass: f64,
    /// Recorded resistance in percent (0-100)
    pub resistance: f64,
    /// How `resistance` was recorded
    #[serde(default)]
    pub resistance_mode: ResistanceMode,
    /// Whether gadgets were already on the rock when it was scanned
    #[serde(default)]
    pub includes_gadgets_in_scan: bool,
    /// Which laser performed the scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_source: Option<ScanSource>,
}

impl Rock {
    /// A rock whose recorded resistance is its base resistance
    pub fn new(mass: f64, resistance: f64) -> Self {
        Rock {
            mass,
            resistance,
            resistance_mode: ResistanceMode::Base,
            includes_gadgets_in_scan: false,
            scan_source: None,
        }
    }

    /// A rock whose resistance was read through laser equipment
    pub fn modified(mass: f64, resistance: f64) -> Self {
        Rock {
            resistance_mode: ResistanceMode::Modified,
            ..Rock::new(mass, resistance)
        }
    }

    /// Mark that gadgets were present when the rock was scanned
    pub fn with_gadgets_in_scan(mut self) -> Self {
        self.includes_gadgets_in_scan = true;
        self
    }

    /// Record the laser that produced the scan
    pub fn scanned_by(mut self, source: ScanSource) -> Self {
        self.scan_source = Some(source);
        self
    }
}
