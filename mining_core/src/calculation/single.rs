//! Single-ship breakability

use super::gadget_resistance_modifier;
use super::resistance::{resolve_resistance, ResistanceInputs};
use super::result::CalculationResult;
use crate::equipment::Gadget;
use crate::laser::MiningConfiguration;
use crate::rock::Rock;
use crate::types::{ResistanceMode, ShipType};

/// Resistance multiplier of the laser that scanned the rock, if it is equipped
///
/// Only modified-mode rocks carry a laser multiplier in their reading.
fn scanning_laser_modifier(config: &MiningConfiguration, rock: &Rock) -> Option<f64> {
    if rock.resistance_mode != ResistanceMode::Modified {
        return None;
    }
    let source = rock.scan_source.as_ref()?;
    let laser = config.lasers.get(source.laser_index).filter(|l| l.is_equipped());
    if laser.is_none() {
        tracing::warn!(
            laser_index = source.laser_index,
            "scan source is not an equipped laser, using the ship's combined modifier"
        );
    }
    laser.map(|l| l.resistance_modifier())
}

/// Check whether one ship can break a rock
///
/// # Arguments
/// * `config` - The ship's laser mounts
/// * `rock` - The scanned rock
/// * `gadgets` - Gadgets to apply going forward
/// * `ship_type` - Hull; unmanned lasers only drop out on multi-crew ships
/// * `scan_gadgets` - Gadgets present during the scan (defaults to `gadgets`)
pub fn calculate_breakability(
    config: &MiningConfiguration,
    rock: &Rock,
    gadgets: &[Gadget],
    ship_type: Option<ShipType>,
    scan_gadgets: Option<&[Gadget]>,
) -> CalculationResult {
    let total_power = config.total_power(ship_type);
    let equipment_modifier = config.equipment_resistance_modifier(ship_type);
    let gadget_modifier = gadget_resistance_modifier(gadgets);

    let inputs = ResistanceInputs {
        resistance: rock.resistance,
        mode: rock.resistance_mode,
        includes_gadgets_in_scan: rock.includes_gadgets_in_scan,
        equipment_modifier,
        gadget_modifier,
        scan_gadget_modifier: gadget_resistance_modifier(scan_gadgets.unwrap_or(gadgets)),
        scan_equipment_modifier: scanning_laser_modifier(config, rock),
    };

    let result = CalculationResult::new(
        total_power,
        equipment_modifier,
        gadget_modifier,
        rock,
        resolve_resistance(&inputs),
    );

    tracing::debug!(
        power = result.total_laser_power,
        modifier = result.total_resistance_modifier,
        adjusted_resistance = result.adjusted_resistance,
        needed = result.adjusted_lp_needed,
        can_break = result.can_break,
        "single-ship breakability"
    );
    result
}
