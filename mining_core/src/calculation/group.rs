//! Fleet breakability - Several ships working the same rock
//!
//! Power adds across every active ship. Resistance multipliers multiply:
//! lasers within a ship, then ships across the fleet. A modified-mode rock
//! with a known scanning ship/laser uses only that laser's multiplier.

use super::gadget_resistance_modifier;
use super::resistance::{resolve_resistance, ResistanceInputs};
use super::result::CalculationResult;
use crate::equipment::Gadget;
use crate::rock::Rock;
use crate::ship::{MiningGroup, ShipInstance};
use crate::types::ResistanceMode;

/// Resistance multiplier of the scanning laser, if it sits on an active ship
fn scanning_laser_modifier(active: &[&ShipInstance], rock: &Rock) -> Option<f64> {
    if rock.resistance_mode != ResistanceMode::Modified {
        return None;
    }
    let source = rock.scan_source.as_ref()?;
    let ship_id = source.ship_id.as_deref()?;

    let laser = active
        .iter()
        .find(|ship| ship.id == ship_id)
        .and_then(|ship| ship.config.lasers.get(source.laser_index))
        .filter(|laser| laser.is_equipped());

    if laser.is_none() {
        tracing::warn!(
            ship = ship_id,
            laser_index = source.laser_index,
            "scanning laser not found on an active ship, aggregating the fleet"
        );
    }
    laser.map(|l| l.resistance_modifier())
}

/// Check whether a group of ships can break a rock together
pub fn calculate_group_breakability(
    group: &MiningGroup,
    rock: &Rock,
    gadgets: &[Gadget],
) -> CalculationResult {
    let active: Vec<&ShipInstance> = group.active_ships().collect();
    if active.is_empty() {
        tracing::debug!(ships = group.len(), "no active ships in group");
        return CalculationResult::empty(rock);
    }

    let total_power: f64 = active.iter().map(|ship| ship.total_power()).sum();

    let scan_laser = scanning_laser_modifier(&active, rock);
    let equipment_modifier = scan_laser.unwrap_or_else(|| {
        active
            .iter()
            .map(|ship| ship.equipment_resistance_modifier())
            .product()
    });
    let gadget_modifier = gadget_resistance_modifier(gadgets);

    let inputs = ResistanceInputs {
        resistance: rock.resistance,
        mode: rock.resistance_mode,
        includes_gadgets_in_scan: rock.includes_gadgets_in_scan,
        equipment_modifier,
        gadget_modifier,
        scan_gadget_modifier: gadget_modifier,
        scan_equipment_modifier: scan_laser,
    };

    let result = CalculationResult::new(
        total_power,
        equipment_modifier,
        gadget_modifier,
        rock,
        resolve_resistance(&inputs),
    );

    tracing::debug!(
        active_ships = active.len(),
        power = result.total_laser_power,
        modifier = result.total_resistance_modifier,
        scan_laser_only = scan_laser.is_some(),
        can_break = result.can_break,
        "group breakability"
    );
    result
}
