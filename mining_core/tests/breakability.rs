//! Integration tests: catalog -> configuration -> breakability verdict

use mining_core::{
    calculate_breakability, calculate_group_breakability, combined_secondary_modifiers, default_catalog,
    modifier_breakdown, CalculationResult, LaserConfiguration, MiningConfiguration, MiningGroup, Rock,
    ScanSource, ShipInstance, ShipType,
};

fn helix_prospector() -> MiningConfiguration {
    let laser = default_catalog()
        .laser_configuration("helix_1", &["none", "none"])
        .expect("helix_1 in bundled catalog");
    MiningConfiguration::new(vec![laser])
}

#[test]
fn test_helix_against_reference_rock() {
    let rock = Rock::new(11187.0, 17.0);
    let result = calculate_breakability(&helix_prospector(), &rock, &[], Some(ShipType::Prospector), None);

    assert!((result.total_laser_power - 3360.0).abs() < 1e-9);
    assert!((result.adjusted_resistance - 11.9).abs() < 1e-9);
    assert!((result.adjusted_lp_needed - 2539.61).abs() < 0.01);
    assert!(result.can_break);
    assert!(result.power_margin > 800.0);
}

#[test]
fn test_rieger_and_focus_stack_additively() {
    let laser = default_catalog()
        .laser_configuration("helix_1", &["rieger_c3", "focus_3"])
        .unwrap();
    let config = MiningConfiguration::new(vec![laser]);

    let result = calculate_breakability(&config, &Rock::new(11187.0, 17.0), &[], None, None);
    assert!((result.total_laser_power - 4032.0).abs() < 1e-9);
}

#[test]
fn test_two_helix_lasers_multiply_resistance() {
    let catalog = default_catalog();
    let config = MiningConfiguration::new(vec![
        catalog.laser_configuration("helix_2", &[]).unwrap(),
        catalog.laser_configuration("helix_2", &[]).unwrap(),
    ]);

    let result = calculate_breakability(&config, &Rock::new(30000.0, 50.0), &[], Some(ShipType::Mole), None);
    assert!((result.equipment_modifier - 0.49).abs() < 1e-9);
}

#[test]
fn test_unequipped_ship_never_breaks() {
    let config = MiningConfiguration::new(vec![LaserConfiguration::new(None); 3]);
    let result = calculate_breakability(&config, &Rock::new(500.0, 5.0), &[], Some(ShipType::Mole), None);
    assert!(result.total_laser_power.abs() < f64::EPSILON);
    assert!(!result.can_break);
}

#[test]
fn test_zero_mass_breaks_with_any_power() {
    let result = calculate_breakability(&helix_prospector(), &Rock::new(0.0, 45.0), &[], None, None);
    assert!(result.base_lp_needed.abs() < f64::EPSILON);
    assert!(result.adjusted_lp_needed.abs() < f64::EPSILON);
    assert!(result.can_break);
    assert!(result.power_margin_percent.abs() < f64::EPSILON);
}

#[test]
fn test_resistance_at_cap_does_not_panic() {
    let config = MiningConfiguration::new(vec![default_catalog().laser_configuration("arbor_mh1", &[]).unwrap()]);
    // 80 × 1.25 = 100
    let result = calculate_breakability(&config, &Rock::new(4000.0, 80.0), &[], None, None);
    assert!(result.adjusted_lp_needed.is_infinite());
    assert!(!result.can_break);
    assert!(result.is_degenerate());
}

#[test]
fn test_resistance_above_cap_cannot_break() {
    let config = MiningConfiguration::new(vec![LaserConfiguration::new(None); 2]);
    let result = calculate_breakability(&config, &Rock::new(5000.0, 150.0), &[], None, None);
    assert!(result.adjusted_lp_needed < 0.0);
    assert!(!result.can_break);
    assert!(result.is_degenerate());
    assert!(result.summary().starts_with("Cannot break"));
}

#[test]
fn test_gadgets_from_catalog() {
    let catalog = default_catalog();
    let gadgets = catalog.gadget_list(&["sabir", "none", "optimax"]).unwrap();

    let result = calculate_breakability(&helix_prospector(), &Rock::new(11187.0, 40.0), &gadgets, None, None);
    assert!((result.gadget_modifier - 0.35).abs() < 1e-9);
    assert!((result.adjusted_resistance - 40.0 * 0.7 * 0.35).abs() < 1e-9);

    let secondary = combined_secondary_modifiers(&helix_prospector(), &gadgets, None);
    assert!((secondary.charge_window() - 0.6 * 1.5 * 1.2).abs() < 1e-9);
}

#[test]
fn test_surge_toggle_changes_result() {
    let catalog = default_catalog();
    let mut laser = catalog.laser_configuration("helix_1", &["surge", "brandt"]).unwrap();
    let rock = Rock::new(15000.0, 30.0);

    let idle = calculate_breakability(&MiningConfiguration::new(vec![laser.clone()]), &rock, &[], None, None);
    assert!((idle.total_laser_power - 3360.0).abs() < 1e-9);

    laser.toggle_module(0).unwrap();
    let surged = calculate_breakability(&MiningConfiguration::new(vec![laser.clone()]), &rock, &[], None, None);
    assert!((surged.total_laser_power - 5040.0).abs() < 1e-9);
    assert!((surged.equipment_modifier - 0.7 * 0.85).abs() < 1e-9);

    // Brandt is also sustained, so Surge switches off
    laser.toggle_module(1).unwrap();
    assert!(!laser.is_module_active(0));
    let branded = calculate_breakability(&MiningConfiguration::new(vec![laser]), &rock, &[], None, None);
    assert!((branded.total_laser_power - 3360.0 * 1.35).abs() < 1e-9);

    let breakdown = modifier_breakdown(
        &MiningConfiguration::new(vec![catalog.laser_configuration("helix_1", &["surge"]).unwrap()]),
        &[],
        None,
    );
    assert_eq!(breakdown.len(), 1);
}

#[test]
fn test_group_with_inactive_ship() {
    let catalog = default_catalog();
    let mut group = MiningGroup::new().named("Aaron Halo run");
    group
        .add_ship(ShipInstance::new("p1", ShipType::Prospector, "Helix Prospector", helix_prospector()))
        .unwrap();
    group.add_ship(ShipInstance::stock("m1", ShipType::Mole, catalog)).unwrap();
    group.toggle_ship("m1").unwrap();

    let rock = Rock::new(25000.0, 30.0);
    let solo = calculate_group_breakability(&group, &rock, &[]);
    assert!((solo.total_laser_power - 3360.0).abs() < 1e-9);
    assert!((solo.equipment_modifier - 0.7).abs() < 1e-9);

    group.toggle_ship("m1").unwrap();
    let fleet = calculate_group_breakability(&group, &rock, &[]);
    assert!((fleet.total_laser_power - (3360.0 + 3.0 * 2400.0)).abs() < 1e-9);
    assert!((fleet.equipment_modifier - 0.7 * 1.25_f64.powi(3)).abs() < 1e-9);
}

#[test]
fn test_group_scan_laser_recovers_base() {
    let catalog = default_catalog();
    let mut group = MiningGroup::new();
    group
        .add_ship(ShipInstance::new("p1", ShipType::Prospector, "Helix Prospector", helix_prospector()))
        .unwrap();
    group.add_ship(ShipInstance::stock("g1", ShipType::Golem, catalog)).unwrap();

    // Helix read a base-30 rock as 21
    let rock = Rock::modified(25000.0, 21.0).scanned_by(ScanSource::ship_laser("p1", 0));
    let result = calculate_group_breakability(&group, &rock, &[]);
    let context = result.resistance_context.expect("reversal happened");
    assert!((context.derived_base_resistance - 30.0).abs() < 1e-9);
    assert!((result.equipment_modifier - 0.7).abs() < 1e-9);
}

#[test]
fn test_result_round_trips_through_json() {
    let rock = Rock::modified(11187.0, 11.9).scanned_by(ScanSource::laser(0));
    let result = calculate_breakability(&helix_prospector(), &rock, &[], None, None);

    let json = serde_json::to_string(&result).unwrap();
    let restored: CalculationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.can_break, result.can_break);
    assert!((restored.adjusted_lp_needed - result.adjusted_lp_needed).abs() < 1e-6);
    let context = restored.resistance_context.expect("context survives storage");
    assert!((context.derived_base_resistance - 17.0).abs() < 1e-9);
}

#[test]
fn test_degenerate_result_round_trips_through_json() {
    let config = MiningConfiguration::new(vec![default_catalog()
        .laser_configuration("arbor_mh1", &[])
        .unwrap()]);
    let result = calculate_breakability(&config, &Rock::new(4000.0, 80.0), &[], None, None);

    let json = serde_json::to_string(&result).unwrap();
    let restored: CalculationResult = serde_json::from_str(&json).unwrap();
    assert!(restored.adjusted_lp_needed.is_infinite());
    assert!(restored.power_margin.is_infinite());
    assert!(!restored.can_break);
    assert!(restored.is_degenerate());
}
