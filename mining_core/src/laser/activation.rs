//! Module activation state machine
//!
//! Each active module slot is either inactive or active. Activating a
//! sustained module deactivates every other active sustained module on
//! the same laser; stackable modules never force anything off.

use crate::equipment::Module;

/// Toggle the activation flag of `slot`, returning the new flag list
///
/// The returned list always matches `modules` in length. Empty, `"none"`
/// and passive slots are not part of the machine and stay untouched.
pub fn toggle_activation(modules: &[Option<Module>], active: &[bool], slot: usize) -> Vec<bool> {
    let mut next: Vec<bool> = (0..modules.len())
        .map(|i| active.get(i).copied().unwrap_or(false))
        .collect();

    let Some(module) = modules
        .get(slot)
        .and_then(Option::as_ref)
        .filter(|m| m.is_active() && !m.is_none())
    else {
        return next;
    };

    if next[slot] {
        next[slot] = false;
        return next;
    }

    if module.is_sustained() {
        for (i, other) in modules.iter().enumerate() {
            if i != slot && other.as_ref().is_some_and(Module::is_sustained) {
                next[i] = false;
            }
        }
    }
    next[slot] = true;
    next
}
