pub mod access_gate;
pub mod capability;
pub mod gate_decision;
pub mod nav_item;
