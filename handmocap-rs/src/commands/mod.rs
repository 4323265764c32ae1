//! Command implementations for the handmocap-rs CLI

pub mod rig;
pub mod skeleton;
