//! Step definitions shared by the editor and dispatch gate scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
