//! Theme state: value types, host capabilities, and the controller.

pub mod controller;
pub mod host;
pub mod theme;
