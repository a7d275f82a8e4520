//! HTTP handlers

pub mod detection;
pub mod health;
pub mod incidents;
pub mod risk_zones;
