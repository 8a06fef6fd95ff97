//! Utility helpers shared across services.

pub mod csv;
