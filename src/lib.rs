//! Registrar application core modules.
//!
//! This crate contains all server-side functionality for the Registrar college
//! information service, including HTTP routing, admin authentication, database
//! repositories, per-entity services with validation, and CSV import/export.
//! It provides the complete backend for the public college website and its
//! admin panel.

pub mod config;
pub mod controller;
#[cfg(test)]
mod factory;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
