//! Rota engine for hospital staff duty cycles
//!
//! This crate resolves who is on duty on a given date, in which panel (day or
//! night) and at what times, from staff cycle rules, contracted hours and
//! manual overrides.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rota;
pub mod store;
