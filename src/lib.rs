//! Decision Matrix - Weighted multi-criteria decision support
//!
//! This crate scores options against weighted criteria, ranks them, and
//! explains in plain language why the winning option came out on top.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
