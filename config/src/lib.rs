//! # Config Crate
//!
//! Centralized configuration constants for the scene-primitive crates.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GEOM_EPSILON, DEFAULT_SLICES, MIN_SLICES};
//!
//! // Use GEOM_EPSILON for floating-point comparisons
//! let value: f64 = 1.0e-12;
//! assert!(value.abs() < GEOM_EPSILON);
//!
//! // Use resolution defaults for tessellation
//! let requested: u32 = 2;
//! let slices = requested.max(MIN_SLICES);
//! assert_eq!(slices, MIN_SLICES);
//! assert!(DEFAULT_SLICES >= MIN_SLICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
