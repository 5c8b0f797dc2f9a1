//! Centralized configuration values shared across the scene-primitive crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used by the geometry kernels.
///
/// Quadratic degeneracy tests (vanishing leading coefficient, grazing
/// discriminants) and plane-parallelism checks compare against this value.
///
/// # Examples
/// ```
/// use config::constants::GEOM_EPSILON;
/// assert!(GEOM_EPSILON < 1.0e-6);
/// ```
pub const GEOM_EPSILON: f64 = 1.0e-9;

/// Default angular subdivision count for solid-of-revolution primitives.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SLICES;
/// assert!(DEFAULT_SLICES >= 3);
/// ```
pub const DEFAULT_SLICES: u32 = 10;

/// Default axial subdivision count along a lateral surface.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_STACKS;
/// assert!(DEFAULT_STACKS >= 1);
/// ```
pub const DEFAULT_STACKS: u32 = 10;

/// Minimum angular subdivision count. A closed ring needs at least three
/// sides, so tessellators clamp to this value rather than fail.
///
/// # Examples
/// ```
/// use config::constants::MIN_SLICES;
/// let requested: u32 = 1;
/// assert_eq!(requested.max(MIN_SLICES), 3);
/// ```
pub const MIN_SLICES: u32 = 3;

/// Minimum axial subdivision count for a lateral surface.
///
/// # Examples
/// ```
/// use config::constants::MIN_STACKS;
/// let requested: u32 = 0;
/// assert_eq!(requested.max(MIN_STACKS), 1);
/// ```
pub const MIN_STACKS: u32 = 1;

/// Maximum angular subdivision count. Safety clamp preventing runaway
/// tessellation from hostile or corrupt parameter sets.
///
/// # Examples
/// ```
/// use config::constants::MAX_SLICES;
/// let requested: u32 = 1_000_000;
/// assert_eq!(requested.min(MAX_SLICES), MAX_SLICES);
/// ```
pub const MAX_SLICES: u32 = 4096;

/// Maximum axial subdivision count. Same rationale as [`MAX_SLICES`].
///
/// # Examples
/// ```
/// use config::constants::MAX_STACKS;
/// assert!(MAX_STACKS >= 1);
/// ```
pub const MAX_STACKS: u32 = 4096;

/// Default radius for primitives constructed without explicit radii.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RADIUS;
/// assert_eq!(DEFAULT_RADIUS, 1.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default height for primitives constructed without an explicit height.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_HEIGHT;
/// assert_eq!(DEFAULT_HEIGHT, 1.0);
/// ```
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
    /// Default angular subdivision count for revolution primitives.
    pub default_slices: u32,
    /// Default axial subdivision count for lateral surfaces.
    pub default_stacks: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and subdivision counts.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24, 4).expect("valid config");
    /// assert_eq!(cfg.default_slices, 24);
    /// ```
    pub fn new(tolerance: f64, default_slices: u32, default_stacks: u32) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_slices < MIN_SLICES {
            return Err(ConfigError::InvalidSlices(default_slices));
        }
        if default_stacks < MIN_STACKS {
            return Err(ConfigError::InvalidStacks(default_stacks));
        }
        Ok(Self {
            tolerance,
            default_slices,
            default_stacks,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: GEOM_EPSILON,
            default_slices: DEFAULT_SLICES,
            default_stacks: DEFAULT_STACKS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero or negative.
    InvalidTolerance(f64),
    /// Raised when the requested slice count is too small to form a polygon.
    InvalidSlices(u32),
    /// Raised when the requested stack count is zero.
    InvalidStacks(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSlices(value) => {
                write!(f, "default_slices must be >= 3: {value}")
            }
            ConfigError::InvalidStacks(value) => {
                write!(f, "default_stacks must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
