//! Configuration for the boxcar CLI tools.
//!
//! The library itself needs nothing beyond a window size; these types
//! collect the tool-level knobs (window, warm-up, sweep shape) with
//! their defaults and validation in one place.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_RESPONSE_POINTS, DEFAULT_WINDOW_SIZE};
use crate::error::{FilterError, Result};
use crate::filter::Warmup;

/// Normalized frequency specification
///
/// Radians/sample internally. Accepts several spellings on the command
/// line, since sweep bounds are most naturally given in multiples of pi.
///
/// # Parsing formats
/// - `1.5708` - radians/sample (no suffix)
/// - `pi`, `0.5pi` - multiples of pi
/// - `0.25cyc` - cycles/sample (multiplied by 2*pi)
///
/// # Example
/// ```
/// use boxcar::config::NormalizedFrequency;
///
/// let w: NormalizedFrequency = "0.5pi".parse().unwrap();
/// assert!((w.as_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NormalizedFrequency(f64);

impl NormalizedFrequency {
    /// Create from radians/sample
    pub fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Create from cycles/sample
    pub fn from_cycles(cycles: f64) -> Self {
        Self(cycles * 2.0 * PI)
    }

    /// Get the frequency in radians/sample
    pub fn as_radians(&self) -> f64 {
        self.0
    }

    /// Get the frequency in cycles/sample
    pub fn as_cycles(&self) -> f64 {
        self.0 / (2.0 * PI)
    }
}

impl Default for NormalizedFrequency {
    fn default() -> Self {
        // Half-band sweep bound, the usual upper edge for a real filter
        Self(PI)
    }
}

impl fmt::Display for NormalizedFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}rad", self.0)
    }
}

impl FromStr for NormalizedFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(num) = s.strip_suffix("cyc") {
            let cycles: f64 = num
                .trim()
                .parse()
                .map_err(|_| format!("invalid frequency: {}", s))?;
            if !cycles.is_finite() {
                return Err("frequency must be finite".to_string());
            }
            return Ok(Self::from_cycles(cycles));
        }

        if let Some(num) = s.strip_suffix("pi") {
            let num = num.trim();
            let factor: f64 = if num.is_empty() {
                1.0
            } else {
                num.parse().map_err(|_| format!("invalid frequency: {}", s))?
            };
            if !factor.is_finite() {
                return Err("frequency must be finite".to_string());
            }
            return Ok(Self::from_radians(factor * PI));
        }

        let num = s.strip_suffix("rad").unwrap_or(s);
        let radians: f64 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid frequency: {}", s))?;
        if !radians.is_finite() {
            return Err("frequency must be finite".to_string());
        }
        Ok(Self::from_radians(radians))
    }
}

/// Filter construction settings
#[derive(Debug, Clone, Copy)]
pub struct FilterConfig {
    /// Moving-average window length in samples
    pub window_size: usize,
    /// Warm-up behavior before the window is full
    pub warmup: Warmup,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            warmup: Warmup::default(),
        }
    }
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(FilterError::InvalidParameter(
                "window size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Frequency-sweep settings
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Number of evenly spaced points in the sweep
    pub num_points: usize,
    /// Upper sweep bound
    pub max_omega: NormalizedFrequency,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_RESPONSE_POINTS,
            max_omega: NormalizedFrequency::default(),
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_points == 0 {
            return Err(FilterError::InvalidParameter(
                "sweep needs at least one point".to_string(),
            ));
        }
        if !self.max_omega.as_radians().is_finite() {
            return Err(FilterError::InvalidInput(
                "sweep bound must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_plain_radians() {
        let w: NormalizedFrequency = "1.5708".parse().unwrap();
        assert_relative_eq!(w.as_radians(), 1.5708);
    }

    #[test]
    fn test_parse_pi_multiples() {
        let w: NormalizedFrequency = "0.5pi".parse().unwrap();
        assert_relative_eq!(w.as_radians(), PI / 2.0);

        let w: NormalizedFrequency = "pi".parse().unwrap();
        assert_relative_eq!(w.as_radians(), PI);
    }

    #[test]
    fn test_parse_cycles() {
        let w: NormalizedFrequency = "0.25cyc".parse().unwrap();
        assert_relative_eq!(w.as_radians(), PI / 2.0);
        assert_relative_eq!(w.as_cycles(), 0.25);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<NormalizedFrequency>().is_err());
        assert!("nanpi".parse::<NormalizedFrequency>().is_err());
        assert!("".parse::<NormalizedFrequency>().is_err());
    }

    #[test]
    fn test_filter_config_validation() {
        assert!(FilterConfig::default().validate().is_ok());
        let bad = FilterConfig {
            window_size: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_sweep_config_validation() {
        assert!(SweepConfig::default().validate().is_ok());
        let bad = SweepConfig {
            num_points: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
