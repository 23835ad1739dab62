use num_complex::Complex64;
use serde::Serialize;
use std::f64::consts::PI;

use crate::constants::DB_EPSILON;
use crate::error::{FilterError, Result};

/// Sampled frequency response of a filter.
///
/// Parallel sequences indexed by query frequency: `magnitude[i]` and
/// `phase[i]` describe `H(frequencies[i])`. Frequencies are normalized,
/// in radians/sample.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyResponse {
    pub frequencies: Vec<f64>,
    pub magnitude: Vec<f64>,
    pub phase: Vec<f64>,
}

impl FrequencyResponse {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Magnitude in dB, floored so exact nulls stay finite.
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.magnitude
            .iter()
            .map(|&m| 20.0 * (m + DB_EPSILON).log10())
            .collect()
    }
}

/// Evenly spaced sweep frequencies `w_k = k*pi/num_points` over `[0, pi)`.
pub fn frequency_grid(num_points: usize) -> Result<Vec<f64>> {
    if num_points == 0 {
        return Err(FilterError::InvalidParameter(
            "sweep needs at least one point".to_string(),
        ));
    }
    Ok((0..num_points)
        .map(|k| k as f64 * PI / num_points as f64)
        .collect())
}

/// `num_points` frequencies from 0 to `max_omega` inclusive.
pub fn frequency_span(max_omega: f64, num_points: usize) -> Result<Vec<f64>> {
    if num_points == 0 {
        return Err(FilterError::InvalidParameter(
            "sweep needs at least one point".to_string(),
        ));
    }
    if !max_omega.is_finite() {
        return Err(FilterError::InvalidInput(format!(
            "non-finite frequency: {max_omega}"
        )));
    }
    if num_points == 1 {
        return Ok(vec![0.0]);
    }
    let step = max_omega / (num_points - 1) as f64;
    Ok((0..num_points).map(|k| k as f64 * step).collect())
}

/// Evaluate the DTFT of a real tap sequence at the given normalized
/// frequencies.
///
/// `H(w) = sum(taps[k] * exp(-j*w*k) for k in 0..taps.len())`
///
/// # Errors
/// Returns `FilterError::InvalidInput` if any frequency is non-finite.
pub fn dtft(taps: &[f64], omegas: &[f64]) -> Result<FrequencyResponse> {
    if let Some(bad) = omegas.iter().find(|w| !w.is_finite()) {
        return Err(FilterError::InvalidInput(format!(
            "non-finite frequency: {bad}"
        )));
    }

    let mut magnitude = Vec::with_capacity(omegas.len());
    let mut phase = Vec::with_capacity(omegas.len());

    for &omega in omegas {
        let h: Complex64 = taps
            .iter()
            .enumerate()
            .map(|(k, &tap)| tap * Complex64::from_polar(1.0, -omega * k as f64))
            .sum();
        magnitude.push(h.norm());
        phase.push(h.arg());
    }

    Ok(FrequencyResponse {
        frequencies: omegas.to_vec(),
        magnitude,
        phase,
    })
}
