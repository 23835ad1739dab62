//! Numeric constants shared by the filter, response analysis, and CLI tools.

/// Floor added to magnitudes before conversion to dB.
/// A length-N boxcar has exact response nulls; without the floor those
/// would map to -inf in dB output.
pub const DB_EPSILON: f64 = 1e-10;

/// Default number of points in a frequency-response sweep.
pub const DEFAULT_RESPONSE_POINTS: usize = 1024;

/// Default moving-average window length for the CLI tools.
pub const DEFAULT_WINDOW_SIZE: usize = 8;
