use crate::error::{FilterError, Result};
use crate::response::{self, FrequencyResponse};

/// Behavior of the filter before the window has seen its first N samples.
///
/// A moving average is only a true LTI system once the window is full.
/// What happens before then is a policy choice, and both common choices
/// are useful depending on whether the caller wants readable early output
/// or exact convolution semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Warmup {
    /// Average only the samples received so far. Early outputs track the
    /// input closely, which is what you usually want when smoothing live
    /// measurements.
    #[default]
    PartialWindow,

    /// Treat the window as pre-loaded with zeros, so the divisor is always
    /// N. The filter then behaves exactly as convolution with its impulse
    /// response from the very first sample.
    ZeroFilled,
}

/// Moving average (boxcar) filter
///
/// Computes `y[n] = (1/N) * sum(x[n-k] for k in 0..N)` over a sliding
/// window of the last N input samples, one sample at a time or over a
/// whole signal. Also exposes the impulse response (a rectangular pulse
/// of height 1/N) and its DTFT, the classic sinc-shaped frequency
/// response with first null at `2*pi/N` radians/sample.
///
/// The window is a circular buffer with a running sum, so each update is
/// O(1) regardless of window length.
pub struct MovingAverageFilter {
    buffer: Vec<f64>,
    index: usize,
    count: usize,
    sum: f64,
    warmup: Warmup,
}

impl MovingAverageFilter {
    /// Create a filter with the default warm-up behavior.
    ///
    /// # Arguments
    /// * `window_size` - Number of samples to average (larger = smoother
    ///   but slower response)
    ///
    /// # Errors
    /// Returns `FilterError::InvalidParameter` if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self> {
        Self::with_warmup(window_size, Warmup::default())
    }

    /// Create a filter with an explicit warm-up behavior.
    pub fn with_warmup(window_size: usize, warmup: Warmup) -> Result<Self> {
        if window_size == 0 {
            return Err(FilterError::InvalidParameter(
                "window size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            buffer: vec![0.0; window_size],
            index: 0,
            count: 0,
            sum: 0.0,
            warmup,
        })
    }

    /// Window length N.
    pub fn window_size(&self) -> usize {
        self.buffer.len()
    }

    /// Warm-up behavior chosen at construction.
    pub fn warmup(&self) -> Warmup {
        self.warmup
    }

    /// Process a single sample and return the updated average.
    ///
    /// The oldest sample falls out of the window once N samples have been
    /// seen. Output at step n depends only on samples up to and including
    /// step n.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidInput` for NaN or infinite samples.
    /// The window is left untouched when a sample is rejected.
    pub fn filter_sample(&mut self, sample: f64) -> Result<f64> {
        if !sample.is_finite() {
            return Err(FilterError::InvalidInput(format!(
                "non-finite sample: {sample}"
            )));
        }
        Ok(self.push(sample))
    }

    /// Process an entire signal, producing one output per input sample.
    ///
    /// Equivalent to calling [`filter_sample`](Self::filter_sample) once
    /// per element in order, and continues from whatever state previous
    /// calls left behind. Callers wanting a fresh start should construct
    /// a new filter or call [`reset`](Self::reset).
    ///
    /// # Errors
    /// Returns `FilterError::InvalidInput` if any sample is non-finite.
    /// The whole signal is validated up front, so a rejected batch leaves
    /// the window untouched.
    pub fn filter_signal(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        if let Some(bad) = signal.iter().find(|s| !s.is_finite()) {
            return Err(FilterError::InvalidInput(format!(
                "non-finite sample: {bad}"
            )));
        }
        Ok(signal.iter().map(|&s| self.push(s)).collect())
    }

    fn push(&mut self, sample: f64) -> f64 {
        self.sum -= self.buffer[self.index];
        self.buffer[self.index] = sample;
        self.sum += sample;
        self.index = (self.index + 1) % self.buffer.len();

        if self.count < self.buffer.len() {
            self.count += 1;
        }

        self.average()
    }

    /// Get the current average without adding a new value.
    pub fn average(&self) -> f64 {
        let divisor = match self.warmup {
            Warmup::PartialWindow => self.count.max(1),
            Warmup::ZeroFilled => self.buffer.len(),
        };
        self.sum / divisor as f64
    }

    /// Clear the window back to its just-constructed state.
    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.index = 0;
        self.count = 0;
        self.sum = 0.0;
    }

    /// Impulse response `h[k] = 1/N` for `k in 0..N`.
    ///
    /// Pure function of the window length; does not consult or alter the
    /// live window contents.
    pub fn impulse_response(&self) -> Vec<f64> {
        let n = self.buffer.len();
        vec![1.0 / n as f64; n]
    }

    /// Frequency response at the given normalized frequencies
    /// (radians/sample).
    ///
    /// Evaluates the DTFT of the impulse response,
    /// `H(w) = (1/N) * sum(exp(-j*w*k) for k in 0..N)`, returning the
    /// magnitude and phase at each requested frequency.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidInput` if any frequency is non-finite.
    pub fn frequency_response(&self, omegas: &[f64]) -> Result<FrequencyResponse> {
        response::dtft(&self.impulse_response(), omegas)
    }

    /// Frequency response on an evenly spaced grid over `[0, pi)`.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidParameter` if `num_points` is zero.
    pub fn frequency_response_points(&self, num_points: usize) -> Result<FrequencyResponse> {
        let omegas = response::frequency_grid(num_points)?;
        self.frequency_response(&omegas)
    }
}
