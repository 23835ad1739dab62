use std::f64::consts::PI;

/// One sinusoidal component of a synthetic test signal.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
pub struct SineComponent {
    pub amplitude: f64,
    pub frequency_hz: f64,
}

/// The multi-tone mixture used by the demos and tests: components at
/// 10, 25, and 50 Hz, meant to be sampled at 1 kHz.
pub fn default_components() -> Vec<SineComponent> {
    vec![
        SineComponent {
            amplitude: 2.0,
            frequency_hz: 10.0,
        },
        SineComponent {
            amplitude: 1.5,
            frequency_hz: 25.0,
        },
        SineComponent {
            amplitude: 0.8,
            frequency_hz: 50.0,
        },
    ]
}

/// Generate a sum-of-sines test signal.
pub fn composite_signal(
    components: &[SineComponent],
    duration_secs: f64,
    sample_rate: u32,
) -> Vec<f64> {
    let num_samples = (duration_secs * sample_rate as f64) as usize;

    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            components
                .iter()
                .map(|c| c.amplitude * (2.0 * PI * c.frequency_hz * t).sin())
                .sum()
        })
        .collect()
}

/// Unit impulse of the given length: 1 at n = 0, 0 elsewhere.
pub fn unit_impulse(len: usize) -> Vec<f64> {
    let mut impulse = vec![0.0; len];
    if let Some(first) = impulse.first_mut() {
        *first = 1.0;
    }
    impulse
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_composite_signal_length() {
        let signal = composite_signal(&default_components(), 2.0, 1000);
        assert_eq!(signal.len(), 2000);
    }

    #[test]
    fn test_single_tone_peaks_at_quarter_period() {
        let components = [SineComponent {
            amplitude: 3.0,
            frequency_hz: 10.0,
        }];
        let signal = composite_signal(&components, 0.1, 1000);

        // 10 Hz at 1 kHz: quarter period is sample 25
        assert_relative_eq!(signal[25], 3.0, max_relative = 1e-9);
        assert_relative_eq!(signal[0], 0.0);
    }

    #[test]
    fn test_unit_impulse_shape() {
        let impulse = unit_impulse(4);
        assert_eq!(impulse, vec![1.0, 0.0, 0.0, 0.0]);
        assert!(unit_impulse(0).is_empty());
    }
}
