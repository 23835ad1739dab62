use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct NoiseConfig {
    pub seed: Option<u64>,
    pub additive: Option<AdditiveNoiseConfig>,
}

impl NoiseConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_awgn(mut self, snr_db: f64) -> Self {
        self.additive = Some(AdditiveNoiseConfig { snr_db });
        self
    }
}

#[derive(Clone, Copy, Debug, serde::Deserialize)]
pub struct AdditiveNoiseConfig {
    pub snr_db: f64,
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Mean power of a signal.
pub fn signal_power(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|&x| x * x).sum::<f64>() / signal.len() as f64
}

/// Apply the configured noise to a signal in-place.
pub fn apply_noise(signal: &mut [f64], config: &NoiseConfig) {
    let mut rng = create_rng(config.seed);

    if let Some(additive) = &config.additive {
        apply_additive_noise(signal, additive, &mut rng);
    }
}

fn apply_additive_noise(signal: &mut [f64], config: &AdditiveNoiseConfig, rng: &mut ChaCha8Rng) {
    let sig_power = signal_power(signal);
    if sig_power == 0.0 {
        return;
    }

    let snr_linear = 10.0_f64.powf(config.snr_db / 10.0);
    let noise_power = sig_power / snr_linear;
    let noise_std = noise_power.sqrt();

    let normal = Normal::new(0.0, noise_std).unwrap();

    for sample in signal.iter_mut() {
        *sample += normal.sample(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let config = NoiseConfig::default().with_seed(42).with_awgn(10.0);

        let mut a = vec![1.0; 256];
        let mut b = vec![1.0; 256];
        apply_noise(&mut a, &config);
        apply_noise(&mut b, &config);

        assert_eq!(a, b);
    }

    #[test]
    fn test_awgn_power_near_requested_snr() {
        let config = NoiseConfig::default().with_seed(7).with_awgn(10.0);

        let clean = vec![1.0; 20_000];
        let mut noisy = clean.clone();
        apply_noise(&mut noisy, &config);

        let noise: Vec<f64> = noisy.iter().zip(&clean).map(|(n, c)| n - c).collect();
        let measured_snr_db = 10.0 * (signal_power(&clean) / signal_power(&noise)).log10();

        assert!(
            (measured_snr_db - 10.0).abs() < 0.5,
            "measured SNR {} dB, wanted ~10 dB",
            measured_snr_db
        );
    }

    #[test]
    fn test_silent_signal_left_untouched() {
        let config = NoiseConfig::default().with_seed(1).with_awgn(0.0);
        let mut silence = vec![0.0; 64];
        apply_noise(&mut silence, &config);
        assert!(silence.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_noise_config_from_toml() {
        let config: NoiseConfig = toml::from_str(
            r#"
            seed = 99

            [additive]
            snr_db = 3.0
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.additive.unwrap().snr_db, 3.0);
    }
}
