mod measure;
mod noise;
mod signal;

pub use measure::{mean_squared_error, noise_reduction_db};
pub use noise::{AdditiveNoiseConfig, NoiseConfig, apply_noise, signal_power};
pub use signal::{SineComponent, composite_signal, default_components, unit_impulse};
