use approx::assert_relative_eq;
use boxcar::simulation::{
    NoiseConfig, apply_noise, composite_signal, default_components, unit_impulse,
};
use boxcar::{MovingAverageFilter, Warmup};

fn noisy_test_signal() -> Vec<f64> {
    let mut signal = composite_signal(&default_components(), 0.25, 1000);
    let noise = NoiseConfig::default().with_seed(1234).with_awgn(6.0);
    apply_noise(&mut signal, &noise);
    signal
}

fn batch_filtered(window: usize, warmup: Warmup, signal: &[f64]) -> Vec<f64> {
    let mut filter = MovingAverageFilter::with_warmup(window, warmup).unwrap();
    filter.filter_signal(signal).unwrap()
}

#[test]
fn test_streaming_and_batch_are_bit_identical() {
    let signal = noisy_test_signal();

    for warmup in [Warmup::PartialWindow, Warmup::ZeroFilled] {
        let batch = batch_filtered(9, warmup, &signal);

        let mut filter = MovingAverageFilter::with_warmup(9, warmup).unwrap();
        let streamed: Vec<f64> = signal
            .iter()
            .map(|&x| filter.filter_sample(x).unwrap())
            .collect();

        assert_eq!(batch.len(), streamed.len());
        for (i, (&a, &b)) in batch.iter().zip(&streamed).enumerate() {
            assert_eq!(
                a.to_bits(),
                b.to_bits(),
                "outputs diverge at sample {} ({} vs {})",
                i,
                a,
                b
            );
        }
    }
}

#[test]
fn test_stream_then_batch_continues_window_state() {
    let signal = noisy_test_signal();
    let (head, tail) = signal.split_at(40);

    let all_streamed = batch_filtered(6, Warmup::PartialWindow, &signal);

    let mut filter = MovingAverageFilter::new(6).unwrap();
    let mut mixed: Vec<f64> = head
        .iter()
        .map(|&x| filter.filter_sample(x).unwrap())
        .collect();
    mixed.extend(filter.filter_signal(tail).unwrap());

    for (&a, &b) in all_streamed.iter().zip(&mixed) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_causality_output_prefix_unaffected_by_later_samples() {
    let signal = noisy_test_signal();
    let full = batch_filtered(8, Warmup::PartialWindow, &signal);

    for cut in [1, 17, 100] {
        let truncated = batch_filtered(8, Warmup::PartialWindow, &signal[..cut]);
        for (i, (&a, &b)) in full[..cut].iter().zip(&truncated).enumerate() {
            assert_eq!(
                a.to_bits(),
                b.to_bits(),
                "future samples changed output at step {}",
                i
            );
        }
    }
}

#[test]
fn test_linearity_superposition() {
    let x1 = noisy_test_signal();
    let x2: Vec<f64> = composite_signal(&default_components(), 0.25, 1000)
        .iter()
        .map(|&v| v * 0.5 + 0.25)
        .collect();
    let (a, b) = (2.5, -0.75);

    for warmup in [Warmup::PartialWindow, Warmup::ZeroFilled] {
        let combined: Vec<f64> = x1.iter().zip(&x2).map(|(&u, &v)| a * u + b * v).collect();

        let y1 = batch_filtered(7, warmup, &x1);
        let y2 = batch_filtered(7, warmup, &x2);
        let y_combined = batch_filtered(7, warmup, &combined);

        for i in 0..y_combined.len() {
            assert_relative_eq!(
                y_combined[i],
                a * y1[i] + b * y2[i],
                max_relative = 1e-9,
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn test_unit_impulse_reproduces_impulse_response() {
    let mut filter = MovingAverageFilter::with_warmup(12, Warmup::ZeroFilled).unwrap();
    let h = filter.impulse_response();
    let output = filter.filter_signal(&unit_impulse(36)).unwrap();

    for (k, &expected) in h.iter().enumerate() {
        assert_relative_eq!(output[k], expected, max_relative = 1e-12);
    }
    for &tail in &output[h.len()..] {
        assert_relative_eq!(tail, 0.0);
    }
}

#[test]
fn test_time_invariance_under_zero_delay() {
    let signal = noisy_test_signal();

    for delay in [1, 4, 11] {
        let mut delayed = vec![0.0; delay];
        delayed.extend_from_slice(&signal);

        let y = batch_filtered(5, Warmup::ZeroFilled, &signal);
        let y_delayed = batch_filtered(5, Warmup::ZeroFilled, &delayed);

        // Output of the delayed run is the original output, delayed.
        for (i, &expected) in y.iter().enumerate() {
            assert_eq!(y_delayed[i + delay].to_bits(), expected.to_bits());
        }
        for &leading in &y_delayed[..delay] {
            assert_eq!(leading, 0.0);
        }
    }
}
