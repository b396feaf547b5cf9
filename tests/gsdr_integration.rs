// Integration tests for end-to-end training and generation scenarios.

use gsdr::{Gsdr, GsdrConfig, GsdrError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn one_hot(dim: usize, index: usize) -> Vec<f32> {
    let mut v = vec![0.0; dim];
    v[index] = 1.0;
    v
}

/// Synthetic "glyph": a deterministic per-class intensity pattern with a
/// little per-sample noise, standing in for rescaled digit images.
fn glyph(class: usize, dim: usize, rng: &mut StdRng) -> Vec<f32> {
    (0..dim)
        .map(|d| {
            let base = (((class * 31 + d * 7) % 13) as f32) / 13.0;
            (base + rng.gen_range(-0.05..0.05)).clamp(0.0, 1.0)
        })
        .collect()
}

#[test]
fn test_train_then_generate_per_class() {
    let config = GsdrConfig {
        input_dim: 64,
        hidden: 128,
        latent_dim: 4,
        weight_min: -0.01,
        weight_max: 0.01,
        latent_influence: 20.0,
    };
    let mut model = Gsdr::random(&config, 42).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    // Original demo's training constants
    let (alpha, beta) = (0.0015, 0.03);

    for step in 0..2000 {
        let class = step % 4;
        let input = glyph(class, 64, &mut rng);
        model.learn(&input, &one_hot(4, class), alpha, beta).unwrap();
    }

    // Each class latent should generate something closer to its own class
    // prototype than to the other classes'.
    let mut clean_rng = StdRng::seed_from_u64(999);
    let prototypes: Vec<Vec<f32>> = (0..4).map(|c| glyph(c, 64, &mut clean_rng)).collect();

    let sse = |a: &[f32], b: &[f32]| -> f32 {
        a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
    };

    let mut correct = 0;
    for class in 0..4 {
        let generated = model.generate(&one_hot(4, class)).unwrap();
        assert_eq!(generated.len(), 64);

        let own = sse(&generated, &prototypes[class]);
        let best_other = (0..4)
            .filter(|&c| c != class)
            .map(|c| sse(&generated, &prototypes[c]))
            .fold(f32::INFINITY, f32::min);

        if own < best_other {
            correct += 1;
        }
    }

    assert!(
        correct >= 3,
        "generated outputs should match their conditioning class ({}/4 matched)",
        correct
    );
}

#[test]
fn test_error_decreases_over_repeated_learning() {
    let config = GsdrConfig {
        input_dim: 32,
        hidden: 64,
        latent_dim: 10,
        weight_min: -0.01,
        weight_max: 0.01,
        latent_influence: 20.0,
    };
    let mut model = Gsdr::random(&config, 1).unwrap();

    let mut rng = StdRng::seed_from_u64(2);
    let input: Vec<f32> = (0..32).map(|_| rng.gen_range(0.0..1.0)).collect();
    let latent = one_hot(10, 5);

    let mut errors = Vec::with_capacity(100);
    for _ in 0..100 {
        let inference = model.learn(&input, &latent, 0.01, 0.001).unwrap();
        errors.push(inference.reconstruction_error(&input));
    }

    let early: f32 = errors[..10].iter().sum::<f32>() / 10.0;
    let late: f32 = errors[90..].iter().sum::<f32>() / 10.0;
    assert!(
        late < early,
        "mean error should fall: early {:.4}, late {:.4}",
        early,
        late
    );
}

#[test]
fn test_sparsity_tracks_active_ratio() {
    let config = GsdrConfig {
        input_dim: 16,
        hidden: 100,
        latent_dim: 3,
        weight_min: -0.1,
        weight_max: 0.1,
        latent_influence: 5.0,
    };
    let mut model = Gsdr::random(&config, 42).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let input: Vec<f32> = (0..16).map(|_| rng.gen_range(-1.0..1.0)).collect();

    // Ratios chosen so that ratio * 100 is exact in f32; an inexact product
    // (e.g. 0.1 * 100 rounding just above 10) admits one extra rank, which is
    // the same accepted behavior the tie rule has at the cutoff.
    for &ratio in &[0.05, 0.25, 0.5] {
        model.active_ratio = ratio;
        let inference = model.encode(&input, &one_hot(3, 0)).unwrap();

        // Continuous random activations: no ties, so the realized count is
        // the number of integer ranks below the cutoff.
        assert_eq!(
            inference.active_count(),
            (ratio * 100.0) as usize,
            "ratio {} should fire exactly {} of 100 atoms",
            ratio,
            (ratio * 100.0) as usize
        );
    }
}

#[test]
fn test_two_models_same_seed_stay_in_lockstep() {
    let config = GsdrConfig {
        input_dim: 12,
        hidden: 30,
        latent_dim: 2,
        ..GsdrConfig::default()
    };
    let mut a = Gsdr::random(&config, 42).unwrap();
    let mut b = Gsdr::random(&config, 42).unwrap();

    let mut rng = StdRng::seed_from_u64(4);
    for step in 0..50 {
        let input: Vec<f32> = (0..12).map(|_| rng.gen_range(0.0..1.0)).collect();
        let latent = one_hot(2, step % 2);

        let ia = a.learn(&input, &latent, 0.005, 0.01).unwrap();
        let ib = b.learn(&input, &latent, 0.005, 0.01).unwrap();
        assert_eq!(ia, ib, "step {}: inference diverged", step);
    }
    assert_eq!(a, b, "models should remain bit-identical");
}

#[test]
fn test_failed_calls_leave_no_trace() {
    let config = GsdrConfig {
        input_dim: 10,
        hidden: 20,
        latent_dim: 3,
        ..GsdrConfig::default()
    };
    let mut model = Gsdr::random(&config, 42).unwrap();

    // A few successful steps so the model is away from its initial state
    for step in 0..5 {
        model
            .learn(&vec![0.5; 10], &one_hot(3, step % 3), 0.01, 0.01)
            .unwrap();
    }
    let snapshot = model.clone();

    assert!(model.learn(&vec![0.5; 9], &one_hot(3, 0), 0.01, 0.01).is_err());
    assert!(model.learn(&vec![0.5; 10], &one_hot(4, 0), 0.01, 0.01).is_err());
    assert!(model.generate(&one_hot(2, 0)).is_err());
    assert!(model.encode(&vec![0.5; 11], &one_hot(3, 0)).is_err());

    assert_eq!(model, snapshot, "failed calls must not mutate the model");
}

#[test]
fn test_invalid_config_reports_before_allocation() {
    let config = GsdrConfig {
        input_dim: 10,
        hidden: 20,
        latent_dim: 3,
        weight_min: 1.0,
        weight_max: -1.0,
        ..GsdrConfig::default()
    };

    match Gsdr::random(&config, 42) {
        Err(GsdrError::InvalidWeightRange { min, max }) => {
            assert_eq!((min, max), (1.0, -1.0));
        }
        other => panic!("expected InvalidWeightRange, got {:?}", other),
    }
}

#[test]
fn test_latent_interpolation_is_usable() {
    // The original harness blends between one-hot latents from keyboard
    // input; the core contract is just that any latent-length vector is a
    // valid conditioning input.
    let config = GsdrConfig {
        input_dim: 16,
        hidden: 64,
        latent_dim: 2,
        weight_min: -0.01,
        weight_max: 0.01,
        latent_influence: 10.0,
    };
    let mut model = Gsdr::random(&config, 42).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    for step in 0..500 {
        let class = step % 2;
        let input = glyph(class, 16, &mut rng);
        model.learn(&input, &one_hot(2, class), 0.0015, 0.03).unwrap();
    }

    for blend in 0..=10 {
        let t = blend as f32 / 10.0;
        let latent = vec![1.0 - t, t];
        let output = model.generate(&latent).unwrap();
        assert_eq!(output.len(), 16);
        assert!(
            output.iter().all(|v| v.is_finite()),
            "blend {} produced a non-finite output",
            t
        );
    }
}
