//! Headless rendition of the original windowed demo: train on synthetic
//! glyphs conditioned by one-hot class codes, then sweep a blend between two
//! latent codes and print each generated frame as ASCII intensity art.
//!
//! ```sh
//! cargo run --example latent_morph
//! ```

use gsdr::{Gsdr, GsdrConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIDE: usize = 12;
const CLASSES: usize = 4;
const RAMP: &[u8] = b" .:-=+*#%@";

fn one_hot(dim: usize, index: usize) -> Vec<f32> {
    let mut v = vec![0.0; dim];
    v[index] = 1.0;
    v
}

/// Per-class glyph: a filled disc whose radius and center depend on the
/// class, with light per-sample noise.
fn glyph(class: usize, rng: &mut StdRng) -> Vec<f32> {
    let cx = 3.0 + 2.0 * (class % 2) as f32;
    let cy = 3.0 + 2.0 * (class / 2) as f32;
    let radius = 2.0 + class as f32 * 0.5;

    (0..SIDE * SIDE)
        .map(|d| {
            let x = (d % SIDE) as f32;
            let y = (d / SIDE) as f32;
            let dist = ((x - cx) * (x - cx) + (y - cy) * (y - cy)).sqrt();
            let intensity: f32 = if dist < radius { 1.0 } else { 0.0 };
            (intensity + rng.gen_range(-0.05..0.05)).clamp(0.0, 1.0)
        })
        .collect()
}

fn print_frame(frame: &[f32], label: &str) {
    println!("--- {} ---", label);
    for row in frame.chunks(SIDE) {
        let line: String = row
            .iter()
            .map(|&v| {
                let idx = (v.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
                RAMP[idx] as char
            })
            .collect();
        println!("{}", line);
    }
}

fn main() {
    let config = GsdrConfig {
        input_dim: SIDE * SIDE,
        hidden: 256,
        latent_dim: CLASSES,
        weight_min: -0.01,
        weight_max: 0.01,
        latent_influence: 20.0,
    };
    let mut model = Gsdr::random(&config, 1234).expect("valid config");
    let mut rng = StdRng::seed_from_u64(5678);

    println!(
        "training: {} atoms, {} classes, {} steps",
        model.hidden(),
        CLASSES,
        8000
    );

    for step in 0..8000 {
        let class = rng.gen_range(0..CLASSES);
        let input = glyph(class, &mut rng);
        model
            .learn(&input, &one_hot(CLASSES, class), 0.0015, 0.03)
            .expect("dimensions match");

        if step % 1000 == 0 {
            println!("step {}", step);
        }
    }

    for class in 0..CLASSES {
        let frame = model
            .generate(&one_hot(CLASSES, class))
            .expect("dimensions match");
        print_frame(&frame, &format!("class {}", class));
    }

    // Morph between class 0 and class 3, the way the original blended
    // latents from key presses.
    for blend in 0..=4 {
        let t = blend as f32 / 4.0;
        let latent: Vec<f32> = (0..CLASSES)
            .map(|c| match c {
                0 => 1.0 - t,
                3 => t,
                _ => 0.0,
            })
            .collect();
        let frame = model.generate(&latent).expect("dimensions match");
        print_frame(&frame, &format!("morph t = {:.2}", t));
    }
}
