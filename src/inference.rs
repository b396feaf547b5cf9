//! Shared inference pass: latent affinity, activation, competition, and
//! reconstruction.
//!
//! Encoding (input-driven, used by learning) and decoding (latent-only, used
//! by generation) run the same pass; they differ only in whether the raw
//! activation includes the input dot product.

use crate::compete::rank_sparse_states;
use crate::model::Gsdr;
use crate::{GsdrError, Result};

/// Result of one inference pass over all H atoms.
///
/// These are per-call scratch values, recomputed in full every time; they
/// carry no state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    /// Raw activation per atom: bias + latent affinity (+ input match when
    /// encoding)
    pub activations: Vec<f32>,

    /// Firing state per atom after rank-based inhibition
    pub states: Vec<bool>,

    /// Sum of the firing atoms' weight vectors (length `input_dim`)
    pub reconstruction: Vec<f32>,
}

impl Inference {
    /// Number of atoms that fired
    pub fn active_count(&self) -> usize {
        self.states.iter().filter(|&&s| s).count()
    }

    /// Sum of squared residuals between `target` and the reconstruction.
    ///
    /// Callers monitoring training typically watch this trend downward over
    /// repeated [`learn`](crate::Gsdr::learn) calls on the same example.
    pub fn reconstruction_error(&self, target: &[f32]) -> f32 {
        self.reconstruction
            .iter()
            .zip(target.iter())
            .map(|(r, t)| (t - r) * (t - r))
            .sum()
    }
}

/// Run the shared pass. `input` is `Some` when encoding, `None` when
/// decoding. Dimension checks are the caller's responsibility.
pub(crate) fn infer(model: &Gsdr, input: Option<&[f32]>, forced_latent: &[f32]) -> Inference {
    let activations: Vec<f32> = model
        .atoms
        .iter()
        .map(|atom| {
            // Negative squared distance to the latent prototype: closest
            // prototypes score highest.
            let affinity: f32 = forced_latent
                .iter()
                .zip(atom.latent.iter())
                .map(|(l, p)| {
                    let delta = l - p;
                    -delta * delta
                })
                .sum();

            let drive: f32 = match input {
                Some(input) => input
                    .iter()
                    .zip(atom.weights.iter())
                    .map(|(x, w)| x * w)
                    .sum(),
                None => 0.0,
            };

            atom.bias + affinity + drive
        })
        .collect();

    let states = rank_sparse_states(&activations, model.active_ratio);

    let mut reconstruction = vec![0.0; model.input_dim];
    for (atom, &state) in model.atoms.iter().zip(states.iter()) {
        if state {
            for (r, &w) in reconstruction.iter_mut().zip(atom.weights.iter()) {
                *r += w;
            }
        }
    }

    Inference {
        activations,
        states,
        reconstruction,
    }
}

impl Gsdr {
    /// Encode an input under a forced latent without mutating the model.
    ///
    /// This is the same pass [`learn`](Gsdr::learn) runs before updating the
    /// dictionary, exposed for callers that want to inspect or classify the
    /// sparse code.
    ///
    /// # Errors
    ///
    /// [`GsdrError::DimensionMismatch`] if either vector length does not
    /// match the model.
    pub fn encode(&self, input: &[f32], forced_latent: &[f32]) -> Result<Inference> {
        if input.len() != self.input_dim {
            return Err(GsdrError::DimensionMismatch {
                expected: self.input_dim,
                actual: input.len(),
            });
        }
        if forced_latent.len() != self.latent_dim {
            return Err(GsdrError::DimensionMismatch {
                expected: self.latent_dim,
                actual: forced_latent.len(),
            });
        }

        Ok(infer(self, Some(input), forced_latent))
    }

    /// Generate an output vector from a forced latent alone.
    ///
    /// Decode-mode inference: activation is bias plus latent affinity, with
    /// no input term. Read-only and deterministic for a given
    /// `(model, forced_latent)`.
    ///
    /// # Errors
    ///
    /// [`GsdrError::DimensionMismatch`] if `forced_latent` does not match the
    /// model's latent dimension.
    ///
    /// # Example
    ///
    /// ```
    /// use gsdr::{Gsdr, GsdrConfig};
    ///
    /// let config = GsdrConfig { input_dim: 9, hidden: 16, latent_dim: 2, ..Default::default() };
    /// let model = Gsdr::random(&config, 42).unwrap();
    /// let output = model.generate(&[1.0, 0.0]).unwrap();
    /// assert_eq!(output.len(), 9);
    /// ```
    pub fn generate(&self, forced_latent: &[f32]) -> Result<Vec<f32>> {
        if forced_latent.len() != self.latent_dim {
            return Err(GsdrError::DimensionMismatch {
                expected: self.latent_dim,
                actual: forced_latent.len(),
            });
        }

        Ok(infer(self, None, forced_latent).reconstruction)
    }
}
