//! Online learning: winners-only delta-rule dictionary update plus a
//! homeostatic bias regulator.
//!
//! One call processes one example. The dictionary update moves only the atoms
//! that fired, pulling their weight vectors toward reducing the reconstruction
//! residual. The bias update touches every atom, winners and losers alike,
//! continuously pulling raw activation toward zero so that no subset of atoms
//! permanently dominates the competition and firing frequency stays balanced
//! across the dictionary.

use crate::inference::{infer, Inference};
use crate::model::Gsdr;
use crate::{GsdrError, Result};

impl Gsdr {
    /// Learn one `(input, forced_latent)` example in place.
    ///
    /// Runs encode-mode inference, then applies
    ///
    /// - `weights[i][d] += alpha * state[i] * (input[d] - recon[d])`
    ///   (the competitive dictionary step, winners only),
    /// - `bias[i] += beta * (-activation[i])` (homeostasis, all atoms).
    ///
    /// Latent prototypes are never touched; they are fixed conditioning
    /// anchors, not learned targets.
    ///
    /// Returns the inference so callers can observe the sparse code and the
    /// residual without a second pass.
    ///
    /// # Errors
    ///
    /// [`GsdrError::DimensionMismatch`] if either vector length does not
    /// match the model. Raised before any mutation: a failed call leaves the
    /// model unchanged.
    pub fn learn(
        &mut self,
        input: &[f32],
        forced_latent: &[f32],
        alpha: f32,
        beta: f32,
    ) -> Result<Inference> {
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

        let inference = infer(self, Some(input), forced_latent);

        for (atom, (&state, &activation)) in self
            .atoms
            .iter_mut()
            .zip(inference.states.iter().zip(inference.activations.iter()))
        {
            if state {
                for (w, (&x, &r)) in atom
                    .weights
                    .iter_mut()
                    .zip(input.iter().zip(inference.reconstruction.iter()))
                {
                    *w += alpha * (x - r);
                }
            }

            atom.bias += beta * -activation;
        }

        Ok(inference)
    }
}
