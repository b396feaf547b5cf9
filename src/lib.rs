//! # GSDR: Generative Sparse Distributed Representations
//!
//! A single-layer competitive sparse-coding network that learns its dictionary
//! online and generates outputs from a conditioning ("forced latent") vector
//! alone:
//!
//! - **Encode**: input + forced latent → k-sparse binary code via rank-based
//!   competitive inhibition
//! - **Learn**: winners-only delta-rule dictionary update from the
//!   reconstruction residual, plus a homeostatic bias regulator that balances
//!   long-run firing frequency across the dictionary
//! - **Generate**: forced latent alone → reconstruction, no input required
//!
//! ## Example
//!
//! ```rust
//! use gsdr::{Gsdr, GsdrConfig};
//!
//! let config = GsdrConfig {
//!     input_dim: 16,
//!     hidden: 64,
//!     latent_dim: 4,
//!     ..GsdrConfig::default()
//! };
//! let mut model = Gsdr::random(&config, 42).unwrap();
//!
//! // One-hot conditioning: class 2
//! let mut latent = vec![0.0; 4];
//! latent[2] = 1.0;
//!
//! let input = vec![0.5; 16];
//! let inference = model.learn(&input, &latent, 0.0015, 0.03).unwrap();
//! assert_eq!(inference.reconstruction.len(), 16);
//!
//! // Generate from the latent code alone
//! let generated = model.generate(&latent).unwrap();
//! assert_eq!(generated.len(), 16);
//! ```
//!
//! ## Model structure
//!
//! The model holds H dictionary atoms. Each atom pairs an input-weight vector
//! (used both to score input match and to reconstruct when the atom fires),
//! a homeostatic bias, and a fixed latent prototype set at initialization.
//! Roughly `active_ratio * H` atoms fire per call; only firing atoms move
//! their weights.
//!
//! ## Caveats
//!
//! The network performs no defense against numerical divergence: overly large
//! learning rates can drive weights to NaN/Inf, and such values propagate
//! silently through subsequent calls. Callers own learning-rate hygiene.

pub mod compete;
pub mod inference;
pub mod model;
pub mod plasticity;

pub use inference::Inference;
pub use model::{DictionaryAtom, Gsdr, GsdrConfig};

#[derive(Debug, thiserror::Error)]
pub enum GsdrError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Invalid weight range: min {min} exceeds max {max}")]
    InvalidWeightRange { min: f32, max: f32 },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, GsdrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() {
        let config = GsdrConfig {
            input_dim: 8,
            hidden: 32,
            latent_dim: 3,
            ..GsdrConfig::default()
        };
        let mut model = Gsdr::random(&config, 7).unwrap();

        let input = vec![0.25; 8];
        let latent = vec![1.0, 0.0, 0.0];

        let inference = model.learn(&input, &latent, 0.01, 0.001).unwrap();
        assert_eq!(inference.activations.len(), 32);
        assert_eq!(inference.states.len(), 32);
        assert_eq!(inference.reconstruction.len(), 8);

        let generated = model.generate(&latent).unwrap();
        assert_eq!(generated.len(), 8);
    }

    #[test]
    fn test_error_display() {
        let err = GsdrError::DimensionMismatch {
            expected: 784,
            actual: 10,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 784, got 10");

        let err = GsdrError::InvalidWeightRange {
            min: 0.5,
            max: -0.5,
        };
        assert!(err.to_string().contains("0.5"));
    }
}
