//! Model state: dictionary atoms, configuration, and random initialization.
//!
//! The model is created once by [`Gsdr::random`] and thereafter mutated only
//! by [`Gsdr::learn`](crate::plasticity). Latent prototypes are fixed
//! conditioning anchors for the model's lifetime; only dictionary weights and
//! biases learn.

use crate::{GsdrError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Construction parameters for a [`Gsdr`] model.
///
/// Defaults match the original MNIST demonstration: 28×28 inputs, 256 atoms,
/// 10 one-hot latent classes, small symmetric initial weights, and a latent
/// influence large enough that the conditioning term dominates atom selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GsdrConfig {
    /// Input (and reconstruction) dimensionality
    pub input_dim: usize,

    /// Number of dictionary atoms (H)
    pub hidden: usize,

    /// Forced-latent dimensionality
    pub latent_dim: usize,

    /// Lower bound for uniform dictionary-weight initialization
    pub weight_min: f32,

    /// Upper bound for uniform dictionary-weight initialization
    pub weight_max: f32,

    /// Scale applied to the uniform [-1, 1] latent prototypes
    pub latent_influence: f32,
}

impl Default for GsdrConfig {
    fn default() -> Self {
        Self {
            input_dim: 28 * 28,
            hidden: 256,
            latent_dim: 10,
            weight_min: -0.01,
            weight_max: 0.01,
            latent_influence: 20.0,
        }
    }
}

impl GsdrConfig {
    /// Validate the configuration.
    ///
    /// All dimensions must be at least 1 and the initialization range must be
    /// non-empty. Called by [`Gsdr::random`] before any allocation.
    pub fn validate(&self) -> Result<()> {
        if self.input_dim == 0 {
            return Err(GsdrError::InvalidDimension(
                "input_dim must be >= 1".to_string(),
            ));
        }
        if self.hidden == 0 {
            return Err(GsdrError::InvalidDimension(
                "hidden must be >= 1".to_string(),
            ));
        }
        if self.latent_dim == 0 {
            return Err(GsdrError::InvalidDimension(
                "latent_dim must be >= 1".to_string(),
            ));
        }
        if self.weight_min > self.weight_max {
            return Err(GsdrError::InvalidWeightRange {
                min: self.weight_min,
                max: self.weight_max,
            });
        }
        Ok(())
    }
}

/// One dictionary atom: an input-weight vector paired with a homeostatic bias
/// and a fixed latent prototype.
///
/// The weight vector plays a double role: it scores input match during
/// encoding and it is the atom's contribution to the reconstruction when the
/// atom fires. Per-call activation and firing state are *not* stored here;
/// they are returned from inference (see [`Inference`](crate::Inference)) so
/// the model carries learned parameters only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryAtom {
    pub(crate) weights: Vec<f32>,
    pub(crate) bias: f32,
    pub(crate) latent: Vec<f32>,
}

impl DictionaryAtom {
    /// Dictionary weights (length `input_dim`)
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Homeostatic bias
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Latent prototype (length `latent_dim`), fixed after initialization
    pub fn latent(&self) -> &[f32] {
        &self.latent
    }
}

/// Generative sparse distributed representation model.
///
/// Single-writer discipline: only [`learn`](Gsdr::learn) mutates the model,
/// and concurrent `learn` calls on one model are not supported. Read-only
/// calls ([`generate`](Gsdr::generate), [`encode`](Gsdr::encode)) may run
/// concurrently with each other but not with an in-flight `learn`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gsdr {
    pub(crate) atoms: Vec<DictionaryAtom>,

    // Stored explicitly rather than inferred from an atom's weight length,
    // so generation is well-defined even for a malformed deserialized model.
    pub(crate) input_dim: usize,
    pub(crate) latent_dim: usize,

    /// Target fraction of atoms active per call, in (0, 1]. Freely tunable
    /// between calls.
    pub active_ratio: f32,
}

impl Gsdr {
    /// Create a model with uniformly random parameters from a seed.
    ///
    /// Dictionary weights are drawn from `[weight_min, weight_max]`, biases
    /// start at zero, and latent prototypes are drawn from `[-1, 1]` scaled
    /// by `latent_influence`. Deterministic for a given `(config, seed)`.
    ///
    /// # Errors
    ///
    /// [`GsdrError::InvalidDimension`] or [`GsdrError::InvalidWeightRange`]
    /// if the configuration is invalid; nothing is allocated in that case.
    pub fn random(config: &GsdrConfig, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random_from_rng(config, &mut rng)
    }

    /// Like [`Gsdr::random`] but drawing from a caller-supplied generator,
    /// for callers that thread one rng through a larger experiment.
    pub fn random_from_rng<R: Rng + ?Sized>(config: &GsdrConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let atoms = (0..config.hidden)
            .map(|_| DictionaryAtom {
                weights: (0..config.input_dim)
                    .map(|_| rng.gen_range(config.weight_min..=config.weight_max))
                    .collect(),
                bias: 0.0,
                latent: (0..config.latent_dim)
                    .map(|_| rng.gen_range(-1.0..=1.0) * config.latent_influence)
                    .collect(),
            })
            .collect();

        tracing::debug!(
            input_dim = config.input_dim,
            hidden = config.hidden,
            latent_dim = config.latent_dim,
            "initialized random dictionary"
        );

        Ok(Self {
            atoms,
            input_dim: config.input_dim,
            latent_dim: config.latent_dim,
            active_ratio: 0.1,
        })
    }

    /// Number of dictionary atoms (H)
    pub fn hidden(&self) -> usize {
        self.atoms.len()
    }

    /// Input / reconstruction dimensionality
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Forced-latent dimensionality
    pub fn latent_dim(&self) -> usize {
        self.latent_dim
    }

    /// The dictionary atoms, in index order
    pub fn atoms(&self) -> &[DictionaryAtom] {
        &self.atoms
    }
}
