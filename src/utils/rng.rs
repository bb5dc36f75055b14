use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::{info, warn};

/// Hands out independent, reproducible RNG streams derived from one master seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    /// Build from an optional configured seed, drawing one from entropy when absent.
    pub fn from_config(seed: Option<u64>) -> Self {
        let master_seed = match seed {
            Some(seed) => {
                info!("Using master seed {}", seed);
                seed
            }
            None => {
                let seed = rand::random();
                warn!("No seed provided, using entropy seed {}", seed);
                seed
            }
        };
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Stream for a named subsystem. The same name always gives the same stream.
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        name.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }
}
