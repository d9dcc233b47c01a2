use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

pub mod command;
pub mod config;
pub mod error;
pub mod render;

/// Seeded source when a seed is configured, a fresh one from OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            debug!("using fixed seed {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}
