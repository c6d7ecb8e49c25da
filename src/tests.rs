//! Test utils.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const RNG_SEED: u64 = 19878367467712;

pub fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(RNG_SEED)
}
