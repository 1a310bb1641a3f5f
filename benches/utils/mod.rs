use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn random_vec(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(0..1_000)).collect()
}
