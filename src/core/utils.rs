use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Get the random number generator. If no seed is provided, the generator is seeded with the
/// default (all-zero) seed so that runs are reproducible.
///
/// # Arguments
///
/// * `seed`: The optional seed number.
///
/// returns: `Box<dyn RngCore>`
pub fn get_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    let rng = match seed {
        None => ChaCha8Rng::from_seed(Default::default()),
        Some(s) => ChaCha8Rng::seed_from_u64(s),
    };
    Box::new(rng)
}

#[cfg(test)]
mod test {
    use rand::Rng;

    use crate::core::utils::get_rng;

    #[test]
    /// The same seed generates the same sequence.
    fn test_seeded_rng() {
        let mut rng1 = get_rng(Some(10));
        let mut rng2 = get_rng(Some(10));
        let a: Vec<f64> = (0..5).map(|_| rng1.gen()).collect();
        let b: Vec<f64> = (0..5).map(|_| rng2.gen()).collect();
        assert_eq!(a, b);
    }
}
