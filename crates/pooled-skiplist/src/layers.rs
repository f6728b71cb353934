use oorandom::Rand32;


/// A simple PRNG trait, used for choosing how many layers a new node of a skiplist occupies.
///
/// Implement this to inject a custom (for instance, scripted) random source into a
/// [`SkipList`].
///
/// [`SkipList`]: crate::SkipList
pub trait Prng32 {
    /// Produces a random `u32` in the range `[0, u32::MAX]`.
    ///
    /// (See [`oorandom::Rand32::rand_u32`]; this function is the same interface.)
    #[must_use]
    fn rand_u32(&mut self) -> u32;
}

/// A [`Prng32`] which can be constructed from a seed, so that skiplists can create their own.
pub trait SeedablePrng32: Prng32 {
    #[must_use]
    fn new_seeded(seed: u64) -> Self;
}

impl Prng32 for Rand32 {
    #[inline]
    fn rand_u32(&mut self) -> u32 {
        // Inherent impls take priority over traits, so this is the inherent method
        // of `Rand32` a.k.a. `Self`
        Self::rand_u32(self)
    }
}

impl SeedablePrng32 for Rand32 {
    #[inline]
    fn new_seeded(seed: u64) -> Self {
        Self::new(seed)
    }
}

/// Return a random value in `1..=max_layers`, by flipping a fair coin until it lands tails.
///
/// Each heads adds one layer, so a node reaches layer `k` (counting from `1`) with probability
/// `2^-(k-1)`, except that what would be higher values are capped to `max_layers`.
pub(crate) fn random_layer_count<P: Prng32>(prng: &mut P, max_layers: usize) -> usize {
    let mut layers = 1;
    while layers < max_layers && prng.rand_u32() % 2 == 0 {
        layers += 1;
    }
    layers
}


#[cfg(test)]
mod tests {
    use super::*;


    /// Always produces the same value.
    struct Constant(u32);

    impl Prng32 for Constant {
        fn rand_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn always_heads_is_capped() {
        assert_eq!(random_layer_count(&mut Constant(0), 20), 20);
        assert_eq!(random_layer_count(&mut Constant(0), 1), 1);
    }

    #[test]
    fn always_tails_is_one_layer() {
        assert_eq!(random_layer_count(&mut Constant(1), 20), 1);
    }

    #[test]
    fn roughly_geometric() {
        let mut prng = Rand32::new(0x_5eed);
        let mut counts = [0_u32; 21];

        for _ in 0..100_000 {
            let layers = random_layer_count(&mut prng, 20);
            assert!((1..=20).contains(&layers));
            counts[layers] += 1;
        }

        // About half of the nodes should have exactly one layer, a quarter exactly two, etc.
        assert!((45_000..55_000).contains(&counts[1]), "{counts:?}");
        assert!((21_000..29_000).contains(&counts[2]), "{counts:?}");
        assert!((10_000..15_000).contains(&counts[3]), "{counts:?}");
    }

    #[test]
    fn deterministic_for_a_seed() {
        let mut first = Rand32::new_seeded(99);
        let mut second = Rand32::new_seeded(99);

        for _ in 0..100 {
            assert_eq!(
                random_layer_count(&mut first, 12),
                random_layer_count(&mut second, 12),
            );
        }
    }
}
