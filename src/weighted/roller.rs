use rand::{Rng, RngCore};

/// A source of uniformly distributed integers, injected into selection so that
/// tests can seed or script it.
pub trait Roller {
    /// Returns a value in `0..upper`. `upper` is never zero.
    fn roll_below(&mut self, upper: u64) -> u64;
}

impl<R: RngCore> Roller for R {
    fn roll_below(&mut self, upper: u64) -> u64 {
        self.gen_range(0..upper)
    }
}
