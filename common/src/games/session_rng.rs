use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform choices for the games. Bots and dealers take it as a
/// parameter so tests can swap in a fixed choice.
pub trait CandidatePicker {
    /// Index in `0..len`, `None` when `len` is zero.
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    fn pick<T: Copy>(&mut self, candidates: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        self.pick_index(candidates.len()).map(|i| candidates[i])
    }

    /// Fisher-Yates shuffle driven by `pick_index`.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            if let Some(j) = self.pick_index(i + 1) {
                items.swap(i, j);
            }
        }
    }
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl CandidatePicker for SessionRng {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.random_range(0..len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_picks() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for len in 1..20 {
            assert_eq!(a.pick_index(len), b.pick_index(len));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_pick_stays_in_candidates() {
        let mut rng = SessionRng::new(42);
        let candidates = [0, 2, 6, 8];
        for _ in 0..100 {
            let picked = rng.pick(&candidates).unwrap();
            assert!(candidates.contains(&picked));
        }
    }

    #[test]
    fn test_pick_from_nothing_is_none() {
        let mut rng = SessionRng::from_random();
        assert_eq!(rng.pick::<usize>(&[]), None);
    }

    #[test]
    fn test_shuffle_keeps_every_item() {
        let mut rng = SessionRng::new(3);
        let mut items: Vec<u32> = (0..12).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..12).collect::<Vec<u32>>());
    }
}
