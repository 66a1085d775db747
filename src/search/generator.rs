//! # Random Tour Generator
//!
//! Produces the uniformly random base tour each outer iteration starts from.
//!
//! The default [`Construction::RejectionSampling`] draws a uniform index,
//! keeps it if that city has not been placed yet and retries otherwise. Its
//! expected cost grows as the unplaced set shrinks (coupon-collector,
//! O(n log n) draws). [`Construction::Shuffle`] is a linear-time
//! Fisher-Yates shuffle producing the same distribution from fewer draws.

use crate::rng::RandomNumberGenerator;

/// How the random base tour is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construction {
    #[default]
    RejectionSampling,
    Shuffle,
}

/// Builds random permutations of `0..len`, reusing its "placed" markers between calls.
#[derive(Debug, Clone)]
pub struct RandomTourGenerator {
    placed: Vec<bool>,
}

impl RandomTourGenerator {
    pub fn new(len: usize) -> Self {
        Self {
            placed: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Writes a fresh random permutation into `out`, replacing its contents.
    ///
    /// Returns the number of random draws it took.
    pub fn generate(
        &mut self,
        construction: Construction,
        rng: &mut RandomNumberGenerator,
        out: &mut Vec<usize>,
    ) -> usize {
        out.clear();
        match construction {
            Construction::RejectionSampling => self.rejection_sample(rng, out),
            Construction::Shuffle => {
                out.extend(0..self.placed.len());
                rng.shuffle(out);
                self.placed.len()
            }
        }
    }

    fn rejection_sample(&mut self, rng: &mut RandomNumberGenerator, out: &mut Vec<usize>) -> usize {
        let len = self.placed.len();
        let mut draws = 0;

        while out.len() < len {
            let index = rng.index(len);
            draws += 1;
            if !self.placed[index] {
                self.placed[index] = true;
                out.push(index);
            }
        }

        self.placed.fill(false);
        draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::Tour;

    #[test]
    fn test_rejection_sampling_yields_permutations() {
        let mut generator = RandomTourGenerator::new(25);
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut out = Vec::new();

        for _ in 0..50 {
            let draws = generator.generate(Construction::RejectionSampling, &mut rng, &mut out);
            assert!(draws >= 25);
            assert!(Tour::from_order(out.clone(), 25).is_ok());
        }
        assert!(generator.placed.iter().all(|placed| !placed));
    }

    #[test]
    fn test_shuffle_yields_permutations() {
        let mut generator = RandomTourGenerator::new(25);
        let mut rng = RandomNumberGenerator::from_seed(2);
        let mut out = vec![99; 3];

        let draws = generator.generate(Construction::Shuffle, &mut rng, &mut out);
        assert_eq!(draws, 25);
        assert!(Tour::from_order(out, 25).is_ok());
    }

    #[test]
    fn test_every_city_can_start_the_tour() {
        // Over many samples of a small catalogue each index should appear first at least once.
        let mut generator = RandomTourGenerator::new(4);
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut out = Vec::new();
        let mut firsts = [0usize; 4];

        for _ in 0..400 {
            generator.generate(Construction::RejectionSampling, &mut rng, &mut out);
            firsts[out[0]] += 1;
        }
        assert!(firsts.iter().all(|&count| count > 0), "{:?}", firsts);
    }
}
