use crate::tour::Tour;

/// The best tour a worker has seen so far.
///
/// Starts empty. A candidate replaces the current best if there is none yet
/// or if its cost is strictly lower, so the cost only ever decreases and ties
/// keep the earlier tour. Candidates with a NaN cost are never accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Incumbent {
    best: Option<(f64, Tour)>,
}

impl Incumbent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a candidate with `cost` would replace the current best.
    pub fn accepts(&self, cost: f64) -> bool {
        if cost.is_nan() {
            return false;
        }
        match &self.best {
            None => true,
            Some((best, _)) => cost < *best,
        }
    }

    /// Offers `tour` with the given cost. Returns `true` if it became the new best.
    pub fn offer(&mut self, tour: &Tour, cost: f64) -> bool {
        self.offer_order(tour.as_slice(), cost)
    }

    /// Same as [`Incumbent::offer`] for a raw order that the caller guarantees is a permutation.
    pub(crate) fn offer_order(&mut self, order: &[usize], cost: f64) -> bool {
        if !self.accepts(cost) {
            return false;
        }
        match &mut self.best {
            Some((best_cost, tour)) => {
                *best_cost = cost;
                tour.copy_from(order);
            }
            None => self.best = Some((cost, Tour::from_order_unchecked(order.to_vec()))),
        }
        true
    }

    pub fn is_present(&self) -> bool {
        self.best.is_some()
    }

    pub fn cost(&self) -> Option<f64> {
        self.best.as_ref().map(|(cost, _)| *cost)
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.best.as_ref().map(|(_, tour)| tour)
    }

    pub fn into_parts(self) -> Option<(f64, Tour)> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_offer_always_accepted() {
        let mut incumbent = Incumbent::new();
        assert!(!incumbent.is_present());
        assert!(incumbent.offer_order(&[1, 0, 2], 12.5));
        assert!(incumbent.is_present());
        assert_eq!(incumbent.cost(), Some(12.5));
        assert_eq!(incumbent.tour().unwrap().as_slice(), &[1, 0, 2]);
    }

    #[test]
    fn test_zero_and_negative_costs_are_real_values() {
        let mut incumbent = Incumbent::new();
        assert!(incumbent.offer_order(&[0, 1], 0.0));
        assert!(!incumbent.offer_order(&[1, 0], 3.0));
        assert_eq!(incumbent.cost(), Some(0.0));

        assert!(incumbent.offer_order(&[1, 0], -1.0));
        assert_eq!(incumbent.cost(), Some(-1.0));
    }

    #[test]
    fn test_ties_keep_the_earlier_tour() {
        let mut incumbent = Incumbent::new();
        incumbent.offer_order(&[0, 1, 2], 5.0);
        assert!(!incumbent.offer_order(&[2, 1, 0], 5.0));
        assert_eq!(incumbent.tour().unwrap().as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_cost_sequence_is_non_increasing() {
        let mut incumbent = Incumbent::new();
        let mut previous = f64::INFINITY;
        for (step, cost) in [9.0, 11.0, 4.0, 4.0, 7.5, 2.0, 3.0].into_iter().enumerate() {
            incumbent.offer_order(&[step % 2, 1 - step % 2], cost);
            let current = incumbent.cost().unwrap();
            assert!(current <= previous);
            previous = current;
        }
        assert_eq!(previous, 2.0);
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut incumbent = Incumbent::new();
        assert!(!incumbent.offer_order(&[0, 1], f64::NAN));
        assert!(!incumbent.is_present());
    }

    #[test]
    fn test_offer_takes_a_checked_tour() {
        let mut incumbent = Incumbent::new();
        let tour = Tour::from_order(vec![2, 0, 1], 3).unwrap();
        assert!(incumbent.offer(&tour, 6.0));
        assert_eq!(incumbent.tour(), Some(&tour));
    }
}
