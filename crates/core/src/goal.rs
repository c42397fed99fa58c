//! Result metrics and the goal comparator.
//!
//! A [`Goal`] decides which of two packing results is better. It is an
//! ordered list of criteria, each pairing a metric (a pure function of
//! a result) with a direction. Comparison walks the criteria in order
//! and the first decisive one wins; metric values closer than the
//! tolerance count as equal and defer to the next criterion.

use crate::result::PackResult;

/// Metric differences below this tolerance are treated as ties.
const EPSILON: f64 = 1e-5;

/// A pure measurement over a packing result.
pub type Metric = fn(&PackResult) -> f64;

/// Whether smaller or larger metric values are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smaller values win.
    LowerBetter,
    /// Larger values win.
    HigherBetter,
}

/// One step of a goal: a metric and the direction it is judged in.
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    /// The measurement to compare.
    pub metric: Metric,
    /// The preferred direction.
    pub direction: Direction,
}

impl Criterion {
    /// Creates a criterion.
    pub fn new(metric: Metric, direction: Direction) -> Self {
        Self { metric, direction }
    }
}

/// An ordered multi-criterion comparator over packing results.
#[derive(Debug, Clone)]
pub struct Goal {
    criteria: Vec<Criterion>,
}

impl Goal {
    /// Builds a goal from an ordered criterion list. User code composes
    /// custom goals the same way the built-in constructors do.
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    /// Returns true iff `candidate` should replace `incumbent`.
    ///
    /// A missing incumbent always loses. Otherwise the criteria are
    /// consulted in order and the first one whose values differ by at
    /// least the tolerance decides; if every criterion ties, the
    /// candidate does not win.
    pub fn prefers(&self, candidate: &PackResult, incumbent: Option<&PackResult>) -> bool {
        let Some(incumbent) = incumbent else {
            return true;
        };

        for criterion in &self.criteria {
            let candidate_value = (criterion.metric)(candidate);
            let incumbent_value = (criterion.metric)(incumbent);

            if (candidate_value - incumbent_value).abs() < EPSILON {
                continue;
            }

            return match criterion.direction {
                Direction::LowerBetter => candidate_value < incumbent_value,
                Direction::HigherBetter => candidate_value > incumbent_value,
            };
        }

        false
    }

    /// Fewest unfit items, then fewest used bins, then least used bin
    /// capacity. The classic bin packing goal.
    pub fn minimize_bins() -> Self {
        Self::new(vec![
            Criterion::new(unfit_count, Direction::LowerBetter),
            Criterion::new(used_bin_count, Direction::LowerBetter),
            Criterion::new(used_bin_volume, Direction::LowerBetter),
        ])
    }

    /// Fewest unfit items, then least used bin capacity, then fewest
    /// used bins. Prefers dense loads when costs follow volume.
    pub fn tightest_packing() -> Self {
        Self::new(vec![
            Criterion::new(unfit_count, Direction::LowerBetter),
            Criterion::new(used_bin_volume, Direction::LowerBetter),
            Criterion::new(used_bin_count, Direction::LowerBetter),
        ])
    }

    /// Fewest unfit items, then highest average fill rate.
    pub fn max_average_fill_rate() -> Self {
        Self::new(vec![
            Criterion::new(unfit_count, Direction::LowerBetter),
            Criterion::new(avg_fill_rate, Direction::HigherBetter),
        ])
    }

    /// Fewest unfit items, then the most even weight distribution
    /// across used bins, then fewest used bins.
    pub fn balanced_packing() -> Self {
        Self::new(vec![
            Criterion::new(unfit_count, Direction::LowerBetter),
            Criterion::new(weight_std_dev, Direction::LowerBetter),
            Criterion::new(used_bin_count, Direction::LowerBetter),
        ])
    }

    /// Fewest unfit items, regardless of bin efficiency. For fixed
    /// container fleets where leaving items behind is the worst
    /// outcome.
    pub fn maximize_items() -> Self {
        Self::new(vec![Criterion::new(unfit_count, Direction::LowerBetter)])
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::minimize_bins()
    }
}

/// Number of unfit items.
pub fn unfit_count(result: &PackResult) -> f64 {
    result.unfit_items.len() as f64
}

/// Number of bins containing at least one item.
pub fn used_bin_count(result: &PackResult) -> f64 {
    result.used_bins().count() as f64
}

/// Total capacity (not content) of the bins containing at least one
/// item.
pub fn used_bin_volume(result: &PackResult) -> f64 {
    result.used_bins().map(|bin| bin.volume()).sum()
}

/// Average of content volume over capacity across used bins with
/// positive volume; zero when there are none.
pub fn avg_fill_rate(result: &PackResult) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for bin in result.used_bins() {
        if bin.volume() > 0.0 {
            sum += bin.items_volume() / bin.volume();
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Population standard deviation of content weight across used bins;
/// zero for one used bin or fewer.
pub fn weight_std_dev(result: &PackResult) -> f64 {
    let weights: Vec<f64> = result.used_bins().map(|bin| bin.items_weight()).collect();
    if weights.len() <= 1 {
        return 0.0;
    }

    let mean = weights.iter().sum::<f64>() / weights.len() as f64;
    let variance =
        weights.iter().map(|w| (w - mean) * (w - mean)).sum::<f64>() / weights.len() as f64;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bin::Bin;
    use crate::item::Item;
    use crate::rotation::Pivot;
    use approx::assert_relative_eq;

    fn bin_with_item(id: &str, bin_side: f64, item_side: f64, weight: f64) -> Bin {
        let mut bin = Bin::new(id, bin_side, bin_side, bin_side, 1e9);
        assert!(bin.put_item(&Item::new(format!("{id}-item"), item_side, item_side, item_side, weight), Pivot::zeros()));
        bin
    }

    fn result_with(bins: Vec<Bin>, unfit: usize) -> PackResult {
        let unfit_items = (0..unfit)
            .map(|i| Item::new(format!("unfit-{i}"), 1.0, 1.0, 1.0, 1.0))
            .collect();
        PackResult::new(bins, unfit_items)
    }

    #[test]
    fn test_metrics_on_mixed_result() {
        let used = bin_with_item("a", 10.0, 5.0, 3.0);
        let empty = Bin::new("b", 10.0, 10.0, 10.0, 1e9);
        let result = result_with(vec![used, empty], 2);

        assert_relative_eq!(unfit_count(&result), 2.0);
        assert_relative_eq!(used_bin_count(&result), 1.0);
        assert_relative_eq!(used_bin_volume(&result), 1000.0);
        assert_relative_eq!(avg_fill_rate(&result), 0.125);
    }

    #[test]
    fn test_avg_fill_rate_empty_result() {
        let result = PackResult::default();
        assert_relative_eq!(avg_fill_rate(&result), 0.0);
    }

    #[test]
    fn test_weight_std_dev() {
        let balanced = result_with(
            vec![bin_with_item("a", 10.0, 1.0, 5.0), bin_with_item("b", 10.0, 1.0, 5.0)],
            0,
        );
        let skewed = result_with(
            vec![bin_with_item("a", 10.0, 1.0, 1.0), bin_with_item("b", 10.0, 1.0, 9.0)],
            0,
        );

        assert_relative_eq!(weight_std_dev(&balanced), 0.0);
        assert_relative_eq!(weight_std_dev(&skewed), 4.0);
    }

    #[test]
    fn test_weight_std_dev_single_bin_is_zero() {
        let result = result_with(vec![bin_with_item("a", 10.0, 1.0, 7.0)], 0);
        assert_relative_eq!(weight_std_dev(&result), 0.0);
    }

    #[test]
    fn test_missing_incumbent_always_loses() {
        let goal = Goal::minimize_bins();
        let candidate = PackResult::default();
        assert!(goal.prefers(&candidate, None));
    }

    #[test]
    fn test_unfit_count_decides_first() {
        let goal = Goal::minimize_bins();

        // One used bin but an unfit item, against two used bins and
        // nothing left over: fewer unfit items wins outright.
        let one_bin_one_unfit = result_with(vec![bin_with_item("a", 10.0, 1.0, 1.0)], 1);
        let two_bins_none_unfit = result_with(
            vec![bin_with_item("a", 10.0, 1.0, 1.0), bin_with_item("b", 10.0, 1.0, 1.0)],
            0,
        );

        assert!(goal.prefers(&two_bins_none_unfit, Some(&one_bin_one_unfit)));
        assert!(!goal.prefers(&one_bin_one_unfit, Some(&two_bins_none_unfit)));
    }

    #[test]
    fn test_bin_count_goal_prefers_fewer_bins() {
        let goal = Goal::new(vec![Criterion::new(used_bin_count, Direction::LowerBetter)]);

        let one_bin = result_with(vec![bin_with_item("a", 10.0, 1.0, 1.0)], 1);
        let two_bins = result_with(
            vec![bin_with_item("a", 10.0, 1.0, 1.0), bin_with_item("b", 10.0, 1.0, 1.0)],
            0,
        );

        assert!(goal.prefers(&one_bin, Some(&two_bins)));
        assert!(!goal.prefers(&two_bins, Some(&one_bin)));
    }

    #[test]
    fn test_minimize_bins_breaks_ties_on_volume() {
        let goal = Goal::minimize_bins();

        let small = result_with(vec![bin_with_item("a", 2.0, 1.0, 1.0)], 0);
        let large = result_with(vec![bin_with_item("b", 3.0, 1.0, 1.0)], 0);

        assert!(goal.prefers(&small, Some(&large)));
        assert!(!goal.prefers(&large, Some(&small)));
    }

    #[test]
    fn test_tightest_packing_prefers_less_capacity() {
        let goal = Goal::tightest_packing();

        let tight = result_with(vec![bin_with_item("a", 2.0, 2.0, 1.0)], 0);
        let loose = result_with(
            vec![bin_with_item("a", 4.0, 2.0, 1.0), Bin::new("b", 4.0, 4.0, 4.0, 1e9)],
            0,
        );

        assert!(goal.prefers(&tight, Some(&loose)));
    }

    #[test]
    fn test_max_average_fill_rate_prefers_fuller_bins() {
        let goal = Goal::max_average_fill_rate();

        let fuller = result_with(vec![bin_with_item("a", 10.0, 8.0, 1.0)], 0);
        let emptier = result_with(vec![bin_with_item("b", 10.0, 5.0, 1.0)], 0);

        assert!(goal.prefers(&fuller, Some(&emptier)));
        assert!(!goal.prefers(&emptier, Some(&fuller)));
    }

    #[test]
    fn test_balanced_packing_prefers_even_weights() {
        let goal = Goal::balanced_packing();

        let balanced = result_with(
            vec![bin_with_item("a", 10.0, 1.0, 5.0), bin_with_item("b", 10.0, 1.0, 5.0)],
            0,
        );
        let skewed = result_with(
            vec![bin_with_item("a", 10.0, 1.0, 1.0), bin_with_item("b", 10.0, 1.0, 9.0)],
            0,
        );

        assert!(goal.prefers(&balanced, Some(&skewed)));
        assert!(!goal.prefers(&skewed, Some(&balanced)));
    }

    #[test]
    fn test_all_ties_do_not_replace_incumbent() {
        let goal = Goal::minimize_bins();
        let a = result_with(vec![bin_with_item("a", 2.0, 1.0, 1.0)], 0);
        let b = result_with(vec![bin_with_item("b", 2.0, 1.0, 1.0)], 0);

        assert!(!goal.prefers(&a, Some(&b)));
        assert!(!goal.prefers(&b, Some(&a)));
    }

    #[test]
    fn test_differences_inside_tolerance_are_ties() {
        // Two results whose used volume differs by far less than the
        // tolerance: the volume criterion must not decide, and with
        // every other criterion tied the candidate loses.
        let goal = Goal::new(vec![Criterion::new(used_bin_volume, Direction::LowerBetter)]);

        let a = result_with(vec![bin_with_item("a", 2.0, 1.0, 1.0)], 0);
        let mut nudged_bin = Bin::new("b", 2.0, 2.0, 2.0 + 1e-9, 1e9);
        assert!(nudged_bin.put_item(&Item::new("i", 1.0, 1.0, 1.0, 1.0), Pivot::zeros()));
        let b = result_with(vec![nudged_bin], 0);

        assert!(!goal.prefers(&a, Some(&b)));
        assert!(!goal.prefers(&b, Some(&a)));
    }
}
