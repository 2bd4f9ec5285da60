//! Barbell plate loading.
//!
//! The solver is greedy: denominations are consumed largest first and a
//! choice is never revisited. For the usual plate sets (anything containing a
//! small change plate) this finds the exact loadout, but it is not an optimal
//! subset-sum search and can leave weight on the table for unusual
//! inventories. Callers rely on the greedy output, so keep it that way.

use std::fmt::{self, Display};

use derive_more::Deref;

/// Tolerance used when comparing the remaining per-side weight against a
/// denomination.
pub const EPSILON: f64 = 0.01;

/// Total number of plates owned per denomination, both sides combined.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlateInventory {
    plates: Vec<(f64, u32)>,
}

impl PlateInventory {
    #[must_use]
    pub fn new(plates: impl IntoIterator<Item = (f64, u32)>) -> Self {
        Self {
            plates: plates.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn count(&self, denomination: f64) -> u32 {
        self.plates
            .iter()
            .filter(|(weight, _)| same_denomination(*weight, denomination))
            .map(|(_, count)| *count)
            .sum()
    }

    /// Only pairs can be loaded, an odd plate stays on the rack.
    #[must_use]
    pub fn max_per_side(&self, denomination: f64) -> u32 {
        self.count(denomination) / 2
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, u32)> {
        self.plates.iter()
    }
}

impl FromIterator<(f64, u32)> for PlateInventory {
    fn from_iter<T: IntoIterator<Item = (f64, u32)>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    pub bar_weight: f64,
    /// Denominations to consider, largest first.
    pub order: Vec<f64>,
}

impl BarConfig {
    #[must_use]
    pub fn new(bar_weight: f64, order: Vec<f64>) -> Self {
        Self { bar_weight, order }
    }
}

/// Plates on one side of the bar, from the bar outward.
#[derive(Deref, Debug, Clone, Default, PartialEq)]
pub struct PlateLoadout(Vec<f64>);

impl PlateLoadout {
    #[must_use]
    pub fn per_side(&self) -> f64 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn total(&self, bar_weight: f64) -> f64 {
        bar_weight + self.per_side() * 2.0
    }

    /// Plates in the order they appear on the left side of the bar.
    pub fn mirrored(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().rev().copied()
    }
}

impl Display for PlateLoadout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let plates = self
            .0
            .iter()
            .map(|plate| plate.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", plates.join(" + "))
    }
}

#[must_use]
pub fn solve(total_weight: f64, bar: &BarConfig, inventory: &PlateInventory) -> PlateLoadout {
    let mut remaining = (total_weight - bar.bar_weight) / 2.0;
    if remaining.is_nan() || remaining <= 0.0 {
        return PlateLoadout::default();
    }

    let mut plates = Vec::new();

    for &denomination in &bar.order {
        let max = inventory.max_per_side(denomination);
        let mut used = 0;
        while remaining >= denomination - EPSILON && used < max {
            plates.push(denomination);
            remaining -= denomination;
            used += 1;
        }
    }

    PlateLoadout(plates)
}

/// A bar together with the plates available for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateCalculator {
    pub bar: BarConfig,
    pub inventory: PlateInventory,
}

impl PlateCalculator {
    #[must_use]
    pub fn new(bar: BarConfig, inventory: PlateInventory) -> Self {
        Self { bar, inventory }
    }

    /// 45 lb bar with a small home gym plate set.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bar: BarConfig::new(45.0, vec![45.0, 35.0, 25.0, 10.0, 5.0, 2.5]),
            inventory: PlateInventory::new([
                (45.0, 2),
                (35.0, 2),
                (25.0, 4),
                (10.0, 4),
                (5.0, 2),
                (2.5, 2),
            ]),
        }
    }

    #[must_use]
    pub fn solve(&self, total_weight: f64) -> PlateLoadout {
        solve(total_weight, &self.bar, &self.inventory)
    }

    #[must_use]
    pub fn bar_weight(&self) -> f64 {
        self.bar.bar_weight
    }
}

fn same_denomination(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(225.0, vec![45.0, 35.0, 10.0])]
    #[case(100.0, vec![25.0, 2.5])]
    #[case(135.0, vec![45.0])]
    #[case(50.0, vec![2.5])]
    #[case(120.0, vec![35.0, 2.5])]
    #[case(165.0, vec![45.0, 10.0, 5.0])]
    #[case(205.0, vec![45.0, 35.0])]
    fn test_solve(#[case] total_weight: f64, #[case] expected: Vec<f64>) {
        assert_eq!(PlateCalculator::standard().solve(total_weight), PlateLoadout(expected));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-20.0)]
    #[case(45.0)]
    #[case(46.0)]
    #[case(f64::NAN)]
    fn test_solve_bar_only(#[case] total_weight: f64) {
        assert!(PlateCalculator::standard().solve(total_weight).is_empty());
    }

    #[rstest]
    #[case(PlateCalculator::standard())]
    #[case(PlateCalculator::new(
        BarConfig::new(20.0, vec![25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25]),
        PlateInventory::new([(25.0, 3), (20.0, 1), (15.0, 5), (10.0, 2), (5.0, 3), (2.5, 1), (1.25, 4)]),
    ))]
    #[case(PlateCalculator::new(
        BarConfig::new(15.0, vec![33.0, 7.5, 0.5]),
        PlateInventory::new([(33.0, 7), (7.5, 3), (0.5, 11)]),
    ))]
    #[case(PlateCalculator::new(
        BarConfig::new(45.0, vec![45.0, 10.0]),
        PlateInventory::new([(45.0, 1), (10.0, 0)]),
    ))]
    fn test_solve_respects_inventory(#[case] calculator: PlateCalculator) {
        let bar_weight = calculator.bar_weight();
        for total_weight in (0..=1000).map(|w| f64::from(w) / 2.0) {
            let loadout = calculator.solve(total_weight);
            let target = ((total_weight - bar_weight) / 2.0).max(0.0);
            assert!(loadout.per_side() <= target + EPSILON);
            for &denomination in &calculator.bar.order {
                let used = loadout
                    .iter()
                    .filter(|p| same_denomination(**p, denomination))
                    .count();
                assert!(used <= calculator.inventory.max_per_side(denomination) as usize);
            }
        }
    }

    #[test]
    fn test_solve_exhausts_inventory() {
        let loadout = PlateCalculator::standard().solve(1000.0);
        assert_eq!(
            *loadout,
            vec![45.0, 35.0, 25.0, 25.0, 10.0, 10.0, 5.0, 2.5]
        );
        assert_approx_eq!(loadout.total(45.0), 360.0);
    }

    #[test]
    fn test_solve_odd_count_only_uses_pairs() {
        let bar = BarConfig::new(45.0, vec![45.0, 25.0]);
        let inventory = PlateInventory::new([(45.0, 3), (25.0, 1)]);
        assert_eq!(*solve(225.0, &bar, &inventory), vec![45.0]);
    }

    #[test]
    fn test_solve_is_greedy() {
        // 30 per side is reachable with 15 + 15 but 25 is taken first.
        let bar = BarConfig::new(45.0, vec![25.0, 15.0]);
        let inventory = PlateInventory::new([(25.0, 2), (15.0, 4)]);
        assert_eq!(*solve(105.0, &bar, &inventory), vec![25.0]);
    }

    #[test]
    fn test_solve_deterministic() {
        let calculator = PlateCalculator::standard();
        assert_eq!(calculator.solve(187.5), calculator.solve(187.5));
    }

    #[test]
    fn test_plate_loadout_mirrored() {
        let loadout = PlateLoadout(vec![45.0, 35.0, 10.0]);
        assert_eq!(loadout.mirrored().collect::<Vec<_>>(), vec![10.0, 35.0, 45.0]);
    }

    #[test]
    fn test_plate_loadout_display() {
        assert_eq!(PlateLoadout(vec![25.0, 2.5]).to_string(), "25 + 2.5");
        assert_eq!(PlateLoadout::default().to_string(), "");
    }

    #[test]
    fn test_plate_inventory_count() {
        let inventory = PlateCalculator::standard().inventory;
        assert_eq!(inventory.count(2.5), 2);
        assert_eq!(inventory.max_per_side(25.0), 2);
        assert_eq!(inventory.count(55.0), 0);
    }
}
