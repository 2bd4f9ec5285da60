use crate::{Catalog, CreateError, DeleteError, Name, ReadError, UpdateError, Weight};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_catalog(&self) -> Result<Catalog, ReadError>;
    /// Raises the current weight by the catalog's increment and returns the stored value.
    async fn increment_weight(&self, name: &Name) -> Result<Weight, UpdateError>;
    /// Lowers the current weight by the catalog's increment, never below zero.
    async fn decrement_weight(&self, name: &Name) -> Result<Weight, UpdateError>;
    async fn set_weight(&self, name: &Name, weight: Weight) -> Result<Weight, UpdateError>;
    async fn create_exercise(
        &self,
        exercise: Exercise,
        program: Option<&str>,
    ) -> Result<Exercise, CreateError>;
    async fn delete_exercise(&self, name: &Name) -> Result<Name, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_catalog(&self) -> Result<Catalog, ReadError>;
    /// Applies one weight step in the store and updates `catalog` with the
    /// weight the store reports back.
    async fn adjust_weight(
        &self,
        catalog: &mut Catalog,
        name: &Name,
        direction: Direction,
    ) -> Result<Weight, UpdateError>;
    async fn set_weight(
        &self,
        catalog: &mut Catalog,
        name: &Name,
        weight: Weight,
    ) -> Result<Weight, UpdateError>;
    async fn create_exercise(
        &self,
        exercise: Exercise,
        program: Option<&str>,
    ) -> Result<Exercise, CreateError>;
    async fn delete_exercise(&self, name: &Name) -> Result<Name, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: Name,
    pub current_weight: Weight,
    pub default_sets: u32,
    pub default_reps: u32,
}

impl Exercise {
    #[must_use]
    pub fn new(name: Name, current_weight: Weight, default_sets: u32, default_reps: u32) -> Self {
        Self {
            name,
            current_weight,
            default_sets,
            default_reps,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarmupScheme {
    pub percentages: Vec<u32>,
    pub reps: u32,
}

impl Default for WarmupScheme {
    fn default() -> Self {
        Self {
            percentages: vec![50, 70],
            reps: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarmupSet {
    pub percentage: u32,
    pub weight: Weight,
    pub reps: u32,
}

impl WarmupScheme {
    /// Suggested warm-up sets for `working_weight`, rounded to the nearest 5.
    #[must_use]
    pub fn warmups(&self, working_weight: Weight) -> Vec<WarmupSet> {
        self.percentages
            .iter()
            .map(|&percentage| WarmupSet {
                percentage,
                weight: Weight::new(
                    (working_weight.value() * f64::from(percentage) / 100.0 / 5.0).round() * 5.0,
                )
                .unwrap_or_default(),
                reps: self.reps,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(120.0, vec![60.0, 85.0])]
    #[case(165.0, vec![85.0, 115.0])]
    #[case(205.0, vec![105.0, 145.0])]
    #[case(115.0, vec![60.0, 80.0])]
    #[case(0.0, vec![0.0, 0.0])]
    fn test_warmups(#[case] working_weight: f64, #[case] expected: Vec<f64>) {
        let warmups = WarmupScheme::default().warmups(Weight::new(working_weight).unwrap());
        assert_eq!(
            warmups.iter().map(|w| w.weight.value()).collect::<Vec<_>>(),
            expected
        );
        assert_eq!(
            warmups.iter().map(|w| w.percentage).collect::<Vec<_>>(),
            vec![50, 70]
        );
        assert!(warmups.iter().all(|w| w.reps == 5));
    }

    #[test]
    fn test_warmups_without_percentages() {
        let scheme = WarmupScheme {
            percentages: vec![],
            reps: 3,
        };
        assert!(scheme.warmups(Weight::new(100.0).unwrap()).is_empty());
    }
}
