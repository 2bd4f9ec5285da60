use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::{Exercise, Name, WarmupScheme, Weight};

/// Everything the exercise store holds besides the workout history.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Programs in the order they were added.
    pub programs: IndexMap<String, Program>,
    pub exercises: BTreeMap<Name, Exercise>,
    pub warmup: WarmupScheme,
    pub weight_increment: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub exercises: Vec<Name>,
}

impl Catalog {
    #[must_use]
    pub fn program(&self, key: &str) -> Option<&Program> {
        self.programs.get(key)
    }

    /// The program added first, used when a workout is started without
    /// choosing one.
    #[must_use]
    pub fn first_program(&self) -> Option<(&String, &Program)> {
        self.programs.iter().next()
    }

    /// Exercises in the order of the first program, or all exercises if
    /// there is no program.
    #[must_use]
    pub fn dashboard(&self) -> Vec<&Exercise> {
        match self.first_program() {
            Some((_, program)) => program
                .exercises
                .iter()
                .filter_map(|name| self.exercises.get(name))
                .collect(),
            None => self.exercises.values().collect(),
        }
    }

    #[must_use]
    pub fn current_weight(&self, name: &Name) -> Option<Weight> {
        self.exercises.get(name).map(|e| e.current_weight)
    }
}

const DEFAULT_EXERCISES: [(&str, f64, u32, u32); 5] = [
    ("Front Squats", 120.0, 3, 5),
    ("Bench Press", 165.0, 5, 5),
    ("Deadlift", 205.0, 2, 5),
    ("Bent Over Row", 115.0, 3, 5),
    ("Overhead Press", 100.0, 3, 5),
];

impl Default for Catalog {
    fn default() -> Self {
        let exercises = DEFAULT_EXERCISES
            .iter()
            .filter_map(|&(name, weight, sets, reps)| {
                Some(Exercise::new(
                    Name::new(name).ok()?,
                    Weight::new(weight).ok()?,
                    sets,
                    reps,
                ))
            })
            .collect::<Vec<_>>();
        let program = Program {
            name: String::from("Full Workout"),
            exercises: exercises.iter().map(|e| e.name.clone()).collect(),
        };

        Self {
            programs: IndexMap::from([(String::from("main"), program)]),
            exercises: exercises
                .into_iter()
                .map(|e| (e.name.clone(), e))
                .collect(),
            warmup: WarmupScheme::default(),
            weight_increment: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        let (key, program) = catalog.first_program().unwrap();
        assert_eq!(key, "main");
        assert_eq!(program.name, "Full Workout");
        assert_eq!(catalog.exercises.len(), 5);
        assert_eq!(
            catalog.current_weight(&Name::new("Deadlift").unwrap()),
            Some(Weight::new(205.0).unwrap())
        );
        assert_eq!(catalog.weight_increment, 5.0);
    }

    #[test]
    fn test_first_program_is_insertion_order() {
        let mut catalog = Catalog::default();
        catalog.programs.insert(
            String::from("accessory"),
            Program {
                name: String::from("Accessory Day"),
                exercises: vec![],
            },
        );
        let (key, _) = catalog.first_program().unwrap();
        assert_eq!(key, "main");

        catalog.programs.shift_remove("main");
        catalog.programs.insert(
            String::from("main"),
            Program {
                name: String::from("Full Workout"),
                exercises: vec![],
            },
        );
        let (key, program) = catalog.first_program().unwrap();
        assert_eq!(key, "accessory");
        assert_eq!(program.name, "Accessory Day");
    }

    #[test]
    fn test_dashboard_follows_program_order() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog
                .dashboard()
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec![
                "Front Squats",
                "Bench Press",
                "Deadlift",
                "Bent Over Row",
                "Overhead Press"
            ]
        );
    }

    #[test]
    fn test_dashboard_skips_unknown_exercises() {
        let mut catalog = Catalog::default();
        catalog.exercises.remove("Deadlift");
        assert_eq!(catalog.dashboard().len(), 4);
    }

    #[test]
    fn test_dashboard_without_program() {
        let mut catalog = Catalog::default();
        catalog.programs.clear();
        assert_eq!(
            catalog
                .dashboard()
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec![
                "Bench Press",
                "Bent Over Row",
                "Deadlift",
                "Front Squats",
                "Overhead Press"
            ]
        );
    }
}
