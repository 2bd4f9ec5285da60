use std::borrow::Borrow;

use derive_more::{AsRef, Display};

const MAX_LEN: usize = 64;

/// Name of an exercise or a program.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let name = name.trim();
        match name.chars().count() {
            0 => Err(NameError::Empty),
            len if len > MAX_LEN => Err(NameError::TooLong(len)),
            _ => Ok(Self(name.to_owned())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("name is empty")]
    Empty,
    #[error("name has {0} characters, at most 64 are allowed")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Deadlift", Ok(Name("Deadlift".to_string())))]
    #[case("  Bench Press  ", Ok(Name("Bench Press".to_string())))]
    #[case("   ", Err(NameError::Empty))]
    #[case(&"X".repeat(65), Err(NameError::TooLong(65)))]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_name_lookup_by_str() {
        let map = BTreeMap::from([(Name::new("Overhead Press").unwrap(), 100)]);
        assert_eq!(map.get("Overhead Press"), Some(&100));
    }
}
