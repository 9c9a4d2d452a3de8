//! Hero record.

use serde::{Deserialize, Serialize};

/// A hero as stored in the record store and echoed over HTTP.
///
/// An `id` of `0` on create asks the record store to assign one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Primary key.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl Hero {
    /// Create a hero with the given id and name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Whether the record store should assign the identifier on insert.
    pub const fn needs_id(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_json_shape() {
        let hero = Hero::new(7, "Dr. Nice");
        let json = serde_json::to_string(&hero).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Dr. Nice"}"#);

        let parsed: Hero = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, hero);
    }

    #[test]
    fn test_needs_id() {
        assert!(Hero::new(0, "Unnamed").needs_id());
        assert!(!Hero::new(3, "Bombasto").needs_id());
    }
}
