//! Gym entity - a participating climbing gym, the scope of gym codes

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Gym entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gym {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Gym {
    /// Create a new Gym
    pub fn new(name: String, city: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            city,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gym_creation() {
        let gym = Gym::new("Boulderhalle Nord".to_string(), Some("Kiel".to_string()));
        assert_eq!(gym.name, "Boulderhalle Nord");
        assert_eq!(gym.city.as_deref(), Some("Kiel"));
        assert_eq!(gym.created_at, gym.updated_at);
    }
}
