//! Profile entity - the portal-side record for an authenticated subject
//!
//! Identity itself lives in the hosted auth platform; the profile carries
//! the league-specific state, most importantly `participation_activated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portal role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    GymAdmin,
    LeagueAdmin,
}

impl Role {
    /// String form used in the database column
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::GymAdmin => "gym_admin",
            Self::LeagueAdmin => "league_admin",
        }
    }

    /// Parse the database column value, falling back to `Member`
    pub fn from_column(s: &str) -> Self {
        match s {
            "gym_admin" => Self::GymAdmin,
            "league_admin" => Self::LeagueAdmin,
            _ => Self::Member,
        }
    }

    /// Whether this role may mint and list codes for a gym
    pub fn can_manage_codes(self) -> bool {
        matches!(self, Self::GymAdmin | Self::LeagueAdmin)
    }

    /// Whether this role may manage gyms, master codes, and season settings
    pub fn can_manage_league(self) -> bool {
        matches!(self, Self::LeagueAdmin)
    }
}

/// Profile entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub role: Role,
    pub participation_activated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new member profile for a subject id issued by the auth platform
    pub fn new(id: Uuid, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            display_name: None,
            role: Role::Member,
            participation_activated_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if league participation has been activated
    #[inline]
    pub fn is_participation_activated(&self) -> bool {
        self.participation_activated_at.is_some()
    }

    /// Stamp the activation timestamp if not already set.
    ///
    /// Returns true if this call performed the activation; the timestamp is
    /// never overwritten once set.
    pub fn activate_participation(&mut self, now: DateTime<Utc>) -> bool {
        if self.participation_activated_at.is_some() {
            return false;
        }
        self.participation_activated_at = Some(now);
        self.updated_at = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_profile_is_member() {
        let profile = Profile::new(Uuid::new_v4(), "climber@example.com".to_string());
        assert_eq!(profile.role, Role::Member);
        assert!(!profile.is_participation_activated());
    }

    #[test]
    fn test_activation_first_wins() {
        let mut profile = Profile::new(Uuid::new_v4(), "climber@example.com".to_string());
        let first = Utc::now();
        assert!(profile.activate_participation(first));
        assert_eq!(profile.participation_activated_at, Some(first));

        let second = first + Duration::hours(1);
        assert!(!profile.activate_participation(second));
        assert_eq!(profile.participation_activated_at, Some(first));
    }

    #[test]
    fn test_role_permissions() {
        assert!(!Role::Member.can_manage_codes());
        assert!(Role::GymAdmin.can_manage_codes());
        assert!(!Role::GymAdmin.can_manage_league());
        assert!(Role::LeagueAdmin.can_manage_codes());
        assert!(Role::LeagueAdmin.can_manage_league());
    }

    #[test]
    fn test_role_column_round_trip() {
        for role in [Role::Member, Role::GymAdmin, Role::LeagueAdmin] {
            assert_eq!(Role::from_column(role.as_str()), role);
        }
        assert_eq!(Role::from_column("something_else"), Role::Member);
    }
}
