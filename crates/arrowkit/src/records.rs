//! Named records replacing ad-hoc object literals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Returned by [`city_of`] when the address chain is incomplete.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

pub fn create_user(name: impl Into<String>, age: u32) -> User {
    User {
        name: name.into(),
        age,
    }
}

/// A user whose fields may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialUser {
    pub name: Option<String>,
    pub age: Option<u32>,
}

impl PartialUser {
    /// Fills missing fields with `"Unknown"` and `0`.
    pub fn complete(&self) -> User {
        User {
            name: self.name.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            age: self.age.unwrap_or(0),
        }
    }
}

impl From<User> for PartialUser {
    fn from(user: User) -> Self {
        Self {
            name: Some(user.name),
            age: Some(user.age),
        }
    }
}

/// Renders `"{name} ({age})"` with defaults for missing fields.
pub fn display_user(user: &PartialUser) -> String {
    user.complete().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub address: Option<Address>,
}

/// Follows `profile.address.city`, falling back to `"Unknown"` when a link
/// is missing or the city is empty.
pub fn city_of(profile: Option<&Profile>) -> &str {
    profile
        .and_then(|p| p.address.as_ref())
        .and_then(|a| a.city.as_deref())
        .filter(|city| !city.is_empty())
        .unwrap_or(UNKNOWN)
}
