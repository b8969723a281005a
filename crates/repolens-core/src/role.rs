//! Audience roles for code explanations.
//!
//! Each role maps to exactly one fixed instruction string that is prepended
//! to the explanation prompt server-side.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of audience personas for code explanations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// An intern with little experience.
    #[default]
    Intern,
    /// A new graduate developer.
    NewGrad,
    /// A senior developer.
    Senior,
    /// A product manager.
    Pm,
    /// A designer.
    Designer,
}

/// Returned when a role string is not one of the closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid role selected")]
pub struct InvalidRole;

impl Role {
    /// All roles, in the order they are presented to users.
    pub const ALL: [Role; 5] = [
        Role::Intern,
        Role::NewGrad,
        Role::Senior,
        Role::Pm,
        Role::Designer,
    ];

    /// The instruction prefix used when building an explanation prompt for
    /// this audience.
    pub fn instruction(&self) -> &'static str {
        match self {
            Role::Intern => "Explain the code like I am an intern with little experience.",
            Role::NewGrad => {
                "Explain the structure and patterns as if to a new graduate developer."
            }
            Role::Senior => {
                "Explain the architecture, performance, and design decisions like to a senior developer."
            }
            Role::Pm => "Explain the high-level purpose and user flows like to a product manager.",
            Role::Designer => {
                "Explain what the UI does and how it might impact user experience, like to a designer."
            }
        }
    }

    /// The wire identifier for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Intern => "intern",
            Role::NewGrad => "newgrad",
            Role::Senior => "senior",
            Role::Pm => "pm",
            Role::Designer => "designer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intern" => Ok(Role::Intern),
            "newgrad" => Ok(Role::NewGrad),
            "senior" => Ok(Role::Senior),
            "pm" => Ok(Role::Pm),
            "designer" => Ok(Role::Designer),
            _ => Err(InvalidRole),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_identifier() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn rejects_unknown_role() {
        assert_eq!("bogus".parse::<Role>(), Err(InvalidRole));
        assert_eq!(InvalidRole.to_string(), "Invalid role selected");
    }

    #[test]
    fn serde_uses_lowercase_identifiers() {
        let json = serde_json::to_string(&Role::NewGrad).unwrap();
        assert_eq!(json, "\"newgrad\"");
        let role: Role = serde_json::from_str("\"designer\"").unwrap();
        assert_eq!(role, Role::Designer);
    }

    #[test]
    fn each_role_has_a_distinct_instruction() {
        let mut seen = std::collections::HashSet::new();
        for role in Role::ALL {
            assert!(seen.insert(role.instruction()));
        }
    }
}
