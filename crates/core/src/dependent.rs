//! Dependent field rules: the role enumeration and the name length bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Minimum dependent name length, in characters.
pub const NAME_MIN_LEN: u64 = 3;

/// Maximum dependent name length, in characters.
pub const NAME_MAX_LEN: u64 = 45;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The closed set of roles a dependent can hold on its item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Writer,
    Director,
}

impl Role {
    /// All valid role values, in their stored form.
    pub const ALL: &'static [&'static str] = &["WRITER", "DIRECTOR"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Writer => "WRITER",
            Self::Director => "DIRECTOR",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WRITER" => Ok(Self::Writer),
            "DIRECTOR" => Ok(Self::Director),
            _ => Err(CoreError::Validation(format!(
                "Unknown role: '{s}'. Valid roles: {}",
                Self::ALL.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Name
// ---------------------------------------------------------------------------

#[derive(Validate)]
struct NameRule<'a> {
    #[validate(length(min = NAME_MIN_LEN, max = NAME_MAX_LEN))]
    name: &'a str,
}

/// Validate that a dependent name is between [`NAME_MIN_LEN`] and
/// [`NAME_MAX_LEN`] characters long (inclusive) and holds no NUL character.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.contains('\0') {
        return Err(CoreError::Validation(
            "Dependent name must not contain NUL characters".into(),
        ));
    }
    NameRule { name }.validate().map_err(|_| {
        CoreError::Validation(format!(
            "Dependent name must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters, got {}",
            name.chars().count()
        ))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
