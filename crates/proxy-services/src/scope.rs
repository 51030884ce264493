//! Where a setting applies.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a setting applies machine-wide or to the invoking user only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Machine-wide configuration under the system root. Usually needs root.
    #[default]
    System,
    /// Configuration under the invoking user's home directory.
    User,
}

impl Scope {
    pub const ALL: [Scope; 2] = [Scope::System, Scope::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            _ => Err(Error::UnknownScope(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scope() {
        assert_eq!("system".parse::<Scope>().unwrap(), Scope::System);
        assert_eq!("USER".parse::<Scope>().unwrap(), Scope::User);
        assert!("global".parse::<Scope>().is_err());
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(Scope::default(), Scope::System);
    }
}
