use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Who is filling in forms at the kiosk. Determines the template directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Parent,
    Staff,
}

impl Role {
    /// Roles in the order they are offered on the selection screen.
    pub const ALL: [Role; 2] = [Role::Parent, Role::Staff];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Parent => "Parent",
            Role::Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parent" => Ok(Role::Parent),
            "staff" => Ok(Role::Staff),
            _ => Err(FormError::InvalidRole(s.to_string())),
        }
    }
}
