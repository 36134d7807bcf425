//! Employee roles and the rank check gating ledger operations.
//!
//! Resolving a bearer credential to an employee is the access gate's job
//! (a fronting proxy in this deployment); the ledger core only ever asks
//! "does the caller's role rank at or above the required role".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::transfer::LedgerError;

/// Employee role with a total rank order: teller < manager < admin.
///
/// `Unknown` covers missing or unrecognized roles and ranks below everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Unknown,
    Teller,
    Manager,
    Admin,
}

impl Role {
    /// Numeric rank used for the access check. Unknown roles rank 0.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Role::Unknown => 0,
            Role::Teller => 1,
            Role::Manager => 2,
            Role::Admin => 3,
        }
    }

    /// Total, case-insensitive name lookup. Anything unrecognized is
    /// `Unknown` rather than an error, so a stale or garbled role header
    /// degrades to "no permissions".
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "teller" => Role::Teller,
            "manager" => Role::Manager,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Unknown => "unknown",
            Role::Teller => "teller",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from_name(s))
    }
}

/// Pure access check: holds iff `rank(caller) >= rank(required)`.
pub fn require_role(caller: Role, required: Role) -> Result<(), LedgerError> {
    if caller.rank() >= required.rank() {
        Ok(())
    } else {
        Err(LedgerError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_rank_order() {
        assert!(Role::Unknown.rank() < Role::Teller.rank());
        assert!(Role::Teller.rank() < Role::Manager.rank());
        assert!(Role::Manager.rank() < Role::Admin.rank());
    }

    #[test]
    fn test_from_name_is_total() {
        assert_eq!(Role::from_name("teller"), Role::Teller);
        assert_eq!(Role::from_name("MANAGER"), Role::Manager);
        assert_eq!(Role::from_name("Admin"), Role::Admin);
        assert_eq!(Role::from_name("intern"), Role::Unknown);
        assert_eq!(Role::from_name(""), Role::Unknown);
    }

    #[test]
    fn test_require_role() {
        assert!(require_role(Role::Manager, Role::Manager).is_ok());
        assert!(require_role(Role::Admin, Role::Teller).is_ok());
        assert!(matches!(
            require_role(Role::Teller, Role::Manager),
            Err(LedgerError::PermissionDenied)
        ));
        assert!(matches!(
            require_role(Role::Unknown, Role::Teller),
            Err(LedgerError::PermissionDenied)
        ));
    }
}
