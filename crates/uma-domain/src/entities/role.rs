//! Roles and role assignments

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Closed set of roles an identity can hold
///
/// Serialised as the numeric role id. Accepts either the id or the role
/// name when deserialising, so tokens minted with a string claim still parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full system control (id 1)
    Admin,
    /// Dispensing staff (id 2)
    Pharmacist,
    /// Store operations (id 3)
    StoreManager,
}

impl Role {
    /// All roles in id order
    pub const ALL: [Role; 3] = [Role::Admin, Role::Pharmacist, Role::StoreManager];

    /// Numeric role id
    pub fn id(self) -> u8 {
        match self {
            Role::Admin => 1,
            Role::Pharmacist => 2,
            Role::StoreManager => 3,
        }
    }

    /// Canonical role name
    pub fn name(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Pharmacist => "pharmacist",
            Role::StoreManager => "store_manager",
        }
    }

    /// Look up a role by numeric id
    pub fn from_id(id: u64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|role| u64::from(role.id()) == id)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Role id {id} is not one of 1 (Admin), 2 (Pharmacist), 3 (Store Manager)"
                ))
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        if let Ok(id) = normalized.parse::<u64>() {
            return Self::from_id(id);
        }
        Self::ALL
            .into_iter()
            .find(|role| role.name() == normalized)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown role: {s}")))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoleRepr {
    Id(u64),
    Name(String),
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parsed = match RoleRepr::deserialize(deserializer)? {
            RoleRepr::Id(id) => Role::from_id(id),
            RoleRepr::Name(name) => name.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
