//! Authentication and authorization types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Program access level, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    Read,
    Write,
    Admin,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessLevel::Read => "Read",
            AccessLevel::Write => "Write",
            AccessLevel::Admin => "Admin",
        };
        f.write_str(name)
    }
}

impl FromStr for AccessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read" => Ok(AccessLevel::Read),
            "write" => Ok(AccessLevel::Write),
            "admin" => Ok(AccessLevel::Admin),
            other => Err(format!("Unknown access level: {}", other)),
        }
    }
}

/// A user's grant on one program (tenant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramAccess {
    pub program_id: i32,
    pub access_level: AccessLevel,
    pub program_name: String,
    #[serde(default)]
    pub program_code: Option<String>,
}

/// Resolved caller identity and program scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: i32,
    pub user_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub is_system_admin: bool,
    #[serde(default)]
    pub program_access: Vec<ProgramAccess>,
}
