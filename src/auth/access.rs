//! Program-scope checks

use super::types::{AccessLevel, Principal};
use crate::utils::error::{GatewayError, Result};

impl Principal {
    /// Identity used when authentication is switched off
    pub fn unauthenticated_admin() -> Self {
        Self {
            user_id: 0,
            user_name: "anonymous".to_string(),
            display_name: None,
            is_system_admin: true,
            program_access: Vec::new(),
        }
    }

    /// Ids of every program the user holds a grant on
    pub fn accessible_programs(&self) -> Vec<i32> {
        self.program_access.iter().map(|a| a.program_id).collect()
    }

    pub fn access_level_for(&self, program_id: i32) -> Option<AccessLevel> {
        self.program_access
            .iter()
            .filter(|a| a.program_id == program_id)
            .map(|a| a.access_level)
            .max()
    }

    /// System admins pass every check
    pub fn can_access(&self, program_id: i32, required: AccessLevel) -> bool {
        self.is_system_admin
            || self
                .access_level_for(program_id)
                .is_some_and(|level| level >= required)
    }

    pub fn require_program_access(&self, program_id: i32, required: AccessLevel) -> Result<()> {
        if self.can_access(program_id, required) {
            return Ok(());
        }

        match self.access_level_for(program_id) {
            None => Err(GatewayError::forbidden("Access denied to this program")),
            Some(_) => Err(GatewayError::forbidden(format!(
                "Insufficient access level. Required: {}",
                required
            ))),
        }
    }
}
