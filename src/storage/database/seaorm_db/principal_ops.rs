use crate::auth::{AccessLevel, Principal, ProgramAccess};
use crate::storage::StoreError;
use sea_orm::{ConnectionTrait, Statement};
use tracing::{debug, warn};

use super::types::SeaOrmDatabase;

const FIND_USER_SQL: &str = "SELECT user_id, user_name, display_name, is_system_admin \
     FROM users WHERE certificate_subject = $1 AND is_active = TRUE";

const PROGRAM_ACCESS_SQL: &str = "SELECT pa.program_id, pa.access_level, p.program_name, p.program_code \
     FROM program_access pa JOIN programs p ON pa.program_id = p.program_id \
     WHERE pa.user_id = $1 AND pa.is_active = TRUE ORDER BY pa.program_id";

impl SeaOrmDatabase {
    /// Look up an active user and their active program grants
    pub(super) async fn load_principal(
        &self,
        subject: &str,
    ) -> Result<Option<Principal>, StoreError> {
        debug!("Resolving principal for certificate subject");
        let backend = self.db.get_database_backend();

        let Some(row) = self
            .db
            .query_one(Statement::from_sql_and_values(
                backend,
                FIND_USER_SQL,
                [subject.into()],
            ))
            .await
            .map_err(|e| self.classify(e))?
        else {
            return Ok(None);
        };

        let user_id: i32 = row.try_get("", "user_id").map_err(|e| self.classify(e))?;
        let user_name: String = row.try_get("", "user_name").map_err(|e| self.classify(e))?;
        let display_name: Option<String> = row
            .try_get("", "display_name")
            .map_err(|e| self.classify(e))?;
        let is_system_admin: bool = row
            .try_get("", "is_system_admin")
            .map_err(|e| self.classify(e))?;

        let rows = self
            .db
            .query_all(Statement::from_sql_and_values(
                backend,
                PROGRAM_ACCESS_SQL,
                [user_id.into()],
            ))
            .await
            .map_err(|e| self.classify(e))?;

        let mut program_access = Vec::with_capacity(rows.len());
        for row in rows {
            let program_id: i32 = row.try_get("", "program_id").map_err(|e| self.classify(e))?;
            let level: String = row
                .try_get("", "access_level")
                .map_err(|e| self.classify(e))?;

            let Ok(access_level) = level.parse::<AccessLevel>() else {
                warn!(user_id, program_id, level = %level, "Ignoring unknown access level");
                continue;
            };

            program_access.push(ProgramAccess {
                program_id,
                access_level,
                program_name: row
                    .try_get("", "program_name")
                    .map_err(|e| self.classify(e))?,
                program_code: row
                    .try_get("", "program_code")
                    .map_err(|e| self.classify(e))?,
            });
        }

        Ok(Some(Principal {
            user_id,
            user_name,
            display_name,
            is_system_admin,
            program_access,
        }))
    }
}
