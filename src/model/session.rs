//! Session-side view of the signed-in admin.
//!
//! The session carries nothing but the admin's record id. Login writes it,
//! logout drops the session, and the admin gate resolves the id back to a
//! database row before any mutation goes through.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key for the logged-in admin's id.
pub const SESSION_ADMIN_ID_KEY: &str = "registrar:admin:id";

/// Admin id as held by the session store.
///
/// Kept as a string since the store serializes values to JSON; `get` parses
/// it back to the record id and fails on a corrupt value rather than treating
/// it as logged out.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAdminId(pub String);

impl SessionAdminId {
    /// Stores the admin id after a successful login
    pub async fn insert(session: &Session, admin_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_ADMIN_ID_KEY, SessionAdminId(admin_id.to_string()))
            .await?;

        Ok(())
    }

    /// Reads back the signed-in admin's id, `None` when nobody is logged in
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionAdminId>(SESSION_ADMIN_ID_KEY)
            .await?
            .map(|SessionAdminId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session admin id: {}", e))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    mod insert {
        use registrar_test_utils::prelude::*;

        use crate::model::session::SessionAdminId;

        #[tokio::test]
        /// Expect success when inserting valid admin ID into session
        async fn inserts_admin_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionAdminId::insert(&test.session, 1).await;

            assert!(result.is_ok());

            Ok(())
        }
    }

    mod get {
        use registrar_test_utils::prelude::*;

        use crate::model::session::{SessionAdminId, SESSION_ADMIN_ID_KEY};

        #[tokio::test]
        /// Expect Some when admin ID is present in session
        async fn returns_some_when_present() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let admin_id = 1;
            SessionAdminId::insert(&test.session, admin_id).await.unwrap();

            let result = SessionAdminId::get(&test.session).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap(), Some(admin_id));

            Ok(())
        }

        #[tokio::test]
        /// Expect None when no admin ID is present in session
        async fn returns_none_when_absent() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionAdminId::get(&test.session).await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_none());

            Ok(())
        }

        #[tokio::test]
        /// Expect parse error when the stored admin ID is not an i32
        async fn fails_for_unparseable_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            test.session
                .insert(SESSION_ADMIN_ID_KEY, SessionAdminId("invalid_id".to_string()))
                .await?;

            let result = SessionAdminId::get(&test.session).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
