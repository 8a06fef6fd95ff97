use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{admin::AdminDto, app::AppState, session::SessionAdminId},
    service::auth::AuthService,
};

/// Resolves the session to an admin record, rejecting unauthenticated callers.
///
/// A session pointing at a deleted admin is cleared so the caller logs in
/// again instead of looping on a dead cookie.
pub async fn require_admin(state: &AppState, session: &Session) -> Result<AdminDto, Error> {
    let Some(admin_id) = SessionAdminId::get(session).await? else {
        return Err(Error::AuthError(AuthError::AdminNotInSession));
    };

    match AuthService::new(&state.db).get_admin(admin_id).await {
        Ok(admin) => Ok(admin),
        Err(Error::AuthError(AuthError::AdminNotInDatabase(_))) => {
            session.clear().await;

            tracing::warn!(
                "Session cleared for admin ID {} with active session but no database record",
                admin_id
            );

            Err(Error::AuthError(AuthError::AdminNotInDatabase(admin_id)))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {

    mod require_admin {
        use registrar_test_utils::prelude::*;

        use crate::{
            controller::util::require_admin,
            error::{auth::AuthError, Error},
            factory,
            model::session::SessionAdminId,
        };

        /// Expect AdminNotInSession without a logged-in session
        #[tokio::test]
        async fn rejects_anonymous_session() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Admins)?;

            let result = require_admin(&test.state(), &test.session).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::AdminNotInSession))
            ));

            Ok(())
        }

        /// Expect the session to be cleared when it points at a deleted admin
        #[tokio::test]
        async fn clears_session_for_missing_admin() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Admins)?;
            SessionAdminId::insert(&test.session, 42).await.unwrap();

            let result = require_admin(&test.state(), &test.session).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::AdminNotInDatabase(42)))
            ));
            assert!(SessionAdminId::get(&test.session).await.unwrap().is_none());

            Ok(())
        }

        /// Expect the admin record back for a valid session
        #[tokio::test]
        async fn resolves_logged_in_admin() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Admins)?;
            let admin =
                factory::insert_mock_admin(&test.state.db, "admin@college.edu", "hunter2").await?;
            SessionAdminId::insert(&test.session, admin.id).await.unwrap();

            let resolved = require_admin(&test.state(), &test.session).await.unwrap();

            assert_eq!(resolved.email, "admin@college.edu");

            Ok(())
        }
    }
}
