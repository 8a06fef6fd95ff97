use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::{config::Config, data::admin::AdminRepository, error::Error, service::auth};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure in-process session management
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    let session_store = MemoryStore::default();

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// Seeds the first admin account from the bootstrap environment variables.
///
/// Runs only while the admins table is empty; once any admin exists the
/// bootstrap variables are ignored. Admin accounts are never created
/// implicitly at sign-in.
pub async fn seed_bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let repository = AdminRepository::new(db);

    if repository.count().await? > 0 {
        return Ok(());
    }

    let (Some(email), Some(password)) = (
        config.bootstrap_admin_email.as_deref(),
        config.bootstrap_admin_password.as_deref(),
    ) else {
        tracing::warn!(
            "No admins exist and BOOTSTRAP_ADMIN_EMAIL/BOOTSTRAP_ADMIN_PASSWORD are unset; \
            admin endpoints will be unusable until an admin is seeded"
        );
        return Ok(());
    };

    let display_name = config
        .bootstrap_admin_name
        .as_deref()
        .unwrap_or("Administrator");

    let password_hash = auth::hash_password(password)?;
    let admin = repository.create(email, display_name, &password_hash).await?;

    tracing::info!(admin_id = %admin.id, "Seeded bootstrap admin account");

    Ok(())
}
