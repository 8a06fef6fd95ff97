use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::admin::AdminRepository,
    error::{auth::AuthError, Error},
    model::admin::AdminDto,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials against the stored argon2 hash.
    ///
    /// Unknown emails and wrong passwords both map to the same error so the
    /// response does not reveal which admins exist.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AdminDto, Error> {
        let admin = AdminRepository::new(self.db)
            .get_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = PasswordHash::new(&admin.password_hash)
            .map_err(|e| Error::InternalError(format!("Stored password hash is invalid: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(admin.into())
    }

    pub async fn get_admin(&self, id: i32) -> Result<AdminDto, Error> {
        let admin = AdminRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AuthError::AdminNotInDatabase(id))?;

        Ok(admin.into())
    }
}

/// Hashes a plaintext password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}
