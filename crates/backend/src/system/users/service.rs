use chrono::Utc;
use contracts::system::auth::{FieldError, RegisterRequest};
use contracts::system::users::{CreateUserDto, User};
use sea_orm::DatabaseConnection;
use thiserror::Error;

use super::repository;
use crate::system::auth::password;

pub const MIN_USERNAME_LEN: usize = 3;

/// Ошибка регистрации: либо поле формы, либо внутренняя
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("{}: {}", .0.field, .0.error)]
    Field(FieldError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

fn field(field: &str, key: &str) -> RegisterError {
    RegisterError::Field(FieldError {
        field: field.to_string(),
        error: key.to_string(),
    })
}

/// Простейшая проверка формата email
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Проверка формы регистрации. Ошибки возвращаются ключами перевода.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), RegisterError> {
    if request.username.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(field("username", "registerPage.usernameTooShort"));
    }
    if !is_valid_email(&request.email) {
        return Err(field("email", "loginPage.emailInvalid"));
    }
    if request.password.chars().count() < password::MIN_PASSWORD_LEN {
        return Err(field("password", "registerPage.passwordTooShort"));
    }
    if request.password != request.confirm_password {
        return Err(field("confirm_password", "registerPage.passwordMismatch"));
    }
    Ok(())
}

/// Create a new user
pub async fn create(conn: &DatabaseConnection, dto: CreateUserDto) -> Result<User, RegisterError> {
    let email = dto.email.trim().to_lowercase();
    let username = dto.username.trim().to_string();

    if repository::get_by_email(conn, &email).await?.is_some() {
        return Err(field("email", "registerPage.emailTaken"));
    }
    if repository::get_by_username(conn, &username).await?.is_some() {
        return Err(field("username", "registerPage.usernameTaken"));
    }

    let password_hash = password::hash_password(&dto.password)?;
    let now = Utc::now().to_rfc3339();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username,
        email,
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(conn, &user, &password_hash).await?;
    tracing::info!("User registered: {}", user.username);

    Ok(user)
}

/// Register from the public form
pub async fn register(
    conn: &DatabaseConnection,
    request: RegisterRequest,
) -> Result<User, RegisterError> {
    validate_registration(&request)?;
    create(
        conn,
        CreateUserDto {
            username: request.username,
            email: request.email,
            password: request.password,
        },
    )
    .await
}

/// Verify credentials. `None` when email is unknown, user inactive or password wrong.
pub async fn verify_credentials(
    conn: &DatabaseConnection,
    email: &str,
    password_plain: &str,
) -> anyhow::Result<Option<User>> {
    let Some(user) = repository::get_by_email(conn, email).await? else {
        return Ok(None);
    };
    if !user.is_active {
        return Ok(None);
    }
    let Some(hash) = repository::get_password_hash(conn, &user.id).await? else {
        return Ok(None);
    };
    if !password::verify_password(password_plain, &hash) {
        return Ok(None);
    }

    repository::update_last_login(conn, &user.id).await?;
    Ok(Some(user))
}

pub async fn get_by_id(conn: &DatabaseConnection, id: &str) -> anyhow::Result<Option<User>> {
    repository::get_by_id(conn, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    fn request(username: &str, email: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    fn field_key(err: RegisterError) -> String {
        match err {
            RegisterError::Field(f) => f.error,
            RegisterError::Internal(e) => panic!("unexpected internal error: {e}"),
        }
    }

    #[test]
    fn registration_form_rules() {
        let ok = request("aki", "aki@alyka.io", "secret1", "secret1");
        assert!(validate_registration(&ok).is_ok());

        let short_name = request("ak", "aki@alyka.io", "secret1", "secret1");
        assert_eq!(
            field_key(validate_registration(&short_name).unwrap_err()),
            "registerPage.usernameTooShort"
        );
        let bad_email = request("aki", "aki@", "secret1", "secret1");
        assert_eq!(
            field_key(validate_registration(&bad_email).unwrap_err()),
            "loginPage.emailInvalid"
        );
        let short_pw = request("aki", "aki@alyka.io", "12345", "12345");
        assert_eq!(
            field_key(validate_registration(&short_pw).unwrap_err()),
            "registerPage.passwordTooShort"
        );
        let mismatch = request("aki", "aki@alyka.io", "secret1", "secret2");
        assert_eq!(
            field_key(validate_registration(&mismatch).unwrap_err()),
            "registerPage.passwordMismatch"
        );
    }

    #[tokio::test]
    async fn register_then_login() {
        let conn = test_connection().await;
        let user = register(&conn, request("aki", "Aki@Alyka.io", "secret1", "secret1"))
            .await
            .unwrap();
        assert_eq!(user.email, "aki@alyka.io");

        let found = verify_credentials(&conn, "aki@alyka.io", "secret1")
            .await
            .unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
        assert!(verify_credentials(&conn, "aki@alyka.io", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(verify_credentials(&conn, "nobody@alyka.io", "secret1")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_email_and_username_are_rejected() {
        let conn = test_connection().await;
        register(&conn, request("aki", "aki@alyka.io", "secret1", "secret1"))
            .await
            .unwrap();

        let same_email = register(&conn, request("ren", "AKI@alyka.io", "secret1", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(field_key(same_email), "registerPage.emailTaken");

        let same_name = register(&conn, request("aki", "ren@alyka.io", "secret1", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(field_key(same_name), "registerPage.usernameTaken");
    }
}
