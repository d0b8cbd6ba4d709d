//! User lifecycle services: creation, persistence, credential checks,
//! and password resets.

use rusqlite::params;

use super::credentials;
use super::helpers::map_user_row;
use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::{NewUser, User};
use crate::queries::Users;

lazy_static::lazy_static! {
    /// Hash verified against when a lookup misses, so an unknown name
    /// costs the same as a wrong password.
    static ref PHANTOM_HASH: String =
        credentials::hash_password("phantom").unwrap_or_default();
}

/// Build an in-memory user with a freshly generated one-time password
///
/// Nothing is persisted until `save_user`.
pub fn new_user(name: &str) -> Result<NewUser, AppError> {
    let password = credentials::generate_password();
    let password_hash = credentials::hash_password(&password)?;

    Ok(NewUser {
        name: name.to_string(),
        password,
        password_hash,
    })
}

/// Persist a new user, assigning its id and creation timestamp
///
/// Name uniqueness is enforced by the UNIQUE constraint on the insert
/// itself, never by a prior lookup, so concurrent saves of the same name
/// cannot both succeed.
pub fn save_user(pool: &DbPool, new_user: &NewUser) -> Result<User, AppError> {
    let conn = get_conn(pool)?;

    conn.execute(
        Users::INSERT,
        params![new_user.name, new_user.password_hash],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(ref sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::duplicate_name(&new_user.name)
        }
        other => AppError::from(other),
    })?;

    let user_id = conn.last_insert_rowid();
    let user = conn.query_row(Users::SELECT_BY_ID, params![user_id], map_user_row)?;

    log::info!("Saved new user '{}' (ID: {})", user.name, user.id);

    Ok(user)
}

/// Create and persist a user in one step
///
/// Returns the saved user and the plain-text password (only shown once)
pub fn register_user(pool: &DbPool, name: &str) -> Result<(User, String), AppError> {
    let new_user = new_user(name)?;
    let user = save_user(pool, &new_user)?;

    Ok((user, new_user.password))
}

/// Get all users in arbitrary order
pub fn get_users(pool: &DbPool) -> Result<Vec<User>, AppError> {
    let conn = get_conn(pool)?;
    let mut stmt = conn.prepare(Users::SELECT_ALL)?;

    let users = stmt
        .query_map([], map_user_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(users)
}

/// Get a user by name
pub fn get_user(pool: &DbPool, name: &str) -> Result<User, AppError> {
    let conn = get_conn(pool)?;

    conn.query_row(Users::SELECT_BY_NAME, params![name], map_user_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::user_not_found(name),
            _ => AppError::DatabaseError(e.to_string()),
        })
}

/// Check whether the name and password identify a stored user
///
/// Returns `Ok(false)` both when the name is absent and when the password
/// does not verify; callers cannot tell which factor failed. The miss
/// path verifies against a phantom hash so it is not observably faster.
pub fn is_valid_user(pool: &DbPool, name: &str, password: &str) -> Result<bool, AppError> {
    let conn = get_conn(pool)?;

    let stored_hash: Option<String> =
        match conn.query_row(Users::SELECT_HASH_BY_NAME, params![name], |row| row.get(0)) {
            Ok(hash) => Some(hash),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(e.into()),
        };

    let valid = match stored_hash {
        Some(hash) => credentials::verify_password(password, &hash),
        None => {
            credentials::verify_password(password, &PHANTOM_HASH);
            false
        }
    };

    Ok(valid)
}

/// Regenerate the user's password, persisting the new hash
///
/// The in-memory user is updated in place and the new plain-text password
/// is returned (only shown once). The old password is permanently invalid.
pub fn reset_password(pool: &DbPool, user: &mut User) -> Result<String, AppError> {
    let password = credentials::generate_password();
    let password_hash = credentials::hash_password(&password)?;

    let conn = get_conn(pool)?;
    let rows_affected = conn.execute(
        Users::UPDATE_PASSWORD_HASH,
        params![password_hash, user.id],
    )?;

    if rows_affected == 0 {
        return Err(AppError::user_not_found(&user.name));
    }

    user.password_hash = password_hash;
    log::info!("Reset password for user '{}' (ID: {})", user.name, user.id);

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{setup_test_db, TestAssertions};

    fn user_count(pool: &DbPool, name: &str) -> i64 {
        let conn = get_conn(pool).unwrap();
        conn.query_row(
            "SELECT COUNT(*) FROM users WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_new_user() {
        let draft = new_user("testuser").unwrap();

        assert_eq!(draft.name, "testuser");
        assert!(!draft.password.is_empty());
        assert!(!draft.password_hash.is_empty());
        assert!(credentials::verify_password(
            &draft.password,
            &draft.password_hash
        ));
    }

    #[test]
    fn test_save_user_assigns_id_and_timestamp() {
        let pool = setup_test_db();

        let draft = new_user("testuser").unwrap();
        let user = save_user(&pool, &draft).unwrap();

        assert_ne!(user.id, 0);
        assert!(!user.password_hash.is_empty());

        let created =
            chrono::NaiveDateTime::parse_from_str(&user.created_at, "%Y-%m-%d %H:%M:%S%.3f")
                .expect("created_at should parse");
        let age = chrono::Utc::now().naive_utc() - created;
        assert!(
            age.num_milliseconds().abs() < 100,
            "created_at should be within 100ms of now, was {}ms",
            age.num_milliseconds()
        );
    }

    #[test]
    fn test_user_name_must_be_unique() {
        let pool = setup_test_db();

        let first = new_user("testuser").unwrap();
        save_user(&pool, &first).assert_ok();

        let second = new_user("testuser").unwrap();
        let result = save_user(&pool, &second);
        assert!(matches!(result, Err(AppError::DuplicateName(_))));

        assert_eq!(user_count(&pool, "testuser"), 1);
    }

    #[test]
    fn test_get_users() {
        let pool = setup_test_db();

        let draft = new_user("testuser").unwrap();
        save_user(&pool, &draft).unwrap();

        let users = get_users(&pool).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "testuser");
    }

    #[test]
    fn test_get_user() {
        let pool = setup_test_db();

        let draft = new_user("testuser").unwrap();
        let saved = save_user(&pool, &draft).unwrap();

        let found = get_user(&pool, "testuser").unwrap();
        assert_eq!(found.id, saved.id);

        let result = get_user(&pool, "whoisthis");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_is_valid_user() {
        let pool = setup_test_db();

        let draft = new_user("testuser").unwrap();
        save_user(&pool, &draft).unwrap();

        assert!(is_valid_user(&pool, "testuser", &draft.password).unwrap());
        assert!(!is_valid_user(&pool, "testuser", "someOtherPassword").unwrap());
        assert!(!is_valid_user(&pool, "whoami", &draft.password).unwrap());
    }

    #[test]
    fn test_reset_password() {
        let pool = setup_test_db();

        let draft = new_user("testuser").unwrap();
        let mut user = save_user(&pool, &draft).unwrap();

        let old_password = draft.password.clone();
        let old_password_hash = user.password_hash.clone();

        let new_password = reset_password(&pool, &mut user).unwrap();

        assert_ne!(old_password, new_password);
        assert_ne!(old_password_hash, user.password_hash);

        // The stored hash matches the in-memory one
        let reloaded = get_user(&pool, "testuser").unwrap();
        assert_eq!(reloaded.password_hash, user.password_hash);
    }

    #[test]
    fn test_reset_password_invalidates_old_password() {
        let pool = setup_test_db();

        let (mut user, old_password) = register_user(&pool, "testuser").unwrap();

        let new_password = reset_password(&pool, &mut user).unwrap();

        assert!(!is_valid_user(&pool, "testuser", &old_password).unwrap());
        assert!(is_valid_user(&pool, "testuser", &new_password).unwrap());
    }

    #[test]
    fn test_reset_password_for_missing_user() {
        let pool = setup_test_db();

        let mut ghost = User {
            id: 9999,
            name: "ghost".to_string(),
            password_hash: "unused".to_string(),
            created_at: String::new(),
        };

        let result = reset_password(&pool, &mut ghost);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_register_user() {
        let pool = setup_test_db();

        let (user, password) = register_user(&pool, "testuser").unwrap();
        assert_eq!(user.name, "testuser");
        assert!(!password.is_empty());
        assert!(is_valid_user(&pool, "testuser", &password).unwrap());
    }

    #[test]
    fn test_account_lifecycle() {
        let pool = setup_test_db();

        // Create alice
        let (alice, password) = register_user(&pool, "alice").unwrap();
        assert_ne!(alice.id, 0);

        // A second alice is rejected
        let rival = new_user("alice").unwrap();
        save_user(&pool, &rival).assert_err();

        // The one-time password authenticates
        assert!(is_valid_user(&pool, "alice", &password).unwrap());

        // After a reset the old password no longer does
        let mut alice = alice;
        reset_password(&pool, &mut alice).unwrap();
        assert!(!is_valid_user(&pool, "alice", &password).unwrap());
    }
}
