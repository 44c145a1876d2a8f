//! Client registry - Registration, lookup and removal of client accounts.
//!
//! Login uniqueness is enforced by the store; a violation surfaces as [`Error::DuplicateLogin`].
//! Removing a client removes that client's checks first, inside one database transaction.

use crate::{
    core::{auth::Session, validation},
    entities::{Check, Client, check, client},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, SqlErr, TransactionTrait, prelude::*};
use tracing::{info, warn};

/// Self-registration form.
#[derive(Debug, Clone)]
pub struct NewClient {
    /// First name, letters only.
    pub name: String,
    /// Letters only.
    pub last_name: String,
    /// Digits only.
    pub phone: String,
    /// Must be unique among clients.
    pub login: String,
    /// Stored as given.
    pub password: String,
}

/// Registers a new client account.
///
/// # Errors
/// Returns an error if:
/// - Any field is empty, a name contains non-letters, or the phone contains non-digits
/// - The login is already taken ([`Error::DuplicateLogin`])
/// - The database insert fails for any other reason
pub async fn register(db: &DatabaseConnection, new_client: NewClient) -> Result<client::Model> {
    let name = validation::validate_person_name("name", &new_client.name)?;
    let last_name = validation::validate_person_name("last_name", &new_client.last_name)?;
    let phone = validation::validate_phone(&new_client.phone)?;
    let login = validation::require_non_empty("login", &new_client.login)?.to_string();
    // Passwords are opaque: checked for presence only, stored untrimmed.
    validation::require_non_empty("password", &new_client.password)?;

    let client = client::ActiveModel {
        name: Set(name),
        last_name: Set(last_name),
        phone: Set(phone),
        login: Set(login.clone()),
        password: Set(new_client.password),
        ..Default::default()
    };

    match client.insert(db).await {
        Ok(client) => {
            info!("Registered client {} ({})", client.id, client.login);
            Ok(client)
        }
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            warn!("Registration rejected: login {} already exists", login);
            Err(Error::DuplicateLogin { login })
        }
        Err(e) => Err(e.into()),
    }
}

/// Retrieves a client by ID.
pub async fn get_client_by_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Option<client::Model>> {
    Client::find_by_id(client_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists every client in registration order, as shown on the removal screen.
pub async fn list_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find()
        .order_by_asc(client::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a client together with all of the client's checks.
///
/// Both deletes run in one transaction, so either the client and all checks are gone or
/// nothing changed. Returns the number of checks removed.
///
/// # Errors
/// Returns [`Error::AccessDenied`] unless `session` belongs to an administrator, and
/// [`Error::ClientNotFound`] if no client has this ID.
pub async fn delete_client(
    db: &DatabaseConnection,
    session: &Session,
    client_id: i64,
) -> Result<u64> {
    let admin_id = session.administrator_id()?;
    let txn = db.begin().await?;

    let client = Client::find_by_id(client_id)
        .one(&txn)
        .await?
        .ok_or(Error::ClientNotFound { id: client_id })?;

    let removed_checks = Check::delete_many()
        .filter(check::Column::ClientId.eq(client_id))
        .exec(&txn)
        .await?
        .rows_affected;

    client.delete(&txn).await?;

    txn.commit().await?;

    info!(
        "Administrator {} deleted client {} and {} check(s)",
        admin_id, client_id, removed_checks
    );
    Ok(removed_checks)
}
