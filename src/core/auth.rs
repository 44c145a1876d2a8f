//! Identity and access - Login for clients and administrators.
//!
//! A successful login yields a [`Session`] value that the caller keeps for as long as the user is
//! logged in and passes to role-specific operations. Nothing about the session is persisted.
//!
//! Credentials are compared verbatim, as they are stored.

use crate::{
    entities::{Administrator, Client, administrator, client},
    errors::{Error, Result},
};
use sea_orm::prelude::*;
use std::fmt;
use tracing::{info, warn};

/// The two kinds of principals that can log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalKind {
    /// A registered buyer.
    Client,
    /// Dealership staff, seeded from configuration.
    Administrator,
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => f.write_str("client"),
            Self::Administrator => f.write_str("administrator"),
        }
    }
}

/// An authenticated principal, scoped to one caller's session.
///
/// Role-specific operations take a `&Session` and resolve the acting principal through
/// [`Session::client_id`] or [`Session::administrator_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Which table the principal was authenticated against.
    pub kind: PrincipalKind,
    /// Row ID in that table.
    pub principal_id: i64,
    /// Login used to open the session.
    pub login: String,
}

impl Session {
    /// The client ID of this session.
    ///
    /// # Errors
    /// Returns [`Error::AccessDenied`] for administrator sessions.
    pub fn client_id(&self) -> Result<i64> {
        self.require(PrincipalKind::Client)
    }

    /// The administrator ID of this session.
    ///
    /// # Errors
    /// Returns [`Error::AccessDenied`] for client sessions.
    pub fn administrator_id(&self) -> Result<i64> {
        self.require(PrincipalKind::Administrator)
    }

    fn require(&self, kind: PrincipalKind) -> Result<i64> {
        if self.kind == kind {
            Ok(self.principal_id)
        } else {
            Err(Error::AccessDenied {
                message: format!("{kind} session required, got {}", self.kind),
            })
        }
    }
}

/// Checks a login/password pair against the table of the given principal kind.
///
/// # Errors
/// Returns [`Error::InvalidCredentials`] when no row matches both login and password, without
/// revealing which of the two was wrong.
pub async fn authenticate(
    db: &DatabaseConnection,
    kind: PrincipalKind,
    login: &str,
    password: &str,
) -> Result<Session> {
    let principal_id = match kind {
        PrincipalKind::Client => Client::find()
            .filter(client::Column::Login.eq(login))
            .filter(client::Column::Password.eq(password))
            .one(db)
            .await?
            .map(|c| c.id),
        PrincipalKind::Administrator => Administrator::find()
            .filter(administrator::Column::Login.eq(login))
            .filter(administrator::Column::Password.eq(password))
            .one(db)
            .await?
            .map(|a| a.id),
    };

    let Some(principal_id) = principal_id else {
        warn!("Failed {} login attempt", kind);
        return Err(Error::InvalidCredentials);
    };

    info!("{} {} logged in", kind, principal_id);
    Ok(Session {
        kind,
        principal_id,
        login: login.to_string(),
    })
}
