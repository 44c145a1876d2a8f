//! Client entity - A self-registered buyer.
//!
//! Logins are unique at the store level. Passwords are stored verbatim.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Unique identifier for the client
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Given name
    pub name: String,
    /// Family name
    pub last_name: String,
    /// Phone number, digits only
    pub phone: String,
    /// Login name, unique across all clients
    #[sea_orm(unique)]
    pub login: String,
    /// Credential compared verbatim on login
    #[serde(skip_serializing)]
    pub password: String,
}

/// Defines relationships between Client and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One client has many checks
    #[sea_orm(has_many = "super::check::Entity")]
    Checks,
}

impl Related<super::check::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Checks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
