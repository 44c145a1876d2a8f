//! Administrator entity - Dealership staff who manage inventory and confirm checks.
//!
//! Administrators are created out of band (seeded from configuration).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Administrator database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "administrators")]
pub struct Model {
    /// Unique identifier for the administrator
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Given name
    pub name: String,
    /// Family name
    pub last_name: String,
    /// Login name, unique across all administrators
    #[sea_orm(unique)]
    pub login: String,
    /// Credential compared verbatim on login
    #[serde(skip_serializing)]
    pub password: String,
    /// Contact phone
    pub phone: String,
}

/// Defines relationships between Administrator and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Checks confirmed by this administrator
    #[sea_orm(has_many = "super::check::Entity")]
    Checks,
}

impl Related<super::check::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Checks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
