//! Car entity - A vehicle in the dealership catalog.
//!
//! Cars are never physically removed by the core. Removing a car from the catalog moves it to
//! [`CarStatus::Archived`], which keeps it joinable from historical checks.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a car in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CarStatus {
    /// Listed in the catalog and available for purchase.
    #[sea_orm(string_value = "active")]
    Active,
    /// Removed from the catalog; still referenced by past checks.
    #[sea_orm(string_value = "archived")]
    Archived,
}

/// Car database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    /// Unique identifier for the car
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Manufacturer (e.g., "Toyota")
    pub brand: String,
    /// Model name (e.g., "Corolla")
    #[sea_orm(column_name = "model")]
    pub model_name: String,
    /// Year of release, within 1970..=2024
    pub year_of_release: i32,
    /// Body color
    pub color: String,
    /// Current list price. Checks copy this at sale time.
    pub price: f64,
    /// Catalog lifecycle state
    pub status: CarStatus,
    /// When the car was added to the catalog
    pub created_at: DateTime,
    /// When the car was last modified
    pub updated_at: DateTime,
}

impl Model {
    /// Whether the car has been removed from the active catalog.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.status == CarStatus::Archived
    }
}

/// Defines relationships between Car and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One car appears on many checks
    #[sea_orm(has_many = "super::check::Entity")]
    Checks,
}

impl Related<super::check::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Checks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
