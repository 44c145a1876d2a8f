//! Check entity - A purchase record linking a client, a car and (once confirmed) an administrator.
//!
//! `price` is a copy of the car's price at the moment of sale, so later repricing of the car
//! never changes historical revenue. `admin_id` stays `None` until the check is confirmed.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Check database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "checks")]
pub struct Model {
    /// Unique identifier for the check
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Buyer
    pub client_id: i64,
    /// Car sold
    pub car_id: i64,
    /// Confirming administrator; `None` while pending
    pub admin_id: Option<i64>,
    /// Price captured at time of sale
    pub price: f64,
    /// When the purchase was recorded
    pub purchased_at: DateTimeUtc,
}

impl Model {
    /// Whether the check is still waiting for an administrator.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.admin_id.is_none()
    }
}

/// Defines relationships between Check and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each check belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    /// Each check references one car
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::Id"
    )]
    Car,
    /// Each confirmed check references the confirming administrator
    #[sea_orm(
        belongs_to = "super::administrator::Entity",
        from = "Column::AdminId",
        to = "super::administrator::Column::Id"
    )]
    Administrator,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<super::administrator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Administrator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
