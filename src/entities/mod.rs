//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod administrator;
pub mod car;
pub mod check;
pub mod client;

// Re-export specific types to avoid conflicts
pub use administrator::{
    Column as AdministratorColumn, Entity as Administrator, Model as AdministratorModel,
};
pub use car::{CarStatus, Column as CarColumn, Entity as Car, Model as CarModel};
pub use check::{Column as CheckColumn, Entity as Check, Model as CheckModel};
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
