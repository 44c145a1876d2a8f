//! Shared test utilities for the car sales core.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        auth::{PrincipalKind, Session},
        clients::{self, NewClient},
        inventory::{self, NewCar},
    },
    entities::{self, administrator},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Password used by every test principal.
pub const TEST_PASSWORD: &str = "secret";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Session for an administrator that has no row in the store. Enough for catalog
/// maintenance, which only checks the role.
pub fn catalog_admin_session() -> Session {
    Session {
        kind: PrincipalKind::Administrator,
        principal_id: 0,
        login: "catalog".to_string(),
    }
}

/// Session of the given client, as a successful login would return it.
pub fn client_session(client: &entities::client::Model) -> Session {
    Session {
        kind: PrincipalKind::Client,
        principal_id: client.id,
        login: client.login.clone(),
    }
}

/// Session of the given administrator, as a successful login would return it.
pub fn admin_session(admin: &entities::administrator::Model) -> Session {
    Session {
        kind: PrincipalKind::Administrator,
        principal_id: admin.id,
        login: admin.login.clone(),
    }
}

/// Creates a test car with sensible defaults.
///
/// # Defaults
/// * Toyota Corolla, 2020, Red, 20000.0
pub async fn create_test_car(db: &DatabaseConnection) -> Result<entities::car::Model> {
    create_custom_car(db, "Toyota", "Corolla", 2020, 20000.0).await
}

/// Creates a test car with custom brand, model, year and price. Color is always "Black".
pub async fn create_custom_car(
    db: &DatabaseConnection,
    brand: &str,
    model: &str,
    year_of_release: i32,
    price: f64,
) -> Result<entities::car::Model> {
    inventory::add_car(
        db,
        &catalog_admin_session(),
        NewCar {
            brand: brand.to_string(),
            model: model.to_string(),
            year_of_release,
            color: "Black".to_string(),
            price,
        },
    )
    .await
}

/// Registration form with valid defaults for the given login.
pub fn test_client_form(login: &str) -> NewClient {
    NewClient {
        name: "Anna".to_string(),
        last_name: "Smirnova".to_string(),
        phone: "79001234567".to_string(),
        login: login.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Registers a client with default details and [`TEST_PASSWORD`].
pub async fn register_test_client(
    db: &DatabaseConnection,
    login: &str,
) -> Result<entities::client::Model> {
    clients::register(db, test_client_form(login)).await
}

/// Inserts an administrator directly, as the out-of-band seeding would.
pub async fn create_test_administrator(
    db: &DatabaseConnection,
    login: &str,
) -> Result<entities::administrator::Model> {
    let admin = administrator::ActiveModel {
        name: Set("Olga".to_string()),
        last_name: Set("Ivanova".to_string()),
        login: Set(login.to_string()),
        password: Set(TEST_PASSWORD.to_string()),
        phone: Set("5550101".to_string()),
        ..Default::default()
    };
    admin.insert(db).await.map_err(Into::into)
}

/// Sets up a complete test environment with one client and one car.
/// Returns (db, client, car) for purchase-related tests.
pub async fn setup_with_client_and_car() -> Result<(
    DatabaseConnection,
    entities::client::Model,
    entities::car::Model,
)> {
    let db = setup_test_db().await?;
    let client = register_test_client(&db, "client1").await?;
    let car = create_test_car(&db).await?;
    Ok((db, client, car))
}
