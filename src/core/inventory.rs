//! Inventory business logic - Handles the car catalog.
//!
//! Cars enter the catalog through [`add_car`] and leave it through [`archive_car`], which only flips
//! the car's lifecycle state. Archived cars stay in the `cars` table so that past checks can still
//! be joined to them; [`restore_car`] puts them back on sale.

use crate::{
    core::{auth::Session, validation},
    entities::{Car, CarStatus, car},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, info};

/// Input for [`add_car`], usually straight from an administrator form.
#[derive(Debug, Clone)]
pub struct NewCar {
    /// Manufacturer, no digits.
    pub brand: String,
    /// Model name; digits allowed ("2107").
    pub model: String,
    /// Between 1970 and 2024 inclusive.
    pub year_of_release: i32,
    /// Body color, no digits.
    pub color: String,
    /// List price, finite and non-negative.
    pub price: f64,
}

/// Retrieves all cars currently on sale, in the order they were added.
///
/// This listing serves both the client catalog and the administrator's archival picker.
pub async fn list_active_cars(db: &DatabaseConnection) -> Result<Vec<car::Model>> {
    Car::find()
        .filter(car::Column::Status.eq(CarStatus::Active))
        .order_by_asc(car::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a car by ID regardless of its lifecycle state.
pub async fn get_car_by_id(db: &DatabaseConnection, car_id: i64) -> Result<Option<car::Model>> {
    Car::find_by_id(car_id).one(db).await.map_err(Into::into)
}

/// Adds a car to the catalog after validating every field.
///
/// # Errors
/// Returns [`Error::AccessDenied`] unless `session` belongs to an administrator.
///
/// Returns [`Error::Validation`] if:
/// - Any text field is empty or whitespace-only
/// - Brand or color contains digits
/// - The year of release is outside 1970..=2024
/// - The price is negative or not finite
///
/// Nothing is written when validation fails.
pub async fn add_car(
    db: &DatabaseConnection,
    session: &Session,
    new_car: NewCar,
) -> Result<car::Model> {
    let admin_id = session.administrator_id()?;

    let brand = validation::validate_no_digits("brand", &new_car.brand)?;
    let model = validation::require_non_empty("model", &new_car.model)?.to_string();
    let year_of_release = validation::validate_year(new_car.year_of_release)?;
    let color = validation::validate_no_digits("color", &new_car.color)?;
    let price = validation::validate_price(new_car.price)?;

    let now = chrono::Utc::now().naive_utc();
    let car = car::ActiveModel {
        brand: Set(brand),
        model_name: Set(model),
        year_of_release: Set(year_of_release),
        color: Set(color),
        price: Set(price),
        status: Set(CarStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let car = car.insert(db).await?;
    info!(
        "Administrator {} added car {} {} {} ({}) at {:.2}",
        admin_id, car.id, car.brand, car.model_name, car.year_of_release, car.price
    );
    Ok(car)
}

/// Removes a car from the catalog without deleting it.
///
/// Archiving an already archived car is a no-op that returns the stored row.
///
/// # Errors
/// Returns [`Error::AccessDenied`] for client sessions and [`Error::CarNotFound`] if no car has
/// this ID.
pub async fn archive_car(
    db: &DatabaseConnection,
    session: &Session,
    car_id: i64,
) -> Result<car::Model> {
    session.administrator_id()?;
    set_status(db, car_id, CarStatus::Archived).await
}

/// Puts an archived car back on sale. Restoring an active car is a no-op.
///
/// # Errors
/// Returns [`Error::AccessDenied`] for client sessions and [`Error::CarNotFound`] if no car has
/// this ID.
pub async fn restore_car(
    db: &DatabaseConnection,
    session: &Session,
    car_id: i64,
) -> Result<car::Model> {
    session.administrator_id()?;
    set_status(db, car_id, CarStatus::Active).await
}

/// Changes the list price of a car. Existing checks keep the price they were sold at.
///
/// # Errors
/// Returns an error if the session is not an administrator's, the price is invalid or the car
/// does not exist.
pub async fn update_car_price(
    db: &DatabaseConnection,
    session: &Session,
    car_id: i64,
    new_price: f64,
) -> Result<car::Model> {
    session.administrator_id()?;
    let new_price = validation::validate_price(new_price)?;

    let mut car: car::ActiveModel = Car::find_by_id(car_id)
        .one(db)
        .await?
        .ok_or(Error::CarNotFound { id: car_id })?
        .into();

    car.price = Set(new_price);
    car.updated_at = Set(chrono::Utc::now().naive_utc());

    let car = car.update(db).await?;
    info!("Car {} repriced to {:.2}", car.id, car.price);
    Ok(car)
}

async fn set_status(db: &DatabaseConnection, car_id: i64, status: CarStatus) -> Result<car::Model> {
    let existing = Car::find_by_id(car_id)
        .one(db)
        .await?
        .ok_or(Error::CarNotFound { id: car_id })?;

    if existing.status == status {
        debug!("Car {} already {:?}", car_id, status);
        return Ok(existing);
    }

    let mut car: car::ActiveModel = existing.into();
    car.status = Set(status);
    car.updated_at = Set(chrono::Utc::now().naive_utc());

    let car = car.update(db).await?;
    info!("Car {} is now {:?}", car.id, car.status);
    Ok(car)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn corolla(year_of_release: i32) -> NewCar {
        NewCar {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year_of_release,
            color: "Red".to_string(),
            price: 20000.0,
        }
    }

    #[tokio::test]
    async fn test_add_car_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        let admin = catalog_admin_session();

        // Empty model
        let mut input = corolla(2020);
        input.model = "  ".to_string();
        let result = add_car(&db, &admin, input).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { field: "model", .. }
        ));

        // Digits in color
        let mut input = corolla(2020);
        input.color = "Red5".to_string();
        let result = add_car(&db, &admin, input).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { field: "color", .. }
        ));

        // Negative price
        let mut input = corolla(2020);
        input.price = -1.0;
        let result = add_car(&db, &admin, input).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { field: "price", .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_car_rejects_out_of_range_years_without_inserting() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = catalog_admin_session();

        for year in [1969, 2025, 0, -2020, 9999] {
            let result = add_car(&db, &admin, corolla(year)).await;
            assert!(
                matches!(
                    result.unwrap_err(),
                    Error::Validation {
                        field: "year_of_release",
                        ..
                    }
                ),
                "year {year} should be rejected"
            );
        }

        assert!(Car::find().all(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_add_car_then_listed() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = catalog_admin_session();

        for year in [1970, 1999, 2024] {
            let car = add_car(&db, &admin, corolla(year)).await?;
            assert_eq!(car.year_of_release, year);
            assert_eq!(car.status, CarStatus::Active);

            let active = list_active_cars(&db).await?;
            assert!(active.iter().any(|c| c.id == car.id));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_add_car_trims_text_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = catalog_admin_session();

        let car = add_car(
            &db,
            &admin,
            NewCar {
                brand: " Lada ".to_string(),
                model: " 2107 ".to_string(),
                year_of_release: 1982,
                color: "White ".to_string(),
                price: 3000.0,
            },
        )
        .await?;

        assert_eq!(car.brand, "Lada");
        assert_eq!(car.model_name, "2107");
        assert_eq!(car.color, "White");
        Ok(())
    }

    #[tokio::test]
    async fn test_archive_car_scenario() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = catalog_admin_session();

        let car = add_car(&db, &admin, corolla(2020)).await?;
        assert_eq!(list_active_cars(&db).await?.len(), 1);

        let archived = archive_car(&db, &admin, car.id).await?;
        assert!(archived.is_archived());
        assert!(list_active_cars(&db).await?.is_empty());

        // Row is kept
        let stored = get_car_by_id(&db, car.id).await?.unwrap();
        assert!(stored.is_archived());

        Ok(())
    }

    #[tokio::test]
    async fn test_archive_car_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = catalog_admin_session();
        let car = create_test_car(&db).await?;

        let first = archive_car(&db, &admin, car.id).await?;
        let second = archive_car(&db, &admin, car.id).await?;
        assert_eq!(first.id, second.id);
        assert!(first.is_archived());
        assert!(second.is_archived());

        Ok(())
    }

    #[tokio::test]
    async fn test_archive_car_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = catalog_admin_session();

        let result = archive_car(&db, &admin, 999).await;
        assert!(matches!(result.unwrap_err(), Error::CarNotFound { id: 999 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_restore_car() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = catalog_admin_session();
        let car = create_test_car(&db).await?;

        archive_car(&db, &admin, car.id).await?;
        let restored = restore_car(&db, &admin, car.id).await?;
        assert_eq!(restored.status, CarStatus::Active);
        assert_eq!(list_active_cars(&db).await?.len(), 1);

        let result = restore_car(&db, &admin, 12345).await;
        assert!(matches!(result.unwrap_err(), Error::CarNotFound { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_active_cars_in_insertion_order() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = catalog_admin_session();

        let first = create_custom_car(&db, "Volvo", "XC90", 2019, 40000.0).await?;
        let second = create_custom_car(&db, "Audi", "A4", 2018, 30000.0).await?;
        let third = create_custom_car(&db, "BMW", "X5", 2021, 50000.0).await?;
        archive_car(&db, &admin, second.id).await?;

        let active = list_active_cars(&db).await?;
        let ids: Vec<i64> = active.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_car_price() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = catalog_admin_session();
        let car = create_test_car(&db).await?;

        let updated = update_car_price(&db, &admin, car.id, 18000.0).await?;
        assert_eq!(updated.price, 18000.0);
        assert_eq!(updated.brand, car.brand);

        let result = update_car_price(&db, &admin, car.id, f64::NAN).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { field: "price", .. }
        ));

        let result = update_car_price(&db, &admin, 999, 1.0).await;
        assert!(matches!(result.unwrap_err(), Error::CarNotFound { id: 999 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_client_session_cannot_change_the_catalog() -> Result<()> {
        let (db, client, car) = setup_with_client_and_car().await?;
        let session = client_session(&client);

        let result = add_car(&db, &session, corolla(2020)).await;
        assert!(matches!(result.unwrap_err(), Error::AccessDenied { .. }));

        let result = archive_car(&db, &session, car.id).await;
        assert!(matches!(result.unwrap_err(), Error::AccessDenied { .. }));

        let result = update_car_price(&db, &session, car.id, 1.0).await;
        assert!(matches!(result.unwrap_err(), Error::AccessDenied { .. }));

        // Catalog untouched
        let stored = get_car_by_id(&db, car.id).await?.unwrap();
        assert_eq!(stored.status, CarStatus::Active);
        assert_eq!(stored.price, car.price);
        assert_eq!(list_active_cars(&db).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_restore_car_requires_administrator() -> Result<()> {
        let (db, client, car) = setup_with_client_and_car().await?;
        archive_car(&db, &catalog_admin_session(), car.id).await?;

        let result = restore_car(&db, &client_session(&client), car.id).await;
        assert!(matches!(result.unwrap_err(), Error::AccessDenied { .. }));
        assert!(list_active_cars(&db).await?.is_empty());

        Ok(())
    }
}
