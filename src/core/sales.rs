//! Sales business logic - Purchases, purchase history, confirmation and sales analytics.
//!
//! A purchase is recorded as a check that copies the car's price at the moment of sale and has no
//! administrator until someone confirms it. Price lookup and insertion share one database
//! transaction. History survives archival and even physical removal of the car row.

use crate::{
    core::auth::Session,
    entities::{Administrator, Car, CarStatus, Check, Client, car, check},
    errors::{Error, Result},
};
use sea_orm::{FromQueryResult, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use std::fmt;
use tracing::{debug, info, warn};

/// How many cars the sales analysis shows by default.
pub const DEFAULT_TOP_SELLERS: u64 = 3;

/// Label shown in place of brand and model when a sold car no longer exists.
pub const REMOVED_FROM_CATALOG: &str = "removed from catalog";

/// One line of a client's purchase history.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    /// ID of the underlying check
    pub check_id: i64,
    /// Car brand, or [`REMOVED_FROM_CATALOG`] when the car row is gone
    pub brand: String,
    /// Car model, empty when the car row is gone
    pub model: String,
    /// `None` when the car row is gone
    pub year_of_release: Option<i32>,
    /// Price paid, as captured on the check
    pub price: f64,
    /// Whether the check is still waiting for an administrator
    pub pending: bool,
    /// When the check was recorded (UTC)
    pub purchased_at: DateTimeUtc,
}

impl fmt::Display for PurchaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year_of_release {
            Some(year) => write!(
                f,
                "{} {} ({year}), price: {:.2}",
                self.brand, self.model, self.price
            ),
            None => write!(f, "{}, price: {:.2}", self.brand, self.price),
        }
    }
}

/// Aggregated sales of a single car.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SalesSummary {
    /// Car ID
    pub car_id: i64,
    /// Car brand
    pub brand: String,
    /// Car model
    pub model: String,
    /// Sum of the prices captured on the car's checks
    pub total_revenue: f64,
    /// Number of checks for the car
    pub total_sales: i64,
}

/// Records a purchase of `car_id` by the client logged in to `session`.
///
/// The new check copies the car's current price and is pending (no administrator).
///
/// The transaction starts deferred: it reads the car, then upgrades to a write lock for the
/// insert. On a file-backed store shared by several connections, a concurrent writer can make
/// that upgrade fail with `SQLITE_BUSY` instead of waiting. The purchase is then reported as
/// [`Error::Database`] and nothing is written; the caller may simply try again.
///
/// # Errors
/// Returns an error if:
/// - The session is not a client's ([`Error::AccessDenied`])
/// - The client does not exist ([`Error::ClientNotFound`])
/// - The car does not exist ([`Error::CarNotFound`])
/// - The car has been archived ([`Error::CarUnavailable`])
/// - The database operation fails; nothing is written in that case
pub async fn purchase(
    db: &DatabaseConnection,
    session: &Session,
    car_id: i64,
) -> Result<check::Model> {
    let client_id = session.client_id()?;

    // Use a transaction so the price we copy is the price at insert time
    let txn = db.begin().await?;

    Client::find_by_id(client_id)
        .one(&txn)
        .await?
        .ok_or(Error::ClientNotFound { id: client_id })?;

    let car = Car::find_by_id(car_id)
        .one(&txn)
        .await?
        .ok_or(Error::CarNotFound { id: car_id })?;

    if car.is_archived() {
        warn!("Client {} tried to buy archived car {}", client_id, car_id);
        return Err(Error::CarUnavailable { id: car_id });
    }

    let check = check::ActiveModel {
        client_id: Set(client_id),
        car_id: Set(car_id),
        admin_id: Set(None),
        price: Set(car.price),
        purchased_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let check = check.insert(&txn).await?;

    txn.commit().await?;

    info!(
        "Client {} bought car {} for {:.2} (check {})",
        client_id, car_id, check.price, check.id
    );
    Ok(check)
}

/// Lists the purchases of the client logged in to `session`, oldest first.
///
/// Checks whose car was archived are reported normally. Checks whose car row no longer exists are
/// reported with [`REMOVED_FROM_CATALOG`] instead of failing the query. A client that no longer
/// exists simply has no history.
///
/// # Errors
/// Returns [`Error::AccessDenied`] for administrator sessions.
pub async fn purchase_history(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<Vec<PurchaseRecord>> {
    let client_id = session.client_id()?;
    let rows = Check::find()
        .filter(check::Column::ClientId.eq(client_id))
        .order_by_asc(check::Column::Id)
        .find_also_related(Car)
        .all(db)
        .await?;

    debug!("Client {} has {} check(s)", client_id, rows.len());

    Ok(rows
        .into_iter()
        .map(|(check, car)| purchase_record(check, car))
        .collect())
}

fn purchase_record(check: check::Model, car: Option<car::Model>) -> PurchaseRecord {
    let pending = check.is_pending();
    match car {
        Some(car) => PurchaseRecord {
            check_id: check.id,
            brand: car.brand,
            model: car.model_name,
            year_of_release: Some(car.year_of_release),
            price: check.price,
            pending,
            purchased_at: check.purchased_at,
        },
        None => PurchaseRecord {
            check_id: check.id,
            brand: REMOVED_FROM_CATALOG.to_string(),
            model: String::new(),
            year_of_release: None,
            price: check.price,
            pending,
            purchased_at: check.purchased_at,
        },
    }
}

/// Returns the best selling active cars, most sales first.
///
/// Archived cars and cars without any check are left out. Ties are broken by car ID.
pub async fn top_sellers(db: &DatabaseConnection, limit: u64) -> Result<Vec<SalesSummary>> {
    Check::find()
        .select_only()
        .column_as(car::Column::Id, "car_id")
        .column_as(car::Column::Brand, "brand")
        .column_as(car::Column::ModelName, "model")
        .column_as(check::Column::Price.sum(), "total_revenue")
        .column_as(check::Column::Id.count(), "total_sales")
        .inner_join(Car)
        .filter(car::Column::Status.eq(CarStatus::Active))
        .group_by(car::Column::Id)
        .order_by_desc(check::Column::Id.count())
        .order_by_asc(car::Column::Id)
        .limit(limit)
        .into_model::<SalesSummary>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists checks that no administrator has confirmed yet, oldest first.
pub async fn list_pending_checks(db: &DatabaseConnection) -> Result<Vec<check::Model>> {
    Check::find()
        .filter(check::Column::AdminId.is_null())
        .order_by_asc(check::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Confirms a pending check on behalf of the administrator logged in to `session`.
///
/// Only the administrator reference changes; the captured price is left as is.
///
/// # Errors
/// Returns an error if:
/// - The session is not an administrator's ([`Error::AccessDenied`])
/// - The check does not exist ([`Error::CheckNotFound`])
/// - The check was already confirmed ([`Error::CheckAlreadyConfirmed`])
/// - The administrator does not exist ([`Error::AdministratorNotFound`])
pub async fn confirm_check(
    db: &DatabaseConnection,
    session: &Session,
    check_id: i64,
) -> Result<check::Model> {
    let admin_id = session.administrator_id()?;
    let txn = db.begin().await?;

    let existing = Check::find_by_id(check_id)
        .one(&txn)
        .await?
        .ok_or(Error::CheckNotFound { id: check_id })?;

    if !existing.is_pending() {
        return Err(Error::CheckAlreadyConfirmed { id: check_id });
    }

    Administrator::find_by_id(admin_id)
        .one(&txn)
        .await?
        .ok_or(Error::AdministratorNotFound { id: admin_id })?;

    let mut check: check::ActiveModel = existing.into();
    check.admin_id = Set(Some(admin_id));
    let check = check.update(&txn).await?;

    txn.commit().await?;

    info!("Check {} confirmed by administrator {}", check_id, admin_id);
    Ok(check)
}
