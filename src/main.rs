use car_sales::{
    config::{database, settings},
    core::{administrators, inventory, sales},
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "config.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables can also be set externally
    dotenv().ok();

    // 3. Load the application configuration (optional file)
    let app_config = settings::load_config_or_default(CONFIG_PATH)
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Open the store once for the whole process
    let database_url = database::get_database_url(app_config.database_url.as_deref());
    let db = database::init_store(&database_url)
        .await
        .inspect_err(|e| error!("Failed to initialize store: {}", e))?;

    // 5. Administrators have no registration flow; create the configured ones
    administrators::seed_administrators(&db, &app_config.administrators)
        .await
        .inspect(|created| info!("Seeded {} administrator(s).", created))
        .inspect_err(|e| error!("Failed to seed administrators: {}", e))?;

    // 6. Report the state of the catalog
    let active_cars = inventory::list_active_cars(&db).await?;
    let pending_checks = sales::list_pending_checks(&db).await?;
    info!(
        "{} car(s) on sale, {} check(s) awaiting confirmation.",
        active_cars.len(),
        pending_checks.len()
    );
    for summary in sales::top_sellers(&db, sales::DEFAULT_TOP_SELLERS).await? {
        info!(
            "Top seller: {} {}: {} sale(s), revenue {:.2}",
            summary.brand, summary.model, summary.total_sales, summary.total_revenue
        );
    }

    db.close().await?;
    info!("Store closed.");
    Ok(())
}
