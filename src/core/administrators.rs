//! Administrator directory - Out-of-band creation and lookup of administrators.
//!
//! There is no registration flow for administrators. They are seeded from the
//! `[[administrators]]` entries of `config.toml` on startup.

use crate::{
    config::settings::AdministratorConfig,
    entities::{Administrator, administrator},
    errors::Result,
};
use sea_orm::{Set, prelude::*};
use tracing::{debug, info};

/// Retrieves an administrator by ID.
pub async fn get_administrator_by_id(
    db: &DatabaseConnection,
    admin_id: i64,
) -> Result<Option<administrator::Model>> {
    Administrator::find_by_id(admin_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts every configured administrator whose login does not exist yet.
///
/// Existing rows are never modified, so editing `config.toml` does not reset a password that
/// was changed in the store. Returns how many administrators were created.
pub async fn seed_administrators(
    db: &DatabaseConnection,
    administrators: &[AdministratorConfig],
) -> Result<usize> {
    let mut created = 0;

    for config in administrators {
        let exists = Administrator::find()
            .filter(administrator::Column::Login.eq(config.login.as_str()))
            .one(db)
            .await?
            .is_some();

        if exists {
            debug!("Administrator {} already present, skipping", config.login);
            continue;
        }

        let admin = administrator::ActiveModel {
            name: Set(config.name.clone()),
            last_name: Set(config.last_name.clone()),
            login: Set(config.login.clone()),
            password: Set(config.password.clone()),
            phone: Set(config.phone.clone()),
            ..Default::default()
        };
        let admin = admin.insert(db).await?;
        info!("Seeded administrator {} ({})", admin.id, admin.login);
        created += 1;
    }

    Ok(created)
}
