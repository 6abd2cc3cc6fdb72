pub mod entity;
mod common_type_conversions;
mod records;
mod source;

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub use sea_orm::DbErr as SeaDbErr;
pub use source::{MemorySource, RecordSource};

#[derive(Debug)]
pub struct GdpDb {
    // Connections here
    db: DatabaseConnection,
}

impl GdpDb {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let mut opt = ConnectOptions::new(url.to_owned());
        opt.max_connections(max_connections)
            .min_connections(0)
            .sqlx_logging(false);
        let db: DatabaseConnection = Database::connect(opt).await?;
        info!("connected to database, pool size {max_connections}");
        Ok(Self { db })
    }

    /// Wraps an existing connection, ie. a mock connection in tests
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&self.db, None).await?;
        info!("migrations applied");
        Ok(())
    }
}
