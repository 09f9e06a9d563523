use std::time::Duration;

use sea_orm::sea_query::{ColumnDef, Expr, Table};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr,
};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::content_item;

/// How the `payload` column is represented in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// Native binary JSON column (`jsonb` on PostgreSQL, `json` on MySQL).
    Native,
    /// Serialized JSON text, for backends without a JSON column type.
    Text,
}

impl PayloadEncoding {
    pub fn for_backend(backend: DbBackend) -> Self {
        match backend {
            DbBackend::Postgres | DbBackend::MySql => PayloadEncoding::Native,
            _ => PayloadEncoding::Text,
        }
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.url.clone());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    // An in-memory SQLite database lives only as long as its connection, so
    // the pool must hold exactly one and never recycle it.
    if is_in_memory(&config.url) {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    opt
}

pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(config)).await?;
    ensure_schema(&db).await?;

    Ok(db)
}

/// Create the `content_item` table if it does not exist yet.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<PayloadEncoding, DbErr> {
    let backend = db.get_database_backend();
    let encoding = PayloadEncoding::for_backend(backend);

    let mut payload = ColumnDef::new(content_item::Column::Payload);
    match encoding {
        PayloadEncoding::Native => payload.json_binary(),
        PayloadEncoding::Text => payload.text(),
    };
    payload.not_null();

    let stmt = Table::create()
        .table(content_item::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(content_item::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(payload)
        .col(
            ColumnDef::new(content_item::Column::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(content_item::Column::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned();

    db.execute_raw(backend.build(&stmt)).await?;
    info!(?backend, ?encoding, "Ensured table content_item exists");

    Ok(encoding)
}
