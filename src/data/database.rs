use diesel::result;
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::deadpool::{BuildError, Object, Pool};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, deadpool};

/// Shared handle to the Postgres connection pool.
///
/// Cloning is cheap; every clone talks to the same pool. Connections are
/// opened lazily, so building a `Database` never touches the network.
#[derive(Clone)]
pub struct Database {
    pool: Pool<AsyncPgConnection>,
}

impl Database {
    pub fn new(database_url: &str) -> Result<Self, BuildError> {
        let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        let pool = Pool::builder(config).build()?;

        tracing::info!("DB connection pool created");

        Ok(Database { pool })
    }

    pub async fn get_connection(&self) -> Result<Object<AsyncPgConnection>, deadpool::PoolError> {
        self.pool.get().await
    }

    /// Checks out a connection, reporting pool failures as diesel errors so
    /// repositories can propagate a single error type.
    pub async fn connection(&self) -> Result<Object<AsyncPgConnection>, result::Error> {
        self.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })
    }
}
