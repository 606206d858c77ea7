#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate log;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

use errors::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod schema;

pub const MEMORY_DATABASE_URL: &str = ":memory:";

embed_migrations!("migrations");

pub fn get_conn(pool: &DbPool) -> Result<Connection, r2d2::Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

pub fn new_pool(database_url: &str) -> Result<DbPool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    Pool::builder().build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        err.into()
    })
}

/// Every in-memory connection is its own database, so the pool holds exactly
/// one connection that is never recycled, and is migrated up front.
pub fn new_memory_pool() -> Result<DbPool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(MEMORY_DATABASE_URL);

    let pool = Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .map_err(|err| {
            error!("Failed to create in-memory db pool - {}", err.to_string());
            Error::from(err)
        })?;
    run_migrations(&pool)?;

    Ok(pool)
}

/// Opens the store named by `database_url` and applies pending migrations.
pub fn pool_for_url(database_url: &str) -> Result<DbPool, Error> {
    if database_url == MEMORY_DATABASE_URL {
        return new_memory_pool();
    }

    let pool = new_pool(database_url)?;
    run_migrations(&pool)?;

    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> Result<(), Error> {
    let connection = get_conn(pool)?;
    embedded_migrations::run(&*connection).map_err(|err| {
        error!("Failed to run migrations - {}", err.to_string());
        Error::MigrationError(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use diesel::{QueryDsl, RunQueryDsl};

    use super::{get_conn, new_memory_pool, pool_for_url};
    use crate::schema::{games, reviews, users};

    #[test]
    fn test_memory_pool_is_migrated() {
        let pool = new_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let game_count: i64 = games::table.count().get_result(&conn).unwrap();
        let review_count: i64 = reviews::table.count().get_result(&conn).unwrap();
        let user_count: i64 = users::table.count().get_result(&conn).unwrap();

        assert_eq!(game_count, 0);
        assert_eq!(review_count, 0);
        assert_eq!(user_count, 0);
    }

    #[test]
    fn test_pool_for_memory_url() {
        let pool = pool_for_url(":memory:").unwrap();
        assert_eq!(pool.max_size(), 1);
    }
}
