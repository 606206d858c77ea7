#[cfg(test)]
pub mod tests {
    use std::time::Duration;

    use actix_web::{
        http::header::CONTENT_TYPE,
        test,
        web::{self, Data},
        App,
    };
    use serde::de::DeserializeOwned;

    use diesel::r2d2::{ConnectionManager, Pool};
    use diesel::sqlite::SqliteConnection;

    use db::{get_conn, Connection, DbPool};

    use crate::config::Config;
    use crate::routes::{not_found, routes};

    /// A pool whose only connection is already checked out, so requests
    /// cannot reach the store.
    pub fn exhausted_pool() -> (DbPool, Connection) {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder()
            .max_size(1)
            .connection_timeout(Duration::from_millis(100))
            .build(manager)
            .unwrap();
        let held = get_conn(&pool).unwrap();

        (pool, held)
    }

    pub struct RawResponse {
        pub status: u16,
        pub content_type: Option<String>,
        pub body: String,
    }

    /// Helper for HTTP GET integration tests that need the raw body
    pub async fn test_get_raw(pool: &DbPool, route: &str) -> RawResponse {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .app_data(Data::new(Config::default()))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri(route).to_request();
        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = test::read_body(res).await;
        let body = String::from_utf8(body.to_vec())
            .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string());

        RawResponse {
            status,
            content_type,
            body,
        }
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(pool: &DbPool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let res = test_get_raw(pool, route).await;
        let json_body = serde_json::from_str(&res.body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                res.body, res.status
            )
        });

        (res.status, json_body)
    }
}
