#![allow(dead_code)]

use product_api::configuration::{get_configuration, DatabaseSettings, Settings};
use serde_json::Value;
use sqlx::{Connection, Executor, PgConnection, PgPool};

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/products{}", self.address, path)
    }

    pub async fn post_product(&self, body: &Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(self.url(""))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_product(&self, id: i64, body: &Value) -> reqwest::Response {
        reqwest::Client::new()
            .put(self.url(&format!("/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Sends `body` as is, with a JSON content type only when `json` is set.
    pub async fn send_raw(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &'static str,
        json: bool,
    ) -> reqwest::Response {
        let mut request = reqwest::Client::new().request(method, self.url(path)).body(body);
        if json {
            request = request.header("Content-Type", "application/json");
        }

        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, id: i64) -> reqwest::Response {
        reqwest::Client::new()
            .delete(self.url(&format!("/{}", id)))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn count_products(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count products")
    }
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = product_api::startup::run(listener, connection_pool.clone())
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

pub async fn spawn_app() -> Option<TestApp> {
    let configuration = get_configuration().expect("Failed to get configuration");
    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

pub fn valid_product() -> Value {
    serde_json::json!({
        "title": "Walnut desk",
        "desc": "Solid walnut, oiled finish",
        "status": "Publish",
        "date": "2024-03-15T10:30:00Z",
        "category": "Furniture"
    })
}
