use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Database,
};

use crate::{config::Config, errors::AppResult};

const APP_NAME: &str = "notes-quiz-server";

/// Driver options for the history store. Parsing a plain `mongodb://` string
/// does not touch the network.
pub async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;

    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.max_pool_size = Some(10);
    options.min_pool_size = Some(2);
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));
    options.app_name = Some(APP_NAME.to_string());

    Ok(options)
}

/// Opens the configured database and fails early if the server is unreachable.
pub async fn connect(config: &Config) -> AppResult<Database> {
    let client = Client::with_options(client_options(config).await?)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);
    Ok(client.database(&config.mongo_db_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_client_options_bound_pool_and_timeouts() {
        let options = client_options(&Config::test_config()).await.unwrap();

        assert_eq!(options.app_name.as_deref(), Some(APP_NAME));
        assert_eq!(options.max_pool_size, Some(10));
        assert_eq!(options.min_pool_size, Some(2));
        assert_eq!(options.server_selection_timeout, Some(Duration::from_secs(5)));
        assert!(options.server_api.is_some());
    }

    #[actix_web::test]
    async fn test_client_options_reject_malformed_connection_string() {
        let config = Config {
            mongo_conn_string: "not-a-mongo-uri".to_string(),
            ..Config::test_config()
        };

        assert!(client_options(&config).await.is_err());
    }
}
