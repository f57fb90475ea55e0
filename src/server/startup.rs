use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::Config, error::Error, model::app::AppState, notify::NotifyClient,
    postcode::PostcodeClient, router,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared state and serves the API until shutdown.
pub async fn run(config: &Config) -> Result<(), Error> {
    let db = connect_to_database(config).await?;

    let state = AppState {
        db,
        notify: NotifyClient::new(&config.notify_base_url, &config.notify_api_key),
        postcodes: PostcodeClient::new(&config.postcode_base_url),
        licensing_mailbox: config.licensing_mailbox.clone(),
    };

    let app = router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_address).await?;
    tracing::info!("Listening on {}", config.listen_address);

    axum::serve(listener, app).await?;

    Ok(())
}
