use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use notes_quiz_server::{
    app_state::AppState, config::Config, handlers::configure_routes, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.validate().map_err(std::io::Error::other)?;

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let payload_limit = config.max_payload_bytes;

    let state = AppState::new(config)
        .await
        .map_err(std::io::Error::other)?;

    log::info!("Starting HTTP server on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().limit(payload_limit))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new("%a \"%r\" %s %b %T %{x-request-id}o"))
            .wrap(Cors::permissive())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
