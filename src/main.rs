use actix_web::{middleware::Logger, web, App, HttpServer};

use examifyr_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{compile_origin_pattern, cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.rust_log.as_str()),
    )
    .init();

    let state = AppState::new(config);
    let origin_pattern = compile_origin_pattern(&state.config.cors_allowed_origin_regex)
        .map_err(std::io::Error::other)?;
    let bind_address = (
        state.config.web_server_host.clone(),
        state.config.web_server_port,
    );

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(cors(origin_pattern.clone()))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
