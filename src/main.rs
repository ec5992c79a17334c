mod client;
mod error;
mod handlers;
mod models;
mod settings;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use client::PredictClient;
use settings::Settings;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,img2latex_ui=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let settings = Settings::from_env();
    info!(
        bind = %settings.bind_addr,
        predict_url = %settings.predict_url,
        "starting img2latex-ui"
    );

    let client = web::Data::new(PredictClient::new(settings.predict_url.clone()));

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(client.clone())
            .service(web::resource("/").route(web::get().to(handlers::index)))
            .service(web::resource("/generate").route(web::post().to(handlers::generate)))
    })
    .bind(settings.bind_addr.as_str())?
    .run()
    .await
}
