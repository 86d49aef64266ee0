mod config;
mod services;

use crate::config::ConsoleConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ConsoleConfig::from_env()?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    info!("Console running at {}", url);
    info!("Data quality API at {}", config.settings.api_base_url);

    let settings = web::Data::new(config.settings.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(settings.clone())
            .service(services::console::configure_routes())
            .default_service(web::route().to(services::embedded::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
