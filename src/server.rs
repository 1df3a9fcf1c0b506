use actix_cors::Cors;
use actix_web::{
    dev::Server, http::header, middleware, web, App, HttpServer,
};
use tracing::info;

use crate::{
    configuration::{AppState, State},
    controller::{
        account_overview, customer, home, ledger, lend, payment,
    },
    error::Error,
};

pub async fn server_task(app_state: &AppState<State>) -> Result<(), Error> {
    let app = app_state.clone();
    tokio::spawn(async move {
        let server = init_server(app)?;
        server.await?;
        Ok(())
    })
    .await?
}

/// Registers every route; shared by the server and the HTTP tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::index)
        .service(customer::post_index)
        .service(customer::get_index)
        .service(lend::index)
        .service(payment::index)
        .service(ledger::index)
        .service(account_overview::index);
}

pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            Error::InvalidInput(err.to_string()).into()
        })
}

fn init_server(app_state: AppState<State>) -> Result<Server, Error> {
    let host = app_state.config.server_host.to_owned();
    let port = app_state.config.port;

    info!("Listening on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let app = app_state.clone();
        let cors_access_all = app.config.allows_any_origin();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _| {
                if cors_access_all {
                    return true;
                }
                let allowed = &app.config.allowed_origins;
                if let Ok(origin) = origin.to_str() {
                    return allowed.contains(&origin.to_owned());
                }
                false
            })
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
            .allowed_header(header::CONTENT_TYPE);

        App::new()
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .app_data(web::Data::new(app_state.clone()))
            .app_data(json_config(app_state.config.json_limit))
            .configure(routes)
    })
    .bind((host, port))?
    .run();

    Ok(server)
}
