include!("../../lib.rs");
use std::sync::Arc;
use lambda_http::{run, Error};
use tracing::info;
use crate::catalog::controller::build_router;
use crate::catalog::factory;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level.as_str(), config.lambda);

    let catalog_service = factory::create_catalog_service(&config, config.store);
    let state = AppState::new(Arc::from(catalog_service));

    if config.lambda {
        // See https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html
        return run(build_router::<lambda_http::Body>(state)).await;
    }
    let app = build_router(state);

    let addr: std::net::SocketAddr = config.listen_addr.parse()?;
    info!("bookstore catalog listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
