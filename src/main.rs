//! Service entry point: configuration, tracing, vendor clients, HTTP serve.

use anyhow::Context;
use std::sync::Arc;
use top_products::api::rest::{AppState, create_router};
use top_products::application::services::aggregation::ProductAggregator;
use top_products::application::services::catalog::CatalogService;
use top_products::config::AppConfig;
use top_products::domain::value_objects::enums::Vendor;
use top_products::infrastructure::vendors::remote::HttpVendorClient;
use top_products::infrastructure::vendors::traits::VendorClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = AppConfig::load().context("loading configuration")?;

    let mut clients: Vec<Arc<dyn VendorClient>> = Vec::with_capacity(Vendor::ALL.len());
    for vendor in Vendor::ALL {
        let client = HttpVendorClient::new(
            vendor,
            cfg.upstream.base_url.clone(),
            &cfg.upstream.access_token,
            cfg.upstream.timeout_ms,
        )
        .with_context(|| format!("building client for vendor {vendor}"))?;
        clients.push(Arc::new(client));
    }

    let aggregator = ProductAggregator::new(clients, cfg.aggregation.clone());
    let state = AppState {
        catalog: Arc::new(CatalogService::new(aggregator)),
    };

    let listener = tokio::net::TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("binding {}", cfg.listen_addr))?;
    tracing::info!(
        addr = %cfg.listen_addr,
        vendors = Vendor::ALL.len(),
        "serving product aggregation API"
    );

    axum::serve(listener, create_router(state))
        .await
        .context("serving HTTP")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
