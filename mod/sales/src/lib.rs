pub mod api;
pub mod service;

use std::sync::Arc;

use axum::Router;
use salesight_core::Module;

use service::SalesService;

/// Sales module — read-only aggregation queries over the sales ledger.
pub struct SalesModule {
    service: Arc<SalesService>,
}

impl SalesModule {
    pub fn new(service: SalesService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for SalesModule {
    fn name(&self) -> &str {
        "sales"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
