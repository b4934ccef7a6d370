use std::sync::Arc;
use lazy_static::lazy_static;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

lazy_static! {
    // built on first access and kept for the life of the process
    static ref INSTANCE: Arc<dyn CatalogService> = create_catalog_service(&Configuration::new("main"));
}

// instance returns the process-wide catalog
pub fn instance() -> Arc<dyn CatalogService> {
    INSTANCE.clone()
}

// create_catalog_service builds an independent catalog, e.g. for tests or embedding
pub fn create_catalog_service(config: &Configuration) -> Arc<dyn CatalogService> {
    Arc::new(CatalogServiceImpl::new(config))
}
