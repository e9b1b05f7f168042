use crate::di::{DependenciesInject, DependenciesInjectDeps};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub cors_origin: String,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, cors_origin: impl Into<String>) -> Self {
        Self::from_deps(DependenciesInjectDeps::from_pool(pool), cors_origin)
    }

    pub fn from_deps(deps: DependenciesInjectDeps, cors_origin: impl Into<String>) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            cors_origin: cors_origin.into(),
        }
    }
}
