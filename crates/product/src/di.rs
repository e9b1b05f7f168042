use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::{DynProductCommandService, DynProductQueryService},
    },
    repository::{ProductCommandRepository, ProductQueryRepository},
    service::{ProductCommandService, ProductQueryService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub query_repo: DynProductQueryRepository,
    pub command_repo: DynProductCommandRepository,
}

impl DependenciesInjectDeps {
    pub fn from_pool(pool: ConnectionPool) -> Self {
        let query_repo =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;
        let command_repo =
            Arc::new(ProductCommandRepository::new(pool)) as DynProductCommandRepository;

        Self {
            query_repo,
            command_repo,
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            query_repo,
            command_repo,
        } = deps;

        let product_query =
            Arc::new(ProductQueryService::new(query_repo, registry)) as DynProductQueryService;

        let product_command = Arc::new(ProductCommandService::new(command_repo, registry))
            as DynProductCommandService;

        Self {
            product_query,
            product_command,
        }
    }
}
