use std::sync::Arc;

use crate::ports::catalog::CatalogApi;
use crate::remote::RemoteEnv;

pub struct AppState {
    pub api: Arc<dyn CatalogApi>,
    pub env: RemoteEnv,
}
