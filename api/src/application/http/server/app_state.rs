use std::sync::Arc;

use wasfa_core::application::WasfaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: WasfaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: WasfaService) -> Self {
        Self { args, service }
    }
}
