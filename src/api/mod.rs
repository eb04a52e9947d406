pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::ml::RiskService;
use std::sync::Arc;

/// Shared application state
///
/// The risk service wraps the classifier loaded once at startup; everything
/// here is read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub risk: Arc<RiskService>,
}

impl AppState {
    pub fn new(risk: Arc<RiskService>) -> Self {
        Self { risk }
    }
}
