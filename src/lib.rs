pub mod adapters;
pub mod config;
pub mod core;
pub mod diagram;
pub mod domain;
pub mod utils;

pub use config::BrokerConfig;
pub use domain::event::HttpRequest;
pub use domain::response::{HttpResponse, Responder};
pub use utils::error::{BrokerError, Result};
