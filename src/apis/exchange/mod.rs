//! APIs and models related to currency exchange.

mod api;
mod model;

pub use api::ExchangeApi;
pub use model::*;
