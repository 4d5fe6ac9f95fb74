//! OAuth APIs and authentication models.

mod api;
mod model;

pub use api::OAuthApi;
pub use model::*;
