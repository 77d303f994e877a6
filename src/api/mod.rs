//! API client module for talking to the Pages site

mod client;
mod error;
mod traits;

pub use client::ApiClient;
pub use error::ApiError;
pub use traits::PagesApi;

#[cfg(test)]
pub use traits::MockPagesApi;
