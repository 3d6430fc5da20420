pub mod cache;
pub mod errors;
pub mod http;
pub mod types;

pub use cache::*;
pub use errors::*;
pub use http::*;
pub use types::*;
