pub mod models;
pub mod tracks;

pub use models::*;
pub use tracks::*;
