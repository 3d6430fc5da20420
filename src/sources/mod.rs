pub mod manager;
pub mod plugin;
pub mod spotify;
pub mod youtube;

pub use manager::SourceManager;
pub use plugin::SourcePlugin;
