pub mod env_loader;
pub mod model;
pub mod venues_loader;
