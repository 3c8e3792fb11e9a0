pub mod html;
pub mod listing;
pub mod registry;
