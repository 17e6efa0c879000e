pub mod bundler;
pub mod capabilities;
pub mod config;
pub mod generator;
pub mod layout;
pub mod raster;

pub const VERSION: Option<&str> = option_env!("APPICONS_VERSION");
