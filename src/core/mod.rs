pub mod classifier;
pub mod config;
pub mod diagnosis;
pub mod locator;
