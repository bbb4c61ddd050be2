pub mod commands;
pub mod runner;
pub mod traits;

pub use commands::generate_fix_commands;
