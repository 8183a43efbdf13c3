pub mod frameworks;
pub mod interface_adapters;

pub use frameworks::config::Config;
pub use frameworks::server::{StartupError, run, run_with_config};
