pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::demo::{demo_dataset, RosterDemo};
pub use core::roster::{shared_names, HairColorRoster, SharedNames};
pub use utils::error::{Result, RosterError};
