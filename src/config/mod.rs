use crate::core::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roster-demo")]
#[command(about = "A walkthrough of collection operations over a small student roster")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Exit immediately instead of waiting for a line on stdin")]
    pub no_wait: bool,
}

impl ConfigProvider for CliConfig {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn wait_on_exit(&self) -> bool {
        !self.no_wait
    }
}
