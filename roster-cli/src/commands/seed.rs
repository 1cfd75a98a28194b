//! `roster seed`: print the built-in activities in seed-file format.

use anyhow::{Context, Result};
use clap::Args;

use roster_core::seed::{self, SeedFile};

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Emit JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

impl SeedArgs {
    pub fn run(self) -> Result<()> {
        let activities = seed::default_activities();
        if self.json {
            let file = SeedFile { activities };
            println!(
                "{}",
                serde_json::to_string_pretty(&file).context("failed to serialize seed JSON")?
            );
        } else {
            print!(
                "{}",
                seed::to_yaml(&activities).context("failed to serialize seed YAML")?
            );
        }
        Ok(())
    }
}
