//! `roster signup` and `roster unregister`.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::client::{ApiClient, DEFAULT_URL};

#[derive(Args, Debug)]
pub struct MembershipArgs {
    /// Activity name, e.g. "Chess Club".
    pub activity: String,

    /// Student email.
    pub email: String,

    /// Base URL of the roster server.
    #[arg(long, env = "ROSTER_URL", default_value = DEFAULT_URL)]
    pub url: String,
}

impl MembershipArgs {
    pub fn signup(self) -> Result<()> {
        let message = ApiClient::new(&self.url)?
            .signup(&self.activity, &self.email)
            .with_context(|| format!("signup for '{}' failed", self.activity))?;
        println!("{} {message}", "✓".green());
        Ok(())
    }

    pub fn unregister(self) -> Result<()> {
        let message = ApiClient::new(&self.url)?
            .unregister(&self.activity, &self.email)
            .with_context(|| format!("unregister from '{}' failed", self.activity))?;
        println!("{} {message}", "✓".green());
        Ok(())
    }
}
