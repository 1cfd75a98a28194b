//! Roster: Mergington activity roster server and client CLI.
//!
//! # Usage
//!
//! ```text
//! roster serve [--bind ADDR] [--seed FILE] [--static-dir DIR] [--enforce-capacity]
//! roster seed [--json]
//! roster activities [--url URL] [--json] [--participants]
//! roster signup <ACTIVITY> <EMAIL> [--url URL]
//! roster unregister <ACTIVITY> <EMAIL> [--url URL]
//! ```

mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    activities::ActivitiesArgs, membership::MembershipArgs, seed::SeedArgs, serve::ServeArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Serve and manage Mergington High School activity rosters",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server in the foreground until ctrl-c.
    Serve(ServeArgs),

    /// Print the built-in seed activities (YAML by default).
    Seed(SeedArgs),

    /// List activities and availability from a running server.
    Activities(ActivitiesArgs),

    /// Sign a student up for an activity.
    Signup(MembershipArgs),

    /// Remove a student from an activity.
    Unregister(MembershipArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => args.run(),
        Commands::Seed(args) => args.run(),
        Commands::Activities(args) => args.run(),
        Commands::Signup(args) => args.signup(),
        Commands::Unregister(args) => args.unregister(),
    }
}
