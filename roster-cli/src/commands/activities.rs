//! `roster activities`: catalog and availability from a running server.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use roster_core::{ActivityView, Catalog};

use crate::client::{ApiClient, DEFAULT_URL};

#[derive(Args, Debug)]
pub struct ActivitiesArgs {
    /// Base URL of the roster server.
    #[arg(long, env = "ROSTER_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Emit the raw catalog as JSON.
    #[arg(long)]
    pub json: bool,

    /// List each activity's participants below the table.
    #[arg(long)]
    pub participants: bool,
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "activity")]
    name: String,
    #[tabled(rename = "schedule")]
    schedule: String,
    #[tabled(rename = "enrolled")]
    enrolled: String,
    #[tabled(rename = "spots left")]
    spots_left: String,
}

impl ActivitiesArgs {
    pub fn run(self) -> Result<()> {
        let catalog = ApiClient::new(&self.url)?
            .activities()
            .context("failed to list activities")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&catalog).context("failed to serialize catalog")?
            );
            return Ok(());
        }

        print_table(&catalog);
        if self.participants {
            print_participants(&catalog);
        }
        Ok(())
    }
}

fn print_table(catalog: &Catalog) {
    let open: usize = catalog.iter().filter(|(_, v)| v.available_slots() > 0).count();
    println!(
        "Roster v{} | {} activities | {} open",
        env!("CARGO_PKG_VERSION"),
        catalog.len(),
        open,
    );
    if catalog.is_empty() {
        println!("No activities.");
        return;
    }

    let rows: Vec<ActivityRow> = catalog
        .iter()
        .map(|(name, view)| ActivityRow {
            name: name.to_string(),
            schedule: view.schedule.clone(),
            enrolled: format!("{}/{}", view.participants.len(), view.max_participants),
            spots_left: spots_label(view),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

fn print_participants(catalog: &Catalog) {
    for (name, view) in catalog.iter() {
        println!("\n{}", name.to_string().bold());
        if view.participants.is_empty() {
            println!("  (no participants yet)");
        }
        for email in &view.participants {
            println!("  - {email}");
        }
    }
}

fn spots_label(view: &ActivityView) -> String {
    let slots = view.available_slots();
    let label = slots.to_string();
    match slots {
        0 => label.red().bold().to_string(),
        1..=3 => label.yellow().to_string(),
        _ => label.green().to_string(),
    }
}
