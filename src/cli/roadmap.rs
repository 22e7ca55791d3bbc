//! Business roadmap CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

use crate::cli::common::{io_error, open_store, print_json, CliError, CliResult};
use crate::models::{business_schema, BusinessState};
use crate::view_model::BusinessSectionView;

/// Business roadmap commands
#[derive(Args, Debug)]
pub struct RoadmapArgs {
    #[command(subcommand)]
    command: RoadmapCommand,
}

#[derive(Subcommand, Debug)]
enum RoadmapCommand {
    /// Show roadmap progress and items
    Show(RoadmapShowArgs),
    /// Check or uncheck a roadmap item
    Check(RoadmapCheckArgs),
}

/// Show roadmap progress and items
#[derive(Args, Debug)]
pub struct RoadmapShowArgs {
    /// Only show one section (e.g., companyProfile)
    #[arg(long)]
    section: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Check or uncheck a roadmap item
#[derive(Args, Debug)]
pub struct RoadmapCheckArgs {
    /// Section id (e.g., companyProfile)
    section: String,

    /// Item key (e.g., ein)
    item: String,

    /// Uncheck instead of check
    #[arg(long)]
    off: bool,
}

/// JSON output of `roadmap show`
#[derive(Serialize, Debug)]
struct RoadmapOutput {
    overall: u8,
    sections: Vec<BusinessSectionView>,
}

impl RoadmapArgs {
    /// Execute roadmap subcommand
    pub fn execute(&self, data_dir: Option<&Path>) -> CliResult<()> {
        match &self.command {
            RoadmapCommand::Show(args) => args.execute(data_dir),
            RoadmapCommand::Check(args) => args.execute(data_dir),
        }
    }
}

fn sections(state: &BusinessState, only: Option<&str>) -> CliResult<Vec<BusinessSectionView>> {
    match only {
        Some(id) => BusinessSectionView::build(state, id)
            .map(|section| vec![section])
            .ok_or_else(|| CliError::validation(format!("Unknown roadmap section: {id}"))),
        None => Ok(business_schema()
            .sections
            .iter()
            .filter_map(|section| BusinessSectionView::build(state, section.id))
            .collect()),
    }
}

impl RoadmapShowArgs {
    fn execute(&self, data_dir: Option<&Path>) -> CliResult<()> {
        let mut store = open_store(data_dir)?;
        let state = store
            .load_business_state()
            .map_err(io_error("Failed to load business state"))?;
        let output = RoadmapOutput {
            overall: state.overall_progress(),
            sections: sections(&state, self.section.as_deref())?,
        };

        if self.json {
            return print_json(&output);
        }

        println!("Business roadmap: {}% complete", output.overall);
        for section in &output.sections {
            println!();
            println!("{} ({}) {}%", section.title, section.id, section.progress);
            for row in &section.rows {
                let mark = if row.checked { "x" } else { " " };
                println!("  [{mark}] {:<24} {}", row.key, row.label);
                for link in &row.links {
                    println!("        {}: {}", link.label, link.href);
                }
            }
        }
        Ok(())
    }
}

impl RoadmapCheckArgs {
    fn execute(&self, data_dir: Option<&Path>) -> CliResult<()> {
        if !business_schema().contains(&self.section, &self.item) {
            return Err(CliError::validation(format!(
                "Unknown roadmap item: {}/{}",
                self.section, self.item
            )));
        }

        let mut store = open_store(data_dir)?;
        let mut state = store
            .load_business_state()
            .map_err(io_error("Failed to load business state"))?;
        state.set(&self.section, &self.item, !self.off);
        store
            .save_business_state(&state)
            .map_err(io_error("Failed to save business state"))?;

        println!(
            "{} {}/{} (section {}%, overall {}%)",
            if self.off { "Unchecked" } else { "Checked" },
            self.section,
            self.item,
            state.section_progress(&self.section),
            state.overall_progress()
        );
        Ok(())
    }
}
