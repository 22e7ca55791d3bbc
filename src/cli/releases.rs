//! Release management CLI commands.

use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};
use std::path::Path;
use tracing::info;

use crate::cli::common::{io_error, open_store, print_json, CliError, CliResult};
use crate::models::{
    generate_release_id, parse_date, release_schema, NewRelease, Release, ReleaseStatus,
    ReleaseType,
};
use crate::services::{FileStore, ReleaseStore};
use crate::view_model::{table_rows, ChecklistTab, DetailsView};

/// Release management commands
#[derive(Args, Debug)]
pub struct ReleasesArgs {
    #[command(subcommand)]
    command: ReleasesCommand,
}

#[derive(Subcommand, Debug)]
enum ReleasesCommand {
    /// List all releases with their progress
    List(ListArgs),
    /// Show one release with its full checklist
    Show(ShowArgs),
    /// Create a release
    Add(AddArgs),
    /// Check or uncheck a checklist item of a release
    Check(CheckArgs),
    /// Change fields of a release
    Set(SetArgs),
}

/// List all releases
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Show one release
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Release id
    id: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Create a release
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Release title (blank becomes "Untitled release")
    #[arg(long, default_value = "")]
    title: String,

    /// Artist name
    #[arg(long, default_value = "")]
    artist: String,

    /// Release type (Single, EP, Album)
    #[arg(long = "type", value_name = "TYPE", default_value = "Single")]
    release_type: String,

    /// Status ("In Planning", "In Progress", "Ready to Release", "Released")
    #[arg(long, default_value = "In Progress")]
    status: String,

    /// Release date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Check or uncheck a checklist item
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Release id
    id: String,

    /// Section id (basics, rights, distribution, marketing)
    section: String,

    /// Item key (e.g., mixApproved)
    item: String,

    /// Uncheck instead of check
    #[arg(long)]
    off: bool,
}

/// Change fields of a release
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Release id
    id: String,

    /// New title
    #[arg(long)]
    title: Option<String>,

    /// New artist
    #[arg(long)]
    artist: Option<String>,

    /// New type (Single, EP, Album)
    #[arg(long = "type", value_name = "TYPE")]
    release_type: Option<String>,

    /// New status
    #[arg(long)]
    status: Option<String>,

    /// New date (YYYY-MM-DD), or an empty string to clear it
    #[arg(long, value_name = "DATE")]
    date: Option<String>,
}

impl ReleasesArgs {
    /// Execute releases subcommand
    pub fn execute(&self, data_dir: Option<&Path>) -> CliResult<()> {
        let mut store = open_store(data_dir)?;
        match &self.command {
            ReleasesCommand::List(args) => args.execute(&mut store),
            ReleasesCommand::Show(args) => args.execute(&mut store),
            ReleasesCommand::Add(args) => args.execute(&mut store),
            ReleasesCommand::Check(args) => args.execute(&mut store),
            ReleasesCommand::Set(args) => args.execute(&mut store),
        }
    }
}

fn load(store: &mut ReleaseStore<FileStore>) -> CliResult<Vec<Release>> {
    store
        .load_releases()
        .map_err(io_error("Failed to load releases"))
}

fn save(store: &mut ReleaseStore<FileStore>, releases: &[Release]) -> CliResult<()> {
    store
        .save_releases(releases)
        .map_err(io_error("Failed to save releases"))
}

fn find<'a>(releases: &'a mut [Release], id: &str) -> CliResult<&'a mut Release> {
    releases
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| CliError::validation(format!("Unknown release: {id}")))
}

/// Parses a type label. Only the three selectable types are accepted.
fn parse_type(raw: &str) -> CliResult<ReleaseType> {
    match ReleaseType::from_label(raw) {
        ReleaseType::Other(_) => Err(CliError::validation(format!(
            "Invalid type '{raw}'. Must be Single, EP, or Album"
        ))),
        release_type => Ok(release_type),
    }
}

fn parse_status(raw: &str) -> CliResult<ReleaseStatus> {
    ReleaseStatus::from_label(raw).ok_or_else(|| {
        let labels: Vec<_> = ReleaseStatus::ALL.iter().map(|s| s.label()).collect();
        CliError::validation(format!(
            "Invalid status '{raw}'. Must be one of: {}",
            labels.join(", ")
        ))
    })
}

/// Parses a date argument. Blank clears the date.
fn parse_date_arg(raw: &str) -> CliResult<Option<NaiveDate>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(raw)
        .map(Some)
        .ok_or_else(|| CliError::validation(format!("Invalid date '{raw}': use YYYY-MM-DD")))
}

fn print_details(release: &Release) {
    let view = DetailsView::from_release(release, ChecklistTab::default());
    println!("{} ({})", view.heading, view.id);
    println!("  {}", view.subtitle);
    println!("  Status:   {}", view.status);
    println!(
        "  Date:     {}",
        if view.date.is_empty() { "-" } else { view.date.as_str() }
    );
    println!("  {}", view.progress_label());
    for section in &view.sections {
        println!();
        println!("  {}:", section.title);
        for row in &section.rows {
            let mark = if row.checked { "x" } else { " " };
            println!("    [{mark}] {:<22} {}", row.key, row.label);
        }
    }
}

impl ListArgs {
    fn execute(&self, store: &mut ReleaseStore<FileStore>) -> CliResult<()> {
        let rows = table_rows(&load(store)?);

        if self.json {
            return print_json(&rows);
        }

        if rows.is_empty() {
            println!("No releases yet.");
            return Ok(());
        }
        for row in rows {
            println!(
                "{:<18} {:<24} {:<20} {:<6} {:<16} {:<10} {:>4}",
                row.id,
                row.title,
                row.artist,
                row.type_label,
                row.status.label(),
                row.date,
                row.progress_label()
            );
        }
        Ok(())
    }
}

impl ShowArgs {
    fn execute(&self, store: &mut ReleaseStore<FileStore>) -> CliResult<()> {
        let mut releases = load(store)?;
        let release = find(&mut releases, &self.id)?;

        if self.json {
            print_json(&DetailsView::from_release(release, ChecklistTab::default()))
        } else {
            print_details(release);
            Ok(())
        }
    }
}

impl AddArgs {
    fn execute(&self, store: &mut ReleaseStore<FileStore>) -> CliResult<()> {
        let form = NewRelease {
            title: self.title.clone(),
            artist: self.artist.clone(),
            release_type: parse_type(&self.release_type)?,
            status: parse_status(&self.status)?,
            date: match &self.date {
                Some(raw) => parse_date_arg(raw)?,
                None => None,
            },
        };

        let mut releases = load(store)?;
        let id = generate_release_id(
            Utc::now().timestamp_millis(),
            releases.iter().map(|r| r.id.as_str()),
        );
        let release = Release::from_form(&form, id);
        info!(id = %release.id, "Created release");
        releases.push(release.clone());
        save(store, &releases)?;

        if self.json {
            print_json(&DetailsView::from_release(&release, ChecklistTab::default()))
        } else {
            println!("Created {} ({})", release.display_title(), release.id);
            Ok(())
        }
    }
}

impl CheckArgs {
    fn execute(&self, store: &mut ReleaseStore<FileStore>) -> CliResult<()> {
        if !release_schema().contains(&self.section, &self.item) {
            return Err(CliError::validation(format!(
                "Unknown checklist item: {}/{}",
                self.section, self.item
            )));
        }

        let mut releases = load(store)?;
        let release = find(&mut releases, &self.id)?;
        release.checklists.set(&self.section, &self.item, !self.off);
        let progress = crate::models::calculate_progress(release);
        save(store, &releases)?;

        println!(
            "{} {}/{} ({progress}% complete)",
            if self.off { "Unchecked" } else { "Checked" },
            self.section,
            self.item
        );
        Ok(())
    }
}

impl SetArgs {
    fn execute(&self, store: &mut ReleaseStore<FileStore>) -> CliResult<()> {
        if self.title.is_none()
            && self.artist.is_none()
            && self.release_type.is_none()
            && self.status.is_none()
            && self.date.is_none()
        {
            return Err(CliError::validation(
                "At least one field must be specified: --title, --artist, --type, --status, or --date",
            ));
        }

        // Parse everything before touching storage
        let release_type = self.release_type.as_deref().map(parse_type).transpose()?;
        let status = self.status.as_deref().map(parse_status).transpose()?;
        let date = self.date.as_deref().map(parse_date_arg).transpose()?;

        let mut releases = load(store)?;
        let release = find(&mut releases, &self.id)?;
        if let Some(title) = &self.title {
            release.set_title(title.as_str());
        }
        if let Some(artist) = &self.artist {
            release.set_artist(artist.as_str());
        }
        if let Some(release_type) = release_type {
            release.set_type(release_type);
        }
        if let Some(status) = status {
            release.set_status(status);
        }
        if let Some(date) = date {
            release.set_date(date);
        }
        save(store, &releases)?;

        println!("Updated {}", self.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type() {
        assert_eq!(parse_type("ep").unwrap(), ReleaseType::Ep);
        assert_eq!(parse_type("Album").unwrap(), ReleaseType::Album);
        assert!(parse_type("Mixtape").is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            parse_status("ready to release").unwrap(),
            ReleaseStatus::ReadyToRelease
        );
        let err = parse_status("done").unwrap_err();
        assert!(err.message.contains("In Planning"));
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg("").unwrap(), None);
        assert!(parse_date_arg("2025-02-30").is_err());
        assert_eq!(
            parse_date_arg("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
    }
}
