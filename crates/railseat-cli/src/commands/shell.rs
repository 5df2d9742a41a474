//! Interactive booking menu.

use clap::Args;
use dialoguer::{Input, Select};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::output::{self, OutputFormat};
use railseat_core::error::{AppError, ErrorKind};
use railseat_core::events::JournalEntry;
use railseat_core::types::{
    AdminReport, BookingOutcome, CancellationReport, Direction, Promotion, RequestType,
    SeatNumber, SeatView, Section,
};
use railseat_engine::SharedEngine;

/// Arguments for the interactive shell
#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Start with the configured layout even when it is empty
    #[arg(long)]
    pub skip_setup: bool,
}

const MENU: [&str; 7] = [
    "Book ticket",
    "Cancel ticket",
    "Admin report",
    "Rotate seats",
    "Seat map",
    "History",
    "Exit",
];

/// Execute the shell
pub async fn execute(
    args: &ShellArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let engine = SharedEngine::from_config(&config.engine)?;

    if !args.skip_setup && engine.seat_count().await == 0 {
        setup_seats(&engine).await?;
    }

    loop {
        let choice = Select::new()
            .with_prompt("Railseat")
            .items(&MENU)
            .default(0)
            .interact()
            .map_err(super::input_error)?;
        debug!(choice = MENU[choice], "Menu selection");

        let result = match choice {
            0 => book(&engine, format).await,
            1 => cancel(&engine, format).await,
            2 => admin_report(&engine, format).await,
            3 => rotate(&engine, format).await,
            4 => seat_map(&engine, format).await,
            5 => history(&engine, format).await,
            _ => break,
        };

        // Engine errors are reported and the menu keeps running.
        if let Err(e) = result {
            if e.is(ErrorKind::Internal) {
                return Err(e);
            }
            output::print_error(&e.to_string());
        }
    }

    Ok(())
}

async fn setup_seats(engine: &SharedEngine) -> Result<(), AppError> {
    let count: usize = Input::new()
        .with_prompt("Number of seats")
        .interact_text()
        .map_err(super::input_error)?;

    let mut added = 0;
    while added < count {
        let number: i64 = Input::new()
            .with_prompt(format!("Seat {} number", added + 1))
            .interact_text()
            .map_err(super::input_error)?;
        let section: String = Input::new()
            .with_prompt("Section (front/mid/rear)")
            .interact_text()
            .map_err(super::input_error)?;

        let added_seat = match section.parse::<Section>() {
            Ok(section) => engine.add_seat(SeatNumber(number), section).await,
            Err(e) => Err(e),
        };
        match added_seat {
            Ok(()) => added += 1,
            Err(e) => output::print_warning(&e.to_string()),
        }
    }

    output::print_success(&format!("{} seats created", count));
    Ok(())
}

async fn book(engine: &SharedEngine, format: OutputFormat) -> Result<(), AppError> {
    let name: String = Input::new()
        .with_prompt("Name")
        .interact_text()
        .map_err(super::input_error)?;
    let gender: String = Input::new()
        .with_prompt("Gender (m/f)")
        .allow_empty(true)
        .interact_text()
        .map_err(super::input_error)?;
    let request_type: String = Input::new()
        .with_prompt("Request type (normal/tatkal)")
        .allow_empty(true)
        .interact_text()
        .map_err(super::input_error)?;
    let request_type = RequestType::from_input(&request_type);

    let outcome = engine.book(name.trim(), &gender, request_type).await?;
    match format {
        OutputFormat::Json => output::print_item(&outcome, format),
        OutputFormat::Table => output::print_success(&booking_message(&name, &outcome)),
    }
    Ok(())
}

async fn cancel(engine: &SharedEngine, format: OutputFormat) -> Result<(), AppError> {
    match engine.cancel().await {
        Ok(report) => {
            match format {
                OutputFormat::Json => output::print_item(&report, format),
                OutputFormat::Table => {
                    for line in cancellation_lines(&report) {
                        output::print_success(&line);
                    }
                }
            }
            Ok(())
        }
        Err(e) if e.is(ErrorKind::EmptyLedger) => {
            output::print_warning(&e.message);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

async fn admin_report(engine: &SharedEngine, format: OutputFormat) -> Result<(), AppError> {
    let report = engine.admin_report().await;
    match format {
        OutputFormat::Json => output::print_item(&report, format),
        OutputFormat::Table => {
            for line in report_lines(&report) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

async fn rotate(engine: &SharedEngine, format: OutputFormat) -> Result<(), AppError> {
    let direction: String = Input::new()
        .with_prompt("Direction (left/right)")
        .interact_text()
        .map_err(super::input_error)?;
    let direction: Direction = direction.parse()?;

    let order = engine.rotate(direction).await;
    match format {
        OutputFormat::Json => output::print_item(&order, format),
        OutputFormat::Table => println!("Seat Order: {}", output::format_numbers(&order)),
    }
    Ok(())
}

async fn seat_map(engine: &SharedEngine, format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<SeatRow> = engine.seat_map().await.iter().map(SeatRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

async fn history(engine: &SharedEngine, format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<HistoryRow> = engine.history().await.iter().map(HistoryRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

fn booking_message(name: &str, outcome: &BookingOutcome) -> String {
    match outcome {
        BookingOutcome::Seated {
            seat_number,
            section,
        } => format!("BOOKED -> {} Seat {} ({})", name.trim(), seat_number, section),
        BookingOutcome::Rac { seat_number } => {
            format!("RAC -> {} Seat {}", name.trim(), seat_number)
        }
        BookingOutcome::Waitlisted { position } => {
            format!("WAITING -> {} (position {})", name.trim(), position)
        }
    }
}

fn cancellation_lines(report: &CancellationReport) -> Vec<String> {
    let mut lines = vec![format!(
        "CANCELLED -> {} Seat {}",
        report.cancelled.name, report.seat_number
    )];
    match &report.promotion {
        Promotion::Rac(p) => lines.push(format!("RAC PROMOTED -> {}", p.name)),
        Promotion::Waitlist(p) => lines.push(format!("WL PROMOTED -> {}", p.name)),
        Promotion::SeatFreed => lines.push("Seat now Available".to_string()),
    }
    lines
}

fn report_lines(report: &AdminReport) -> Vec<String> {
    if report.in_order.is_empty() {
        return vec!["No seats".to_string()];
    }
    vec![
        format!("Inorder: {}", output::format_numbers(&report.in_order)),
        format!("Level Order: {}", output::format_numbers(&report.level_order)),
        format!("Waiting List: {}", output::format_numbers(&report.waiting_names)),
    ]
}

/// Seat map table row
#[derive(Debug, Serialize, Tabled)]
struct SeatRow {
    #[tabled(rename = "Seat")]
    seat: i64,
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Occupant")]
    occupant: String,
    #[tabled(rename = "RAC")]
    rac: String,
}

impl From<&SeatView> for SeatRow {
    fn from(view: &SeatView) -> Self {
        let occupant = match &view.occupant {
            Some(p) => format!("{} ({})", p.name, p.gender),
            None => "Available".to_string(),
        };
        let rac = view
            .rac_holders
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            seat: view.seat_number.get(),
            section: view.section.to_string(),
            occupant,
            rac,
        }
    }
}

/// History table row
#[derive(Debug, Serialize, Tabled)]
struct HistoryRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Event")]
    event: String,
}

impl From<&JournalEntry> for HistoryRow {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            time: entry.timestamp.format("%H:%M:%S%.3f").to_string(),
            event: entry.event.summary(),
        }
    }
}
