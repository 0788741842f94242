//! Sample planner run.
//!
//! # Responsibility
//! - Build the Alex/Stacey sample trips against a fresh registry.
//! - Print the query results in a deterministic order.
//!
//! Set `PARKPLANNER_LOG_DIR` (absolute) to enable file logging and
//! `PARKPLANNER_LOG_LEVEL` to override the build-mode default.

use log::info;
use parkplanner_core::{InMemoryRegistry, PlannerService, RepoResult};
use std::error::Error;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "PARKPLANNER_LOG_DIR";
const LOG_LEVEL_ENV: &str = "PARKPLANNER_LOG_LEVEL";

fn main() -> ExitCode {
    init_logging_from_env();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("parkplanner: sample run failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| parkplanner_core::default_log_level().to_string());
    if let Err(err) = parkplanner_core::init_logging(&level, &log_dir) {
        eprintln!("parkplanner: logging disabled: {err}");
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    info!(
        "event=sample_run module=cli status=start version={}",
        parkplanner_core::core_version()
    );
    for line in sample_report()? {
        println!("{line}");
    }
    info!("event=sample_run module=cli status=ok");
    Ok(())
}

fn sample_report() -> RepoResult<Vec<String>> {
    let mut planner = PlannerService::new(InMemoryRegistry::new());

    let alex = planner.create_visitor("Alex")?;
    let stacey = planner.create_visitor("Stacey")?;

    let yosemite = planner.create_park("Yosemite")?;
    let yellowstone = planner.create_park("Yellowstone")?;

    planner.create_trip(alex, yosemite, "September 1st", "September 5th")?;
    planner.create_trip(alex, yellowstone, "October 1st", "October 5th")?;
    planner.create_trip(alex, yosemite, "November 1st", "November 3rd")?;
    planner.create_trip(stacey, yosemite, "December 1st", "December 3rd")?;

    let park_names = planner
        .visitor_national_parks(alex)?
        .iter()
        .map(|park| park.name())
        .collect::<Vec<_>>()
        .join(", ");
    let visitor_names = planner
        .park_visitors(yosemite)?
        .iter()
        .map(|visitor| visitor.name())
        .collect::<Vec<_>>()
        .join(", ");
    let best_visitor = planner
        .best_visitor(yosemite)?
        .map_or("none", |visitor| visitor.name());
    let most_visited = planner.most_visited().map_or("none", |park| park.name());

    Ok(vec![
        format!("Alex's parks: {park_names}"),
        format!("Yosemite visitors: {visitor_names}"),
        format!(
            "Yosemite total visits: {}",
            planner.park_total_visits(yosemite)?
        ),
        format!("Yosemite best visitor: {best_visitor}"),
        format!("Most visited park: {most_visited}"),
        format!(
            "Alex visits at Yosemite: {}",
            planner.total_visits_at_park(alex, yosemite)?
        ),
    ])
}
