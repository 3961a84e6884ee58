// Entry point and high-level CLI flow.
//
// - Option [1] loads and cleans the booking CSV, printing diagnostics.
// - Option [2] generates every report table plus a JSON summary.
// - After generating reports, the user can go back to the selection menu
//   or exit.
use hb_report::config::ScoringConfig;
use hb_report::types::BookingRecord;
use hb_report::{loader, output, reports, util};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::env;
use std::io::{self, Write};
use std::sync::Mutex;
use tabled::Tabled;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "Half Board.csv";
const CONFIG_PATH: &str = "hb_config.json";
const PREVIEW_ROWS: usize = 5;

// Loaded once, reused for every report run in the session.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| {
    Mutex::new(AppState {
        data: None,
        config: ScoringConfig::default(),
    })
});

struct AppState {
    data: Option<Vec<BookingRecord>>,
    config: ScoringConfig,
}

/// `None` once stdin is closed.
fn read_choice() -> Option<String> {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to Report Selection (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        if io::stdin().read_line(&mut buf).unwrap_or(0) == 0 {
            return false;
        }
        match buf.trim().to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

fn input_path() -> String {
    env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string())
}

/// Agency for the drilldown tables: second argument, else the agency with
/// the most Half Board revenue.
fn drilldown_agency(data: &[BookingRecord]) -> Option<String> {
    env::args().nth(2).or_else(|| reports::top_hb_agency(data))
}

fn handle_load() {
    let path = input_path();
    info!(path = %path, "loading bookings");
    let config = match ScoringConfig::load_or_default(CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "could not read {}, using default assumptions", CONFIG_PATH);
            ScoringConfig::default()
        }
    };
    match loader::load_and_clean(&path) {
        Ok((data, load_report)) => {
            println!(
                "Processing dataset... ({} bookings loaded)",
                util::format_int(load_report.total_rows)
            );
            if load_report.missing_numeric_cells > 0 {
                println!(
                    "Note: {} blank room night/revenue cells left out of totals.",
                    util::format_int(load_report.missing_numeric_cells)
                );
            }
            println!(
                "Half Board bookings: {} ({}%)\n",
                util::format_int(load_report.half_board_rows),
                util::format_number(
                    util::pct(load_report.half_board_rows as f64, load_report.total_rows as f64),
                    1
                )
            );
            let mut state = APP_STATE.lock().unwrap_or_else(|p| p.into_inner());
            state.data = Some(data);
            state.config = config;
        }
        Err(e) => {
            error!(path = %path, error = %e, "load failed");
            eprintln!("Failed to load file: {}\n", e);
        }
    }
}

/// Write one report to CSV and print its preview.
fn emit<T>(report_no: usize, title: &str, note: Option<&str>, file: &str, rows: &[T])
where
    T: Serialize + Tabled + Clone,
{
    output::preview_table(report_no, title, note, rows, PREVIEW_ROWS);
    match output::write_csv(file, rows) {
        Ok(()) => println!("(Full table exported to {})", file),
        Err(e) => {
            error!(file, error = %e, "write failed");
            eprintln!("Write error: {}", e);
        }
    }
}

fn handle_generate_reports() {
    let (data, cfg) = {
        let state = APP_STATE.lock().unwrap_or_else(|p| p.into_inner());
        (state.data.clone(), state.config.clone())
    };
    let Some(data) = data else {
        println!("Error: No data loaded. Please load the CSV file first (option 1).\n");
        return;
    };

    println!("Generating reports...");
    info!(records = data.len(), "generating reports");

    emit(
        1,
        "Descriptive Statistics",
        Some("All bookings vs Half Board"),
        "hb_descriptive_stats.csv",
        &reports::generate_descriptive_stats(&data),
    );
    emit(
        2,
        "Half Board vs Non-Half Board",
        None,
        "hb_comparison.csv",
        &reports::generate_hb_comparison(&data),
    );
    emit(
        3,
        "Agency Deep Dive",
        Some("Ranked by total revenue"),
        "hb_agency_deep_dive.csv",
        &reports::generate_agency_deep_dive(&data),
    );
    emit(
        4,
        "Rate Code Performance",
        Some("Ranked by total revenue"),
        "hb_rate_code_performance.csv",
        &reports::generate_rate_code_performance(&data),
    );
    emit(
        5,
        "Market Segmentation",
        None,
        "hb_market_segmentation.csv",
        &reports::generate_market_segmentation(&data),
    );
    emit(
        6,
        "Top Agencies per Market",
        Some("Top 5 by revenue"),
        "hb_market_top_agencies.csv",
        &reports::generate_market_top_agencies(&data),
    );
    emit(
        7,
        "Universal Rate Codes",
        None,
        "hb_universal_codes.csv",
        &reports::generate_universal_codes(&data),
    );
    emit(
        8,
        "CIS Half Board Rate Codes",
        None,
        "hb_cis_analysis.csv",
        &reports::generate_cis_analysis(&data),
    );
    emit(
        9,
        "CIS Market Overview",
        None,
        "hb_cis_overview.csv",
        std::slice::from_ref(&reports::generate_cis_overview(&data)),
    );
    emit(
        10,
        "CIS Half Board by Agency",
        None,
        "hb_cis_agencies.csv",
        &reports::generate_cis_agencies(&data),
    );
    emit(
        11,
        "Agencies per Universal Rate Code",
        Some("Top 15 per code by revenue"),
        "hb_universal_code_agencies.csv",
        &reports::generate_universal_code_agencies(&data),
    );
    emit(
        12,
        "Booking Size Distribution",
        None,
        "hb_booking_size.csv",
        &reports::generate_booking_size_distribution(&data),
    );

    let target_note = format!(
        "Ranked by priority score, target {}% HB",
        util::format_number(cfg.target_hb_pct, 0)
    );
    emit(
        13,
        "HB Conversion Opportunity Matrix",
        Some(target_note.as_str()),
        "hb_opportunity_matrix.csv",
        &reports::generate_opportunity_matrix(&data, &cfg),
    );
    emit(
        14,
        "Action Plan",
        None,
        "hb_action_plan.csv",
        &reports::generate_action_plan(&data, &cfg),
    );
    emit(
        15,
        "Rate Significance Tests",
        Some("alpha = 0.05"),
        "hb_significance_tests.csv",
        &reports::generate_significance_tests(&data),
    );

    match drilldown_agency(&data) {
        Some(agency) => {
            let drill = reports::generate_agency_drilldown(&data, &agency);
            if drill.rate_codes.is_empty() && drill.booking_sizes.is_empty() {
                warn!(agency = %agency, "no bookings for drilldown agency");
            }
            let note = format!("Agency: {}", drill.agency);
            emit(
                16,
                "Agency Drilldown: Rate Codes",
                Some(note.as_str()),
                "hb_agency_drilldown_rate_codes.csv",
                &drill.rate_codes,
            );
            emit(
                17,
                "Agency Drilldown: Booking Sizes",
                Some(note.as_str()),
                "hb_agency_drilldown_booking_sizes.csv",
                &drill.booking_sizes,
            );
        }
        None => println!("No agency sells Half Board; drilldown skipped.\n"),
    }

    let summary = reports::generate_summary(&data, &cfg);
    if let Err(e) = output::write_json("summary.json", &summary) {
        error!(error = %e, "summary write failed");
        eprintln!("Write error: {}", e);
    }
    println!("\nSummary Stats (summary.json):");
    println!(
        "{{\"hb_penetration_pct\": {}, \"hb_revenue\": {}, \"high_priority_agencies\": {}, \"total_incremental_revenue\": {}}}\n",
        util::format_number(summary.hb_penetration_pct, 2),
        util::format_number(summary.hb_revenue, 2),
        summary.high_priority_agencies,
        util::format_number(summary.total_incremental_revenue, 2)
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    loop {
        println!("Half Board Report Generator:");
        println!("[1] Load the file");
        println!("[2] Generate Reports\n");
        let Some(choice) = read_choice() else {
            println!("Exiting the program.");
            break;
        };
        match choice.as_str() {
            "1" => handle_load(),
            "2" => {
                println!();
                handle_generate_reports();
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            _ => println!("Invalid choice. Please enter 1 or 2.\n"),
        }
    }
}
