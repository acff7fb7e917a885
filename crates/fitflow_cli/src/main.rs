//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `fitflow_core` linkage with deterministic output.
//! - Print an estimate and month grid for ad-hoc inputs:
//!   `fitflow_cli [<last-period-start> <cycle-length> [<today>]]`.

use chrono::{Datelike, Local};
use fitflow_core::{
    estimate, format_calendar_date, parse_calendar_date, parse_cycle_length, project,
    CalendarMonth,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("fitflow_core ping={}", fitflow_core::ping());
    println!("fitflow_core version={}", fitflow_core::core_version());

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        return ExitCode::SUCCESS;
    }

    match run_estimate(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("usage: fitflow_cli [<last-period-start> <cycle-length> [<today>]]");
            ExitCode::FAILURE
        }
    }
}

fn run_estimate(args: &[String]) -> Result<(), String> {
    let [last_start, length, rest @ ..] = args else {
        return Err("expected a last period start and a cycle length".to_string());
    };
    let last_start = parse_calendar_date(last_start)
        .ok_or_else(|| format!("invalid last period start `{last_start}`"))?;
    let length =
        parse_cycle_length(length).ok_or_else(|| format!("invalid cycle length `{length}`"))?;
    let today = match rest.first() {
        Some(raw) => parse_calendar_date(raw).ok_or_else(|| format!("invalid today `{raw}`"))?,
        None => Local::now().date_naive(),
    };

    let Some(info) = estimate(Some(last_start), length, today) else {
        println!("cycle=unavailable");
        return Ok(());
    };
    println!("today={}", format_calendar_date(today));
    println!("phase={}", info.phase);
    println!("day_in_cycle={}/{}", info.day_in_cycle, info.cycle_length);
    println!(
        "next_period_start={}",
        format_calendar_date(info.next_period_start)
    );
    println!("days_until_next={}", info.days_until_next);

    if let Some(month) = project(
        today.year(),
        today.month(),
        today,
        Some(info.next_period_start),
    ) {
        print_month(&month);
    }
    Ok(())
}

// `[dd]` marks today, `*dd` the projected period window.
fn print_month(month: &CalendarMonth) {
    println!();
    println!("{}", month.month_label);
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");
    for week in month.cells.chunks(7) {
        let line = week
            .iter()
            .map(|cell| match cell.day {
                None => "    ".to_string(),
                Some(day) if cell.is_today => format!("[{day:>2}]"),
                Some(day) if cell.is_period_window => format!(" *{day:<2}"),
                Some(day) => format!(" {day:>2} "),
            })
            .collect::<String>();
        println!("{}", line.trim_end());
    }
}
