//! FFI use-case API for the Flutter cycle page.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Flatten core types into plain envelopes with string enums.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported through `ok = false` plus a message, never thrown.
//! - Dates cross the boundary as `YYYY-MM-DD` strings.

use fitflow_core::db::open_db;
use fitflow_core::{
    core_version as core_version_inner, format_calendar_date, init_logging as init_logging_inner,
    parse_calendar_date, ping as ping_inner, CycleAccess, CycleLog, CycleService,
    CycleServiceError, FlowLevel, SqliteKvStore, SymptomLevel, SystemClock,
};
use log::warn;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "fitflow.sqlite3";
const DB_PATH_ENV: &str = "FITFLOW_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Snapshot card envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOverviewResponse {
    pub ok: bool,
    /// `allowed|missing_onboarding|not_applicable`, empty on storage errors.
    pub access: String,
    /// `Menstrual|Follicular|Ovulatory|Luteal`; `None` without an estimate.
    pub phase: Option<String>,
    pub day_in_cycle: Option<u32>,
    pub cycle_length: Option<u32>,
    pub days_until_next: Option<u32>,
    pub next_period_start: Option<String>,
    pub workout_tip: String,
    pub diet_tip: String,
    /// Onboarding "typical flow" answer; `None` when blank.
    pub typical_flow: Option<String>,
    /// Onboarding "typical cramps" answer; `None` when blank.
    pub typical_cramps: Option<String>,
    pub message: String,
}

impl CycleOverviewResponse {
    fn failure(access: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            access: access.to_string(),
            phase: None,
            day_in_cycle: None,
            cycle_length: None,
            days_until_next: None,
            next_period_start: None,
            workout_tip: String::new(),
            diet_tip: String::new(),
            typical_flow: None,
            typical_cramps: None,
            message: message.into(),
        }
    }
}

/// One calendar grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCellItem {
    pub day: Option<u32>,
    pub is_today: bool,
    pub is_period_window: bool,
}

/// Month grid envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleCalendarResponse {
    pub ok: bool,
    pub month_label: String,
    pub cells: Vec<CalendarCellItem>,
    pub message: String,
}

/// Daily log envelope; fields use the stored encoding (`""` = not noted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleLogResponse {
    pub ok: bool,
    pub date: String,
    pub flow: String,
    pub cramps: String,
    pub bloating: String,
    pub message: String,
}

/// Saves the cycle-related onboarding answers for `user_id`.
///
/// Other questionnaire answers already stored for the user are kept.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - `mark_completed = true` also sets the questionnaire-completed flag.
/// - `period_flow_level`/`period_cramps` are free-form answers echoed back
///   by `cycle_overview`; empty clears them.
#[flutter_rust_bridge::frb(sync)]
pub fn onboarding_save(
    user_id: String,
    gender: String,
    last_period_start: String,
    cycle_length_days: String,
    period_flow_level: String,
    period_cramps: String,
    mark_completed: bool,
) -> ActionResponse {
    let result = with_cycle_service(|service| {
        let store = service.onboarding();
        let mut snapshot = store.load(&user_id)?.unwrap_or_default();
        snapshot.gender = gender.trim().to_string();
        snapshot.last_period_start = last_period_start.trim().to_string();
        snapshot.cycle_length_days = cycle_length_days.trim().to_string();
        snapshot.period_flow_level = period_flow_level.trim().to_string();
        snapshot.period_cramps = period_cramps.trim().to_string();
        store.save(&user_id, &snapshot)?;
        if mark_completed {
            store.mark_completed(&user_id)?;
        }
        Ok(())
    });

    match result {
        Ok(()) => ActionResponse::success("Onboarding saved."),
        Err(err) => ActionResponse::failure(format!("onboarding_save failed: {err}")),
    }
}

/// Returns today's cycle snapshot for `user_id`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Denied access returns `ok = false` with `access` naming the reason.
/// - `ok = true` with `phase = None` means "add your details".
#[flutter_rust_bridge::frb(sync)]
pub fn cycle_overview(user_id: String) -> CycleOverviewResponse {
    match with_cycle_service(|service| service.overview(&user_id)) {
        Ok(overview) => {
            let cycle = overview.cycle;
            CycleOverviewResponse {
                ok: true,
                access: "allowed".to_string(),
                phase: cycle.map(|info| info.phase.label().to_string()),
                day_in_cycle: cycle.map(|info| info.day_in_cycle),
                cycle_length: cycle.map(|info| info.cycle_length),
                days_until_next: cycle.map(|info| info.days_until_next),
                next_period_start: cycle.map(|info| format_calendar_date(info.next_period_start)),
                workout_tip: overview.workout_tip.to_string(),
                diet_tip: overview.diet_tip.to_string(),
                typical_flow: overview.typical_flow,
                typical_cramps: overview.typical_cramps,
                message: if cycle.is_some() {
                    "Cycle estimated.".to_string()
                } else {
                    "Add your last period start and cycle length.".to_string()
                },
            }
        }
        Err(CallError::Service(CycleServiceError::AccessDenied(access))) => {
            CycleOverviewResponse::failure(access_label(&access), "Cycle tracking unavailable.")
        }
        Err(err) => CycleOverviewResponse::failure("", format!("cycle_overview failed: {err}")),
    }
}

/// Returns a month grid; `None` year/month means the current month.
#[flutter_rust_bridge::frb(sync)]
pub fn cycle_calendar(
    user_id: String,
    year: Option<i32>,
    month: Option<u32>,
) -> CycleCalendarResponse {
    let result = with_cycle_service(|service| match (year, month) {
        (Some(year), Some(month)) => service.calendar(&user_id, year, month),
        _ => service.current_calendar(&user_id),
    });

    match result {
        Ok(calendar) => CycleCalendarResponse {
            ok: true,
            month_label: calendar.month_label,
            cells: calendar
                .cells
                .into_iter()
                .map(|cell| CalendarCellItem {
                    day: cell.day,
                    is_today: cell.is_today,
                    is_period_window: cell.is_period_window,
                })
                .collect(),
            message: String::new(),
        },
        Err(err) => CycleCalendarResponse {
            ok: false,
            month_label: String::new(),
            cells: Vec::new(),
            message: format!("cycle_calendar failed: {err}"),
        },
    }
}

/// Reads the daily log for `date` (`YYYY-MM-DD`).
///
/// # FFI contract
/// - Absent entries return `ok = true` with empty fields.
#[flutter_rust_bridge::frb(sync)]
pub fn cycle_log_get(date: String) -> CycleLogResponse {
    let Some(day) = parse_calendar_date(&date) else {
        return CycleLogResponse {
            ok: false,
            date,
            flow: String::new(),
            cramps: String::new(),
            bloating: String::new(),
            message: "cycle_log_get failed: invalid date".to_string(),
        };
    };

    match with_cycle_service(|service| Ok(service.log_for(day))) {
        Ok(log) => CycleLogResponse {
            ok: true,
            date: format_calendar_date(day),
            flow: log.flow.as_str().to_string(),
            cramps: log.cramps.as_str().to_string(),
            bloating: log.bloating.as_str().to_string(),
            message: String::new(),
        },
        Err(err) => CycleLogResponse {
            ok: false,
            date: format_calendar_date(day),
            flow: String::new(),
            cramps: String::new(),
            bloating: String::new(),
            message: format!("cycle_log_get failed: {err}"),
        },
    }
}

/// Saves the daily log for `date`, replacing any earlier entry.
///
/// `flow`: `""|light|medium|heavy`; `cramps`/`bloating`:
/// `""|none|mild|moderate|severe`.
#[flutter_rust_bridge::frb(sync)]
pub fn cycle_log_save(
    date: String,
    flow: String,
    cramps: String,
    bloating: String,
) -> ActionResponse {
    let Some(day) = parse_calendar_date(&date) else {
        return ActionResponse::failure("cycle_log_save failed: invalid date");
    };
    let log = match parse_log(&flow, &cramps, &bloating) {
        Ok(log) => log,
        Err(message) => return ActionResponse::failure(format!("cycle_log_save failed: {message}")),
    };

    match with_cycle_service(|service| service.save_log(day, log)) {
        Ok(()) => ActionResponse::success("Log saved."),
        Err(err) => ActionResponse::failure(format!("cycle_log_save failed: {err}")),
    }
}

fn parse_log(flow: &str, cramps: &str, bloating: &str) -> Result<CycleLog, String> {
    let flow = FlowLevel::parse(flow).ok_or_else(|| format!("unknown flow `{flow}`"))?;
    let cramps =
        SymptomLevel::parse(cramps).ok_or_else(|| format!("unknown cramps level `{cramps}`"))?;
    let bloating = SymptomLevel::parse(bloating)
        .ok_or_else(|| format!("unknown bloating level `{bloating}`"))?;
    Ok(CycleLog {
        flow,
        cramps,
        bloating,
    })
}

fn access_label(access: &CycleAccess) -> &'static str {
    match access {
        CycleAccess::Allowed(_) => "allowed",
        CycleAccess::MissingOnboarding => "missing_onboarding",
        CycleAccess::NotApplicable => "not_applicable",
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

/// Failure of one FFI call before or inside the service.
#[derive(Debug)]
enum CallError {
    DbOpen(String),
    Service(CycleServiceError),
}

impl Display for CallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DbOpen(message) => write!(f, "DB open failed: {message}"),
            Self::Service(err) => write!(f, "{err}"),
        }
    }
}

fn with_cycle_service<T>(
    f: impl FnOnce(
        &CycleService<&SqliteKvStore<'_>, SystemClock>,
    ) -> Result<T, CycleServiceError>,
) -> Result<T, CallError> {
    let conn = open_db(resolve_db_path()).map_err(|err| {
        warn!("event=ffi_db_open module=ffi status=error error={err}");
        CallError::DbOpen(err.to_string())
    })?;
    let store = SqliteKvStore::new(&conn);
    let service = CycleService::new(&store, SystemClock);
    f(&service).map_err(CallError::Service)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, cycle_calendar, cycle_log_get, cycle_log_save, cycle_overview,
        init_logging, onboarding_save, parse_log, ping,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn overview_reports_missing_onboarding() {
        let response = cycle_overview(unique_token("missing"));
        assert!(!response.ok);
        assert_eq!(response.access, "missing_onboarding");
        assert!(response.phase.is_none());
    }

    #[test]
    fn overview_reports_not_applicable_profiles() {
        let user_id = unique_token("male");
        let saved = onboarding_save(
            user_id.clone(),
            "male".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            true,
        );
        assert!(saved.ok, "{}", saved.message);

        let response = cycle_overview(user_id);
        assert!(!response.ok);
        assert_eq!(response.access, "not_applicable");
    }

    #[test]
    fn overview_and_calendar_for_tracked_profile() {
        let user_id = unique_token("female");
        let saved = onboarding_save(
            user_id.clone(),
            "female".to_string(),
            "2024-01-01".to_string(),
            "28".to_string(),
            "Heavy".to_string(),
            String::new(),
            true,
        );
        assert!(saved.ok, "{}", saved.message);

        let overview = cycle_overview(user_id.clone());
        assert!(overview.ok, "{}", overview.message);
        let day = overview.day_in_cycle.expect("estimate should exist");
        assert!((1..=28).contains(&day));
        assert!(overview.phase.is_some());
        assert!(!overview.workout_tip.is_empty());
        assert_eq!(overview.typical_flow.as_deref(), Some("Heavy"));
        assert_eq!(overview.typical_cramps, None);

        let calendar = cycle_calendar(user_id.clone(), Some(2024), Some(2));
        assert!(calendar.ok, "{}", calendar.message);
        assert_eq!(calendar.month_label, "February 2024");
        assert_eq!(calendar.cells.iter().filter(|cell| cell.day.is_some()).count(), 29);

        let invalid = cycle_calendar(user_id, Some(2024), Some(13));
        assert!(!invalid.ok);
    }

    #[test]
    fn onboarding_save_rejects_unknown_gender() {
        let response = onboarding_save(
            unique_token("bad-gender"),
            "robot".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            false,
        );
        assert!(!response.ok);
        assert!(response.message.contains("gender"));
    }

    #[test]
    fn log_save_and_get_roundtrip() {
        let saved = cycle_log_save(
            "1999-03-04".to_string(),
            "heavy".to_string(),
            "mild".to_string(),
            "none".to_string(),
        );
        assert!(saved.ok, "{}", saved.message);

        let log = cycle_log_get("1999-03-04".to_string());
        assert!(log.ok, "{}", log.message);
        assert_eq!(log.flow, "heavy");
        assert_eq!(log.cramps, "mild");
        assert_eq!(log.bloating, "none");
    }

    #[test]
    fn log_get_rejects_invalid_date() {
        let response = cycle_log_get("tomorrow".to_string());
        assert!(!response.ok);
    }

    #[test]
    fn parse_log_rejects_unknown_levels() {
        assert!(parse_log("light", "", "").is_ok());
        let error = parse_log("light", "unbearable", "").unwrap_err();
        assert!(error.contains("cramps"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
