//! Timeframe chart assembly.
//!
//! The upstream backends deliver two differently-shaped price series: an
//! intraday series (several recent trading days of 5-minute samples) and a
//! daily-full series (one close per session, a year or more back). Both come
//! most-recent-first. [`assemble`] reshapes them into the single ascending
//! sequence of [`ChartPoint`]s a chart needs for one [`Timeframe`]:
//!
//! | Timeframe | Source | Window | Label |
//! |---|---|---|---|
//! | `1D` | intraday | latest trading day, fixed 09:30–15:55 grid | `HH:MM` |
//! | `5D` | intraday | latest 5 trading days | `YYYY-MM-DD HH:MM:SS` |
//! | `1M` | daily | latest 21 sessions | `YYYY-MM-DD` |
//! | `YTD` | daily | sessions in the calendar year | `YYYY-MM-DD` |
//! | `1Y` | daily | latest 251 sessions | `YYYY-MM-DD` |
//!
//! Assembly never fails. When the series a timeframe needs is empty the
//! result is empty, which callers render as "not yet loaded".
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use marketboard::chart::assemble_in_year;
//! use marketboard::types::Timeframe;
//! use marketboard::types::chart::IntradayBar;
//!
//! let at = NaiveDate::from_ymd_opt(2025, 3, 14)
//!     .and_then(|d| d.and_hms_opt(9, 30, 0))
//!     .unwrap();
//! let intraday = vec![IntradayBar::new(at, 100.0)];
//!
//! let points = assemble_in_year(Timeframe::OneDay, &intraday, &[], 2025);
//! assert_eq!(points.len(), 78);
//! assert_eq!(points[0].label, "09:30");
//! assert_eq!(points[0].price, Some(100.0));
//! assert!(points[1..].iter().all(|p| p.price.is_none()));
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Datelike, Local, NaiveDate, Timelike};

use crate::constants::chart::{
    FIVE_DAY_SESSIONS, ONE_MONTH_SESSIONS, ONE_YEAR_SESSIONS, SESSION_CLOSE, SESSION_OPEN,
    SLOT_MINUTES, SLOTS_PER_SESSION,
};
use crate::types::Timeframe;
use crate::types::chart::{ChartPoint, DailyBar, IntradayBar, PriceChange};
use crate::types::de::{DAILY_FORMAT, INTRADAY_FORMAT};
use crate::types::quote::PriceChangeTable;

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Assemble the chart for `timeframe`, using the current local year for `YTD`.
pub fn assemble(timeframe: Timeframe, intraday: &[IntradayBar], daily: &[DailyBar]) -> Vec<ChartPoint> {
    assemble_in_year(timeframe, intraday, daily, Local::now().year())
}

/// Assemble the chart for `timeframe`; `year` selects the `YTD` window.
///
/// Both series are expected most-recent-first, as delivered upstream. The
/// output is ascending in time, except `1D` which follows the slot grid.
pub fn assemble_in_year(
    timeframe: Timeframe,
    intraday: &[IntradayBar],
    daily: &[DailyBar],
    year: i32,
) -> Vec<ChartPoint> {
    if !has_required_input(timeframe, intraday, daily) {
        return Vec::new();
    }

    match timeframe {
        Timeframe::OneDay => latest_session(intraday),
        Timeframe::FiveDays => latest_days(intraday, FIVE_DAY_SESSIONS),
        Timeframe::OneMonth => latest_sessions(daily, ONE_MONTH_SESSIONS),
        Timeframe::YearToDate => sessions_in_year(daily, year),
        Timeframe::OneYear => latest_sessions(daily, ONE_YEAR_SESSIONS),
    }
}

/// Whether the series `timeframe` is built from has been loaded.
pub fn has_required_input(timeframe: Timeframe, intraday: &[IntradayBar], daily: &[DailyBar]) -> bool {
    if timeframe.is_intraday() {
        !intraday.is_empty()
    } else {
        !daily.is_empty()
    }
}

/// Start times of the fixed intraday grid: `09:30`, `09:35`, …, `15:55`.
///
/// Each slot is named by the start of its 5-minute bar, so the last slot
/// ends at the 16:00 close. A sample stamped 16:00:00 is never plotted.
pub fn session_slots() -> impl Iterator<Item = (u32, u32)> {
    let open = SESSION_OPEN.0 * 60 + SESSION_OPEN.1;
    let close = SESSION_CLOSE.0 * 60 + SESSION_CLOSE.1;
    (open..close)
        .step_by(SLOT_MINUTES as usize)
        .map(|minute_of_day| (minute_of_day / 60, minute_of_day % 60))
}

/// Distinct trading days present in the intraday series, most recent first.
pub fn trading_days(intraday: &[IntradayBar]) -> Vec<NaiveDate> {
    let days: BTreeSet<NaiveDate> = intraday.iter().map(IntradayBar::trading_day).collect();
    days.into_iter().rev().collect()
}

fn latest_session(intraday: &[IntradayBar]) -> Vec<ChartPoint> {
    let Some(&latest) = trading_days(intraday).first() else {
        return Vec::new();
    };

    // Later samples overwrite earlier ones sharing a slot.
    let by_slot: HashMap<(u32, u32), Option<f64>> = intraday
        .iter()
        .filter(|bar| bar.trading_day() == latest)
        .map(|bar| ((bar.timestamp.hour(), bar.timestamp.minute()), bar.close))
        .collect();

    let mut points = Vec::with_capacity(SLOTS_PER_SESSION);
    points.extend(session_slots().map(|slot| {
        ChartPoint::new(format!("{:02}:{:02}", slot.0, slot.1), by_slot.get(&slot).copied().flatten())
    }));
    points
}

fn latest_days(intraday: &[IntradayBar], days: usize) -> Vec<ChartPoint> {
    let kept: HashSet<NaiveDate> = trading_days(intraday).into_iter().take(days).collect();

    intraday
        .iter()
        .rev()
        .filter(|bar| kept.contains(&bar.trading_day()))
        .map(|bar| ChartPoint::new(bar.timestamp.format(INTRADAY_FORMAT).to_string(), bar.close))
        .collect()
}

fn latest_sessions(daily: &[DailyBar], sessions: usize) -> Vec<ChartPoint> {
    daily[..sessions.min(daily.len())]
        .iter()
        .rev()
        .map(daily_point)
        .collect()
}

fn sessions_in_year(daily: &[DailyBar], year: i32) -> Vec<ChartPoint> {
    daily
        .iter()
        .rev()
        .filter(|bar| bar.date.year() == year)
        .map(daily_point)
        .collect()
}

fn daily_point(bar: &DailyBar) -> ChartPoint {
    ChartPoint::new(bar.date.format(DAILY_FORMAT).to_string(), bar.close)
}

// ---------------------------------------------------------------------------
// Price change
// ---------------------------------------------------------------------------

/// Derive the price change shown next to an assembled chart.
///
/// - `1D` with a previous close: `current - previous_close`.
/// - Otherwise, when the first point of `series` has a price:
///   `current - first_price`.
/// - Otherwise nothing is derived.
///
/// The percent figure is never computed locally; it comes from the upstream
/// `table` entry for the timeframe, and only accompanies a derived absolute
/// change.
pub fn price_change(
    timeframe: Timeframe,
    current_price: Option<f64>,
    previous_close: Option<f64>,
    series: &[ChartPoint],
    table: Option<&PriceChangeTable>,
) -> PriceChange {
    let Some(current) = current_price else {
        return PriceChange::default();
    };

    let reference = match (timeframe, previous_close) {
        (Timeframe::OneDay, Some(previous_close)) => Some(previous_close),
        _ => series.first().and_then(|point| point.price),
    };

    match reference {
        Some(reference) => PriceChange {
            absolute: Some(current - reference),
            percent: table.and_then(|t| t.for_timeframe(timeframe)),
        },
        None => PriceChange::default(),
    }
}
