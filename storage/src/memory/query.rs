//! Filter matching for the fallback collection.
//!
//! Three field paths are understood, each with a single operator:
//!
//! - `schedule_details.days` with `$in`: the document's days intersect the targets
//! - `schedule_details.start_time` with `$gte`: start time (default `"00:00"`) is at or after the bound
//! - `schedule_details.end_time` with `$lte`: end time (default `"23:59"`) is at or before the bound
//!
//! Times are `"HH:MM"` strings and compare lexically. Every condition must hold.
//! Any other path, operator or condition shape matches every document, which is
//! a known gap compared with MongoDB's query engine.

use mongodb::bson::{Bson, Document};

use crate::path;

const DEFAULT_START_TIME: &str = "00:00";
const DEFAULT_END_TIME: &str = "23:59";

/// Returns true when `payload` satisfies every condition in `filter`.
pub(super) fn matches(payload: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(field_path, condition)| condition_holds(payload, field_path, condition))
}

fn condition_holds(payload: &Document, field_path: &str, condition: &Bson) -> bool {
    let Bson::Document(condition) = condition else {
        return true;
    };
    let schedule = payload.get_document(path::SCHEDULE_DETAILS).ok();

    match field_path {
        path::SCHEDULE_DAYS => match condition.get_array("$in") {
            Ok(targets) => schedule
                .and_then(|schedule| schedule.get_array(path::DAYS).ok())
                .is_some_and(|days| targets.iter().any(|target| days.contains(target))),
            Err(_) => true,
        },
        path::SCHEDULE_START_TIME => match condition.get_str("$gte") {
            Ok(bound) => schedule_time(schedule, path::START_TIME, DEFAULT_START_TIME) >= bound,
            Err(_) => true,
        },
        path::SCHEDULE_END_TIME => match condition.get_str("$lte") {
            Ok(bound) => schedule_time(schedule, path::END_TIME, DEFAULT_END_TIME) <= bound,
            Err(_) => true,
        },
        _ => true,
    }
}

fn schedule_time<'a>(schedule: Option<&'a Document>, field: &str, default: &'a str) -> &'a str {
    schedule
        .and_then(|schedule| schedule.get_str(field).ok())
        .unwrap_or(default)
}
