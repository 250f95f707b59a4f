//! Activity domain models and query parameters.
//!
//! An activity is stored under its display name, which doubles as the document
//! identity. Enrollment is the list of participant email addresses; capacity is
//! enforced by the service layer, never by storage.

use serde::Deserialize;
use storage::{
    bson::{self, doc, Document},
    path, StorageError,
};

use crate::model::activity::{ActivityDto, ScheduleDetailsDto};

/// When an activity meets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleDetails {
    /// Weekday names, e.g. `"Monday"`.
    pub days: Vec<String>,
    /// Zero-padded `"HH:MM"` start time.
    pub start_time: String,
    /// Zero-padded `"HH:MM"` end time.
    pub end_time: String,
}

/// An extracurricular activity and its current enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    /// Display name, stored as the document identity.
    #[serde(rename = "_id")]
    pub name: String,
    pub description: String,
    /// Human readable schedule, e.g. `"Mondays and Fridays, 3:15 PM - 4:45 PM"`.
    pub schedule: String,
    pub schedule_details: ScheduleDetails,
    pub max_participants: i32,
    /// Email addresses of enrolled students, in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Decodes a stored activity document.
    ///
    /// # Returns
    /// - `Ok(Activity)` - Document had every required field
    /// - `Err(StorageError::Decode)` - A field was missing or had the wrong type
    pub fn from_document(document: Document) -> Result<Self, StorageError> {
        Ok(bson::from_document(document)?)
    }

    /// Whether `email` is already enrolled.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|participant| participant == email)
    }

    /// Whether enrollment has reached capacity.
    pub fn is_full(&self) -> bool {
        self.participants.len() as i64 >= i64::from(self.max_participants)
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            name: self.name,
            description: self.description,
            schedule: self.schedule,
            schedule_details: ScheduleDetailsDto {
                days: self.schedule_details.days,
                start_time: self.schedule_details.start_time,
                end_time: self.schedule_details.end_time,
            },
            max_participants: self.max_participants,
            participants: self.participants,
        }
    }
}

/// Optional constraints on which activities are listed.
///
/// Every supplied constraint must hold. Times are compared lexically, which is
/// only meaningful for zero-padded `"HH:MM"` strings; controllers validate the
/// format before building a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Only activities meeting on this weekday.
    pub day: Option<String>,
    /// Only activities starting at or after this time.
    pub start_time: Option<String>,
    /// Only activities ending at or before this time.
    pub end_time: Option<String>,
}

impl ActivityFilter {
    /// Renders the filter as a collection query document.
    ///
    /// An empty filter renders as an empty document, which matches everything.
    pub fn into_query(self) -> Document {
        let mut query = Document::new();

        if let Some(day) = self.day {
            query.insert(path::SCHEDULE_DAYS, doc! { "$in": [day] });
        }
        if let Some(start_time) = self.start_time {
            query.insert(path::SCHEDULE_START_TIME, doc! { "$gte": start_time });
        }
        if let Some(end_time) = self.end_time {
            query.insert(path::SCHEDULE_END_TIME, doc! { "$lte": end_time });
        }

        query
    }
}
