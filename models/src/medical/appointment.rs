// models/src/medical/appointment.rs
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::identifiers::RecordId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentType {
    Checkup,
    #[serde(rename = "follow-up")]
    FollowUp,
    Emergency,
    Consultation,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Checkup => write!(f, "checkup"),
            AppointmentType::FollowUp => write!(f, "follow-up"),
            AppointmentType::Emergency => write!(f, "emergency"),
            AppointmentType::Consultation => write!(f, "consultation"),
        }
    }
}

impl FromStr for AppointmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "checkup" => Ok(AppointmentType::Checkup),
            "follow-up" | "followup" => Ok(AppointmentType::FollowUp),
            "emergency" => Ok(AppointmentType::Emergency),
            "consultation" => Ok(AppointmentType::Consultation),
            _ => Err(ValidationError::UnknownAppointmentType(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            _ => Err(ValidationError::UnknownAppointmentStatus(s.to_string())),
        }
    }
}

/// A booked visit. The patient and doctor ids are kept as written even if
/// they never resolve; rendering treats a missing related record as an
/// expected, displayable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

/// Validated form output for a new appointment. Defaults (today, 09:00,
/// checkup, scheduled) belong to the form layer that produces this draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl Appointment {
    pub fn from_draft(id: RecordId, draft: AppointmentDraft) -> Self {
        Appointment {
            id,
            patient_id: draft.patient_id,
            doctor_id: draft.doctor_id,
            date: draft.date,
            time: draft.time,
            kind: draft.kind,
            status: draft.status,
            notes: draft.notes,
        }
    }
}
