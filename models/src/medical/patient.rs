// models/src/medical/patient.rs
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::identifiers::RecordId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ValidationError::UnknownGender(s.to_string())),
        }
    }
}

/// Next of kin reachable in an emergency. Optional on admission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub relation: String,
    pub phone: String,
}

/// An admitted patient. Records are append-only; nothing mutates a patient
/// in place after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact_number: String,
    pub address: String,
    pub blood_group: String,
    pub admission_date: NaiveDate,
    pub diagnosis: String,
    /// Free-text history notes, oldest first.
    pub medical_history: Option<Vec<String>>,
    pub emergency_contact: Option<EmergencyContact>,
}

/// Validated form output for a new patient, prior to id assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDraft {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact_number: String,
    pub address: String,
    pub blood_group: String,
    pub admission_date: NaiveDate,
    pub diagnosis: String,
    pub medical_history: Option<Vec<String>>,
    pub emergency_contact: Option<EmergencyContact>,
}

impl Patient {
    /// Promote a draft to a stored record under a freshly minted id.
    /// Every draft field is carried over unchanged.
    pub fn from_draft(id: RecordId, draft: PatientDraft) -> Self {
        Patient {
            id,
            name: draft.name,
            age: draft.age,
            gender: draft.gender,
            contact_number: draft.contact_number,
            address: draft.address,
            blood_group: draft.blood_group,
            admission_date: draft.admission_date,
            diagnosis: draft.diagnosis,
            medical_history: draft.medical_history,
            emergency_contact: draft.emergency_contact,
        }
    }
}
