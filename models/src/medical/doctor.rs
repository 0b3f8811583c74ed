// models/src/medical/doctor.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::identifiers::RecordId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday through Friday, the availability a doctor record starts with
    /// when the form is submitted untouched.
    pub const WORK_WEEK: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Weekday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(ValidationError::UnknownWeekday(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub specialization: String,
    /// Years of practice.
    pub experience: u32,
    pub contact_number: String,
    pub email: String,
    /// Weekdays the doctor sees patients. Checkbox-sourced, duplicate-free.
    pub availability: Vec<Weekday>,
    /// Ids of patients assigned to this doctor, in assignment order.
    /// A patient's doctor is derived by scanning these, not stored on the
    /// patient record.
    pub patients: Vec<RecordId>,
    pub department: Option<String>,
    pub qualification: Option<String>,
}

/// Validated form output for a new doctor. The assignment list is not part
/// of the form; every doctor starts with no patients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorDraft {
    pub name: String,
    pub specialization: String,
    pub experience: u32,
    pub contact_number: String,
    pub email: String,
    pub availability: Vec<Weekday>,
    pub department: Option<String>,
    pub qualification: Option<String>,
}

impl Doctor {
    pub fn from_draft(id: RecordId, draft: DoctorDraft) -> Self {
        Doctor {
            id,
            name: draft.name,
            specialization: draft.specialization,
            experience: draft.experience,
            contact_number: draft.contact_number,
            email: draft.email,
            availability: draft.availability,
            patients: Vec::new(),
            department: draft.department,
            qualification: draft.qualification,
        }
    }
}
