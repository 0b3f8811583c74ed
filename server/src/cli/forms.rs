// server/src/cli/forms.rs
//! The input boundary. Each form struct holds raw field values the way the
//! user typed them; the draft builders validate required fields, parse the
//! numeric and date fields, and apply the pre-population defaults the
//! appointment form carries. A failed build blocks submission, nothing
//! reaches the store.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use models::errors::{ValidationError, ValidationResult};
use models::identifiers::RecordId;
use models::medical::{
    AppointmentDraft, AppointmentStatus, AppointmentType, DoctorDraft, EmergencyContact, Gender,
    PatientDraft, Weekday,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientFormData {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact_number: String,
    pub address: String,
    pub blood_group: String,
    pub admission_date: String,
    pub diagnosis: String,
    pub medical_history: Vec<String>,
    pub emergency_name: String,
    pub emergency_relation: String,
    pub emergency_phone: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoctorFormData {
    pub name: String,
    pub specialization: String,
    pub experience: String,
    pub contact_number: String,
    pub email: String,
    /// Weekday names as checked. Empty means the field was never edited.
    pub availability: Vec<String>,
    pub department: String,
    pub qualification: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentFormData {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub status: String,
    pub notes: String,
}

fn required(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn required_number(field: &'static str, value: &str) -> ValidationResult<u32> {
    let raw = required(field, value)?;
    raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw,
    })
}

fn parse_date(value: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

fn parse_time(value: &str) -> ValidationResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| ValidationError::InvalidTime(value.to_string()))
}

fn parse_record_id(field: &'static str, value: &str) -> ValidationResult<RecordId> {
    let raw = required(field, value)?;
    RecordId::from_str(&raw)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn emergency_contact(form: &PatientFormData) -> ValidationResult<Option<EmergencyContact>> {
    let any_given = !form.emergency_name.trim().is_empty()
        || !form.emergency_relation.trim().is_empty()
        || !form.emergency_phone.trim().is_empty();
    if !any_given {
        return Ok(None);
    }
    Ok(Some(EmergencyContact {
        name: required("emergency-name", &form.emergency_name)?,
        relation: required("emergency-relation", &form.emergency_relation)?,
        phone: required("emergency-phone", &form.emergency_phone)?,
    }))
}

pub fn patient_draft(form: &PatientFormData) -> ValidationResult<PatientDraft> {
    let admission_raw = required("admission-date", &form.admission_date)?;
    let history: Vec<String> = form
        .medical_history
        .iter()
        .filter_map(|note| optional(note))
        .collect();

    Ok(PatientDraft {
        name: required("name", &form.name)?,
        age: required_number("age", &form.age)?,
        gender: Gender::from_str(&required("gender", &form.gender)?)?,
        contact_number: required("contact", &form.contact_number)?,
        address: required("address", &form.address)?,
        blood_group: required("blood-group", &form.blood_group)?,
        admission_date: parse_date(&admission_raw)?,
        diagnosis: required("diagnosis", &form.diagnosis)?,
        medical_history: if history.is_empty() { None } else { Some(history) },
        emergency_contact: emergency_contact(form)?,
    })
}

/// Weekday checkboxes cannot produce duplicates; typed input can, so
/// repeats collapse to their first occurrence. An untouched field defaults
/// to the working week.
fn availability(tokens: &[String]) -> ValidationResult<Vec<Weekday>> {
    if tokens.is_empty() {
        return Ok(Weekday::WORK_WEEK.to_vec());
    }
    let mut days = Vec::new();
    for token in tokens {
        let day = Weekday::from_str(token)?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    Ok(days)
}

pub fn doctor_draft(form: &DoctorFormData) -> ValidationResult<DoctorDraft> {
    Ok(DoctorDraft {
        name: required("name", &form.name)?,
        specialization: required("specialization", &form.specialization)?,
        experience: required_number("experience", &form.experience)?,
        contact_number: required("contact", &form.contact_number)?,
        email: required("email", &form.email)?,
        availability: availability(&form.availability)?,
        department: optional(&form.department),
        qualification: optional(&form.qualification),
    })
}

/// Builds the appointment draft, pre-populating the fields the form leaves
/// blank: today's date, 09:00, a scheduled checkup. The store performs no
/// defaulting of its own.
pub fn appointment_draft(
    form: &AppointmentFormData,
    today: NaiveDate,
) -> ValidationResult<AppointmentDraft> {
    let date = match optional(&form.date) {
        Some(raw) => parse_date(&raw)?,
        None => today,
    };
    let time = match optional(&form.time) {
        Some(raw) => parse_time(&raw)?,
        None => NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    };
    let kind = match optional(&form.kind) {
        Some(raw) => AppointmentType::from_str(&raw)?,
        None => AppointmentType::Checkup,
    };
    let status = match optional(&form.status) {
        Some(raw) => AppointmentStatus::from_str(&raw)?,
        None => AppointmentStatus::Scheduled,
    };

    Ok(AppointmentDraft {
        patient_id: parse_record_id("patient-id", &form.patient_id)?,
        doctor_id: parse_record_id("doctor-id", &form.doctor_id)?,
        date,
        time,
        kind,
        status,
        notes: optional(&form.notes),
    })
}
