// store/src/views.rs
//! Read-only projections over the store for the list and detail surfaces.
//! A foreign id that no longer resolves renders as an absent name, never as
//! a failure.

use chrono::{NaiveDate, NaiveTime};
use log::debug;
use serde::Serialize;

use models::identifiers::RecordId;
use models::medical::{Appointment, AppointmentStatus, AppointmentType, Doctor, Patient};

use crate::records::RecordsStore;

/// One appointment with its related names resolved. `None` marks a dangling
/// reference and is displayed as a blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppointmentRow {
    pub id: RecordId,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: AppointmentType,
    pub status: AppointmentStatus,
}

/// A patient together with the doctor derived from the assignment lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientDetail<'a> {
    pub patient: &'a Patient,
    pub assigned_doctor: Option<&'a Doctor>,
}

fn resolve_row(store: &RecordsStore, appointment: &Appointment) -> AppointmentRow {
    let patient_name = store
        .patient(appointment.patient_id)
        .map(|p| p.name.clone());
    let doctor_name = store.doctor(appointment.doctor_id).map(|d| d.name.clone());
    if patient_name.is_none() || doctor_name.is_none() {
        debug!("appointment {} has unresolved references", appointment.id);
    }
    AppointmentRow {
        id: appointment.id,
        patient_name,
        doctor_name,
        date: appointment.date,
        time: appointment.time,
        kind: appointment.kind,
        status: appointment.status,
    }
}

/// Every appointment in insertion order, names resolved.
pub fn appointment_rows(store: &RecordsStore) -> Vec<AppointmentRow> {
    store
        .appointments()
        .iter()
        .map(|a| resolve_row(store, a))
        .collect()
}

/// The first `n` appointments in insertion order, names resolved.
pub fn recent_appointment_rows(store: &RecordsStore, n: usize) -> Vec<AppointmentRow> {
    store
        .recent_appointments(n)
        .iter()
        .map(|a| resolve_row(store, a))
        .collect()
}

/// Appointments dated today, names resolved.
pub fn todays_appointment_rows(store: &RecordsStore) -> Vec<AppointmentRow> {
    store
        .todays_appointments()
        .into_iter()
        .map(|a| resolve_row(store, a))
        .collect()
}

/// The detail panel for one patient, or `None` when the id does not
/// resolve.
pub fn patient_detail(store: &RecordsStore, patient_id: RecordId) -> Option<PatientDetail<'_>> {
    let patient = store.patient(patient_id)?;
    Some(PatientDetail {
        patient,
        assigned_doctor: store.find_assigned_doctor(patient_id),
    })
}
