// server/src/cli/commands.rs
use crate::cli::forms::{AppointmentFormData, DoctorFormData, PatientFormData};

/// A parsed shell command. Form payloads carry the raw field values exactly
/// as typed; validation happens when the form is submitted to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandType {
    Patient(PatientCommand),
    Doctor(DoctorCommand),
    Appointment(AppointmentCommand),
    Dashboard,
    Help,
    Clear,
    Exit,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientCommand {
    Add(PatientFormData),
    List,
    Show { patient_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoctorCommand {
    Add(DoctorFormData),
    List,
    Assign {
        doctor_id: String,
        patient_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentCommand {
    Schedule(AppointmentFormData),
    List,
    Today,
}
