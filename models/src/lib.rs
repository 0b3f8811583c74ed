// models/src/lib.rs

pub mod dashboard;
pub mod errors;
pub mod identifiers;

pub mod medical;

pub use dashboard::{DashboardCard, DashboardSummary, TrendIndicators};
pub use errors::{RecordsError, RecordsResult, ValidationError, ValidationResult};
pub use identifiers::RecordId;
pub use medical::{
    Appointment, AppointmentDraft, AppointmentStatus, AppointmentType, Doctor, DoctorDraft,
    EmergencyContact, Gender, Patient, PatientDraft, Weekday,
};
