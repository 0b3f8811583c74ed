// models/src/medical/mod.rs

pub mod appointment;
pub mod doctor;
pub mod patient;

pub use self::appointment::{Appointment, AppointmentDraft, AppointmentStatus, AppointmentType};
pub use self::doctor::{Doctor, DoctorDraft, Weekday};
pub use self::patient::{EmergencyContact, Gender, Patient, PatientDraft};
