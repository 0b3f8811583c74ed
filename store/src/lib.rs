// store/src/lib.rs

pub mod clock;
pub mod records;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use records::RecordsStore;
pub use views::{AppointmentRow, PatientDetail};
