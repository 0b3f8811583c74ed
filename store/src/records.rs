// store/src/records.rs
use log::{debug, info};

use models::errors::{RecordsError, RecordsResult};
use models::identifiers::RecordId;
use models::medical::{
    Appointment, AppointmentDraft, Doctor, DoctorDraft, Patient, PatientDraft,
};
use models::dashboard::DashboardSummary;

use crate::clock::{Clock, SystemClock};

/// In-memory clinical records store. Owns the patient, doctor, and
/// appointment collections for the lifetime of one session; collections are
/// append-only and keyed by generated ids. All reads observe the most recent
/// completed write, there is exactly one mutating actor.
pub struct RecordsStore {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    clock: Box<dyn Clock>,
}

impl Default for RecordsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordsStore {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        RecordsStore {
            patients: Vec::new(),
            doctors: Vec::new(),
            appointments: Vec::new(),
            clock,
        }
    }

    /// Append a new patient under a fresh id and return the stored record.
    /// Duplicate names are allowed; identity is the id alone.
    pub fn add_patient(&mut self, draft: PatientDraft) -> &Patient {
        let patient = Patient::from_draft(RecordId::generate(), draft);
        info!("admitted patient {} ({})", patient.name, patient.id);
        let idx = self.patients.len();
        self.patients.push(patient);
        &self.patients[idx]
    }

    /// Append a new doctor under a fresh id. The assignment list starts
    /// empty regardless of the draft.
    pub fn add_doctor(&mut self, draft: DoctorDraft) -> &Doctor {
        let doctor = Doctor::from_draft(RecordId::generate(), draft);
        info!("registered doctor {} ({})", doctor.name, doctor.id);
        let idx = self.doctors.len();
        self.doctors.push(doctor);
        &self.doctors[idx]
    }

    /// Append a new appointment. The referenced patient and doctor ids are
    /// stored as written; nothing rejects a reference that does not resolve.
    pub fn add_appointment(&mut self, draft: AppointmentDraft) -> &Appointment {
        let appointment = Appointment::from_draft(RecordId::generate(), draft);
        if self.patient(appointment.patient_id).is_none() {
            debug!(
                "appointment {} references unknown patient {}",
                appointment.id, appointment.patient_id
            );
        }
        if self.doctor(appointment.doctor_id).is_none() {
            debug!(
                "appointment {} references unknown doctor {}",
                appointment.id, appointment.doctor_id
            );
        }
        info!(
            "scheduled {} appointment {} on {}",
            appointment.kind, appointment.id, appointment.date
        );
        let idx = self.appointments.len();
        self.appointments.push(appointment);
        &self.appointments[idx]
    }

    /// Record a patient under a doctor's care. The doctor must exist; the
    /// patient id is stored as written, with the same dangling tolerance as
    /// appointment references. Nothing prevents the same patient being
    /// listed under a second doctor; the assignment lookup resolves such
    /// ties by doctor insertion order.
    pub fn assign_patient(
        &mut self,
        doctor_id: RecordId,
        patient_id: RecordId,
    ) -> RecordsResult<()> {
        if self.patient(patient_id).is_none() {
            debug!("assigning unknown patient {} to doctor {}", patient_id, doctor_id);
        }
        let doctor = self
            .doctors
            .iter_mut()
            .find(|d| d.id == doctor_id)
            .ok_or(RecordsError::DoctorNotFound(doctor_id))?;
        doctor.patients.push(patient_id);
        info!("assigned patient {} to doctor {}", patient_id, doctor.name);
        Ok(())
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn patient(&self, id: RecordId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn doctor(&self, id: RecordId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn appointment(&self, id: RecordId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// The doctor a patient is assigned to, derived by scanning each
    /// doctor's assignment list in insertion order. Returns the earliest
    /// registered match, or `None` when no doctor lists the patient.
    pub fn find_assigned_doctor(&self, patient_id: RecordId) -> Option<&Doctor> {
        self.doctors
            .iter()
            .find(|d| d.patients.contains(&patient_id))
    }

    /// Appointments whose date equals the current calendar date, in
    /// insertion order. Not re-sorted by time.
    pub fn todays_appointments(&self) -> Vec<&Appointment> {
        let today = self.clock.today();
        self.appointments
            .iter()
            .filter(|a| a.date == today)
            .collect()
    }

    /// The first `n` patients in insertion order. The earliest-added records
    /// come first; callers wanting latest-first must reverse explicitly.
    pub fn recent_patients(&self, n: usize) -> &[Patient] {
        &self.patients[..n.min(self.patients.len())]
    }

    /// The first `n` appointments in insertion order.
    pub fn recent_appointments(&self, n: usize) -> &[Appointment] {
        &self.appointments[..n.min(self.appointments.len())]
    }

    /// Counters for the dashboard tiles. Active cases are the total patient
    /// count.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_patients: self.patients.len(),
            total_doctors: self.doctors.len(),
            todays_appointments: self.todays_appointments().len(),
            active_cases: self.patients.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RecordsStore;
    use crate::clock::FixedClock;
    use chrono::{NaiveDate, NaiveTime};
    use models::errors::RecordsError;
    use models::identifiers::RecordId;
    use models::medical::{
        AppointmentDraft, AppointmentStatus, AppointmentType, DoctorDraft, Gender, PatientDraft,
        Weekday,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn nine_am() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    fn patient_draft(name: &str) -> PatientDraft {
        PatientDraft {
            name: name.to_string(),
            age: 42,
            gender: Gender::Female,
            contact_number: "555-0100".to_string(),
            address: "12 Harbor Lane".to_string(),
            blood_group: "O+".to_string(),
            admission_date: date(2026, 8, 1),
            diagnosis: "hypertension".to_string(),
            medical_history: None,
            emergency_contact: None,
        }
    }

    fn doctor_draft(name: &str) -> DoctorDraft {
        DoctorDraft {
            name: name.to_string(),
            specialization: "Cardiology".to_string(),
            experience: 9,
            contact_number: "555-0199".to_string(),
            email: "doc@clinic.test".to_string(),
            availability: Weekday::WORK_WEEK.to_vec(),
            department: None,
            qualification: None,
        }
    }

    fn appointment_draft(
        patient_id: RecordId,
        doctor_id: RecordId,
        on: NaiveDate,
    ) -> AppointmentDraft {
        AppointmentDraft {
            patient_id,
            doctor_id,
            date: on,
            time: nine_am(),
            kind: AppointmentType::Checkup,
            status: AppointmentStatus::Scheduled,
            notes: None,
        }
    }

    fn store_at(today: NaiveDate) -> RecordsStore {
        RecordsStore::with_clock(Box::new(FixedClock(today)))
    }

    #[test]
    fn add_patient_assigns_fresh_id_and_echoes_draft() {
        let mut store = store_at(date(2026, 8, 7));
        let draft = patient_draft("Ana Silva");
        let created = store.add_patient(draft.clone()).clone();

        assert_eq!(created.name, draft.name);
        assert_eq!(created.age, draft.age);
        assert_eq!(created.gender, draft.gender);
        assert_eq!(created.admission_date, draft.admission_date);
        assert_eq!(created.diagnosis, draft.diagnosis);

        let second = store.add_patient(patient_draft("Ana Silva"));
        assert_ne!(created.id, second.id);
        assert_eq!(store.patients().len(), 2);
    }

    #[test]
    fn duplicate_patient_names_are_allowed() {
        let mut store = store_at(date(2026, 8, 7));
        store.add_patient(patient_draft("Jo Mason"));
        store.add_patient(patient_draft("Jo Mason"));
        assert_eq!(store.patients().len(), 2);
    }

    #[test]
    fn doctor_starts_with_no_patients() {
        let mut store = store_at(date(2026, 8, 7));
        let doctor = store.add_doctor(doctor_draft("Reyes"));
        assert!(doctor.patients.is_empty());
        assert_eq!(
            doctor.availability,
            vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday
            ]
        );
    }

    #[test]
    fn todays_appointments_filters_by_injected_date() {
        let today = date(2026, 8, 7);
        let mut store = store_at(today);
        let pid = store.add_patient(patient_draft("Ana")).id;
        let did = store.add_doctor(doctor_draft("Reyes")).id;

        let a = store.add_appointment(appointment_draft(pid, did, today)).id;
        store.add_appointment(appointment_draft(pid, did, date(2026, 8, 8)));
        let c = store.add_appointment(appointment_draft(pid, did, today)).id;

        let todays: Vec<_> = store.todays_appointments().iter().map(|x| x.id).collect();
        assert_eq!(todays, vec![a, c]);
    }

    #[test]
    fn todays_appointments_empty_when_nothing_matches() {
        let mut store = store_at(date(2026, 8, 7));
        let pid = store.add_patient(patient_draft("Ana")).id;
        let did = store.add_doctor(doctor_draft("Reyes")).id;
        store.add_appointment(appointment_draft(pid, did, date(2026, 8, 9)));
        assert!(store.todays_appointments().is_empty());
    }

    #[test]
    fn todays_appointments_is_idempotent_without_mutation() {
        let today = date(2026, 8, 7);
        let mut store = store_at(today);
        let pid = store.add_patient(patient_draft("Ana")).id;
        let did = store.add_doctor(doctor_draft("Reyes")).id;
        store.add_appointment(appointment_draft(pid, did, today));

        let first: Vec<_> = store.todays_appointments().into_iter().cloned().collect();
        let second: Vec<_> = store.todays_appointments().into_iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn find_assigned_doctor_returns_none_without_assignment() {
        let mut store = store_at(date(2026, 8, 7));
        let pid = store.add_patient(patient_draft("Ana")).id;
        store.add_doctor(doctor_draft("Reyes"));
        assert!(store.find_assigned_doctor(pid).is_none());
    }

    #[test]
    fn find_assigned_doctor_prefers_earliest_registered_match() {
        let mut store = store_at(date(2026, 8, 7));
        let pid = store.add_patient(patient_draft("Ana")).id;
        let first = store.add_doctor(doctor_draft("Reyes")).id;
        let second = store.add_doctor(doctor_draft("Okafor")).id;

        store.assign_patient(second, pid).unwrap();
        store.assign_patient(first, pid).unwrap();

        let assigned = store.find_assigned_doctor(pid).unwrap();
        assert_eq!(assigned.id, first);
    }

    #[test]
    fn assign_patient_requires_existing_doctor() {
        let mut store = store_at(date(2026, 8, 7));
        let pid = store.add_patient(patient_draft("Ana")).id;
        let missing = RecordId::generate();
        assert_eq!(
            store.assign_patient(missing, pid),
            Err(RecordsError::DoctorNotFound(missing))
        );
    }

    #[test]
    fn assign_patient_tolerates_unknown_patient_id() {
        let mut store = store_at(date(2026, 8, 7));
        let did = store.add_doctor(doctor_draft("Reyes")).id;
        let ghost = RecordId::generate();
        store.assign_patient(did, ghost).unwrap();
        assert_eq!(store.doctor(did).unwrap().patients, vec![ghost]);
    }

    #[test]
    fn recent_patients_takes_insertion_order_prefix() {
        let mut store = store_at(date(2026, 8, 7));
        for name in ["A", "B", "C", "D", "E"] {
            store.add_patient(patient_draft(name));
        }
        let names: Vec<_> = store
            .recent_patients(3)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn recent_prefix_is_clamped_to_collection_size() {
        let mut store = store_at(date(2026, 8, 7));
        store.add_patient(patient_draft("A"));
        assert_eq!(store.recent_patients(5).len(), 1);
        assert!(store.recent_appointments(5).is_empty());
    }

    #[test]
    fn appointment_with_dangling_patient_is_still_created() {
        let today = date(2026, 8, 7);
        let mut store = store_at(today);
        let did = store.add_doctor(doctor_draft("Reyes")).id;
        let ghost = RecordId::generate();

        let appt = store
            .add_appointment(appointment_draft(ghost, did, today))
            .clone();
        assert_eq!(appt.patient_id, ghost);
        assert_eq!(store.appointments().len(), 1);
        assert!(store.patient(ghost).is_none());
    }

    #[test]
    fn dashboard_summary_counts_current_state() {
        let today = date(2026, 8, 7);
        let mut store = store_at(today);
        let pid = store.add_patient(patient_draft("Ana")).id;
        store.add_patient(patient_draft("Ben"));
        let did = store.add_doctor(doctor_draft("Reyes")).id;
        store.add_appointment(appointment_draft(pid, did, today));
        store.add_appointment(appointment_draft(pid, did, date(2026, 8, 9)));

        let summary = store.dashboard_summary();
        assert_eq!(summary.total_patients, 2);
        assert_eq!(summary.total_doctors, 1);
        assert_eq!(summary.todays_appointments, 1);
        assert_eq!(summary.active_cases, 2);
    }
}
