// server/src/cli/handlers_dashboard.rs
use models::dashboard::TrendIndicators;
use store::views;
use store::RecordsStore;

const RECENT_LIMIT: usize = 5;

pub fn handle_dashboard_command(records: &RecordsStore) -> String {
    let summary = records.dashboard_summary();
    let trends = TrendIndicators::default();

    let mut out = String::from("Dashboard\n---------\n");
    for card in summary.cards(&trends) {
        out.push_str(&format!(
            "{:<22} {:>5}   {:+}%\n",
            card.title, card.value, card.trend_pct
        ));
    }

    out.push_str("\nRecent Appointments\n");
    let rows = views::recent_appointment_rows(records, RECENT_LIMIT);
    if rows.is_empty() {
        out.push_str("  none\n");
    }
    for row in rows {
        out.push_str(&format!(
            "  {} with Dr. {}  {} {}\n",
            row.patient_name.as_deref().unwrap_or(""),
            row.doctor_name.as_deref().unwrap_or(""),
            row.date,
            row.time.format("%H:%M")
        ));
    }

    out.push_str("\nRecent Patients\n");
    let patients = records.recent_patients(RECENT_LIMIT);
    if patients.is_empty() {
        out.push_str("  none\n");
    }
    for patient in patients {
        out.push_str(&format!("  {} - {}\n", patient.name, patient.diagnosis));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::handle_dashboard_command;
    use models::medical::{DoctorDraft, Gender, PatientDraft, Weekday};
    use store::RecordsStore;

    fn patient_draft(name: &str) -> PatientDraft {
        PatientDraft {
            name: name.to_string(),
            age: 30,
            gender: Gender::Other,
            contact_number: "555-0101".to_string(),
            address: "4 Elm Court".to_string(),
            blood_group: "B+".to_string(),
            admission_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            diagnosis: "migraine".to_string(),
            medical_history: None,
            emergency_contact: None,
        }
    }

    #[test]
    fn dashboard_shows_counters_and_static_trends() {
        let mut records = RecordsStore::new();
        records.add_patient(patient_draft("Ana"));
        records.add_patient(patient_draft("Ben"));
        records.add_doctor(DoctorDraft {
            name: "Reyes".to_string(),
            specialization: "Neurology".to_string(),
            experience: 11,
            contact_number: "555-0150".to_string(),
            email: "reyes@clinic.test".to_string(),
            availability: Weekday::WORK_WEEK.to_vec(),
            department: None,
            qualification: None,
        });

        let out = handle_dashboard_command(&records);
        assert!(out.contains("Total Patients"));
        assert!(out.contains("+12%"));
        assert!(out.contains("-8%"));
        assert!(out.contains("Ana - migraine"));
    }

    #[test]
    fn recent_patients_keeps_insertion_order() {
        let mut records = RecordsStore::new();
        for name in ["A", "B", "C", "D", "E", "F"] {
            records.add_patient(patient_draft(name));
        }
        let out = handle_dashboard_command(&records);
        assert!(out.contains("A - migraine"));
        assert!(!out.contains("F - migraine"));
    }
}
