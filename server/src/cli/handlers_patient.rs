// server/src/cli/handlers_patient.rs
use std::str::FromStr;

use models::identifiers::RecordId;
use models::medical::Patient;
use store::views;
use store::RecordsStore;

use crate::cli::commands::PatientCommand;
use crate::cli::forms;

pub fn handle_patient_command(action: PatientCommand, records: &mut RecordsStore) -> String {
    match action {
        PatientCommand::Add(form) => match forms::patient_draft(&form) {
            Ok(draft) => {
                let patient = records.add_patient(draft);
                format!("Added patient {} with id {}", patient.name, patient.id)
            }
            Err(e) => format!("Error: {}", e),
        },
        PatientCommand::List => render_patient_table(records.patients()),
        PatientCommand::Show { patient_id } => show_patient(records, &patient_id),
    }
}

fn render_patient_table(patients: &[Patient]) -> String {
    if patients.is_empty() {
        return "No patients on file.".to_string();
    }
    let mut out = format!(
        "{:<22} {:>3}  {:<7} {:<14} {:<10}  Id\n",
        "Name", "Age", "Gender", "Contact", "Admitted"
    );
    for p in patients {
        out.push_str(&format!(
            "{:<22} {:>3}  {:<7} {:<14} {:<10}  {}\n",
            p.name,
            p.age,
            p.gender.to_string(),
            p.contact_number,
            p.admission_date.to_string(),
            p.id
        ));
    }
    out
}

fn show_patient(records: &RecordsStore, raw_id: &str) -> String {
    let id = match RecordId::from_str(raw_id) {
        Ok(id) => id,
        Err(e) => return format!("Error: {}", e),
    };
    let Some(detail) = views::patient_detail(records, id) else {
        return format!("No patient with id {}", id);
    };

    let patient = detail.patient;
    let mut out = format!("Patient: {}\n", patient.name);
    out.push_str(&format!("Id: {}\n", patient.id));
    out.push_str(&format!(
        "Age: {} years    Blood Group: {}\n",
        patient.age, patient.blood_group
    ));
    out.push_str(&format!("Gender: {}\n", patient.gender));
    out.push_str(&format!("Contact: {}\n", patient.contact_number));
    out.push_str(&format!("Address: {}\n", patient.address));
    out.push_str(&format!("Admission Date: {}\n", patient.admission_date));
    out.push_str(&format!("Diagnosis: {}\n", patient.diagnosis));

    match detail.assigned_doctor {
        Some(doctor) => out.push_str(&format!(
            "Assigned Doctor: Dr. {} ({})\n",
            doctor.name, doctor.specialization
        )),
        None => out.push_str("Assigned Doctor: none\n"),
    }

    if let Some(history) = &patient.medical_history {
        out.push_str("Medical History:\n");
        for note in history {
            out.push_str(&format!("  - {}\n", note));
        }
    }
    if let Some(contact) = &patient.emergency_contact {
        out.push_str(&format!(
            "Emergency Contact: {} ({}) {}\n",
            contact.name, contact.relation, contact.phone
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::handle_patient_command;
    use crate::cli::commands::PatientCommand;
    use crate::cli::forms::PatientFormData;
    use store::RecordsStore;

    fn valid_form() -> PatientFormData {
        PatientFormData {
            name: "Ana Silva".to_string(),
            age: "42".to_string(),
            gender: "female".to_string(),
            contact_number: "555-0100".to_string(),
            address: "12 Harbor Lane".to_string(),
            blood_group: "O+".to_string(),
            admission_date: "2026-08-01".to_string(),
            diagnosis: "hypertension".to_string(),
            ..PatientFormData::default()
        }
    }

    #[test]
    fn add_reports_the_new_record_id() {
        let mut records = RecordsStore::new();
        let reply = handle_patient_command(PatientCommand::Add(valid_form()), &mut records);
        assert!(reply.starts_with("Added patient Ana Silva with id "));
        assert_eq!(records.patients().len(), 1);
    }

    #[test]
    fn invalid_form_blocks_submission_inline() {
        let mut records = RecordsStore::new();
        let mut form = valid_form();
        form.age = "forty".to_string();
        let reply = handle_patient_command(PatientCommand::Add(form), &mut records);
        assert!(reply.starts_with("Error: "));
        assert!(records.patients().is_empty());
    }

    #[test]
    fn show_with_unknown_id_degrades_to_a_message() {
        let mut records = RecordsStore::new();
        let id = models::identifiers::RecordId::generate();
        let reply = handle_patient_command(
            PatientCommand::Show {
                patient_id: id.to_string(),
            },
            &mut records,
        );
        assert_eq!(reply, format!("No patient with id {}", id));
    }
}
