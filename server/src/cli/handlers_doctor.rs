// server/src/cli/handlers_doctor.rs
use std::str::FromStr;

use models::identifiers::RecordId;
use models::medical::Doctor;
use store::RecordsStore;

use crate::cli::commands::DoctorCommand;
use crate::cli::forms;

pub fn handle_doctor_command(action: DoctorCommand, records: &mut RecordsStore) -> String {
    match action {
        DoctorCommand::Add(form) => match forms::doctor_draft(&form) {
            Ok(draft) => {
                let doctor = records.add_doctor(draft);
                format!("Added Dr. {} with id {}", doctor.name, doctor.id)
            }
            Err(e) => format!("Error: {}", e),
        },
        DoctorCommand::List => render_doctor_cards(records.doctors()),
        DoctorCommand::Assign {
            doctor_id,
            patient_id,
        } => assign(records, &doctor_id, &patient_id),
    }
}

fn render_doctor_cards(doctors: &[Doctor]) -> String {
    if doctors.is_empty() {
        return "No doctors on file.".to_string();
    }
    let mut out = String::new();
    for doctor in doctors {
        let days: Vec<String> = doctor.availability.iter().map(|d| d.to_string()).collect();
        out.push_str(&format!("Dr. {} - {}\n", doctor.name, doctor.specialization));
        out.push_str(&format!("  Experience: {} years\n", doctor.experience));
        out.push_str(&format!("  Email: {}\n", doctor.email));
        out.push_str(&format!("  Contact: {}\n", doctor.contact_number));
        if let Some(department) = &doctor.department {
            out.push_str(&format!("  Department: {}\n", department));
        }
        if let Some(qualification) = &doctor.qualification {
            out.push_str(&format!("  Qualification: {}\n", qualification));
        }
        out.push_str(&format!("  Available on: {}\n", days.join(", ")));
        out.push_str(&format!("  Assigned patients: {}\n", doctor.patients.len()));
        out.push_str(&format!("  Id: {}\n\n", doctor.id));
    }
    out
}

fn assign(records: &mut RecordsStore, raw_doctor_id: &str, raw_patient_id: &str) -> String {
    let doctor_id = match RecordId::from_str(raw_doctor_id) {
        Ok(id) => id,
        Err(e) => return format!("Error: {}", e),
    };
    let patient_id = match RecordId::from_str(raw_patient_id) {
        Ok(id) => id,
        Err(e) => return format!("Error: {}", e),
    };
    match records.assign_patient(doctor_id, patient_id) {
        Ok(()) => {
            let name = records
                .doctor(doctor_id)
                .map(|d| d.name.clone())
                .unwrap_or_default();
            format!("Assigned patient {} to Dr. {}", patient_id, name)
        }
        Err(e) => format!("Error: {}", e),
    }
}
