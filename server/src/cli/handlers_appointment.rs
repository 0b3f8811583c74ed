// server/src/cli/handlers_appointment.rs
use chrono::Utc;

use store::views::{self, AppointmentRow};
use store::RecordsStore;

use crate::cli::commands::AppointmentCommand;
use crate::cli::forms;

pub fn handle_appointment_command(
    action: AppointmentCommand,
    records: &mut RecordsStore,
) -> String {
    match action {
        AppointmentCommand::Schedule(form) => {
            match forms::appointment_draft(&form, Utc::now().date_naive()) {
                Ok(draft) => {
                    let appointment = records.add_appointment(draft);
                    format!(
                        "Scheduled {} appointment {} on {} at {}",
                        appointment.kind,
                        appointment.id,
                        appointment.date,
                        appointment.time.format("%H:%M")
                    )
                }
                Err(e) => format!("Error: {}", e),
            }
        }
        AppointmentCommand::List => render_rows(&views::appointment_rows(records)),
        AppointmentCommand::Today => {
            let rows = views::todays_appointment_rows(records);
            if rows.is_empty() {
                return "No appointments today.".to_string();
            }
            format!(
                "Today's Appointments ({})\n{}",
                rows.len(),
                render_rows(&rows)
            )
        }
    }
}

/// One line per appointment. Unresolved patient or doctor names render as
/// blanks, never as an error.
fn render_rows(rows: &[AppointmentRow]) -> String {
    if rows.is_empty() {
        return "No appointments on file.".to_string();
    }
    let mut out = format!(
        "{:<22} {:<22} {:<10} {:<5} {:<12} {:<9}\n",
        "Patient", "Doctor", "Date", "Time", "Type", "Status"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<22} {:<22} {:<10} {:<5} {:<12} {:<9}\n",
            row.patient_name.as_deref().unwrap_or(""),
            row.doctor_name.as_deref().unwrap_or(""),
            row.date.to_string(),
            row.time.format("%H:%M").to_string(),
            row.kind.to_string(),
            row.status.to_string()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::handle_appointment_command;
    use crate::cli::commands::AppointmentCommand;
    use crate::cli::forms::AppointmentFormData;
    use models::identifiers::RecordId;
    use store::RecordsStore;

    #[test]
    fn schedule_with_dangling_patient_still_succeeds() {
        let mut records = RecordsStore::new();
        let form = AppointmentFormData {
            patient_id: RecordId::generate().to_string(),
            doctor_id: RecordId::generate().to_string(),
            ..AppointmentFormData::default()
        };
        let reply = handle_appointment_command(AppointmentCommand::Schedule(form), &mut records);
        assert!(reply.starts_with("Scheduled checkup appointment "));
        assert_eq!(records.appointments().len(), 1);
    }

    #[test]
    fn listing_with_dangling_references_renders_blanks() {
        let mut records = RecordsStore::new();
        let form = AppointmentFormData {
            patient_id: RecordId::generate().to_string(),
            doctor_id: RecordId::generate().to_string(),
            ..AppointmentFormData::default()
        };
        handle_appointment_command(AppointmentCommand::Schedule(form), &mut records);

        let listing = handle_appointment_command(AppointmentCommand::List, &mut records);
        assert!(listing.contains("checkup"));
        assert!(listing.contains("scheduled"));
    }

    #[test]
    fn malformed_id_blocks_submission() {
        let mut records = RecordsStore::new();
        let form = AppointmentFormData {
            patient_id: "patient-1".to_string(),
            doctor_id: RecordId::generate().to_string(),
            ..AppointmentFormData::default()
        };
        let reply = handle_appointment_command(AppointmentCommand::Schedule(form), &mut records);
        assert!(reply.starts_with("Error: "));
        assert!(records.appointments().is_empty());
    }
}
