// server/src/cli/handlers.rs
use store::RecordsStore;

use crate::cli::commands::CommandType;
use crate::cli::{handlers_appointment, handlers_dashboard, handlers_doctor, handlers_patient};

pub fn print_welcome_screen() {
    println!("Hospital Management Shell");
    println!("Records live in memory for this session only.");
    println!("Type 'help' for the command list, 'exit' to quit.");
    println!();
}

pub fn handle_command(command: CommandType, records: &mut RecordsStore) -> String {
    match command {
        CommandType::Patient(action) => handlers_patient::handle_patient_command(action, records),
        CommandType::Doctor(action) => handlers_doctor::handle_doctor_command(action, records),
        CommandType::Appointment(action) => {
            handlers_appointment::handle_appointment_command(action, records)
        }
        CommandType::Dashboard => handlers_dashboard::handle_dashboard_command(records),
        CommandType::Help => help_text(),
        // Handled by the session loop before dispatch
        CommandType::Clear | CommandType::Exit | CommandType::Unknown => String::new(),
    }
}

pub fn help_text() -> String {
    [
        "Commands:",
        "  patient add --name <n> --age <n> --gender <male|female|other> --contact <n>",
        "              --address <a> --blood-group <g> --admission-date <YYYY-MM-DD>",
        "              --diagnosis <d> [--history <note>]... [--emergency-name <n>",
        "              --emergency-relation <r> --emergency-phone <p>]",
        "  patient list",
        "  patient show <patient-id>",
        "  doctor add --name <n> --specialization <s> --experience <years>",
        "             --contact <n> --email <e> [--availability <Day,Day,...>]",
        "             [--department <d>] [--qualification <q>]",
        "  doctor list",
        "  doctor assign <doctor-id> <patient-id>",
        "  appointment schedule --patient <id> --doctor <id> [--date <YYYY-MM-DD>]",
        "              [--time <HH:MM>] [--type <checkup|follow-up|emergency|consultation>]",
        "              [--status <scheduled|completed|cancelled>] [--notes <text>]",
        "  appointment list",
        "  appointment today",
        "  dashboard",
        "  clear, help, exit",
    ]
    .join("\n")
}
