// server/src/cli/interactive.rs
//! The interactive session loop and the line-to-command parser. One session
//! owns one store; records last exactly as long as the session does.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use store::RecordsStore;

use crate::cli::commands::{AppointmentCommand, CommandType, DoctorCommand, PatientCommand};
use crate::cli::forms::{AppointmentFormData, DoctorFormData, PatientFormData};
use crate::cli::handlers;

/// Flag values collected from a command tail. A flag may repeat; comma
/// separated values count as repeats.
type Flags = HashMap<String, Vec<String>>;

fn collect_flags(args: &[String]) -> Result<(Vec<String>, Flags), String> {
    let mut positionals = Vec::new();
    let mut flags: Flags = HashMap::new();
    let mut i = 0;
    while i < args.len() {
        if let Some(name) = args[i].strip_prefix("--") {
            let value = args
                .get(i + 1)
                .filter(|v| !v.starts_with("--"))
                .ok_or_else(|| format!("flag '--{}' requires a value", name))?;
            let entry = flags.entry(name.to_string()).or_default();
            for part in value.split(',') {
                entry.push(part.trim().to_string());
            }
            i += 2;
        } else {
            positionals.push(args[i].clone());
            i += 1;
        }
    }
    Ok((positionals, flags))
}

fn flag(flags: &Flags, name: &str) -> String {
    flags
        .get(name)
        .and_then(|values| values.first())
        .cloned()
        .unwrap_or_default()
}

fn flag_all(flags: &Flags, name: &str) -> Vec<String> {
    flags.get(name).cloned().unwrap_or_default()
}

fn parse_patient_command(args: &[String]) -> CommandType {
    let Some((action, rest)) = args.split_first() else {
        eprintln!("Usage: patient [add|list|show]");
        return CommandType::Unknown;
    };
    match action.to_lowercase().as_str() {
        "add" => match collect_flags(rest) {
            Ok((_, flags)) => CommandType::Patient(PatientCommand::Add(PatientFormData {
                name: flag(&flags, "name"),
                age: flag(&flags, "age"),
                gender: flag(&flags, "gender"),
                contact_number: flag(&flags, "contact"),
                address: flag(&flags, "address"),
                blood_group: flag(&flags, "blood-group"),
                admission_date: flag(&flags, "admission-date"),
                diagnosis: flag(&flags, "diagnosis"),
                medical_history: flag_all(&flags, "history"),
                emergency_name: flag(&flags, "emergency-name"),
                emergency_relation: flag(&flags, "emergency-relation"),
                emergency_phone: flag(&flags, "emergency-phone"),
            })),
            Err(msg) => {
                eprintln!("Error: {}", msg);
                CommandType::Unknown
            }
        },
        "list" => CommandType::Patient(PatientCommand::List),
        "show" | "view" => match rest.first() {
            Some(id) => CommandType::Patient(PatientCommand::Show {
                patient_id: id.clone(),
            }),
            None => {
                eprintln!("Usage: patient show <patient-id>");
                CommandType::Unknown
            }
        },
        other => {
            eprintln!("Unknown patient action '{}'", other);
            CommandType::Unknown
        }
    }
}

fn parse_doctor_command(args: &[String]) -> CommandType {
    let Some((action, rest)) = args.split_first() else {
        eprintln!("Usage: doctor [add|list|assign]");
        return CommandType::Unknown;
    };
    match action.to_lowercase().as_str() {
        "add" => match collect_flags(rest) {
            Ok((_, flags)) => CommandType::Doctor(DoctorCommand::Add(DoctorFormData {
                name: flag(&flags, "name"),
                specialization: flag(&flags, "specialization"),
                experience: flag(&flags, "experience"),
                contact_number: flag(&flags, "contact"),
                email: flag(&flags, "email"),
                availability: flag_all(&flags, "availability"),
                department: flag(&flags, "department"),
                qualification: flag(&flags, "qualification"),
            })),
            Err(msg) => {
                eprintln!("Error: {}", msg);
                CommandType::Unknown
            }
        },
        "list" => CommandType::Doctor(DoctorCommand::List),
        "assign" => match rest {
            [doctor_id, patient_id] => CommandType::Doctor(DoctorCommand::Assign {
                doctor_id: doctor_id.clone(),
                patient_id: patient_id.clone(),
            }),
            _ => {
                eprintln!("Usage: doctor assign <doctor-id> <patient-id>");
                CommandType::Unknown
            }
        },
        other => {
            eprintln!("Unknown doctor action '{}'", other);
            CommandType::Unknown
        }
    }
}

fn parse_appointment_command(args: &[String]) -> CommandType {
    let Some((action, rest)) = args.split_first() else {
        eprintln!("Usage: appointment [schedule|list|today]");
        return CommandType::Unknown;
    };
    match action.to_lowercase().as_str() {
        "schedule" | "add" => match collect_flags(rest) {
            Ok((_, flags)) => {
                CommandType::Appointment(AppointmentCommand::Schedule(AppointmentFormData {
                    patient_id: flag(&flags, "patient"),
                    doctor_id: flag(&flags, "doctor"),
                    date: flag(&flags, "date"),
                    time: flag(&flags, "time"),
                    kind: flag(&flags, "type"),
                    status: flag(&flags, "status"),
                    notes: flag(&flags, "notes"),
                }))
            }
            Err(msg) => {
                eprintln!("Error: {}", msg);
                CommandType::Unknown
            }
        },
        "list" => CommandType::Appointment(AppointmentCommand::List),
        "today" => CommandType::Appointment(AppointmentCommand::Today),
        other => {
            eprintln!("Unknown appointment action '{}'", other);
            CommandType::Unknown
        }
    }
}

pub fn parse_command(parts: &[String]) -> CommandType {
    let Some((head, rest)) = parts.split_first() else {
        return CommandType::Unknown;
    };
    match head.to_lowercase().as_str() {
        "exit" | "quit" | "q" => CommandType::Exit,
        "clear" => CommandType::Clear,
        "help" => CommandType::Help,
        "dashboard" => CommandType::Dashboard,
        "patient" => parse_patient_command(rest),
        "doctor" => parse_doctor_command(rest),
        "appointment" | "appt" => parse_appointment_command(rest),
        _ => CommandType::Unknown,
    }
}

pub fn run_cli_interactive(history_path: &Path, no_banner: bool) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let _ = rl.load_history(history_path);
    if !no_banner {
        handlers::print_welcome_screen();
    }

    let mut records = RecordsStore::new();

    loop {
        let readline = rl.readline("hms> ");
        match readline {
            Ok(line) => {
                let line_trim = line.trim();
                if line_trim.is_empty() {
                    continue;
                }
                rl.add_history_entry(line_trim).ok();

                let args = match shlex::split(line_trim) {
                    Some(a) => a,
                    None => {
                        eprintln!("Error: Malformed input. Please check quoting.");
                        continue;
                    }
                };
                if args.is_empty() {
                    continue;
                }

                let command = parse_command(&args);
                debug!("Parsed command: {:?}", command);

                match command {
                    CommandType::Exit => {
                        println!("Goodbye!");
                        break;
                    }
                    CommandType::Clear => {
                        print!("\x1B[2J\x1B[1;1H");
                    }
                    CommandType::Unknown => {
                        eprintln!("Unrecognized command. Type 'help' for the command list.");
                    }
                    command => {
                        println!("{}", handlers::handle_command(command, &mut records));
                    }
                }
            }

            Err(ReadlineError::Interrupted) => {
                println!("Ctrl-C received. Type 'exit' to quit.");
            }
            Err(ReadlineError::Eof) => {
                println!("Ctrl-D received. Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Readline error: {:?}", err);
                break;
            }
        }
    }

    rl.save_history(&history_path)
        .context("Failed to save history")?;
    Ok(())
}
