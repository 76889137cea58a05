//! Tabular rendering of core records.
//!
//! # Responsibility
//! - Turn record lists into bordered console tables.
//! - Print the uniform "No data found." line for empty results, which are
//!   not errors.

use comfy_table::{presets::UTF8_FULL, Cell, Table};
use mediward_core::{Appointment, Doctor, Patient};

fn print_table(title: &str, header: Vec<&str>, rows: Vec<Vec<String>>) {
    if rows.is_empty() {
        println!("No data found.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.iter().map(Cell::new));
    for row in rows {
        table.add_row(row.iter().map(Cell::new));
    }

    if !title.is_empty() {
        println!("\n{title}");
    }
    println!("{table}");
}

pub fn print_doctors(title: &str, doctors: &[Doctor]) {
    print_table(
        title,
        vec!["ID", "Full name", "Specialization", "Phone", "Email", "Experience (y)"],
        doctors
            .iter()
            .map(|d| {
                vec![
                    d.doctor_id.to_string(),
                    d.full_name.clone(),
                    d.specialization.clone().unwrap_or_default(),
                    d.phone_number.clone().unwrap_or_default(),
                    d.email.clone().unwrap_or_default(),
                    d.years_of_experience.to_string(),
                ]
            })
            .collect(),
    );
}

pub fn print_patients(title: &str, patients: &[Patient]) {
    print_table(
        title,
        vec!["ID", "Full name", "Date of birth", "Gender", "Address", "Phone", "Email"],
        patients
            .iter()
            .map(|p| {
                vec![
                    p.patient_id.to_string(),
                    p.full_name.clone(),
                    p.date_of_birth.format("%Y-%m-%d").to_string(),
                    p.gender.as_str().to_string(),
                    p.address.clone().unwrap_or_default(),
                    p.phone_number.clone().unwrap_or_default(),
                    p.email.clone().unwrap_or_default(),
                ]
            })
            .collect(),
    );
}

pub fn print_appointments(title: &str, appointments: &[Appointment]) {
    print_table(
        title,
        vec!["ID", "Patient", "Doctor", "Date", "Reason", "Status"],
        appointments
            .iter()
            .map(|a| {
                vec![
                    a.appointment_id.to_string(),
                    format!("{} (#{})", a.patient_name, a.patient_id),
                    match (&a.doctor_name, a.doctor_id) {
                        (Some(name), Some(id)) => format!("{name} (#{id})"),
                        _ => "-".to_string(),
                    },
                    a.appointment_date.format("%Y-%m-%d").to_string(),
                    a.reason.clone(),
                    a.status.as_str().to_string(),
                ]
            })
            .collect(),
    );
}
