//! Menu loops and record flows.
//!
//! # Responsibility
//! - Map menu choices onto core service operations.
//! - Collect and validate every field before it reaches a repository.
//!
//! # Invariants
//! - Storage errors are reported and the session continues at the same
//!   menu; nothing after startup terminates the process.
//! - An aborted prompt (EOF) cancels the current action, not the session.

use crate::prompt::{read_id, read_line, read_optional, read_valid};
use crate::render::{print_appointments, print_doctors, print_patients};
use mediward_core::validate;
use mediward_core::{
    AppointmentPatch, AppointmentService, AppointmentStatus, DoctorService, Gender,
    NewAppointment, NewDoctor, NewPatient, PatientService, ScheduleError, SortOrder,
    SqliteAppointmentRepository, SqliteDoctorRepository, SqlitePatientRepository,
};
use rusqlite::Connection;

type CliDoctorService<'c> = DoctorService<SqliteDoctorRepository<'c>>;
type CliPatientService<'c> = PatientService<SqlitePatientRepository<'c>>;
type CliAppointmentService<'c> = AppointmentService<
    SqliteAppointmentRepository<'c>,
    SqlitePatientRepository<'c>,
    SqliteDoctorRepository<'c>,
>;

/// Runs the home menu until the operator exits.
pub fn home(conn: &Connection) {
    let doctors = DoctorService::new(SqliteDoctorRepository::new(conn));
    let patients = PatientService::new(SqlitePatientRepository::new(conn));
    let appointments = AppointmentService::new(
        SqliteAppointmentRepository::new(conn),
        SqlitePatientRepository::new(conn),
        SqliteDoctorRepository::new(conn),
    );

    loop {
        println!(
            "\n==================== Hospital Records Manager ====================\n\
             \t1. Doctors\n\
             \t2. Patients\n\
             \t3. Appointments\n\
             \t4. Exit\n\
             =================================================================="
        );
        let Some(choice) = read_line("Select > ") else {
            break;
        };
        match choice.as_str() {
            "1" => doctors_menu(&doctors),
            "2" => patients_menu(&patients),
            "3" => appointments_menu(&appointments, &patients, &doctors),
            "4" => break,
            _ => println!("Invalid choice. Enter a number between 1 and 4."),
        }
    }
    println!("Goodbye.");
}

fn parse_order(value: &str) -> Option<SortOrder> {
    match value.to_ascii_lowercase().as_str() {
        "" | "asc" => Some(SortOrder::Asc),
        "desc" => Some(SortOrder::Desc),
        _ => None,
    }
}

fn read_order() -> Option<SortOrder> {
    loop {
        let value = read_line("Order (asc/desc) [asc]: ")?;
        match parse_order(&value) {
            Some(order) => return Some(order),
            None => println!("Enter asc or desc (blank for asc)"),
        }
    }
}

fn parse_years(value: &str) -> Option<u32> {
    value.parse().ok()
}

fn report_error(action: &str, err: impl std::fmt::Display) {
    println!("{action} failed: {err}");
}

// ------------------------------ doctors ------------------------------ //

fn doctors_menu(service: &CliDoctorService<'_>) {
    loop {
        println!(
            "\n==================== Doctors ====================\n\
             \t1. Add new doctor\n\
             \t2. List all\n\
             \t3. Search by id\n\
             \t4. Search by name\n\
             \t5. Sort by experience\n\
             \t6. Back"
        );
        let Some(choice) = read_line("Select > ") else {
            return;
        };
        match choice.as_str() {
            "1" => add_doctor(service),
            "2" => {
                let Some(order) = read_order() else { return };
                match service.list_all(order) {
                    Ok(doctors) => print_doctors("Doctors", &doctors),
                    Err(err) => report_error("Listing doctors", err),
                }
            }
            "3" => {
                let Some(id) = read_id("Doctor id: ") else {
                    return;
                };
                match service.find_by_id(id) {
                    Ok(Some(doctor)) => print_doctors("Doctor", &[doctor]),
                    Ok(None) => println!("No data found."),
                    Err(err) => report_error("Lookup", err),
                }
            }
            "4" => {
                let Some(needle) = read_valid(
                    "Name contains: ",
                    validate::required,
                    "Enter at least one character",
                ) else {
                    return;
                };
                let Some(order) = read_order() else { return };
                match service.find_by_name_contains(&needle, order) {
                    Ok(doctors) => print_doctors("Matching doctors", &doctors),
                    Err(err) => report_error("Search", err),
                }
            }
            "5" => {
                let Some(order) = read_order() else { return };
                match service.list_by_experience(order) {
                    Ok(doctors) => print_doctors("Doctors by experience", &doctors),
                    Err(err) => report_error("Listing doctors", err),
                }
            }
            "6" => return,
            _ => println!("Invalid choice."),
        }
    }
}

fn add_doctor(service: &CliDoctorService<'_>) {
    println!("\nAdd new doctor");

    let Some(full_name) = read_valid(
        "Full name           : ",
        validate::required,
        "Name cannot be empty",
    ) else {
        return;
    };

    match service.name_exists(&full_name) {
        Ok(true) => {
            let Some(answer) = read_line("A doctor with this name exists. Add anyway? (y/N): ")
            else {
                return;
            };
            if !answer.eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return;
            }
        }
        Ok(false) => {}
        Err(err) => {
            report_error("Duplicate check", err);
            return;
        }
    }

    let Some(specialization) = read_optional(
        "Specialization      : ",
        validate::required,
        "Specialization cannot be blank",
    ) else {
        return;
    };
    let Some(phone_number) = read_optional(
        "Phone number        : ",
        validate::is_valid_phone,
        "Invalid phone number (7-15 digits, optional leading +)",
    ) else {
        return;
    };
    let Some(email) = read_optional(
        "Email               : ",
        validate::is_valid_email,
        "Invalid email format",
    ) else {
        return;
    };
    let years_of_experience = loop {
        let Some(value) = read_line("Years of experience : ") else {
            return;
        };
        match parse_years(&value) {
            Some(years) => break years,
            None => println!("Years must be a non-negative number"),
        }
    };

    let doctor = NewDoctor {
        full_name,
        specialization,
        phone_number,
        email,
        years_of_experience,
    };
    match service.register(&doctor) {
        Ok(id) => println!("Doctor added with id {id}."),
        Err(err) => report_error("Adding doctor", err),
    }
}

// ------------------------------ patients ----------------------------- //

fn patients_menu(service: &CliPatientService<'_>) {
    loop {
        println!(
            "\n==================== Patients ====================\n\
             \t1. Add new patient\n\
             \t2. List all\n\
             \t3. Search by id\n\
             \t4. Search by name\n\
             \t5. Back"
        );
        let Some(choice) = read_line("Select > ") else {
            return;
        };
        match choice.as_str() {
            "1" => add_patient(service),
            "2" => {
                let Some(order) = read_order() else { return };
                match service.list_all(order) {
                    Ok(patients) => print_patients("Patients", &patients),
                    Err(err) => report_error("Listing patients", err),
                }
            }
            "3" => {
                let Some(id) = read_id("Patient id: ") else {
                    return;
                };
                match service.find_by_id(id) {
                    Ok(Some(patient)) => print_patients("Patient", &[patient]),
                    Ok(None) => println!("No data found."),
                    Err(err) => report_error("Lookup", err),
                }
            }
            "4" => {
                let Some(needle) = read_valid(
                    "Name contains: ",
                    validate::required,
                    "Enter at least one character",
                ) else {
                    return;
                };
                let Some(order) = read_order() else { return };
                match service.find_by_name_contains(&needle, order) {
                    Ok(patients) => print_patients("Matching patients", &patients),
                    Err(err) => report_error("Search", err),
                }
            }
            "5" => return,
            _ => println!("Invalid choice."),
        }
    }
}

fn add_patient(service: &CliPatientService<'_>) {
    println!("\nAdd new patient");

    let Some(full_name) = read_valid(
        "Full name                 : ",
        validate::required,
        "Name cannot be empty",
    ) else {
        return;
    };

    match service.name_exists(&full_name) {
        Ok(true) => {
            let Some(answer) = read_line("A patient with this name exists. Add anyway? (y/N): ")
            else {
                return;
            };
            if !answer.eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return;
            }
        }
        Ok(false) => {}
        Err(err) => {
            report_error("Duplicate check", err);
            return;
        }
    }

    let Some(dob_text) = read_valid(
        "Date of birth (YYYY-MM-DD): ",
        validate::is_valid_date,
        "Invalid date format (use YYYY-MM-DD)",
    ) else {
        return;
    };
    let Some(date_of_birth) = validate::parse_date(&dob_text) else {
        return;
    };

    let gender = loop {
        let Some(value) = read_line("Gender (Male/Female/Other): ") else {
            return;
        };
        match Gender::parse(&value) {
            Some(gender) => break gender,
            None => println!("Invalid gender"),
        }
    };

    let Some(address) = read_optional(
        "Address                   : ",
        validate::required,
        "Address cannot be blank",
    ) else {
        return;
    };
    let Some(phone_number) = read_optional(
        "Phone                     : ",
        validate::is_valid_phone,
        "Invalid phone number (7-15 digits, optional leading +)",
    ) else {
        return;
    };
    let Some(email) = read_optional(
        "Email                     : ",
        validate::is_valid_email,
        "Invalid email format",
    ) else {
        return;
    };

    let patient = NewPatient {
        full_name,
        date_of_birth,
        gender,
        address,
        phone_number,
        email,
    };
    match service.register(&patient) {
        Ok(id) => println!("Patient added with id {id}."),
        Err(err) => report_error("Adding patient", err),
    }
}

// ---------------------------- appointments --------------------------- //

fn appointments_menu(
    service: &CliAppointmentService<'_>,
    patients: &CliPatientService<'_>,
    doctors: &CliDoctorService<'_>,
) {
    loop {
        println!(
            "\n==================== Appointments ====================\n\
             \t1. Schedule new appointment\n\
             \t2. List all\n\
             \t3. Search by id\n\
             \t4. By patient\n\
             \t5. By doctor\n\
             \t6. Today's appointments\n\
             \t7. Update appointment\n\
             \t8. Back"
        );
        let Some(choice) = read_line("Select > ") else {
            return;
        };
        match choice.as_str() {
            "1" => schedule_appointment(service, patients, doctors),
            "2" => {
                let Some(order) = read_order() else { return };
                match service.list_all(order) {
                    Ok(rows) => print_appointments("Appointments", &rows),
                    Err(err) => report_error("Listing appointments", err),
                }
            }
            "3" => {
                let Some(id) = read_id("Appointment id: ") else {
                    return;
                };
                match service.find_by_id(id) {
                    Ok(Some(row)) => print_appointments("Appointment", &[row]),
                    Ok(None) => println!("No data found."),
                    Err(err) => report_error("Lookup", err),
                }
            }
            "4" => {
                let Some(id) = read_id("Patient id: ") else {
                    return;
                };
                match service.find_by_patient(id) {
                    Ok(rows) => print_appointments("Patient appointments", &rows),
                    Err(err) => report_error("Lookup", err),
                }
            }
            "5" => {
                let Some(id) = read_id("Doctor id: ") else {
                    return;
                };
                match service.find_by_doctor(id) {
                    Ok(rows) => print_appointments("Doctor appointments", &rows),
                    Err(err) => report_error("Lookup", err),
                }
            }
            "6" => match service.list_today() {
                Ok(rows) => print_appointments("Today's appointments", &rows),
                Err(err) => report_error("Listing appointments", err),
            },
            "7" => update_appointment(service),
            "8" => return,
            _ => println!("Invalid choice."),
        }
    }
}

fn schedule_appointment(
    service: &CliAppointmentService<'_>,
    patients: &CliPatientService<'_>,
    doctors: &CliDoctorService<'_>,
) {
    println!("\nSchedule new appointment");

    let patient_rows = match patients.list_all(SortOrder::Asc) {
        Ok(rows) => rows,
        Err(err) => {
            report_error("Listing patients", err);
            return;
        }
    };
    if patient_rows.is_empty() {
        println!("No patients available - add patients first.");
        return;
    }
    print_patients("Available patients", &patient_rows);

    let doctor_rows = match doctors.list_all(SortOrder::Asc) {
        Ok(rows) => rows,
        Err(err) => {
            report_error("Listing doctors", err);
            return;
        }
    };
    print_doctors("Available doctors", &doctor_rows);

    let Some(patient_id) = read_id("Patient id: ") else {
        return;
    };
    let doctor_id = loop {
        let Some(value) = read_line("Doctor id (blank for none): ") else {
            return;
        };
        if value.is_empty() {
            break None;
        }
        match value.parse::<i64>() {
            Ok(id) if id > 0 => break Some(id),
            _ => println!("Enter a numeric id or leave blank"),
        }
    };

    // New appointments may not be scheduled in the past; updates are free
    // to set any valid date.
    let Some(date_text) = read_valid(
        "Appointment date (YYYY-MM-DD): ",
        |v| validate::is_valid_date(v) && validate::is_future_or_today(v),
        "Invalid date (must be YYYY-MM-DD and not in the past)",
    ) else {
        return;
    };
    let Some(appointment_date) = validate::parse_date(&date_text) else {
        return;
    };

    let Some(reason) = read_valid(
        "Reason: ",
        validate::required,
        "Reason cannot be empty",
    ) else {
        return;
    };

    let status = loop {
        let Some(value) = read_line("Status [Pending/Done/Cancelled] (default Pending): ") else {
            return;
        };
        if value.is_empty() {
            break AppointmentStatus::Pending;
        }
        match AppointmentStatus::parse(&value) {
            Some(status) => break status,
            None => println!("Invalid status"),
        }
    };

    let appointment = NewAppointment {
        patient_id,
        doctor_id,
        appointment_date,
        reason,
        status,
    };
    match service.schedule(&appointment) {
        Ok(id) => println!("Appointment scheduled with id {id}."),
        Err(ScheduleError::UnknownPatient(id)) => println!("No patient with id {id}."),
        Err(ScheduleError::UnknownDoctor(id)) => println!("No doctor with id {id}."),
        Err(ScheduleError::Repo(err)) => report_error("Scheduling", err),
    }
}

fn update_appointment(service: &CliAppointmentService<'_>) {
    let Some(id) = read_id("Appointment id: ") else {
        return;
    };
    match service.find_by_id(id) {
        Ok(Some(current)) => print_appointments("Current", &[current]),
        Ok(None) => {
            println!("No data found.");
            return;
        }
        Err(err) => {
            report_error("Lookup", err);
            return;
        }
    }

    println!("Leave a field blank to keep its current value.");
    let mut patch = AppointmentPatch::default();

    let Some(patient_text) = read_line("New patient id: ") else {
        return;
    };
    if let Ok(pid) = patient_text.parse::<i64>() {
        patch.patient_id = Some(pid);
    }

    let Some(doctor_text) = read_line("New doctor id (`-` to clear): ") else {
        return;
    };
    if doctor_text == "-" {
        patch.doctor_id = Some(None);
    } else if let Ok(did) = doctor_text.parse::<i64>() {
        patch.doctor_id = Some(Some(did));
    }

    let Some(date_text) = read_line("New date (YYYY-MM-DD): ") else {
        return;
    };
    if !date_text.is_empty() {
        match validate::parse_date(&date_text) {
            Some(date) => patch.appointment_date = Some(date),
            None => {
                println!("Invalid date, field skipped.");
            }
        }
    }

    let Some(reason_text) = read_line("New reason: ") else {
        return;
    };
    if !reason_text.is_empty() {
        patch.reason = Some(reason_text);
    }

    let Some(status_text) = read_line("New status [Pending/Done/Cancelled]: ") else {
        return;
    };
    if !status_text.is_empty() {
        match AppointmentStatus::parse(&status_text) {
            Some(status) => patch.status = Some(status),
            None => println!("Invalid status, field skipped."),
        }
    }

    if patch.is_empty() {
        println!("Nothing to update.");
        return;
    }

    match service.update(id, &patch) {
        Ok(()) => println!("Appointment updated."),
        Err(err) => report_error("Update", err),
    }
}
