use chrono::{Local, NaiveDate};
use mediward_core::db::open_db_in_memory;
use mediward_core::{
    AppointmentPatch, AppointmentRepository, AppointmentStatus, DoctorRepository, Gender,
    NewAppointment, NewDoctor, NewPatient, PatientRepository, RepoError, SortOrder,
    SqliteAppointmentRepository, SqliteDoctorRepository, SqlitePatientRepository,
};
use rusqlite::Connection;

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

fn add_patient(conn: &Connection, name: &str) -> i64 {
    SqlitePatientRepository::new(conn)
        .add(&NewPatient::new(name, date("1990-05-01"), Gender::Female))
        .unwrap()
}

fn add_doctor(conn: &Connection, name: &str) -> i64 {
    SqliteDoctorRepository::new(conn)
        .add(&NewDoctor::named(name))
        .unwrap()
}

fn appointment(patient_id: i64, doctor_id: Option<i64>, on: &str, reason: &str) -> NewAppointment {
    NewAppointment {
        patient_id,
        doctor_id,
        appointment_date: date(on),
        reason: reason.to_string(),
        status: AppointmentStatus::Pending,
    }
}

#[test]
fn add_and_find_by_id_roundtrip_with_joined_names() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let doctor_id = add_doctor(&conn, "Dr. Smith");
    let repo = SqliteAppointmentRepository::new(&conn);

    let id = repo
        .add(&appointment(patient_id, Some(doctor_id), "2099-01-01", "Checkup"))
        .unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.appointment_id, id);
    assert_eq!(loaded.patient_id, patient_id);
    assert_eq!(loaded.patient_name, "Jane Doe");
    assert_eq!(loaded.doctor_id, Some(doctor_id));
    assert_eq!(loaded.doctor_name.as_deref(), Some("Dr. Smith"));
    assert_eq!(loaded.appointment_date, date("2099-01-01"));
    assert_eq!(loaded.reason, "Checkup");
    assert_eq!(loaded.status, AppointmentStatus::Pending);
}

#[test]
fn appointment_without_doctor_displays_with_missing_doctor() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let repo = SqliteAppointmentRepository::new(&conn);

    let id = repo
        .add(&appointment(patient_id, None, "2099-03-01", "Walk-in"))
        .unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.doctor_id, None);
    assert_eq!(loaded.doctor_name, None);
    assert_eq!(loaded.patient_name, "Jane Doe");
}

#[test]
fn list_all_orders_by_date() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let repo = SqliteAppointmentRepository::new(&conn);

    repo.add(&appointment(patient_id, None, "2099-02-01", "Second"))
        .unwrap();
    repo.add(&appointment(patient_id, None, "2099-01-01", "First"))
        .unwrap();
    repo.add(&appointment(patient_id, None, "2099-03-01", "Third"))
        .unwrap();

    let ascending: Vec<_> = repo
        .list_all(SortOrder::Asc)
        .unwrap()
        .into_iter()
        .map(|a| a.reason)
        .collect();
    assert_eq!(ascending, ["First", "Second", "Third"]);

    let descending: Vec<_> = repo
        .list_all(SortOrder::Desc)
        .unwrap()
        .into_iter()
        .map(|a| a.reason)
        .collect();
    assert_eq!(descending, ["Third", "Second", "First"]);
}

#[test]
fn find_by_patient_and_doctor_scope_results() {
    let conn = open_db_in_memory().unwrap();
    let jane = add_patient(&conn, "Jane Doe");
    let john = add_patient(&conn, "John Roe");
    let smith = add_doctor(&conn, "Dr. Smith");
    let jones = add_doctor(&conn, "Dr. Jones");
    let repo = SqliteAppointmentRepository::new(&conn);

    repo.add(&appointment(jane, Some(smith), "2099-01-01", "Jane/Smith"))
        .unwrap();
    repo.add(&appointment(jane, Some(jones), "2099-01-02", "Jane/Jones"))
        .unwrap();
    repo.add(&appointment(john, Some(smith), "2099-01-03", "John/Smith"))
        .unwrap();

    let janes = repo.find_by_patient(jane).unwrap();
    assert_eq!(janes.len(), 2);
    assert!(janes.iter().all(|a| a.patient_id == jane));

    let smiths = repo.find_by_doctor(smith).unwrap();
    assert_eq!(smiths.len(), 2);
    assert!(smiths.iter().all(|a| a.doctor_id == Some(smith)));

    assert!(repo.find_by_patient(999).unwrap().is_empty());
}

#[test]
fn list_on_filters_by_date_and_orders_by_status() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let repo = SqliteAppointmentRepository::new(&conn);

    let mut pending = appointment(patient_id, None, "2099-06-01", "pending one");
    pending.status = AppointmentStatus::Pending;
    let mut done = appointment(patient_id, None, "2099-06-01", "done one");
    done.status = AppointmentStatus::Done;
    let mut cancelled = appointment(patient_id, None, "2099-06-01", "cancelled one");
    cancelled.status = AppointmentStatus::Cancelled;
    let other_day = appointment(patient_id, None, "2099-06-02", "other day");

    repo.add(&pending).unwrap();
    repo.add(&done).unwrap();
    repo.add(&cancelled).unwrap();
    repo.add(&other_day).unwrap();

    let on_day = repo.list_on(date("2099-06-01")).unwrap();
    let statuses: Vec<_> = on_day.iter().map(|a| a.status).collect();
    // Text ordering: Cancelled < Done < Pending.
    assert_eq!(
        statuses,
        [
            AppointmentStatus::Cancelled,
            AppointmentStatus::Done,
            AppointmentStatus::Pending
        ]
    );
}

#[test]
fn list_today_sees_only_todays_rows() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let repo = SqliteAppointmentRepository::new(&conn);

    let today = Local::now().date_naive();
    repo.add(&NewAppointment {
        patient_id,
        doctor_id: None,
        appointment_date: today,
        reason: "today".to_string(),
        status: AppointmentStatus::Pending,
    })
    .unwrap();
    repo.add(&appointment(patient_id, None, "2099-01-01", "far future"))
        .unwrap();

    let rows = repo.list_today().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].reason, "today");
}

#[test]
fn update_status_only_leaves_other_fields_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let doctor_id = add_doctor(&conn, "Dr. Smith");
    let repo = SqliteAppointmentRepository::new(&conn);

    let id = repo
        .add(&appointment(patient_id, Some(doctor_id), "2099-01-01", "Checkup"))
        .unwrap();

    repo.update(id, &AppointmentPatch::status_only(AppointmentStatus::Done))
        .unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.status, AppointmentStatus::Done);
    assert_eq!(loaded.patient_id, patient_id);
    assert_eq!(loaded.doctor_id, Some(doctor_id));
    assert_eq!(loaded.appointment_date, date("2099-01-01"));
    assert_eq!(loaded.reason, "Checkup");
}

#[test]
fn update_can_touch_any_field_subset() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let doctor_id = add_doctor(&conn, "Dr. Smith");
    let repo = SqliteAppointmentRepository::new(&conn);

    let id = repo
        .add(&appointment(patient_id, Some(doctor_id), "2099-01-01", "Checkup"))
        .unwrap();

    let patch = AppointmentPatch {
        appointment_date: Some(date("2000-12-24")),
        reason: Some("Follow-up".to_string()),
        ..AppointmentPatch::default()
    };
    repo.update(id, &patch).unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    // Updates accept past dates; only new appointments are date-policed.
    assert_eq!(loaded.appointment_date, date("2000-12-24"));
    assert_eq!(loaded.reason, "Follow-up");
    assert_eq!(loaded.status, AppointmentStatus::Pending);
}

#[test]
fn update_can_clear_the_doctor_reference() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let doctor_id = add_doctor(&conn, "Dr. Smith");
    let repo = SqliteAppointmentRepository::new(&conn);

    let id = repo
        .add(&appointment(patient_id, Some(doctor_id), "2099-01-01", "Checkup"))
        .unwrap();

    let patch = AppointmentPatch {
        doctor_id: Some(None),
        ..AppointmentPatch::default()
    };
    repo.update(id, &patch).unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.doctor_id, None);
    assert_eq!(loaded.doctor_name, None);
}

#[test]
fn update_with_empty_patch_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let repo = SqliteAppointmentRepository::new(&conn);

    let id = repo
        .add(&appointment(patient_id, None, "2099-01-01", "Checkup"))
        .unwrap();

    let err = repo.update(id, &AppointmentPatch::default()).unwrap_err();
    assert!(matches!(err, RepoError::EmptyUpdate));
}

#[test]
fn update_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAppointmentRepository::new(&conn);

    let err = repo
        .update(777, &AppointmentPatch::status_only(AppointmentStatus::Done))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(777)));
}

#[test]
fn insert_with_unknown_patient_is_a_recoverable_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAppointmentRepository::new(&conn);

    let err = repo
        .add(&appointment(999, None, "2099-01-01", "Ghost"))
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));

    // The session stays usable after the failed insert.
    let patient_id = add_patient(&conn, "Jane Doe");
    repo.add(&appointment(patient_id, None, "2099-01-01", "Real"))
        .unwrap();
}

#[test]
fn deleting_patient_cascades_to_appointments() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let doctor_id = add_doctor(&conn, "Dr. Smith");
    let repo = SqliteAppointmentRepository::new(&conn);

    let id = repo
        .add(&appointment(patient_id, Some(doctor_id), "2099-01-01", "Checkup"))
        .unwrap();

    conn.execute("DELETE FROM patients WHERE patient_id = ?1;", [patient_id])
        .unwrap();

    assert!(repo.find_by_id(id).unwrap().is_none());
    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM appointments;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn deleting_doctor_nulls_the_reference_and_keeps_the_appointment() {
    let conn = open_db_in_memory().unwrap();
    let patient_id = add_patient(&conn, "Jane Doe");
    let doctor_id = add_doctor(&conn, "Dr. Smith");
    let repo = SqliteAppointmentRepository::new(&conn);

    let id = repo
        .add(&appointment(patient_id, Some(doctor_id), "2099-01-01", "Checkup"))
        .unwrap();

    conn.execute("DELETE FROM doctors WHERE doctor_id = ?1;", [doctor_id])
        .unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.doctor_id, None);
    assert_eq!(loaded.doctor_name, None);
    assert_eq!(loaded.reason, "Checkup");
    assert_eq!(loaded.patient_name, "Jane Doe");
}

#[test]
fn scheduling_scenario_jane_doe_checkup() {
    let conn = open_db_in_memory().unwrap();
    let patients = SqlitePatientRepository::new(&conn);
    let doctors = SqliteDoctorRepository::new(&conn);
    let repo = SqliteAppointmentRepository::new(&conn);

    let jane = patients
        .add(&NewPatient {
            full_name: "Jane Doe".to_string(),
            date_of_birth: date("1990-05-01"),
            gender: Gender::Female,
            address: None,
            phone_number: Some("5551234567".to_string()),
            email: None,
        })
        .unwrap();
    let smith = doctors
        .add(&NewDoctor {
            full_name: "Dr. Smith".to_string(),
            specialization: Some("Cardiology".to_string()),
            phone_number: None,
            email: None,
            years_of_experience: 10,
        })
        .unwrap();

    repo.add(&appointment(jane, Some(smith), "2099-01-01", "Checkup"))
        .unwrap();

    let rows = repo.find_by_patient(jane).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].patient_name, "Jane Doe");
    assert_eq!(rows[0].doctor_name.as_deref(), Some("Dr. Smith"));
    assert_eq!(rows[0].status, AppointmentStatus::Pending);
}
