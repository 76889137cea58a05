use chrono::NaiveDate;
use mediward_core::{Appointment, AppointmentStatus, Gender, Patient};

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

#[test]
fn patient_serialization_uses_expected_wire_fields() {
    let patient = Patient {
        patient_id: 7,
        full_name: "Jane Doe".to_string(),
        date_of_birth: date("1990-05-01"),
        gender: Gender::Female,
        address: Some("1 Main St".to_string()),
        phone_number: Some("5551234567".to_string()),
        email: None,
    };

    let json = serde_json::to_value(&patient).unwrap();
    assert_eq!(json["patient_id"], 7);
    assert_eq!(json["full_name"], "Jane Doe");
    // Calendar dates travel as ISO text on the wire.
    assert_eq!(json["date_of_birth"], "1990-05-01");
    assert_eq!(json["gender"], "Female");
    assert_eq!(json["address"], "1 Main St");
    assert_eq!(json["email"], serde_json::Value::Null);

    let decoded: Patient = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, patient);
}

#[test]
fn appointment_serialization_tolerates_missing_doctor() {
    let appointment = Appointment {
        appointment_id: 3,
        patient_id: 7,
        patient_name: "Jane Doe".to_string(),
        doctor_id: None,
        doctor_name: None,
        appointment_date: date("2099-01-01"),
        reason: "Checkup".to_string(),
        status: AppointmentStatus::Pending,
    };

    let json = serde_json::to_value(&appointment).unwrap();
    assert_eq!(json["doctor_id"], serde_json::Value::Null);
    assert_eq!(json["doctor_name"], serde_json::Value::Null);
    assert_eq!(json["appointment_date"], "2099-01-01");
    assert_eq!(json["status"], "Pending");

    let decoded: Appointment = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, appointment);
}

#[test]
fn deserialize_rejects_out_of_range_enum_text() {
    let value = serde_json::json!({
        "appointment_id": 1,
        "patient_id": 7,
        "patient_name": "Jane Doe",
        "doctor_id": null,
        "doctor_name": null,
        "appointment_date": "2099-01-01",
        "reason": "Checkup",
        "status": "Closed"
    });

    assert!(serde_json::from_value::<Appointment>(value).is_err());
}
