use rollbook_core::{FormInput, Student, StudentValidationError};

fn valid_input() -> FormInput {
    FormInput {
        id: "42".to_string(),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        contact: "1234567890".to_string(),
        class: "10A".to_string(),
        address: "12 Elm Street".to_string(),
    }
}

#[test]
fn from_input_trims_and_accepts_valid_fields() {
    let mut input = valid_input();
    input.id = "  42  ".to_string();
    input.name = " Jane Doe ".to_string();
    input.address = "  12 Elm Street ".to_string();

    let student = Student::from_input(&input).unwrap();
    assert_eq!(student.id, "42");
    assert_eq!(student.name, "Jane Doe");
    assert_eq!(student.email, "jane@example.com");
    assert_eq!(student.contact, "1234567890");
    assert_eq!(student.class, "10A");
    assert_eq!(student.address, "12 Elm Street");
}

#[test]
fn optional_fields_may_be_blank() {
    let mut input = valid_input();
    input.class = String::new();
    input.address = "   ".to_string();

    let student = Student::from_input(&input).unwrap();
    assert_eq!(student.class, "");
    assert_eq!(student.address, "");
    assert_eq!(student.class_or_dash(), "-");
}

#[test]
fn missing_required_field_wins_over_format_checks() {
    let mut input = valid_input();
    input.id = "   ".to_string();
    input.email = "not-an-email".to_string();

    let err = Student::from_input(&input).unwrap_err();
    assert_eq!(err, StudentValidationError::MissingField("id"));
}

#[test]
fn id_must_be_digits_only() {
    let mut input = valid_input();
    input.id = "42a".to_string();

    let err = Student::from_input(&input).unwrap_err();
    assert_eq!(err, StudentValidationError::NonNumericId("42a".to_string()));
}

#[test]
fn name_rejects_digits_and_punctuation() {
    let mut input = valid_input();
    input.name = "Jane D0e".to_string();
    assert!(matches!(
        Student::from_input(&input).unwrap_err(),
        StudentValidationError::NonAlphabeticName(_)
    ));

    input.name = "Jane-Doe".to_string();
    assert!(matches!(
        Student::from_input(&input).unwrap_err(),
        StudentValidationError::NonAlphabeticName(_)
    ));
}

#[test]
fn email_pattern_enforces_local_domain_and_tld() {
    let accepted = [
        "jane@example.com",
        "jane.doe@example.co.uk",
        "j-d@sub.example.io",
    ];
    for email in accepted {
        let mut input = valid_input();
        input.email = email.to_string();
        assert!(
            Student::from_input(&input).is_ok(),
            "expected `{email}` to be accepted"
        );
    }

    let rejected = [
        "jane",
        "jane@",
        "@example.com",
        "jane@example",
        "jane@example.c",
        "jane@example.toolongtld",
        "jane doe@example.com",
    ];
    for email in rejected {
        let mut input = valid_input();
        input.email = email.to_string();
        assert!(
            matches!(
                Student::from_input(&input),
                Err(StudentValidationError::MalformedEmail(_))
            ),
            "expected `{email}` to be rejected"
        );
    }
}

#[test]
fn contact_must_be_exactly_ten_digits() {
    for contact in ["123456789", "12345678901", "12345abcde"] {
        let mut input = valid_input();
        input.contact = contact.to_string();
        assert!(matches!(
            Student::from_input(&input).unwrap_err(),
            StudentValidationError::BadContactNumber(_)
        ));
    }
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let student = Student::from_input(&valid_input()).unwrap();

    let json = serde_json::to_value(&student).unwrap();
    assert_eq!(json["id"], "42");
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["email"], "jane@example.com");
    assert_eq!(json["contact"], "1234567890");
    assert_eq!(json["class"], "10A");
    assert_eq!(json["address"], "12 Elm Street");

    let decoded: Student = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, student);
}

#[test]
fn deserialization_defaults_missing_optional_fields() {
    let value = serde_json::json!({
        "id": "7",
        "name": "Sam Lee",
        "email": "sam@example.com",
        "contact": "0987654321"
    });

    let student: Student = serde_json::from_value(value).unwrap();
    assert_eq!(student.class, "");
    assert_eq!(student.address, "");
}
