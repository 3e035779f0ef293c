//! Template filling and contract rendering tests.

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use tourbook::document::{fill_template, render_booking_contract, Context, FieldValue};
use tourbook::domain::{Booking, Tourist};
use tourbook::error::{DocumentError, Error};

fn sample_tourist() -> Tourist {
    Tourist {
        id: 1,
        first_name: "Ana".into(),
        last_name: "Popescu".into(),
        passport_number: "X123".into(),
        phone: None,
        email: Some("ana@example.com".into()),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
        notes: None,
    }
}

fn sample_booking() -> Booking {
    Booking {
        id: 3,
        tourist_id: 1,
        destination: "Rome".into(),
        start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        price: 450.0,
        description: None,
    }
}

#[test]
fn substitutes_known_tokens_and_keeps_unknown_ones() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.txt");
    let output = dir.path().join("contract.txt");
    fs::write(
        &template,
        "Dear {{tourist_first_name}}, your trip to {{booking_destination}} \
         costs {{booking_price}}. Ref: {{unknown_field}}",
    )
    .unwrap();

    let mut context = Context::new();
    context.insert("tourist_first_name".into(), "Ana".into());
    context.insert("booking_destination".into(), "Rome".into());
    context.insert("booking_price".into(), FieldValue::Number(450.0));

    let path = fill_template(&template, &output, &context).unwrap();
    assert_eq!(path, output);

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "Dear Ana, your trip to Rome costs 450. Ref: {{unknown_field}}"
    );
}

#[test]
fn replaces_every_occurrence_of_a_token() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.txt");
    let output = dir.path().join("out.txt");
    fs::write(&template, "{{name}} and {{name}} again").unwrap();

    let mut context = Context::new();
    context.insert("name".into(), "Ana".into());

    fill_template(&template, &output, &context).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "Ana and Ana again");
}

#[test]
fn normalises_dates_and_absent_values() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.txt");
    let output = dir.path().join("out.txt");
    fs::write(&template, "From {{start}}; phone: '{{phone}}'").unwrap();

    let mut context = Context::new();
    context.insert(
        "start".into(),
        FieldValue::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
    );
    context.insert("phone".into(), FieldValue::Empty);

    fill_template(&template, &output, &context).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "From 01.06.2024; phone: ''"
    );
}

#[test]
fn template_file_is_left_untouched() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.txt");
    let output = dir.path().join("out.txt");
    fs::write(&template, "Hello {{name}}").unwrap();

    let mut context = Context::new();
    context.insert("name".into(), "Ana".into());

    fill_template(&template, &output, &context).unwrap();
    assert_eq!(fs::read_to_string(&template).unwrap(), "Hello {{name}}");
}

#[test]
fn missing_template_is_a_template_not_found_error() {
    let dir = TempDir::new().unwrap();
    let err = fill_template(
        &dir.path().join("missing.txt"),
        &dir.path().join("out.txt"),
        &Context::new(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::Document(DocumentError::TemplateNotFound { .. })
    ));
}

#[test]
fn unwritable_output_is_a_write_failure() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.txt");
    fs::write(&template, "Hello").unwrap();

    let err = fill_template(
        &template,
        &dir.path().join("no-such-dir").join("out.txt"),
        &Context::new(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::Document(DocumentError::WriteFailure { .. })
    ));
}

#[test]
fn contract_renders_prefixed_tourist_and_booking_fields() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("contract-template.md");
    let output = dir.path().join("contract.md");
    fs::write(
        &template,
        "# Contract {{booking_id}}\n\
         \n\
         | Field | Value |\n\
         |-------|-------|\n\
         | Name | {{tourist_last_name}} {{tourist_first_name}} |\n\
         | Passport | {{tourist_passport_number}} |\n\
         | Phone | {{tourist_phone}} |\n\
         | Trip | {{booking_destination}}, {{booking_start_date}} to {{booking_end_date}} |\n\
         | Price | {{booking_price}} |\n",
    )
    .unwrap();

    render_booking_contract(&sample_tourist(), &sample_booking(), &template, &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("# Contract 3"));
    assert!(text.contains("| Name | Popescu Ana |"));
    assert!(text.contains("| Passport | X123 |"));
    // Absent phone renders as the empty string.
    assert!(text.contains("| Phone |  |"));
    assert!(text.contains("| Trip | Rome, 01.06.2024 to 10.06.2024 |"));
    assert!(text.contains("| Price | 450 |"));
}
