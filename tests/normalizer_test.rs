use hr_dashboard::employee::MALE;
use hr_dashboard::normalizer::{CellValue, Row, normalize_rows, row};

#[test]
fn missing_fields_take_defaults() {
    let employees = normalize_rows(&[Row::new()]);
    let e = &employees[0];

    assert_eq!(e.id, "emp-1");
    assert_eq!(e.personnel_code, "10001");
    assert_eq!(e.gender, MALE);
    assert_eq!(e.region, 1);
    assert_eq!(e.salary, 0.0);
    assert_eq!(e.children_count, 0);
    assert_eq!(e.department, "");
    assert_eq!(e.birth_month, "");
    assert_eq!(e.name, None);
    assert_eq!(e.last_name, None);
    assert_eq!(e.full_name, None);
}

#[test]
fn ids_follow_row_positions() {
    let rows = vec![Row::new(), Row::new(), Row::new()];
    let ids: Vec<String> = normalize_rows(&rows).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["emp-1", "emp-2", "emp-3"]);

    let codes: Vec<String> = normalize_rows(&rows)
        .into_iter()
        .map(|e| e.personnel_code)
        .collect();
    assert_eq!(codes, ["10001", "10002", "10003"]);
}

#[test]
fn full_name_needs_both_parts() {
    let rows = vec![
        row([("نام", "سارا"), ("نام خانوادگی", "نوری")]),
        row([("نام", "سارا")]),
        row([("lastName", "نوری")]),
    ];
    let employees = normalize_rows(&rows);

    assert_eq!(employees[0].full_name.as_deref(), Some("سارا نوری"));
    assert_eq!(employees[1].full_name, None);
    assert_eq!(employees[1].name.as_deref(), Some("سارا"));
    assert_eq!(employees[2].full_name, None);
    assert_eq!(employees[2].last_name.as_deref(), Some("نوری"));
}

#[test]
fn mixed_row_normalizes_text_and_numbers() {
    let rows = vec![row([("جنسیت", "زن"), ("حقوق", "120000000"), ("معاونت", "مالی")])];
    let e = &normalize_rows(&rows)[0];

    assert_eq!(e.gender, "زن");
    assert_eq!(e.salary, 120_000_000.0);
    assert_eq!(e.department, "مالی");
    assert_eq!(e.region, 1);
    assert_eq!(e.full_name, None);
}

#[test]
fn parser_and_template_labels_are_both_read() {
    let rows = vec![
        row([("حقوق پرداختی", 90_000_000.0), ("اضافه کار", 12.0)]),
        row([("حقوق", 80_000_000.0), ("اضافه کاری (ساعت)", 7.0)]),
    ];
    let employees = normalize_rows(&rows);

    assert_eq!(employees[0].salary, 90_000_000.0);
    assert_eq!(employees[0].overtime_hours, 12.0);
    assert_eq!(employees[1].salary, 80_000_000.0);
    assert_eq!(employees[1].overtime_hours, 7.0);
}

#[test]
fn english_aliases_are_used_when_labels_are_missing() {
    let rows = vec![row([
        ("department", CellValue::from("فنی و اجرایی")),
        ("region", CellValue::from(7i64)),
        ("salary", CellValue::from("۱۵۰٬۰۰۰٬۰۰۰")),
    ])];
    let e = &normalize_rows(&rows)[0];

    assert_eq!(e.department, "فنی و اجرایی");
    assert_eq!(e.region, 7);
    assert_eq!(e.salary, 150_000_000.0);
}

#[test]
fn malformed_values_degrade_instead_of_failing() {
    let rows = vec![row([
        ("منطقه", "نامشخص"),
        ("حقوق", "-5000"),
        ("تعداد فرزندان", "2 نفر"),
        ("سابقه", "سه سال"),
    ])];
    let e = &normalize_rows(&rows)[0];

    assert_eq!(e.region, 1);
    assert_eq!(e.salary, -5000.0);
    assert_eq!(e.children_count, 2);
    assert_eq!(e.tenure, 0);
}
