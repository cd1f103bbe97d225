#![cfg(feature = "xlsx")]

use hr_dashboard::downloader::{employees_to_xlsx, save_employees, save_template, template_xlsx};
use hr_dashboard::error::{LoadError, UNREADABLE_WORKBOOK_NOTICE, WRONG_FILE_TYPE_NOTICE};
use hr_dashboard::loader::{check_file_type, load_workbook, load_workbook_bytes};
use hr_dashboard::sample::generate_sample_data_with_rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

#[test]
fn only_excel_extensions_are_accepted() {
    assert!(check_file_type("staff.xlsx").is_ok());
    assert!(check_file_type("STAFF.XLS").is_ok());

    let err = check_file_type("staff.csv").unwrap_err();
    assert!(matches!(err, LoadError::WrongFileType(_)));
    assert_eq!(err.notice(), WRONG_FILE_TYPE_NOTICE);
    assert!(check_file_type("staff").is_err());
}

#[tokio::test]
async fn wrong_extension_is_rejected_before_reading() {
    // The file does not exist; the extension check must fail first
    let err = load_workbook("/nonexistent/staff.pdf").await.unwrap_err();
    assert!(matches!(err, LoadError::WrongFileType(_)));
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_workbook(dir.path().join("missing.xlsx")).await.unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
    assert_eq!(err.notice(), UNREADABLE_WORKBOOK_NOTICE);
}

#[test]
fn garbage_bytes_are_not_a_workbook() {
    let err = load_workbook_bytes(b"definitely not a zip archive".to_vec()).unwrap_err();
    assert!(matches!(err, LoadError::Workbook(_)));
    assert_eq!(err.notice(), UNREADABLE_WORKBOOK_NOTICE);
}

#[tokio::test]
async fn template_loads_back_as_one_employee() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("template.xlsx");
    save_template(&path).unwrap();

    let employees = load_workbook(&path).await.unwrap();
    assert_eq!(employees.len(), 1);

    let e = &employees[0];
    assert_eq!(e.id, "emp-1");
    assert_eq!(e.personnel_code, "10001");
    assert_eq!(e.birth_date, "1370/01/15");
    assert_eq!(e.department, "معاونت فناوری");
    assert_eq!(e.salary, 50_000_000.0);
    assert_eq!(e.contract_salary, 45_000_000.0);
    assert_eq!(e.overtime_hours, 20.0);
    assert_eq!(e.tenure, 8);
    assert_eq!(e.display_age_group().as_deref(), Some("۳۰-۴۰"));
}

#[test]
fn template_bytes_start_a_zip_archive() {
    let bytes = template_xlsx().unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn exported_employees_reload_unchanged() {
    let employees = generate_sample_data_with_rng(25, &mut StdRng::seed_from_u64(5));
    let dir = tempdir().unwrap();
    let path = dir.path().join("export.xlsx");
    save_employees(&path, &employees).unwrap();

    let reloaded = load_workbook(&path).await.unwrap();
    assert_eq!(reloaded, employees);
}

#[test]
fn empty_export_has_no_rows() {
    let bytes = employees_to_xlsx(&[]).unwrap();
    assert!(load_workbook_bytes(bytes).unwrap().is_empty());
}
