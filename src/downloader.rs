use crate::columns::{self, Example, ROW_NUMBER_HEADER};
use crate::employee::Employee;
use crate::error::ExportError;
use crate::normalizer::CellValue;
use std::path::Path;

/// Name of the single sheet in templates and exports
pub const SHEET_NAME: &str = "کارمندان";

/// Default file name offered for the template download
pub const TEMPLATE_FILE_NAME: &str = "نمونه_اطلاعات_کارمندان.xlsx";

/// Width applied to every column
const COLUMN_WIDTH: f64 = 20.0;

/// Build the upload template
///
/// The template holds a header row with every recognized column, preceded by
/// a row-number column, and one example data row. Loading the template back
/// yields exactly one employee.
///
/// # Returns
/// * `Result<Vec<u8>, ExportError>` - XLSX file content as bytes or an error
///
/// # Examples
/// ```no_run
/// use hr_dashboard::downloader::template_xlsx;
///
/// match template_xlsx() {
///     Ok(bytes) => println!("template generated: {} bytes", bytes.len()),
///     Err(e) => eprintln!("{}", e.notice()),
/// }
/// ```
pub fn template_xlsx() -> Result<Vec<u8>, ExportError> {
    let example: Vec<CellValue> = columns::ALL
        .iter()
        .map(|column| match column.example {
            Example::Text(text) => CellValue::Text(text.to_string()),
            Example::Number(n) => CellValue::Number(n),
        })
        .collect();

    write_sheet(&[example])
}

/// Convert employees to XLSX with the template's headers
///
/// The export loads back through the normal upload path; ids are reassigned
/// on load.
///
/// # Arguments
/// * `employees` - Records to write, one row each
///
/// # Returns
/// * `Result<Vec<u8>, ExportError>` - XLSX file content as bytes or an error
pub fn employees_to_xlsx(employees: &[Employee]) -> Result<Vec<u8>, ExportError> {
    let rows: Vec<Vec<CellValue>> = employees.iter().map(employee_cells).collect();
    write_sheet(&rows)
}

/// Write the template to `path`
pub fn save_template(path: impl AsRef<Path>) -> Result<(), ExportError> {
    let bytes = template_xlsx()?;
    std::fs::write(path.as_ref(), bytes)?;
    log::info!("template written to {}", path.as_ref().display());
    Ok(())
}

/// Write employees to `path` as a workbook
pub fn save_employees(path: impl AsRef<Path>, employees: &[Employee]) -> Result<(), ExportError> {
    let bytes = employees_to_xlsx(employees)?;
    std::fs::write(path.as_ref(), bytes)?;
    log::info!(
        "{} employees written to {}",
        employees.len(),
        path.as_ref().display()
    );
    Ok(())
}

// Cell values in `columns::ALL` order
fn employee_cells(e: &Employee) -> Vec<CellValue> {
    let text = |s: &str| CellValue::Text(s.to_string());
    let optional = |s: &Option<String>| s.as_deref().map(text).unwrap_or(CellValue::Empty);

    vec![
        text(&e.personnel_code),
        optional(&e.name),
        optional(&e.last_name),
        text(&e.gender),
        text(&e.birth_date),
        text(&e.birth_month),
        text(&e.education),
        text(&e.education_field),
        text(&e.marital_status),
        CellValue::Number(e.children_count as f64),
        text(&e.department),
        text(&e.position),
        text(&e.employment_type),
        text(&e.employment_date),
        text(&e.location),
        CellValue::Number(e.region as f64),
        CellValue::Number(e.salary),
        CellValue::Number(e.contract_salary),
        CellValue::Number(e.overtime_hours),
        CellValue::Number(e.evaluation_score),
        CellValue::Number(e.manager_evaluation),
        CellValue::Number(e.self_evaluation),
        CellValue::Number(e.deputy_evaluation),
        CellValue::Number(e.peer_evaluation),
        CellValue::Number(e.performance_score),
        CellValue::Number(e.knowledge_score),
        CellValue::Number(e.behavior_score),
        CellValue::Number(e.responsibility_score),
        text(&e.age_group),
        CellValue::Number(e.tenure as f64),
    ]
}

#[cfg(feature = "xlsx")]
fn write_sheet(rows: &[Vec<CellValue>]) -> Result<Vec<u8>, ExportError> {
    use rust_xlsxwriter::{Workbook, Worksheet};

    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name(SHEET_NAME)?;

    // Header row: row number first, then every recognized column
    worksheet.write_string(0, 0, ROW_NUMBER_HEADER)?;
    for (c, column) in columns::ALL.iter().enumerate() {
        worksheet.write_string(0, (c + 1) as u16, column.header)?;
    }
    for c in 0..=columns::ALL.len() {
        worksheet.set_column_width(c as u16, COLUMN_WIDTH)?;
    }

    for (r, cells) in rows.iter().enumerate() {
        let row = (r + 1) as u32;
        worksheet.write_number(row, 0, (r + 1) as f64)?;
        for (c, cell) in cells.iter().enumerate() {
            let col = (c + 1) as u16;
            match cell {
                CellValue::Number(n) => {
                    worksheet.write_number(row, col, *n)?;
                }
                CellValue::Text(s) if !s.is_empty() => {
                    worksheet.write_string(row, col, s)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
                _ => {}
            }
        }
    }

    workbook.push_worksheet(worksheet);

    let buffer = workbook.save_to_buffer()?;
    Ok(buffer)
}

#[cfg(not(feature = "xlsx"))]
fn write_sheet(_rows: &[Vec<CellValue>]) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Unsupported)
}
