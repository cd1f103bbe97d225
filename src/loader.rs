use crate::employee::Employee;
use crate::error::LoadError;
use crate::normalizer::{CellValue, Row, normalize_rows};
use std::path::Path;

/// Extensions accepted for upload
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Check that a file name carries an Excel extension
///
/// This runs before any bytes are read, so a rejected file never touches
/// the current session.
///
/// # Arguments
/// * `file_name` - Name or path of the selected file
///
/// # Returns
/// * `Result<(), LoadError>` - `LoadError::WrongFileType` for anything but `.xlsx`/`.xls`
pub fn check_file_type(file_name: impl AsRef<Path>) -> Result<(), LoadError> {
    let path = file_name.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match extension.as_deref() {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext) => Ok(()),
        _ => Err(LoadError::WrongFileType(path.display().to_string())),
    }
}

/// Load employees from an Excel workbook on disk
///
/// The whole file is read asynchronously, then parsed and normalized in one
/// pass. Either every row is loaded or the upload fails; there is no partial
/// result.
///
/// # Arguments
/// * `filepath` - Path to the `.xlsx` or `.xls` file
///
/// # Returns
/// * `Result<Vec<Employee>, LoadError>` - One employee per data row, or an error
///
/// # Examples
/// ```no_run
/// use hr_dashboard::loader::load_workbook;
///
/// # async fn demo() {
/// match load_workbook("employees.xlsx").await {
///     Ok(employees) => println!("{} records loaded", employees.len()),
///     Err(e) => eprintln!("{}", e.notice()),
/// }
/// # }
/// ```
pub async fn load_workbook(filepath: impl AsRef<Path>) -> Result<Vec<Employee>, LoadError> {
    let path = filepath.as_ref();
    check_file_type(path)?;

    log::info!("reading workbook {}", path.display());
    let bytes = tokio::fs::read(path).await?;
    let employees = load_workbook_bytes(bytes)?;
    log::info!("{} records loaded from {}", employees.len(), path.display());
    Ok(employees)
}

/// Parse and normalize an in-memory workbook
pub fn load_workbook_bytes(bytes: Vec<u8>) -> Result<Vec<Employee>, LoadError> {
    let rows = read_rows(bytes)?;
    Ok(normalize_rows(&rows))
}

/// Read the first worksheet into rows keyed by the header row
///
/// Cells under a blank header are dropped, as are empty cells and rows with
/// no value at all. When a header repeats, the first column wins.
#[cfg(feature = "xlsx")]
pub fn read_rows(bytes: Vec<u8>) -> Result<Vec<Row>, LoadError> {
    use calamine::{Reader, open_workbook_auto_from_rs};
    use std::io::Cursor;

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    // Get the first worksheet
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = match sheet_rows.next() {
        Some(header_row) => header_row.iter().map(|c| cell_value(c).as_text()).collect(),
        None => {
            log::warn!("sheet {} is empty", sheet_name);
            return Ok(Vec::new());
        }
    };

    let ignored: Vec<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|h| !h.is_empty() && !crate::columns::is_recognized(h))
        .collect();
    if !ignored.is_empty() {
        log::debug!("ignoring unrecognized columns: {}", ignored.join(", "));
    }

    let mut rows = Vec::new();
    for data_row in sheet_rows {
        let mut row = Row::new();
        for (header, cell) in headers.iter().zip(data_row.iter()) {
            let value = cell_value(cell);
            if header.is_empty() || value == CellValue::Empty {
                continue;
            }
            row.entry(header.clone()).or_insert(value);
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    log::debug!(
        "sheet {}: {} columns, {} data rows",
        sheet_name,
        headers.len(),
        rows.len()
    );
    Ok(rows)
}

#[cfg(not(feature = "xlsx"))]
pub fn read_rows(_bytes: Vec<u8>) -> Result<Vec<Row>, LoadError> {
    Err(LoadError::Workbook(
        "Excel support requires the 'xlsx' feature".to_string(),
    ))
}

#[cfg(feature = "xlsx")]
fn cell_value(cell: &calamine::Data) -> CellValue {
    use calamine::Data;

    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        // Error cells and blanks carry nothing to read
        _ => CellValue::Empty,
    }
}
