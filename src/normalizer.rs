//! Row normalization
//!
//! Turns loosely typed spreadsheet rows into [`Employee`] records. The
//! conversion is total: missing or malformed values degrade to the field
//! default and never produce an error.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::columns::{self, Column};
use crate::employee::{Employee, MALE};
use crate::persian::normalize_digits;

lazy_static! {
    static ref INT_PREFIX: Regex = Regex::new(r"^\s*[+-]?[0-9]+").unwrap();
    static ref FLOAT_PREFIX: Regex =
        Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap();
}

/// First personnel code handed out to rows that carry none
const FIRST_PERSONNEL_CODE: usize = 10001;

/// A single cell value as read from a workbook
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Whether the value counts as present during column lookup
    ///
    /// Empty text, zero, NaN and `false` fall through to the next label.
    pub fn is_present(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
        }
    }

    /// Text form of the value
    ///
    /// Integral numbers print without a fractional part, so a personnel code
    /// stored as a number reads back as `10001`, not `10001.0`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => number_to_text(*n),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Integer value, parsing the leading integer of text values
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            CellValue::Text(s) => parse_int_prefix(s),
            _ => None,
        }
    }

    /// Floating-point value, parsing the leading number of text values
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Text(s) => parse_float_prefix(s),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

/// One spreadsheet row: column label to cell value
pub type Row = HashMap<String, CellValue>;

/// Build a row from label/value pairs
///
/// # Examples
/// ```
/// use hr_dashboard::normalizer::{row, CellValue};
///
/// let r = row([("جنسیت", "زن"), ("معاونت", "مالی")]);
/// assert_eq!(r.get("معاونت"), Some(&CellValue::Text("مالی".to_string())));
/// ```
pub fn row<K, V, I>(pairs: I) -> Row
where
    K: Into<String>,
    V: Into<CellValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Normalize a sequence of rows into employee records
///
/// Each row yields exactly one employee, in input order, with ids
/// `emp-1`, `emp-2`, ... assigned from the row position.
///
/// # Arguments
/// * `rows` - Rows keyed by column label (Persian label or English alias)
///
/// # Returns
/// * `Vec<Employee>` - One record per row
///
/// # Examples
/// ```
/// use hr_dashboard::normalizer::{normalize_rows, row};
///
/// let rows = vec![row([("جنسیت", "زن"), ("حقوق", "120000000"), ("معاونت", "مالی")])];
/// let employees = normalize_rows(&rows);
/// assert_eq!(employees[0].id, "emp-1");
/// assert_eq!(employees[0].salary, 120000000.0);
/// assert_eq!(employees[0].region, 1);
/// ```
pub fn normalize_rows(rows: &[Row]) -> Vec<Employee> {
    let employees: Vec<Employee> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| normalize_row(row, index))
        .collect();
    log::debug!("normalized {} rows", employees.len());
    employees
}

/// Normalize a single row; `index` is the 0-based row position
pub fn normalize_row(row: &Row, index: usize) -> Employee {
    let name = optional_text(row, &columns::NAME);
    let last_name = optional_text(row, &columns::LAST_NAME);
    let full_name = match (&name, &last_name) {
        (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
        _ => None,
    };

    Employee {
        id: format!("emp-{}", index + 1),
        personnel_code: optional_text(row, &columns::PERSONNEL_CODE)
            .unwrap_or_else(|| (FIRST_PERSONNEL_CODE + index).to_string()),
        name,
        last_name,
        full_name,
        gender: optional_text(row, &columns::GENDER).unwrap_or_else(|| MALE.to_string()),
        birth_date: text(row, &columns::BIRTH_DATE),
        birth_month: text(row, &columns::BIRTH_MONTH),
        education: text(row, &columns::EDUCATION),
        education_field: text(row, &columns::EDUCATION_FIELD),
        marital_status: text(row, &columns::MARITAL_STATUS),
        children_count: int(row, &columns::CHILDREN_COUNT, 0),
        department: text(row, &columns::DEPARTMENT),
        position: text(row, &columns::POSITION),
        employment_type: text(row, &columns::EMPLOYMENT_TYPE),
        employment_date: text(row, &columns::EMPLOYMENT_DATE),
        location: text(row, &columns::LOCATION),
        region: int(row, &columns::REGION, 1),
        salary: float(row, &columns::SALARY),
        contract_salary: float(row, &columns::CONTRACT_SALARY),
        overtime_hours: float(row, &columns::OVERTIME_HOURS),
        evaluation_score: float(row, &columns::EVALUATION_SCORE),
        manager_evaluation: float(row, &columns::MANAGER_EVALUATION),
        self_evaluation: float(row, &columns::SELF_EVALUATION),
        deputy_evaluation: float(row, &columns::DEPUTY_EVALUATION),
        peer_evaluation: float(row, &columns::PEER_EVALUATION),
        performance_score: float(row, &columns::PERFORMANCE_SCORE),
        knowledge_score: float(row, &columns::KNOWLEDGE_SCORE),
        behavior_score: float(row, &columns::BEHAVIOR_SCORE),
        responsibility_score: float(row, &columns::RESPONSIBILITY_SCORE),
        age_group: text(row, &columns::AGE_GROUP),
        tenure: int(row, &columns::TENURE, 0),
    }
}

// First present value among the column's labels, then its alias
fn lookup<'r>(row: &'r Row, column: &Column) -> Option<&'r CellValue> {
    column
        .lookup_keys()
        .filter_map(|key| row.get(key))
        .find(|value| value.is_present())
}

fn optional_text(row: &Row, column: &Column) -> Option<String> {
    lookup(row, column).map(CellValue::as_text)
}

fn text(row: &Row, column: &Column) -> String {
    optional_text(row, column).unwrap_or_default()
}

fn int(row: &Row, column: &Column, default: i64) -> i64 {
    lookup(row, column)
        .and_then(CellValue::as_int)
        .unwrap_or(default)
}

fn float(row: &Row, column: &Column) -> f64 {
    lookup(row, column)
        .and_then(CellValue::as_float)
        .unwrap_or(0.0)
}

fn clean_numeric_text(text: &str) -> String {
    normalize_digits(text)
        .chars()
        .filter(|c| !matches!(c, ',' | '٬' | '_'))
        .map(|c| if c == '٫' { '.' } else { c })
        .collect()
}

fn parse_int_prefix(text: &str) -> Option<i64> {
    let cleaned = clean_numeric_text(text);
    let found = INT_PREFIX.find(&cleaned)?;
    found.as_str().trim().parse().ok()
}

fn parse_float_prefix(text: &str) -> Option<f64> {
    let cleaned = clean_numeric_text(text);
    let found = FLOAT_PREFIX.find(&cleaned)?;
    found
        .as_str()
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn number_to_text(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_prefixes_parse_like_a_spreadsheet_user_expects() {
        assert_eq!(parse_int_prefix("12 نفر"), Some(12));
        assert_eq!(parse_int_prefix("2.7"), Some(2));
        assert_eq!(parse_int_prefix("۳"), Some(3));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_float_prefix("120,000,000"), Some(120_000_000.0));
        assert_eq!(parse_float_prefix("۱۲٫۵"), Some(12.5));
        assert_eq!(parse_float_prefix("-15.5h"), Some(-15.5));
        assert_eq!(parse_float_prefix(""), None);
    }

    #[test]
    fn falsy_values_fall_through_to_alias() {
        let r = row([("معاونت", ""), ("department", "مالی")]);
        assert_eq!(text(&r, &columns::DEPARTMENT), "مالی");

        let r = row([("تعداد فرزندان", 0.0), ("childrenCount", 3.0)]);
        assert_eq!(int(&r, &columns::CHILDREN_COUNT, 0), 3);
    }

    #[test]
    fn numeric_cells_become_text_without_fraction() {
        assert_eq!(CellValue::Number(10001.0).as_text(), "10001");
        assert_eq!(CellValue::Number(2.5).as_text(), "2.5");
    }
}
