use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MALE: &str = "مرد";
pub const FEMALE: &str = "زن";
pub const GENDERS: [&str; 2] = [MALE, FEMALE];

pub const MARRIED: &str = "متاهل";
pub const SINGLE: &str = "مجرد";
pub const MARITAL_STATUSES: [&str; 2] = [MARRIED, SINGLE];

pub const HEADQUARTERS: &str = "ستاد";
pub const PROJECT: &str = "پروژه";
pub const LOCATIONS: [&str; 2] = [HEADQUARTERS, PROJECT];

/// Age buckets in display order
pub const AGE_GROUPS: [&str; 4] = ["۲۰-۳۰", "۳۰-۴۰", "۴۰-۵۰", "۵۰+"];

/// Number of municipal districts; regions are numbered `1..=REGION_COUNT`
pub const REGION_COUNT: i64 = 22;

/// One row of the dataset after normalization
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub personnel_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub gender: String,
    pub birth_date: String,
    pub birth_month: String,
    pub education: String,
    pub education_field: String,
    pub marital_status: String,
    pub children_count: i64,
    pub department: String,
    pub position: String,
    pub employment_type: String,
    pub employment_date: String,
    pub location: String,
    pub region: i64,
    pub salary: f64,
    pub contract_salary: f64,
    pub overtime_hours: f64,
    pub evaluation_score: f64,
    pub manager_evaluation: f64,
    pub self_evaluation: f64,
    pub deputy_evaluation: f64,
    pub peer_evaluation: f64,
    pub performance_score: f64,
    pub knowledge_score: f64,
    pub behavior_score: f64,
    pub responsibility_score: f64,
    pub age_group: String,
    pub tenure: i64,
}

impl Employee {
    /// Name shown in lists: the full name when known, otherwise the personnel code
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.personnel_code)
    }

    /// Age bucket in its Persian display form
    ///
    /// Labels written with ASCII digits (`30-40`) map onto the display labels;
    /// blank buckets return `None`.
    pub fn display_age_group(&self) -> Option<String> {
        let group = self.age_group.trim();
        if group.is_empty() || group.eq_ignore_ascii_case("blank") {
            return None;
        }
        Some(crate::persian::to_persian_digits(group))
    }
}

/// The six dashboard views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Birthdays,
    Salary,
    Map,
    Profile,
    Overtime,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Birthdays,
        Tab::Salary,
        Tab::Map,
        Tab::Profile,
        Tab::Overtime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "نمای کلی",
            Tab::Birthdays => "تولدها",
            Tab::Salary => "حقوق",
            Tab::Map => "نقشه",
            Tab::Profile => "پروفایل",
            Tab::Overtime => "اضافه کار",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Birthdays => "birthdays",
            Tab::Salary => "salary",
            Tab::Map => "map",
            Tab::Profile => "profile",
            Tab::Overtime => "overtime",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s) || tab.label() == s)
            .ok_or_else(|| format!("unknown tab: {}", s))
    }
}
