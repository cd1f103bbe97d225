use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::employee::Employee;

/// The five fields the dashboard can filter on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    Gender,
    Education,
    Department,
    Location,
    Position,
}

impl FilterKey {
    pub const ALL: [FilterKey; 5] = [
        FilterKey::Gender,
        FilterKey::Education,
        FilterKey::Department,
        FilterKey::Location,
        FilterKey::Position,
    ];

    /// The employee field this key filters on
    pub fn value_of<'e>(&self, employee: &'e Employee) -> &'e str {
        match self {
            FilterKey::Gender => &employee.gender,
            FilterKey::Education => &employee.education,
            FilterKey::Department => &employee.department,
            FilterKey::Location => &employee.location,
            FilterKey::Position => &employee.position,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Gender => "gender",
            FilterKey::Education => "education",
            FilterKey::Department => "department",
            FilterKey::Location => "location",
            FilterKey::Position => "position",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::Gender => "جنسیت",
            FilterKey::Education => "تحصیلات",
            FilterKey::Department => "معاونت",
            FilterKey::Location => "محل فعالیت",
            FilterKey::Position => "جایگاه سازمانی",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s) || key.label() == s)
            .ok_or_else(|| format!("unknown filter: {}", s))
    }
}

/// Selected values per filter key
///
/// An empty selection places no restriction on its key. Keys combine with AND,
/// values within a key with OR. Updates return a new state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub gender: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub department: BTreeSet<String>,
    pub location: BTreeSet<String>,
    pub position: BTreeSet<String>,
}

impl FilterState {
    pub fn selected(&self, key: FilterKey) -> &BTreeSet<String> {
        match key {
            FilterKey::Gender => &self.gender,
            FilterKey::Education => &self.education,
            FilterKey::Department => &self.department,
            FilterKey::Location => &self.location,
            FilterKey::Position => &self.position,
        }
    }

    fn selected_mut(&mut self, key: FilterKey) -> &mut BTreeSet<String> {
        match key {
            FilterKey::Gender => &mut self.gender,
            FilterKey::Education => &mut self.education,
            FilterKey::Department => &mut self.department,
            FilterKey::Location => &mut self.location,
            FilterKey::Position => &mut self.position,
        }
    }

    /// Replace the selection for one key
    pub fn with<I, S>(&self, key: FilterKey, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        *next.selected_mut(key) = values.into_iter().map(Into::into).collect();
        next
    }

    /// Add the value to the key's selection, or remove it when already selected
    pub fn toggled(&self, key: FilterKey, value: &str) -> Self {
        let mut next = self.clone();
        let selection = next.selected_mut(key);
        if !selection.remove(value) {
            selection.insert(value.to_string());
        }
        next
    }

    /// Drop the selection for one key
    pub fn cleared(&self, key: FilterKey) -> Self {
        self.with(key, Vec::<String>::new())
    }

    /// Whether no key restricts anything
    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.iter().all(|key| self.selected(*key).is_empty())
    }

    /// Whether the employee passes every active key
    pub fn matches(&self, employee: &Employee) -> bool {
        FilterKey::ALL.iter().all(|key| {
            let selection = self.selected(*key);
            selection.is_empty() || selection.contains(key.value_of(employee))
        })
    }

    /// The employees passing the filter, in input order
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        employees
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

/// Distinct values offered for each filter key
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub genders: Vec<String>,
    pub educations: Vec<String>,
    pub departments: Vec<String>,
    pub locations: Vec<String>,
    pub positions: Vec<String>,
}

impl FilterOptions {
    /// Collect the distinct non-empty values of every key, in first-seen order
    pub fn from_employees(employees: &[Employee]) -> Self {
        FilterOptions {
            genders: distinct_values(employees, FilterKey::Gender),
            educations: distinct_values(employees, FilterKey::Education),
            departments: distinct_values(employees, FilterKey::Department),
            locations: distinct_values(employees, FilterKey::Location),
            positions: distinct_values(employees, FilterKey::Position),
        }
    }

    pub fn for_key(&self, key: FilterKey) -> &[String] {
        match key {
            FilterKey::Gender => &self.genders,
            FilterKey::Education => &self.educations,
            FilterKey::Department => &self.departments,
            FilterKey::Location => &self.locations,
            FilterKey::Position => &self.positions,
        }
    }
}

fn distinct_values(employees: &[Employee], key: FilterKey) -> Vec<String> {
    let mut seen = HashSet::new();
    employees
        .iter()
        .map(|e| key.value_of(e))
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}
