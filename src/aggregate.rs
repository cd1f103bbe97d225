//! Aggregation engine
//!
//! Small, independent operations over an employee slice: grouping with
//! counts or averages, whole-collection scalars, and drill-down lists. Every
//! average over an empty input is zero; nothing here returns NaN.
//!
//! Grouping comes in two flavours that are kept apart on purpose:
//! [`count_fixed`] always reports every category of a closed enumeration,
//! [`count_open`] reports only the values actually present.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::config::DashboardConfig;
use crate::employee::{Employee, REGION_COUNT};
use crate::persian::year_of;

/// Number of members in one group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub name: String,
    pub count: usize,
}

/// A group count together with its share of the whole
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub name: String,
    pub count: usize,
    pub percent: i64,
}

/// Rounded mean of a numeric field within one group
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupAverage {
    pub name: String,
    pub average: i64,
    pub count: usize,
}

/// Head count of one municipal region
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: i64,
    pub count: usize,
    /// Count relative to the busiest region, in `0.0..=1.0`
    pub intensity: f64,
}

/// Round half up, the way dashboard labels round
pub fn round_half_up(value: f64) -> i64 {
    if value.is_finite() {
        (value + 0.5).floor() as i64
    } else {
        0
    }
}

/// `part / total` as a whole percentage; zero when `total` is zero
pub fn percentage(part: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    round_half_up(part as f64 / total as f64 * 100.0)
}

/// Count members per category of a closed enumeration
///
/// Returns one entry per category, in enumeration order, including empty
/// categories. Values outside the enumeration are not counted.
///
/// # Arguments
/// * `employees` - Records to count
/// * `categories` - The enumeration, in display order
/// * `key` - Extracts the grouping value; `None` skips the record
///
/// # Examples
/// ```
/// use hr_dashboard::aggregate::count_fixed;
/// use hr_dashboard::persian::MONTHS;
///
/// let counts = count_fixed(&[], &MONTHS, |e| Some(e.birth_month.clone()));
/// assert_eq!(counts.len(), 12);
/// assert!(counts.iter().all(|g| g.count == 0));
/// ```
pub fn count_fixed<S, F>(employees: &[Employee], categories: &[S], key: F) -> Vec<GroupCount>
where
    S: AsRef<str>,
    F: Fn(&Employee) -> Option<String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for employee in employees {
        if let Some(value) = key(employee) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    categories
        .iter()
        .map(|category| {
            let name = category.as_ref();
            GroupCount {
                name: name.to_string(),
                count: counts.get(name).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Count members per distinct value of an open vocabulary
///
/// Only populated groups are returned, in the order their value first appears.
pub fn count_open<F>(employees: &[Employee], key: F) -> Vec<GroupCount>
where
    F: Fn(&Employee) -> &str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupCount> = Vec::new();

    for employee in employees {
        let value = key(employee);
        match index.get(value) {
            Some(&i) => groups[i].count += 1,
            None => {
                index.insert(value, groups.len());
                groups.push(GroupCount {
                    name: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    groups
}

/// Attach percentages to group counts, relative to the sum of all groups
pub fn with_shares(groups: Vec<GroupCount>) -> Vec<Share> {
    let total: usize = groups.iter().map(|g| g.count).sum();
    groups
        .into_iter()
        .map(|g| Share {
            percent: percentage(g.count, total),
            name: g.name,
            count: g.count,
        })
        .collect()
}

/// Mean of `value` per distinct `key`, rounded to an integer
///
/// Groups follow first-seen order like [`count_open`].
pub fn average_by<K, V>(employees: &[Employee], key: K, value: V) -> Vec<GroupAverage>
where
    K: Fn(&Employee) -> &str,
    V: Fn(&Employee) -> f64,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, f64, usize)> = Vec::new();

    for employee in employees {
        let name = key(employee);
        let i = *index.entry(name).or_insert_with(|| {
            totals.push((name.to_string(), 0.0, 0));
            totals.len() - 1
        });
        totals[i].1 += value(employee);
        totals[i].2 += 1;
    }

    totals
        .into_iter()
        .map(|(name, total, count)| GroupAverage {
            name,
            average: round_half_up(safe_div(total, count)),
            count,
        })
        .collect()
}

/// Arithmetic mean of `value`; zero for an empty slice
pub fn mean<V>(employees: &[Employee], value: V) -> f64
where
    V: Fn(&Employee) -> f64,
{
    let total: f64 = employees.iter().map(value).sum();
    safe_div(total, employees.len())
}

/// [`mean`] rounded to an integer
pub fn rounded_mean<V>(employees: &[Employee], value: V) -> i64
where
    V: Fn(&Employee) -> f64,
{
    round_half_up(mean(employees, value))
}

pub fn mean_salary(employees: &[Employee]) -> i64 {
    rounded_mean(employees, |e| e.salary)
}

/// Mean of the stored tenure field
pub fn mean_tenure(employees: &[Employee]) -> i64 {
    rounded_mean(employees, |e| e.tenure as f64)
}

/// Number of distinct non-empty values of a field
pub fn distinct_count<F>(employees: &[Employee], key: F) -> usize
where
    F: Fn(&Employee) -> &str,
{
    employees
        .iter()
        .map(key)
        .filter(|v| !v.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

pub fn department_count(employees: &[Employee]) -> usize {
    distinct_count(employees, |e| &e.department)
}

/// Age in Persian years at the reference year
///
/// `None` when the birth date has no usable year, the year lies outside the
/// configured birth-year range, or the implied age is not in `(0, max_age)`.
pub fn age_of(employee: &Employee, config: &DashboardConfig) -> Option<i32> {
    let year = year_of(&employee.birth_date)?;
    if year < config.min_birth_year || year > config.max_birth_year {
        return None;
    }
    let age = config.reference_year - year;
    (age > 0 && age < config.max_age).then_some(age)
}

/// Years since hire at the reference year
///
/// `None` when the hire year lies outside `min_hire_year..=reference_year`
/// or the implied tenure is not in `[0, max_tenure)`.
pub fn tenure_from_hire(employee: &Employee, config: &DashboardConfig) -> Option<i32> {
    let year = year_of(&employee.employment_date)?;
    if year < config.min_hire_year || year > config.reference_year {
        return None;
    }
    let tenure = config.reference_year - year;
    (tenure >= 0 && tenure < config.max_tenure).then_some(tenure)
}

/// Mean age over the records with a plausible birth date
///
/// Records without one are left out of both sum and count. `None` when no
/// record qualifies.
pub fn mean_age(employees: &[Employee], config: &DashboardConfig) -> Option<f64> {
    mean_of_valid(employees.iter().filter_map(|e| age_of(e, config)))
}

/// Mean tenure derived from hire dates, skipping implausible ones
pub fn mean_tenure_from_hire(employees: &[Employee], config: &DashboardConfig) -> Option<f64> {
    mean_of_valid(employees.iter().filter_map(|e| tenure_from_hire(e, config)))
}

fn mean_of_valid(values: impl Iterator<Item = i32>) -> Option<f64> {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + v as i64, c + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Employees whose field equals `value`, in input order
pub fn list_where<'a, F>(employees: &'a [Employee], value: &str, key: F) -> Vec<&'a Employee>
where
    F: Fn(&Employee) -> &str,
{
    employees.iter().filter(|e| key(*e) == value).collect()
}

/// Employees born in the given Persian month
pub fn born_in_month<'a>(employees: &'a [Employee], month: &str) -> Vec<&'a Employee> {
    list_where(employees, month, |e| &e.birth_month)
}

/// Employees in the given region, in input order
pub fn in_region(employees: &[Employee], region: i64) -> Vec<&Employee> {
    employees.iter().filter(|e| e.region == region).collect()
}

/// All employees ordered by ascending region; ties keep input order
pub fn sorted_by_region(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by_key(|e| e.region);
    sorted
}

/// Per-region head counts for the map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionTally {
    /// One entry for each of the 22 regions, in order
    pub regions: Vec<RegionCount>,
    /// Largest count of any region value, including values outside
    /// `1..=22`; never below 1
    pub max_count: usize,
}

/// Head count for each of the 22 regions
///
/// Records with a region outside `1..=22` fill no cell but still count
/// toward `max_count`, so they scale the intensity of every cell. Intensity
/// is `count / max_count`; an empty input yields all zeros.
pub fn region_counts(employees: &[Employee]) -> RegionTally {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for employee in employees {
        *counts.entry(employee.region).or_insert(0) += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(0).max(1);

    let regions = (1..=REGION_COUNT)
        .map(|region| {
            let count = counts.get(&region).copied().unwrap_or(0);
            RegionCount {
                region,
                count,
                intensity: count as f64 / max_count as f64,
            }
        })
        .collect();

    RegionTally { regions, max_count }
}

fn safe_div(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}
