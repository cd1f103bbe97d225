//! Per-view summaries
//!
//! Each dashboard tab reads one of these structures. They are built from the
//! filtered employee slice and serialize to JSON for the presentation layer.

use serde::Serialize;

use crate::aggregate::{
    self, GroupAverage, GroupCount, RegionCount, Share, count_fixed, count_open, with_shares,
};
use crate::config::DashboardConfig;
use crate::employee::{AGE_GROUPS, Employee, GENDERS, LOCATIONS, MARITAL_STATUSES};
use crate::persian::{MONTHS, format_decimal, format_number};
use crate::sample::CONTRACT_SALARY_RATIO;

/// Headline numbers of the overview tab
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Kpis {
    pub department_count: usize,
    pub staff_count: usize,
    pub average_salary: i64,
    pub average_tenure: i64,
    /// Mean age with two decimals in Persian numerals, `۰` when unknown
    pub average_age: String,
    /// Mean tenure from hire dates with two decimals in Persian numerals
    pub average_tenure_from_hire: String,
}

impl Kpis {
    pub fn build(employees: &[Employee], config: &DashboardConfig) -> Self {
        Kpis {
            department_count: aggregate::department_count(employees),
            staff_count: employees.len(),
            average_salary: aggregate::mean_salary(employees),
            average_tenure: aggregate::mean_tenure(employees),
            average_age: two_decimals(aggregate::mean_age(employees, config)),
            average_tenure_from_hire: two_decimals(aggregate::mean_tenure_from_hire(
                employees, config,
            )),
        }
    }

    /// KPI values as Persian display strings, in card order
    pub fn display(&self) -> Vec<(&'static str, String)> {
        vec![
            ("تعداد معاونت", format_number(self.department_count as i64)),
            ("تعداد پرسنل", format_number(self.staff_count as i64)),
            ("میانگین حقوق", format_number(self.average_salary)),
            ("میانگین سابقه کاری", format_number(self.average_tenure)),
            ("میانگین سن", self.average_age.clone()),
            ("میانگین سابقه از تاریخ استخدام", self.average_tenure_from_hire.clone()),
        ]
    }
}

fn two_decimals(value: Option<f64>) -> String {
    match value {
        Some(v) => format_decimal(v, 2),
        None => format_number(0),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverviewSummary {
    pub kpis: Kpis,
    pub age_groups: Vec<GroupCount>,
    pub gender: Vec<Share>,
    pub marital_status: Vec<Share>,
    pub location: Vec<Share>,
    pub education: Vec<Share>,
    pub departments: Vec<GroupCount>,
    pub positions: Vec<GroupCount>,
}

impl OverviewSummary {
    pub fn build(employees: &[Employee], config: &DashboardConfig) -> Self {
        OverviewSummary {
            kpis: Kpis::build(employees, config),
            age_groups: count_fixed(employees, &AGE_GROUPS, |e| e.display_age_group()),
            gender: with_shares(count_fixed(employees, &GENDERS, |e| Some(e.gender.clone()))),
            marital_status: with_shares(count_fixed(employees, &MARITAL_STATUSES, |e| {
                Some(e.marital_status.clone())
            })),
            location: with_shares(count_fixed(employees, &LOCATIONS, |e| {
                Some(e.location.clone())
            })),
            education: with_shares(count_open(employees, |e| &e.education)),
            departments: count_open(employees, |e| &e.department),
            positions: count_open(employees, |e| &e.position),
        }
    }
}

/// One line of a drill-down employee list
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmployeeLine {
    pub id: String,
    pub personnel_code: String,
    pub full_name: Option<String>,
    pub department: String,
    pub position: String,
    pub birth_date: String,
    pub region: i64,
}

impl From<&Employee> for EmployeeLine {
    fn from(e: &Employee) -> Self {
        EmployeeLine {
            id: e.id.clone(),
            personnel_code: e.personnel_code.clone(),
            full_name: e.full_name.clone(),
            department: e.department.clone(),
            position: e.position.clone(),
            birth_date: e.birth_date.clone(),
            region: e.region,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BirthdaySummary {
    /// Twelve entries, Farvardin first
    pub months: Vec<GroupCount>,
    pub selected_month: Option<String>,
    /// Employees born in the selected month, or everyone when none is selected
    pub employees: Vec<EmployeeLine>,
}

impl BirthdaySummary {
    pub fn build(employees: &[Employee], selected_month: Option<&str>) -> Self {
        let months = count_fixed(employees, &MONTHS, |e| {
            (!e.birth_month.is_empty()).then(|| e.birth_month.clone())
        });
        let listed: Vec<EmployeeLine> = match selected_month {
            Some(month) => aggregate::born_in_month(employees, month)
                .into_iter()
                .map(EmployeeLine::from)
                .collect(),
            None => employees.iter().map(EmployeeLine::from).collect(),
        };

        BirthdaySummary {
            months,
            selected_month: selected_month.map(str::to_string),
            employees: listed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SalarySummary {
    pub by_department: Vec<GroupAverage>,
    pub by_position: Vec<GroupAverage>,
    pub by_gender: Vec<GroupAverage>,
    pub by_education: Vec<GroupAverage>,
}

impl SalarySummary {
    pub fn build(employees: &[Employee]) -> Self {
        SalarySummary {
            by_department: aggregate::average_by(employees, |e| &e.department, |e| e.salary),
            by_position: aggregate::average_by(employees, |e| &e.position, |e| e.salary),
            by_gender: aggregate::average_by(employees, |e| &e.gender, |e| e.salary),
            by_education: aggregate::average_by(employees, |e| &e.education, |e| e.salary),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapSummary {
    /// All 22 regions in order
    pub regions: Vec<RegionCount>,
    /// The count every intensity is relative to, never below 1
    pub max_count: usize,
    pub selected_region: Option<i64>,
    /// Employees of the selected region, or everyone ascending by region
    pub employees: Vec<EmployeeLine>,
}

impl MapSummary {
    pub fn build(employees: &[Employee], selected_region: Option<i64>) -> Self {
        let tally = aggregate::region_counts(employees);
        let listed = match selected_region {
            Some(region) => aggregate::in_region(employees, region),
            None => aggregate::sorted_by_region(employees),
        };

        MapSummary {
            regions: tally.regions,
            max_count: tally.max_count,
            selected_region,
            employees: listed.into_iter().map(EmployeeLine::from).collect(),
        }
    }
}

/// A named score shown on a profile gauge
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Score {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub employee: Employee,
    pub evaluation_score: f64,
    /// The four weighted evaluations
    pub evaluations: Vec<Score>,
    /// The four criteria scores
    pub criteria: Vec<Score>,
}

impl ProfileSummary {
    /// Profile for the employee with `selected_id`, or the first employee
    ///
    /// `None` only when the slice is empty. An unknown id falls back to the
    /// first employee.
    pub fn build(employees: &[Employee], selected_id: Option<&str>) -> Option<Self> {
        let employee = selected_id
            .and_then(|id| {
                employees
                    .iter()
                    .find(|e| e.id == id || e.personnel_code == id)
            })
            .or_else(|| employees.first())?;

        Some(ProfileSummary {
            evaluation_score: employee.evaluation_score,
            evaluations: vec![
                Score { name: "ارزیابی مدیرعامل", value: employee.manager_evaluation },
                Score { name: "ارزیابی مدیر مستقیم", value: employee.peer_evaluation },
                Score { name: "ارزیابی فردی", value: employee.self_evaluation },
                Score { name: "ارزیابی معاونت مربوطه", value: employee.deputy_evaluation },
            ],
            criteria: vec![
                Score { name: "عملکرد", value: employee.performance_score },
                Score { name: "دانش و تخصص", value: employee.knowledge_score },
                Score { name: "تعامل و رفتار", value: employee.behavior_score },
                Score { name: "مسئولیت و وفاداری", value: employee.responsibility_score },
            ],
            employee: employee.clone(),
        })
    }
}

/// Overtime and pay per department
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepartmentOvertime {
    pub name: String,
    pub average_salary: i64,
    pub average_contract_salary: i64,
    pub average_overtime_hours: i64,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OvertimeSummary {
    pub total_overtime_hours: f64,
    pub departments: Vec<DepartmentOvertime>,
}

impl OvertimeSummary {
    pub fn build(employees: &[Employee]) -> Self {
        let salary = aggregate::average_by(employees, |e| &e.department, |e| e.salary);
        let contract = aggregate::average_by(
            employees,
            |e| &e.department,
            |e| e.salary * CONTRACT_SALARY_RATIO,
        );
        let hours = aggregate::average_by(employees, |e| &e.department, |e| e.overtime_hours);

        // All three groupings share first-seen order, so they zip by position
        let departments = salary
            .into_iter()
            .zip(contract)
            .zip(hours)
            .map(|((s, c), h)| DepartmentOvertime {
                name: s.name,
                average_salary: s.average,
                average_contract_salary: c.average,
                average_overtime_hours: h.average,
                count: s.count,
            })
            .collect();

        OvertimeSummary {
            total_overtime_hours: employees.iter().map(|e| e.overtime_hours).sum(),
            departments,
        }
    }
}
