//! Application state for one dashboard session
//!
//! [`AppState`] is a plain value. Every user action produces a new state from
//! the old one; the employee collection itself sits behind an `Arc` and is
//! only ever replaced whole, so cloning a state is cheap.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::employee::{Employee, Tab};
use crate::filter::{FilterKey, FilterOptions, FilterState};
use crate::views::{
    BirthdaySummary, MapSummary, OverviewSummary, OvertimeSummary, ProfileSummary, SalarySummary,
};

/// Which screen the session is on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum View {
    Upload,
    Dashboard,
}

/// Where the loaded records came from
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DataSource {
    Upload { file_name: String },
    Demo { count: usize },
}

/// A loaded employee collection
#[derive(Clone, Debug)]
pub struct Dataset {
    pub employees: Arc<Vec<Employee>>,
    pub source: DataSource,
    pub loaded_at: DateTime<Local>,
}

/// Full session state
#[derive(Clone, Debug, Default)]
pub struct AppState {
    dataset: Option<Dataset>,
    filters: FilterState,
    active_tab: Tab,
    selected_month: Option<String>,
    selected_region: Option<i64>,
    selected_employee: Option<String>,
}

/// The summary of whichever tab is active
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum TabSummary {
    Overview(OverviewSummary),
    Birthdays(BirthdaySummary),
    Salary(SalarySummary),
    Map(MapSummary),
    Profile { profile: Option<ProfileSummary> },
    Overtime(OvertimeSummary),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        if self.dataset.is_some() {
            View::Dashboard
        } else {
            View::Upload
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selected_month(&self) -> Option<&str> {
        self.selected_month.as_deref()
    }

    pub fn selected_region(&self) -> Option<i64> {
        self.selected_region
    }

    pub fn selected_employee(&self) -> Option<&str> {
        self.selected_employee.as_deref()
    }

    /// Replace the collection and enter the dashboard with fresh filters
    ///
    /// Whatever was loaded before is discarded, including its filters, tab
    /// and selections.
    pub fn loaded(self, employees: Vec<Employee>, source: DataSource) -> Self {
        log::info!("loaded {} employees from {:?}", employees.len(), source);
        AppState {
            dataset: Some(Dataset {
                employees: Arc::new(employees),
                source,
                loaded_at: Local::now(),
            }),
            ..AppState::default()
        }
    }

    /// Clear everything and return to the upload view
    pub fn logged_out(self) -> Self {
        if let Some(dataset) = &self.dataset {
            log::info!("discarding {} employees", dataset.employees.len());
        }
        AppState::default()
    }

    pub fn with_filters(&self, filters: FilterState) -> Self {
        AppState {
            filters,
            ..self.clone()
        }
    }

    pub fn with_filter<I, S>(&self, key: FilterKey, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_filters(self.filters.with(key, values))
    }

    pub fn with_tab(&self, tab: Tab) -> Self {
        AppState {
            active_tab: tab,
            ..self.clone()
        }
    }

    /// Select a birth month for the drill-down list; `None` lists everyone
    pub fn with_selected_month(&self, month: Option<String>) -> Self {
        AppState {
            selected_month: month,
            ..self.clone()
        }
    }

    /// Select a region for the map drill-down; `None` lists everyone by region
    pub fn with_selected_region(&self, region: Option<i64>) -> Self {
        AppState {
            selected_region: region,
            ..self.clone()
        }
    }

    /// Select the employee shown on the profile tab by id or personnel code
    pub fn with_selected_employee(&self, id: Option<String>) -> Self {
        AppState {
            selected_employee: id,
            ..self.clone()
        }
    }

    /// Every loaded employee, unfiltered
    pub fn all_employees(&self) -> &[Employee] {
        match &self.dataset {
            Some(dataset) => dataset.employees.as_slice(),
            None => &[],
        }
    }

    /// The employees passing the active filters
    pub fn filtered(&self) -> Vec<Employee> {
        self.filters.apply(self.all_employees())
    }

    /// Filter choices drawn from the unfiltered collection
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_employees(self.all_employees())
    }

    /// Summary for the active tab over the filtered collection
    pub fn summary(&self, config: &DashboardConfig) -> TabSummary {
        self.summary_for(self.active_tab, config)
    }

    pub fn summary_for(&self, tab: Tab, config: &DashboardConfig) -> TabSummary {
        let employees = self.filtered();
        match tab {
            Tab::Overview => TabSummary::Overview(OverviewSummary::build(&employees, config)),
            Tab::Birthdays => TabSummary::Birthdays(BirthdaySummary::build(
                &employees,
                self.selected_month(),
            )),
            Tab::Salary => TabSummary::Salary(SalarySummary::build(&employees)),
            Tab::Map => {
                TabSummary::Map(MapSummary::build(&employees, self.selected_region()))
            }
            Tab::Profile => TabSummary::Profile {
                profile: ProfileSummary::build(&employees, self.selected_employee()),
            },
            Tab::Overtime => TabSummary::Overtime(OvertimeSummary::build(&employees)),
        }
    }
}
