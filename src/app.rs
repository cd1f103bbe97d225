//! Interactive dashboard shell
//!
//! Hosts one [`AppState`] and drives it from line commands typed at a prompt.
//! Every command produces a new state; rendering reads the summary of the
//! active tab over the filtered collection.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::DashboardConfig;
use crate::downloader;
use crate::employee::Tab;
use crate::filter::FilterKey;
use crate::loader;
use crate::persian::{format_number, normalize_digits, to_persian_digits};
use crate::sample;
use crate::session::{AppState, DataSource, TabSummary, View};
use crate::views::{EmployeeLine, Score};

/// Data to load before the prompt opens
#[derive(Clone, Debug, PartialEq)]
pub enum InitialLoad {
    File(PathBuf),
    Demo(usize),
}

/// One parsed shell command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `load <path>`
    Load(PathBuf),
    /// `demo [count]`
    Demo(Option<usize>),
    /// `template [path]`
    Template(Option<PathBuf>),
    /// `export [path]`, writes the filtered employees
    Export(Option<PathBuf>),
    /// `tab <name>`
    Tab(Tab),
    Show,
    /// `filter <key> <value>` toggles one value
    Filter(FilterKey, String),
    /// `clear [key]`, every key when none is given
    Clear(Option<FilterKey>),
    /// `select [id]`, the first employee when none is given
    Select(Option<String>),
    /// `month [name]`, every employee when none is given
    Month(Option<String>),
    /// `region [number]`, every employee by region when none is given
    Region(Option<i64>),
    Options,
    /// `json`, toggles JSON output
    Json,
    Logout,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// # Arguments
    /// * `line` - The trimmed text typed at the prompt
    ///
    /// # Returns
    /// * `Result<Command, String>` - The command, or a status message for the prompt
    ///
    /// # Examples
    /// ```
    /// use hr_dashboard::app::Command;
    /// use hr_dashboard::filter::FilterKey;
    ///
    /// assert_eq!(
    ///     Command::parse("filter department مالی"),
    ///     Ok(Command::Filter(FilterKey::Department, "مالی".to_string()))
    /// );
    /// assert!(Command::parse("frobnicate").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        match name {
            "load" => argument
                .map(|path| Command::Load(PathBuf::from(path)))
                .ok_or_else(|| "usage: load <path>".to_string()),
            "demo" => match argument {
                Some(count) => count
                    .parse::<usize>()
                    .map(|n| Command::Demo(Some(n)))
                    .map_err(|_| format!("invalid count: {}", count)),
                None => Ok(Command::Demo(None)),
            },
            "template" => Ok(Command::Template(argument.map(PathBuf::from))),
            "export" => Ok(Command::Export(argument.map(PathBuf::from))),
            "tab" => match argument {
                Some(tab) => tab.parse::<Tab>().map(Command::Tab),
                None => Err("usage: tab <name>".to_string()),
            },
            "show" => Ok(Command::Show),
            "filter" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "usage: filter <key> <value>".to_string())?;
                Ok(Command::Filter(
                    key.parse::<FilterKey>()?,
                    value.trim().to_string(),
                ))
            }
            "clear" => match argument {
                Some(key) => key.parse::<FilterKey>().map(|k| Command::Clear(Some(k))),
                None => Ok(Command::Clear(None)),
            },
            "select" => Ok(Command::Select(argument)),
            "month" => Ok(Command::Month(argument)),
            "region" => match argument {
                Some(region) => normalize_digits(&region)
                    .parse::<i64>()
                    .map(|n| Command::Region(Some(n)))
                    .map_err(|_| format!("invalid region: {}", region)),
                None => Ok(Command::Region(None)),
            },
            "options" => Ok(Command::Options),
            "json" => Ok(Command::Json),
            "logout" => Ok(Command::Logout),
            "help" => Ok(Command::Help),
            "q" | "quit" => Ok(Command::Quit),
            "" => Err("invalid command".to_string()),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

/// What a command left behind for the prompt
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// Text to print, possibly empty
    pub output: String,
    /// Short status shown in the next prompt
    pub status: String,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Outcome {
            output,
            status: "ok".to_string(),
        }
    }

    fn failed(output: impl Into<String>, status: impl Into<String>) -> Self {
        Outcome {
            output: output.into(),
            status: status.into(),
        }
    }
}

/// A dashboard session bound to its configuration
#[derive(Clone, Debug)]
pub struct Shell {
    state: AppState,
    config: DashboardConfig,
    json: bool,
}

impl Shell {
    pub fn new(config: DashboardConfig) -> Self {
        Shell {
            state: AppState::new(),
            config,
            json: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn json_output(&self) -> bool {
        self.json
    }

    /// Run one command against the session
    ///
    /// Failed loads leave the current state untouched and report the Persian
    /// notice of the error.
    pub async fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Load(path) => self.load(path).await,
            Command::Demo(count) => {
                let count = count.unwrap_or(self.config.sample_size);
                let employees = sample::generate_sample_data(count);
                self.replace(employees, DataSource::Demo { count })
            }
            Command::Template(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(downloader::TEMPLATE_FILE_NAME));
                match downloader::save_template(&path) {
                    Ok(()) => Outcome::ok(format!("template saved to {}", path.display())),
                    Err(e) => {
                        log::error!("template export failed: {}", e);
                        Outcome::failed(e.notice(), "export failed")
                    }
                }
            }
            Command::Export(path) => {
                if self.state.view() == View::Upload {
                    return no_data();
                }
                let path = path.unwrap_or_else(|| PathBuf::from("employees.xlsx"));
                let employees = self.state.filtered();
                match downloader::save_employees(&path, &employees) {
                    Ok(()) => Outcome::ok(format!(
                        "{} employees saved to {}",
                        employees.len(),
                        path.display()
                    )),
                    Err(e) => {
                        log::error!("export failed: {}", e);
                        Outcome::failed(e.notice(), "export failed")
                    }
                }
            }
            Command::Tab(tab) => {
                self.state = self.state.with_tab(tab);
                self.render()
            }
            Command::Show => self.render(),
            Command::Filter(key, value) => {
                let filters = self.state.filters().toggled(key, &value);
                self.state = self.state.with_filters(filters);
                self.render()
            }
            Command::Clear(key) => {
                let filters = match key {
                    Some(key) => self.state.filters().cleared(key),
                    None => Default::default(),
                };
                self.state = self.state.with_filters(filters);
                self.render()
            }
            Command::Select(id) => {
                self.state = self
                    .state
                    .with_selected_employee(id)
                    .with_tab(Tab::Profile);
                self.render()
            }
            Command::Month(month) => {
                self.state = self
                    .state
                    .with_selected_month(month)
                    .with_tab(Tab::Birthdays);
                self.render()
            }
            Command::Region(region) => {
                self.state = self
                    .state
                    .with_selected_region(region)
                    .with_tab(Tab::Map);
                self.render()
            }
            Command::Options => self.options(),
            Command::Json => {
                self.json = !self.json;
                Outcome::ok(format!(
                    "json output {}",
                    if self.json { "on" } else { "off" }
                ))
            }
            Command::Logout => {
                self.state = std::mem::take(&mut self.state).logged_out();
                Outcome::ok("logged out".to_string())
            }
            Command::Help => Outcome::ok(HELP.to_string()),
            Command::Quit => Outcome::ok(String::new()),
        }
    }

    async fn load(&mut self, path: PathBuf) -> Outcome {
        match loader::load_workbook(&path).await {
            Ok(employees) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.replace(employees, DataSource::Upload { file_name })
            }
            Err(e) => {
                log::error!("load failed: {}", e);
                Outcome::failed(e.notice(), "load failed")
            }
        }
    }

    fn replace(&mut self, employees: Vec<crate::employee::Employee>, source: DataSource) -> Outcome {
        self.state = std::mem::take(&mut self.state).loaded(employees, source);
        self.render()
    }

    fn options(&self) -> Outcome {
        if self.state.view() == View::Upload {
            return no_data();
        }
        let options = self.state.filter_options();
        if self.json {
            return json_outcome(&options);
        }

        let mut out = String::new();
        for key in FilterKey::ALL {
            let selected = self.state.filters().selected(key);
            let values: Vec<String> = options
                .for_key(key)
                .iter()
                .map(|v| {
                    if selected.contains(v) {
                        format!("[{}]", v)
                    } else {
                        v.clone()
                    }
                })
                .collect();
            let _ = writeln!(out, "{} ({}): {}", key.label(), key, values.join("، "));
        }
        Outcome::ok(out)
    }

    /// Render the active tab
    pub fn render(&self) -> Outcome {
        if self.state.view() == View::Upload {
            return no_data();
        }
        let summary = self.state.summary(&self.config);
        if self.json {
            return json_outcome(&summary);
        }

        let mut out = render_summary(&summary);
        let shown = self.state.filtered().len();
        let total = self.state.all_employees().len();
        let _ = writeln!(
            out,
            "\n[{}] نمایش {} از {} نفر",
            self.state.active_tab().label(),
            format_number(shown as i64),
            format_number(total as i64)
        );
        Outcome::ok(out)
    }
}

const HELP: &str = "Commands:
  load <path>          Load employees from an .xlsx/.xls workbook
  demo [count]         Load generated sample employees
  template [path]      Save the upload template
  export [path]        Save the filtered employees as a workbook
  tab <name>           Switch tab: overview, birthdays, salary, map, profile, overtime
  show                 Render the active tab
  filter <key> <value> Toggle a filter value: gender, education, department, location, position
  clear [key]          Clear one filter, or all of them
  select [id]          Show the profile of an employee by id or personnel code
  month [name]         List employees born in a Persian month
  region [number]      List employees of one region (1-22)
  options              List the values each filter offers
  json                 Toggle JSON output
  logout               Discard the loaded data
  q                    Quit";

fn no_data() -> Outcome {
    Outcome::failed("no data loaded; use `load <path>` or `demo`", "no data")
}

fn json_outcome<T: serde::Serialize>(value: &T) -> Outcome {
    match serde_json::to_string_pretty(value) {
        Ok(json) => Outcome::ok(json),
        Err(e) => Outcome::failed(e.to_string(), "json error"),
    }
}

/// Plain-text rendering of one tab summary
pub fn render_summary(summary: &TabSummary) -> String {
    let mut out = String::new();
    match summary {
        TabSummary::Overview(overview) => {
            for (label, value) in overview.kpis.display() {
                let _ = writeln!(out, "{}: {}", label, value);
            }
            section(&mut out, "رده سنی");
            for group in &overview.age_groups {
                count_line(&mut out, &group.name, group.count);
            }
            for (title, shares) in [
                ("جنسیت", &overview.gender),
                ("وضعیت تاهل", &overview.marital_status),
                ("محل فعالیت", &overview.location),
                ("تحصیلات", &overview.education),
            ] {
                section(&mut out, title);
                for share in shares {
                    let _ = writeln!(
                        out,
                        "  {}: {} ({}٪)",
                        share.name,
                        format_number(share.count as i64),
                        format_number(share.percent)
                    );
                }
            }
            section(&mut out, "معاونت");
            for group in &overview.departments {
                count_line(&mut out, &group.name, group.count);
            }
            section(&mut out, "جایگاه سازمانی");
            for group in &overview.positions {
                count_line(&mut out, &group.name, group.count);
            }
        }
        TabSummary::Birthdays(birthdays) => {
            section(&mut out, "تولد بر اساس ماه");
            for month in &birthdays.months {
                count_line(&mut out, &month.name, month.count);
            }
            section(
                &mut out,
                birthdays.selected_month.as_deref().unwrap_or("همه ماه‌ها"),
            );
            employee_lines(&mut out, &birthdays.employees);
        }
        TabSummary::Salary(salary) => {
            for (title, groups) in [
                ("میانگین حقوق بر اساس معاونت", &salary.by_department),
                ("میانگین حقوق بر اساس جایگاه", &salary.by_position),
                ("میانگین حقوق بر اساس جنسیت", &salary.by_gender),
                ("میانگین حقوق بر اساس تحصیلات", &salary.by_education),
            ] {
                section(&mut out, title);
                for group in groups {
                    let _ = writeln!(
                        out,
                        "  {}: {} ({} نفر)",
                        group.name,
                        format_number(group.average),
                        format_number(group.count as i64)
                    );
                }
            }
        }
        TabSummary::Map(map) => {
            section(&mut out, "پراکندگی مناطق");
            for region in &map.regions {
                let bar = "█".repeat((region.intensity * 20.0).round() as usize);
                let _ = writeln!(
                    out,
                    "  منطقه {:>3}: {:>4} {}",
                    to_persian_digits(&region.region.to_string()),
                    format_number(region.count as i64),
                    bar
                );
            }
            match map.selected_region {
                Some(region) => section(
                    &mut out,
                    &format!("کارکنان منطقه {}", to_persian_digits(&region.to_string())),
                ),
                None => section(&mut out, "کارکنان بر اساس منطقه"),
            }
            employee_lines(&mut out, &map.employees);
        }
        TabSummary::Profile { profile } => match profile {
            Some(profile) => {
                let e = &profile.employee;
                let _ = writeln!(
                    out,
                    "{} ({}) - {} / {}",
                    e.display_name(),
                    e.id,
                    e.department,
                    e.position
                );
                let _ = writeln!(
                    out,
                    "امتیاز ارزشیابی: {}",
                    to_persian_digits(&e.evaluation_score.to_string())
                );
                section(&mut out, "ارزیابی‌ها");
                score_lines(&mut out, &profile.evaluations);
                section(&mut out, "معیارها");
                score_lines(&mut out, &profile.criteria);
            }
            None => out.push_str("کارمندی برای نمایش وجود ندارد\n"),
        },
        TabSummary::Overtime(overtime) => {
            let _ = writeln!(
                out,
                "مجموع اضافه کاری: {} ساعت",
                format_number(overtime.total_overtime_hours.round() as i64)
            );
            section(&mut out, "اضافه کاری بر اساس معاونت");
            for d in &overtime.departments {
                let _ = writeln!(
                    out,
                    "  {}: حقوق {} / قراردادی {} / اضافه کار {} ساعت ({} نفر)",
                    d.name,
                    format_number(d.average_salary),
                    format_number(d.average_contract_salary),
                    format_number(d.average_overtime_hours),
                    format_number(d.count as i64)
                );
            }
        }
    }
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {} ==", title);
}

fn count_line(out: &mut String, name: &str, count: usize) {
    let _ = writeln!(out, "  {}: {}", name, format_number(count as i64));
}

fn score_lines(out: &mut String, scores: &[Score]) {
    for score in scores {
        let _ = writeln!(
            out,
            "  {}: {}",
            score.name,
            to_persian_digits(&score.value.to_string())
        );
    }
}

fn employee_lines(out: &mut String, lines: &[EmployeeLine]) {
    for line in lines {
        let _ = writeln!(
            out,
            "  {} {} | {} | {} | منطقه {} | {}",
            line.id,
            line.full_name.as_deref().unwrap_or(&line.personnel_code),
            line.department,
            line.position,
            to_persian_digits(&line.region.to_string()),
            line.birth_date
        );
    }
}

/// Run the interactive shell until `q` or end of input
///
/// # Arguments
/// * `config` - Dashboard configuration
/// * `initial` - Optional data to load before the first prompt
pub async fn run(config: DashboardConfig, initial: Option<InitialLoad>) -> anyhow::Result<()> {
    let session_start = Instant::now();
    let mut shell = Shell::new(config);
    let mut status = String::from("ok");

    if let Some(initial) = initial {
        let command = match initial {
            InitialLoad::File(path) => Command::Load(path),
            InitialLoad::Demo(count) => Command::Demo(Some(count)),
        };
        let outcome = shell.execute(command).await;
        println!("{}", outcome.output);
        status = outcome.status;
    } else {
        println!("type `help` for commands");
    }

    let stdin = io::stdin();
    let mut start_time = Instant::now();
    loop {
        print!(
            "[{:.1}] ({}) > ",
            start_time.elapsed().as_secs_f64(),
            status
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        start_time = Instant::now();

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                status = message;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        let outcome = shell.execute(command).await;
        if !outcome.output.is_empty() {
            println!("{}", outcome.output);
        }
        status = outcome.status;
    }

    log::info!(
        "session ended after {:.1} seconds",
        session_start.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arguments() {
        assert_eq!(Command::parse("demo"), Ok(Command::Demo(None)));
        assert_eq!(Command::parse("demo 12"), Ok(Command::Demo(Some(12))));
        assert!(Command::parse("demo many").is_err());
        assert_eq!(Command::parse("tab map"), Ok(Command::Tab(Tab::Map)));
        assert_eq!(Command::parse("tab نقشه"), Ok(Command::Tab(Tab::Map)));
        assert_eq!(Command::parse("clear"), Ok(Command::Clear(None)));
        assert_eq!(
            Command::parse("clear gender"),
            Ok(Command::Clear(Some(FilterKey::Gender)))
        );
        assert_eq!(
            Command::parse("month اردیبهشت"),
            Ok(Command::Month(Some("اردیبهشت".to_string())))
        );
        assert_eq!(Command::parse("region ۷"), Ok(Command::Region(Some(7))));
        assert_eq!(Command::parse("region"), Ok(Command::Region(None)));
        assert!(Command::parse("region north").is_err());
        assert_eq!(Command::parse("  q  "), Ok(Command::Quit));
    }

    #[test]
    fn filter_value_may_contain_spaces() {
        assert_eq!(
            Command::parse("filter department فنی و اجرایی"),
            Ok(Command::Filter(
                FilterKey::Department,
                "فنی و اجرایی".to_string()
            ))
        );
        assert!(Command::parse("filter department").is_err());
        assert!(Command::parse("filter salary 10").is_err());
    }

    #[tokio::test]
    async fn commands_need_data() {
        let mut shell = Shell::new(DashboardConfig::default());
        let outcome = shell.execute(Command::Show).await;
        assert_eq!(outcome.status, "no data");

        let outcome = shell.execute(Command::Demo(Some(10))).await;
        assert_eq!(outcome.status, "ok");
        assert_eq!(shell.state().all_employees().len(), 10);

        shell.execute(Command::Logout).await;
        assert_eq!(shell.state().view(), View::Upload);
    }

    #[tokio::test]
    async fn region_command_narrows_the_map_list() {
        let mut shell = Shell::new(DashboardConfig::default());
        shell.execute(Command::Demo(Some(40))).await;
        let region = shell.state().all_employees()[0].region;
        let expected = shell
            .state()
            .all_employees()
            .iter()
            .filter(|e| e.region == region)
            .count();

        shell.execute(Command::Region(Some(region))).await;
        assert_eq!(shell.state().active_tab(), Tab::Map);
        match shell.state().summary(&DashboardConfig::default()) {
            TabSummary::Map(map) => {
                assert_eq!(map.selected_region, Some(region));
                assert_eq!(map.employees.len(), expected);
            }
            other => panic!("unexpected summary {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejected_upload_keeps_data() {
        let mut shell = Shell::new(DashboardConfig::default());
        shell.execute(Command::Demo(Some(5))).await;

        let outcome = shell
            .execute(Command::Load(PathBuf::from("employees.csv")))
            .await;
        assert_eq!(outcome.output, crate::error::WRONG_FILE_TYPE_NOTICE);
        assert_eq!(shell.state().all_employees().len(), 5);
    }

    #[tokio::test]
    async fn json_output_serializes_summary() {
        let mut shell = Shell::new(DashboardConfig::default());
        shell.execute(Command::Json).await;
        let outcome = shell.execute(Command::Demo(Some(3))).await;
        let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(value["tab"], "overview");
        assert_eq!(value["kpis"]["staff_count"], 3);
    }
}
