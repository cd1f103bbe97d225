use hr_dashboard::employee::Employee;
use hr_dashboard::filter::{FilterKey, FilterOptions, FilterState};
use hr_dashboard::normalizer::{normalize_rows, row};

fn staff() -> Vec<Employee> {
    let departments = ["مالی", "مالی", "حقوقی", "مالی", "بازرگانی", "مالی", "حقوقی", "مالی", "مالی", "بازرگانی"];
    let rows: Vec<_> = departments
        .iter()
        .enumerate()
        .map(|(i, department)| {
            let gender = if i % 3 == 0 { "زن" } else { "مرد" };
            row([("معاونت", *department), ("جنسیت", gender), ("محل فعالیت", "ستاد")])
        })
        .collect();
    normalize_rows(&rows)
}

#[test]
fn empty_filter_is_identity() {
    let employees = staff();
    let state = FilterState::default();
    assert!(state.is_empty());
    assert_eq!(state.apply(&employees), employees);
}

#[test]
fn department_filter_keeps_matching_rows() {
    let employees = staff();
    let state = FilterState::default().with(FilterKey::Department, ["مالی"]);
    let filtered = state.apply(&employees);

    assert_eq!(filtered.len(), 6);
    assert!(filtered.iter().all(|e| e.department == "مالی"));
}

#[test]
fn keys_combine_with_and_values_with_or() {
    let employees = staff();

    let either = FilterState::default().with(FilterKey::Department, ["مالی", "حقوقی"]);
    assert_eq!(either.apply(&employees).len(), 8);

    // Female rows are 0, 3, 6, 9; of those only 0 and 3 are in مالی
    let both = either
        .with(FilterKey::Department, ["مالی"])
        .with(FilterKey::Gender, ["زن"]);
    let ids: Vec<_> = both.apply(&employees).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["emp-1", "emp-4"]);
}

#[test]
fn updates_leave_the_previous_state_alone() {
    let original = FilterState::default();
    let toggled = original.toggled(FilterKey::Location, "ستاد");

    assert!(original.is_empty());
    assert!(toggled.selected(FilterKey::Location).contains("ستاد"));
    assert!(toggled.toggled(FilterKey::Location, "ستاد").is_empty());
    assert!(toggled.cleared(FilterKey::Location).is_empty());
}

#[test]
fn filter_with_no_match_yields_nothing() {
    let employees = staff();
    let state = FilterState::default().with(FilterKey::Location, ["پروژه"]);
    assert!(state.apply(&employees).is_empty());
}

#[test]
fn options_list_distinct_values_in_first_seen_order() {
    let mut employees = staff();
    employees[0].position = "کارشناس".to_string();

    let options = FilterOptions::from_employees(&employees);
    assert_eq!(options.departments, ["مالی", "حقوقی", "بازرگانی"]);
    assert_eq!(options.genders, ["زن", "مرد"]);
    assert_eq!(options.for_key(FilterKey::Location), ["ستاد"]);
    // Blank positions are not offered
    assert_eq!(options.positions, ["کارشناس"]);
}

#[test]
fn keys_parse_from_names_and_labels() {
    assert_eq!("department".parse::<FilterKey>(), Ok(FilterKey::Department));
    assert_eq!("جنسیت".parse::<FilterKey>(), Ok(FilterKey::Gender));
    assert!("salary".parse::<FilterKey>().is_err());
}
