use hr_dashboard::aggregate::{
    age_of, average_by, count_fixed, count_open, department_count, mean_age, mean_salary,
    in_region, percentage, region_counts, sorted_by_region, tenure_from_hire, with_shares,
};
use hr_dashboard::config::DashboardConfig;
use hr_dashboard::employee::{Employee, GENDERS, LOCATIONS};
use hr_dashboard::normalizer::{CellValue, normalize_rows, row};
use hr_dashboard::persian::MONTHS;
use hr_dashboard::sample::generate_sample_data_with_rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn employee(pairs: Vec<(&str, CellValue)>) -> Employee {
    normalize_rows(&[row(pairs)]).remove(0)
}

#[test]
fn month_counts_cover_the_year() {
    let employees = generate_sample_data_with_rng(78, &mut StdRng::seed_from_u64(3));
    let counts = count_fixed(&employees, &MONTHS, |e| Some(e.birth_month.clone()));

    assert_eq!(counts.len(), 12);
    assert_eq!(counts[0].name, "فروردین");
    assert_eq!(counts.iter().map(|g| g.count).sum::<usize>(), 78);
}

#[test]
fn fixed_enumerations_report_empty_categories() {
    let employees = vec![employee(vec![("محل فعالیت", "ستاد".into())])];
    let counts = count_fixed(&employees, &LOCATIONS, |e| Some(e.location.clone()));

    assert_eq!(counts.len(), 2);
    assert_eq!((counts[0].name.as_str(), counts[0].count), ("ستاد", 1));
    assert_eq!((counts[1].name.as_str(), counts[1].count), ("پروژه", 0));
}

#[test]
fn values_outside_the_enumeration_are_ignored() {
    let employees = vec![
        employee(vec![("جنسیت", "زن".into())]),
        employee(vec![("جنسیت", "نامشخص".into())]),
    ];
    let counts = count_fixed(&employees, &GENDERS, |e| Some(e.gender.clone()));
    assert_eq!(counts.iter().map(|g| g.count).sum::<usize>(), 1);
}

#[test]
fn open_groups_appear_in_first_seen_order() {
    let employees: Vec<Employee> = ["حقوقی", "مالی", "حقوقی", "بازرگانی"]
        .iter()
        .map(|d| employee(vec![("معاونت", (*d).into())]))
        .collect();
    let groups = count_open(&employees, |e| &e.department);

    let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["حقوقی", "مالی", "بازرگانی"]);
    assert_eq!(groups[0].count, 2);
}

#[test]
fn shares_are_rounded_percentages() {
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(1, 0), 0);

    let employees = vec![
        employee(vec![("جنسیت", "زن".into())]),
        employee(vec![("جنسیت", "مرد".into())]),
        employee(vec![("جنسیت", "مرد".into())]),
    ];
    let shares = with_shares(count_fixed(&employees, &GENDERS, |e| Some(e.gender.clone())));
    assert_eq!(shares[0].percent, 67);
    assert_eq!(shares[1].percent, 33);
}

#[test]
fn averages_over_nothing_are_zero() {
    let config = DashboardConfig::default();
    assert_eq!(mean_salary(&[]), 0);
    assert_eq!(mean_age(&[], &config), None);
    assert!(average_by(&[], |e| &e.department, |e| e.salary).is_empty());
    assert_eq!(department_count(&[]), 0);
}

#[test]
fn grouped_averages_round_to_integers() {
    let employees = vec![
        employee(vec![("معاونت", "مالی".into()), ("حقوق", 100.0.into())]),
        employee(vec![("معاونت", "مالی".into()), ("حقوق", 101.0.into())]),
        employee(vec![("معاونت", "حقوقی".into()), ("حقوق", 50.0.into())]),
    ];
    let averages = average_by(&employees, |e| &e.department, |e| e.salary);

    assert_eq!(averages[0].name, "مالی");
    assert_eq!(averages[0].average, 101);
    assert_eq!(averages[0].count, 2);
    assert_eq!(averages[1].average, 50);
    assert_eq!(mean_salary(&employees), 84);
}

#[test]
fn age_counts_whole_years_to_the_reference_year() {
    let config = DashboardConfig::default();
    let e = employee(vec![("تاریخ تولد", "1370/01/15".into())]);
    assert_eq!(age_of(&e, &config), Some(33));

    let persian_digits = employee(vec![("تاریخ تولد", "۱۳۷۰/۰۱/۱۵".into())]);
    assert_eq!(age_of(&persian_digits, &config), Some(33));
}

#[test]
fn implausible_dates_are_left_out_of_means() {
    let config = DashboardConfig::default();
    let employees = vec![
        employee(vec![("تاریخ تولد", "1370/01/15".into())]),
        employee(vec![("تاریخ تولد", "1373/05/02".into())]),
        employee(vec![("تاریخ تولد", "2024/01/01".into())]),
        employee(vec![("تاریخ تولد", "نامعلوم".into())]),
        employee(vec![]),
    ];
    assert_eq!(mean_age(&employees, &config), Some(31.5));

    let hired_late = employee(vec![("تاریخ استخدام", "1404/01/01".into())]);
    assert_eq!(tenure_from_hire(&hired_late, &config), None);
    let hired = employee(vec![("تاریخ استخدام", "1395/06/01".into())]);
    assert_eq!(tenure_from_hire(&hired, &config), Some(8));
}

#[test]
fn regions_are_all_reported_and_sorted_stably() {
    let rows: Vec<_> = [5i64, 2, 5, 1]
        .iter()
        .map(|r| row([("منطقه", *r)]))
        .collect();
    let employees = normalize_rows(&rows);

    let tally = region_counts(&employees);
    let counts = &tally.regions;
    assert_eq!(counts.len(), 22);
    assert_eq!(tally.max_count, 2);
    assert_eq!(counts[4].count, 2);
    assert_eq!(counts[4].intensity, 1.0);
    assert_eq!(counts[1].intensity, 0.5);
    assert_eq!(counts[21].count, 0);

    let ids: Vec<_> = sorted_by_region(&employees).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["emp-4", "emp-2", "emp-1", "emp-3"]);
}

#[test]
fn empty_region_counts_have_zero_intensity() {
    let tally = region_counts(&[]);
    assert_eq!(tally.regions.len(), 22);
    assert_eq!(tally.max_count, 1);
    assert!(tally.regions.iter().all(|r| r.count == 0 && r.intensity == 0.0));
}

#[test]
fn out_of_range_regions_scale_the_map_consistently() {
    let rows: Vec<_> = [3i64, 40, 40, 40, 40]
        .iter()
        .map(|r| row([("منطقه", *r)]))
        .collect();
    let employees = normalize_rows(&rows);

    let tally = region_counts(&employees);
    assert_eq!(tally.max_count, 4);
    assert_eq!(tally.regions.iter().map(|r| r.count).sum::<usize>(), 1);
    for cell in &tally.regions {
        assert_eq!(cell.intensity, cell.count as f64 / tally.max_count as f64);
    }
    assert_eq!(tally.regions[2].intensity, 0.25);
}

#[test]
fn region_drill_down_keeps_input_order() {
    let rows: Vec<_> = [7i64, 2, 7, 40]
        .iter()
        .map(|r| row([("منطقه", *r)]))
        .collect();
    let employees = normalize_rows(&rows);

    let ids: Vec<_> = in_region(&employees, 7).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["emp-1", "emp-3"]);
    assert_eq!(in_region(&employees, 40).len(), 1);
    assert!(in_region(&employees, 5).is_empty());
}
