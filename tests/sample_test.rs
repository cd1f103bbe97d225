use hr_dashboard::employee::{FEMALE, GENDERS, LOCATIONS, REGION_COUNT};
use hr_dashboard::persian::PersianDate;
use hr_dashboard::sample::{DEFAULT_SAMPLE_SIZE, generate_sample_data, generate_sample_data_with_rng};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn generates_requested_count() {
    assert_eq!(generate_sample_data(DEFAULT_SAMPLE_SIZE).len(), 78);
    assert_eq!(generate_sample_data(0).len(), 0);
    assert_eq!(generate_sample_data(5).len(), 5);
}

#[test]
fn records_are_internally_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    for (i, e) in generate_sample_data_with_rng(200, &mut rng).iter().enumerate() {
        assert_eq!(e.id, format!("emp-{}", i + 1));
        assert_eq!(e.contract_salary, (0.8 * e.salary).round());
        assert!((100_000_000.0..300_000_000.0).contains(&e.salary));
        assert_eq!(e.salary.fract(), 0.0);
        assert!((1..=REGION_COUNT).contains(&e.region));
        assert!(GENDERS.contains(&e.gender.as_str()));
        assert!(LOCATIONS.contains(&e.location.as_str()));

        let birth = PersianDate::parse(&e.birth_date).unwrap();
        assert!((1350..1380).contains(&birth.year));
        assert_eq!(Some(e.birth_month.as_str()), birth.month_name());

        let hired = PersianDate::parse(&e.employment_date).unwrap();
        assert!((1395..1403).contains(&hired.year));

        let full_name = format!("{} {}", e.name.as_ref().unwrap(), e.last_name.as_ref().unwrap());
        assert_eq!(e.full_name.as_ref(), Some(&full_name));
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let first = generate_sample_data_with_rng(20, &mut StdRng::seed_from_u64(9));
    let second = generate_sample_data_with_rng(20, &mut StdRng::seed_from_u64(9));
    assert_eq!(first, second);
}

#[test]
fn a_minority_of_records_are_female() {
    let mut rng = StdRng::seed_from_u64(1);
    let employees = generate_sample_data_with_rng(1000, &mut rng);
    let female = employees.iter().filter(|e| e.gender == FEMALE).count();
    assert!(female > 100 && female < 300, "female count {}", female);
}

#[test]
fn salaries_stay_below_the_upper_bound_across_seeds() {
    for seed in 0..50 {
        let employees = generate_sample_data_with_rng(100, &mut StdRng::seed_from_u64(seed));
        assert!(
            employees.iter().all(|e| e.salary < 300_000_000.0),
            "seed {} produced a salary at the upper bound",
            seed
        );
    }
}
