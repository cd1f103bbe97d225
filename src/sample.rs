use rand::Rng;
use rand::seq::SliceRandom;

use crate::employee::{Employee, FEMALE, LOCATIONS, MALE, MARRIED, REGION_COUNT, SINGLE};
use crate::persian::PersianDate;

/// Record count used by the demo action when none is given
pub const DEFAULT_SAMPLE_SIZE: usize = 78;

/// Ratio of contract salary to paid salary in generated records
pub const CONTRACT_SALARY_RATIO: f64 = 0.8;

const DEPARTMENTS: [&str; 6] = [
    "مالی",
    "فنی و اجرایی",
    "برنامه ریزی و توسعه",
    "بازرگانی",
    "حقوقی",
    "دفتر مدیرعامل",
];
const POSITIONS: [&str; 5] = ["کارشناس", "مدیر", "معاون", "مشاور", "خدمات"];
const EDUCATIONS: [&str; 5] = ["دیپلم و زیردیپلم", "کاردانی", "کارشناسی", "ارشد", "دکترا"];
const AGE_GROUP_LABELS: [&str; 5] = ["۲۰-۳۰", "۳۰-۴۰", "۴۰-۵۰", "۵۰+", "(Blank)"];
const EMPLOYMENT_TYPES: [&str; 2] = ["قراردادی", "رسمی"];

const MALE_NAMES: [&str; 16] = [
    "امیر", "محمد", "علی", "حسین", "رضا", "مهدی", "احمد", "جواد", "مسعود", "داود", "محمود", "جلال",
    "بهنام", "نوید", "سیدآرمین", "علی اکبر",
];
const FEMALE_NAMES: [&str; 7] = ["زهرا", "فاطمه", "مریم", "سارا", "الهه", "ریحانه", "سیده فاطمه"];
const LAST_NAMES: [&str; 28] = [
    "پایدار", "صفاری", "مختاری", "شهیدی", "پدرامی", "مهدوی", "عامری", "فرهانی", "صبوری", "صفری",
    "حامدی", "شادی", "مریدی", "کاظمی", "تاهدی", "مقدمی", "میثایی", "باقی", "لامعی", "نمینی",
    "سعیدی", "فدایی", "وارسته", "نوری", "احسنی", "واعظی", "پورمند", "کتایی",
];

/// Generate `count` synthetic employees with the thread-local RNG
///
/// Successive calls are not reproducible; use
/// [`generate_sample_data_with_rng`] with a seeded RNG when they must be.
pub fn generate_sample_data(count: usize) -> Vec<Employee> {
    generate_sample_data_with_rng(count, &mut rand::thread_rng())
}

/// Generate `count` synthetic employees from the given RNG
///
/// Every record is internally consistent: the birth month comes from the
/// generated birth date and the contract salary is 80% of the salary.
///
/// # Examples
/// ```
/// use hr_dashboard::sample::generate_sample_data_with_rng;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let employees = generate_sample_data_with_rng(5, &mut rng);
/// assert_eq!(employees.len(), 5);
/// ```
pub fn generate_sample_data_with_rng<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Employee> {
    let employees: Vec<Employee> = (0..count).map(|i| sample_employee(i, rng)).collect();
    log::info!("generated {} sample employees", employees.len());
    employees
}

fn sample_employee<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Employee {
    let is_female = rng.gen_bool(0.2);
    let first_name = if is_female {
        pick(&FEMALE_NAMES, rng)
    } else {
        pick(&MALE_NAMES, rng)
    };
    let last_name = pick(&LAST_NAMES, rng);
    let birth_date = random_date(1350, 30, rng);
    let salary = rng.gen_range(100_000_000_i64..300_000_000) as f64;

    Employee {
        id: format!("emp-{}", index + 1),
        personnel_code: (10001 + index).to_string(),
        name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        full_name: Some(format!("{} {}", first_name, last_name)),
        gender: if is_female { FEMALE } else { MALE }.to_string(),
        birth_date: birth_date.to_compact_string(),
        birth_month: birth_date.month_name().unwrap_or_default().to_string(),
        education: pick(&EDUCATIONS, rng).to_string(),
        education_field: "(Blank)".to_string(),
        marital_status: if rng.gen_bool(0.7) { MARRIED } else { SINGLE }.to_string(),
        children_count: rng.gen_range(0..4),
        department: pick(&DEPARTMENTS, rng).to_string(),
        position: pick(&POSITIONS, rng).to_string(),
        employment_type: pick(&EMPLOYMENT_TYPES, rng).to_string(),
        employment_date: random_date(1395, 8, rng).to_compact_string(),
        location: pick(&LOCATIONS, rng).to_string(),
        region: rng.gen_range(1..=REGION_COUNT),
        salary,
        contract_salary: (salary * CONTRACT_SALARY_RATIO).round(),
        overtime_hours: rng.gen_range(0..100) as f64,
        evaluation_score: rng.gen_range(60..100) as f64,
        manager_evaluation: rng.gen_range(15..25) as f64,
        self_evaluation: rng.gen_range(15..25) as f64,
        deputy_evaluation: rng.gen_range(12..20) as f64,
        peer_evaluation: rng.gen_range(10..20) as f64,
        performance_score: rng.gen_range(15..25) as f64,
        knowledge_score: rng.gen_range(12..20) as f64,
        behavior_score: rng.gen_range(10..20) as f64,
        responsibility_score: rng.gen_range(10..18) as f64,
        age_group: pick(&AGE_GROUP_LABELS, rng).to_string(),
        tenure: rng.gen_range(1..11),
    }
}

// Day stays within 1..=28 so every month is valid
fn random_date<R: Rng + ?Sized>(first_year: i32, span: i32, rng: &mut R) -> PersianDate {
    PersianDate {
        year: first_year + rng.gen_range(0..span),
        month: rng.gen_range(1..=12),
        day: rng.gen_range(1..=28),
    }
}

fn pick<'a, R: Rng + ?Sized>(items: &[&'a str], rng: &mut R) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}
