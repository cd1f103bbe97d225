//! Column vocabulary shared by the normalizer and the workbook writer
//!
//! Every employee field has one canonical header (written to templates and
//! exports), the Persian labels accepted when reading, and an English alias.
//! Lookup tries the Persian labels in order, then the alias.

/// A recognized spreadsheet column
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    /// Header written to templates and exports
    pub header: &'static str,
    /// Persian labels accepted when reading, in lookup order
    pub labels: &'static [&'static str],
    /// Machine-friendly alias, tried after the Persian labels
    pub alias: Option<&'static str>,
    /// Value placed in the template's example row
    pub example: Example,
}

/// Example value for the template row
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Example {
    Text(&'static str),
    Number(f64),
}

impl Column {
    /// All keys to try for this column, Persian labels first
    pub fn lookup_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.labels.iter().copied().chain(self.alias)
    }
}

/// Leading row-number column of the template; never read back
pub const ROW_NUMBER_HEADER: &str = "ردیف";

macro_rules! column {
    ($name:ident, $header:expr, [$($label:expr),+ $(,)?], $alias:expr, $example:expr) => {
        pub const $name: Column = Column {
            header: $header,
            labels: &[$($label),+],
            alias: $alias,
            example: $example,
        };
    };
}

column!(PERSONNEL_CODE, "کد پرسنلی", ["کد پرسنلی"], Some("personnelCode"), Example::Text("10001"));
column!(NAME, "نام", ["نام"], Some("name"), Example::Text("(اختیاری)"));
column!(LAST_NAME, "نام خانوادگی", ["نام خانوادگی"], Some("lastName"), Example::Text("(اختیاری)"));
column!(GENDER, "جنسیت", ["جنسیت"], Some("gender"), Example::Text("مرد یا زن"));
column!(BIRTH_DATE, "تاریخ تولد", ["تاریخ تولد"], Some("birthDate"), Example::Text("1370/01/15"));
column!(BIRTH_MONTH, "ماه تولد", ["ماه تولد"], Some("birthMonth"), Example::Text("فروردین"));
column!(EDUCATION, "مدرک تحصیلی", ["مدرک تحصیلی"], Some("education"), Example::Text("لیسانس"));
column!(
    EDUCATION_FIELD,
    "رشته تحصیلی",
    ["رشته تحصیلی"],
    Some("educationField"),
    Example::Text("مهندسی کامپیوتر")
);
column!(
    MARITAL_STATUS,
    "وضعیت تاهل",
    ["وضعیت تاهل"],
    Some("maritalStatus"),
    Example::Text("متاهل یا مجرد")
);
column!(CHILDREN_COUNT, "تعداد فرزندان", ["تعداد فرزندان"], Some("childrenCount"), Example::Number(0.0));
column!(DEPARTMENT, "معاونت", ["معاونت"], Some("department"), Example::Text("معاونت فناوری"));
column!(POSITION, "جایگاه شغلی", ["جایگاه شغلی"], Some("position"), Example::Text("کارشناس"));
column!(
    EMPLOYMENT_TYPE,
    "نوع استخدام",
    ["نوع استخدام"],
    Some("employmentType"),
    Example::Text("قراردادی")
);
column!(
    EMPLOYMENT_DATE,
    "تاریخ استخدام",
    ["تاریخ استخدام"],
    Some("employmentDate"),
    Example::Text("1395/06/01")
);
column!(LOCATION, "محل فعالیت", ["محل فعالیت"], Some("location"), Example::Text("ستاد"));
column!(REGION, "منطقه", ["منطقه"], Some("region"), Example::Number(1.0));
column!(SALARY, "حقوق", ["حقوق پرداختی", "حقوق"], Some("salary"), Example::Number(50_000_000.0));
column!(
    CONTRACT_SALARY,
    "حقوق قراردادی",
    ["حقوق قراردادی"],
    Some("contractSalary"),
    Example::Number(45_000_000.0)
);
column!(
    OVERTIME_HOURS,
    "اضافه کاری (ساعت)",
    ["اضافه کار", "اضافه کاری (ساعت)"],
    Some("overtimeHours"),
    Example::Number(20.0)
);
column!(
    EVALUATION_SCORE,
    "نمره ارزیابی",
    ["امتیاز ارزشیابی", "نمره ارزیابی"],
    Some("evaluationScore"),
    Example::Number(85.0)
);
column!(
    MANAGER_EVALUATION,
    "ارزیابی مدیرعامل",
    ["ارزیابی مدیرعامل"],
    Some("managerEvaluation"),
    Example::Number(80.0)
);
column!(
    SELF_EVALUATION,
    "ارزیابی فردی",
    ["ارزیابی فردی"],
    Some("selfEvaluation"),
    Example::Number(90.0)
);
column!(
    DEPUTY_EVALUATION,
    "ارزیابی معاونت",
    ["ارزیابی معاونت"],
    Some("deputyEvaluation"),
    Example::Number(85.0)
);
column!(
    PEER_EVALUATION,
    "ارزیابی مدیر مستقیم",
    ["ارزیابی مدیر مستقیم", "ارزیابی همکاران"],
    Some("peerEvaluation"),
    Example::Number(82.0)
);
column!(
    PERFORMANCE_SCORE,
    "نمره عملکرد",
    ["عملکرد", "نمره عملکرد"],
    Some("performanceScore"),
    Example::Number(88.0)
);
column!(
    KNOWLEDGE_SCORE,
    "نمره دانش و تخصص",
    ["دانش و تخصص", "نمره دانش و تخصص"],
    Some("knowledgeScore"),
    Example::Number(85.0)
);
column!(
    BEHAVIOR_SCORE,
    "نمره تعامل و رفتار",
    ["تعامل و رفتار", "نمره تعامل و رفتار"],
    Some("behaviorScore"),
    Example::Number(90.0)
);
column!(
    RESPONSIBILITY_SCORE,
    "نمره مسئولیت",
    ["مسئولیت و وفاداری", "نمره مسئولیت"],
    Some("responsibilityScore"),
    Example::Number(87.0)
);
column!(AGE_GROUP, "رده سنی", ["رده سنی"], Some("ageGroup"), Example::Text("30-40"));
column!(TENURE, "سابقه", ["سابقه"], Some("tenure"), Example::Number(8.0));

/// Every column in template order
pub const ALL: [Column; 30] = [
    PERSONNEL_CODE,
    NAME,
    LAST_NAME,
    GENDER,
    BIRTH_DATE,
    BIRTH_MONTH,
    EDUCATION,
    EDUCATION_FIELD,
    MARITAL_STATUS,
    CHILDREN_COUNT,
    DEPARTMENT,
    POSITION,
    EMPLOYMENT_TYPE,
    EMPLOYMENT_DATE,
    LOCATION,
    REGION,
    SALARY,
    CONTRACT_SALARY,
    OVERTIME_HOURS,
    EVALUATION_SCORE,
    MANAGER_EVALUATION,
    SELF_EVALUATION,
    DEPUTY_EVALUATION,
    PEER_EVALUATION,
    PERFORMANCE_SCORE,
    KNOWLEDGE_SCORE,
    BEHAVIOR_SCORE,
    RESPONSIBILITY_SCORE,
    AGE_GROUP,
    TENURE,
];

/// Whether a header cell names a column the normalizer reads
pub fn is_recognized(header: &str) -> bool {
    ALL.iter().any(|column| column.lookup_keys().any(|key| key == header))
}
