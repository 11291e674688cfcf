use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Academic stream a course belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Science,
    Commerce,
    Arts,
    Vocational,
}

impl Stream {
    pub const fn label(self) -> &'static str {
        match self {
            Stream::Science => "science",
            Stream::Commerce => "commerce",
            Stream::Arts => "arts",
            Stream::Vocational => "vocational",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "science" => Some(Self::Science),
            "commerce" => Some(Self::Commerce),
            "arts" | "humanities" => Some(Self::Arts),
            "vocational" => Some(Self::Vocational),
            _ => None,
        }
    }
}

/// Career branch used by the trait-path matcher when weighting courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Engineering,
    Medical,
    BusinessFinance,
    Law,
    Humanities,
    SkilledTrade,
}

impl Branch {
    pub const fn label(self) -> &'static str {
        match self {
            Branch::Engineering => "engineering",
            Branch::Medical => "medical",
            Branch::BusinessFinance => "business & finance",
            Branch::Law => "law",
            Branch::Humanities => "humanities",
            Branch::SkilledTrade => "skilled trade",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "engineering" => Some(Self::Engineering),
            "medical" => Some(Self::Medical),
            "business_finance" | "business & finance" | "business" | "finance" => {
                Some(Self::BusinessFinance)
            }
            "law" => Some(Self::Law),
            "humanities" => Some(Self::Humanities),
            "skilled_trade" | "skilled trade" | "skilled" => Some(Self::SkilledTrade),
            _ => None,
        }
    }
}

/// Stage at which a course can be taken up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassLevel {
    AfterTenth,
    AfterTwelfth,
}

impl ClassLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ClassLevel::AfterTenth => "after 10th",
            ClassLevel::AfterTwelfth => "after 12th",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "10" | "10th" | "after_tenth" | "after-10th" => Some(Self::AfterTenth),
            "12" | "12th" | "after_twelfth" | "after-12th" => Some(Self::AfterTwelfth),
            _ => None,
        }
    }
}

/// Job-market demand label shown to students and used by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl DemandLevel {
    pub const fn label(self) -> &'static str {
        match self {
            DemandLevel::Low => "low",
            DemandLevel::Medium => "medium",
            DemandLevel::High => "high",
            DemandLevel::VeryHigh => "very high",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "very_high" | "very high" => Some(Self::VeryHigh),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub full_name: String,
    pub stream: Stream,
    pub branch: Branch,
    pub class_level: ClassLevel,
    pub demand: DemandLevel,
    pub description: String,
}

#[derive(Debug)]
pub enum CourseImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Invalid {
        id: String,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for CourseImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseImportError::Io(err) => write!(f, "failed to read course catalog: {err}"),
            CourseImportError::Csv(err) => write!(f, "failed to parse course catalog: {err}"),
            CourseImportError::Invalid { id, field, value } => {
                write!(f, "course '{id}' has invalid {field} '{value}'")
            }
        }
    }
}

impl std::error::Error for CourseImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CourseImportError::Io(err) => Some(err),
            CourseImportError::Csv(err) => Some(err),
            CourseImportError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for CourseImportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for CourseImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Read-only course catalog keyed by course id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseCatalog {
    courses: BTreeMap<CourseId, Course>,
}

impl CourseCatalog {
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        Self {
            courses: courses
                .into_iter()
                .map(|course| (course.id.clone(), course))
                .collect(),
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CourseImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut courses = Vec::new();

        for record in csv_reader.deserialize::<CourseRow>() {
            let row = record?;
            courses.push(row.into_course()?);
        }

        Ok(Self::from_courses(courses))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CourseImportError> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn by_stream_and_level(&self, stream: Stream, level: ClassLevel) -> Vec<&Course> {
        self.iter()
            .filter(|course| course.stream == stream && course.class_level == level)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The built-in catalog of common Indian courses across the four streams
    /// and both class levels.
    pub fn standard() -> Self {
        let courses = vec![
            // Science, after 12th
            course(
                "btech-cs",
                "B.Tech CS",
                "Bachelor of Technology in Computer Science",
                Stream::Science,
                Branch::Engineering,
                ClassLevel::AfterTwelfth,
                DemandLevel::VeryHigh,
                "Programming, algorithms and software systems.",
            ),
            course(
                "btech-mechanical",
                "B.Tech Mechanical",
                "Bachelor of Technology in Mechanical Engineering",
                Stream::Science,
                Branch::Engineering,
                ClassLevel::AfterTwelfth,
                DemandLevel::Medium,
                "Design and manufacture of machines and automobiles.",
            ),
            course(
                "btech-electrical",
                "B.Tech Electrical",
                "Bachelor of Technology in Electrical Engineering",
                Stream::Science,
                Branch::Engineering,
                ClassLevel::AfterTwelfth,
                DemandLevel::High,
                "Power systems, electronics and control engineering.",
            ),
            course(
                "mbbs",
                "MBBS",
                "Bachelor of Medicine and Bachelor of Surgery",
                Stream::Science,
                Branch::Medical,
                ClassLevel::AfterTwelfth,
                DemandLevel::VeryHigh,
                "Clinical medicine, patient care and health sciences.",
            ),
            course(
                "bsc-nursing",
                "B.Sc Nursing",
                "Bachelor of Science in Nursing",
                Stream::Science,
                Branch::Medical,
                ClassLevel::AfterTwelfth,
                DemandLevel::High,
                "Nursing practice, patient care and community health.",
            ),
            course(
                "bpharm",
                "B.Pharm",
                "Bachelor of Pharmacy",
                Stream::Science,
                Branch::Medical,
                ClassLevel::AfterTwelfth,
                DemandLevel::Medium,
                "Pharmaceutical sciences and drug development.",
            ),
            // Science, after 10th
            course(
                "pcm-11th",
                "PCM (Class 11-12)",
                "Physics, Chemistry, Mathematics stream",
                Stream::Science,
                Branch::Engineering,
                ClassLevel::AfterTenth,
                DemandLevel::High,
                "Senior-secondary science with maths, the engineering route.",
            ),
            course(
                "pcb-11th",
                "PCB (Class 11-12)",
                "Physics, Chemistry, Biology stream",
                Stream::Science,
                Branch::Medical,
                ClassLevel::AfterTenth,
                DemandLevel::High,
                "Senior-secondary science with biology, the medical route.",
            ),
            course(
                "diploma-engineering",
                "Polytechnic Diploma",
                "Diploma in Engineering",
                Stream::Science,
                Branch::Engineering,
                ClassLevel::AfterTenth,
                DemandLevel::Medium,
                "Three-year practical engineering diploma after class 10.",
            ),
            // Commerce, after 12th
            course(
                "bcom",
                "B.Com",
                "Bachelor of Commerce",
                Stream::Commerce,
                Branch::BusinessFinance,
                ClassLevel::AfterTwelfth,
                DemandLevel::Medium,
                "Accounting, economics and business fundamentals.",
            ),
            course(
                "ca",
                "CA",
                "Chartered Accountancy",
                Stream::Commerce,
                Branch::BusinessFinance,
                ClassLevel::AfterTwelfth,
                DemandLevel::VeryHigh,
                "Accounting, audit and taxation with numbers at the core.",
            ),
            course(
                "bba",
                "BBA",
                "Bachelor of Business Administration",
                Stream::Commerce,
                Branch::BusinessFinance,
                ClassLevel::AfterTwelfth,
                DemandLevel::High,
                "Management, leadership and entrepreneurship foundations.",
            ),
            course(
                "cs-company-secretary",
                "CS",
                "Company Secretary",
                Stream::Commerce,
                Branch::BusinessFinance,
                ClassLevel::AfterTwelfth,
                DemandLevel::Medium,
                "Corporate law, governance and compliance records.",
            ),
            // Commerce, after 10th
            course(
                "commerce-11th",
                "Commerce (Class 11-12)",
                "Commerce stream with Accountancy",
                Stream::Commerce,
                Branch::BusinessFinance,
                ClassLevel::AfterTenth,
                DemandLevel::High,
                "Senior-secondary commerce: accounts, business studies, economics.",
            ),
            course(
                "commerce-maths-11th",
                "Commerce + Maths (Class 11-12)",
                "Commerce stream with Mathematics",
                Stream::Commerce,
                Branch::BusinessFinance,
                ClassLevel::AfterTenth,
                DemandLevel::High,
                "Commerce with maths, keeping finance and analytics routes open.",
            ),
            // Arts, after 12th
            course(
                "ba-llb",
                "BA LLB",
                "Bachelor of Arts and Bachelor of Laws",
                Stream::Arts,
                Branch::Law,
                ClassLevel::AfterTwelfth,
                DemandLevel::High,
                "Integrated law degree: justice, debate and legal reasoning.",
            ),
            course(
                "ba-psychology",
                "BA Psychology",
                "Bachelor of Arts in Psychology",
                Stream::Arts,
                Branch::Humanities,
                ClassLevel::AfterTwelfth,
                DemandLevel::High,
                "Human behaviour, counselling and research methods.",
            ),
            course(
                "ba-journalism",
                "BA Journalism",
                "Bachelor of Arts in Journalism and Mass Communication",
                Stream::Arts,
                Branch::Humanities,
                ClassLevel::AfterTwelfth,
                DemandLevel::Medium,
                "Reporting, writing and media production.",
            ),
            course(
                "bfa",
                "BFA",
                "Bachelor of Fine Arts",
                Stream::Arts,
                Branch::Humanities,
                ClassLevel::AfterTwelfth,
                DemandLevel::Medium,
                "Studio practice in painting, design and applied arts.",
            ),
            // Arts, after 10th
            course(
                "humanities-11th",
                "Humanities (Class 11-12)",
                "Humanities stream",
                Stream::Arts,
                Branch::Humanities,
                ClassLevel::AfterTenth,
                DemandLevel::Medium,
                "Senior-secondary humanities: history, political science, languages.",
            ),
            // Vocational, after 10th
            course(
                "iti-electrician",
                "ITI Electrician",
                "Industrial Training Institute, Electrician trade",
                Stream::Vocational,
                Branch::SkilledTrade,
                ClassLevel::AfterTenth,
                DemandLevel::High,
                "Hands-on electrician trade with quick entry to skilled jobs.",
            ),
            course(
                "iti-fitter",
                "ITI Fitter",
                "Industrial Training Institute, Fitter trade",
                Stream::Vocational,
                Branch::SkilledTrade,
                ClassLevel::AfterTenth,
                DemandLevel::Medium,
                "Practical fitting and machine assembly trade.",
            ),
            // Vocational, after 12th
            course(
                "hotel-management",
                "BHM",
                "Bachelor of Hotel Management",
                Stream::Vocational,
                Branch::SkilledTrade,
                ClassLevel::AfterTwelfth,
                DemandLevel::Medium,
                "Hospitality operations and practical service skills.",
            ),
            course(
                "bvoc-automobile",
                "B.Voc Automobile",
                "Bachelor of Vocation in Automobile Servicing",
                Stream::Vocational,
                Branch::SkilledTrade,
                ClassLevel::AfterTwelfth,
                DemandLevel::Medium,
                "Workshop-first automobile maintenance and servicing.",
            ),
        ];

        Self::from_courses(courses)
    }
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    name: &str,
    full_name: &str,
    stream: Stream,
    branch: Branch,
    class_level: ClassLevel,
    demand: DemandLevel,
    description: &str,
) -> Course {
    Course {
        id: CourseId::from(id),
        name: name.to_string(),
        full_name: full_name.to_string(),
        stream,
        branch,
        class_level,
        demand,
        description: description.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct CourseRow {
    id: String,
    name: String,
    full_name: String,
    stream: String,
    branch: String,
    class_level: String,
    demand: String,
    #[serde(default)]
    description: String,
}

impl CourseRow {
    fn into_course(self) -> Result<Course, CourseImportError> {
        let stream = Stream::parse(&self.stream).ok_or_else(|| CourseImportError::Invalid {
            id: self.id.clone(),
            field: "stream",
            value: self.stream.clone(),
        })?;
        let branch = Branch::parse(&self.branch).ok_or_else(|| CourseImportError::Invalid {
            id: self.id.clone(),
            field: "branch",
            value: self.branch.clone(),
        })?;
        let class_level =
            ClassLevel::parse(&self.class_level).ok_or_else(|| CourseImportError::Invalid {
                id: self.id.clone(),
                field: "class_level",
                value: self.class_level.clone(),
            })?;
        let demand = DemandLevel::parse(&self.demand).ok_or_else(|| CourseImportError::Invalid {
            id: self.id.clone(),
            field: "demand",
            value: self.demand.clone(),
        })?;

        Ok(Course {
            id: CourseId(self.id),
            name: self.name,
            full_name: self.full_name,
            stream,
            branch,
            class_level,
            demand,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_every_stream_and_level() {
        let catalog = CourseCatalog::standard();
        for stream in [
            Stream::Science,
            Stream::Commerce,
            Stream::Arts,
            Stream::Vocational,
        ] {
            for level in [ClassLevel::AfterTenth, ClassLevel::AfterTwelfth] {
                assert!(
                    !catalog.by_stream_and_level(stream, level).is_empty(),
                    "no courses for {} {}",
                    stream.label(),
                    level.label()
                );
            }
        }
    }

    #[test]
    fn lookup_by_id_returns_expected_course() {
        let catalog = CourseCatalog::standard();
        let course = catalog
            .get(&CourseId::from("btech-cs"))
            .expect("btech-cs in standard catalog");
        assert_eq!(course.stream, Stream::Science);
        assert_eq!(course.branch, Branch::Engineering);
        assert_eq!(course.demand, DemandLevel::VeryHigh);
    }

    #[test]
    fn csv_import_parses_well_formed_rows() {
        let data = "\
id,name,full_name,stream,branch,class_level,demand,description
bsc-physics,B.Sc Physics,Bachelor of Science in Physics,science,engineering,after-12th,medium,Physics degree
dca,DCA,Diploma in Computer Applications,vocational,skilled_trade,after-10th,high,
";
        let catalog = CourseCatalog::from_csv_reader(data.as_bytes()).expect("csv parses");
        assert_eq!(catalog.len(), 2);
        let course = catalog.get(&CourseId::from("dca")).expect("dca imported");
        assert_eq!(course.class_level, ClassLevel::AfterTenth);
        assert_eq!(course.demand, DemandLevel::High);
        assert!(course.description.is_empty());
    }

    #[test]
    fn csv_import_rejects_unknown_stream() {
        let data = "\
id,name,full_name,stream,branch,class_level,demand,description
x,X,X,astrology,engineering,after-12th,high,desc
";
        let err = CourseCatalog::from_csv_reader(data.as_bytes()).expect_err("invalid stream");
        match err {
            CourseImportError::Invalid { id, field, value } => {
                assert_eq!(id, "x");
                assert_eq!(field, "stream");
                assert_eq!(value, "astrology");
            }
            other => panic!("expected invalid-field error, got {other:?}"),
        }
    }
}
