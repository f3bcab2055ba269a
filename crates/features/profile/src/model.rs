use folio_derive::api_model;

/// Identifier length of generated content records.
pub const RECORD_ID_LEN: usize = 20;

/// Greeting returned by the API root.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ApiInfo {
    pub message: String,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub availability_status: String,
}

/// A headline figure with its caption, e.g. `5+` / `Years Experience`.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

impl Metric {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct AboutStats {
    pub years_experience: Metric,
    pub projects_completed: Metric,
    pub business_growth: Metric,
    pub certifications: Metric,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub id: String,
    pub journey_description: String,
    pub current_focus: String,
    pub stats: AboutStats,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: String,
    pub category_name: String,
    pub icon: String,
    pub skills: Vec<String>,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub achievements: Vec<String>,
    /// Serialized as `null` when the role has no headline figure.
    pub highlight_metric: Option<Metric>,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub key_results: Vec<String>,
    /// Free text such as `Completed`, `Completed 2025` or `Ongoing`.
    pub status: String,
}
