//! Fixed portfolio records. Each call assigns fresh identifiers.

use crate::model::{
    AboutInfo, AboutStats, ApiInfo, Experience, Metric, PersonalInfo, Project, RECORD_ID_LEN,
    SkillCategory,
};
use folio_kernel::safe_nanoid;

pub const API_GREETING: &str = "Folio Portfolio API";

fn id() -> String {
    safe_nanoid!(RECORD_ID_LEN)
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

#[must_use]
pub fn api_info() -> ApiInfo {
    ApiInfo { message: API_GREETING.to_owned() }
}

#[must_use]
pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        id: id(),
        name: "Varshank".to_owned(),
        surname: "Shukla".to_owned(),
        title: "Business Manager & Data Science Professional".to_owned(),
        subtitle: "Transforming Business Operations Through Data-Driven Innovation".to_owned(),
        location: "LUCKNOW, INDIA • AVAILABLE FOR OPPORTUNITIES".to_owned(),
        email: "hello@example.com".to_owned(),
        phone: "+00 0000000000".to_owned(),
        availability_status: "Available for opportunities".to_owned(),
    }
}

#[must_use]
pub fn about() -> AboutInfo {
    AboutInfo {
        id: id(),
        journey_description: "Client-focused Business Manager with diverse experience in sales, \
            business operations, and technical support. Expert at relationship-building, project \
            coordination, innovation, and process improvement to transform underperforming \
            operations and drive business growth."
            .to_owned(),
        current_focus: "Currently pursuing advanced Data Science & AI to merge business acumen \
            with cutting-edge analytics."
            .to_owned(),
        stats: AboutStats {
            years_experience: Metric::new("5+", "Years Experience"),
            projects_completed: Metric::new("50+", "Projects Completed"),
            business_growth: Metric::new("25%", "Business Growth"),
            certifications: Metric::new("10+", "Certifications"),
        },
    }
}

#[must_use]
pub fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            id: id(),
            category_name: "Business Leadership".to_owned(),
            icon: "👥".to_owned(),
            skills: owned(&[
                "Business & Operational Leadership",
                "Customer Relationship Management (CRM)",
                "Strategic Planning & Consulting",
                "Retail Operations & Sales Processes",
                "Financial Management & Negotiation",
                "Project Management & Team Leadership",
            ]),
        },
        SkillCategory {
            id: id(),
            category_name: "Technical Expertise".to_owned(),
            icon: "💻".to_owned(),
            skills: owned(&[
                "Python Programming",
                "SQL & Database Management",
                "Machine Learning (Scikit-Learn, TensorFlow)",
                "Data Analysis (Pandas, NumPy)",
                "Data Visualization (Power BI, Tableau)",
                "SEO & Online Marketing",
            ]),
        },
        SkillCategory {
            id: id(),
            category_name: "Core Competencies".to_owned(),
            icon: "🎯".to_owned(),
            skills: owned(&[
                "Strategic Thinking",
                "Problem Solving",
                "Client Relations",
                "Process Optimization",
                "Team Leadership",
                "Innovation Management",
            ]),
        },
    ]
}

#[must_use]
pub fn experience() -> Vec<Experience> {
    vec![
        Experience {
            id: id(),
            position: "Family-Owned Business Manager".to_owned(),
            company: "Gurudev Electricals & Real Estate, Lucknow".to_owned(),
            location: "Lucknow".to_owned(),
            start_date: "Nov 2019".to_owned(),
            end_date: "Current".to_owned(),
            is_current: true,
            achievements: owned(&[
                "Led business planning, operations, and delivery for real estate and electrical contracts",
                "Improved profits via cost containment and new revenue streams",
                "Reduced shipment turnaround and optimized warehouse workflow",
                "Enhanced client satisfaction and vendor relations",
                "Transformed underperforming units by implementing new strategies",
            ]),
            highlight_metric: Some(Metric::new("25%", "Cost Reduction")),
        },
        Experience {
            id: id(),
            position: "Associate – Customer Service (Internet)".to_owned(),
            company: "Sutherland Global Services Pvt. Ltd., Chennai".to_owned(),
            location: "Chennai".to_owned(),
            start_date: "Feb 2018".to_owned(),
            end_date: "Oct 2019".to_owned(),
            is_current: false,
            achievements: owned(&[
                "Led digital sales ops and marketing campaigns, driving customer engagement",
                "Optimized website UX with analytics, improved retention via feedback analysis",
            ]),
            highlight_metric: None,
        },
    ]
}

#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: id(),
            title: "Rossmann Store Sales Forecasting".to_owned(),
            category: "Data Science Capstone".to_owned(),
            description: "Forecasted daily sales for 9 key Rossmann stores using VAR/VARMAX time \
                series models with comprehensive data analysis and feature engineering."
                .to_owned(),
            technologies: owned(&["Python", "Pandas", "Time Series Analysis", "VAR/VARMAX Models"]),
            key_results: owned(&[
                "Accurate sales predictions for strategic planning",
                "Comprehensive feature engineering pipeline",
                "Advanced time series modeling implementation",
            ]),
            status: "Completed 2025".to_owned(),
        },
        Project {
            id: id(),
            title: "Business Process Optimization System".to_owned(),
            category: "Business Operations".to_owned(),
            description: "Implemented data-driven process improvements across multiple business \
                units, resulting in significant operational efficiency gains."
                .to_owned(),
            technologies: owned(&["Process Analysis", "Data Modeling", "Business Intelligence"]),
            key_results: owned(&[
                "Reduced operational costs by 25%",
                "Improved customer satisfaction scores",
                "Streamlined workflow processes",
            ]),
            status: "Ongoing".to_owned(),
        },
        Project {
            id: id(),
            title: "Customer Analytics Dashboard".to_owned(),
            category: "Data Visualization".to_owned(),
            description: "Developed comprehensive analytics dashboard using Power BI to track \
                customer behavior, sales performance, and operational metrics."
                .to_owned(),
            technologies: owned(&["Power BI", "SQL", "Data Modeling", "DAX"]),
            key_results: owned(&[
                "Real-time business intelligence insights",
                "Enhanced decision-making capabilities",
                "Improved performance tracking",
            ]),
            status: "Completed".to_owned(),
        },
    ]
}
