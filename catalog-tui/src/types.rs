use serde::Deserialize;
use time::OffsetDateTime;

/// A named lookup record (skill, specialty, industry, category).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferenceEntity {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    pub industry: ReferenceEntity,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLeader {
    pub id: i64,
    pub name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub hour_from: Option<f64>,
    pub hour_to: Option<f64>,
    pub total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<ReferenceEntity>,
    #[serde(default)]
    pub specialties: Vec<ReferenceEntity>,
    pub referral_bonus: Option<f64>,
}

/// A project as returned by catalog-api, with every reference already resolved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub organization: Organization,
    pub project_leader: ProjectLeader,
    pub category: ReferenceEntity,
    pub subcategory: Subcategory,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub creation_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub budget: Budget,
    pub total_hours: f64,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub total_applications_amount: u32,
}

impl Project {
    /// Skill names across all positions, first occurrence wins.
    pub fn unique_skill_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for skill in self.positions.iter().flat_map(|p| &p.skills) {
            if !names.contains(&skill.name.as_str()) {
                names.push(&skill.name);
            }
        }
        names
    }

    /// Referral bonus advertised by the first position, if any.
    pub fn referral_bonus(&self) -> Option<f64> {
        self.positions.first().and_then(|p| p.referral_bonus)
    }
}

impl Budget {
    /// Human label: the estimated total when known, else the hourly range.
    pub fn label(&self) -> Option<String> {
        if let Some(total) = self.total {
            return Some(format!("{} € (estimated)", format_amount(total)));
        }
        match (self.hour_from, self.hour_to) {
            (Some(from), Some(to)) => Some(format!(
                "{} - {} €/h",
                format_amount(from),
                format_amount(to)
            )),
            _ => None,
        }
    }
}

/// Format an amount the way the es-ES locale does: `.` groups thousands once
/// the integer part has five digits or more, `,` separates up to three decimals.
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount.abs() * 1000.0).round() / 1000.0;
    let integer = rounded.trunc() as u64;
    let digits = integer.to_string();

    let mut grouped = String::new();
    if digits.len() >= 5 {
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
    } else {
        grouped = digits;
    }

    let fraction = format!("{:.3}", rounded.fract());
    let fraction = fraction.trim_start_matches('0').trim_start_matches('.');
    let fraction = fraction.trim_end_matches('0');

    let sign = if amount < 0.0 && rounded != 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{fraction}")
    }
}

/// Reference tables served by `GET /projects/metadata/filters`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub skills: Vec<ReferenceEntity>,
    #[serde(default)]
    pub specialties: Vec<ReferenceEntity>,
    #[serde(default)]
    pub industries: Vec<ReferenceEntity>,
    #[serde(default)]
    pub categories: Vec<ReferenceEntity>,
}

/// Error body returned by catalog-api on non-success responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status_code: Option<u16>,
    pub message: String,
}
