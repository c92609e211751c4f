//! Travel inquiry record and the client-submitted trip details.
//!
//! [`InquiryDetails`] is what the public form submits. [`TravelInquiry`]
//! is the stored record: the details plus the server-assigned id,
//! creation timestamp, provenance tag and funnel status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{InquiryId, InquiryStatus};

/// Provenance tag stamped on inquiries created through the public form.
pub const SOURCE_WEBSITE_FORM: &str = "website_form";

/// Trip request as submitted by a prospective client.
///
/// Categorical preferences (`travel_pace`, `budget_scope`, ...) are kept
/// as free strings; the form vocabulary is listed on each field. Unknown
/// JSON fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[validate(schema(function = "validate_budget_range"))]
pub struct InquiryDetails {
    // ── Contact ─────────────────────────────────────────────────────────
    /// Client first name.
    #[validate(length(min = 1))]
    pub first_name: String,
    /// Client last name.
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Client email address.
    #[validate(email)]
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// `email`, `phone` or `whatsapp`.
    #[serde(default = "default_contact_method")]
    pub preferred_contact_method: String,

    // ── Trip basics ─────────────────────────────────────────────────────
    /// Free-text destination list (e.g. `"Italy, France"`).
    #[validate(length(min = 1))]
    pub destinations: String,
    /// `fixed` or `open`.
    #[serde(default = "default_destination_flexibility")]
    pub destination_flexibility: String,
    /// Preferred departure airport; empty when the client is flexible.
    pub departure_airport: String,
    /// Whether other departure airports are acceptable.
    #[serde(default)]
    pub departure_flexible: bool,
    /// Earliest travel date, as entered.
    #[serde(default)]
    pub travel_start_date: Option<String>,
    /// Latest travel date, as entered.
    #[serde(default)]
    pub travel_end_date: Option<String>,
    /// Free-text notes on dates.
    #[serde(default)]
    pub travel_date_notes: Option<String>,
    /// Desired trip length.
    #[serde(default)]
    pub trip_length_nights: Option<u32>,

    // ── Party & budget ──────────────────────────────────────────────────
    /// Number of adults travelling.
    #[serde(default = "default_adult_count")]
    pub adult_count: u32,
    /// Number of children travelling.
    #[serde(default)]
    pub child_count: u32,
    /// Children's ages, as entered.
    #[serde(default)]
    pub child_ages: Option<String>,
    /// Lower budget bound.
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub budget_min: Option<f64>,
    /// Upper budget bound.
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub budget_max: Option<f64>,
    /// `fixed`, `flexible` or `unsure`.
    #[serde(default = "default_budget_flexibility")]
    pub budget_flexibility: String,
    /// `per_person` or `total_trip`.
    #[serde(default = "default_budget_scope")]
    pub budget_scope: String,

    // ── Travel style ────────────────────────────────────────────────────
    /// `relaxed`, `balanced` or `fast`.
    #[serde(default = "default_balanced")]
    pub travel_pace: String,
    /// Interest tags (`culture`, `adventure`, `food_wine`, `beach`, ...).
    #[serde(default)]
    pub travel_interests: Vec<String>,
    /// Accommodation kinds (`boutique_hotel`, `resort`, ...).
    #[serde(default)]
    pub accommodation_type: Vec<String>,
    /// `comfort`, `design`, `location` or `flexible`.
    #[serde(default = "default_flexible")]
    pub accommodation_priority: String,

    // ── Flights & transport ─────────────────────────────────────────────
    /// `cheapest`, `fastest`, `direct` or `balanced`.
    #[serde(default = "default_balanced")]
    pub flight_priority: String,
    /// `none`, `short_only` or `flexible`.
    #[serde(default = "default_flexible")]
    pub layover_tolerance: String,
    /// Free-text airline preferences.
    #[serde(default)]
    pub airline_preferences: Option<String>,
    /// `transfers`, `public_transport`, `car_hire`, `flexible`.
    #[serde(default)]
    pub transport_preference: Vec<String>,

    // ── Experiences ─────────────────────────────────────────────────────
    /// Free-text must-do experiences.
    #[serde(default)]
    pub must_do_experiences: Option<String>,
    /// `guided`, `independent` or `mixed`.
    #[serde(default = "default_exploration_style")]
    pub exploration_style: String,
    /// Occasion being celebrated, if any.
    #[serde(default)]
    pub special_occasion: Option<String>,

    // ── Practical ───────────────────────────────────────────────────────
    /// Dietary requirements.
    #[serde(default)]
    pub dietary_requirements: Option<String>,
    /// Accessibility needs.
    #[serde(default)]
    pub accessibility_needs: Option<String>,
    /// `yes`, `no` or `unsure`.
    #[serde(default = "default_passport_valid")]
    pub passport_valid: String,

    // ── Sales intent ────────────────────────────────────────────────────
    /// `exploring`, `1_3_months` or `ready`.
    #[serde(default = "default_booking_timeline")]
    pub booking_timeline: String,
    /// `full_service`, `options` or `collaborative`.
    #[serde(default = "default_planning_style")]
    pub planning_style: String,
}

/// A stored travel inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TravelInquiry {
    /// Unique inquiry identifier (immutable after creation).
    pub id: InquiryId,
    /// Client-submitted trip details.
    #[serde(flatten)]
    pub details: InquiryDetails,
    /// Creation timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,
    /// Provenance tag.
    pub source: String,
    /// Current funnel status.
    pub status: InquiryStatus,
}

impl TravelInquiry {
    /// Builds a new record from a form submission, assigning a fresh id,
    /// the given creation time, status `new` and the website source tag.
    #[must_use]
    pub fn from_submission(details: InquiryDetails, created_at: DateTime<Utc>) -> Self {
        Self {
            id: InquiryId::generate(),
            details,
            created_at,
            source: SOURCE_WEBSITE_FORM.to_string(),
            status: InquiryStatus::New,
        }
    }

    /// Returns `true` if `needle` (already lowercased) occurs in the first
    /// name, last name, email or destinations of this inquiry.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        [
            &self.details.first_name,
            &self.details.last_name,
            &self.details.email,
            &self.details.destinations,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

fn validate_budget_range(details: &InquiryDetails) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (details.budget_min, details.budget_max)
        && min > max
    {
        return Err(ValidationError::new("budget_range")
            .with_message("budget_min must not exceed budget_max".into()));
    }
    Ok(())
}

fn default_contact_method() -> String {
    "email".to_string()
}

fn default_destination_flexibility() -> String {
    "open".to_string()
}

const fn default_adult_count() -> u32 {
    1
}

fn default_budget_flexibility() -> String {
    "flexible".to_string()
}

fn default_budget_scope() -> String {
    "total_trip".to_string()
}

fn default_balanced() -> String {
    "balanced".to_string()
}

fn default_flexible() -> String {
    "flexible".to_string()
}

fn default_exploration_style() -> String {
    "mixed".to_string()
}

fn default_passport_valid() -> String {
    "yes".to_string()
}

fn default_booking_timeline() -> String {
    "exploring".to_string()
}

fn default_planning_style() -> String {
    "collaborative".to_string()
}
