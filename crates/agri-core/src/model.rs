//! Domain Models
//!
//! Value records persisted in the mock database. Field names serialize in
//! camelCase so stored JSON stays compatible with existing browser data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Language;

/// Subscription tiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl Subscription {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Unknown codes map to the free tier
    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "pro" => Self::Pro,
            "enterprise" => Self::Enterprise,
            _ => Self::Free,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Free => "Starter",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Yield predictions per month (`None` = unlimited)
    pub const fn prediction_quota(self) -> Option<u32> {
        match self {
            Self::Free => Some(5),
            Self::Pro | Self::Enterprise => None,
        }
    }

    /// Chatbot queries per day (`None` = unlimited)
    pub const fn chat_queries_per_day(self) -> Option<u32> {
        match self {
            Self::Free => Some(10),
            Self::Pro | Self::Enterprise => None,
        }
    }
}

/// A registered user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub subscription: Subscription,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: format!("user_{}", Uuid::new_v4().simple()),
            email: email.into(),
            name: name.into(),
            phone: None,
            location: None,
            language: Language::default(),
            subscription: Subscription::Free,
            created_at: Utc::now(),
        }
    }

    /// Merge a partial update; `None` fields are left untouched
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = non_empty(phone);
        }
        if let Some(location) = update.location {
            self.location = non_empty(location);
        }
        if let Some(language) = update.language {
            self.language = language;
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Partial profile edit submitted from the profile page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub language: Option<Language>,
}

/// Unit a farm's size is recorded in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    Hectares,
    Acres,
    Bigha,
}

impl SizeUnit {
    const HECTARES_PER_ACRE: f64 = 0.404_686;
    // Standard Bangladeshi bigha (33 decimals)
    const HECTARES_PER_BIGHA: f64 = 0.133_8;

    pub fn to_hectares(self, size: f64) -> f64 {
        match self {
            Self::Hectares => size,
            Self::Acres => size * Self::HECTARES_PER_ACRE,
            Self::Bigha => size * Self::HECTARES_PER_BIGHA,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hectares => "hectares",
            Self::Acres => "acres",
            Self::Bigha => "bigha",
        }
    }
}

/// A farm owned by a user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub location: String,
    pub size: f64,
    pub size_unit: SizeUnit,
    /// Crop keys (see `i18n::Translations::crops`)
    pub crops: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Farm {
    pub fn size_in_hectares(&self) -> f64 {
        self.size_unit.to_hectares(self.size)
    }
}

/// A stored yield "prediction"
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: String,
    pub farm_id: String,
    pub user_id: String,
    pub crop_type: String,
    pub soil_type: String,
    pub weather_condition: String,
    pub farm_size: f64,
    pub predicted_yield: f64,
    pub yield_unit: String,
    /// Percent
    pub confidence: u8,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Where a sensor reading came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorSource {
    Satellite,
    Iot,
    Manual,
}

impl SensorSource {
    pub const ALL: [Self; 3] = [Self::Satellite, Self::Iot, Self::Manual];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Satellite => "satellite",
            Self::Iot => "iot",
            Self::Manual => "manual",
        }
    }
}

impl std::fmt::Display for SensorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One environmental reading for a farm
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorData {
    pub id: String,
    pub farm_id: String,
    pub timestamp: DateTime<Utc>,
    /// Degrees Celsius
    pub temperature: f64,
    /// Percent
    pub humidity: f64,
    /// Percent
    pub soil_moisture: f64,
    /// Millimetres
    pub rainfall: f64,
    /// Hours
    pub sunlight: f64,
    pub source: SensorSource,
}

/// NPK / pH soil report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilAnalysis {
    pub id: String,
    pub farm_id: String,
    pub user_id: String,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    /// Percent
    pub organic_matter: f64,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Chat participant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single chatbot message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User::new("farmer@example.com", "Farmer");
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["subscription"], "free");
        assert_eq!(json["language"], "en");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_user_reads_browser_record() {
        let raw = r#"{
            "id": "user_1",
            "email": "demo@agriai.com",
            "name": "Demo User",
            "phone": "+880 1712345678",
            "language": "bn",
            "subscription": "pro",
            "createdAt": "2024-01-15T10:00:00Z"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.language, Language::Bn);
        assert_eq!(user.subscription, Subscription::Pro);
        assert_eq!(user.location, None);
    }

    #[test]
    fn test_profile_update_merges() {
        let mut user = User::new("a@b.com", "Old");
        user.phone = Some("123".into());
        user.apply(ProfileUpdate {
            name: Some("New".into()),
            location: Some("Sylhet".into()),
            ..Default::default()
        });
        assert_eq!(user.name, "New");
        assert_eq!(user.phone.as_deref(), Some("123"));
        assert_eq!(user.location.as_deref(), Some("Sylhet"));

        user.apply(ProfileUpdate {
            phone: Some("   ".into()),
            ..Default::default()
        });
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_size_units() {
        assert!((SizeUnit::Hectares.to_hectares(5.5) - 5.5).abs() < f64::EPSILON);
        assert!((SizeUnit::Acres.to_hectares(10.0) - 4.046_86).abs() < 1e-9);
        assert!(SizeUnit::Bigha.to_hectares(1.0) < 0.2);
    }

    #[test]
    fn test_subscription_quotas() {
        assert_eq!(Subscription::Free.prediction_quota(), Some(5));
        assert_eq!(Subscription::Pro.prediction_quota(), None);
        assert_eq!(Subscription::from_code("ENTERPRISE"), Subscription::Enterprise);
        assert_eq!(Subscription::from_code("gold"), Subscription::Free);
    }

    #[test]
    fn test_chat_message_ids_unique() {
        let a = ChatMessage::user("hi");
        let b = ChatMessage::assistant("hello");
        assert_ne!(a.id, b.id);
        assert_eq!(b.role, Role::Assistant);
    }
}
