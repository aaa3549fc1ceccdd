//! Demo records written the first time a collection is read

use chrono::{DateTime, TimeZone, Utc};

use crate::i18n::Language;
use crate::model::{Farm, Prediction, SensorData, SizeUnit, SoilAnalysis, Subscription, User};

pub const DEMO_USER_ID: &str = "user_1";
pub const DEMO_EMAIL: &str = "demo@agriai.com";
/// Farm new predictions and soil analyses are filed under
pub const DEFAULT_FARM_ID: &str = "farm_1";
pub const SENSOR_READINGS: usize = 20;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub fn users() -> Vec<User> {
    vec![User {
        id: DEMO_USER_ID.into(),
        email: DEMO_EMAIL.into(),
        name: "Demo User".into(),
        phone: Some("+880 1712345678".into()),
        location: Some("Dhaka, Bangladesh".into()),
        language: Language::En,
        subscription: Subscription::Free,
        created_at: at(2024, 1, 15),
    }]
}

pub fn farms() -> Vec<Farm> {
    vec![
        Farm {
            id: DEFAULT_FARM_ID.into(),
            user_id: DEMO_USER_ID.into(),
            name: "Green Valley Farm".into(),
            location: "Gazipur, Dhaka".into(),
            size: 5.5,
            size_unit: SizeUnit::Hectares,
            crops: strings(&["rice", "vegetables"]),
            created_at: at(2024, 1, 20),
        },
        Farm {
            id: "farm_2".into(),
            user_id: DEMO_USER_ID.into(),
            name: "Sunrise Fields".into(),
            location: "Rajshahi".into(),
            size: 8.0,
            size_unit: SizeUnit::Hectares,
            crops: strings(&["wheat", "potato"]),
            created_at: at(2024, 2, 10),
        },
    ]
}

pub fn predictions() -> Vec<Prediction> {
    vec![
        Prediction {
            id: "pred_1".into(),
            farm_id: DEFAULT_FARM_ID.into(),
            user_id: DEMO_USER_ID.into(),
            crop_type: "rice".into(),
            soil_type: "alluvial".into(),
            weather_condition: "monsoon".into(),
            farm_size: 5.5,
            predicted_yield: 4.2,
            yield_unit: "tons/hectare".into(),
            confidence: 87,
            recommendations: strings(&[
                "Apply nitrogen fertilizer at tillering stage",
                "Maintain water level at 5cm during vegetative phase",
                "Monitor for brown plant hopper during humid periods",
            ]),
            created_at: at(2024, 6, 15),
        },
        Prediction {
            id: "pred_2".into(),
            farm_id: "farm_2".into(),
            user_id: DEMO_USER_ID.into(),
            crop_type: "wheat".into(),
            soil_type: "loamy".into(),
            weather_condition: "dry".into(),
            farm_size: 8.0,
            predicted_yield: 3.8,
            yield_unit: "tons/hectare".into(),
            confidence: 82,
            recommendations: strings(&[
                "Irrigate every 15 days during dry spell",
                "Apply potash at flowering stage",
                "Watch for aphid infestation",
            ]),
            created_at: at(2024, 6, 20),
        },
    ]
}

pub fn soil_analyses() -> Vec<SoilAnalysis> {
    vec![SoilAnalysis {
        id: "soil_1".into(),
        farm_id: DEFAULT_FARM_ID.into(),
        user_id: DEMO_USER_ID.into(),
        nitrogen: 45.0,
        phosphorus: 32.0,
        potassium: 58.0,
        ph: 6.5,
        organic_matter: 3.2,
        recommendations: strings(&[
            "Apply urea to increase nitrogen levels",
            "Soil pH is optimal for most crops",
            "Consider adding compost to improve organic matter",
        ]),
        created_at: at(2024, 5, 10),
    }]
}

/// Twenty days of readings ending now
pub fn sensor_data() -> Vec<SensorData> {
    crate::generator::SensorSimulator::from_entropy().readings(Utc::now(), SENSOR_READINGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_relationships() {
        let farms = farms();
        assert!(farms.iter().all(|f| f.user_id == DEMO_USER_ID));
        for p in predictions() {
            assert!(farms.iter().any(|f| f.id == p.farm_id));
        }
        assert_eq!(users()[0].email, DEMO_EMAIL);
    }

    #[test]
    fn test_seed_timestamps() {
        assert_eq!(
            users()[0].created_at.to_rfc3339(),
            "2024-01-15T10:00:00+00:00"
        );
    }

    #[test]
    fn test_sensor_seed_size() {
        assert_eq!(sensor_data().len(), SENSOR_READINGS);
    }
}
