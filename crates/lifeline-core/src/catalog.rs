//! Built-in mission scenarios, medical supply table, and weather conditions.
//!
//! Static data; the simulation only reads it when a mission is selected.

use serde::{Deserialize, Serialize};

use crate::enums::{ThreatLevel, Urgency, WeatherKind};

/// Geographic location of the incident (display only).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A selectable delivery mission.
#[derive(Debug, Clone, Serialize)]
pub struct MissionScenario {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub location: GeoPoint,
    pub urgency: Urgency,
    /// Supply ids, see [`MEDICAL_SUPPLIES`].
    pub supplies: &'static [&'static str],
    pub weather: WeatherKind,
    pub threat_level: ThreatLevel,
}

/// A medical supply item that can be loaded as payload.
#[derive(Debug, Clone, Serialize)]
pub struct MedicalSupply {
    pub id: &'static str,
    pub name: &'static str,
    pub weight_kg: f64,
    /// Storage requirement, e.g. `"2-6°C"`, `"ambient"`, `"sterile"`.
    pub temp_requirement: &'static str,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherCondition {
    pub kind: WeatherKind,
    pub visibility_km: f64,
    pub wind_speed_kmh: f64,
    pub impact: &'static str,
}

pub const MISSION_SCENARIOS: &[MissionScenario] = &[
    MissionScenario {
        id: 1,
        name: "Border Patrol Medical Emergency",
        description: "Wounded soldier at remote border outpost requires immediate medical supplies",
        location: GeoPoint {
            lat: 28.7041,
            lng: 77.1025,
        },
        urgency: Urgency::Critical,
        supplies: &["blood_type_o", "morphine", "bandages", "antibiotics"],
        weather: WeatherKind::Clear,
        threat_level: ThreatLevel::Medium,
    },
    MissionScenario {
        id: 2,
        name: "Mountain Rescue Operation",
        description: "Avalanche survivor needs emergency medication at high altitude",
        location: GeoPoint {
            lat: 32.2734,
            lng: 77.1734,
        },
        urgency: Urgency::High,
        supplies: &["oxygen", "thermal_blankets", "pain_medication"],
        weather: WeatherKind::Snow,
        threat_level: ThreatLevel::Low,
    },
    MissionScenario {
        id: 3,
        name: "Forward Operating Base Resupply",
        description: "Critical medical supplies for field hospital running low",
        location: GeoPoint {
            lat: 34.0522,
            lng: 74.8336,
        },
        urgency: Urgency::Medium,
        supplies: &["surgical_instruments", "anesthetics", "iv_fluids"],
        weather: WeatherKind::Windy,
        threat_level: ThreatLevel::High,
    },
];

pub const MEDICAL_SUPPLIES: &[MedicalSupply] = &[
    MedicalSupply {
        id: "blood_type_o",
        name: "Blood Type O-",
        weight_kg: 0.5,
        temp_requirement: "2-6°C",
        urgency: Urgency::Critical,
    },
    MedicalSupply {
        id: "morphine",
        name: "Morphine 10mg",
        weight_kg: 0.05,
        temp_requirement: "15-25°C",
        urgency: Urgency::High,
    },
    MedicalSupply {
        id: "bandages",
        name: "Emergency Bandages",
        weight_kg: 0.3,
        temp_requirement: "ambient",
        urgency: Urgency::Medium,
    },
    MedicalSupply {
        id: "antibiotics",
        name: "Broad Spectrum Antibiotics",
        weight_kg: 0.1,
        temp_requirement: "15-25°C",
        urgency: Urgency::Medium,
    },
    MedicalSupply {
        id: "oxygen",
        name: "Portable Oxygen",
        weight_kg: 1.2,
        temp_requirement: "ambient",
        urgency: Urgency::Critical,
    },
    MedicalSupply {
        id: "thermal_blankets",
        name: "Emergency Thermal Blankets",
        weight_kg: 0.4,
        temp_requirement: "ambient",
        urgency: Urgency::Low,
    },
    MedicalSupply {
        id: "pain_medication",
        name: "Pain Relief Medication",
        weight_kg: 0.15,
        temp_requirement: "15-25°C",
        urgency: Urgency::Medium,
    },
    MedicalSupply {
        id: "surgical_instruments",
        name: "Sterile Surgical Kit",
        weight_kg: 2.0,
        temp_requirement: "sterile",
        urgency: Urgency::High,
    },
    MedicalSupply {
        id: "anesthetics",
        name: "Local Anesthetics",
        weight_kg: 0.2,
        temp_requirement: "2-8°C",
        urgency: Urgency::High,
    },
    MedicalSupply {
        id: "iv_fluids",
        name: "IV Saline Solution",
        weight_kg: 1.5,
        temp_requirement: "15-25°C",
        urgency: Urgency::Medium,
    },
];

/// Known weather conditions. The first entry is the fallback.
pub const WEATHER_CONDITIONS: &[WeatherCondition] = &[
    WeatherCondition {
        kind: WeatherKind::Clear,
        visibility_km: 10.0,
        wind_speed_kmh: 5.0,
        impact: "minimal",
    },
    WeatherCondition {
        kind: WeatherKind::Cloudy,
        visibility_km: 8.0,
        wind_speed_kmh: 15.0,
        impact: "slight",
    },
    WeatherCondition {
        kind: WeatherKind::Rain,
        visibility_km: 3.0,
        wind_speed_kmh: 25.0,
        impact: "moderate",
    },
    WeatherCondition {
        kind: WeatherKind::Snow,
        visibility_km: 1.0,
        wind_speed_kmh: 35.0,
        impact: "significant",
    },
    WeatherCondition {
        kind: WeatherKind::Storm,
        visibility_km: 0.5,
        wind_speed_kmh: 60.0,
        impact: "severe",
    },
];

/// Look up a mission scenario by id.
pub fn mission(id: u32) -> Option<&'static MissionScenario> {
    MISSION_SCENARIOS.iter().find(|m| m.id == id)
}

/// Look up a supply by id.
pub fn supply(id: &str) -> Option<&'static MedicalSupply> {
    MEDICAL_SUPPLIES.iter().find(|s| s.id == id)
}

/// Weather condition for a kind, falling back to clear skies.
pub fn weather_condition(kind: WeatherKind) -> &'static WeatherCondition {
    WEATHER_CONDITIONS
        .iter()
        .find(|w| w.kind == kind)
        .unwrap_or(&WEATHER_CONDITIONS[0])
}

impl MissionScenario {
    /// Supplies resolved against the supply table. Unknown ids are skipped.
    pub fn resolved_supplies(&self) -> impl Iterator<Item = &'static MedicalSupply> + '_ {
        self.supplies.iter().filter_map(|id| supply(id))
    }

    /// Total payload weight in kilograms.
    pub fn payload_weight_kg(&self) -> f64 {
        self.resolved_supplies().map(|s| s.weight_kg).sum()
    }

    /// Whether any supply needs refrigerated (2-x °C) storage.
    pub fn needs_cold_chain(&self) -> bool {
        self.resolved_supplies()
            .any(|s| s.temp_requirement.starts_with("2-"))
    }
}
