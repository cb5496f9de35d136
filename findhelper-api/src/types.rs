//! Data transfer types for the Findhelper backend.
//!
//! All wire formats are camelCase JSON. The backend omits (or nulls) optional
//! profile fields; those are coerced to the empty string on deserialize so the
//! in-memory record always has every field materialized.

use serde::{Deserialize, Deserializer, Serialize};

// ============ Availability ============

/// Time-of-day slot a service provider can be booked in.
///
/// Wire representation is the SCREAMING-CASE name used by the backend enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl AvailabilityTime {
    /// All slots, in display order. Used to populate select controls.
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// Wire name as the backend expects it.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Morning => "MORNING",
            Self::Afternoon => "AFTERNOON",
            Self::Evening => "EVENING",
            Self::Night => "NIGHT",
        }
    }

    /// Human-readable label for UI display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }

    /// Parse a wire name. Returns `None` for anything else, including "".
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "MORNING" => Some(Self::Morning),
            "AFTERNOON" => Some(Self::Afternoon),
            "EVENING" => Some(Self::Evening),
            "NIGHT" => Some(Self::Night),
            _ => None,
        }
    }
}

// ============ Serde helpers ============

/// Accept either a JSON string or a bare number, yielding a `String`.
///
/// The backend serializes `experience` and `costPerHour` as numbers, but the
/// form edits them as text, so they are carried as strings end to end.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}

/// Coerce a missing or `null` string field to "".
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============ Entities ============

/// A service-provider record as returned by
/// `GET /service-providers/byUserId/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    /// First name.
    pub fname: String,
    /// Last name.
    pub lname: String,
    /// Years of experience, carried as a numeric string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub experience: String,
    /// Hourly rate, carried as a numeric string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub cost_per_hour: String,
    /// Availability slot wire name, or "" when unset.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub availability_time: String,
    /// Serviced location name, or "" when unset.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub available_locations: String,
    /// Service category. Populated by the backend, never user-edited.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub category_name: String,
}

/// A serviceable location, as returned by `GET /api/locations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Backend identifier.
    pub id: i64,
    /// Location name shown in (and matched against) the location select.
    pub location: String,
}

/// Full form payload for `PUT /service-providers/update/{id}`.
///
/// Includes `categoryName` even though the field is read-only in the form;
/// the backend expects the complete record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceProviderRequest {
    pub fname: String,
    pub lname: String,
    pub experience: String,
    pub cost_per_hour: String,
    pub availability_time: String,
    pub available_locations: String,
    pub category_name: String,
}

impl From<ServiceProvider> for UpdateServiceProviderRequest {
    fn from(p: ServiceProvider) -> Self {
        Self {
            fname: p.fname,
            lname: p.lname,
            experience: p.experience,
            cost_per_hour: p.cost_per_hour,
            availability_time: p.availability_time,
            available_locations: p.available_locations,
            category_name: p.category_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_wire_round_trip() {
        for slot in AvailabilityTime::ALL {
            assert_eq!(AvailabilityTime::from_wire(slot.wire_name()), Some(slot));
        }
        assert_eq!(AvailabilityTime::from_wire(""), None);
        assert_eq!(AvailabilityTime::from_wire("morning"), None);
    }

    #[test]
    fn availability_serde_uses_screaming_case() {
        let json = serde_json::to_string(&AvailabilityTime::Afternoon).unwrap();
        assert_eq!(json, "\"AFTERNOON\"");
        let back: AvailabilityTime = serde_json::from_str("\"NIGHT\"").unwrap();
        assert_eq!(back, AvailabilityTime::Night);
    }

    #[test]
    fn provider_full_payload() {
        let json = r#"{
            "fname": "Jane",
            "lname": "Doe",
            "experience": "5",
            "costPerHour": "40.5",
            "availabilityTime": "MORNING",
            "availableLocations": "Colombo",
            "categoryName": "Plumbing"
        }"#;
        let p: ServiceProvider = serde_json::from_str(json).unwrap();
        assert_eq!(p.fname, "Jane");
        assert_eq!(p.lname, "Doe");
        assert_eq!(p.experience, "5");
        assert_eq!(p.cost_per_hour, "40.5");
        assert_eq!(p.availability_time, "MORNING");
        assert_eq!(p.available_locations, "Colombo");
        assert_eq!(p.category_name, "Plumbing");
    }

    #[test]
    fn provider_numeric_fields_accept_bare_numbers() {
        let json = r#"{"fname":"A","lname":"B","experience":5,"costPerHour":40.5}"#;
        let p: ServiceProvider = serde_json::from_str(json).unwrap();
        assert_eq!(p.experience, "5");
        assert_eq!(p.cost_per_hour, "40.5");
    }

    #[test]
    fn provider_missing_optionals_coerce_to_empty() {
        let json = r#"{"fname":"A","lname":"B","experience":"1","costPerHour":"2"}"#;
        let p: ServiceProvider = serde_json::from_str(json).unwrap();
        assert_eq!(p.availability_time, "");
        assert_eq!(p.available_locations, "");
        assert_eq!(p.category_name, "");
    }

    #[test]
    fn provider_null_optionals_coerce_to_empty() {
        let json = r#"{
            "fname": "A",
            "lname": "B",
            "experience": "1",
            "costPerHour": "2",
            "availabilityTime": null,
            "availableLocations": null,
            "categoryName": null
        }"#;
        let p: ServiceProvider = serde_json::from_str(json).unwrap();
        assert_eq!(p.availability_time, "");
        assert_eq!(p.available_locations, "");
        assert_eq!(p.category_name, "");
    }

    #[test]
    fn location_deserialize() {
        let json = r#"[{"id":1,"location":"Colombo"},{"id":2,"location":"Kandy"}]"#;
        let locations: Vec<Location> = serde_json::from_str(json).unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[1].location, "Kandy");
    }

    #[test]
    fn update_request_serializes_camel_case_with_category() {
        let req = UpdateServiceProviderRequest {
            fname: "Jane".into(),
            lname: "Doe".into(),
            experience: "5".into(),
            cost_per_hour: "40".into(),
            availability_time: "EVENING".into(),
            available_locations: "Galle".into(),
            category_name: "Plumbing".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"costPerHour\":\"40\""));
        assert!(json.contains("\"availabilityTime\":\"EVENING\""));
        assert!(json.contains("\"availableLocations\":\"Galle\""));
        // Read-only field still travels with the payload.
        assert!(json.contains("\"categoryName\":\"Plumbing\""));
    }

    #[test]
    fn update_request_from_provider_carries_all_fields() {
        let p = ServiceProvider {
            fname: "Jane".into(),
            lname: "Doe".into(),
            experience: "5".into(),
            cost_per_hour: "40".into(),
            availability_time: String::new(),
            available_locations: String::new(),
            category_name: "Cleaning".into(),
        };
        let req = UpdateServiceProviderRequest::from(p);
        assert_eq!(req.fname, "Jane");
        assert_eq!(req.category_name, "Cleaning");
        assert_eq!(req.availability_time, "");
    }
}
