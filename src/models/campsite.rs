//! Availability record models.
//!
//! An [`AvailableCampsite`] describes one bookable campsite slot as reported by
//! the campsite search engine. Notification channels only read these records;
//! the field order declared in [`CampsiteField::ALL`] is the order used when a
//! record is rendered into a message.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier handed out by a booking provider
///
/// Some providers use numeric ids, others use opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(id) => write!(f, "{}", id),
            Identifier::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Numeric(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Identifier::Text(id.to_string())
    }
}

// ============================================================================
// Nested descriptors
// ============================================================================

/// Equipment permitted on a campsite (tent, RV, trailer, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampsiteEquipment {
    pub equipment_name: String,
    /// Maximum equipment length in feet, when the provider reports one
    #[serde(default)]
    pub max_length: Option<f64>,
}

/// Renders as a mapping literal, e.g. `{'equipment_name': 'Tent', 'max_length': 35.0}`
impl fmt::Display for CampsiteEquipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_length = match self.max_length {
            Some(max_length) => quote_float(max_length),
            None => "None".to_string(),
        };
        write!(
            f,
            "{{'equipment_name': {}, 'max_length': {}}}",
            quote_str(&self.equipment_name),
            max_length
        )
    }
}

/// Free-form attribute attached to a campsite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampsiteAttribute {
    pub attribute_category: String,
    pub attribute_id: i64,
    pub attribute_name: String,
    pub attribute_value: String,
}

impl fmt::Display for CampsiteAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'attribute_category': {}, 'attribute_id': {}, 'attribute_name': {}, 'attribute_value': {}}}",
            quote_str(&self.attribute_category),
            self.attribute_id,
            quote_str(&self.attribute_name),
            quote_str(&self.attribute_value)
        )
    }
}

/// Quotes a string the way mapping literals print it: single quotes unless the
/// text holds a single quote and no double quote
fn quote_str(value: &str) -> String {
    if value.contains('\'') && !value.contains('"') {
        return format!("\"{}\"", value.replace('\\', "\\\\"));
    }
    format!(
        "'{}'",
        value.replace('\\', "\\\\").replace('\'', "\\'")
    )
}

/// Whole numbers keep a trailing `.0`
fn quote_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

// ============================================================================
// Field descriptors
// ============================================================================

/// Named field of an [`AvailableCampsite`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampsiteField {
    CampsiteId,
    BookingDate,
    BookingEndDate,
    BookingNights,
    CampsiteSiteName,
    CampsiteLoopName,
    CampsiteType,
    CampsiteOccupancy,
    CampsiteUseType,
    AvailabilityStatus,
    RecreationArea,
    RecreationAreaId,
    FacilityName,
    FacilityId,
    BookingUrl,
    PermittedEquipment,
    CampsiteAttributes,
}

impl CampsiteField {
    /// Every field in declaration order
    pub const ALL: [CampsiteField; 17] = [
        CampsiteField::CampsiteId,
        CampsiteField::BookingDate,
        CampsiteField::BookingEndDate,
        CampsiteField::BookingNights,
        CampsiteField::CampsiteSiteName,
        CampsiteField::CampsiteLoopName,
        CampsiteField::CampsiteType,
        CampsiteField::CampsiteOccupancy,
        CampsiteField::CampsiteUseType,
        CampsiteField::AvailabilityStatus,
        CampsiteField::RecreationArea,
        CampsiteField::RecreationAreaId,
        CampsiteField::FacilityName,
        CampsiteField::FacilityId,
        CampsiteField::BookingUrl,
        CampsiteField::PermittedEquipment,
        CampsiteField::CampsiteAttributes,
    ];

    /// The snake_case field name, as it appears in serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            CampsiteField::CampsiteId => "campsite_id",
            CampsiteField::BookingDate => "booking_date",
            CampsiteField::BookingEndDate => "booking_end_date",
            CampsiteField::BookingNights => "booking_nights",
            CampsiteField::CampsiteSiteName => "campsite_site_name",
            CampsiteField::CampsiteLoopName => "campsite_loop_name",
            CampsiteField::CampsiteType => "campsite_type",
            CampsiteField::CampsiteOccupancy => "campsite_occupancy",
            CampsiteField::CampsiteUseType => "campsite_use_type",
            CampsiteField::AvailabilityStatus => "availability_status",
            CampsiteField::RecreationArea => "recreation_area",
            CampsiteField::RecreationAreaId => "recreation_area_id",
            CampsiteField::FacilityName => "facility_name",
            CampsiteField::FacilityId => "facility_id",
            CampsiteField::BookingUrl => "booking_url",
            CampsiteField::PermittedEquipment => "permitted_equipment",
            CampsiteField::CampsiteAttributes => "campsite_attributes",
        }
    }
}

impl fmt::Display for CampsiteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    DateTime(DateTime),
    Occupancy(u32, u32),
    List(Vec<String>),
    /// Optional field with no value
    Missing,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::DateTime(value) => write!(f, "{}", value.strftime("%Y-%m-%d %H:%M:%S")),
            FieldValue::Occupancy(min, max) => write!(f, "({}, {})", min, max),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
            FieldValue::Missing => f.write_str("None"),
        }
    }
}

fn optional_list<T: ToString>(items: Option<&[T]>) -> FieldValue {
    match items {
        Some(items) => FieldValue::List(items.iter().map(ToString::to_string).collect()),
        None => FieldValue::Missing,
    }
}

// ============================================================================
// Availability record
// ============================================================================

/// One bookable campsite slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableCampsite {
    pub campsite_id: Identifier,
    pub booking_date: DateTime,
    pub booking_end_date: DateTime,
    pub booking_nights: i64,
    pub campsite_site_name: String,
    pub campsite_loop_name: String,
    #[serde(default)]
    pub campsite_type: Option<String>,
    /// Minimum and maximum number of occupants
    pub campsite_occupancy: (u32, u32),
    pub campsite_use_type: String,
    pub availability_status: String,
    pub recreation_area: String,
    pub recreation_area_id: Identifier,
    pub facility_name: String,
    pub facility_id: Identifier,
    pub booking_url: String,
    #[serde(default)]
    pub permitted_equipment: Option<Vec<CampsiteEquipment>>,
    #[serde(default)]
    pub campsite_attributes: Option<Vec<CampsiteAttribute>>,
}

impl AvailableCampsite {
    /// Returns the value of a single field
    pub fn field(&self, field: CampsiteField) -> FieldValue {
        match field {
            CampsiteField::CampsiteId => FieldValue::Text(self.campsite_id.to_string()),
            CampsiteField::BookingDate => FieldValue::DateTime(self.booking_date),
            CampsiteField::BookingEndDate => FieldValue::DateTime(self.booking_end_date),
            CampsiteField::BookingNights => FieldValue::Integer(self.booking_nights),
            CampsiteField::CampsiteSiteName => FieldValue::Text(self.campsite_site_name.clone()),
            CampsiteField::CampsiteLoopName => FieldValue::Text(self.campsite_loop_name.clone()),
            CampsiteField::CampsiteType => self
                .campsite_type
                .clone()
                .map_or(FieldValue::Missing, FieldValue::Text),
            CampsiteField::CampsiteOccupancy => {
                FieldValue::Occupancy(self.campsite_occupancy.0, self.campsite_occupancy.1)
            }
            CampsiteField::CampsiteUseType => FieldValue::Text(self.campsite_use_type.clone()),
            CampsiteField::AvailabilityStatus => {
                FieldValue::Text(self.availability_status.clone())
            }
            CampsiteField::RecreationArea => FieldValue::Text(self.recreation_area.clone()),
            CampsiteField::RecreationAreaId => {
                FieldValue::Text(self.recreation_area_id.to_string())
            }
            CampsiteField::FacilityName => FieldValue::Text(self.facility_name.clone()),
            CampsiteField::FacilityId => FieldValue::Text(self.facility_id.to_string()),
            CampsiteField::BookingUrl => FieldValue::Text(self.booking_url.clone()),
            CampsiteField::PermittedEquipment => {
                optional_list(self.permitted_equipment.as_deref())
            }
            CampsiteField::CampsiteAttributes => {
                optional_list(self.campsite_attributes.as_deref())
            }
        }
    }

    /// Returns every field with its value, in declaration order
    pub fn fields(&self) -> Vec<(CampsiteField, FieldValue)> {
        CampsiteField::ALL
            .iter()
            .map(|field| (*field, self.field(*field)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn create_test_campsite() -> AvailableCampsite {
        AvailableCampsite {
            campsite_id: Identifier::Numeric(232447),
            booking_date: date(2023, 6, 1).at(0, 0, 0, 0),
            booking_end_date: date(2023, 6, 2).at(0, 0, 0, 0),
            booking_nights: 1,
            campsite_site_name: "044".to_string(),
            campsite_loop_name: "Upper Pines".to_string(),
            campsite_type: None,
            campsite_occupancy: (1, 6),
            campsite_use_type: "Overnight".to_string(),
            availability_status: "Available".to_string(),
            recreation_area: "Yosemite".to_string(),
            recreation_area_id: Identifier::Numeric(2991),
            facility_name: "Upper Pines".to_string(),
            facility_id: Identifier::Numeric(232447),
            booking_url: "http://x".to_string(),
            permitted_equipment: None,
            campsite_attributes: None,
        }
    }

    #[test]
    fn test_fields_follow_declaration_order() {
        let campsite = create_test_campsite();
        let names: Vec<&str> = campsite
            .fields()
            .iter()
            .map(|(field, _)| field.as_str())
            .collect();

        assert_eq!(names.len(), 17);
        assert_eq!(names[0], "campsite_id");
        assert_eq!(names[1], "booking_date");
        assert_eq!(names[14], "booking_url");
        assert_eq!(names[16], "campsite_attributes");
    }

    #[test]
    fn test_missing_optional_values_render_as_none() {
        let campsite = create_test_campsite();
        assert_eq!(campsite.field(CampsiteField::CampsiteType).to_string(), "None");
        assert_eq!(
            campsite.field(CampsiteField::PermittedEquipment).to_string(),
            "None"
        );
    }

    #[test]
    fn test_occupancy_and_list_rendering() {
        let mut campsite = create_test_campsite();
        campsite.permitted_equipment = Some(vec![
            CampsiteEquipment {
                equipment_name: "Tent".to_string(),
                max_length: None,
            },
            CampsiteEquipment {
                equipment_name: "RV".to_string(),
                max_length: Some(35.0),
            },
        ]);

        assert_eq!(
            campsite.field(CampsiteField::CampsiteOccupancy).to_string(),
            "(1, 6)"
        );
        assert_eq!(
            campsite.field(CampsiteField::PermittedEquipment).to_string(),
            "[{'equipment_name': 'Tent', 'max_length': None}, \
             {'equipment_name': 'RV', 'max_length': 35.0}]"
        );
    }

    #[test]
    fn test_nested_record_rendering() {
        let equipment = CampsiteEquipment {
            equipment_name: "Trailer".to_string(),
            max_length: Some(24.5),
        };
        assert_eq!(
            equipment.to_string(),
            "{'equipment_name': 'Trailer', 'max_length': 24.5}"
        );

        let attribute = CampsiteAttribute {
            attribute_category: "site_details".to_string(),
            attribute_id: 11,
            attribute_name: "Driveway Entry".to_string(),
            attribute_value: "Back-In".to_string(),
        };
        assert_eq!(
            attribute.to_string(),
            "{'attribute_category': 'site_details', 'attribute_id': 11, \
             'attribute_name': 'Driveway Entry', 'attribute_value': 'Back-In'}"
        );
    }

    #[test]
    fn test_quote_str_picks_quotes() {
        assert_eq!(quote_str("Tent"), "'Tent'");
        assert_eq!(quote_str("Ranger's Pick"), "\"Ranger's Pick\"");
        assert_eq!(quote_str("a'b\"c"), "'a\\'b\"c'");
    }

    #[test]
    fn test_identifier_display() {
        assert_eq!(Identifier::from(42).to_string(), "42");
        assert_eq!(Identifier::from("abc-1").to_string(), "abc-1");
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "campsite_id": "site-7",
            "booking_date": "2023-06-01T00:00:00",
            "booking_end_date": "2023-06-02T00:00:00",
            "booking_nights": 1,
            "campsite_site_name": "7",
            "campsite_loop_name": "Loop A",
            "campsite_occupancy": [2, 8],
            "campsite_use_type": "Overnight",
            "availability_status": "Available",
            "recreation_area": "Yosemite",
            "recreation_area_id": 2991,
            "facility_name": "Upper Pines",
            "facility_id": 232447,
            "booking_url": "http://x"
        }"#;

        let campsite: AvailableCampsite = serde_json::from_str(json).unwrap();
        assert_eq!(campsite.campsite_id, Identifier::Text("site-7".to_string()));
        assert_eq!(campsite.recreation_area_id, Identifier::Numeric(2991));
        assert_eq!(campsite.booking_date, date(2023, 6, 1).at(0, 0, 0, 0));
        assert_eq!(campsite.campsite_occupancy, (2, 8));
        assert!(campsite.campsite_type.is_none());
        assert!(campsite.permitted_equipment.is_none());
    }
}
