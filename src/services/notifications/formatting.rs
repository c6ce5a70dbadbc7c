//! Rendering of availability records into notification text.

use crate::models::{AvailableCampsite, CampsiteField, FieldValue};
use jiff::civil::DateTime;

/// Label used in place of `booking_url`
const BOOKING_LINK_LABEL: &str = "booking_link";

/// Formats a datetime as `YYYY-MM-DD`
pub fn format_date(value: &DateTime) -> String {
    value.strftime("%Y-%m-%d").to_string()
}

/// Converts a snake_case name into a Title Case label
///
/// Underscores become spaces. A letter is uppercased when it starts a word
/// (i.e. does not directly follow another letter) and lowercased otherwise.
pub fn format_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len());
    let mut previous_is_letter = false;

    for c in name.chars() {
        if c == '_' {
            label.push(' ');
            previous_is_letter = false;
        } else if c.is_alphabetic() {
            if previous_is_letter {
                label.extend(c.to_lowercase());
            } else {
                label.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            label.push(c);
            previous_is_letter = false;
        }
    }

    label
}

/// Renders one `"<Label>: <value>"` line
pub fn format_field(field: CampsiteField, value: &FieldValue) -> String {
    let name = match field {
        CampsiteField::BookingUrl => BOOKING_LINK_LABEL,
        other => other.as_str(),
    };

    let rendered = match (field, value) {
        (CampsiteField::BookingDate | CampsiteField::BookingEndDate, FieldValue::DateTime(dt)) => {
            format_date(dt)
        }
        _ => value.to_string(),
    };

    format!("{}: {}", format_label(name), rendered)
}

/// Message body: one line per field, in declaration order
pub fn compose_campsite_body(campsite: &AvailableCampsite) -> String {
    campsite
        .fields()
        .iter()
        .map(|(field, value)| format_field(*field, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Message title: `"<recreation area> | <facility> | <YYYY-MM-DD>"`
pub fn compose_campsite_title(campsite: &AvailableCampsite) -> String {
    format!(
        "{} | {} | {}",
        campsite.recreation_area,
        campsite.facility_name,
        format_date(&campsite.booking_date)
    )
}
