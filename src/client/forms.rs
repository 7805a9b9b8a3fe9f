// Form helpers shared by the register, profile and dashboard pages
use crate::models::user::{BloodGroup, Gender};

pub use crate::models::user::{normalize_mobile, COUNTRY_CODE};

pub fn blood_group_options() -> Vec<String> {
    BloodGroup::ALL.iter().map(|g| g.as_str().to_string()).collect()
}

pub fn gender_options() -> Vec<String> {
    Gender::ALL.iter().map(|g| g.as_str().to_string()).collect()
}

/// The local part of a stored mobile number, for editing.
pub fn local_mobile(stored: &str) -> String {
    stored
        .strip_prefix(COUNTRY_CODE)
        .unwrap_or(stored)
        .to_string()
}

pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_options_parse_back() {
        let groups = blood_group_options();
        assert_eq!(groups.len(), 8);
        assert!(groups.iter().all(|g| g.parse::<BloodGroup>().is_ok()));
        assert_eq!(gender_options(), vec!["male", "female", "other"]);
    }

    #[test]
    fn mobile_numbers_gain_country_code() {
        assert_eq!(normalize_mobile("9876543210").unwrap(), "+919876543210");
        assert_eq!(normalize_mobile("+919876543210").unwrap(), "+919876543210");
        assert!(normalize_mobile("98765").is_err());
        assert!(normalize_mobile("98765abcde").is_err());
    }

    #[test]
    fn local_part_strips_country_code() {
        assert_eq!(local_mobile("+919876543210"), "9876543210");
        assert_eq!(local_mobile("5550001111"), "5550001111");
    }

    #[test]
    fn blank_values_become_none() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty(" Karnal ".into()), Some("Karnal".into()));
    }
}
