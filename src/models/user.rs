// src/models/user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const COUNTRY_CODE: &str = "+91";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown blood group: {}", s))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown gender: {}", s))
    }
}

/// Public view of a registered user. The password hash and the reset OTP
/// never leave the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub blood_group: Option<BloodGroup>,
    pub gender: Option<Gender>,
    pub availability: bool,           // willing to donate right now
    pub country: String,
    pub state: String,
    pub district: String,
    pub city: String,
    pub terms_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub mobile_number: String,
    pub blood_group: Option<BloodGroup>,
    pub gender: Option<Gender>,
    pub availability: bool,
    pub country: String,
    pub state: String,
    pub district: String,
    pub city: String,
    pub terms_accepted: bool,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            &self.email,
            &self.password,
            &self.first_name,
            &self.last_name,
            &self.mobile_number,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err("Required fields are missing.".to_string());
        }
        if !is_valid_email(&self.email) {
            return Err("Invalid email address.".to_string());
        }
        normalize_mobile(&self.mobile_number)?;
        validate_password(&self.password)
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters long.",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Turns a 10-digit local number into the stored international form.
pub fn normalize_mobile(local: &str) -> Result<String, String> {
    let digits = local.trim();
    let digits = digits.strip_prefix(COUNTRY_CODE).unwrap_or(digits);
    if digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(format!("{}{}", COUNTRY_CODE, digits))
    } else {
        Err("Mobile number must be 10 digits.".to_string())
    }
}

/// Login identifiers: a bare 10-digit number gains the country code,
/// anything else (an email) is only trimmed.
pub fn normalize_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(mobile) = normalize_mobile(trimmed) {
            return mobile;
        }
    }
    trimmed.to_string()
}

/// Matches `\S+@\S+`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// Hides everything but the first and last two characters of a mobile number.
pub fn mask_mobile(mobile: &str) -> String {
    let chars: Vec<char> = mobile.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let head: String = chars.iter().take(2).collect();
    let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
    format!("{}xxxxxx{}", head, tail)
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub identifier: String, // email or mobile number
    pub password: String,
    pub remember_me: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>, // when `token` stops being accepted
    pub user: User,
    pub user_review: Option<crate::models::review::Review>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub blood_group: Option<BloodGroup>,
    pub gender: Option<Gender>,
    pub availability: Option<bool>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        *self == UpdateUserRequest::default()
    }

    /// Fields that are required at registration may be changed but not
    /// blanked. The mobile number is rewritten to its stored form.
    pub fn validate(&mut self) -> Result<(), String> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.mobile_number,
        ];
        if required
            .iter()
            .any(|field| field.as_deref().is_some_and(|v| v.trim().is_empty()))
        {
            return Err("Required fields cannot be empty.".to_string());
        }
        if let Some(email) = &self.email {
            if !is_valid_email(email.trim()) {
                return Err("Invalid email address.".to_string());
            }
        }
        if let Some(mobile) = &self.mobile_number {
            self.mobile_number = Some(normalize_mobile(mobile)?);
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DonorFilter {
    pub blood_group: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
}

impl DonorFilter {
    /// Drops blank criteria so that an empty select box means "any".
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        DonorFilter {
            blood_group: keep(self.blood_group),
            country: keep(self.country),
            state: keep(self.state),
            district: keep(self.district),
            city: keep(self.city),
        }
    }

    /// Pairs of (column, value) for every criterion that is set.
    pub fn criteria(&self) -> Vec<(&'static str, &str)> {
        [
            ("blood_group", &self.blood_group),
            ("country", &self.country),
            ("state", &self.state),
            ("district", &self.district),
            ("city", &self.city),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| (column, v)))
        .collect()
    }

    pub fn to_query_string(&self) -> String {
        [
            ("bloodGroup", &self.blood_group),
            ("country", &self.country),
            ("state", &self.state),
            ("district", &self.district),
            ("city", &self.city),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VerifyPasswordRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPasswordResponse {
    pub is_valid: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        MessageResponse { msg: msg.into() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateUserResponse {
    pub msg: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegisterRequest {
        RegisterRequest {
            first_name: "Asha".into(),
            last_name: "Verma".into(),
            email: "asha@example.com".into(),
            password: "donate-often".into(),
            mobile_number: "+919876543210".into(),
            blood_group: Some(BloodGroup::OPositive),
            ..Default::default()
        }
    }

    #[test]
    fn blood_group_uses_clinical_notation_on_the_wire() {
        let json = serde_json::to_string(&BloodGroup::AbNegative).unwrap();
        assert_eq!(json, "\"AB-\"");
        let parsed: BloodGroup = serde_json::from_str("\"O+\"").unwrap();
        assert_eq!(parsed, BloodGroup::OPositive);
        assert_eq!("ab+".parse::<BloodGroup>().unwrap(), BloodGroup::AbPositive);
        assert!("C+".parse::<BloodGroup>().is_err());
    }

    #[test]
    fn registration_requires_core_fields() {
        assert!(valid_registration().validate().is_ok());

        let mut missing = valid_registration();
        missing.mobile_number = "  ".into();
        assert_eq!(missing.validate().unwrap_err(), "Required fields are missing.");

        let mut bad_email = valid_registration();
        bad_email.email = "asha at example.com".into();
        assert!(bad_email.validate().is_err());

        let mut short = valid_registration();
        short.password = "1234567".into();
        assert!(short.validate().is_err());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b"));
        assert!(!is_valid_email("@b"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn masks_mobile_numbers() {
        assert_eq!(mask_mobile("+919876543210"), "+9xxxxxx10");
        assert_eq!(mask_mobile(""), "");
        assert_eq!(mask_mobile("7"), "7xxxxxx7");
    }

    #[test]
    fn donor_filter_ignores_blank_criteria() {
        let filter = DonorFilter {
            blood_group: Some("A+".into()),
            country: Some(" ".into()),
            state: Some("Haryana".into()),
            district: None,
            city: Some(String::new()),
        }
        .normalized();

        assert_eq!(filter.criteria(), vec![("blood_group", "A+"), ("state", "Haryana")]);
        assert_eq!(filter.to_query_string(), "bloodGroup=A%2B&state=Haryana");
    }

    #[test]
    fn registration_checks_mobile_format() {
        let mut local = valid_registration();
        local.mobile_number = "9876543210".into();
        assert!(local.validate().is_ok());

        let mut short = valid_registration();
        short.mobile_number = "98765".into();
        assert_eq!(short.validate().unwrap_err(), "Mobile number must be 10 digits.");
    }

    #[test]
    fn identifiers_match_the_stored_mobile_form() {
        assert_eq!(normalize_identifier(" 9876543210 "), "+919876543210");
        assert_eq!(normalize_identifier("+919876543210"), "+919876543210");
        assert_eq!(normalize_identifier("Asha@Example.com "), "Asha@Example.com");
        assert_eq!(normalize_identifier("12345"), "12345");
    }

    #[test]
    fn profile_update_cannot_blank_required_fields() {
        let mut blank_name = UpdateUserRequest {
            first_name: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(
            blank_name.validate().unwrap_err(),
            "Required fields cannot be empty."
        );

        let mut blank_mobile = UpdateUserRequest {
            mobile_number: Some(String::new()),
            ..Default::default()
        };
        assert!(blank_mobile.validate().is_err());

        let mut local_mobile = UpdateUserRequest {
            mobile_number: Some("9123456789".into()),
            city: Some("Indri".into()),
            ..Default::default()
        };
        assert!(local_mobile.validate().is_ok());
        assert_eq!(local_mobile.mobile_number.as_deref(), Some("+919123456789"));
    }

    #[test]
    fn empty_profile_update_is_detected() {
        assert!(UpdateUserRequest::default().is_empty());
        let update: UpdateUserRequest = serde_json::from_str(r#"{"city":"Thanesar"}"#).unwrap();
        assert!(!update.is_empty());
        assert_eq!(update.city.as_deref(), Some("Thanesar"));
    }
}
