//! Customers and the identifiers they sign in with.

use crate::user_actor::UserError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Customer,
    RestaurantOwner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: Option<String>,
    pub reference: Option<String>,
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.street, self.number)?;
        if let Some(neighborhood) = &self.neighborhood {
            write!(f, " - {neighborhood}")?;
        }
        Ok(())
    }
}

/// A Brazilian mobile number: two area-code digits plus nine digits.
///
/// Stored as bare digits; displayed as `(75) 99999-9999`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Phone(String);

impl Phone {
    pub const DIGITS: usize = 11;

    /// Keeps the digits of `raw`, ignoring punctuation and spaces.
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != Self::DIGITS {
            return Err(UserError::ValidationError(format!(
                "phone must have {} digits, got {}",
                Self::DIGITS,
                digits.len()
            )));
        }
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = UserError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = &self.0;
        write!(f, "({}) {}-{}", &d[..2], &d[2..7], &d[7..])
    }
}

/// The six-digit code typed on the verification step.
///
/// Codes are not checked against anything; any well-formed code passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub const DIGITS: usize = 6;

    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let raw = raw.trim();
        if raw.len() != Self::DIGITS || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(UserError::ValidationError(format!(
                "verification code must be {} digits",
                Self::DIGITS
            )));
        }
        Ok(Self(raw.to_string()))
    }
}

/// Represents a registered user in the system.
///
/// # Actor Framework
/// Managed by the identity service; see
/// [`crate::user_actor::entity`] for the [`ActorEntity`](crate::framework::ActorEntity)
/// implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub phone: Phone,
    pub role: UserRole,
    pub default_address: Option<Address>,
}

/// Payload for registering a user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub phone: Phone,
    pub role: UserRole,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub default_address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_keeps_digits_and_formats() {
        let phone = Phone::parse("(75) 99999-9999").unwrap();
        assert_eq!(phone.digits(), "75999999999");
        assert_eq!(phone.to_string(), "(75) 99999-9999");
        assert_eq!(Phone::parse("75 99999 9999").unwrap(), phone);
    }

    #[test]
    fn test_phone_needs_eleven_digits() {
        assert!(Phone::parse("(75) 9999-999").is_err());
        assert!(Phone::parse("").is_err());
        assert!(Phone::parse("759999999990").is_err());
    }

    #[test]
    fn test_otp_code() {
        assert!(OtpCode::parse("123456").is_ok());
        assert!(OtpCode::parse(" 123456 ").is_ok());
        assert!(OtpCode::parse("12345").is_err());
        assert!(OtpCode::parse("12a456").is_err());
    }

    #[test]
    fn test_phone_deserialize_validates() {
        let phone: Phone = serde_json::from_str("\"75999999999\"").unwrap();
        assert_eq!(phone.to_string(), "(75) 99999-9999");
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"75999999999\"");
        assert!(serde_json::from_str::<Phone>("\"123\"").is_err());
    }

    #[test]
    fn test_address_display() {
        let mut address = Address {
            street: "Rua Principal".into(),
            number: "123".into(),
            neighborhood: Some("Centro".into()),
            reference: Some("Próximo à praça".into()),
        };
        assert_eq!(address.to_string(), "Rua Principal, 123 - Centro");
        address.neighborhood = None;
        assert_eq!(address.to_string(), "Rua Principal, 123");
    }
}
