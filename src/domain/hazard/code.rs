//! Hazard code value object.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Short identifier of a causal or consequence factor ("DP", "Ic", "Dg", ...).
///
/// Codes come from a known vocabulary, but any non-blank string is accepted:
/// codes missing from the catalog simply match no zone and have an unknown
/// nature.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HazardCode(String);

impl HazardCode {
    /// Code of the terminal damage node ("Dégâts").
    pub const DAMAGE: &'static str = "Dg";

    /// Creates a hazard code, rejecting blank input.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ValidationError::empty_field("hazard_code"));
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the terminal damage node.
    pub fn is_damage(&self) -> bool {
        self.0 == Self::DAMAGE
    }
}

impl fmt::Display for HazardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for HazardCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HazardCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HazardCode> for String {
    fn from(code: HazardCode) -> Self {
        code.0
    }
}
