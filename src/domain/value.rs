use std::fmt;

use phonenumber::country;

use crate::domain::validation::ArgumentError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TextMagic account username, sent as `X-TM-Username`.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Field name reported in validation errors.
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ArgumentError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// TextMagic API key, sent as `X-TM-Key`.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct Token(String);

impl Token {
    /// Field name reported in validation errors.
    pub const FIELD: &'static str = "token";

    /// Create a validated [`Token`].
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ArgumentError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Numeric identifier of a TextMagic resource (message, contact, list, ...).
///
/// Invariant: one or more ASCII decimal digits, no surrounding whitespace. Kept as
/// a string so that ids wider than `u64` round-trip unchanged.
pub struct ResourceId(String);

impl ResourceId {
    /// Field name reported in validation errors.
    pub const FIELD: &'static str = "id";

    /// Create a validated id, reporting failures against `id`.
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        Self::for_field(Self::FIELD, value)
    }

    /// Create a validated id, reporting failures against `field`.
    pub fn for_field(field: &'static str, value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        if !is_digits(&value) {
            return Err(ArgumentError::NotNumeric {
                field,
                input: value,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the id as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for ResourceId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

/// Conversion into a [`ResourceId`], validating string input.
///
/// Implemented for integers (always valid), string types (validated) and
/// [`ResourceId`] itself, so operations accept `4820993_u64`, `"4820993"` or a
/// previously validated id alike.
pub trait IntoResourceId {
    fn into_resource_id(self) -> Result<ResourceId, ArgumentError>;
}

impl IntoResourceId for ResourceId {
    fn into_resource_id(self) -> Result<ResourceId, ArgumentError> {
        Ok(self)
    }
}

impl IntoResourceId for &ResourceId {
    fn into_resource_id(self) -> Result<ResourceId, ArgumentError> {
        Ok(self.clone())
    }
}

impl IntoResourceId for u64 {
    fn into_resource_id(self) -> Result<ResourceId, ArgumentError> {
        Ok(self.into())
    }
}

impl IntoResourceId for u32 {
    fn into_resource_id(self) -> Result<ResourceId, ArgumentError> {
        Ok(self.into())
    }
}

impl IntoResourceId for &str {
    fn into_resource_id(self) -> Result<ResourceId, ArgumentError> {
        ResourceId::new(self)
    }
}

impl IntoResourceId for String {
    fn into_resource_id(self) -> Result<ResourceId, ArgumentError> {
        ResourceId::new(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to TextMagic.
///
/// Invariant: an optional leading `+` followed by one or more digits, after
/// trimming. No normalization is performed; parse into [`PhoneNumber`] and convert
/// it when E.164 normalization is wanted.
pub struct Phone(String);

impl Phone {
    /// Field name reported in validation errors.
    pub const FIELD: &'static str = "phone";

    /// Create a validated phone, reporting failures against `phone`.
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        Self::for_field(Self::FIELD, value)
    }

    /// Create a validated phone, reporting failures against `field`.
    pub fn for_field(field: &'static str, value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ArgumentError::Empty { field });
        }
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if !is_digits(digits) {
            return Err(ArgumentError::InvalidPhone {
                field,
                input: value,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to TextMagic.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PhoneNumber> for Phone {
    /// Convert an already-parsed phone number to its E.164 form.
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ArgumentError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ArgumentError::Empty { field: Phone::FIELD });
        }

        let parsed =
            phonenumber::parse(default_region, &raw).map_err(|_| ArgumentError::InvalidPhone {
                field: Phone::FIELD,
                input: raw.clone(),
            })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Two-letter ISO 3166-1 alpha-2 country code, upper-cased.
pub struct CountryCode(String);

impl CountryCode {
    /// Create a validated country code (`"us"` becomes `"US"`).
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.len() != 2 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ArgumentError::InvalidCountry { input: value });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Text that must be non-empty after trimming; the original value is preserved.
pub(crate) fn required_text(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ArgumentError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ArgumentError::Empty { field });
    }
    Ok(value)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
