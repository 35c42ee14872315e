use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.IR API key.
///
/// Invariant: non-empty after trimming. Sent on every request in the
/// `x-api-key` header.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by SMS.IR (`x-api-key`).
    pub const HEADER: &'static str = "x-api-key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Sender line number (`lineNumber`).
///
/// Invariant: non-zero. The value must be a line enabled in your SMS.IR panel.
pub struct LineNumber(u64);

impl LineNumber {
    /// JSON field name used by SMS.IR (`lineNumber`).
    pub const FIELD: &'static str = "lineNumber";

    /// Create a validated [`LineNumber`].
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying line number.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient mobile number as sent to SMS.IR (`mobiles` entries).
///
/// Invariant: non-empty after trimming. This type does not normalize; SMS.IR
/// expects the 0-prefixed domestic format (`09123456789`). If you hold an
/// international or formatted number, use [`Mobile::normalize`].
pub struct Mobile(String);

impl Mobile {
    /// JSON field name used by SMS.IR (`mobiles`).
    pub const FIELD: &'static str = "mobiles";

    /// Create a validated (non-empty) mobile number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse a phone number and normalize it to the domestic format SMS.IR
    /// expects.
    ///
    /// `default_region` is used when the input does not carry an explicit
    /// country prefix; it defaults to Iran.
    pub fn normalize(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let region = default_region.or(Some(country::Id::IR));
        let parsed = phonenumber::parse(region, raw).map_err(|_| {
            ValidationError::InvalidMobile {
                input: raw.to_owned(),
            }
        })?;

        let national = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::National)
            .to_string();
        let mut digits: String = national.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(ValidationError::InvalidMobile {
                input: raw.to_owned(),
            });
        }
        // SMS.IR wants the trunk-prefixed domestic form.
        if !digits.starts_with('0') {
            digits.insert(0, '0');
        }

        Ok(Self(digits))
    }

    /// Raw (trimmed) value as sent to SMS.IR.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`messageText`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by SMS.IR (`messageText`).
    pub const FIELD: &'static str = "messageText";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SMS.IR pack identifier (`packId`) returned by the bulk and like-to-like
/// send endpoints.
///
/// Invariant: non-empty after trimming.
pub struct PackId(String);

impl PackId {
    /// JSON field name used by SMS.IR (`packId`).
    pub const FIELD: &'static str = "packId";

    /// Create a validated [`PackId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated pack id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SMS.IR message identifier (`messageId`).
///
/// Invariant: non-zero.
pub struct MessageId(u64);

impl MessageId {
    /// JSON field name used by SMS.IR (`messageId`).
    pub const FIELD: &'static str = "messageId";

    /// Create a validated [`MessageId`].
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying message id.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Verification template identifier (`templateId`) from the SMS.IR panel.
///
/// Invariant: non-zero.
pub struct TemplateId(u32);

impl TemplateId {
    /// JSON field name used by SMS.IR (`templateId`).
    pub const FIELD: &'static str = "templateId";

    /// Create a validated [`TemplateId`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying template id.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.IR panel username, required by the legacy URL send endpoint.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Query parameter name used by SMS.IR (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds (`sendDateTime`).
///
/// Used for scheduled sends; the message is queued until the given moment.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// JSON field name used by SMS.IR (`sendDateTime`).
    pub const FIELD: &'static str = "sendDateTime";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}
