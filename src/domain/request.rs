use crate::domain::validation::ValidationError;
use crate::domain::value::{
    LineNumber, MessageText, Mobile, TemplateId, UnixTimestamp, Username,
};

/// Maximum number of recipients SMS.IR accepts in one bulk or like-to-like
/// pack.
pub const SEND_MAX_RECIPIENTS: usize = 100;

#[derive(Debug, Clone)]
/// One message to many recipients (`/v1/send/bulk`).
pub struct SendBulk {
    message: MessageText,
    mobiles: Vec<Mobile>,
    send_at: Option<UnixTimestamp>,
    line_number: Option<LineNumber>,
}

impl SendBulk {
    /// Create a bulk send request.
    ///
    /// Fails when `mobiles` is empty or exceeds [`SEND_MAX_RECIPIENTS`].
    pub fn new(message: MessageText, mobiles: Vec<Mobile>) -> Result<Self, ValidationError> {
        if mobiles.is_empty() {
            return Err(ValidationError::Empty {
                field: Mobile::FIELD,
            });
        }
        if mobiles.len() > SEND_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_MAX_RECIPIENTS,
                actual: mobiles.len(),
            });
        }
        Ok(Self {
            message,
            mobiles,
            send_at: None,
            line_number: None,
        })
    }

    /// Schedule the pack instead of sending immediately.
    pub fn schedule_at(mut self, at: UnixTimestamp) -> Self {
        self.send_at = Some(at);
        self
    }

    /// Send from a specific line instead of the client default.
    pub fn from_line(mut self, line: LineNumber) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn mobiles(&self) -> &[Mobile] {
        &self.mobiles
    }

    pub fn send_at(&self) -> Option<UnixTimestamp> {
        self.send_at
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }
}

#[derive(Debug, Clone)]
/// Paired messages and recipients (`/v1/send/liketolike`): the first text
/// goes to the first mobile, the second to the second, and so on.
pub struct SendLikeToLike {
    messages: Vec<MessageText>,
    mobiles: Vec<Mobile>,
    send_at: Option<UnixTimestamp>,
    line_number: Option<LineNumber>,
}

impl SendLikeToLike {
    /// Create a like-to-like send request.
    ///
    /// Fails when the arrays are empty, differ in length, or exceed
    /// [`SEND_MAX_RECIPIENTS`].
    pub fn new(
        messages: Vec<MessageText>,
        mobiles: Vec<Mobile>,
    ) -> Result<Self, ValidationError> {
        if mobiles.is_empty() {
            return Err(ValidationError::Empty {
                field: Mobile::FIELD,
            });
        }
        if messages.len() != mobiles.len() {
            return Err(ValidationError::RecipientMismatch {
                texts: messages.len(),
                mobiles: mobiles.len(),
            });
        }
        if mobiles.len() > SEND_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_MAX_RECIPIENTS,
                actual: mobiles.len(),
            });
        }
        Ok(Self {
            messages,
            mobiles,
            send_at: None,
            line_number: None,
        })
    }

    /// Schedule the pack instead of sending immediately.
    pub fn schedule_at(mut self, at: UnixTimestamp) -> Self {
        self.send_at = Some(at);
        self
    }

    /// Send from a specific line instead of the client default.
    pub fn from_line(mut self, line: LineNumber) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn messages(&self) -> &[MessageText] {
        &self.messages
    }

    pub fn mobiles(&self) -> &[Mobile] {
        &self.mobiles
    }

    pub fn send_at(&self) -> Option<UnixTimestamp> {
        self.send_at
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A `{name, value}` pair filling one placeholder of a verification template.
pub struct TemplateParameter {
    name: String,
    value: String,
}

impl TemplateParameter {
    /// Create a template parameter; the placeholder name must be non-empty.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "parameters",
            });
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone)]
/// Template-based verification code send (`/v1/send/verify/`).
///
/// Templates are defined in the SMS.IR panel; `parameters` fill their
/// placeholders.
pub struct SendVerifyCode {
    mobile: Mobile,
    template_id: TemplateId,
    parameters: Vec<TemplateParameter>,
}

impl SendVerifyCode {
    pub fn new(
        mobile: Mobile,
        template_id: TemplateId,
        parameters: Vec<TemplateParameter>,
    ) -> Self {
        Self {
            mobile,
            template_id,
            parameters,
        }
    }

    pub fn mobile(&self) -> &Mobile {
        &self.mobile
    }

    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    pub fn parameters(&self) -> &[TemplateParameter] {
        &self.parameters
    }
}

#[derive(Debug, Clone)]
/// Legacy query-string send (`GET /v1/send`), kept for backward
/// compatibility with the v1 panel API. The API key doubles as the
/// `password` query parameter.
pub struct SendByUrl {
    username: Username,
    mobile: Mobile,
    text: MessageText,
    line_number: Option<LineNumber>,
}

impl SendByUrl {
    pub fn new(username: Username, mobile: Mobile, text: MessageText) -> Self {
        Self {
            username,
            mobile,
            text,
            line_number: None,
        }
    }

    /// Send from a specific line instead of the client default.
    pub fn from_line(mut self, line: LineNumber) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn mobile(&self) -> &Mobile {
        &self.mobile
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Pagination for the listing endpoints. Unset values are omitted from the
/// query string and the server applies its own defaults.
pub struct Pagination {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl Pagination {
    /// Request a specific page.
    pub fn page(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Date-bounded query for the archive endpoints. All bounds are optional.
pub struct ArchiveQuery {
    pub from_date: Option<UnixTimestamp>,
    pub to_date: Option<UnixTimestamp>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Query for today's received messages (`/v1/receive/live`).
pub struct ReceiveLiveQuery {
    pub pagination: Pagination,
    pub sort_by_newest: Option<bool>,
}
