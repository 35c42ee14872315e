use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    Zero { field: &'static str },
    TooManyRecipients { max: usize, actual: usize },
    RecipientMismatch { texts: usize, mobiles: usize },
    InvalidMobile { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::Zero { field } => write!(f, "{field} must not be zero"),
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::RecipientMismatch { texts, mobiles } => {
                write!(
                    f,
                    "message texts and mobiles must pair up: {texts} texts vs {mobiles} mobiles"
                )
            }
            Self::InvalidMobile { input } => write!(f, "invalid mobile number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
