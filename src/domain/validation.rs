use std::fmt;

/// Local validation failure, raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    Empty { field: &'static str },
    NotNumeric { field: &'static str, input: String },
    InvalidPhone { field: &'static str, input: String },
    InvalidCountry { input: String },
    MissingBody,
    ConflictingBody,
    MissingRecipients,
    NoResource,
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotNumeric { field, input } => {
                write!(f, "{field} should be numeric, got {input:?}")
            }
            Self::InvalidPhone { field, input } => {
                write!(f, "{field} should be a phone number, got {input:?}")
            }
            Self::InvalidCountry { input } => {
                write!(f, "country should be a 2-letter ISO code, got {input:?}")
            }
            Self::MissingBody => f.write_str("either text or templateId must be specified"),
            Self::ConflictingBody => f.write_str("text and templateId are mutually exclusive"),
            Self::MissingRecipients => {
                f.write_str("at least one of phones, contacts or lists must be specified")
            }
            Self::NoResource => f.write_str("No resource specified"),
        }
    }
}

impl std::error::Error for ArgumentError {}
