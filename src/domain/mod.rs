//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod validation;
mod value;

pub use request::{
    AvailableNumbers, BuyNumber, Contact, ContactList, DEFAULT_LIMIT, DEFAULT_PAGE, MessageBody,
    MessagingStats, Pagination, SendMessage, SendMessageBuilder, SendOptions, SpendingStats,
    StatsGrouping, Template, UserInfo,
};
pub use validation::ArgumentError;
pub(crate) use value::required_text;
pub use value::{CountryCode, IntoResourceId, Phone, PhoneNumber, ResourceId, Token, Username};
