use crate::domain::validation::ArgumentError;
use crate::domain::value::{CountryCode, IntoResourceId, Phone, ResourceId, required_text};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Page selection for listing endpoints.
///
/// Unset fields fall back to [`DEFAULT_PAGE`] and [`DEFAULT_LIMIT`]; both values are
/// always sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Build from string input such as query parameters or CLI flags.
    pub fn parse(page: &str, limit: &str) -> Result<Self, ArgumentError> {
        Ok(Self::new(parse_number("page", page)?, parse_number("limit", limit)?))
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u32, ArgumentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArgumentError::NotNumeric {
            field,
            input: value.to_owned(),
        });
    }
    trimmed.parse().map_err(|_| ArgumentError::NotNumeric {
        field,
        input: value.to_owned(),
    })
}

/// What a message says: literal text or a stored template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Template(ResourceId),
}

/// Optional parameters shared by sending and price checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Strip characters that would overflow the last part instead of sending another one.
    pub cut_extra: Option<bool>,
    /// Maximum number of parts a long message may be split into.
    pub parts_count: Option<u32>,
    /// Custom reference id echoed back in delivery reports.
    pub reference_id: Option<u64>,
    /// Sender id or dedicated number.
    pub from: Option<String>,
    /// iCal recurrence rule; turns the send into a recurring schedule.
    pub rrule: Option<String>,
    /// Unix timestamp for scheduled delivery.
    pub sending_time: Option<u64>,
}

/// A validated send (or price check) request.
///
/// Invariants: exactly one body, at least one recipient of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    body: MessageBody,
    phones: Vec<Phone>,
    contacts: Vec<ResourceId>,
    lists: Vec<ResourceId>,
    options: SendOptions,
}

impl SendMessage {
    pub fn builder() -> SendMessageBuilder {
        SendMessageBuilder::default()
    }

    /// Shortcut for a plain text message to a set of phones.
    pub fn text_to_phones<I, S>(text: impl Into<String>, phones: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder().text(text).phones(phones).build()
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn contacts(&self) -> &[ResourceId] {
        &self.contacts
    }

    pub fn lists(&self) -> &[ResourceId] {
        &self.lists
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// Collects loosely-typed send arguments and validates them in [`SendMessageBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct SendMessageBuilder {
    text: Option<String>,
    template_id: Option<String>,
    phones: Vec<String>,
    contacts: Vec<String>,
    lists: Vec<String>,
    options: SendOptions,
}

impl SendMessageBuilder {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn template_id(mut self, id: impl ToString) -> Self {
        self.template_id = Some(id.to_string());
        self
    }

    pub fn phones<I, S>(mut self, phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phones.extend(phones.into_iter().map(Into::into));
        self
    }

    pub fn contacts<I, S>(mut self, contacts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.contacts
            .extend(contacts.into_iter().map(|id| id.to_string()));
        self
    }

    pub fn lists<I, S>(mut self, lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.lists.extend(lists.into_iter().map(|id| id.to_string()));
        self
    }

    pub fn options(mut self, options: SendOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<SendMessage, ArgumentError> {
        let body = match (self.text, self.template_id) {
            (Some(_), Some(_)) => return Err(ArgumentError::ConflictingBody),
            (None, None) => return Err(ArgumentError::MissingBody),
            (Some(text), None) => MessageBody::Text(required_text("text", text)?),
            (None, Some(id)) => MessageBody::Template(ResourceId::for_field("templateId", id)?),
        };

        if self.phones.is_empty() && self.contacts.is_empty() && self.lists.is_empty() {
            return Err(ArgumentError::MissingRecipients);
        }

        let phones = self
            .phones
            .into_iter()
            .map(|phone| Phone::for_field("phones", phone))
            .collect::<Result<Vec<_>, _>>()?;
        let contacts = id_list("contacts", self.contacts)?;
        let lists = id_list("lists", self.lists)?;

        Ok(SendMessage {
            body,
            phones,
            contacts,
            lists,
            options: self.options,
        })
    }
}

fn id_list(field: &'static str, ids: Vec<String>) -> Result<Vec<ResourceId>, ArgumentError> {
    ids.into_iter()
        .map(|id| ResourceId::for_field(field, id))
        .collect()
}

/// Contact payload for creating or updating a contact.
///
/// Invariants: a valid phone and membership in at least one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    phone: Phone,
    lists: Vec<ResourceId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    /// Two-letter country code used to interpret a local phone number.
    pub country: Option<CountryCode>,
}

impl Contact {
    pub fn new<I, L>(phone: impl Into<String>, lists: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = L>,
        L: IntoResourceId,
    {
        let phone = Phone::new(phone)?;
        let lists = lists
            .into_iter()
            .map(IntoResourceId::into_resource_id)
            .collect::<Result<Vec<_>, _>>()?;
        if lists.is_empty() {
            return Err(ArgumentError::Empty { field: "lists" });
        }
        Ok(Self {
            phone,
            lists,
            first_name: None,
            last_name: None,
            email: None,
            company_name: None,
            country: None,
        })
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn lists(&self) -> &[ResourceId] {
        &self.lists
    }
}

/// Contact list payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactList {
    name: String,
    /// Share the list with sub-accounts.
    pub shared: Option<bool>,
}

impl ContactList {
    pub fn new(name: impl Into<String>) -> Result<Self, ArgumentError> {
        Ok(Self {
            name: required_text("name", name)?,
            shared: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Message template payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Result<Self, ArgumentError> {
        Ok(Self {
            name: required_text("name", name)?,
            content: required_text("content", content)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Account profile fields updated by `PUT /user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    first_name: String,
    last_name: String,
    company: String,
}

impl UserInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        company: impl Into<String>,
    ) -> Result<Self, ArgumentError> {
        Ok(Self {
            first_name: required_text("firstName", first_name)?,
            last_name: required_text("lastName", last_name)?,
            company: required_text("company", company)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn company(&self) -> &str {
        &self.company
    }
}

/// Dedicated number purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyNumber {
    phone: Phone,
    country: CountryCode,
    user_id: ResourceId,
}

impl BuyNumber {
    pub fn new(
        phone: impl Into<String>,
        country: impl Into<String>,
        user_id: impl IntoResourceId,
    ) -> Result<Self, ArgumentError> {
        Ok(Self {
            phone: Phone::new(phone)?,
            country: CountryCode::new(country)?,
            user_id: user_id.into_resource_id()?,
        })
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    pub fn user_id(&self) -> &ResourceId {
        &self.user_id
    }
}

/// Search filter for numbers available for purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableNumbers {
    country: CountryCode,
    /// Leading digits the number should start with.
    pub prefix: Option<u32>,
    pub tollfree: Option<bool>,
}

impl AvailableNumbers {
    pub fn new(country: impl Into<String>) -> Result<Self, ArgumentError> {
        Ok(Self {
            country: CountryCode::new(country)?,
            prefix: None,
            tollfree: None,
        })
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }
}

/// Grouping period for messaging statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsGrouping {
    #[default]
    Off,
    Day,
    Month,
    Year,
}

impl StatsGrouping {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Filter for `GET /stats/messaging`. Timestamps are Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessagingStats {
    pub by: Option<StatsGrouping>,
    pub start: Option<u64>,
    pub end: Option<u64>,
}

/// Filter for `GET /stats/spending`. Timestamps are Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpendingStats {
    pub pagination: Pagination,
    pub start: Option<u64>,
    pub end: Option<u64>,
}
