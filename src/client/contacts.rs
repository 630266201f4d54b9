//! Contacts, unsubscribers and custom fields.

use serde_json::Value;

use crate::client::{Method, TextmagicClient, TextmagicError};
use crate::domain::{Contact, IntoResourceId, Pagination, Phone, required_text};
use crate::transport::{Args, Expect, encode_contact, encode_custom_field_value, encode_pagination};

impl TextmagicClient {
    /// List contacts. `shared` includes contacts from lists shared with the account.
    pub async fn get_contacts(
        &self,
        pagination: Pagination,
        shared: Option<bool>,
    ) -> Result<Value, TextmagicError> {
        let args = encode_pagination(&pagination).flag("shared", shared);
        self.call(Method::Get, "contacts", args, Expect::OK).await
    }

    /// `GET /contacts/{id}`; expects 200.
    pub async fn get_contact(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("contacts/{id}")).await
    }

    /// `POST /contacts`; expects 201.
    pub async fn add_contact(&self, contact: &Contact) -> Result<Value, TextmagicError> {
        self.call(
            Method::Post,
            "contacts",
            encode_contact(contact),
            Expect::CREATED,
        )
        .await
    }

    /// Replace a contact's fields. Phone and list membership are required as on creation.
    pub async fn update_contact(
        &self,
        id: impl IntoResourceId,
        contact: &Contact,
    ) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.call(
            Method::Put,
            &format!("contacts/{id}"),
            encode_contact(contact),
            Expect::CREATED,
        )
        .await
    }

    /// `DELETE /contacts/{id}`; `true` on 204.
    pub async fn delete_contact(&self, id: impl IntoResourceId) -> Result<bool, TextmagicError> {
        let id = id.into_resource_id()?;
        self.remove(&format!("contacts/{id}"), Args::new()).await
    }

    /// Lists the contact belongs to.
    pub async fn get_contact_lists(
        &self,
        id: impl IntoResourceId,
        pagination: Pagination,
    ) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.list(&format!("contacts/{id}/lists"), pagination)
            .await
    }

    /// `GET /unsubscribers` (paginated); expects 200.
    pub async fn get_unsubscribers(
        &self,
        pagination: Pagination,
    ) -> Result<Value, TextmagicError> {
        self.list("unsubscribers", pagination).await
    }

    /// `GET /unsubscribers/{id}`; expects 200.
    pub async fn get_unsubscriber(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("unsubscribers/{id}")).await
    }

    /// Stop all future messages to `phone`.
    pub async fn unsubscribe(&self, phone: impl Into<String>) -> Result<Value, TextmagicError> {
        let phone = Phone::new(phone)?;
        self.call(
            Method::Post,
            "unsubscribers",
            Args::new().scalar("phone", phone),
            Expect::CREATED,
        )
        .await
    }

    /// `GET /customfields` (paginated); expects 200.
    pub async fn get_custom_fields(
        &self,
        pagination: Pagination,
    ) -> Result<Value, TextmagicError> {
        self.list("customfields", pagination).await
    }

    /// `GET /customfields/{id}`; expects 200.
    pub async fn get_custom_field(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("customfields/{id}")).await
    }

    /// `POST /customfields` with `name`; expects 201.
    pub async fn add_custom_field(&self, name: impl Into<String>) -> Result<Value, TextmagicError> {
        let name = required_text("name", name)?;
        self.call(
            Method::Post,
            "customfields",
            Args::new().scalar("name", name),
            Expect::CREATED,
        )
        .await
    }

    /// `PUT /customfields/{id}` with the new `name`; expects 201.
    pub async fn update_custom_field(
        &self,
        id: impl IntoResourceId,
        name: impl Into<String>,
    ) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        let name = required_text("name", name)?;
        self.call(
            Method::Put,
            &format!("customfields/{id}"),
            Args::new().scalar("name", name),
            Expect::CREATED,
        )
        .await
    }

    /// `DELETE /customfields/{id}`; `true` on 204.
    pub async fn delete_custom_field(
        &self,
        id: impl IntoResourceId,
    ) -> Result<bool, TextmagicError> {
        let id = id.into_resource_id()?;
        self.remove(&format!("customfields/{id}"), Args::new())
            .await
    }

    /// Set the value of custom field `id` for one contact.
    pub async fn update_custom_field_value(
        &self,
        id: impl IntoResourceId,
        contact_id: impl IntoResourceId,
        value: impl Into<String>,
    ) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        let contact_id = contact_id.into_resource_id()?;
        let value = required_text("value", value)?;
        self.call(
            Method::Put,
            &format!("customfields/{id}/update"),
            encode_custom_field_value(&contact_id, &value),
            Expect::CREATED,
        )
        .await
    }
}
