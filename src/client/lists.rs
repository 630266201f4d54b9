//! Contact lists and their membership.

use serde_json::Value;

use crate::client::{Method, TextmagicClient, TextmagicError};
use crate::domain::{ArgumentError, ContactList, IntoResourceId, Pagination, ResourceId};
use crate::transport::{Args, Expect, encode_contact_ids, encode_contact_list};

impl TextmagicClient {
    /// `GET /lists` (paginated); expects 200.
    pub async fn get_lists(&self, pagination: Pagination) -> Result<Value, TextmagicError> {
        self.list("lists", pagination).await
    }

    /// `GET /lists/{id}`; expects 200.
    pub async fn get_list(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("lists/{id}")).await
    }

    /// `POST /lists`; expects 201.
    pub async fn add_list(&self, list: &ContactList) -> Result<Value, TextmagicError> {
        self.call(
            Method::Post,
            "lists",
            encode_contact_list(list),
            Expect::CREATED,
        )
        .await
    }

    /// `PUT /lists/{id}`; expects 201.
    pub async fn update_list(
        &self,
        id: impl IntoResourceId,
        list: &ContactList,
    ) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.call(
            Method::Put,
            &format!("lists/{id}"),
            encode_contact_list(list),
            Expect::CREATED,
        )
        .await
    }

    /// `DELETE /lists/{id}`; `true` on 204.
    pub async fn delete_list(&self, id: impl IntoResourceId) -> Result<bool, TextmagicError> {
        let id = id.into_resource_id()?;
        self.remove(&format!("lists/{id}"), Args::new()).await
    }

    /// `GET /lists/{id}/contacts` (paginated); expects 200.
    pub async fn get_list_contacts(
        &self,
        id: impl IntoResourceId,
        pagination: Pagination,
    ) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.list(&format!("lists/{id}/contacts"), pagination)
            .await
    }

    /// `PUT /lists/{id}/contacts` with comma-joined `contacts`; expects 201.
    pub async fn add_contacts_to_list<I, C>(
        &self,
        id: impl IntoResourceId,
        contacts: I,
    ) -> Result<Value, TextmagicError>
    where
        I: IntoIterator<Item = C>,
        C: IntoResourceId,
    {
        let id = id.into_resource_id()?;
        let contacts = contact_ids(contacts)?;
        self.call(
            Method::Put,
            &format!("lists/{id}/contacts"),
            encode_contact_ids(&contacts),
            Expect::CREATED,
        )
        .await
    }

    /// Remove contacts from the list; the contacts themselves are kept.
    pub async fn delete_contacts_from_list<I, C>(
        &self,
        id: impl IntoResourceId,
        contacts: I,
    ) -> Result<bool, TextmagicError>
    where
        I: IntoIterator<Item = C>,
        C: IntoResourceId,
    {
        let id = id.into_resource_id()?;
        let contacts = contact_ids(contacts)?;
        self.remove(
            &format!("lists/{id}/contacts"),
            encode_contact_ids(&contacts),
        )
        .await
    }
}

fn contact_ids<I, C>(contacts: I) -> Result<Vec<ResourceId>, ArgumentError>
where
    I: IntoIterator<Item = C>,
    C: IntoResourceId,
{
    let contacts = contacts
        .into_iter()
        .map(|id| {
            id.into_resource_id()
                .map_err(|err| match err {
                    ArgumentError::NotNumeric { input, .. } => ArgumentError::NotNumeric {
                        field: "contacts",
                        input,
                    },
                    other => other,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if contacts.is_empty() {
        return Err(ArgumentError::Empty { field: "contacts" });
    }
    Ok(contacts)
}
