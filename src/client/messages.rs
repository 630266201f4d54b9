//! Outbound messages, replies, sessions, schedules, bulks and chats.

use serde_json::Value;

use crate::client::{Method, TextmagicClient, TextmagicError};
use crate::domain::{IntoResourceId, Pagination, Phone, SendMessage};
use crate::transport::{Args, Expect, encode_send_message};

impl TextmagicClient {
    /// Send a message, schedule it (`sending_time`) or create a recurring schedule
    /// (`rrule`).
    ///
    /// Any 2xx status is success: the API answers differently for immediate,
    /// scheduled and recurring sends.
    pub async fn send(&self, request: &SendMessage) -> Result<Value, TextmagicError> {
        self.call(
            Method::Post,
            "messages",
            encode_send_message(request),
            Expect::AnySuccess,
        )
        .await
    }

    /// Price a message without sending it. Takes the same arguments as [`Self::send`].
    pub async fn get_price(&self, request: &SendMessage) -> Result<Value, TextmagicError> {
        self.call(
            Method::Get,
            "messages/price",
            encode_send_message(request),
            Expect::OK,
        )
        .await
    }

    /// `GET /messages` (paginated); expects 200.
    pub async fn get_messages(&self, pagination: Pagination) -> Result<Value, TextmagicError> {
        self.list("messages", pagination).await
    }

    /// `GET /messages/{id}`; expects 200.
    pub async fn get_message(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("messages/{id}")).await
    }

    /// `DELETE /messages/{id}`; `true` on 204.
    pub async fn delete_message(&self, id: impl IntoResourceId) -> Result<bool, TextmagicError> {
        let id = id.into_resource_id()?;
        self.remove(&format!("messages/{id}"), Args::new()).await
    }

    /// Inbound messages.
    pub async fn get_replies(&self, pagination: Pagination) -> Result<Value, TextmagicError> {
        self.list("replies", pagination).await
    }

    /// `GET /replies/{id}`; expects 200.
    pub async fn get_reply(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("replies/{id}")).await
    }

    /// `DELETE /replies/{id}`; `true` on 204.
    pub async fn delete_reply(&self, id: impl IntoResourceId) -> Result<bool, TextmagicError> {
        let id = id.into_resource_id()?;
        self.remove(&format!("replies/{id}"), Args::new()).await
    }

    /// Sending sessions: one per [`Self::send`] call.
    pub async fn get_sessions(&self, pagination: Pagination) -> Result<Value, TextmagicError> {
        self.list("sessions", pagination).await
    }

    /// `GET /sessions/{id}`; expects 200.
    pub async fn get_session(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("sessions/{id}")).await
    }

    /// `GET /sessions/{id}/messages` (paginated); expects 200.
    pub async fn get_session_messages(
        &self,
        id: impl IntoResourceId,
        pagination: Pagination,
    ) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.list(&format!("sessions/{id}/messages"), pagination)
            .await
    }

    /// `DELETE /sessions/{id}`; `true` on 204.
    pub async fn delete_session(&self, id: impl IntoResourceId) -> Result<bool, TextmagicError> {
        let id = id.into_resource_id()?;
        self.remove(&format!("sessions/{id}"), Args::new()).await
    }

    /// `GET /schedules` (paginated); expects 200.
    pub async fn get_schedules(&self, pagination: Pagination) -> Result<Value, TextmagicError> {
        self.list("schedules", pagination).await
    }

    /// `GET /schedules/{id}`; expects 200.
    pub async fn get_schedule(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("schedules/{id}")).await
    }

    /// `DELETE /schedules/{id}`; `true` on 204.
    pub async fn delete_schedule(&self, id: impl IntoResourceId) -> Result<bool, TextmagicError> {
        let id = id.into_resource_id()?;
        self.remove(&format!("schedules/{id}"), Args::new()).await
    }

    /// `GET /bulks` (paginated); expects 200.
    pub async fn get_bulks(&self, pagination: Pagination) -> Result<Value, TextmagicError> {
        self.list("bulks", pagination).await
    }

    /// `GET /bulks/{id}`; expects 200.
    pub async fn get_bulk(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("bulks/{id}")).await
    }

    /// `GET /chats` (paginated); expects 200.
    pub async fn get_chats(&self, pagination: Pagination) -> Result<Value, TextmagicError> {
        self.list("chats", pagination).await
    }

    /// Messages exchanged with one phone number.
    pub async fn get_chat(
        &self,
        phone: impl Into<String>,
        pagination: Pagination,
    ) -> Result<Value, TextmagicError> {
        let phone = Phone::new(phone)?;
        self.list(&format!("chats/{phone}"), pagination).await
    }
}
