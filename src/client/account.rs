//! Account profile, API tokens, statistics and invoices.

use serde_json::Value;

use crate::client::{Method, TextmagicClient, TextmagicError};
use crate::domain::{MessagingStats, Pagination, SpendingStats, UserInfo, required_text};
use crate::transport::{
    Args, BodyShape, Expect, encode_messaging_stats, encode_spending_stats, encode_user_info,
};

/// `PUT /user` expects `user[first_name]` style keys.
const USER_SHAPE: BodyShape = BodyShape::Namespaced {
    namespace: "user",
    decamelize: true,
};

impl TextmagicClient {
    /// Current account: name, balance, currency, timezone.
    pub async fn get_user_info(&self) -> Result<Value, TextmagicError> {
        self.fetch("user").await
    }

    /// `PUT /user` with a `user[...]` body; expects 201.
    pub async fn set_user_info(&self, info: &UserInfo) -> Result<Value, TextmagicError> {
        self.execute(
            Method::Put,
            "user",
            encode_user_info(info),
            USER_SHAPE,
            Expect::CREATED,
        )
        .await
    }

    /// Exchange account password for an API token named `app_name`.
    pub async fn create_token(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Result<Value, TextmagicError> {
        let args = Args::new()
            .scalar("username", required_text("username", username)?)
            .scalar("password", required_text("password", password)?)
            .scalar("appName", required_text("appName", app_name)?);
        self.call(Method::Post, "tokens", args, Expect::OK).await
    }

    /// Extend the lifetime of the token this client authenticates with.
    pub async fn refresh_token(&self) -> Result<Value, TextmagicError> {
        self.fetch("tokens/refresh").await
    }

    /// `GET /stats/messaging`, optionally grouped by day, month or year; expects 200.
    pub async fn get_messaging_stats(
        &self,
        request: &MessagingStats,
    ) -> Result<Value, TextmagicError> {
        self.call(
            Method::Get,
            "stats/messaging",
            encode_messaging_stats(request),
            Expect::OK,
        )
        .await
    }

    /// `GET /stats/spending`: paginated account spending; expects 200.
    pub async fn get_spending_stats(
        &self,
        request: &SpendingStats,
    ) -> Result<Value, TextmagicError> {
        self.call(
            Method::Get,
            "stats/spending",
            encode_spending_stats(request),
            Expect::OK,
        )
        .await
    }

    /// `GET /invoices` (paginated); expects 200.
    pub async fn get_invoices(&self, pagination: Pagination) -> Result<Value, TextmagicError> {
        self.list("invoices", pagination).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::{FakeTransport, assert_param, make_client};
    use crate::domain::StatsGrouping;

    use super::*;

    #[tokio::test]
    async fn get_user_info_returns_body() {
        let body = json!({"id": 1, "username": "jdoe", "balance": 10.5});
        let transport = FakeTransport::new(200, body.to_string());
        let client = make_client(transport.clone());

        assert_eq!(client.get_user_info().await.unwrap(), body);
        let (method, path, query) = transport.last_request();
        assert_eq!(method, "GET");
        assert_eq!(path, "/user");
        assert!(query.is_empty());
    }

    #[tokio::test]
    async fn set_user_info_namespaces_and_decamelizes() {
        let transport = FakeTransport::new(201, r#"{"id":1}"#);
        let client = make_client(transport.clone());

        let info = UserInfo::new("Jane", "Doe", "Acme").unwrap();
        client.set_user_info(&info).await.unwrap();

        let (method, path, _) = transport.last_request();
        assert_eq!(method, "PUT");
        assert_eq!(path, "/user");
        let form = transport.last_form().unwrap();
        assert_param(&form, "user[first_name]", "Jane");
        assert_param(&form, "user[last_name]", "Doe");
        assert_param(&form, "user[company]", "Acme");
    }

    #[tokio::test]
    async fn create_and_refresh_token() {
        let transport = FakeTransport::new(200, r#"{"username":"jdoe","token":"abc","expires":"2030-01-01T00:00:00+0000"}"#);
        let client = make_client(transport.clone());

        let value = client.create_token("jdoe", "secret", "cli").await.unwrap();
        assert_eq!(value["token"], json!("abc"));
        let (method, path, _) = transport.last_request();
        assert_eq!(method, "POST");
        assert_eq!(path, "/tokens");
        assert_param(&transport.last_form().unwrap(), "appName", "cli");

        client.refresh_token().await.unwrap();
        let (method, path, _) = transport.last_request();
        assert_eq!(method, "GET");
        assert_eq!(path, "/tokens/refresh");

        assert!(client.create_token("jdoe", "", "cli").await.is_err());
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn stats_and_invoices() {
        let transport = FakeTransport::new(200, "[]");
        let client = make_client(transport.clone());

        client
            .get_messaging_stats(&MessagingStats {
                by: Some(StatsGrouping::Month),
                start: Some(1_600_000_000),
                end: None,
            })
            .await
            .unwrap();
        let (_, path, query) = transport.last_request();
        assert_eq!(path, "/stats/messaging");
        assert_param(&query, "by", "month");
        assert_param(&query, "start", "1600000000");

        client
            .get_spending_stats(&SpendingStats::default())
            .await
            .unwrap();
        let (_, path, query) = transport.last_request();
        assert_eq!(path, "/stats/spending");
        assert_param(&query, "page", "1");

        client.get_invoices(Pagination::new(1, 5)).await.unwrap();
        let (_, path, query) = transport.last_request();
        assert_eq!(path, "/invoices");
        assert_param(&query, "limit", "5");
    }
}
