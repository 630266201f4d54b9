//! Dedicated numbers.

use serde_json::Value;

use crate::client::{Method, TextmagicClient, TextmagicError};
use crate::domain::{AvailableNumbers, BuyNumber, IntoResourceId, Pagination};
use crate::transport::{Args, Expect, encode_available_numbers, encode_buy_number};

impl TextmagicClient {
    /// Numbers owned by the account.
    pub async fn get_dedicated_numbers(
        &self,
        pagination: Pagination,
    ) -> Result<Value, TextmagicError> {
        self.list("numbers", pagination).await
    }

    /// `GET /numbers/{id}`; expects 200.
    pub async fn get_dedicated_number(
        &self,
        id: impl IntoResourceId,
    ) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("numbers/{id}")).await
    }

    /// Numbers available for purchase in a country.
    pub async fn search_available_numbers(
        &self,
        request: &AvailableNumbers,
    ) -> Result<Value, TextmagicError> {
        self.call(
            Method::Get,
            "numbers/available",
            encode_available_numbers(request),
            Expect::OK,
        )
        .await
    }

    /// `POST /numbers`; expects 201.
    pub async fn buy_dedicated_number(&self, request: &BuyNumber) -> Result<Value, TextmagicError> {
        self.call(
            Method::Post,
            "numbers",
            encode_buy_number(request),
            Expect::CREATED,
        )
        .await
    }

    /// Cancel a dedicated number subscription.
    pub async fn delete_dedicated_number(
        &self,
        id: impl IntoResourceId,
    ) -> Result<bool, TextmagicError> {
        let id = id.into_resource_id()?;
        self.remove(&format!("numbers/{id}"), Args::new()).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::tests::{FakeTransport, assert_param, make_client};

    use super::*;

    #[tokio::test]
    async fn buy_dedicated_number_posts_required_fields() {
        let transport = FakeTransport::new(201, r#"{"id":4,"href":"/api/v2/numbers/4"}"#);
        let client = make_client(transport.clone());

        let request = BuyNumber::new("+447860021130", "GB", 1_u64).unwrap();
        let value = client.buy_dedicated_number(&request).await.unwrap();
        assert_eq!(value["id"], json!(4));

        let (method, path, _) = transport.last_request();
        assert_eq!(method, "POST");
        assert_eq!(path, "/numbers");
        let form = transport.last_form().unwrap();
        assert_param(&form, "phone", "+447860021130");
        assert_param(&form, "country", "GB");
        assert_param(&form, "userId", "1");
    }

    #[tokio::test]
    async fn search_available_numbers_uses_query() {
        let transport = FakeTransport::new(200, r#"{"numbers":["447860021130"],"price":5}"#);
        let client = make_client(transport.clone());

        let mut request = AvailableNumbers::new("gb").unwrap();
        request.tollfree = Some(true);
        client.search_available_numbers(&request).await.unwrap();

        let (method, path, query) = transport.last_request();
        assert_eq!(method, "GET");
        assert_eq!(path, "/numbers/available");
        assert_param(&query, "country", "GB");
        assert_param(&query, "tollfree", "1");
    }

    #[tokio::test]
    async fn dedicated_number_lookup_and_delete() {
        let transport = FakeTransport::new(204, "");
        let client = make_client(transport.clone());

        assert!(client.delete_dedicated_number(4_u64).await.unwrap());
        let (method, path, _) = transport.last_request();
        assert_eq!(method, "DELETE");
        assert_eq!(path, "/numbers/4");

        assert!(client.get_dedicated_number("4a").await.is_err());
        assert_eq!(transport.request_count(), 1);

        let transport = FakeTransport::new(200, r#"{"resources":[],"page":1}"#);
        let client = make_client(transport.clone());
        assert!(client.get_dedicated_number(4_u64).await.is_ok());
        assert_eq!(transport.last_request().1, "/numbers/4");
        assert!(client.get_dedicated_numbers(Pagination::default()).await.is_ok());
        let (method, path, query) = transport.last_request();
        assert_eq!(method, "GET");
        assert_eq!(path, "/numbers");
        assert_param(&query, "page", "1");
    }
}
