use serde_json::Value;

use crate::client::{Method, TextmagicClient, TextmagicError};
use crate::domain::{IntoResourceId, Pagination, Template};
use crate::transport::{Args, BodyShape, Expect, encode_template};

/// Updates wrap fields as `template[...]`; creation sends them flat.
const UPDATE_SHAPE: BodyShape = BodyShape::Namespaced {
    namespace: "template",
    decamelize: true,
};

impl TextmagicClient {
    /// `GET /templates` (paginated); expects 200.
    pub async fn get_templates(&self, pagination: Pagination) -> Result<Value, TextmagicError> {
        self.list("templates", pagination).await
    }

    /// `GET /templates/{id}`; expects 200.
    pub async fn get_template(&self, id: impl IntoResourceId) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.fetch(&format!("templates/{id}")).await
    }

    /// `POST /templates` with flat `name`/`content`; expects 201.
    pub async fn add_template(&self, template: &Template) -> Result<Value, TextmagicError> {
        self.call(
            Method::Post,
            "templates",
            encode_template(template),
            Expect::CREATED,
        )
        .await
    }

    /// `PUT /templates/{id}` with a `template[...]` body; expects 201.
    pub async fn update_template(
        &self,
        id: impl IntoResourceId,
        template: &Template,
    ) -> Result<Value, TextmagicError> {
        let id = id.into_resource_id()?;
        self.execute(
            Method::Put,
            &format!("templates/{id}"),
            encode_template(template),
            UPDATE_SHAPE,
            Expect::CREATED,
        )
        .await
    }

    /// `DELETE /templates/{id}`; `true` on 204.
    pub async fn delete_template(&self, id: impl IntoResourceId) -> Result<bool, TextmagicError> {
        let id = id.into_resource_id()?;
        self.remove(&format!("templates/{id}"), Args::new()).await
    }
}
