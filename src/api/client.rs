use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::api::models::{
    CalculateRequest, CreateTableRequest, QueryRequest, QueryResult, Recipe, Record,
    ResourceTotal, TableSchema,
};
use crate::error::ClientError;

/// HTTP client for the admin and crafting endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Path segments are percent-encoded, so table names can't escape the route.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<String, ClientError> {
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::read_body(response).await
    }

    async fn read_body(response: Response) -> Result<String, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let body = self.send::<()>(Method::GET, url, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(Method::POST, url, Some(body)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn schema(&self) -> Result<Vec<TableSchema>, ClientError> {
        let url = self.endpoint(&["admin", "api", "schema"])?;
        let tables: Option<Vec<TableSchema>> = self.get_json(url).await?;
        Ok(tables.unwrap_or_default())
    }

    /// All rows of `table`. A body that is not a JSON array (including `null`)
    /// is reported as malformed rather than treated as an empty table.
    pub async fn table_rows(&self, table: &str) -> Result<Vec<Record>, ClientError> {
        let url = self.endpoint(&["admin", "api", "table", table])?;
        let body: Value = self.get_json(url).await?;

        match body {
            Value::Array(rows) => rows
                .into_iter()
                .map(|row| match row {
                    Value::Object(record) => Ok(record),
                    other => Err(ClientError::Malformed(format!(
                        "expected a row object, got {}",
                        other
                    ))),
                })
                .collect(),
            Value::Null => Err(ClientError::Malformed("null body".to_string())),
            other => Err(ClientError::Malformed(format!(
                "expected an array of rows, got {}",
                other
            ))),
        }
    }

    pub async fn insert_row(&self, table: &str, data: &Record) -> Result<(), ClientError> {
        let url = self.endpoint(&["admin", "api", "table", table])?;
        self.send(Method::POST, url, Some(data)).await?;
        Ok(())
    }

    pub async fn update_row(&self, table: &str, id: i64, data: &Record) -> Result<(), ClientError> {
        let id = id.to_string();
        let url = self.endpoint(&["admin", "api", "table", table, &id])?;
        self.send(Method::PUT, url, Some(data)).await?;
        Ok(())
    }

    pub async fn delete_row(&self, table: &str, id: i64) -> Result<(), ClientError> {
        let id = id.to_string();
        let url = self.endpoint(&["admin", "api", "table", table, &id])?;
        self.send::<()>(Method::DELETE, url, None).await?;
        Ok(())
    }

    pub async fn execute_query(&self, query: &str) -> Result<QueryResult, ClientError> {
        let url = self.endpoint(&["admin", "api", "query"])?;
        self.post_json(url, &QueryRequest { query }).await
    }

    pub async fn create_table(&self, request: &CreateTableRequest) -> Result<(), ClientError> {
        let url = self.endpoint(&["admin", "api", "create-table"])?;
        self.send(Method::POST, url, Some(request)).await?;
        Ok(())
    }

    pub async fn recipes(&self) -> Result<Vec<Recipe>, ClientError> {
        let url = self.endpoint(&["api", "recipes"])?;
        let recipes: Option<Vec<Recipe>> = self.get_json(url).await?;
        Ok(recipes.unwrap_or_default())
    }

    /// An empty cart requirement comes back as `null` from some servers.
    pub async fn calculate(
        &self,
        request: &CalculateRequest,
    ) -> Result<Vec<ResourceTotal>, ClientError> {
        let url = self.endpoint(&["api", "calculate"])?;
        let totals: Option<Vec<ResourceTotal>> = self.post_json(url, request).await?;
        Ok(totals.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::CalculateItem;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        let url = client.endpoint(&["admin", "api", "table", "my table", "3"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/admin/api/table/my%20table/3");

        let nested = ApiClient::new("http://example.com/helper").unwrap();
        let url = nested.endpoint(&["api", "recipes"]).unwrap();
        assert_eq!(url.as_str(), "http://example.com/helper/api/recipes");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(ApiClient::new("not a url"), Err(ClientError::InvalidUrl(_))));
        assert!(matches!(
            ApiClient::new("mailto:admin@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_status_error_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/api/query"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_string("Query execution failed: no such table: nope\n"),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let err = client.execute_query("SELECT * FROM nope").await.unwrap_err();

        match &err {
            ClientError::Status { status, .. } => assert_eq!(*status, 500),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.message(), "Query execution failed: no such table: nope");
    }

    #[tokio::test]
    async fn test_table_rows_null_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/api/table/items"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/admin/api/table/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/admin/api/table/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        assert!(matches!(client.table_rows("items").await, Err(ClientError::Malformed(_))));
        assert!(matches!(client.table_rows("broken").await, Err(ClientError::Parse(_))));
        assert!(client.table_rows("empty").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_calculate_sends_items_and_accepts_null() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/calculate"))
            .and(body_json(json!({"items": [{"id": 1, "quantity": 2}]})))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let request = CalculateRequest {
            items: vec![CalculateItem { id: 1, quantity: 2 }],
        };
        let totals = client.calculate(&request).await.unwrap();
        assert!(totals.is_empty());
    }

    #[tokio::test]
    async fn test_update_row_uses_put_with_id() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/admin/api/table/resources/4"))
            .and(body_json(json!({"id": 4, "name": "Stone"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Data updated successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let data: Record = serde_json::from_value(json!({"id": 4, "name": "Stone"})).unwrap();
        client.update_row("resources", 4, &data).await.unwrap();
    }
}
