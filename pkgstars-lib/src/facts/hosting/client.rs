//! GitHub GraphQL client
//!
//! Minimal client issuing one query per repository for its star count, last update time,
//! and description.

use super::{FetchError, RepositoryFetcher, RepositoryRecord};
use chrono::NaiveDateTime;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

/// Default GraphQL endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

/// User agent sent with every request
pub const USER_AGENT: &str = "pkgstars";

const LOG_TARGET: &str = "   hosting";

const REPOSITORY_QUERY: &str = "query($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    name
    owner { login }
    stargazerCount
    updatedAt
    description
  }
}";

/// Length of the `YYYY-MM-DDTHH:MM:SS` prefix of an ISO-8601 timestamp.
const TIMESTAMP_LEN: usize = 19;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'static str,
    variables: QueryVariables<'a>,
}

#[derive(Debug, Serialize)]
struct QueryVariables<'a> {
    owner: &'a str,
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    name: String,
    owner: OwnerNode,
    stargazer_count: u64,
    updated_at: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwnerNode {
    login: String,
}

/// GitHub GraphQL API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    api_url: String,
}

impl Client {
    /// Create a new client with an optional bearer token and the GraphQL endpoint to talk to
    pub fn new(token: Option<&str>, api_url: impl Into<String>) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}"))?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        let client = reqwest::Client::builder().user_agent(USER_AGENT).default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Query the statistics of a single repository.
    pub async fn fetch_repository(&self, owner: &str, name: &str) -> Result<RepositoryRecord, FetchError> {
        let request = QueryRequest {
            query: REPOSITORY_QUERY,
            variables: QueryVariables { owner, name },
        };

        log::debug!(target: LOG_TARGET, "Querying repository {owner}/{name}");

        let resp = self.client.post(&self.api_url).json(&request).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(FetchError::from_status(status.as_u16(), body));
        }

        parse_response(owner, name, &body)
    }
}

impl RepositoryFetcher for Client {
    async fn fetch(&self, owner: &str, name: &str) -> Result<RepositoryRecord, FetchError> {
        self.fetch_repository(owner, name).await
    }
}

/// Map the body of a successful response into a record.
fn parse_response(owner: &str, name: &str, body: &str) -> Result<RepositoryRecord, FetchError> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidResponse(format!("could not decode response body: {e}")))?;

    if let Some(errors) = response.errors {
        return Err(FetchError::Query(errors.to_string()));
    }

    let Some(node) = response.data.and_then(|data| data.repository) else {
        return Err(FetchError::NotFound {
            owner: owner.to_string(),
            name: name.to_string(),
        });
    };

    Ok(RepositoryRecord::new(
        node.name,
        node.owner.login,
        node.stargazer_count,
        parse_updated_at(&node.updated_at)?,
        node.description,
    ))
}

/// Parse an API timestamp by keeping only its date and time portion.
///
/// Any trailing zone designator or offset is dropped without converting the instant.
fn parse_updated_at(value: &str) -> Result<NaiveDateTime, FetchError> {
    let truncated = value.get(..TIMESTAMP_LEN).unwrap_or(value);
    NaiveDateTime::parse_from_str(truncated, TIMESTAMP_FORMAT)
        .map_err(|e| FetchError::InvalidResponse(format!("invalid update timestamp '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon_2023() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_response_maps_fields() {
        let body = r#"{
            "data": {
                "repository": {
                    "name": "X",
                    "owner": { "login": "Y" },
                    "stargazerCount": 42,
                    "updatedAt": "2023-01-01T12:00:00Z",
                    "description": "D"
                }
            }
        }"#;

        let record = parse_response("y", "x", body).unwrap();
        assert_eq!(record.name(), "X");
        assert_eq!(record.owner(), "Y");
        assert_eq!(record.star_count(), 42);
        assert_eq!(record.updated_at(), noon_2023());
        assert_eq!(record.description(), Some("D"));
    }

    #[test]
    fn test_parse_response_null_description() {
        let body = r#"{"data":{"repository":{"name":"X","owner":{"login":"Y"},"stargazerCount":0,"updatedAt":"2023-01-01T12:00:00Z","description":null}}}"#;

        let record = parse_response("Y", "X", body).unwrap();
        assert_eq!(record.description(), None);
    }

    #[test]
    fn test_parse_response_empty_description_is_kept() {
        let body = r#"{"data":{"repository":{"name":"X","owner":{"login":"Y"},"stargazerCount":0,"updatedAt":"2023-01-01T12:00:00Z","description":""}}}"#;

        let record = parse_response("Y", "X", body).unwrap();
        assert_eq!(record.description(), Some(""));
    }

    #[test]
    fn test_parse_response_null_repository_is_not_found() {
        let body = r#"{"data":{"repository":null}}"#;

        match parse_response("JuliaLang", "Nope.jl", body) {
            Err(FetchError::NotFound { owner, name }) => {
                assert_eq!(owner, "JuliaLang");
                assert_eq!(name, "Nope.jl");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_errors_payload() {
        let body = r#"{"data":null,"errors":[{"message":"Something went wrong"}]}"#;

        match parse_response("a", "b", body) {
            Err(FetchError::Query(payload)) => assert!(payload.contains("Something went wrong")),
            other => panic!("expected Query, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_errors_win_over_data() {
        let body = r#"{"data":{"repository":null},"errors":[{"type":"NOT_FOUND"}]}"#;
        assert!(matches!(parse_response("a", "b", body), Err(FetchError::Query(_))));
    }

    #[test]
    fn test_parse_response_garbage_body() {
        assert!(matches!(parse_response("a", "b", "<html>"), Err(FetchError::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_updated_at_drops_zone() {
        assert_eq!(parse_updated_at("2023-01-01T12:00:00Z").unwrap(), noon_2023());
        assert_eq!(parse_updated_at("2023-01-01T12:00:00+05:00").unwrap(), noon_2023());
        assert_eq!(parse_updated_at("2023-01-01T12:00:00").unwrap(), noon_2023());
    }

    #[test]
    fn test_parse_updated_at_rejects_garbage() {
        assert!(parse_updated_at("yesterday").is_err());
        assert!(parse_updated_at("").is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let request = QueryRequest {
            query: REPOSITORY_QUERY,
            variables: QueryVariables { owner: "JuliaLang", name: "Julia" },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["variables"]["owner"], "JuliaLang");
        assert_eq!(value["variables"]["name"], "Julia");
        assert!(value["query"].as_str().unwrap().contains("stargazerCount"));
    }

    #[test]
    fn test_client_new_with_and_without_token() {
        let client = Client::new(None, DEFAULT_API_URL).unwrap();
        assert_eq!(client.api_url(), DEFAULT_API_URL);

        let client = Client::new(Some("secret"), "http://localhost:1234/graphql").unwrap();
        assert_eq!(client.api_url(), "http://localhost:1234/graphql");
    }
}
