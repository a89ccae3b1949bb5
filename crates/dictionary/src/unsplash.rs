// https://unsplash.com/documentation#search-photos
// errors come back as {"errors": [...]} together with a non-success status

use serde::Deserialize;

use crate::{ContentResult, DictionaryConfig, DictionaryError};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

impl From<SearchResponse> for ContentResult {
    fn from(response: SearchResponse) -> Self {
        if !response.errors.is_empty() {
            return ContentResult::AdapterError(response.errors.join(", "));
        }
        ContentResult::found(
            response
                .results
                .into_iter()
                .next()
                .map(|photo| photo.urls.regular),
        )
    }
}

pub(crate) async fn get_image(
    client: &reqwest::Client,
    config: &DictionaryConfig,
    word: &str,
) -> ContentResult {
    match search_photos(client, config, word).await {
        Ok(response) => response.into(),
        Err(error) => error.into(),
    }
}

async fn search_photos(
    client: &reqwest::Client,
    config: &DictionaryConfig,
    query: &str,
) -> Result<SearchResponse, DictionaryError> {
    let res = client
        .get(format!("{}/search/photos", config.unsplash_base))
        .header(
            "Authorization",
            format!("Client-ID {}", config.unsplash_access_key),
        )
        .query(&[
            ("query", query),
            ("page", "1"),
            ("per_page", "1"),
            ("orientation", "landscape"),
            ("order_by", "relevant"),
        ])
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    let body = res.text().await.map_err(DictionaryError::Fetch)?;
    if !status.is_success() {
        return match serde_json::from_str::<SearchResponse>(&body) {
            Ok(response) if !response.errors.is_empty() => Ok(response),
            _ => Err(DictionaryError::Status { status, body }),
        };
    }
    serde_json::from_str(&body).map_err(DictionaryError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{closed_base, config, Route, TestServer};
    use crate::Dictionary;

    async fn image(routes: Vec<Route>) -> (TestServer, ContentResult) {
        let server = TestServer::start(routes).await;
        let dict = Dictionary::new(config(&server.base())).unwrap();
        let result = dict.get_image("daunt").await;
        (server, result)
    }

    fn result(json: &str) -> ContentResult {
        serde_json::from_str::<SearchResponse>(json).unwrap().into()
    }

    #[test]
    fn top_result_url() {
        let json = r#"{"total":2,"total_pages":2,"results":[
            {"id":"a","urls":{"raw":"https://images.unsplash.com/raw-a","regular":"https://images.unsplash.com/a"}},
            {"id":"b","urls":{"raw":"https://images.unsplash.com/raw-b","regular":"https://images.unsplash.com/b"}}
        ]}"#;
        assert_eq!(
            result(json),
            ContentResult::Found("https://images.unsplash.com/a".to_owned())
        );
    }

    #[test]
    fn zero_results() {
        assert_eq!(
            result(r#"{"total":0,"total_pages":0,"results":[]}"#),
            ContentResult::NotFound
        );
    }

    #[test]
    fn error_payload() {
        assert_eq!(
            result(r#"{"errors":["OAuth error: The access token is invalid"]}"#),
            ContentResult::AdapterError("OAuth error: The access token is invalid".to_owned())
        );
    }

    #[tokio::test]
    async fn searches_one_landscape_photo() {
        let (server, found) = image(vec![(
            "/search/photos",
            200,
            r#"{"results":[{"urls":{"regular":"https://images.unsplash.com/a"}}]}"#,
        )])
        .await;

        assert_eq!(found, ContentResult::Found("https://images.unsplash.com/a".to_owned()));
        assert_eq!(
            server.targets(),
            ["/search/photos?query=daunt&page=1&per_page=1&orientation=landscape&order_by=relevant"]
        );
        assert!(server.requests()[0]
            .to_lowercase()
            .contains("authorization: client-id u\r\n"));
    }

    #[tokio::test]
    async fn rejected_key_is_an_adapter_error() {
        let (_server, result) = image(vec![(
            "/search/photos",
            401,
            r#"{"errors":["OAuth error: The access token is invalid"]}"#,
        )])
        .await;

        assert_eq!(
            result,
            ContentResult::AdapterError("OAuth error: The access token is invalid".to_owned())
        );
    }

    #[tokio::test]
    async fn failure_without_errors_names_the_status() {
        let (_server, result) = image(vec![("/search/photos", 503, "<html>down</html>")]).await;

        match result {
            ContentResult::AdapterError(cause) => assert!(cause.contains("503"), "{cause}"),
            other => panic!("expected an adapter error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_success_is_a_decode_error() {
        let (_server, result) = image(vec![("/search/photos", 200, "<html>ok</html>")]).await;

        match result {
            ContentResult::AdapterError(cause) => {
                assert!(cause.starts_with("malformed response"), "{cause}");
                assert!(!cause.contains("200"), "{cause}");
            }
            other => panic!("expected an adapter error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_provider_is_an_adapter_error() {
        let dict = Dictionary::new(config(&closed_base().await)).unwrap();

        assert!(matches!(
            dict.get_image("daunt").await,
            ContentResult::AdapterError(_)
        ));
    }
}
