use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

use ss_core::config::MediatorConfig;
use ss_core::ids::ShareId;
use ss_core::ports::{MediatorError, MediatorPort};
use ss_core::{TransactionIntent, TransactionOutcome, UserProfile};

use crate::dto::{AcceptRequest, InitRequest, InitResponse, TransactionData, UserDto};

/// HTTP adapter for the mediator's three operations.
///
/// One client per process is enough; the underlying connection pool is
/// shared across calls. All failures come back as typed mediator errors:
/// a 404 is an unknown token, everything else non-success, plus transport
/// and decode failures, is "unavailable".
pub struct HttpMediatorClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMediatorClient {
    pub fn new(config: &MediatorConfig) -> Result<Self, MediatorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MediatorError::Unavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, MediatorError> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(MediatorError::NotFound),
            status => Err(MediatorError::Unavailable(format!(
                "mediator returned {status}"
            ))),
        }
    }

    async fn read_outcome(response: reqwest::Response) -> Result<TransactionOutcome, MediatorError> {
        let data: TransactionData = response
            .json()
            .await
            .map_err(|e| MediatorError::Unavailable(format!("invalid mediator response: {e}")))?;
        Ok(TransactionOutcome::from(data))
    }
}

#[async_trait]
impl MediatorPort for HttpMediatorClient {
    async fn init(&self, intent: &TransactionIntent) -> Result<ShareId, MediatorError> {
        debug!("init transaction: action={}", intent.action);
        let response = self
            .http
            .post(self.url("init"))
            .json(&InitRequest::from(intent))
            .send()
            .await
            .map_err(|e| MediatorError::Unavailable(e.to_string()))?;

        let response = Self::check_status(response)?;
        let body: InitResponse = response
            .json()
            .await
            .map_err(|e| MediatorError::Unavailable(format!("invalid mediator response: {e}")))?;

        Ok(ShareId::from(body.share_id))
    }

    async fn accept(
        &self,
        share_id: &ShareId,
        borrower: &UserProfile,
    ) -> Result<TransactionOutcome, MediatorError> {
        debug!("accept transaction: share_id={share_id}");
        let response = self
            .http
            .post(self.url(&format!("accept/{share_id}")))
            .json(&AcceptRequest {
                borrower: UserDto::from(borrower),
            })
            .send()
            .await
            .map_err(|e| MediatorError::Unavailable(e.to_string()))?;

        Self::read_outcome(Self::check_status(response)?).await
    }

    async fn result(&self, share_id: &ShareId) -> Result<TransactionOutcome, MediatorError> {
        let response = self
            .http
            .get(self.url(&format!("result/{share_id}")))
            .send()
            .await
            .map_err(|e| MediatorError::Unavailable(e.to_string()))?;

        Self::read_outcome(Self::check_status(response)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use ss_core::ids::{BookId, UserId};
    use ss_core::{Book, TransactionAction};

    fn config(server: &mockito::ServerGuard) -> MediatorConfig {
        MediatorConfig {
            base_url: server.url(),
            timeout_secs: 5,
        }
    }

    fn owner() -> UserProfile {
        UserProfile {
            uid: UserId::from("u-1"),
            full_name: "Ada".to_string(),
            tel: "0600000000".to_string(),
            email: "ada@example.org".to_string(),
        }
    }

    fn book() -> Book {
        Book {
            uid: BookId::from("b-1"),
            isbn: "9780140328721".to_string(),
            title: "Fantastic Mr Fox".to_string(),
            authors: Some("Roald Dahl".to_string()),
            cover_url: None,
            holder_id: None,
            owner_id: None,
        }
    }

    fn transaction_body(borrower: Option<serde_json::Value>) -> String {
        json!({
            "action": "LOAN",
            "book": {
                "uid": "b-1",
                "isbn": "9780140328721",
                "title": "Fantastic Mr Fox",
                "authors": "Roald Dahl",
                "covers": null,
                "borrowerId": null,
                "lenderId": null,
            },
            "owner": {
                "uid": "u-1",
                "fullName": "Ada",
                "tel": "0600000000",
                "email": "ada@example.org",
            },
            "borrower": borrower,
        })
        .to_string()
    }

    #[tokio::test]
    async fn init_posts_the_wire_shape_and_returns_the_share_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/init")
            .match_body(Matcher::PartialJson(json!({
                "action": "LOAN",
                "book": { "uid": "b-1" },
                "owner": { "fullName": "Ada" },
            })))
            .with_status(200)
            .with_body(r#"{"shareId":"s-42"}"#)
            .create_async()
            .await;

        let client = HttpMediatorClient::new(&config(&server)).unwrap();
        let intent = TransactionIntent::new(TransactionAction::Loan, book(), owner());

        let share_id = client.init(&intent).await.unwrap();
        assert_eq!(share_id, ShareId::from("s-42"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn accept_parses_the_returned_outcome() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/accept/s-42")
            .match_body(Matcher::PartialJson(json!({
                "borrower": { "uid": "u-1" },
            })))
            .with_status(200)
            .with_body(transaction_body(Some(json!({
                "uid": "u-2",
                "fullName": "Bob",
                "tel": "0700000000",
                "email": "bob@example.org",
            }))))
            .create_async()
            .await;

        let client = HttpMediatorClient::new(&config(&server)).unwrap();

        let outcome = client.accept(&ShareId::from("s-42"), &owner()).await.unwrap();
        assert_eq!(outcome.action, TransactionAction::Loan);
        assert_eq!(
            outcome.borrower.as_ref().map(|b| b.uid.clone()),
            Some(UserId::from("u-2"))
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn result_reads_a_pending_outcome() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/result/s-42")
            .with_status(200)
            .with_body(transaction_body(None))
            .create_async()
            .await;

        let client = HttpMediatorClient::new(&config(&server)).unwrap();

        let outcome = client.result(&ShareId::from("s-42")).await.unwrap();
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.book.uid, BookId::from("b-1"));
    }

    #[tokio::test]
    async fn unknown_token_maps_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/result/s-missing")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpMediatorClient::new(&config(&server)).unwrap();

        let err = client.result(&ShareId::from("s-missing")).await.unwrap_err();
        assert_eq!(err, MediatorError::NotFound);
    }

    #[tokio::test]
    async fn server_errors_map_to_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/init")
            .with_status(503)
            .create_async()
            .await;

        let client = HttpMediatorClient::new(&config(&server)).unwrap();
        let intent = TransactionIntent::new(TransactionAction::Loan, book(), owner());

        let err = client.init(&intent).await.unwrap_err();
        assert!(matches!(err, MediatorError::Unavailable(_)));
    }

    #[tokio::test]
    async fn garbled_body_maps_to_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/result/s-42")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = HttpMediatorClient::new(&config(&server)).unwrap();

        let err = client.result(&ShareId::from("s-42")).await.unwrap_err();
        assert!(matches!(err, MediatorError::Unavailable(_)));
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_unavailable() {
        let client = HttpMediatorClient::new(&MediatorConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        let err = client.result(&ShareId::from("s-1")).await.unwrap_err();
        assert!(matches!(err, MediatorError::Unavailable(_)));
    }
}
