//! HTTP server for the Tally ledger.
//!
//! Translates `GET /balance/:account` and `POST /transfer` into calls on a
//! shared [`tally_ledger::Ledger`] and maps ledger errors to status codes.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::LedgerServer;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tally_ledger::{InMemoryLedger, LedgerReader};
    use tower::util::ServiceExt;

    fn app_with(accounts: &[(&str, f64)]) -> (Router, Arc<InMemoryLedger>) {
        let ledger = Arc::new(InMemoryLedger::with_accounts(accounts.iter().copied()));
        let router = build_router(AppState::new(ledger.clone()));
        (router, ledger)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_transfer(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/transfer")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (app, _) = app_with(&[]);
        let (status, body) = send(app, get("/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint_counts_accounts() {
        let (app, _) = app_with(&[("alice", 100.0), ("bob", 50.0)]);
        let (status, body) = send(app, get("/v1/info")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "tally-server");
        assert_eq!(body["accounts"], 2);
    }

    #[tokio::test]
    async fn balance_of_seeded_account() {
        let (app, _) = app_with(&[("alice", 100.0), ("bob", 50.0)]);
        let (status, body) = send(app, get("/balance/alice")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["account"], "alice");
        assert_eq!(body["balance"], 100.0);
    }

    #[tokio::test]
    async fn balance_of_unknown_account_is_404() {
        let (app, _) = app_with(&[("alice", 100.0)]);
        let (status, body) = send(app, get("/balance/carol")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn transfer_updates_both_accounts() {
        let (app, ledger) = app_with(&[("alice", 100.0), ("bob", 0.0)]);
        let (status, body) =
            send(app.clone(), post_transfer(r#"{"from":"alice","to":"bob","amount":25}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(ledger.get_balance("alice").unwrap(), 75.0);
        assert_eq!(ledger.get_balance("bob").unwrap(), 25.0);

        let (_, body) = send(app, get("/balance/bob")).await;
        assert_eq!(body["balance"], 25.0);
    }

    #[tokio::test]
    async fn transfer_creates_destination() {
        let (app, ledger) = app_with(&[("alice", 100.0)]);
        let (status, _) =
            send(app, post_transfer(r#"{"from":"alice","to":"bob","amount":30}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ledger.get_balance("bob").unwrap(), 30.0);
    }

    #[tokio::test]
    async fn insufficient_funds_is_422() {
        let (app, ledger) = app_with(&[("alice", 10.0)]);
        let (status, body) =
            send(app, post_transfer(r#"{"from":"alice","to":"bob","amount":50}"#)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "insufficient_funds");
        assert_eq!(ledger.get_balance("alice").unwrap(), 10.0);
    }

    #[tokio::test]
    async fn non_positive_amount_is_400() {
        for amount in ["0", "-5"] {
            let (app, ledger) = app_with(&[("alice", 100.0)]);
            let body = format!(r#"{{"from":"alice","to":"bob","amount":{amount}}}"#);
            let (status, resp) = send(app, post_transfer(&body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(resp["error"], "invalid_amount");
            assert_eq!(ledger.get_balance("alice").unwrap(), 100.0);
        }
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        for body in ["", "{not json", r#"{"from":"alice","to":"bob"}"#, r#"{"from":1,"to":"b","amount":1}"#] {
            let (app, _) = app_with(&[("alice", 100.0)]);
            let (status, resp) = send(app, post_transfer(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body:?}");
            assert_eq!(resp["error"], "invalid_json");
        }
    }

    #[tokio::test]
    async fn body_without_content_type_is_accepted() {
        let (app, ledger) = app_with(&[("alice", 100.0)]);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/transfer")
            .body(Body::from(r#"{"from":"alice","to":"bob","amount":1}"#))
            .unwrap();
        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ledger.get_balance("bob").unwrap(), 1.0);
    }

    #[tokio::test]
    async fn get_on_transfer_is_405() {
        let (app, _) = app_with(&[]);
        let (status, _) = send(app, get("/transfer")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn concurrent_requests_conserve_total() {
        let (app, ledger) = app_with(&[("alice", 1000.0), ("bob", 1000.0)]);

        let tasks: Vec<_> = (0..200)
            .map(|i| {
                let app = app.clone();
                let (from, to) = if i % 2 == 0 { ("alice", "bob") } else { ("bob", "alice") };
                tokio::spawn(async move {
                    let body = format!(r#"{{"from":"{from}","to":"{to}","amount":7}}"#);
                    send(app, post_transfer(&body)).await.0
                })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap(), StatusCode::OK);
        }

        let total: f64 = ledger.snapshot().unwrap().values().sum();
        assert_eq!(total, 2000.0);
        assert_eq!(ledger.get_balance("alice").unwrap(), 1000.0);
    }
}
