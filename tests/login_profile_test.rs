use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use root_access_broker::core::login_profile;
use root_access_broker::domain::model::ProfileDeletion;
use root_access_broker::domain::ports::LoginProfileAdmin;
use root_access_broker::utils::error::{BrokerError, Result};
use root_access_broker::{HttpRequest, HttpResponse, Responder};
use serde_json::json;

const ACCOUNT: &str = "535294143734";

#[derive(Default)]
struct FakeLoginProfileAdmin {
    fail_create: bool,
    fail_delete: bool,
    profile_absent: bool,
    creates: AtomicUsize,
    deletes: AtomicUsize,
}

#[async_trait]
impl LoginProfileAdmin for FakeLoginProfileAdmin {
    async fn create_profile(&self, _account_id: &str) -> Result<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_create {
            return Err(BrokerError::provider(
                "CreateLoginProfile failed",
                "EntityAlreadyExists",
            ));
        }
        Ok(())
    }

    async fn delete_profile(&self, _account_id: &str) -> Result<ProfileDeletion> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete {
            return Err(BrokerError::provider("DeleteLoginProfile failed", "throttled"));
        }
        if self.profile_absent {
            Ok(ProfileDeletion::AlreadyAbsent)
        } else {
            Ok(ProfileDeletion::Deleted)
        }
    }
}

fn request(value: serde_json::Value) -> HttpRequest {
    serde_json::from_value(value).unwrap()
}

fn body(response: &HttpResponse) -> serde_json::Value {
    serde_json::from_str(&response.body).unwrap()
}

#[tokio::test]
async fn create_returns_success() {
    let admin = FakeLoginProfileAdmin::default();
    let responder = Responder::new("*");
    let event = request(json!({"path": format!("/create-root-login-profile/{ACCOUNT}")}));

    let response = login_profile::create_profile(&admin, &responder, &event).await;

    assert_eq!(response.status_code, 200);
    let body = body(&response);
    assert_eq!(body["status"], "success");
    assert_eq!(body["account_id"], ACCOUNT);
    assert_eq!(body["message"], "Root login profile created.");
    assert_eq!(admin.creates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn create_failure_returns_500() {
    let admin = FakeLoginProfileAdmin {
        fail_create: true,
        ..Default::default()
    };
    let responder = Responder::new("*");
    let event = request(json!({"path": format!("/create-root-login-profile/{ACCOUNT}")}));

    let response = login_profile::create_profile(&admin, &responder, &event).await;

    assert_eq!(response.status_code, 500);
    let body = body(&response);
    assert_eq!(body["status"], "error");
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error creating root login profile"));
    assert!(message.contains("EntityAlreadyExists"));
}

#[tokio::test]
async fn create_missing_account_returns_400_without_provider_call() {
    let admin = FakeLoginProfileAdmin::default();
    let responder = Responder::new("*");

    let response = login_profile::create_profile(&admin, &responder, &request(json!({}))).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(body(&response)["message"], "Missing account_id in path parameters");
    assert_eq!(admin.creates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn delete_returns_success() {
    let admin = FakeLoginProfileAdmin::default();
    let responder = Responder::new("*");
    let event = request(json!({"pathParameters": {"account_number": ACCOUNT}}));

    let response = login_profile::delete_profile(&admin, &responder, &event).await;

    assert_eq!(response.status_code, 200);
    let body = body(&response);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Root login profile deleted.");
    assert_eq!(admin.deletes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn delete_of_absent_profile_still_succeeds() {
    let admin = FakeLoginProfileAdmin {
        profile_absent: true,
        ..Default::default()
    };
    let responder = Responder::new("*");
    let event = request(json!({"pathParameters": {"account_number": ACCOUNT}}));

    let response = login_profile::delete_profile(&admin, &responder, &event).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(body(&response)["status"], "success");
}

#[tokio::test]
async fn delete_failure_returns_500() {
    let admin = FakeLoginProfileAdmin {
        fail_delete: true,
        ..Default::default()
    };
    let responder = Responder::new("*");
    let event = request(json!({"pathParameters": {"account_number": ACCOUNT}}));

    let response = login_profile::delete_profile(&admin, &responder, &event).await;

    assert_eq!(response.status_code, 500);
    let message = body(&response)["message"].as_str().unwrap().to_string();
    assert!(message.starts_with("Error deleting root login profile"));
}

#[tokio::test]
async fn delete_missing_account_returns_400_without_provider_call() {
    let admin = FakeLoginProfileAdmin::default();
    let responder = Responder::new("*");

    let response = login_profile::delete_profile(&admin, &responder, &request(json!({}))).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        body(&response)["message"],
        "Missing account_number in path parameters"
    );
    assert_eq!(admin.deletes.load(Ordering::SeqCst), 0);
}
