use std::collections::HashMap;

use serde::Serialize;

use crate::utils::error::BrokerError;

const ALLOWED_METHODS: &str = "GET,POST,OPTIONS";
const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// HTTP-shaped Lambda response. The ALB envelope fields are a strict superset
/// of what API Gateway accepts, so one shape serves both front ends.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub status_description: String,
    pub is_base64_encoded: bool,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Unlocked,
    NotLocked,
    NotFound,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseBody {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResponseBody {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            account_id: None,
            resource_name: None,
            policy: None,
            message: None,
        }
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = Some(resource_name.into());
        self
    }

    pub fn policy(mut self, policy: serde_json::Value) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Builds response envelopes with the configured CORS headers attached.
#[derive(Debug, Clone)]
pub struct Responder {
    headers: HashMap<String, String>,
}

impl Responder {
    pub fn new(domain: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Access-Control-Allow-Origin".to_string(), domain.to_string());
        headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            ALLOWED_METHODS.to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            ALLOWED_HEADERS.to_string(),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self { headers }
    }

    pub fn respond(&self, status_code: u16, body: &ResponseBody) -> HttpResponse {
        let body = serde_json::to_string(body).unwrap_or_else(|_| {
            r#"{"status":"error","message":"Failed to serialize response body"}"#.to_string()
        });

        HttpResponse {
            status_code,
            status_description: format!("{} {}", status_code, reason_phrase(status_code)),
            is_base64_encoded: false,
            headers: self.headers.clone(),
            body,
        }
    }

    /// Render an error the way the handler boundary does: its status code and
    /// display message, with `not_found` kept distinct from plain errors.
    pub fn error(&self, err: &BrokerError) -> HttpResponse {
        let status = match err {
            BrokerError::NotFound(_) => Status::NotFound,
            _ => Status::Error,
        };
        self.respond(
            err.status_code(),
            &ResponseBody::new(status).message(err.to_string()),
        )
    }
}

fn reason_phrase(status_code: u16) -> &'static str {
    match status_code {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_with_alb_field_names() {
        let responder = Responder::new("*");
        let response = responder.respond(200, &ResponseBody::new(Status::Success));
        let value: serde_json::Value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["statusDescription"], "200 OK");
        assert_eq!(value["isBase64Encoded"], false);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
    }

    #[test]
    fn cors_origin_reflects_domain() {
        let responder = Responder::new("https://ram.example.com");
        let response = responder.respond(200, &ResponseBody::new(Status::Success));
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").unwrap(),
            "https://ram.example.com"
        );
    }

    #[test]
    fn body_omits_absent_fields() {
        let body = ResponseBody::new(Status::NotLocked).message("No bucket policy found");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["status"], "not_locked");
        assert_eq!(value["message"], "No bucket policy found");
        assert!(value.get("policy").is_none());
        assert!(value.get("account_id").is_none());
    }

    #[test]
    fn errors_render_status_and_message() {
        let responder = Responder::new("*");
        let missing = BrokerError::MissingPathParameter("account_number");
        let response = responder.error(&missing);

        assert_eq!(response.status_code, 400);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Missing account_number in path parameters");
    }
}
