use std::collections::HashMap;

use serde::Deserialize;

/// Incoming HTTP-style event, covering both front ends: API Gateway sends
/// named `pathParameters`, the ALB sends only the raw `path`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpRequest {
    pub path: Option<String>,
    pub path_parameters: Option<HashMap<String, String>>,
    pub http_method: Option<String>,
}

impl HttpRequest {
    pub fn method(&self) -> &str {
        self.http_method.as_deref().unwrap_or("POST")
    }

    /// Look the parameter up by name first, then fall back to splitting the
    /// raw path. ALB paths look like `/unlock-sqs-queue/{account}/{resource}`,
    /// so the account sits at split index 2 and the resource at index 3.
    pub fn path_param(&self, keys: &[&str], segment: usize) -> Option<String> {
        if let Some(params) = &self.path_parameters {
            for key in keys {
                if let Some(value) = params.get(*key) {
                    if !value.is_empty() {
                        return Some(value.clone());
                    }
                }
            }
        }

        self.path
            .as_deref()?
            .split('/')
            .nth(segment)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn account_id(&self) -> Option<String> {
        self.path_param(&["account_number", "account_id"], 2)
    }

    pub fn resource_name(&self, key: &str) -> Option<String> {
        self.path_param(&[key], 3)
    }
}
