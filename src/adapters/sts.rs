use aws_config::SdkConfig;
use aws_sdk_sts::error::DisplayErrorContext;
use aws_sdk_sts::primitives::DateTimeFormat;
use aws_sdk_sts::types::PolicyDescriptorType;
use aws_sdk_sts::Client as StsClient;

use crate::config::BrokerConfig;
use crate::domain::model::{RootCredentials, RootTask};
use crate::utils::error::{BrokerError, Result};

/// Obtains short-lived, task-scoped root credentials for member accounts via
/// STS AssumeRoot.
#[derive(Debug, Clone)]
pub struct RootSessionBroker {
    sts: StsClient,
    duration_seconds: i32,
}

impl RootSessionBroker {
    pub fn new(shared: &SdkConfig, config: &BrokerConfig) -> Self {
        Self {
            sts: StsClient::new(shared),
            duration_seconds: config.session_duration_seconds,
        }
    }

    pub async fn assume_root(&self, account_id: &str, task: RootTask) -> Result<RootCredentials> {
        tracing::info!(
            policy = task.policy_name(),
            account = account_id,
            "Assuming root task policy"
        );

        let resp = self
            .sts
            .assume_root()
            .target_principal(account_id)
            .task_policy_arn(
                PolicyDescriptorType::builder()
                    .arn(task.policy_arn())
                    .build(),
            )
            .duration_seconds(self.duration_seconds)
            .send()
            .await
            .map_err(|e| BrokerError::provider("AssumeRoot failed", DisplayErrorContext(&e)))?;

        let creds = resp.credentials().ok_or_else(|| BrokerError::ProviderError {
            context: "AssumeRoot response".to_string(),
            message: "no credentials returned".to_string(),
        })?;

        Ok(RootCredentials {
            access_key_id: creds.access_key_id().to_string(),
            secret_access_key: creds.secret_access_key().to_string(),
            session_token: creds.session_token().to_string(),
            expiration: creds.expiration().fmt(DateTimeFormat::DateTime).ok(),
        })
    }
}
