use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::config::Credentials;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::QueueAttributeName;
use aws_sdk_sqs::Client as SqsClient;

use crate::adapters::sts::RootSessionBroker;
use crate::config::BrokerConfig;
use crate::domain::model::{RootCredentials, RootTask};
use crate::domain::ports::{QueuePolicySession, QueuePolicyStore};
use crate::utils::error::{BrokerError, Result};

#[derive(Debug, Clone)]
pub struct SqsPolicyStore {
    shared: SdkConfig,
    broker: RootSessionBroker,
}

impl SqsPolicyStore {
    pub fn new(shared: &SdkConfig, config: &BrokerConfig) -> Self {
        Self {
            shared: shared.clone(),
            broker: RootSessionBroker::new(shared, config),
        }
    }

    fn scoped_client(&self, creds: &RootCredentials) -> SqsClient {
        let conf = aws_sdk_sqs::config::Builder::from(&self.shared)
            .credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.clone(),
                Some(creds.session_token.clone()),
                None,
                "AssumeRoot",
            ))
            .build();
        SqsClient::from_conf(conf)
    }
}

#[async_trait]
impl QueuePolicyStore for SqsPolicyStore {
    async fn open(&self, account_id: &str) -> Result<Box<dyn QueuePolicySession>> {
        let creds = self
            .broker
            .assume_root(account_id, RootTask::UnlockQueuePolicy)
            .await?;
        Ok(Box::new(SqsPolicySession {
            client: self.scoped_client(&creds),
        }))
    }
}

struct SqsPolicySession {
    client: SqsClient,
}

#[async_trait]
impl QueuePolicySession for SqsPolicySession {
    async fn resolve_queue(&self, queue_name: &str) -> Result<Option<String>> {
        match self
            .client
            .get_queue_url()
            .queue_name(queue_name)
            .send()
            .await
        {
            Ok(out) => Ok(out.queue_url().map(str::to_string)),
            Err(err) => {
                let service = err.into_service_error();
                if service.is_queue_does_not_exist() {
                    Ok(None)
                } else {
                    Err(BrokerError::provider(
                        "GetQueueUrl failed",
                        DisplayErrorContext(&service),
                    ))
                }
            }
        }
    }

    async fn fetch_policy(&self, queue_url: &str) -> Result<Option<String>> {
        let out = self
            .client
            .get_queue_attributes()
            .queue_url(queue_url)
            .attribute_names(QueueAttributeName::Policy)
            .send()
            .await
            .map_err(|e| {
                BrokerError::provider("GetQueueAttributes failed", DisplayErrorContext(&e))
            })?;

        // A cleared policy comes back as an empty string; treat it as unset.
        let policy = out
            .attributes()
            .and_then(|attrs| attrs.get(&QueueAttributeName::Policy))
            .filter(|policy| !policy.is_empty())
            .cloned();
        Ok(policy)
    }

    async fn clear_policy(&self, queue_url: &str) -> Result<()> {
        self.client
            .set_queue_attributes()
            .queue_url(queue_url)
            .attributes(QueueAttributeName::Policy, "")
            .send()
            .await
            .map_err(|e| {
                BrokerError::provider("SetQueueAttributes failed", DisplayErrorContext(&e))
            })?;
        Ok(())
    }
}
