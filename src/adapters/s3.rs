use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::Client as S3Client;

use crate::adapters::sts::RootSessionBroker;
use crate::config::BrokerConfig;
use crate::domain::model::{RootCredentials, RootTask};
use crate::domain::ports::{BucketPolicySession, BucketPolicyStore};
use crate::utils::error::{BrokerError, Result};

#[derive(Debug, Clone)]
pub struct S3PolicyStore {
    shared: SdkConfig,
    broker: RootSessionBroker,
}

impl S3PolicyStore {
    pub fn new(shared: &SdkConfig, config: &BrokerConfig) -> Self {
        Self {
            shared: shared.clone(),
            broker: RootSessionBroker::new(shared, config),
        }
    }

    fn scoped_client(&self, creds: &RootCredentials) -> S3Client {
        let conf = aws_sdk_s3::config::Builder::from(&self.shared)
            .credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.clone(),
                Some(creds.session_token.clone()),
                None,
                "AssumeRoot",
            ))
            .build();
        S3Client::from_conf(conf)
    }
}

#[async_trait]
impl BucketPolicyStore for S3PolicyStore {
    async fn open(&self, account_id: &str) -> Result<Box<dyn BucketPolicySession>> {
        let creds = self
            .broker
            .assume_root(account_id, RootTask::UnlockBucketPolicy)
            .await?;
        if let Some(expiration) = &creds.expiration {
            tracing::debug!(%expiration, "Root session credentials issued");
        }
        Ok(Box::new(S3PolicySession {
            client: self.scoped_client(&creds),
        }))
    }
}

struct S3PolicySession {
    client: S3Client,
}

#[async_trait]
impl BucketPolicySession for S3PolicySession {
    async fn fetch_policy(&self, bucket: &str) -> Result<Option<String>> {
        match self.client.get_bucket_policy().bucket(bucket).send().await {
            Ok(out) => Ok(out.policy().map(str::to_string)),
            Err(err) => {
                let service = err.into_service_error();
                // NoSuchBucketPolicy is unmodeled in the S3 SDK, so match the
                // raw error code.
                if service.code() == Some("NoSuchBucketPolicy") {
                    Ok(None)
                } else {
                    Err(BrokerError::provider(
                        "GetBucketPolicy failed",
                        DisplayErrorContext(&service),
                    ))
                }
            }
        }
    }

    async fn delete_policy(&self, bucket: &str) -> Result<()> {
        self.client
            .delete_bucket_policy()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| {
                BrokerError::provider("DeleteBucketPolicy failed", DisplayErrorContext(&e))
            })?;
        Ok(())
    }
}
