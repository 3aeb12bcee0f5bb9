use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_iam::config::Credentials;
use aws_sdk_iam::error::DisplayErrorContext;
use aws_sdk_iam::Client as IamClient;

use crate::adapters::sts::RootSessionBroker;
use crate::config::BrokerConfig;
use crate::domain::model::{ProfileDeletion, RootCredentials, RootTask};
use crate::domain::ports::LoginProfileAdmin;
use crate::utils::error::{BrokerError, Result};

/// IAM login-profile operations against the root user of a member account.
/// CreateLoginProfile and DeleteLoginProfile are invoked with no user name:
/// the assumed-root session implies the principal.
#[derive(Debug, Clone)]
pub struct IamLoginProfileAdmin {
    shared: SdkConfig,
    broker: RootSessionBroker,
}

impl IamLoginProfileAdmin {
    pub fn new(shared: &SdkConfig, config: &BrokerConfig) -> Self {
        Self {
            shared: shared.clone(),
            broker: RootSessionBroker::new(shared, config),
        }
    }

    fn scoped_client(&self, creds: &RootCredentials) -> IamClient {
        let conf = aws_sdk_iam::config::Builder::from(&self.shared)
            .credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.clone(),
                Some(creds.session_token.clone()),
                None,
                "AssumeRoot",
            ))
            .build();
        IamClient::from_conf(conf)
    }
}

#[async_trait]
impl LoginProfileAdmin for IamLoginProfileAdmin {
    async fn create_profile(&self, account_id: &str) -> Result<()> {
        let creds = self
            .broker
            .assume_root(account_id, RootTask::CreateRootLoginProfile)
            .await?;
        let iam = self.scoped_client(&creds);

        iam.create_login_profile().send().await.map_err(|e| {
            BrokerError::provider("CreateLoginProfile failed", DisplayErrorContext(&e))
        })?;
        tracing::info!(account = account_id, "Root login profile created");
        Ok(())
    }

    async fn delete_profile(&self, account_id: &str) -> Result<ProfileDeletion> {
        let creds = self
            .broker
            .assume_root(account_id, RootTask::DeleteRootCredentials)
            .await?;
        let iam = self.scoped_client(&creds);

        match iam.delete_login_profile().send().await {
            Ok(_) => Ok(ProfileDeletion::Deleted),
            Err(err) => {
                let service = err.into_service_error();
                if service.is_no_such_entity_exception() {
                    Ok(ProfileDeletion::AlreadyAbsent)
                } else {
                    Err(BrokerError::provider(
                        "DeleteLoginProfile failed",
                        DisplayErrorContext(&service),
                    ))
                }
            }
        }
    }
}
