use async_trait::async_trait;

use crate::domain::model::ProfileDeletion;
use crate::utils::error::Result;

/// Opens a bucket-policy session against one member account. Opening assumes
/// root once; the returned session reuses those credentials for every call.
#[async_trait]
pub trait BucketPolicyStore: Send + Sync {
    async fn open(&self, account_id: &str) -> Result<Box<dyn BucketPolicySession>>;
}

#[async_trait]
pub trait BucketPolicySession: Send + Sync {
    /// The bucket's policy document, or `None` when the bucket has none.
    async fn fetch_policy(&self, bucket: &str) -> Result<Option<String>>;
    async fn delete_policy(&self, bucket: &str) -> Result<()>;
}

#[async_trait]
pub trait QueuePolicyStore: Send + Sync {
    async fn open(&self, account_id: &str) -> Result<Box<dyn QueuePolicySession>>;
}

#[async_trait]
pub trait QueuePolicySession: Send + Sync {
    /// The queue URL, or `None` when no queue by that name exists.
    async fn resolve_queue(&self, queue_name: &str) -> Result<Option<String>>;
    /// The queue's `Policy` attribute, or `None` when unset or cleared.
    async fn fetch_policy(&self, queue_url: &str) -> Result<Option<String>>;
    async fn clear_policy(&self, queue_url: &str) -> Result<()>;
}

/// Root console login-profile management. Each call assumes root with its own
/// task policy; no session outlives the single operation.
#[async_trait]
pub trait LoginProfileAdmin: Send + Sync {
    async fn create_profile(&self, account_id: &str) -> Result<()>;
    async fn delete_profile(&self, account_id: &str) -> Result<ProfileDeletion>;
}
