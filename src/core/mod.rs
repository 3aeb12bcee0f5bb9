pub mod bucket;
pub mod login_profile;
pub mod queue;

pub use crate::domain::model::{ProfileDeletion, RootCredentials, RootTask};
pub use crate::domain::ports::{BucketPolicyStore, LoginProfileAdmin, QueuePolicyStore};
pub use crate::utils::error::Result;
