/// Task policies permitted for AssumeRoot sessions. Each handler is pinned to
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootTask {
    UnlockBucketPolicy,
    UnlockQueuePolicy,
    CreateRootLoginProfile,
    DeleteRootCredentials,
}

impl RootTask {
    pub fn policy_name(&self) -> &'static str {
        match self {
            RootTask::UnlockBucketPolicy => "S3UnlockBucketPolicy",
            RootTask::UnlockQueuePolicy => "SQSUnlockQueuePolicy",
            RootTask::CreateRootLoginProfile => "IAMCreateRootUserPassword",
            RootTask::DeleteRootCredentials => "IAMDeleteRootUserCredentials",
        }
    }

    pub fn policy_arn(&self) -> String {
        format!("arn:aws:iam::aws:policy/root-task/{}", self.policy_name())
    }
}

/// Short-lived credentials returned by an AssumeRoot call.
#[derive(Debug, Clone)]
pub struct RootCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    /// RFC 3339 expiration timestamp, when the provider reports one.
    pub expiration: Option<String>,
}

/// Outcome of a root login-profile deletion. An absent profile is not an
/// error; there is simply nothing to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileDeletion {
    Deleted,
    AlreadyAbsent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_policy_arns_use_root_task_namespace() {
        assert_eq!(
            RootTask::UnlockBucketPolicy.policy_arn(),
            "arn:aws:iam::aws:policy/root-task/S3UnlockBucketPolicy"
        );
        assert_eq!(
            RootTask::UnlockQueuePolicy.policy_arn(),
            "arn:aws:iam::aws:policy/root-task/SQSUnlockQueuePolicy"
        );
        assert_eq!(
            RootTask::CreateRootLoginProfile.policy_arn(),
            "arn:aws:iam::aws:policy/root-task/IAMCreateRootUserPassword"
        );
        assert_eq!(
            RootTask::DeleteRootCredentials.policy_arn(),
            "arn:aws:iam::aws:policy/root-task/IAMDeleteRootUserCredentials"
        );
    }
}
