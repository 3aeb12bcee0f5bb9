use crate::domain::event::HttpRequest;
use crate::domain::ports::{BucketPolicySession, BucketPolicyStore};
use crate::domain::response::{HttpResponse, Responder, ResponseBody, Status};
use crate::utils::error::BrokerError;

/// Unlock an S3 bucket in a member account by deleting its bucket policy.
/// `GET` reads the policy without mutating anything; `POST` deletes it when
/// one exists.
pub async fn unlock_bucket(
    store: &dyn BucketPolicyStore,
    responder: &Responder,
    request: &HttpRequest,
) -> HttpResponse {
    tracing::info!(path = request.path.as_deref(), "Starting unlock S3 bucket process");

    let Some(account_id) = request.account_id() else {
        tracing::error!("Missing account_number in path parameters");
        return responder.error(&BrokerError::MissingPathParameter("account_number"));
    };
    let Some(bucket_name) = request.resource_name("bucket_name") else {
        tracing::error!("Missing bucket_name in path parameters");
        return responder.error(&BrokerError::MissingPathParameter("bucket_name"));
    };

    let session = match store.open(&account_id).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(account = %account_id, "Unhandled exception: {e}");
            return responder.respond(
                500,
                &ResponseBody::new(Status::Error).message(format!("Unhandled exception: {e}")),
            );
        }
    };

    if request.method() == "GET" {
        return read_policy(session.as_ref(), responder, &account_id, &bucket_name).await;
    }

    // POST: delete the bucket policy if one exists
    let existing = match session.fetch_policy(&bucket_name).await {
        Ok(policy) => policy,
        Err(e) => {
            tracing::error!("Error checking bucket policy: {e}");
            return responder.respond(
                500,
                &ResponseBody::new(Status::Error)
                    .message(format!("Error checking bucket policy: {e}")),
            );
        }
    };

    match existing {
        Some(_) => match session.delete_policy(&bucket_name).await {
            Ok(()) => {
                tracing::info!(bucket = %bucket_name, "Bucket policy deleted successfully");
                responder.respond(
                    200,
                    &ResponseBody::new(Status::Unlocked)
                        .account_id(&account_id)
                        .resource_name(&bucket_name)
                        .message(format!("Bucket policy deleted for {bucket_name}")),
                )
            }
            Err(e) => {
                tracing::error!("Failed to delete bucket policy: {e}");
                responder.respond(
                    500,
                    &ResponseBody::new(Status::Error)
                        .message(format!("Failed to delete bucket policy: {e}")),
                )
            }
        },
        None => {
            tracing::info!(bucket = %bucket_name, "Bucket policy does not exist");
            responder.respond(
                200,
                &ResponseBody::new(Status::NotLocked)
                    .account_id(&account_id)
                    .message(format!("No bucket policy found for {bucket_name}")),
            )
        }
    }
}

async fn read_policy(
    session: &dyn BucketPolicySession,
    responder: &Responder,
    account_id: &str,
    bucket_name: &str,
) -> HttpResponse {
    match session.fetch_policy(bucket_name).await {
        Ok(Some(text)) => match serde_json::from_str(&text) {
            Ok(policy) => {
                tracing::info!(bucket = %bucket_name, "Bucket policy found");
                responder.respond(
                    200,
                    &ResponseBody::new(Status::Success)
                        .account_id(account_id)
                        .resource_name(bucket_name)
                        .policy(policy),
                )
            }
            Err(e) => {
                tracing::error!("Error reading bucket policy: {e}");
                responder.respond(
                    500,
                    &ResponseBody::new(Status::Error)
                        .message(format!("Error reading bucket policy: {e}")),
                )
            }
        },
        Ok(None) => {
            tracing::info!(bucket = %bucket_name, "Bucket policy does not exist");
            responder.respond(
                404,
                &ResponseBody::new(Status::NotFound)
                    .message(format!("No bucket policy found for {bucket_name}")),
            )
        }
        Err(e) => {
            tracing::error!("Error reading bucket policy: {e}");
            responder.respond(
                500,
                &ResponseBody::new(Status::Error)
                    .message(format!("Error reading bucket policy: {e}")),
            )
        }
    }
}
