use crate::domain::event::HttpRequest;
use crate::domain::ports::{QueuePolicySession, QueuePolicyStore};
use crate::domain::response::{HttpResponse, Responder, ResponseBody, Status};
use crate::utils::error::BrokerError;

/// Unlock an SQS queue in a member account by clearing its resource policy.
/// The queue URL is resolved first; an unknown queue is a 404 before any
/// policy read.
pub async fn unlock_queue(
    store: &dyn QueuePolicyStore,
    responder: &Responder,
    request: &HttpRequest,
) -> HttpResponse {
    tracing::info!(path = request.path.as_deref(), "Starting unlock SQS queue process");

    let Some(account_id) = request.account_id() else {
        tracing::error!("Missing account_id in path parameters");
        return responder.error(&BrokerError::MissingPathParameter("account_id"));
    };
    let Some(queue_name) = request.resource_name("queue_name") else {
        tracing::error!("Missing queue_name in path parameters");
        return responder.error(&BrokerError::MissingPathParameter("queue_name"));
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

    let queue_url = match session.resolve_queue(&queue_name).await {
        Ok(Some(url)) => url,
        Ok(None) => {
            tracing::error!(queue = %queue_name, "Queue not found");
            return responder.respond(
                404,
                &ResponseBody::new(Status::NotFound)
                    .account_id(&account_id)
                    .message(format!("Queue {queue_name} not found for {account_id}")),
            );
        }
        Err(e) => {
            tracing::error!("Failed to get SQS queue URL: {e}");
            return responder.respond(
                500,
                &ResponseBody::new(Status::Error)
                    .message(format!("Failed to get SQS queue URL: {e}")),
            );
        }
    };

    if request.method() == "GET" {
        return read_policy(session.as_ref(), responder, &account_id, &queue_name, &queue_url)
            .await;
    }

    // POST: clear the queue policy if one is set
    let existing = match session.fetch_policy(&queue_url).await {
        Ok(policy) => policy,
        Err(e) => {
            tracing::error!("Error checking queue policy: {e}");
            return responder.respond(
                500,
                &ResponseBody::new(Status::Error)
                    .message(format!("Error checking queue policy: {e}")),
            );
        }
    };

    match existing {
        Some(_) => match session.clear_policy(&queue_url).await {
            Ok(()) => {
                tracing::info!(queue = %queue_name, "Queue policy deleted successfully");
                responder.respond(
                    200,
                    &ResponseBody::new(Status::Unlocked)
                        .account_id(&account_id)
                        .resource_name(&queue_name)
                        .message(format!("Queue policy deleted for {queue_name} on {account_id}")),
                )
            }
            Err(e) => {
                tracing::error!("Failed to delete queue policy: {e}");
                responder.respond(
                    500,
                    &ResponseBody::new(Status::Error)
                        .account_id(&account_id)
                        .message(format!("Failed to delete queue policy: {e}")),
                )
            }
        },
        None => {
            tracing::info!(queue = %queue_name, "Queue policy does not exist");
            responder.respond(
                200,
                &ResponseBody::new(Status::NotLocked)
                    .account_id(&account_id)
                    .message(format!("No queue policy found for {queue_name} on {account_id}")),
            )
        }
    }
}

async fn read_policy(
    session: &dyn QueuePolicySession,
    responder: &Responder,
    account_id: &str,
    queue_name: &str,
    queue_url: &str,
) -> HttpResponse {
    match session.fetch_policy(queue_url).await {
        Ok(Some(text)) => match serde_json::from_str(&text) {
            Ok(policy) => {
                tracing::info!(queue = %queue_name, "Queue policy found");
                responder.respond(
                    200,
                    &ResponseBody::new(Status::Success)
                        .account_id(account_id)
                        .resource_name(queue_name)
                        .policy(policy),
                )
            }
            Err(e) => {
                tracing::error!("Error reading queue policy: {e}");
                responder.respond(
                    500,
                    &ResponseBody::new(Status::Error)
                        .message(format!("Error reading queue policy: {e}")),
                )
            }
        },
        Ok(None) => {
            tracing::info!(queue = %queue_name, "Queue policy does not exist");
            responder.respond(
                404,
                &ResponseBody::new(Status::NotFound)
                    .account_id(account_id)
                    .message(format!("No queue policy found for {queue_name} on {account_id}")),
            )
        }
        Err(e) => {
            tracing::error!("Error reading queue policy: {e}");
            responder.respond(
                500,
                &ResponseBody::new(Status::Error)
                    .message(format!("Error reading queue policy: {e}")),
            )
        }
    }
}
