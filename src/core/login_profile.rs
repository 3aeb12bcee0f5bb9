use crate::domain::event::HttpRequest;
use crate::domain::model::ProfileDeletion;
use crate::domain::ports::LoginProfileAdmin;
use crate::domain::response::{HttpResponse, Responder, ResponseBody, Status};
use crate::utils::error::BrokerError;

/// Create the root user's console login profile in a member account.
pub async fn create_profile(
    admin: &dyn LoginProfileAdmin,
    responder: &Responder,
    request: &HttpRequest,
) -> HttpResponse {
    tracing::info!(path = request.path.as_deref(), "Starting creating root login profile");

    let Some(account_id) = request.account_id() else {
        tracing::error!("Missing account_id in path parameters");
        return responder.error(&BrokerError::MissingPathParameter("account_id"));
    };

    match admin.create_profile(&account_id).await {
        Ok(()) => {
            tracing::info!(account = %account_id, "Root login profile created successfully");
            responder.respond(
                200,
                &ResponseBody::new(Status::Success)
                    .account_id(&account_id)
                    .message("Root login profile created."),
            )
        }
        Err(e) => {
            tracing::error!("Error creating root login profile: {e}");
            responder.respond(
                500,
                &ResponseBody::new(Status::Error)
                    .message(format!("Error creating root login profile: {e}")),
            )
        }
    }
}

/// Delete the root user's console login profile. An account with no profile
/// is already in the desired state.
pub async fn delete_profile(
    admin: &dyn LoginProfileAdmin,
    responder: &Responder,
    request: &HttpRequest,
) -> HttpResponse {
    tracing::info!(path = request.path.as_deref(), "Starting root login profile deletion");

    let Some(account_id) = request.account_id() else {
        tracing::error!("Missing account_number in path parameters");
        return responder.error(&BrokerError::MissingPathParameter("account_number"));
    };

    match admin.delete_profile(&account_id).await {
        Ok(ProfileDeletion::Deleted) => {
            tracing::info!(account = %account_id, "Root login profile deleted successfully");
            responder.respond(
                200,
                &ResponseBody::new(Status::Success)
                    .account_id(&account_id)
                    .message("Root login profile deleted."),
            )
        }
        Ok(ProfileDeletion::AlreadyAbsent) => {
            tracing::info!(account = %account_id, "No login profile found for root user");
            responder.respond(
                200,
                &ResponseBody::new(Status::Success)
                    .account_id(&account_id)
                    .message("Root login profile deleted."),
            )
        }
        Err(e) => {
            tracing::error!("Error deleting root login profile: {e}");
            responder.respond(
                500,
                &ResponseBody::new(Status::Error)
                    .message(format!("Error deleting root login profile: {e}")),
            )
        }
    }
}
