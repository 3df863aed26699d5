use serde::Serialize;
use tracing::{debug, info, warn};

use crate::database::activities_repo::{self, MembershipChange};
use crate::database::activity_store::ActivityStore;
use crate::error::RegistryError;
use crate::models::{ActivityName, ActivityRegistry, Email};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageView {
    pub message: String,
}

pub async fn list_activities(store: &ActivityStore) -> ActivityRegistry {
    let registry = activities_repo::list_all(store).await;
    debug!(activities = registry.len(), "Listing activities");
    registry
}

pub async fn signup(
    store: &ActivityStore,
    activity: &ActivityName,
    email: &Email,
) -> Result<MessageView, RegistryError> {
    match activities_repo::insert_participant(store, activity.as_str(), email.as_str()).await {
        MembershipChange::Applied => {
            info!(activity = %activity, email = %email, "Participant signed up");
            Ok(MessageView {
                message: format!("Signed up {} for {}", email, activity),
            })
        }
        MembershipChange::ActivityMissing => {
            warn!(activity = %activity, "Signup for unknown activity");
            Err(RegistryError::ActivityNotFound)
        }
        MembershipChange::Unchanged => {
            warn!(activity = %activity, email = %email, "Duplicate signup rejected");
            Err(RegistryError::AlreadySignedUp)
        }
    }
}

pub async fn unregister(
    store: &ActivityStore,
    activity: &ActivityName,
    email: &Email,
) -> Result<MessageView, RegistryError> {
    match activities_repo::delete_participant(store, activity.as_str(), email.as_str()).await {
        MembershipChange::Applied => {
            info!(activity = %activity, email = %email, "Participant unregistered");
            Ok(MessageView {
                message: format!("Unregistered {} from {}", email, activity),
            })
        }
        MembershipChange::ActivityMissing => {
            warn!(activity = %activity, "Unregister from unknown activity");
            Err(RegistryError::ActivityNotFound)
        }
        MembershipChange::Unchanged => {
            warn!(activity = %activity, email = %email, "Unregister of absent participant");
            Err(RegistryError::NotRegistered)
        }
    }
}
