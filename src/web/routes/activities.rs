use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::activity_store::ActivityStore;
use crate::error::RegistryError;
use crate::models::{ActivityName, ActivityRegistry, Email};
use crate::services::activities_service::{self, MessageView};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<ActivityRegistry> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageView>, RegistryError> {
    let activity = ActivityName::parse(&activity_name)?;
    let email = Email::parse(&query.email)?;
    activities_service::signup(&store, &activity, &email)
        .await
        .map(Json)
}

pub async fn unregister_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageView>, RegistryError> {
    let activity = ActivityName::parse(&activity_name)?;
    let email = Email::parse(&email)?;
    activities_service::unregister(&store, &activity, &email)
        .await
        .map(Json)
}
