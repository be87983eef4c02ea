//! `POST /assassinations`: request/response shapes and the narrative messages.

use crate::AppState;
use crate::combat::{AttemptOutcome, Resolution, Roller, resolve_assassination_attempt};
use crate::database::models::{Car, InventoryItem, PlayerId};
use crate::error::AssassinationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssassinationRequest {
    pub target_id: PlayerId,
    pub weapon_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssassinationResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_kills: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loot_money: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loot_cars: Option<Vec<Car>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loot_inventory: Option<Vec<InventoryItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_died: Option<bool>,
}

impl AssassinationResponse {
    fn message_only(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            updated_kills: None,
            loot_money: None,
            loot_cars: None,
            loot_inventory: None,
            user_died: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: AssassinationResponse,
}

impl From<Resolution> for ApiResponse {
    fn from(resolution: Resolution) -> Self {
        let target = resolution.target_username;
        let body = match resolution.outcome {
            AttemptOutcome::Success {
                loot,
                attacker_kills,
            } => AssassinationResponse {
                updated_kills: Some(attacker_kills),
                loot_money: Some(loot.money),
                loot_cars: Some(loot.cars),
                loot_inventory: Some(loot.inventory),
                ..AssassinationResponse::message_only(
                    true,
                    format!(
                        "You have successfully assassinated {target} and looted all their possessions!"
                    ),
                )
            },
            AttemptOutcome::Retaliated { attacker_died } => AssassinationResponse {
                user_died: Some(attacker_died),
                ..AssassinationResponse::message_only(
                    true,
                    format!("Your assassination attempt failed, and you were killed by {target}!"),
                )
            },
            AttemptOutcome::Failed => AssassinationResponse::message_only(
                true,
                format!("Your assassination attempt on {target} failed."),
            ),
        };
        ApiResponse { status: 200, body }
    }
}

impl From<AssassinationError> for ApiResponse {
    fn from(err: AssassinationError) -> Self {
        ApiResponse {
            status: err.status_code(),
            body: AssassinationResponse::message_only(false, err.to_string()),
        }
    }
}

/// Runs an attempt for the authenticated `attacker_id`. In-game failures and deaths
/// are 200s; only rejected or broken attempts get another status.
pub async fn handle_assassination<R>(
    state: &AppState,
    roller: &mut R,
    attacker_id: PlayerId,
    request: AssassinationRequest,
) -> ApiResponse
where
    R: Roller + Send + ?Sized,
{
    match resolve_assassination_attempt(
        state,
        roller,
        attacker_id,
        request.target_id,
        &request.weapon_name,
    )
    .await
    {
        Ok(resolution) => resolution.into(),
        Err(err) => err.into(),
    }
}

/// Like `handle_assassination`, starting from the raw JSON body.
pub async fn handle_raw<R>(
    state: &AppState,
    roller: &mut R,
    attacker_id: PlayerId,
    body: &str,
) -> ApiResponse
where
    R: Roller + Send + ?Sized,
{
    match serde_json::from_str::<AssassinationRequest>(body) {
        Ok(request) => handle_assassination(state, roller, attacker_id, request).await,
        Err(e) => {
            debug!(target: "api.assassinations", error = %e, "malformed body");
            ApiResponse {
                status: 400,
                body: AssassinationResponse::message_only(
                    false,
                    "Request must include targetId and weaponName.",
                ),
            }
        }
    }
}
