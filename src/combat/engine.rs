//! Resolves one assassination attempt end to end: load, validate, roll, mutate, persist.

use super::loot::transfer_assets;
use super::odds::{Combatant, attempt_odds};
use super::outcome::{AttemptOutcome, Resolution};
use super::roll::Roller;
use crate::AppState;
use crate::database::models::{Player, PlayerId};
use crate::error::AssassinationError;
use crate::ranks::RankTable;
use tracing::{debug, error, info, instrument};

fn combatant(ranks: &RankTable, player: &Player) -> Combatant {
    Combatant {
        rank_value: ranks.rank_value_for_experience(player.experience),
        level: player.level,
    }
}

/// Checks run in this order; the first failure wins.
fn validate(
    attacker: &Player,
    target: &Player,
    weapon_name: &str,
) -> Result<f64, AssassinationError> {
    if attacker.id == target.id {
        return Err(AssassinationError::InvalidSelfTarget);
    }
    if !attacker.is_alive {
        return Err(AssassinationError::AttackerDead);
    }
    if !target.is_alive {
        return Err(AssassinationError::TargetAlreadyDead);
    }
    attacker
        .find_item(weapon_name)
        .and_then(|weapon| weapon.usable_accuracy())
        .ok_or(AssassinationError::WeaponUnavailable)
}

/// Attempts to kill `target_id` with `weapon_name` on behalf of `attacker_id`.
///
/// Both players stay locked from the first read to the last write, so concurrent
/// attempts on the same target can't both loot it. Rolls come from `roller`: one on
/// success, two on failure.
#[instrument(
    level = "debug",
    skip(state, roller),
    fields(attacker_id = attacker_id.get(), target_id = target_id.get())
)]
pub async fn resolve_assassination_attempt<R>(
    state: &AppState,
    roller: &mut R,
    attacker_id: PlayerId,
    target_id: PlayerId,
    weapon_name: &str,
) -> Result<Resolution, AssassinationError>
where
    R: Roller + Send + ?Sized,
{
    let _guard = state.locks.acquire_pair(attacker_id, target_id).await;
    let result = resolve_locked(state, roller, attacker_id, target_id, weapon_name).await;
    match &result {
        Ok(resolution) => info!(
            target: "combat.assassination",
            attacker_id = attacker_id.get(),
            target_id = target_id.get(),
            outcome = resolution.outcome.label(),
            "attempt resolved"
        ),
        Err(AssassinationError::InternalError(e)) => error!(
            target: "combat.assassination",
            attacker_id = attacker_id.get(),
            target_id = target_id.get(),
            error = %e,
            "directory fault during attempt"
        ),
        Err(rejection) => debug!(
            target: "combat.assassination",
            reason = %rejection,
            "attempt rejected"
        ),
    }
    result
}

async fn resolve_locked<R>(
    state: &AppState,
    roller: &mut R,
    attacker_id: PlayerId,
    target_id: PlayerId,
    weapon_name: &str,
) -> Result<Resolution, AssassinationError>
where
    R: Roller + Send + ?Sized,
{
    let attacker = state.directory.find_by_id(attacker_id).await?;
    let target = state.directory.find_by_id(target_id).await?;
    let (Some(mut attacker), Some(mut target)) = (attacker, target) else {
        return Err(AssassinationError::NotFound);
    };

    let accuracy = validate(&attacker, &target, weapon_name)?;
    let odds = attempt_odds(
        combatant(&state.ranks, &attacker),
        combatant(&state.ranks, &target),
        accuracy,
    );
    debug!(
        target: "combat.odds",
        success = odds.success,
        retaliation = odds.retaliation,
        accuracy,
        "odds computed"
    );

    let outcome = if roller.roll() < odds.success {
        attacker.kills += 1;
        let loot = transfer_assets(&mut attacker, &mut target);
        target.is_alive = false;
        state.directory.save_all(&[&attacker, &target]).await?;
        AttemptOutcome::Success {
            loot,
            attacker_kills: attacker.kills,
        }
    } else if roller.roll() < odds.retaliation {
        attacker.is_alive = false;
        state.directory.save(&attacker).await?;
        AttemptOutcome::Retaliated {
            attacker_died: true,
        }
    } else {
        AttemptOutcome::Failed
    };

    Ok(Resolution {
        target_username: target.username,
        odds,
        outcome,
    })
}
