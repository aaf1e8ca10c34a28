//! The RPG reducer.
//!
//! Every branch validates against the current state, then clones it and
//! applies the change to the clone. A rejected action never touches the
//! input.

use tracing::debug;
use underworld_crew::RollSource;
use underworld_crew::crime::{can_commit_crime, find_crime, resolve_crime};
use underworld_crew::market::{check_purchase, find_item, purchase_delta};
use underworld_crew::member::grant_xp;
use underworld_crew::rank::{check_promotion, promotion_delta};
use underworld_crew::recruit::{check_entry, entry_delta};
use underworld_types::{
    Action, CrimeId, InfoPanel, ItemId, LocationPath, MemberId, RejectionReason, Resources,
};
use underworld_world::calculate_territory_income;

use super::state::RpgState;
use super::takeover;
use crate::transition::{ReduceResult, Transition};

/// Apply `action` to `state`.
///
/// # Errors
///
/// Returns the [`RejectionReason`] explaining why `action` cannot apply.
/// `RAID` and `SELECT_RAID` are [`RejectionReason::NotApplicable`].
pub fn reduce(
    state: &RpgState,
    action: &Action,
    rolls: &mut impl RollSource,
) -> ReduceResult<RpgState> {
    match action {
        Action::Tick => Ok(tick(state)),
        Action::AdvanceDay => Ok(advance_day(state)),
        Action::SetLocation { location } => set_location(state, location),
        Action::CommitCrime { crime_id } => commit_crime(state, crime_id, rolls),
        Action::BuyItem { item_id } => buy_item(state, item_id),
        Action::Recruit { member_id } => recruit(state, *member_id),
        Action::Promote { member_id } => promote(state, *member_id),
        Action::Takeover => takeover(state, rolls),
        Action::ToggleInfo { panel } => Ok(toggle_info(state, *panel)),
        Action::Raid { .. } | Action::SelectRaid { .. } => Err(RejectionReason::NotApplicable),
    }
}

fn income_line(income: Resources) -> String {
    format!(
        "Territórios renderam ${}, +{} influência e +{} respeito.",
        income.cash, income.influence, income.respect
    )
}

fn tick(state: &RpgState) -> Transition<RpgState> {
    let income = calculate_territory_income(&state.world_map);
    let mut next = state.clone();
    next.resources = next.resources.plus(income);
    let entry = income_line(income);
    next.activity_log.push(entry.clone());
    Transition::logged(next, entry)
}

fn advance_day(state: &RpgState) -> Transition<RpgState> {
    let income = calculate_territory_income(&state.world_map);
    let mut next = state.clone();
    next.day = next.day.saturating_add(1);
    next.resources = next.resources.plus(income);
    let entry = format!("Dia {} começou. {}", next.day, income_line(income));
    next.activity_log.push(entry.clone());
    Transition::logged(next, entry)
}

fn set_location(state: &RpgState, location: &LocationPath) -> ReduceResult<RpgState> {
    if !state.world_map.contains(location) {
        return Err(RejectionReason::UnknownId);
    }
    let mut next = state.clone();
    next.selected_location = Some(location.clone());
    Ok(Transition::silent(next))
}

fn commit_crime(
    state: &RpgState,
    crime_id: &CrimeId,
    rolls: &mut impl RollSource,
) -> ReduceResult<RpgState> {
    let crime = find_crime(crime_id).ok_or(RejectionReason::UnknownId)?;
    if !can_commit_crime(&state.inventory, &state.members, crime) {
        return Err(RejectionReason::RequirementsNotMet);
    }

    let outcome = resolve_crime(crime, rolls);
    debug!(
        crime = %crime.id,
        risk = %crime.risk,
        roll = %outcome.roll,
        success = outcome.success,
        "Crime resolved"
    );

    let mut next = state.clone();
    next.resources = next.resources.plus(outcome.delta);
    if let Some(leader) = next.members.first_mut() {
        grant_xp(leader, outcome.xp);
    }
    let entry = if outcome.success {
        format!(
            "{} concluído: +${} e +{} respeito, +{} xp.",
            crime.name, outcome.delta.cash, outcome.delta.respect, outcome.xp
        )
    } else {
        format!(
            "{} deu errado. A polícia apertou o cerco ({} respeito, +{} xp).",
            crime.name, outcome.delta.respect, outcome.xp
        )
    };
    next.activity_log.push(entry.clone());
    Ok(Transition::logged(next, entry))
}

fn buy_item(state: &RpgState, item_id: &ItemId) -> ReduceResult<RpgState> {
    let item = find_item(item_id).ok_or(RejectionReason::UnknownId)?;
    check_purchase(item, &state.resources)?;

    let mut next = state.clone();
    next.inventory.add(&item.id);
    next.resources = next.resources.plus(purchase_delta(item));
    let entry = format!("Comprou {} no mercado negro por ${}.", item.name, item.price);
    next.activity_log.push(entry.clone());
    Ok(Transition::logged(next, entry))
}

fn recruit(state: &RpgState, member_id: MemberId) -> ReduceResult<RpgState> {
    let index = state
        .recruit_pool
        .iter()
        .position(|c| c.id == member_id)
        .ok_or(RejectionReason::CandidateNotFound)?;
    let fee = state
        .recruit_pool
        .get(index)
        .map(|c| c.entry)
        .ok_or(RejectionReason::CandidateNotFound)?;
    check_entry(fee, &state.resources)?;

    let mut next = state.clone();
    let candidate = next.recruit_pool.remove(index);
    next.resources = next.resources.plus(entry_delta(candidate.entry));
    next.members.push(candidate.to_member());
    let entry = format!(
        "{} ({}) entrou para a organização.",
        candidate.name,
        candidate.rank.label()
    );
    next.activity_log.push(entry.clone());
    Ok(Transition::logged(next, entry))
}

fn promote(state: &RpgState, member_id: MemberId) -> ReduceResult<RpgState> {
    let member = state.member(member_id).ok_or(RejectionReason::UnknownId)?;
    let target = check_promotion(member, &state.resources)?;

    let mut next = state.clone();
    next.resources = next.resources.plus(promotion_delta(target.promote_cost));
    if let Some(promoted) = next.members.iter_mut().find(|m| m.id == member_id) {
        promoted.rank = target.rank;
    }
    let entry = format!("{} foi promovido a {}.", member.name, target.rank.label());
    next.activity_log.push(entry.clone());
    Ok(Transition::logged(next, entry))
}

fn takeover(state: &RpgState, rolls: &mut impl RollSource) -> ReduceResult<RpgState> {
    let path = state
        .selected_location
        .clone()
        .ok_or(RejectionReason::NotApplicable)?;
    if !state.world_map.contains(&path) {
        return Err(RejectionReason::UnknownId);
    }
    let mut next = state.clone();
    let outcome = takeover::contest(&mut next, &path, rolls)?;
    next.activity_log.push(outcome.report.clone());
    Ok(Transition::logged(next, outcome.report))
}

fn toggle_info(state: &RpgState, panel: InfoPanel) -> Transition<RpgState> {
    let mut next = state.clone();
    next.info_panel = if state.info_panel == Some(panel) {
        None
    } else {
        Some(panel)
    };
    Transition::silent(next)
}
