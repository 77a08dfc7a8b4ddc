//! Soulbound attendance badges

use soroban_sdk::{contractimpl, contracttype, log, panic_with_error, Address, BytesN, Env, IntoVal, String, Val, Vec};

use crate::clients::{Event, RegistryClient, WhitelistClient};
use crate::errors::BadgeError;
use crate::events::{BadgeClaimed, Upgrade};
use crate::{BadgeIssuer, BadgeIssuerArgs, BadgeIssuerClient, BadgeIssuerTrait, MAX_PAGE_SIZE};

const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Badge {
    pub id: u32,
    pub owner: Address,
    pub event_id: u32,
    pub minted_at: u64,
    pub uri: String,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Registry,
    Whitelist,
}

#[contracttype]
pub enum BadgeStorageKey {
    NextBadgeId,
    Badge(u32),
    OwnedCount(Address),
    OwnedAt(Address, u32 /* index */),
    Claimed(u32 /* event_id */, Address /* claimant */),
    Name,
    Symbol,
}

fn registry(e: &Env) -> RegistryClient<'_> {
    let address: Address = e.storage().instance().get(&DataKey::Registry).unwrap();
    RegistryClient::new(e, &address)
}

fn whitelist(e: &Env) -> WhitelistClient<'_> {
    let address: Address = e.storage().instance().get(&DataKey::Whitelist).unwrap();
    WhitelistClient::new(e, &address)
}

fn load_badge(e: &Env, badge_id: u32) -> Badge {
    e.storage()
        .persistent()
        .get(&BadgeStorageKey::Badge(badge_id))
        .unwrap_or_else(|| panic_with_error!(e, BadgeError::NonExistentBadge))
}

fn save<V: IntoVal<Env, Val>>(e: &Env, key: &BadgeStorageKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn owned_count(e: &Env, owner: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&BadgeStorageKey::OwnedCount(owner.clone()))
        .unwrap_or(0)
}

/// Reason why `event` cannot take a claim at `now`, if any.
fn claim_error(event: &Event, now: u64) -> Option<BadgeError> {
    if !event.is_active {
        return Some(BadgeError::EventInactive);
    }
    if now < event.start_time || now > event.end_time {
        return Some(BadgeError::ClaimWindowClosed);
    }
    if event.claimed_count >= event.max_attendees {
        return Some(BadgeError::EventFull);
    }
    None
}

/// Assign a fresh badge of `event` to `to`.
///
/// Owners are only ever written here, for ids never used before.
fn mint(e: &Env, to: &Address, event: &Event) -> u32 {
    let badge_id: u32 = e.storage().instance().get(&BadgeStorageKey::NextBadgeId).unwrap_or(1);
    let key = BadgeStorageKey::Badge(badge_id);
    if e.storage().persistent().has(&key) {
        panic_with_error!(e, BadgeError::BadgeAlreadyMinted);
    }
    e.storage().instance().set(&BadgeStorageKey::NextBadgeId, &(badge_id + 1));

    let badge = Badge {
        id: badge_id,
        owner: to.clone(),
        event_id: event.id,
        minted_at: e.ledger().timestamp(),
        uri: event.image_uri.clone(),
    };
    save(e, &key, &badge);

    let index = owned_count(e, to);
    save(e, &BadgeStorageKey::OwnedAt(to.clone(), index), &badge_id);
    save(e, &BadgeStorageKey::OwnedCount(to.clone()), &(index + 1));

    badge_id
}

/// Check, mint, count and record a claim in one go.
///
/// Every step runs in the same invocation, a failure in any of them reverts
/// the others.
fn issue(e: &Env, registry: &RegistryClient, event: &Event, claimant: &Address) -> u32 {
    let claimed_key = BadgeStorageKey::Claimed(event.id, claimant.clone());
    if e.storage().persistent().has(&claimed_key) {
        panic_with_error!(e, BadgeError::AlreadyClaimed);
    }
    if let Some(error) = claim_error(event, e.ledger().timestamp()) {
        panic_with_error!(e, error);
    }
    if !whitelist(e).is_whitelisted(&event.id, claimant) {
        panic_with_error!(e, BadgeError::NotWhitelisted);
    }

    let badge_id = mint(e, claimant, event);
    registry.increment_claimed_count(&event.id);
    save(e, &claimed_key, &true);

    log!(e, "badge claimed", event.id, claimant.clone(), badge_id);

    BadgeClaimed {
        event_id: event.id,
        claimant: claimant.clone(),
        badge_id,
    }
    .publish(e);

    badge_id
}

#[contractimpl]
impl BadgeIssuerTrait for BadgeIssuer {

    fn __constructor(e: &Env, admin: Address, registry: Address, whitelist: Address, name: String, symbol: String) {
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Registry, &registry);
        e.storage().instance().set(&DataKey::Whitelist, &whitelist);

        e.storage().instance().set(&BadgeStorageKey::Name, &name);
        e.storage().instance().set(&BadgeStorageKey::Symbol, &symbol);
        e.storage().instance().set(&BadgeStorageKey::NextBadgeId, &1u32);
    }

    fn upgrade(e: &Env, wasm_hash: BytesN<32>) {
        let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
        admin.require_auth();

        e.deployer().update_current_contract_wasm(wasm_hash.clone());

        Upgrade { admin, wasm_hash }.publish(e);
    }

    fn claim_badge(e: &Env, claimant: Address, event_id: u32) -> u32 {
        claimant.require_auth();

        let registry = registry(e);
        let event = registry.get_event(&event_id);
        issue(e, &registry, &event, &claimant)
    }

    fn claim_badge_with_qr(e: &Env, organizer: Address, event_id: u32, claimant: Address) -> u32 {
        organizer.require_auth();

        let registry = registry(e);
        let event = registry.get_event(&event_id);
        if event.organizer != organizer {
            panic_with_error!(e, BadgeError::NotOrganizer);
        }
        issue(e, &registry, &event, &claimant)
    }

    fn can_claim(e: &Env, event_id: u32, account: Address) -> bool {
        registry(e).is_claimable(&event_id)
            && whitelist(e).is_whitelisted(&event_id, &account)
            && !Self::has_claimed(e, event_id, account)
    }

    fn has_claimed(e: &Env, event_id: u32, account: Address) -> bool {
        e.storage()
            .persistent()
            .has(&BadgeStorageKey::Claimed(event_id, account))
    }

    fn transfer(e: &Env, from: Address, to: Address, badge_id: u32) {
        log!(e, "transfer rejected", from, to, badge_id);
        panic_with_error!(e, BadgeError::NonTransferable);
    }

    fn balance(e: &Env, owner: Address) -> u32 {
        owned_count(e, &owner)
    }

    fn owner_of(e: &Env, badge_id: u32) -> Address {
        load_badge(e, badge_id).owner
    }

    fn badge(e: &Env, badge_id: u32) -> Badge {
        load_badge(e, badge_id)
    }

    fn badges_of(e: &Env, owner: Address, start: u32, limit: u32) -> Vec<u32> {
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE))
            .min(owned_count(e, &owner));

        let mut page = Vec::new(e);
        for index in start..end {
            let badge_id: u32 = e
                .storage()
                .persistent()
                .get(&BadgeStorageKey::OwnedAt(owner.clone(), index))
                .unwrap();
            page.push_back(badge_id);
        }
        page
    }

    fn total_supply(e: &Env) -> u32 {
        let next: u32 = e.storage().instance().get(&BadgeStorageKey::NextBadgeId).unwrap_or(1);
        next - 1
    }

    fn name(e: &Env) -> String {
        e.storage()
            .instance()
            .get(&BadgeStorageKey::Name)
            .unwrap()
    }

    fn symbol(e: &Env) -> String {
        e.storage()
            .instance()
            .get(&BadgeStorageKey::Symbol)
            .unwrap()
    }

    fn token_uri(e: &Env, badge_id: u32) -> String {
        load_badge(e, badge_id).uri
    }

}
