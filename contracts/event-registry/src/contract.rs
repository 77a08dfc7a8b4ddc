//! Event Registry

use soroban_sdk::{contractimpl, contracttype, log, panic_with_error, Address, BytesN, Env, IntoVal, String, Val, Vec};

use crate::errors::EventRegistryError;
use crate::events::{BadgeIssuerSet, EventCreated, EventDeactivated, EventUpdated, Upgrade};
use crate::{EventRegistry, EventRegistryArgs, EventRegistryClient, EventRegistryTrait, MAX_PAGE_SIZE};

const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image_uri: String,
    pub organizer: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub max_attendees: u32,
    pub claimed_count: u32,
    pub is_active: bool,
}

#[contracttype]
pub enum DataKey {
    Admin,
    BadgeIssuer,
}

#[contracttype]
pub enum EventKey {
    NextEventId,
    Event(u32),
    OrganizerEventCount(Address),
    OrganizerEventAt(Address, u32 /* index */),
}

fn admin(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Admin).unwrap()
}

fn load_event(e: &Env, event_id: u32) -> Event {
    e.storage()
        .persistent()
        .get(&EventKey::Event(event_id))
        .unwrap_or_else(|| panic_with_error!(e, EventRegistryError::EventNotFound))
}

fn save<V: IntoVal<Env, Val>>(e: &Env, key: &EventKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn save_event(e: &Env, event: &Event) {
    save(e, &EventKey::Event(event.id), event);
}

fn count_organizer_events(e: &Env, organizer: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&EventKey::OrganizerEventCount(organizer.clone()))
        .unwrap_or(0)
}

/// Reason why `event` cannot take a claim at `now`, if any.
fn claim_error(event: &Event, now: u64) -> Option<EventRegistryError> {
    if !event.is_active {
        return Some(EventRegistryError::EventInactive);
    }
    if now < event.start_time || now > event.end_time {
        return Some(EventRegistryError::ClaimWindowClosed);
    }
    if event.claimed_count >= event.max_attendees {
        return Some(EventRegistryError::EventFull);
    }
    None
}

#[contractimpl]
impl EventRegistryTrait for EventRegistry {

    fn __constructor(e: &Env, admin: Address) {
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&EventKey::NextEventId, &1u32);
    }

    fn upgrade(e: &Env, wasm_hash: BytesN<32>) {
        let admin = admin(e);
        admin.require_auth();

        e.deployer().update_current_contract_wasm(wasm_hash.clone());

        Upgrade { admin, wasm_hash }.publish(e);
    }

    fn set_badge_issuer(e: &Env, issuer: Address) {
        admin(e).require_auth();

        e.storage().instance().set(&DataKey::BadgeIssuer, &issuer);

        BadgeIssuerSet { issuer }.publish(e);
    }

    fn badge_issuer(e: &Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::BadgeIssuer)
            .unwrap_or_else(|| panic_with_error!(e, EventRegistryError::BadgeIssuerNotSet))
    }

    fn create_event(
        e: &Env,
        organizer: Address,
        name: String,
        description: String,
        image_uri: String,
        start_time: u64,
        end_time: u64,
        max_attendees: u32,
    ) -> u32 {
        organizer.require_auth();

        if name.is_empty() {
            panic_with_error!(e, EventRegistryError::EmptyName);
        }
        if start_time <= e.ledger().timestamp() {
            panic_with_error!(e, EventRegistryError::StartTimeNotInFuture);
        }
        if end_time <= start_time {
            panic_with_error!(e, EventRegistryError::InvalidTimeWindow);
        }
        if max_attendees == 0 {
            panic_with_error!(e, EventRegistryError::ZeroCapacity);
        }

        let event_id: u32 = e.storage().instance().get(&EventKey::NextEventId).unwrap_or(1);
        e.storage().instance().set(&EventKey::NextEventId, &(event_id + 1));

        let event = Event {
            id: event_id,
            name: name.clone(),
            description,
            image_uri,
            organizer: organizer.clone(),
            start_time,
            end_time,
            max_attendees,
            claimed_count: 0,
            is_active: true,
        };
        save_event(e, &event);

        let index = count_organizer_events(e, &organizer);
        save(e, &EventKey::OrganizerEventAt(organizer.clone(), index), &event_id);
        save(e, &EventKey::OrganizerEventCount(organizer.clone()), &(index + 1));

        log!(e, "event created", event_id, organizer);

        EventCreated {
            event_id,
            organizer,
            name,
            start_time,
            end_time,
        }
        .publish(e);

        event_id
    }

    fn update_event(e: &Env, caller: Address, event_id: u32, name: String, description: String, image_uri: String) {
        caller.require_auth();

        let mut event = load_event(e, event_id);
        if event.organizer != caller {
            panic_with_error!(e, EventRegistryError::NotOrganizer);
        }
        if !event.is_active {
            panic_with_error!(e, EventRegistryError::EventInactive);
        }
        if e.ledger().timestamp() >= event.start_time {
            panic_with_error!(e, EventRegistryError::EventAlreadyStarted);
        }

        // empty means unchanged
        if !name.is_empty() {
            event.name = name;
        }
        if !description.is_empty() {
            event.description = description;
        }
        if !image_uri.is_empty() {
            event.image_uri = image_uri;
        }
        save_event(e, &event);

        EventUpdated { event_id }.publish(e);
    }

    fn deactivate_event(e: &Env, caller: Address, event_id: u32) {
        caller.require_auth();

        let mut event = load_event(e, event_id);
        if event.organizer != caller && admin(e) != caller {
            panic_with_error!(e, EventRegistryError::NotAuthorized);
        }
        if !event.is_active {
            panic_with_error!(e, EventRegistryError::EventInactive);
        }

        event.is_active = false;
        save_event(e, &event);

        log!(e, "event deactivated", event_id, caller);

        EventDeactivated { event_id }.publish(e);
    }

    fn is_claimable(e: &Env, event_id: u32) -> bool {
        let event: Option<Event> = e.storage().persistent().get(&EventKey::Event(event_id));
        match event {
            Some(event) => claim_error(&event, e.ledger().timestamp()).is_none(),
            None => false,
        }
    }

    fn increment_claimed_count(e: &Env, event_id: u32) {
        let issuer = Self::badge_issuer(e);
        issuer.require_auth();

        let mut event = load_event(e, event_id);
        if let Some(error) = claim_error(&event, e.ledger().timestamp()) {
            panic_with_error!(e, error);
        }

        event.claimed_count += 1;
        save_event(e, &event);
    }

    fn get_event(e: &Env, event_id: u32) -> Event {
        load_event(e, event_id)
    }

    fn organizer(e: &Env, event_id: u32) -> Address {
        load_event(e, event_id).organizer
    }

    fn get_organizer_events(e: &Env, organizer: Address, start: u32, limit: u32) -> Vec<u32> {
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE))
            .min(count_organizer_events(e, &organizer));

        let mut page = Vec::new(e);
        for index in start..end {
            let event_id: u32 = e
                .storage()
                .persistent()
                .get(&EventKey::OrganizerEventAt(organizer.clone(), index))
                .unwrap();
            page.push_back(event_id);
        }
        page
    }

    fn organizer_event_count(e: &Env, organizer: Address) -> u32 {
        count_organizer_events(e, &organizer)
    }

    fn total_events(e: &Env) -> u32 {
        let next: u32 = e.storage().instance().get(&EventKey::NextEventId).unwrap_or(1);
        next - 1
    }

}
