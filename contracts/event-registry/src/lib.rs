#![no_std]

use soroban_sdk::{contract, contractmeta, Address, BytesN, Env, String, Vec};

contractmeta!(key = "Description", val = "Attendance Badges Event Registry");

mod contract;

mod errors;
mod events;

pub use contract::Event;
pub use errors::EventRegistryError;

/// Largest page returned by `get_organizer_events`.
pub const MAX_PAGE_SIZE: u32 = 100;

#[contract]
pub struct EventRegistry;

pub trait EventRegistryTrait {

    fn __constructor(e: &Env, admin: Address);

    fn upgrade(e: &Env, wasm_hash: BytesN<32>);

    /// Authorize `issuer` as the only account allowed to bump claimed counts.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `issuer` - Address of the badge issuer contract.
    ///
    /// # Panics
    ///
    /// * If the admin did not authorize the call.
    ///
    /// # Events
    ///
    /// * topics - `["badge_issuer_set", issuer: Address]`
    fn set_badge_issuer(e: &Env, issuer: Address);

    /// Returns the configured badge issuer.
    ///
    /// # Panics
    ///
    /// * If no issuer was set yet.
    fn badge_issuer(e: &Env) -> Address;

    /// Create a new event organized by `organizer`.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `organizer` - Account creating the event. Becomes its organizer.
    /// * `name` - Display name, must not be empty.
    /// * `description` - Free form description.
    /// * `image_uri` - Reference to the badge artwork.
    /// * `start_time` - Opening of the claim window, strictly in the future.
    /// * `end_time` - Closing of the claim window, after `start_time`.
    /// * `max_attendees` - Capacity, at least 1.
    ///
    /// # Returns
    ///
    /// The identifier of the new event.
    ///
    /// # Events
    ///
    /// * topics - `["event_created", event_id: u32, organizer: Address]`
    /// * data - `[name: String, start_time: u64, end_time: u64]`
    fn create_event(
        e: &Env,
        organizer: Address,
        name: String,
        description: String,
        image_uri: String,
        start_time: u64,
        end_time: u64,
        max_attendees: u32,
    ) -> u32;

    /// Edit the metadata of an event which has not started yet.
    ///
    /// Empty strings leave the corresponding field untouched.
    ///
    /// # Panics
    ///
    /// * If `caller` is not the organizer.
    /// * If the event was deactivated.
    /// * If the event already started.
    ///
    /// # Events
    ///
    /// * topics - `["event_updated", event_id: u32]`
    fn update_event(e: &Env, caller: Address, event_id: u32, name: String, description: String, image_uri: String);

    /// Deactivate an event. There is no way back.
    ///
    /// # Panics
    ///
    /// * If `caller` is neither the organizer nor the admin.
    /// * If the event is already inactive.
    ///
    /// # Events
    ///
    /// * topics - `["event_deactivated", event_id: u32]`
    fn deactivate_event(e: &Env, caller: Address, event_id: u32);

    /// Whether a badge can currently be claimed for `event_id`.
    ///
    /// True when the event is active, the ledger time is inside
    /// `[start_time, end_time]` and capacity remains. Unknown events are
    /// not claimable.
    fn is_claimable(e: &Env, event_id: u32) -> bool;

    /// Account one more claimed badge against `event_id`.
    ///
    /// Only the badge issuer can call this. Claimability is checked again
    /// here so the count can never exceed `max_attendees`.
    ///
    /// # Panics
    ///
    /// * If no badge issuer is configured.
    /// * If the event is not claimable anymore.
    fn increment_claimed_count(e: &Env, event_id: u32);

    /// Returns the event record.
    ///
    /// # Panics
    ///
    /// * If the event does not exist.
    fn get_event(e: &Env, event_id: u32) -> Event;

    /// Returns the organizer of `event_id`.
    fn organizer(e: &Env, event_id: u32) -> Address;

    /// Returns a page of the events created by `organizer`, oldest first.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `organizer` - Account which created the events.
    /// * `start` - Index of the first event to return.
    /// * `limit` - Page size, capped at `MAX_PAGE_SIZE`.
    fn get_organizer_events(e: &Env, organizer: Address, start: u32, limit: u32) -> Vec<u32>;

    /// Returns the number of events created by `organizer`.
    fn organizer_event_count(e: &Env, organizer: Address) -> u32;

    /// Returns the number of events created so far.
    fn total_events(e: &Env) -> u32;

}
