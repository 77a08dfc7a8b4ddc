#![no_std]

use soroban_sdk::{contract, contractmeta, Address, BytesN, Env, Vec};

contractmeta!(key = "Description", val = "Attendance Badges Whitelist");

mod contract;
mod clients;

#[cfg(test)]
mod test;
mod errors;
mod events;

pub use contract::ClaimMethod;
pub use errors::WhitelistError;

/// Largest number of accounts accepted by a single batch.
pub const MAX_BATCH_SIZE: u32 = 100;

/// Largest page returned by `get_whitelisted_addresses`.
pub const MAX_PAGE_SIZE: u32 = 100;

#[contract]
pub struct AttendanceWhitelist;

pub trait AttendanceWhitelistTrait {

    fn __constructor(e: &Env, admin: Address, registry: Address);

    fn upgrade(e: &Env, wasm_hash: BytesN<32>);

    /// Returns the event registry this whitelist reads organizers from.
    fn registry(e: &Env) -> Address;

    /// Record how attendees of `event_id` are expected to claim.
    ///
    /// The method is informational only, claims are not gated on it.
    ///
    /// # Panics
    ///
    /// * If `caller` is not the organizer of the event.
    ///
    /// # Events
    ///
    /// * topics - `["claim_method_set", event_id: u32]`
    /// * data - `[method: ClaimMethod]`
    fn set_claim_method(e: &Env, caller: Address, event_id: u32, method: ClaimMethod);

    /// Returns the claim method of `event_id`, `ClaimMethod::Manual` if never set.
    fn get_claim_method(e: &Env, event_id: u32) -> ClaimMethod;

    /// Add `account` to the whitelist of `event_id`.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `caller` - The organizer of the event.
    /// * `event_id` - Event identifier from the registry.
    /// * `account` - Account allowed to claim a badge.
    ///
    /// # Panics
    ///
    /// * If `caller` is not the organizer of the event.
    /// * If `account` is already whitelisted.
    ///
    /// # Events
    ///
    /// * topics - `["address_whitelisted", event_id: u32, account: Address]`
    fn whitelist_address(e: &Env, caller: Address, event_id: u32, account: Address);

    /// Add up to `MAX_BATCH_SIZE` accounts to the whitelist of `event_id`.
    ///
    /// Accounts already whitelisted, including repeats inside `accounts`,
    /// are skipped.
    ///
    /// # Returns
    ///
    /// The number of accounts actually added.
    ///
    /// # Panics
    ///
    /// * If `caller` is not the organizer of the event.
    /// * If `accounts` is empty or longer than `MAX_BATCH_SIZE`.
    ///
    /// # Events
    ///
    /// * topics - `["addresses_whitelisted_batch", event_id: u32]`
    /// * data - `[count: u32]`
    fn whitelist_addresses_batch(e: &Env, caller: Address, event_id: u32, accounts: Vec<Address>) -> u32;

    fn is_whitelisted(e: &Env, event_id: u32, account: Address) -> bool;

    /// Returns a page of the whitelisted accounts of `event_id`, in
    /// insertion order.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `event_id` - Event identifier from the registry.
    /// * `start` - Index of the first account to return.
    /// * `limit` - Page size, capped at `MAX_PAGE_SIZE`.
    fn get_whitelisted_addresses(e: &Env, event_id: u32, start: u32, limit: u32) -> Vec<Address>;

    fn whitelist_count(e: &Env, event_id: u32) -> u32;

}
