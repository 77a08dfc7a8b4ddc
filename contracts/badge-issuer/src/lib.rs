#![no_std]

use soroban_sdk::{contract, contractmeta, Address, BytesN, Env, String, Vec};

contractmeta!(key = "Description", val = "Attendance Badges Issuer");

mod clients;
mod contract;

mod errors;
mod events;

pub use contract::Badge;
pub use errors::BadgeError;

/// Largest page returned by `badges_of`.
pub const MAX_PAGE_SIZE: u32 = 100;

#[contract]
pub struct BadgeIssuer;

pub trait BadgeIssuerTrait {

    fn __constructor(e: &Env, admin: Address, registry: Address, whitelist: Address, name: String, symbol: String);

    fn upgrade(e: &Env, wasm_hash: BytesN<32>);

    /// Claim the badge of `event_id` for `claimant`.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `claimant` - Account claiming, and owning, the badge.
    /// * `event_id` - Event identifier from the registry.
    ///
    /// # Returns
    ///
    /// The identifier of the minted badge.
    ///
    /// # Panics
    ///
    /// * If `claimant` already holds a badge for the event.
    /// * If the event is inactive, outside of its claim window or full.
    /// * If `claimant` is not whitelisted for the event.
    ///
    /// # Events
    ///
    /// * topics - `["badge_claimed", event_id: u32, claimant: Address]`
    /// * data - `[badge_id: u32]`
    fn claim_badge(e: &Env, claimant: Address, event_id: u32) -> u32;

    /// Claim the badge of `event_id` on behalf of `claimant`.
    ///
    /// Used when the organizer scans the attendee at the door: the organizer
    /// authorizes the call, the claimant does not have to sign.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `organizer` - The organizer of the event.
    /// * `event_id` - Event identifier from the registry.
    /// * `claimant` - Account receiving the badge.
    ///
    /// # Returns
    ///
    /// The identifier of the minted badge.
    ///
    /// # Panics
    ///
    /// * If `organizer` is not the organizer of the event.
    /// * Same conditions as `claim_badge` for `claimant`.
    ///
    /// # Events
    ///
    /// * topics - `["badge_claimed", event_id: u32, claimant: Address]`
    /// * data - `[badge_id: u32]`
    fn claim_badge_with_qr(e: &Env, organizer: Address, event_id: u32, claimant: Address) -> u32;

    /// Whether `account` could claim the badge of `event_id` right now.
    fn can_claim(e: &Env, event_id: u32, account: Address) -> bool;

    /// Whether `account` already claimed the badge of `event_id`.
    fn has_claimed(e: &Env, event_id: u32, account: Address) -> bool;

    /// Badges cannot change hands.
    ///
    /// # Panics
    ///
    /// * Always.
    fn transfer(e: &Env, from: Address, to: Address, badge_id: u32);

    /// Returns the number of badges in `owner`'s account.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `owner` - Account of the badges' owner.
    fn balance(e: &Env, owner: Address) -> u32;

    /// Returns the address of the owner of the given `badge_id`.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `badge_id` - Badge id as a number.
    ///
    /// # Notes
    ///
    /// If the badge does not exist, this function is expected to panic.
    fn owner_of(e: &Env, badge_id: u32) -> Address;

    /// Returns the full badge record.
    ///
    /// # Panics
    ///
    /// * If the badge does not exist.
    fn badge(e: &Env, badge_id: u32) -> Badge;

    /// Returns a page of the badges held by `owner`, in claim order.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `owner` - Account of the badges' owner.
    /// * `start` - Index of the first badge to return.
    /// * `limit` - Page size, capped at `MAX_PAGE_SIZE`.
    fn badges_of(e: &Env, owner: Address, start: u32, limit: u32) -> Vec<u32>;

    /// Returns the number of badges minted so far.
    fn total_supply(e: &Env) -> u32;

    /// Returns the badge collection name.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    fn name(e: &Env) -> String;

    /// Returns the badge collection symbol.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    fn symbol(e: &Env) -> String;

    /// Returns the Uniform Resource Identifier (URI) for `badge_id` badge.
    ///
    /// This is the image reference of the event at the time of the claim.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `badge_id` - Badge id as a number.
    ///
    /// # Notes
    ///
    /// If the badge does not exist, this function is expected to panic.
    fn token_uri(e: &Env, badge_id: u32) -> String;

}
