//! Clients for the event registry and the attendance whitelist.

use soroban_sdk::{contractclient, contracttype, Address, Env, String};

/// Event record as stored by the registry.
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

#[contractclient(name = "RegistryClient")]
pub trait Registry {
    fn get_event(e: Env, event_id: u32) -> Event;

    fn is_claimable(e: Env, event_id: u32) -> bool;

    fn increment_claimed_count(e: Env, event_id: u32);
}

#[contractclient(name = "WhitelistClient")]
pub trait Whitelist {
    fn is_whitelisted(e: Env, event_id: u32, account: Address) -> bool;
}
