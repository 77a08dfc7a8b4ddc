//! Client for the event registry.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "RegistryClient")]
pub trait Registry {
    fn organizer(e: Env, event_id: u32) -> Address;
}
