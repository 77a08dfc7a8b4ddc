use soroban_sdk::{Address, BytesN, contractevent};

use crate::ClaimMethod;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Upgrade {
    pub admin: Address,
    pub wasm_hash: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimMethodSet {
    #[topic]
    pub event_id: u32,
    pub method: ClaimMethod,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressWhitelisted {
    #[topic]
    pub event_id: u32,
    #[topic]
    pub account: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressesWhitelistedBatch {
    #[topic]
    pub event_id: u32,
    pub count: u32,
}
