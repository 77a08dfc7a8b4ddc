//! Attendance Whitelist

use soroban_sdk::{contractimpl, contracttype, log, panic_with_error, Address, BytesN, Env, IntoVal, Val, Vec};

use crate::errors::WhitelistError;
use crate::events::{AddressWhitelisted, AddressesWhitelistedBatch, ClaimMethodSet, Upgrade};
use crate::clients::RegistryClient;
use crate::{AttendanceWhitelist, AttendanceWhitelistArgs, AttendanceWhitelistClient, AttendanceWhitelistTrait, MAX_BATCH_SIZE, MAX_PAGE_SIZE};

const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimMethod {
    Manual,
    Code,
    Signature,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Registry,
}

#[contracttype]
pub enum WhitelistKey {
    Member(u32, Address),
    MemberCount(u32),
    MemberAt(u32 /* event_id */, u32 /* index */),
    ClaimMethod(u32),
}

/// Check that `caller` organizes `event_id` according to the registry.
fn require_organizer(e: &Env, caller: &Address, event_id: u32) {
    caller.require_auth();

    let registry = AttendanceWhitelist::registry(e);
    let organizer = RegistryClient::new(e, &registry).organizer(&event_id);
    if organizer != *caller {
        panic_with_error!(e, WhitelistError::NotOrganizer);
    }
}

fn save<V: IntoVal<Env, Val>>(e: &Env, key: &WhitelistKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn member_count(e: &Env, event_id: u32) -> u32 {
    e.storage()
        .persistent()
        .get(&WhitelistKey::MemberCount(event_id))
        .unwrap_or(0)
}

/// Append `account` to the whitelist of `event_id`.
///
/// Returns `false`, writing nothing, if it is already a member.
fn add_member(e: &Env, event_id: u32, account: &Address) -> bool {
    let key = WhitelistKey::Member(event_id, account.clone());
    if e.storage().persistent().has(&key) {
        return false;
    }
    save(e, &key, &true);

    let index = member_count(e, event_id);
    save(e, &WhitelistKey::MemberAt(event_id, index), account);
    save(e, &WhitelistKey::MemberCount(event_id), &(index + 1));
    true
}

#[contractimpl]
impl AttendanceWhitelistTrait for AttendanceWhitelist {

    fn __constructor(e: &Env, admin: Address, registry: Address) {
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Registry, &registry);
    }

    fn upgrade(e: &Env, wasm_hash: BytesN<32>) {
        let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
        admin.require_auth();

        e.deployer().update_current_contract_wasm(wasm_hash.clone());

        Upgrade { admin, wasm_hash }.publish(e);
    }

    fn registry(e: &Env) -> Address {
        e.storage().instance().get(&DataKey::Registry).unwrap()
    }

    fn set_claim_method(e: &Env, caller: Address, event_id: u32, method: ClaimMethod) {
        require_organizer(e, &caller, event_id);

        save(e, &WhitelistKey::ClaimMethod(event_id), &method);

        ClaimMethodSet { event_id, method }.publish(e);
    }

    fn get_claim_method(e: &Env, event_id: u32) -> ClaimMethod {
        e.storage()
            .persistent()
            .get(&WhitelistKey::ClaimMethod(event_id))
            .unwrap_or(ClaimMethod::Manual)
    }

    fn whitelist_address(e: &Env, caller: Address, event_id: u32, account: Address) {
        require_organizer(e, &caller, event_id);

        if !add_member(e, event_id, &account) {
            panic_with_error!(e, WhitelistError::AlreadyWhitelisted);
        }

        AddressWhitelisted { event_id, account }.publish(e);
    }

    fn whitelist_addresses_batch(e: &Env, caller: Address, event_id: u32, accounts: Vec<Address>) -> u32 {
        if accounts.is_empty() {
            panic_with_error!(e, WhitelistError::EmptyBatch);
        }
        if accounts.len() > MAX_BATCH_SIZE {
            panic_with_error!(e, WhitelistError::BatchTooLarge);
        }
        require_organizer(e, &caller, event_id);

        let mut count = 0u32;
        for account in accounts.iter() {
            if add_member(e, event_id, &account) {
                count += 1;
            }
        }

        log!(e, "batch whitelisted", event_id, count);

        AddressesWhitelistedBatch { event_id, count }.publish(e);

        count
    }

    fn is_whitelisted(e: &Env, event_id: u32, account: Address) -> bool {
        e.storage()
            .persistent()
            .has(&WhitelistKey::Member(event_id, account))
    }

    fn get_whitelisted_addresses(e: &Env, event_id: u32, start: u32, limit: u32) -> Vec<Address> {
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE))
            .min(member_count(e, event_id));

        let mut page = Vec::new(e);
        for index in start..end {
            let account: Address = e
                .storage()
                .persistent()
                .get(&WhitelistKey::MemberAt(event_id, index))
                .unwrap();
            page.push_back(account);
        }
        page
    }

    fn whitelist_count(e: &Env, event_id: u32) -> u32 {
        member_count(e, event_id)
    }

}
