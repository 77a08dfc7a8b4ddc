extern crate std;

use soroban_sdk::{
    testutils::{storage::Persistent as _, Address as _, Events as _, Ledger},
    Address, Env, Event, IntoVal, Map, String, Symbol, Val, Vec,
};

use event_registry::{EventRegistry, EventRegistryClient};

use crate::contract::{WhitelistKey, PERSISTENT_BUMP_AMOUNT};
use crate::events::{AddressWhitelisted, AddressesWhitelistedBatch};
use crate::{AttendanceWhitelist, AttendanceWhitelistClient, ClaimMethod, MAX_BATCH_SIZE, MAX_PAGE_SIZE};

struct Setup<'a> {
    e: Env,
    organizer: Address,
    event_id: u32,
    client: AttendanceWhitelistClient<'a>,
}

fn create_client<'a>(e: &Env, admin: &Address, registry: &Address) -> AttendanceWhitelistClient<'a> {
    let address = e.register(AttendanceWhitelist, (admin, registry));
    AttendanceWhitelistClient::new(e, &address)
}

fn setup<'a>() -> Setup<'a> {
    let e = Env::default();
    e.mock_all_auths();
    e.ledger().set_timestamp(1_000);

    let admin = Address::generate(&e);
    let organizer = Address::generate(&e);

    let registry_address = e.register(EventRegistry, (&admin,));
    let registry = EventRegistryClient::new(&e, &registry_address);
    let event_id = registry.create_event(
        &organizer,
        &String::from_str(&e, "Meetup"),
        &String::from_str(&e, "Monthly meetup"),
        &String::from_str(&e, "ipfs://meetup"),
        &1_010u64,
        &1_100u64,
        &150u32,
    );

    let client = create_client(&e, &admin, &registry_address);
    Setup { e, organizer, event_id, client }
}

fn generate_accounts(e: &Env, count: u32) -> Vec<Address> {
    let mut accounts = Vec::new(e);
    for _ in 0..count {
        accounts.push_back(Address::generate(e));
    }
    accounts
}

// Compare the most recent event with `expected`, published by `contract`.
fn assert_last_event(e: &Env, contract: &Address, expected: impl Event) {
    let (address, topics, data) = e.events().all().last().unwrap();
    assert_eq!(&address, contract);
    assert_eq!(topics, expected.topics(e));
    let data: Map<Symbol, Val> = data.into_val(e);
    let expected_data: Map<Symbol, Val> = expected.data(e).into_val(e);
    assert_eq!(data, expected_data);
}

#[test]
fn test_whitelist_address() {
    let Setup { e, organizer, event_id, client } = setup();
    let attendee = Address::generate(&e);
    let stranger = Address::generate(&e);

    assert!(!client.is_whitelisted(&event_id, &attendee));

    client.whitelist_address(&organizer, &event_id, &attendee);
    assert_last_event(&e, &client.address, AddressWhitelisted { event_id, account: attendee.clone() });

    assert!(client.is_whitelisted(&event_id, &attendee));
    assert!(!client.is_whitelisted(&event_id, &stranger));
    assert!(!client.is_whitelisted(&(event_id + 1), &attendee), "Membership is per event");

    let listed = client.get_whitelisted_addresses(&event_id, &0u32, &10u32);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed.get(0), Some(attendee));
}

#[test]
fn test_whitelist_address_twice_keeps_single_entry() {
    let Setup { e, organizer, event_id, client } = setup();
    let attendee = Address::generate(&e);

    client.whitelist_address(&organizer, &event_id, &attendee);
    let result = client.try_whitelist_address(&organizer, &event_id, &attendee);
    assert!(result.is_err(), "Whitelisting twice should fail");

    assert_eq!(client.whitelist_count(&event_id), 1u32);
}

#[test]
#[should_panic(expected = "Error(Contract, #201)")]
fn test_whitelist_address_twice() {
    let Setup { e, organizer, event_id, client } = setup();
    let attendee = Address::generate(&e);

    client.whitelist_address(&organizer, &event_id, &attendee);
    client.whitelist_address(&organizer, &event_id, &attendee);
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_whitelist_address_not_organizer() {
    let Setup { e, organizer: _, event_id, client } = setup();
    let stranger = Address::generate(&e);
    let attendee = Address::generate(&e);

    client.whitelist_address(&stranger, &event_id, &attendee);
}

#[test]
#[should_panic]
fn test_whitelist_address_unknown_event() {
    let Setup { e, organizer, event_id, client } = setup();
    let attendee = Address::generate(&e);

    client.whitelist_address(&organizer, &(event_id + 1), &attendee);
}

#[test]
fn test_whitelist_batch_skips_duplicates() {
    let Setup { e, organizer, event_id, client } = setup();
    let already = Address::generate(&e);
    let fresh = Address::generate(&e);
    client.whitelist_address(&organizer, &event_id, &already);

    let mut accounts = Vec::new(&e);
    accounts.push_back(already.clone());
    accounts.push_back(fresh.clone());
    accounts.push_back(fresh.clone());

    let added = client.whitelist_addresses_batch(&organizer, &event_id, &accounts);
    assert_eq!(added, 1u32, "Only the new account is added");
    assert_last_event(&e, &client.address, AddressesWhitelistedBatch { event_id, count: 1 });

    let listed = client.get_whitelisted_addresses(&event_id, &0u32, &10u32);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed.get(0), Some(already));
    assert_eq!(listed.get(1), Some(fresh));
}

#[test]
fn test_whitelist_batch_limit() {
    let Setup { e, organizer, event_id, client } = setup();

    let too_many = generate_accounts(&e, MAX_BATCH_SIZE + 1);
    let result = client.try_whitelist_addresses_batch(&organizer, &event_id, &too_many);
    assert!(result.is_err(), "Batches above the limit are rejected");
    assert_eq!(client.whitelist_count(&event_id), 0u32, "Nothing is inserted on rejection");
    assert!(!client.is_whitelisted(&event_id, &too_many.get(0).unwrap()));

    let accounts = generate_accounts(&e, MAX_BATCH_SIZE);
    let added = client.whitelist_addresses_batch(&organizer, &event_id, &accounts);
    assert_eq!(added, MAX_BATCH_SIZE);
    assert_eq!(client.whitelist_count(&event_id), MAX_BATCH_SIZE);
    for account in accounts.iter() {
        assert!(client.is_whitelisted(&event_id, &account));
    }
}

#[test]
#[should_panic(expected = "Error(Contract, #203)")]
fn test_whitelist_batch_too_large() {
    let Setup { e, organizer, event_id, client } = setup();

    let accounts = generate_accounts(&e, MAX_BATCH_SIZE + 1);
    client.whitelist_addresses_batch(&organizer, &event_id, &accounts);
}

#[test]
#[should_panic(expected = "Error(Contract, #202)")]
fn test_whitelist_batch_empty() {
    let Setup { e, organizer, event_id, client } = setup();

    client.whitelist_addresses_batch(&organizer, &event_id, &Vec::new(&e));
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_whitelist_batch_not_organizer() {
    let Setup { e, organizer: _, event_id, client } = setup();
    let stranger = Address::generate(&e);

    let accounts = generate_accounts(&e, 3);
    client.whitelist_addresses_batch(&stranger, &event_id, &accounts);
}

#[test]
fn test_claim_method() {
    let Setup { e: _, organizer, event_id, client } = setup();

    assert_eq!(client.get_claim_method(&event_id), ClaimMethod::Manual);

    client.set_claim_method(&organizer, &event_id, &ClaimMethod::Code);
    assert_eq!(client.get_claim_method(&event_id), ClaimMethod::Code);
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_claim_method_not_organizer() {
    let Setup { e, organizer: _, event_id, client } = setup();
    let stranger = Address::generate(&e);

    client.set_claim_method(&stranger, &event_id, &ClaimMethod::Signature);
}

#[test]
fn test_whitelist_many_batches() {
    let Setup { e, organizer, event_id, client } = setup();
    e.cost_estimate().budget().reset_unlimited();

    let mut batches = std::vec::Vec::new();
    for _ in 0..5 {
        let accounts = generate_accounts(&e, MAX_BATCH_SIZE);
        let added = client.whitelist_addresses_batch(&organizer, &event_id, &accounts);
        assert_eq!(added, MAX_BATCH_SIZE);
        batches.push(accounts);
    }
    assert_eq!(client.whitelist_count(&event_id), 5 * MAX_BATCH_SIZE);

    // one page per batch, in insertion order
    for (i, accounts) in batches.iter().enumerate() {
        let page = client.get_whitelisted_addresses(&event_id, &(i as u32 * MAX_PAGE_SIZE), &MAX_PAGE_SIZE);
        assert_eq!(&page, accounts);
    }

    let tail = client.get_whitelisted_addresses(&event_id, &(5 * MAX_BATCH_SIZE - 3), &10u32);
    assert_eq!(tail.len(), 3, "Pages stop at the last member");
    assert_eq!(tail.get(2), batches[4].last());

    let capped = client.get_whitelisted_addresses(&event_id, &0u32, &(MAX_PAGE_SIZE + 50));
    assert_eq!(capped.len(), MAX_PAGE_SIZE);

    let past_end = client.get_whitelisted_addresses(&event_id, &(5 * MAX_BATCH_SIZE), &10u32);
    assert_eq!(past_end.len(), 0);
}

#[test]
fn test_whitelist_entries_ttl_extended() {
    let Setup { e, organizer, event_id, client } = setup();
    let attendee = Address::generate(&e);

    client.whitelist_address(&organizer, &event_id, &attendee);

    e.as_contract(&client.address, || {
        let storage = e.storage().persistent();
        assert_eq!(storage.get_ttl(&WhitelistKey::Member(event_id, attendee.clone())), PERSISTENT_BUMP_AMOUNT);
        assert_eq!(storage.get_ttl(&WhitelistKey::MemberAt(event_id, 0)), PERSISTENT_BUMP_AMOUNT);
        assert_eq!(storage.get_ttl(&WhitelistKey::MemberCount(event_id)), PERSISTENT_BUMP_AMOUNT);
    });
}
