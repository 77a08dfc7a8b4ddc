use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EventRegistryError {
    /// Indicates a non-existent `event_id`.
    EventNotFound = 100,
    /// Indicates an empty event name.
    EmptyName = 101,
    /// Indicates a start time which is not strictly in the future.
    StartTimeNotInFuture = 102,
    /// Indicates an end time not after the start time.
    InvalidTimeWindow = 103,
    /// Indicates a capacity of zero attendees.
    ZeroCapacity = 104,
    /// Indicates the caller is not the organizer of the event.
    NotOrganizer = 105,
    /// Indicates the caller is neither the organizer nor the admin.
    NotAuthorized = 106,
    /// Indicates the event was deactivated.
    EventInactive = 107,
    /// Indicates the event already started and can no longer be edited.
    EventAlreadyStarted = 108,
    /// Indicates the ledger time is outside of the claim window.
    ClaimWindowClosed = 109,
    /// Indicates every badge of the event was claimed.
    EventFull = 110,
    /// Indicates no badge issuer was configured.
    BadgeIssuerNotSet = 111,
}
