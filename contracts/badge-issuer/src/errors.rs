use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BadgeError {
    /// Indicates a non-existent `badge_id`.
    NonExistentBadge = 300,
    /// Indicates the caller is not the organizer of the event.
    NotOrganizer = 301,
    /// Indicates the claimant is not on the event whitelist.
    NotWhitelisted = 302,
    /// Indicates the claimant already holds a badge for the event.
    AlreadyClaimed = 303,
    /// Indicates the event was deactivated.
    EventInactive = 304,
    /// Indicates the ledger time is outside of the claim window.
    ClaimWindowClosed = 305,
    /// Indicates every badge of the event was claimed.
    EventFull = 306,
    /// Indicates an attempt to move a badge away from its owner.
    NonTransferable = 307,
    /// Indicates the badge id was already minted.
    BadgeAlreadyMinted = 308,
}
