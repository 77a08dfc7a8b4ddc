use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WhitelistError {
    /// Indicates the caller is not the organizer of the event.
    NotOrganizer = 200,
    /// Indicates the account is already on the whitelist.
    AlreadyWhitelisted = 201,
    /// Indicates a batch without any account.
    EmptyBatch = 202,
    /// Indicates a batch above `MAX_BATCH_SIZE` accounts.
    BatchTooLarge = 203,
}
