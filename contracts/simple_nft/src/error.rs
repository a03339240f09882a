use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    NotInitialized = 3,
    NonexistentToken = 4,
    InsufficientPayment = 5,
    NotOwnerOrApproved = 6,
    TransferFailure = 7,
    InvalidAmount = 8,
    UriTooLong = 9,
    IncorrectOwner = 10,
    InvalidRecipient = 11,
    SupplyExhausted = 12,
}
