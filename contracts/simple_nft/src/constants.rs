/// Mint price used when `CollectionConfig::mint_price` is `None`:
/// 0.01 of a 7-decimal asset (100_000 stroops for XLM).
pub const DEFAULT_MINT_PRICE: i128 = 100_000;

/// Upper bound on `base_uri + suffix`, in bytes. `token_uri` assembles the
/// full location in a stack buffer of this size.
pub const MAX_URI_LEN: u32 = 256;

const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
