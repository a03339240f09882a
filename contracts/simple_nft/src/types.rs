use soroban_sdk::{Address, String, contracttype};

/// Deploy-time parameters of a collection, fixed by the constructor.
#[derive(Clone, Debug)]
#[contracttype]
pub struct CollectionConfig {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    /// Token contract that paid mints are settled in.
    pub payment_token: Address,
    /// Price in the payment token's smallest unit. Falls back to
    /// `DEFAULT_MINT_PRICE` when unset.
    pub mint_price: Option<i128>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CollectionInfo {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub payment_token: Address,
    pub owner: Address,
    pub mint_price: i128,
    pub next_token_id: u32,
    pub total_supply: u32,
    pub accrued_balance: i128,
}
