use crate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::error::ContractError;
use crate::types::CollectionConfig;
use core::fmt::Debug;
use soroban_sdk::{Address, Env, String, TryFromVal, Val, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // Collection keys (instance storage)
    Owner,
    CollectionConfig,
    MintPrice,
    NextTokenId,
    TotalSupply,
    AccruedBalance,

    // Token keys (persistent storage)
    TokenOwner(u32),
    TokenUri(u32),
    Approved(u32),

    // Account keys (persistent storage)
    Balance(Address),
    Operator(Address, Address),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn read_config(env: &Env) -> Result<CollectionConfig, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::CollectionConfig)
        .ok_or(ContractError::NotInitialized)
}

pub fn write_config(env: &Env, config: &CollectionConfig) {
    env.storage()
        .instance()
        .set(&DataKey::CollectionConfig, config);
}

pub fn read_owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ContractError::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_mint_price(env: &Env) -> Result<i128, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::MintPrice)
        .ok_or(ContractError::NotInitialized)
}

pub fn write_mint_price(env: &Env, price: i128) {
    env.storage().instance().set(&DataKey::MintPrice, &price);
}

pub fn read_next_token_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NextTokenId)
        .unwrap_or(0)
}

pub fn write_next_token_id(env: &Env, id: u32) {
    env.storage().instance().set(&DataKey::NextTokenId, &id);
}

pub fn read_total_supply(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: u32) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn read_accrued_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::AccruedBalance)
        .unwrap_or(0)
}

pub fn write_accrued_balance(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::AccruedBalance, &amount);
}

/// Reads a persistent entry and, when present, pushes its TTL out so
/// long-held tokens are not archived between writes.
fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: Debug,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

pub fn read_token_owner(env: &Env, token_id: u32) -> Result<Address, ContractError> {
    read_persistent(env, &DataKey::TokenOwner(token_id)).ok_or(ContractError::NonexistentToken)
}

pub fn write_token_owner(env: &Env, token_id: u32, owner: &Address) {
    let key = DataKey::TokenOwner(token_id);
    env.storage().persistent().set(&key, owner);
    bump_persistent(env, &key);
}

pub fn read_token_uri(env: &Env, token_id: u32) -> Result<String, ContractError> {
    read_persistent(env, &DataKey::TokenUri(token_id)).ok_or(ContractError::NonexistentToken)
}

pub fn write_token_uri(env: &Env, token_id: u32, suffix: &String) {
    let key = DataKey::TokenUri(token_id);
    env.storage().persistent().set(&key, suffix);
    bump_persistent(env, &key);
}

pub fn read_approved(env: &Env, token_id: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Approved(token_id))
}

pub fn write_approved(env: &Env, token_id: u32, approved: Option<&Address>) {
    let key = DataKey::Approved(token_id);
    match approved {
        Some(account) => {
            env.storage().persistent().set(&key, account);
            bump_persistent(env, &key);
        }
        None => env.storage().persistent().remove(&key),
    }
}

/// Drops every per-token entry. The id itself stays consumed.
pub fn remove_token(env: &Env, token_id: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::TokenOwner(token_id));
    env.storage()
        .persistent()
        .remove(&DataKey::TokenUri(token_id));
    env.storage()
        .persistent()
        .remove(&DataKey::Approved(token_id));
}

pub fn read_balance(env: &Env, account: &Address) -> u32 {
    read_persistent(env, &DataKey::Balance(account.clone())).unwrap_or(0)
}

pub fn write_balance(env: &Env, account: &Address, balance: u32) {
    let key = DataKey::Balance(account.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        bump_persistent(env, &key);
    }
}

pub fn is_operator(env: &Env, owner: &Address, operator: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Operator(owner.clone(), operator.clone()))
        .unwrap_or(false)
}

pub fn write_operator(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    if approved {
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}
