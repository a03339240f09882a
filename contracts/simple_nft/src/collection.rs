use crate::constants::{DEFAULT_MINT_PRICE, MAX_URI_LEN};
use crate::error::ContractError;
use crate::events;
use crate::interface;
use crate::metadata;
use crate::payment::PaymentToken;
use crate::storage::{self, bump_instance};
use crate::types::{CollectionConfig, CollectionInfo};
use soroban_sdk::{Address, BytesN, Env, String, contract, contractimpl, log, panic_with_error};

#[contract]
pub struct SimpleNft;

#[contractimpl]
impl SimpleNft {
    /// Runs once, atomically with deployment, so the owner and the
    /// collection parameters are fixed by whoever deploys the contract.
    pub fn __constructor(env: Env, owner: Address, config: CollectionConfig) {
        let mint_price = config.mint_price.unwrap_or(DEFAULT_MINT_PRICE);
        if mint_price < 0 {
            panic_with_error!(&env, ContractError::InvalidAmount);
        }
        if config.base_uri.len() > MAX_URI_LEN {
            panic_with_error!(&env, ContractError::UriTooLong);
        }

        storage::write_owner(&env, &owner);
        storage::write_config(&env, &config);
        storage::write_mint_price(&env, mint_price);
        storage::write_next_token_id(&env, 0);
        storage::write_total_supply(&env, 0);
        storage::write_accrued_balance(&env, 0);
        bump_instance(&env);
    }

    // Minting

    /// Mints a token to `to` without payment. Restricted to the collection
    /// owner. Returns the id assigned to the new token.
    pub fn owner_mint(
        env: Env,
        caller: Address,
        to: Address,
        uri_suffix: String,
    ) -> Result<u32, ContractError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let config = storage::read_config(&env)?;
        let token_id = Self::mint_token(&env, &config.base_uri, &to, &uri_suffix)?;

        events::emit_mint(&env, to, token_id, 0);

        Ok(token_id)
    }

    /// Public mint. `payment` is pulled from `caller` in the payment token;
    /// anything above the current price is sent straight back. Only the
    /// price is retained in the accrued balance.
    pub fn safe_mint(
        env: Env,
        caller: Address,
        to: Address,
        uri_suffix: String,
        payment: i128,
    ) -> Result<u32, ContractError> {
        caller.require_auth();

        let config = storage::read_config(&env)?;
        let price = storage::read_mint_price(&env)?;
        if payment < price {
            return Err(ContractError::InsufficientPayment);
        }

        let token_id = Self::mint_token(&env, &config.base_uri, &to, &uri_suffix)?;

        let payments = PaymentToken::new(&env, &config.payment_token);
        payments.collect(&caller, payment)?;

        let excess = payment - price;
        if excess > 0 {
            payments.pay_out(&caller, excess)?;
            events::emit_refund(&env, caller.clone(), excess);
        }

        let accrued = storage::read_accrued_balance(&env)
            .checked_add(price)
            .ok_or(ContractError::InvalidAmount)?;
        storage::write_accrued_balance(&env, accrued);

        events::emit_mint(&env, to, token_id, price);

        Ok(token_id)
    }

    pub fn burn(env: Env, caller: Address, token_id: u32) -> Result<(), ContractError> {
        caller.require_auth();

        let owner = storage::read_token_owner(&env, token_id)?;
        if !Self::is_owner_or_approved(&env, &caller, &owner, token_id) {
            return Err(ContractError::NotOwnerOrApproved);
        }

        storage::remove_token(&env, token_id);

        let balance = storage::read_balance(&env, &owner);
        storage::write_balance(&env, &owner, balance.saturating_sub(1));

        let total_supply = storage::read_total_supply(&env);
        storage::write_total_supply(&env, total_supply.saturating_sub(1));
        bump_instance(&env);

        events::emit_burn(&env, owner, token_id);

        Ok(())
    }

    // Transfers and approvals

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();

        let owner = storage::read_token_owner(&env, token_id)?;
        if owner != from {
            return Err(ContractError::NotOwnerOrApproved);
        }

        Self::move_token(&env, &from, &to, token_id);

        Ok(())
    }

    /// Moves `token_id` out of `from` on behalf of `spender`, which must be
    /// the owner, the token's approved address, or an operator of `from`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), ContractError> {
        spender.require_auth();

        let owner = storage::read_token_owner(&env, token_id)?;
        if owner != from {
            return Err(ContractError::IncorrectOwner);
        }
        if !Self::is_owner_or_approved(&env, &spender, &owner, token_id) {
            return Err(ContractError::NotOwnerOrApproved);
        }

        Self::move_token(&env, &from, &to, token_id);

        Ok(())
    }

    /// Sets or clears (`None`) the single approved address of `token_id`.
    /// The approval is dropped on the next transfer or burn.
    pub fn approve(
        env: Env,
        caller: Address,
        approved: Option<Address>,
        token_id: u32,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let owner = storage::read_token_owner(&env, token_id)?;
        if caller != owner && !storage::is_operator(&env, &owner, &caller) {
            return Err(ContractError::NotOwnerOrApproved);
        }
        if approved.as_ref() == Some(&owner) {
            return Err(ContractError::InvalidRecipient);
        }

        storage::write_approved(&env, token_id, approved.as_ref());
        events::emit_approval(&env, owner, approved, token_id);

        Ok(())
    }

    pub fn set_approval_for_all(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        if owner == operator {
            return Err(ContractError::InvalidRecipient);
        }

        storage::write_operator(&env, &owner, &operator, approved);
        events::emit_approval_for_all(&env, owner, operator, approved);

        Ok(())
    }

    pub fn get_approved(env: Env, token_id: u32) -> Result<Option<Address>, ContractError> {
        storage::read_token_owner(&env, token_id)?;
        Ok(storage::read_approved(&env, token_id))
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        storage::is_operator(&env, &owner, &operator)
    }

    // Administration

    /// Any non-negative price is accepted, zero included.
    pub fn set_mint_price(env: Env, caller: Address, new_price: i128) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if new_price < 0 {
            return Err(ContractError::InvalidAmount);
        }

        let old_price = storage::read_mint_price(&env)?;
        storage::write_mint_price(&env, new_price);
        bump_instance(&env);

        events::emit_mint_price_updated(&env, old_price, new_price);

        Ok(())
    }

    /// Sends the whole accrued balance to the owner and returns the amount.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, ContractError> {
        caller.require_auth();
        let owner = Self::require_owner(&env, &caller)?;

        let config = storage::read_config(&env)?;
        let amount = storage::read_accrued_balance(&env);

        PaymentToken::new(&env, &config.payment_token).pay_out(&owner, amount)?;
        storage::write_accrued_balance(&env, 0);
        bump_instance(&env);

        log!(&env, "withdrawn", amount);
        events::emit_withdrawal(&env, owner, amount);

        Ok(amount)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let previous_owner = Self::require_owner(&env, &caller)?;

        storage::write_owner(&env, &new_owner);
        bump_instance(&env);

        events::emit_ownership_transferred(&env, previous_owner, new_owner);

        Ok(())
    }

    // Queries

    pub fn name(env: Env) -> Result<String, ContractError> {
        Ok(storage::read_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        Ok(storage::read_config(&env)?.symbol)
    }

    pub fn base_uri(env: Env) -> Result<String, ContractError> {
        Ok(storage::read_config(&env)?.base_uri)
    }

    pub fn payment_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::read_config(&env)?.payment_token)
    }

    pub fn mint_price(env: Env) -> Result<i128, ContractError> {
        storage::read_mint_price(&env)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        storage::read_owner(&env)
    }

    /// Id the next mint will receive. Equals the number of tokens ever minted.
    pub fn next_token_id(env: Env) -> u32 {
        storage::read_next_token_id(&env)
    }

    /// Number of tokens currently in existence (minted and not burned).
    pub fn total_supply(env: Env) -> u32 {
        storage::read_total_supply(&env)
    }

    pub fn accrued_balance(env: Env) -> i128 {
        storage::read_accrued_balance(&env)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, ContractError> {
        storage::read_token_owner(&env, token_id)
    }

    pub fn balance_of(env: Env, account: Address) -> u32 {
        storage::read_balance(&env, &account)
    }

    pub fn token_uri(env: Env, token_id: u32) -> Result<String, ContractError> {
        let suffix = storage::read_token_uri(&env, token_id)?;
        let config = storage::read_config(&env)?;
        metadata::build_token_uri(&env, &config.base_uri, &suffix)
    }

    pub fn supports_interface(_env: Env, interface_id: BytesN<4>) -> bool {
        interface::is_supported(&interface_id)
    }

    pub fn collection_info(env: Env) -> Result<CollectionInfo, ContractError> {
        let config = storage::read_config(&env)?;
        Ok(CollectionInfo {
            name: config.name,
            symbol: config.symbol,
            base_uri: config.base_uri,
            payment_token: config.payment_token,
            owner: storage::read_owner(&env)?,
            mint_price: storage::read_mint_price(&env)?,
            next_token_id: storage::read_next_token_id(&env),
            total_supply: storage::read_total_supply(&env),
            accrued_balance: storage::read_accrued_balance(&env),
        })
    }
}

impl SimpleNft {
    fn require_owner(env: &Env, caller: &Address) -> Result<Address, ContractError> {
        let owner = storage::read_owner(env)?;
        if *caller != owner {
            return Err(ContractError::Unauthorized);
        }
        Ok(owner)
    }

    fn is_owner_or_approved(env: &Env, spender: &Address, owner: &Address, token_id: u32) -> bool {
        spender == owner
            || storage::read_approved(env, token_id).as_ref() == Some(spender)
            || storage::is_operator(env, owner, spender)
    }

    fn mint_token(
        env: &Env,
        base_uri: &String,
        to: &Address,
        uri_suffix: &String,
    ) -> Result<u32, ContractError> {
        metadata::ensure_uri_fits(base_uri, uri_suffix)?;

        let token_id = storage::read_next_token_id(env);
        let next_token_id = token_id
            .checked_add(1)
            .ok_or(ContractError::SupplyExhausted)?;

        storage::write_token_owner(env, token_id, to);
        storage::write_token_uri(env, token_id, uri_suffix);

        let balance = storage::read_balance(env, to);
        storage::write_balance(env, to, balance + 1);

        let total_supply = storage::read_total_supply(env);
        storage::write_total_supply(env, total_supply + 1);

        storage::write_next_token_id(env, next_token_id);
        bump_instance(env);

        Ok(token_id)
    }

    fn move_token(env: &Env, from: &Address, to: &Address, token_id: u32) {
        storage::write_approved(env, token_id, None);
        storage::write_token_owner(env, token_id, to);

        let from_balance = storage::read_balance(env, from);
        storage::write_balance(env, from, from_balance.saturating_sub(1));

        let to_balance = storage::read_balance(env, to);
        storage::write_balance(env, to, to_balance + 1);

        events::emit_transfer(env, from.clone(), to.clone(), token_id);
    }
}
