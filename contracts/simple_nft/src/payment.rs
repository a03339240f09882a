//! Value movement for paid mints, refunds and withdrawals.
//!
//! All transfers go through the collection's payment token contract. A
//! failed transfer surfaces as `TransferFailure`; returning it from an entry
//! point makes the host discard every write of the invocation.

use crate::error::ContractError;
use soroban_sdk::{Address, Env, log, token};

pub struct PaymentToken<'a> {
    env: &'a Env,
    client: token::TokenClient<'a>,
}

impl<'a> PaymentToken<'a> {
    pub fn new(env: &'a Env, token: &Address) -> Self {
        Self {
            env,
            client: token::TokenClient::new(env, token),
        }
    }

    /// Pulls `amount` from `from` into the collection contract.
    pub fn collect(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        let contract = self.env.current_contract_address();
        self.transfer(from, &contract, amount)
    }

    /// Sends `amount` held by the collection contract to `to`.
    pub fn pay_out(&self, to: &Address, amount: i128) -> Result<(), ContractError> {
        let contract = self.env.current_contract_address();
        self.transfer(&contract, to, amount)
    }

    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
        if amount == 0 {
            return Ok(());
        }
        match self.client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "payment transfer failed", amount);
                Err(ContractError::TransferFailure)
            }
        }
    }
}
