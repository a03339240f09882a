use soroban_sdk::{Address, Env, contractevent};

#[contractevent]
#[derive(Clone, Debug)]
pub struct Mint {
    pub to: Address,
    pub token_id: u32,
    pub price_paid: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub token_id: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Burn {
    pub from: Address,
    pub token_id: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Approval {
    pub owner: Address,
    pub approved: Option<Address>,
    pub token_id: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ApprovalForAll {
    pub owner: Address,
    pub operator: Address,
    pub approved: bool,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct MintPriceUpdated {
    pub old_price: i128,
    pub new_price: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Refund {
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Withdrawal {
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_mint(env: &Env, to: Address, token_id: u32, price_paid: i128) {
    Mint {
        to,
        token_id,
        price_paid,
    }
    .publish(env);
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, token_id: u32) {
    Transfer { from, to, token_id }.publish(env);
}

pub fn emit_burn(env: &Env, from: Address, token_id: u32) {
    Burn { from, token_id }.publish(env);
}

pub fn emit_approval(env: &Env, owner: Address, approved: Option<Address>, token_id: u32) {
    Approval {
        owner,
        approved,
        token_id,
    }
    .publish(env);
}

pub fn emit_approval_for_all(env: &Env, owner: Address, operator: Address, approved: bool) {
    ApprovalForAll {
        owner,
        operator,
        approved,
    }
    .publish(env);
}

pub fn emit_mint_price_updated(env: &Env, old_price: i128, new_price: i128) {
    MintPriceUpdated {
        old_price,
        new_price,
    }
    .publish(env);
}

pub fn emit_refund(env: &Env, to: Address, amount: i128) {
    Refund { to, amount }.publish(env);
}

pub fn emit_withdrawal(env: &Env, to: Address, amount: i128) {
    Withdrawal { to, amount }.publish(env);
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    OwnershipTransferred {
        previous_owner,
        new_owner,
    }
    .publish(env);
}
