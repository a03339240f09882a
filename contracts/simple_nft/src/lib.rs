#![no_std]
pub mod collection;
pub mod constants;
pub mod error;
pub mod events;
pub mod interface;
pub mod metadata;
pub mod payment;
pub mod storage;
pub mod types;

pub use crate::collection::{SimpleNft, SimpleNftClient};
pub use crate::error::ContractError;
