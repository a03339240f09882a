use crate::constants::MAX_URI_LEN;
use crate::error::ContractError;
use soroban_sdk::{Env, String};

pub fn ensure_uri_fits(base_uri: &String, suffix: &String) -> Result<(), ContractError> {
    if base_uri.len().saturating_add(suffix.len()) > MAX_URI_LEN {
        return Err(ContractError::UriTooLong);
    }
    Ok(())
}

/// Concatenates `base_uri` and `suffix` byte for byte. No separator is
/// inserted and neither side is normalized.
pub fn build_token_uri(
    env: &Env,
    base_uri: &String,
    suffix: &String,
) -> Result<String, ContractError> {
    ensure_uri_fits(base_uri, suffix)?;

    let base_len = base_uri.len() as usize;
    let total_len = base_len + suffix.len() as usize;

    let mut buf = [0u8; MAX_URI_LEN as usize];
    base_uri.copy_into_slice(&mut buf[..base_len]);
    suffix.copy_into_slice(&mut buf[base_len..total_len]);

    Ok(String::from_bytes(env, &buf[..total_len]))
}
