use soroban_sdk::BytesN;

/// ERC-165 `supportsInterface(bytes4)`.
pub const ERC165_ID: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];
/// ERC-721 ownership registry.
pub const ERC721_ID: [u8; 4] = [0x80, 0xac, 0x58, 0xcd];
/// ERC-721 metadata extension (`name`, `symbol`, `tokenURI`).
pub const ERC721_METADATA_ID: [u8; 4] = [0x5b, 0x5e, 0x13, 0x9f];

const SUPPORTED: [[u8; 4]; 3] = [ERC165_ID, ERC721_ID, ERC721_METADATA_ID];

pub fn is_supported(interface_id: &BytesN<4>) -> bool {
    let id = interface_id.to_array();
    SUPPORTED.contains(&id)
}
