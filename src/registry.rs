use alloy_primitives::address;

use crate::types::AssetDescriptor;

/// Underlying token addresses on Polygon Aave v3, from the Aave address
/// book. Output rows follow this order.
pub const TRACKED_ASSETS: [AssetDescriptor; 3] = [
    AssetDescriptor {
        symbol: "DAI",
        address: address!("8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063"),
    },
    AssetDescriptor {
        symbol: "USDC",
        address: address!("2791Bca1f2de4661ED88A30C99A7a9449Aa84174"),
    },
    AssetDescriptor {
        symbol: "USDT",
        address: address!("c2132D05D31c914a87C6611C10748AEb04B58e8F"),
    },
];

pub fn tracked_assets() -> &'static [AssetDescriptor] {
    &TRACKED_ASSETS
}
