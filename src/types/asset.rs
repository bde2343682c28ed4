use alloy_primitives::Address;

/// One tracked reserve: ticker plus the underlying token address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub symbol: &'static str,
    pub address: Address,
}
