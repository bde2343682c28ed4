use alloy_primitives::U256;

/// Rate fields kept from a `getReserveData` call, ray scaled (1e27).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveSnapshot {
    pub liquidity_rate: U256,
    pub variable_borrow_rate: U256,
    pub stable_borrow_rate: U256,
}
