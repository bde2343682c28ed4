pub use self::eth_rpc::{EthRpc, AAVE_PROTOCOL_DATA_PROVIDER};

mod eth_rpc;
