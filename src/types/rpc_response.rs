use alloy_primitives::Bytes;
use serde::Deserialize;

/// JSON-RPC 2.0 reply to an `eth_call`; exactly one of `result` and
/// `error` is present.
#[derive(Debug, Deserialize)]
pub struct EthCallBody {
    pub jsonrpc: String,
    pub id: i64,
    pub result: Option<Bytes>,
    pub error: Option<EthRpcErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct EthRpcErrorBody {
    pub code: i64,
    pub message: String,
}
