pub use self::{
    asset::AssetDescriptor,
    rate_row::RateRow,
    rates_envelope::RatesEnvelope,
    reserve::ReserveSnapshot,
    rpc_response::{EthCallBody, EthRpcErrorBody},
};

mod asset;
mod rate_row;
mod rates_envelope;
mod reserve;
mod rpc_response;
