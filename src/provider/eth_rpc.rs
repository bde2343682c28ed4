use std::time::Duration;

use alloy_primitives::{address, Address, Bytes};
use alloy_sol_types::{sol, SolCall};
use anyhow::Context;
use reqwest::Client;
use serde::Serialize;

use crate::{
    configuration::Config,
    error::{Error, ReadError},
    rates::ReserveReader,
    types::{EthCallBody, ReserveSnapshot},
};

/// Polygon Aave v3 protocol data provider (IPoolDataProvider), from the
/// Aave address book.
pub const AAVE_PROTOCOL_DATA_PROVIDER: Address =
    address!("243Aa95cAC2a25651eda86e80bEe66114413c43b");

sol! {
    /// Reserve-data accessor of the Aave protocol data provider.
    function getReserveData(address asset) external view returns (
        uint256 unbacked,
        uint256 accruedToTreasuryScaled,
        uint256 totalAToken,
        uint256 totalStableDebt,
        uint256 totalVariableDebt,
        uint256 liquidityRate,
        uint256 variableBorrowRate,
        uint256 stableBorrowRate,
        uint256 averageStableBorrowRate,
        uint256 liquidityIndex,
        uint256 variableBorrowIndex,
        uint40 lastUpdateTimestamp
    );
}

#[derive(Debug)]
pub struct EthRpc {
    pub config: Config,
    pub http: Client,
}

#[derive(Debug, Serialize)]
struct EthCallRequest {
    jsonrpc: &'static str,
    id: u32,
    method: &'static str,
    params: (CallObject, &'static str),
}

#[derive(Debug, Serialize)]
struct CallObject {
    to: Address,
    data: Bytes,
}

impl EthCallRequest {
    fn new(to: Address, data: Bytes) -> EthCallRequest {
        EthCallRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "eth_call",
            params: (CallObject { to, data }, "latest"),
        }
    }
}

impl EthRpc {
    pub fn new(config: Config) -> Result<EthRpc, Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .context("Could not build the rpc http client")?;

        Ok(EthRpc { config, http })
    }

    /// Read-only contract call against the configured endpoint.
    pub async fn call(
        &self,
        to: Address,
        data: Bytes,
    ) -> Result<Bytes, ReadError> {
        let request = EthCallRequest::new(to, data);
        let body = self
            .http
            .post(self.config.rpc_url.clone())
            .json(&request)
            .send()
            .await?
            .json::<EthCallBody>()
            .await?;

        if let Some(error) = body.error {
            return Err(ReadError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        body.result.ok_or(ReadError::EmptyResult)
    }
}

impl ReserveReader for EthRpc {
    async fn reserve_data(
        &self,
        asset: Address,
    ) -> Result<ReserveSnapshot, ReadError> {
        let call = getReserveDataCall { asset };
        let raw = self
            .call(AAVE_PROTOCOL_DATA_PROVIDER, call.abi_encode().into())
            .await?;
        let decoded = getReserveDataCall::abi_decode_returns(&raw)?;

        Ok(ReserveSnapshot {
            liquidity_rate: decoded.liquidityRate,
            variable_borrow_rate: decoded.variableBorrowRate,
            stable_borrow_rate: decoded.stableBorrowRate,
        })
    }
}
