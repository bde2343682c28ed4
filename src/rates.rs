use alloy_primitives::Address;
use chrono::Utc;

use crate::{
    error::{AggregationError, ReadError},
    ray, registry,
    types::{AssetDescriptor, RateRow, RatesEnvelope, ReserveSnapshot},
};

/// Read-only access to one reserve's state. `EthRpc` implements this
/// against the chain; tests substitute fakes.
#[allow(async_fn_in_trait)]
pub trait ReserveReader {
    async fn reserve_data(
        &self,
        asset: Address,
    ) -> Result<ReserveSnapshot, ReadError>;
}

/// Reads every asset in order and converts its rates into one row per
/// asset. Fail fast: the first failing read aborts the cycle and no
/// partial rows are returned.
pub async fn aggregate<R: ReserveReader>(
    assets: &[AssetDescriptor],
    reader: &R,
) -> Result<Vec<RateRow>, AggregationError> {
    let mut rows = Vec::with_capacity(assets.len());

    for asset in assets {
        let snapshot = reader.reserve_data(asset.address).await.map_err(
            |source| AggregationError {
                symbol: asset.symbol.to_owned(),
                source,
            },
        )?;

        rows.push(RateRow {
            token_symbol: asset.symbol.to_owned(),
            token_address: asset.address.to_string(),
            supply_apy: ray::to_percent(snapshot.liquidity_rate),
            variable_borrow_apy: ray::to_percent(
                snapshot.variable_borrow_rate,
            ),
            stable_borrow_apy: ray::to_percent(snapshot.stable_borrow_rate),
        });
    }

    Ok(rows)
}

/// Aggregates the tracked registry and stamps the assembly time. Invoked
/// at the system boundary.
pub async fn build_envelope<R: ReserveReader>(
    reader: &R,
) -> Result<RatesEnvelope, AggregationError> {
    let rates = aggregate(registry::tracked_assets(), reader).await?;

    Ok(RatesEnvelope {
        updated_at: Utc::now(),
        rates,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use alloy_primitives::{address, Address, U256};

    use super::{aggregate, build_envelope, ReserveReader};
    use crate::{
        error::ReadError,
        registry,
        types::{AssetDescriptor, ReserveSnapshot},
    };

    struct FakeReader {
        reserves: HashMap<Address, ReserveSnapshot>,
    }

    impl ReserveReader for FakeReader {
        async fn reserve_data(
            &self,
            asset: Address,
        ) -> Result<ReserveSnapshot, ReadError> {
            self.reserves
                .get(&asset)
                .cloned()
                .ok_or(ReadError::EmptyResult)
        }
    }

    const DAI: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const USDC: Address =
        address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

    fn two_asset_registry() -> [AssetDescriptor; 2] {
        [
            AssetDescriptor {
                symbol: "DAI",
                address: DAI,
            },
            AssetDescriptor {
                symbol: "USDC",
                address: USDC,
            },
        ]
    }

    fn rays(value: u64, exp: u32) -> U256 {
        U256::from(value) * U256::from(10).pow(U256::from(exp))
    }

    fn snapshot(supply: U256, variable: U256, stable: U256) -> ReserveSnapshot {
        ReserveSnapshot {
            liquidity_rate: supply,
            variable_borrow_rate: variable,
            stable_borrow_rate: stable,
        }
    }

    fn two_asset_reader() -> FakeReader {
        let mut reserves = HashMap::new();
        reserves.insert(
            DAI,
            snapshot(rays(25, 24), rays(5, 25), rays(75, 24)),
        );
        reserves.insert(
            USDC,
            snapshot(rays(1, 25), rays(3, 25), rays(4, 25)),
        );
        FakeReader { reserves }
    }

    #[tokio::test]
    async fn produces_one_row_per_asset_in_registry_order() {
        let registry = two_asset_registry();
        let rows = aggregate(&registry, &two_asset_reader()).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].token_symbol, "DAI");
        assert_eq!(rows[0].token_address, DAI.to_string());
        assert_eq!(rows[1].token_symbol, "USDC");
        assert_eq!(rows[1].token_address, USDC.to_string());

        assert!((rows[0].supply_apy - 2.5).abs() < 1e-9);
        assert!((rows[0].variable_borrow_apy - 5.0).abs() < 1e-9);
        assert!((rows[0].stable_borrow_apy - 7.5).abs() < 1e-9);
        assert!((rows[1].supply_apy - 1.0).abs() < 1e-9);
        assert!((rows[1].variable_borrow_apy - 3.0).abs() < 1e-9);
        assert!((rows[1].stable_borrow_apy - 4.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn one_failing_asset_aborts_the_whole_cycle() {
        let registry = two_asset_registry();
        let mut reader = two_asset_reader();
        reader.reserves.remove(&USDC);

        let error = aggregate(&registry, &reader).await.unwrap_err();
        assert_eq!(error.symbol, "USDC");
        assert!(matches!(error.source, ReadError::EmptyResult));
    }

    #[tokio::test]
    async fn consecutive_cycles_are_idempotent() {
        let registry = two_asset_registry();
        let reader = two_asset_reader();

        let first = aggregate(&registry, &reader).await.unwrap();
        let second = aggregate(&registry, &reader).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn envelope_wraps_the_tracked_registry() {
        let mut reserves = HashMap::new();
        for asset in registry::tracked_assets() {
            reserves.insert(
                asset.address,
                snapshot(rays(2, 25), rays(4, 25), rays(6, 25)),
            );
        }

        let envelope = build_envelope(&FakeReader { reserves })
            .await
            .unwrap();
        assert_eq!(envelope.rates.len(), registry::tracked_assets().len());
        assert_eq!(envelope.rates[0].token_symbol, "DAI");
        assert_eq!(envelope.rates[2].token_symbol, "USDT");
    }

    #[tokio::test]
    async fn envelope_propagates_aggregation_failure() {
        let reader = FakeReader {
            reserves: HashMap::new(),
        };

        let error = build_envelope(&reader).await.unwrap_err();
        assert_eq!(error.symbol, "DAI");
    }
}
