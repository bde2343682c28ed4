use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateRow {
    #[serde(rename = "tokenSymbol")]
    pub token_symbol: String,

    #[serde(rename = "tokenAddress")]
    pub token_address: String,

    #[serde(rename = "supplyAPY")]
    pub supply_apy: f64,

    #[serde(rename = "variableBorrowAPY")]
    pub variable_borrow_apy: f64,

    #[serde(rename = "stableBorrowAPY")]
    pub stable_borrow_apy: f64,
}

#[cfg(test)]
mod tests {
    use super::RateRow;

    #[test]
    fn serializes_with_wire_field_names() {
        let row = RateRow {
            token_symbol: String::from("DAI"),
            token_address: String::from(
                "0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063",
            ),
            supply_apy: 2.5,
            variable_borrow_apy: 5.0,
            stable_borrow_apy: 7.5,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tokenSymbol": "DAI",
                "tokenAddress": "0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063",
                "supplyAPY": 2.5,
                "variableBorrowAPY": 5.0,
                "stableBorrowAPY": 7.5,
            })
        );
    }
}
