//! Pump.fun API Types
//!
//! Request body for the trade API. The API expects camelCase keys and a
//! string-typed `denominatedInSol` flag.

use serde::Serialize;

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

/// Trade size: either an absolute SOL amount (buys) or a percentage of the
/// held token balance (sells, e.g. "100%")
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TradeAmount {
    Sol(f64),
    Percent(String),
}

impl TradeAmount {
    /// Percentage of holdings from a multiplier (1.0 -> "100%")
    pub fn from_multiplier(multiplier: f64) -> Self {
        Self::Percent(format!("{}%", multiplier * 100.0))
    }
}

/// Body of a trade API request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequestBody {
    /// Signer public key (base58)
    pub public_key: String,
    pub action: TradeAction,
    /// Token mint address
    pub mint: String,
    pub amount: TradeAmount,
    /// "true" when amount is SOL, "false" when it is a token percentage
    pub denominated_in_sol: String,
    /// Slippage tolerance in percent
    pub slippage: f64,
    /// Priority fee in SOL
    pub priority_fee: f64,
    /// Liquidity pool to trade against
    pub pool: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_body_serialization() {
        let body = TradeRequestBody {
            public_key: "Signer111".to_string(),
            action: TradeAction::Buy,
            mint: "Mint111".to_string(),
            amount: TradeAmount::Sol(0.5),
            denominated_in_sol: "true".to_string(),
            slippage: 1.0,
            priority_fee: 0.0005,
            pool: "pump".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["publicKey"], "Signer111");
        assert_eq!(json["action"], "buy");
        assert_eq!(json["amount"], 0.5);
        assert_eq!(json["denominatedInSol"], "true");
        assert_eq!(json["priorityFee"], 0.0005);
    }

    #[test]
    fn test_sell_amount_is_percentage_string() {
        let amount = TradeAmount::from_multiplier(0.5);
        assert_eq!(serde_json::to_value(&amount).unwrap(), "50%");

        let amount = TradeAmount::from_multiplier(1.0);
        assert_eq!(serde_json::to_value(&amount).unwrap(), "100%");
    }
}
