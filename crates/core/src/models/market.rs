use serde::{Deserialize, Serialize};

/// The market a ticker is traded on.
/// Selects the example placeholders and the currency unit shown next to the amount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    /// Taiwan Stock Exchange (amounts in TWD)
    #[default]
    Tw,
    /// US equities (amounts in USD)
    Us,
    /// Cryptocurrencies quoted in USD
    Crypto,
}

impl Market {
    /// Map a raw selection value (radio/select value) to a market.
    /// Anything that is not `tw` or `us` falls back to the crypto row.
    pub fn from_selection(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tw" => Market::Tw,
            "us" => Market::Us,
            _ => Market::Crypto,
        }
    }

    /// Wire value sent to the calculation service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Tw => "tw",
            Market::Us => "us",
            Market::Crypto => "crypto",
        }
    }

    /// Currency the recurring amount is entered in.
    pub fn amount_currency(&self) -> &'static str {
        match self {
            Market::Tw => "TWD",
            Market::Us | Market::Crypto => "USD",
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
