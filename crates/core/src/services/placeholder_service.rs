use crate::models::market::Market;
use crate::models::view::{MarketField, Placeholders};

/// Derive the example ticker/amount text for a market selection.
///
/// Pure table lookup, re-run on every market change. Inputs without a paired
/// amount field (`with_amount == false`) get only the ticker example.
pub fn derive_placeholders(market: Market, with_amount: bool) -> Placeholders {
    let (ticker_example, amount_example, amount_unit_label) = match market {
        Market::Tw => ("2330", "10000", "(TWD)"),
        Market::Us => ("AAPL", "500", "(USD)"),
        Market::Crypto => ("BTC", "100", "(USD)"),
    };

    Placeholders {
        market,
        ticker_example,
        amount_example: with_amount.then_some(amount_example),
        amount_unit_label: with_amount.then_some(amount_unit_label),
    }
}

/// Tracks the current placeholders of every market-driven input.
#[derive(Debug, Clone)]
pub struct PlaceholderController {
    calculator: Placeholders,
    compare_first: Placeholders,
    compare_second: Placeholders,
}

impl PlaceholderController {
    /// Start from the markets the form markup has selected initially.
    pub fn new(calculator: Market, compare_first: Market, compare_second: Market) -> Self {
        Self {
            calculator: derive_placeholders(calculator, true),
            compare_first: derive_placeholders(compare_first, false),
            compare_second: derive_placeholders(compare_second, false),
        }
    }

    /// React to a market change on `field` and return the new placeholders.
    pub fn market_changed(&mut self, field: MarketField, market: Market) -> Placeholders {
        let placeholders = derive_placeholders(market, field.has_amount());
        log::debug!("placeholders for {field:?} switched to market {market}");
        match field {
            MarketField::Calculator => self.calculator = placeholders,
            MarketField::CompareFirst => self.compare_first = placeholders,
            MarketField::CompareSecond => self.compare_second = placeholders,
        }
        placeholders
    }

    pub fn get(&self, field: MarketField) -> &Placeholders {
        match field {
            MarketField::Calculator => &self.calculator,
            MarketField::CompareFirst => &self.compare_first,
            MarketField::CompareSecond => &self.compare_second,
        }
    }
}

impl Default for PlaceholderController {
    fn default() -> Self {
        Self::new(Market::Tw, Market::Tw, Market::Tw)
    }
}
