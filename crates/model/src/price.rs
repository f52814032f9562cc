use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Amounts keyed by upper-case ISO currency code.
pub type PriceMap = BTreeMap<String, Decimal>;

/// Lookup order when a line carries several prices.
pub const PREFERRED_CURRENCIES: [&str; 5] = ["COP", "USD", "EUR", "MXN", "BRL"];

/// Prices in this currency are printed without a code suffix.
pub const BASE_CURRENCY: &str = "COP";

/// The single price used for a line's value, and the currency it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnitPrice {
    pub amount: Decimal,
    /// `None` for the flat price or the zero fallback.
    pub currency: Option<String>,
}

impl UnitPrice {
    pub fn zero() -> Self {
        UnitPrice::default()
    }

    /// Picks the first non-zero entry of `prices` in preference order, then any
    /// other currency in code order, then `flat`, then zero.
    pub fn resolve(prices: Option<&PriceMap>, flat: Option<Decimal>) -> Self {
        if let Some(map) = prices {
            let preferred = PREFERRED_CURRENCIES
                .iter()
                .filter_map(|code| map.get_key_value(*code));
            let others = map
                .iter()
                .filter(|(code, _)| !PREFERRED_CURRENCIES.contains(&code.as_str()));
            if let Some((code, amount)) = preferred.chain(others).find(|(_, a)| !a.is_zero()) {
                return UnitPrice {
                    amount: *amount,
                    currency: Some(code.clone()),
                };
            }
        }
        match flat {
            Some(amount) => UnitPrice {
                amount,
                currency: None,
            },
            None => UnitPrice::zero(),
        }
    }

    /// Currency code to print after the amount, if any.
    pub fn display_suffix(&self) -> Option<&str> {
        self.currency
            .as_deref()
            .filter(|code| *code != BASE_CURRENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, i64)]) -> PriceMap {
        entries
            .iter()
            .map(|(c, a)| (c.to_string(), Decimal::from(*a)))
            .collect()
    }

    #[test]
    fn cop_wins_over_everything() {
        let prices = map(&[("USD", 3), ("COP", 12000), ("AAA", 1)]);
        let price = UnitPrice::resolve(Some(&prices), Some(Decimal::from(5)));
        assert_eq!(price.amount, Decimal::from(12000));
        assert_eq!(price.display_suffix(), None);
    }

    #[test]
    fn preference_order_then_sorted_remainder() {
        let prices = map(&[("MXN", 40), ("EUR", 2)]);
        assert_eq!(UnitPrice::resolve(Some(&prices), None).currency.as_deref(), Some("EUR"));

        let prices = map(&[("JPY", 300), ("CLP", 900)]);
        let price = UnitPrice::resolve(Some(&prices), None);
        assert_eq!(price.currency.as_deref(), Some("CLP"));
        assert_eq!(price.display_suffix(), Some("CLP"));
    }

    #[test]
    fn zero_entries_are_skipped() {
        let prices = map(&[("COP", 0), ("USD", 4)]);
        let price = UnitPrice::resolve(Some(&prices), None);
        assert_eq!(price.amount, Decimal::from(4));
        assert_eq!(price.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn falls_back_to_flat_then_zero() {
        let empty = PriceMap::new();
        let flat = UnitPrice::resolve(Some(&empty), Some(Decimal::from(700)));
        assert_eq!(flat.amount, Decimal::from(700));
        assert_eq!(flat.currency, None);
        assert_eq!(UnitPrice::resolve(None, None), UnitPrice::zero());
    }
}
