use crate::error::ModelError;
use crate::numeric::{
    lenient_decimal, lenient_id, lenient_price_map, lenient_quantity, lenient_text,
    lenient_timestamp,
};
use crate::price::{PriceMap, UnitPrice};
use crate::status::{classify_stock, StockStatus};
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One product's stock position within a company's inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryLine {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default, alias = "producto_codigo", deserialize_with = "lenient_text")]
    pub product_code: String,
    #[serde(default, alias = "producto_nombre", deserialize_with = "lenient_text")]
    pub product_name: String,
    #[serde(default, alias = "cantidad", deserialize_with = "lenient_quantity")]
    pub quantity: i64,
    #[serde(default, alias = "producto_precios", deserialize_with = "lenient_price_map")]
    pub prices: Option<PriceMap>,
    #[serde(default, alias = "producto_precio", deserialize_with = "lenient_decimal")]
    pub price: Option<Decimal>,
    #[serde(default, alias = "fecha_actualizacion", deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl InventoryLine {
    pub fn new(code: impl Into<String>, name: impl Into<String>, quantity: i64) -> Self {
        InventoryLine {
            product_code: code.into(),
            product_name: name.into(),
            quantity,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Adds one entry to the currency map.
    pub fn with_currency_price(mut self, code: &str, amount: Decimal) -> Self {
        self.prices
            .get_or_insert_with(PriceMap::new)
            .insert(code.to_uppercase(), amount);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<FixedOffset>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Parses either a bare array of lines or a paginated `{"results": [...]}` page.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, ModelError> {
        let value: Value = serde_json::from_str(json)?;
        let items = match value {
            Value::Array(items) => items,
            Value::Object(mut page) => match page.remove("results") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(ModelError::InvalidInput {
                        field: "inventory",
                        reason: "expected an array or an object with a 'results' array".into(),
                    });
                }
            },
            _ => {
                return Err(ModelError::InvalidInput {
                    field: "inventory",
                    reason: "expected an array of inventory lines".into(),
                });
            }
        };
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(ModelError::from))
            .collect()
    }

    /// Quantity with negative values clamped to zero.
    pub fn on_hand(&self) -> i64 {
        self.quantity.max(0)
    }

    pub fn status(&self) -> StockStatus {
        classify_stock(self.on_hand()).unwrap_or(StockStatus::Depleted)
    }

    pub fn unit_price(&self) -> UnitPrice {
        UnitPrice::resolve(self.prices.as_ref(), self.price)
    }

    /// `on_hand × unit price`, saturating instead of overflowing.
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.on_hand()).saturating_mul(self.unit_price().amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_wire_payload() {
        let lines = InventoryLine::list_from_json(
            r#"[{
                "id": 4,
                "producto_codigo": "P1",
                "producto_nombre": "Widget",
                "cantidad": "15",
                "producto_precios": "{\"COP\": 2000}",
                "fecha_actualizacion": "2026-10-01T08:30:00Z"
            }]"#,
        )
        .unwrap();
        let line = &lines[0];
        assert_eq!(line.id, Some(4));
        assert_eq!(line.product_name, "Widget");
        assert_eq!(line.quantity, 15);
        assert_eq!(line.unit_price().amount, Decimal::from(2000));
        assert_eq!(line.stock_value(), Decimal::from(30000));
        assert!(line.updated_at.is_some());
    }

    #[test]
    fn paginated_payload_and_bad_shapes() {
        let lines = InventoryLine::list_from_json(
            r#"{"count": 1, "results": [{"product_code": "A", "quantity": null}]}"#,
        )
        .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 0);
        assert!(InventoryLine::list_from_json(r#"{"count": 1}"#).is_err());
        assert!(InventoryLine::list_from_json("42").is_err());
    }

    #[test]
    fn negative_quantity_is_clamped() {
        let line = InventoryLine::new("N", "Negative", -4).with_price(Decimal::from(10));
        assert_eq!(line.on_hand(), 0);
        assert_eq!(line.status(), StockStatus::Depleted);
        assert_eq!(line.stock_value(), Decimal::ZERO);
    }

    #[test]
    fn value_uses_resolved_price() {
        let line = InventoryLine::new("U", "Usd item", 3)
            .with_price(Decimal::from(999))
            .with_currency_price("usd", Decimal::from_str("2.5").unwrap());
        assert_eq!(line.unit_price().currency.as_deref(), Some("USD"));
        assert_eq!(line.stock_value(), Decimal::from_str("7.5").unwrap());
    }
}
