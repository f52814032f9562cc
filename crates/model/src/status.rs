use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Quantities up to and including this value count as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Depleted,
    Low,
    Healthy,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [StockStatus::Healthy, StockStatus::Low, StockStatus::Depleted];

    /// Depleted and low rows are emphasised in the detail table.
    pub fn needs_attention(self) -> bool {
        !matches!(self, StockStatus::Healthy)
    }
}

/// Classifies an on-hand quantity.
pub fn classify_stock(quantity: i64) -> Result<StockStatus, ModelError> {
    match quantity {
        q if q < 0 => Err(ModelError::InvalidInput {
            field: "quantity",
            reason: format!("quantity must be non-negative, got {}", q),
        }),
        0 => Ok(StockStatus::Depleted),
        q if q <= LOW_STOCK_THRESHOLD => Ok(StockStatus::Low),
        _ => Ok(StockStatus::Healthy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(classify_stock(0).unwrap(), StockStatus::Depleted);
        assert_eq!(classify_stock(1).unwrap(), StockStatus::Low);
        assert_eq!(classify_stock(10).unwrap(), StockStatus::Low);
        assert_eq!(classify_stock(11).unwrap(), StockStatus::Healthy);
        assert_eq!(classify_stock(i64::MAX).unwrap(), StockStatus::Healthy);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = classify_stock(-1).unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput { field: "quantity", .. }));
    }

    #[test]
    fn attention() {
        assert!(StockStatus::Depleted.needs_attention());
        assert!(StockStatus::Low.needs_attention());
        assert!(!StockStatus::Healthy.needs_attention());
    }
}
