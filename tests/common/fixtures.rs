#![allow(dead_code)]

use rust_decimal::Decimal;
use stockreport::{Company, InventoryLine};

pub fn acme() -> Company {
    Company::new("900123456-7", "Acme SA")
        .with_address("Calle 100 # 15-20")
        .with_phone("601 555 0100")
}

/// P1 is out of stock, P2 holds 15 units at 2000 COP.
pub fn acme_lines() -> Vec<InventoryLine> {
    vec![
        InventoryLine::new("P1", "Widget", 0).with_currency_price("COP", Decimal::from(1000)),
        InventoryLine::new("P2", "Gadget", 15).with_currency_price("COP", Decimal::from(2000)),
    ]
}

/// `count` lines with codes `C000`, `C001`, ... all healthy at 100 COP.
pub fn many_lines(count: usize) -> Vec<InventoryLine> {
    (0..count)
        .map(|i| {
            InventoryLine::new(format!("C{:03}", i), format!("Producto {}", i), 20)
                .with_currency_price("COP", Decimal::from(100))
        })
        .collect()
}

pub const COMPANY_JSON: &str = r#"{
    "nit": "900123456-7",
    "nombre": "Acme SA",
    "direccion": "Calle 100 # 15-20",
    "telefono": "601 555 0100"
}"#;

/// A paginated export as the inventory endpoint returns it.
pub const INVENTORY_JSON: &str = r#"{
    "count": 3,
    "results": [
        { "id": 1, "producto_codigo": "P1", "producto_nombre": "Widget", "cantidad": 0,
          "producto_precios": { "COP": 1000 } },
        { "id": 2, "producto_codigo": "P2", "producto_nombre": "Gadget", "cantidad": "15",
          "producto_precios": "{\"cop\": \"2000\"}" },
        { "id": 3, "producto_codigo": "P3", "producto_nombre": "Gizmo", "cantidad": 4,
          "producto_precio": "abc", "fecha_actualizacion": "2026-10-01T08:00:00-05:00" }
    ]
}"#;
