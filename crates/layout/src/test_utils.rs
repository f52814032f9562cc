use crate::document::Page;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use stockreport_model::{Company, InventoryLine};
use stockreport_types::Size;

pub fn a4_page() -> Page {
    Page::new(1, Size::new(210.0, 297.0))
}

pub fn fixed_timestamp() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-10-19T14:05:00-05:00").unwrap()
}

pub fn acme() -> Company {
    Company::new("900123456-7", "Acme SA")
        .with_address("Calle 100 # 15-20, Bogotá")
        .with_phone("601 555 0100")
}

pub fn line(code: &str, quantity: i64, cop_price: Option<i64>) -> InventoryLine {
    let line = InventoryLine::new(code, format!("Producto {}", code), quantity);
    match cop_price {
        Some(price) => line.with_currency_price("COP", Decimal::from(price)),
        None => line,
    }
}

pub fn texts(page: &Page) -> Vec<&str> {
    page.text_runs().map(|run| run.content.as_str()).collect()
}
