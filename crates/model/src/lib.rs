//! # stockreport-model
//!
//! Read-only snapshots handed to the report engine by the data-fetch layer:
//! - **company**: the fiscal identity and contact details of one company
//! - **inventory**: per-product stock lines with optional multi-currency prices
//! - **status**: the three-tier stock classification
//! - **dispatch**: the request object handed to the email collaborator
//!
//! Deserialization is deliberately forgiving: malformed numbers become zero
//! (or absent) instead of failing the whole report.

pub mod company;
pub mod dispatch;
pub mod error;
pub mod inventory;
pub mod numeric;
pub mod price;
pub mod status;

pub use company::Company;
pub use dispatch::{DispatchOptions, EmailAddress, EmailDispatchRequest};
pub use error::ModelError;
pub use inventory::InventoryLine;
pub use price::{PriceMap, UnitPrice, PREFERRED_CURRENCIES};
pub use status::{classify_stock, StockStatus, LOW_STOCK_THRESHOLD};
