//! # rentdesk
//!
//! A small property-management REST backend. It keeps tenants, properties,
//! monthly rent payments and generated invoices in memory and serves them as
//! JSON over HTTP.
//!
//! ## Routes
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/api/data` | whole store |
//! | POST | `/api/tenants` | 201 tenant |
//! | PUT | `/api/tenants/{id}` | updated tenant / 404 |
//! | DELETE | `/api/tenants/{id}` | message / 404 |
//! | POST | `/api/properties` | 201 property |
//! | DELETE | `/api/properties/{id}` | message / 400 occupied / 404 |
//! | POST | `/api/payments/toggle` | message |
//!
//! Toggling a payment period to paid issues one invoice for that period; the
//! invoice is never duplicated by later toggles.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rentdesk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_service(InMemoryRentalService::new())
//!         .serve("127.0.0.1:5000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::{ConfigError, ServerConfig};
    pub use crate::core::{
        ApiError, ApiResult, Clock, FixedClock, Invoice, InvoiceStatus, NewProperty, NewTenant,
        Payment, PaymentStatus, PaymentToggle, Property, RentalService, Snapshot, SystemClock,
        Tenant, TenantPatch,
    };
    pub use crate::server::{AppState, MessageResponse, ServerBuilder};
    pub use crate::storage::{DEFAULT_INVOICE_AMOUNT, InMemoryRentalService};
}
