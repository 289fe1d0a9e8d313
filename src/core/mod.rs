//! Core module containing the record types, errors and service trait

pub mod clock;
pub mod error;
pub mod ids;
pub mod model;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ApiError, ApiResult};
pub use ids::IdGenerator;
pub use model::{
    Invoice, InvoiceStatus, NewProperty, NewTenant, Payment, PaymentStatus, PaymentToggle,
    Property, Snapshot, Tenant, TenantPatch,
};
pub use service::RentalService;
