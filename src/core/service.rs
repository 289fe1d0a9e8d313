//! Service trait the HTTP handlers depend on

use crate::core::error::ApiResult;
use crate::core::model::{
    NewProperty, NewTenant, Payment, PaymentToggle, Property, Snapshot, Tenant, TenantPatch,
};
use async_trait::async_trait;

/// Store of tenants, properties, payments and invoices
///
/// Implementations must make each method atomic with respect to the others:
/// an id assignment, an existence check and the mutation that follows it
/// happen under one critical section.
#[async_trait]
pub trait RentalService: Send + Sync {
    /// Copy of the whole store
    async fn snapshot(&self) -> ApiResult<Snapshot>;

    /// Create a tenant with a fresh id
    async fn add_tenant(&self, tenant: NewTenant) -> ApiResult<Tenant>;

    /// Overwrite the fields present in `patch`
    async fn update_tenant(&self, id: i64, patch: TenantPatch) -> ApiResult<Tenant>;

    /// Remove a tenant and every payment recorded for them
    ///
    /// Returns the number of payments removed along with the tenant.
    async fn delete_tenant(&self, id: i64) -> ApiResult<usize>;

    /// Create a property with a fresh id
    async fn add_property(&self, property: NewProperty) -> ApiResult<Property>;

    /// Remove a property nobody lives in
    ///
    /// Occupancy is checked before existence, so an id some tenant points at
    /// is reported as occupied even when no such property exists.
    async fn delete_property(&self, id: i64) -> ApiResult<()>;

    /// Flip the paid status of a payment period, creating it as paid if new
    ///
    /// Whenever the period ends up paid, an invoice is issued for it unless
    /// one already exists. Returns the payment as it stands afterwards.
    async fn toggle_payment(&self, toggle: PaymentToggle) -> ApiResult<Payment>;
}
