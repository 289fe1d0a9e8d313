//! In-memory implementation of RentalService

use crate::core::clock::{Clock, SystemClock};
use crate::core::error::{ApiError, ApiResult};
use crate::core::ids::IdGenerator;
use crate::core::model::{
    Invoice, InvoiceStatus, NewProperty, NewTenant, Payment, PaymentStatus, PaymentToggle,
    Property, Snapshot, Tenant, TenantPatch,
};
use crate::core::service::RentalService;
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Amount billed on every invoice unless configured otherwise
pub const DEFAULT_INVOICE_AMOUNT: f64 = 1200.0;

/// In-memory rental store
///
/// All four collections sit behind a single `RwLock`, and every operation
/// holds it for its whole scan-and-mutate. Clones share the same data.
#[derive(Clone)]
pub struct InMemoryRentalService {
    data: Arc<RwLock<Snapshot>>,
    ids: Arc<IdGenerator>,
    clock: Arc<dyn Clock>,
    invoice_amount: f64,
}

impl InMemoryRentalService {
    /// Create an empty store on the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty store reading time from `clock`
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(clock);
        Self {
            data: Arc::new(RwLock::new(Snapshot::default())),
            ids: Arc::new(IdGenerator::new(clock.clone())),
            clock,
            invoice_amount: DEFAULT_INVOICE_AMOUNT,
        }
    }

    /// Set the amount billed on newly issued invoices
    pub fn with_invoice_amount(mut self, amount: f64) -> Self {
        self.invoice_amount = amount;
        self
    }

    fn read(&self) -> ApiResult<RwLockReadGuard<'_, Snapshot>> {
        self.data
            .read()
            .map_err(|e| ApiError::internal(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, Snapshot>> {
        self.data
            .write()
            .map_err(|e| ApiError::internal(format!("Failed to acquire write lock: {}", e)))
    }

    /// Issue an invoice for `payment` unless its period already has one
    fn issue_invoice(&self, data: &mut Snapshot, payment: &Payment) {
        let payment_id = payment.invoice_key();
        if data.invoices.iter().any(|inv| inv.payment_id == payment_id) {
            return;
        }

        let invoice = Invoice {
            id: self.ids.next_id(),
            payment_id,
            tenant_id: payment.tenant_id,
            issue_date: self.clock.today(),
            amount: self.invoice_amount,
            status: InvoiceStatus::Paid,
        };
        tracing::info!(
            invoice_id = invoice.id,
            payment_id = %invoice.payment_id,
            amount = invoice.amount,
            "Created invoice"
        );
        data.invoices.push(invoice);
    }
}

impl Default for InMemoryRentalService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalService for InMemoryRentalService {
    async fn snapshot(&self) -> ApiResult<Snapshot> {
        Ok(self.read()?.clone())
    }

    async fn add_tenant(&self, tenant: NewTenant) -> ApiResult<Tenant> {
        let mut data = self.write()?;

        let tenant = Tenant {
            id: self.ids.next_id(),
            name: tenant.name,
            contact: tenant.contact,
            unit_id: tenant.unit_id,
        };
        data.tenants.push(tenant.clone());

        tracing::info!(tenant_id = tenant.id, unit_id = ?tenant.unit_id, "Added tenant");
        Ok(tenant)
    }

    async fn update_tenant(&self, id: i64, patch: TenantPatch) -> ApiResult<Tenant> {
        let mut data = self.write()?;

        let tenant = data
            .tenants
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::tenant_not_found(id))?;
        tenant.apply(patch);

        tracing::info!(tenant_id = id, unit_id = ?tenant.unit_id, "Updated tenant");
        Ok(tenant.clone())
    }

    async fn delete_tenant(&self, id: i64) -> ApiResult<usize> {
        let mut data = self.write()?;

        let before = data.tenants.len();
        data.tenants.retain(|t| t.id != id);
        if data.tenants.len() == before {
            return Err(ApiError::tenant_not_found(id));
        }

        let payments_before = data.payments.len();
        data.payments.retain(|p| p.tenant_id != id);
        let removed = payments_before - data.payments.len();

        tracing::info!(tenant_id = id, payments_removed = removed, "Deleted tenant");
        Ok(removed)
    }

    async fn add_property(&self, property: NewProperty) -> ApiResult<Property> {
        let mut data = self.write()?;

        let property = Property {
            id: self.ids.next_id(),
            name: property.name,
        };
        data.properties.push(property.clone());

        tracing::info!(property_id = property.id, "Added property");
        Ok(property)
    }

    async fn delete_property(&self, id: i64) -> ApiResult<()> {
        let mut data = self.write()?;

        if data.tenants.iter().any(|t| t.unit_id == Some(id)) {
            return Err(ApiError::PropertyOccupied { id });
        }

        let before = data.properties.len();
        data.properties.retain(|p| p.id != id);
        if data.properties.len() == before {
            return Err(ApiError::property_not_found(id));
        }

        tracing::info!(property_id = id, "Deleted property");
        Ok(())
    }

    async fn toggle_payment(&self, toggle: PaymentToggle) -> ApiResult<Payment> {
        let mut data = self.write()?;

        let payment = match data.payments.iter().position(|p| p.matches(&toggle)) {
            Some(index) => {
                let existing = &mut data.payments[index];
                existing.status = existing.status.toggled();
                existing.clone()
            }
            None => {
                let created = Payment {
                    tenant_id: toggle.tenant_id,
                    month: toggle.month,
                    year: toggle.year,
                    status: PaymentStatus::Paid,
                };
                data.payments.push(created.clone());
                created
            }
        };

        if payment.status == PaymentStatus::Paid {
            self.issue_invoice(&mut data, &payment);
        }

        tracing::info!(
            tenant_id = payment.tenant_id,
            month = payment.month,
            year = payment.year,
            status = ?payment.status,
            "Toggled payment"
        );
        Ok(payment)
    }
}
