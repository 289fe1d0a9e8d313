//! Record types held by the store and the payloads that create or change them
//!
//! All types serialize with camelCase field names, which is the shape the
//! frontend reads and writes.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A renter occupying a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: i64,
    pub name: Option<String>,
    pub contact: Option<String>,
    /// Id of the property the tenant lives in (not checked against properties)
    pub unit_id: Option<i64>,
}

impl Tenant {
    /// Overwrite the fields present in `patch`, keep the others
    pub fn apply(&mut self, patch: TenantPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(unit_id) = patch.unit_id {
            self.unit_id = unit_id;
        }
    }
}

/// Body of `POST /api/tenants`; absent fields are stored as `null`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTenant {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub unit_id: Option<i64>,
}

/// Body of `PUT /api/tenants/{id}`
///
/// The outer `Option` tells whether the field was sent at all. A field sent
/// as `null` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub contact: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub unit_id: Option<Option<i64>>,
}

/// A building or unit tenants can be assigned to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub name: Option<String>,
}

/// Body of `POST /api/properties`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewProperty {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn toggled(self) -> Self {
        match self {
            PaymentStatus::Paid => PaymentStatus::Unpaid,
            PaymentStatus::Unpaid => PaymentStatus::Paid,
        }
    }
}

/// Rent status of one tenant for one month
///
/// There is no surrogate id: `(tenant_id, month, year)` identifies the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub tenant_id: i64,
    pub month: i64,
    pub year: i64,
    pub status: PaymentStatus,
}

impl Payment {
    pub fn matches(&self, toggle: &PaymentToggle) -> bool {
        self.tenant_id == toggle.tenant_id && self.month == toggle.month && self.year == toggle.year
    }

    /// Key linking an invoice back to this payment: `"{tenantId}-{year}-{month}"`
    pub fn invoice_key(&self) -> String {
        format!("{}-{}-{}", self.tenant_id, self.year, self.month)
    }
}

/// Body of `POST /api/payments/toggle`
///
/// Each field accepts a JSON integer, a whole-number float such as `3.0`, or
/// a string holding an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentToggle {
    #[serde(deserialize_with = "lenient_int")]
    pub tenant_id: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub month: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub year: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
}

/// Billing record issued the first time a payment period becomes paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    pub payment_id: String,
    pub tenant_id: i64,
    #[serde(with = "issue_date")]
    pub issue_date: NaiveDate,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Everything the store holds, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tenants: Vec<Tenant>,
    pub properties: Vec<Property>,
    pub payments: Vec<Payment>,
    pub invoices: Vec<Invoice>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Float(f64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer) {
        Ok(IntOrString::Int(value)) => Ok(value),
        Ok(IntOrString::Float(value))
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        Ok(IntOrString::Float(value)) => Err(serde::de::Error::custom(format!(
            "expected a whole number, got {}",
            value
        ))),
        Ok(IntOrString::Str(raw)) => raw
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {:?}", raw))),
        Err(_) => Err(serde::de::Error::custom(
            "expected an integer or a string holding one",
        )),
    }
}

mod issue_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tenant_serializes_camel_case() {
        let tenant = Tenant {
            id: 1,
            name: Some("Alice".into()),
            contact: Some("a@x.com".into()),
            unit_id: Some(7),
        };

        assert_eq!(
            serde_json::to_value(&tenant).unwrap(),
            json!({"id": 1, "name": "Alice", "contact": "a@x.com", "unitId": 7})
        );
    }

    #[test]
    fn test_new_tenant_missing_fields_are_null() {
        let tenant: NewTenant = serde_json::from_value(json!({"name": "Bob"})).unwrap();
        assert_eq!(tenant.name.as_deref(), Some("Bob"));
        assert_eq!(tenant.contact, None);
        assert_eq!(tenant.unit_id, None);
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null() {
        let patch: TenantPatch =
            serde_json::from_value(json!({"contact": null, "unitId": 3})).unwrap();

        assert_eq!(patch.name, None);
        assert_eq!(patch.contact, Some(None));
        assert_eq!(patch.unit_id, Some(Some(3)));

        let mut tenant = Tenant {
            id: 1,
            name: Some("Alice".into()),
            contact: Some("a@x.com".into()),
            unit_id: Some(7),
        };
        tenant.apply(patch);

        assert_eq!(tenant.name.as_deref(), Some("Alice"));
        assert_eq!(tenant.contact, None);
        assert_eq!(tenant.unit_id, Some(3));
    }

    #[test]
    fn test_toggle_accepts_numeric_strings() {
        let toggle: PaymentToggle =
            serde_json::from_value(json!({"tenantId": "12", "month": 3, "year": " 2024 "}))
                .unwrap();
        assert_eq!(
            toggle,
            PaymentToggle {
                tenant_id: 12,
                month: 3,
                year: 2024
            }
        );
    }

    #[test]
    fn test_toggle_accepts_whole_floats_only() {
        let toggle: PaymentToggle =
            serde_json::from_value(json!({"tenantId": 12.0, "month": 3.0, "year": 2024}))
                .unwrap();
        assert_eq!(toggle.tenant_id, 12);
        assert_eq!(toggle.month, 3);

        assert!(
            serde_json::from_value::<PaymentToggle>(json!({"tenantId": 1, "month": 3.5, "year": 2024}))
                .is_err()
        );
    }

    #[test]
    fn test_toggle_rejects_missing_and_garbage() {
        assert!(serde_json::from_value::<PaymentToggle>(json!({"tenantId": 1, "month": 3})).is_err());
        assert!(
            serde_json::from_value::<PaymentToggle>(json!({"tenantId": "x", "month": 3, "year": 2024}))
                .is_err()
        );
        assert!(
            serde_json::from_value::<PaymentToggle>(json!({"tenantId": null, "month": 3, "year": 2024}))
                .is_err()
        );
    }

    #[test]
    fn test_invoice_key_orders_year_before_month() {
        let payment = Payment {
            tenant_id: 5,
            month: 3,
            year: 2024,
            status: PaymentStatus::Paid,
        };
        assert_eq!(payment.invoice_key(), "5-2024-3");
    }

    #[test]
    fn test_invoice_wire_format() {
        let invoice = Invoice {
            id: 10,
            payment_id: "5-2024-3".into(),
            tenant_id: 5,
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            amount: 1200.0,
            status: InvoiceStatus::Paid,
        };

        assert_eq!(
            serde_json::to_value(&invoice).unwrap(),
            json!({
                "id": 10,
                "paymentId": "5-2024-3",
                "tenantId": 5,
                "issueDate": "2024-03-09",
                "amount": 1200.0,
                "status": "Paid"
            })
        );
    }

    #[test]
    fn test_payment_status_wire_format() {
        assert_eq!(serde_json::to_value(PaymentStatus::Paid).unwrap(), json!("paid"));
        assert_eq!(serde_json::to_value(PaymentStatus::Unpaid).unwrap(), json!("unpaid"));
        assert_eq!(PaymentStatus::Paid.toggled(), PaymentStatus::Unpaid);
    }
}
