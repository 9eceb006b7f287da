use super::customer::{Customer, CustomerRecord};
use crate::error::AppError;
use crate::input::Fields;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Row of table `pedido`. `placed_at` is a naive UTC timestamp set by the database on insert.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Order {
    pub id: i32,
    #[sqlx(rename = "cliente_id")]
    pub customer_id: i32,
    #[sqlx(rename = "fecha_pedido")]
    pub placed_at: NaiveDateTime,
}

/// Order joined with its owning customer, as read by a single query.
/// The customer's id is `order.customer_id`; the join is on that column.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct OrderWithCustomer {
    #[sqlx(flatten)]
    pub order: Order,
    #[sqlx(rename = "c_nombre")]
    pub customer_name: String,
    #[sqlx(rename = "c_email")]
    pub customer_email: String,
}

impl OrderWithCustomer {
    pub fn customer(&self) -> Customer {
        Customer {
            id: self.order.customer_id,
            name: self.customer_name.clone(),
            email: self.customer_email.clone(),
        }
    }

    pub fn to_record(&self) -> OrderRecord {
        self.order.to_record(&self.customer())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderRecord {
    pub id: i32,
    pub cliente_id: i32,
    pub fecha_pedido: String,
    pub cliente: CustomerRecord,
}

impl Order {
    /// Serialize with the full owning customer embedded.
    pub fn to_record(&self, customer: &Customer) -> OrderRecord {
        OrderRecord {
            id: self.id,
            cliente_id: self.customer_id,
            fecha_pedido: iso_timestamp(&self.placed_at),
            cliente: customer.to_record(),
        }
    }
}

/// ISO-8601 without offset; microseconds only when non-zero (`2024-03-01T10:15:00`, `2024-03-01T10:15:00.250000`).
pub fn iso_timestamp(ts: &NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: i32,
}

impl NewOrder {
    pub fn from_fields(fields: &Fields) -> Result<Self, AppError> {
        Ok(Self {
            customer_id: fields.integer("cliente_id")?,
        })
    }
}
