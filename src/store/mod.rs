use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use crate::models::{Customer, CustomerFields, Order, OrderFields, OrderStatus};

#[derive(Default)]
struct Records {
    customers: HashMap<String, Customer>,
    orders: HashMap<String, Order>,
    // Reserved extension points, not touched by any operation yet.
    #[allow(dead_code)]
    appointments: HashMap<String, serde_json::Value>,
    #[allow(dead_code)]
    measurements: HashMap<String, serde_json::Value>,
}

/// Process-lifetime record holder for customers and orders. All state is
/// volatile: a restart loses everything. A single mutex serializes access,
/// so concurrent writes to the same key are last-write-wins.
pub struct Store {
    records: Mutex<Records>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Records::default()),
        }
    }

    /// Upserts a customer keyed by phone number. Fields merge into any
    /// existing record; a new record gets a fresh creation timestamp.
    /// Phone format is not validated.
    pub fn save_customer(&self, phone: &str, fields: CustomerFields) -> Customer {
        let mut records = self.records.lock().unwrap();
        let customer = records
            .customers
            .entry(phone.to_string())
            .or_insert_with(|| Customer {
                phone: phone.to_string(),
                name: None,
                created_at: Utc::now(),
                extra: HashMap::new(),
            });

        if fields.name.is_some() {
            customer.name = fields.name;
        }
        customer.extra.extend(fields.extra);

        customer.clone()
    }

    pub fn get_customer(&self, phone: &str) -> Option<Customer> {
        self.records.lock().unwrap().customers.get(phone).cloned()
    }

    /// Creates an order with a time-based `ORD<millis>` id, bumping the
    /// suffix on collision so every call returns a previously-unseen id.
    /// New orders always start out `Pending`.
    pub fn create_order(&self, customer_phone: &str, fields: OrderFields) -> Order {
        let mut records = self.records.lock().unwrap();

        let mut suffix = Utc::now().timestamp_millis();
        let order_id = loop {
            let candidate = format!("ORD{suffix}");
            if !records.orders.contains_key(&candidate) {
                break candidate;
            }
            suffix += 1;
        };

        let order = Order {
            order_id: order_id.clone(),
            customer_phone: customer_phone.to_string(),
            status: OrderStatus::Pending,
            amount: fields.amount,
            created_at: Utc::now(),
            extra: fields.extra,
        };
        records.orders.insert(order_id, order.clone());
        order
    }

    /// Inserts an order under its own id, for records entered outside the
    /// chat flow (there is no order-creation endpoint). Replaces any
    /// existing order with the same id.
    pub fn insert_order(&self, order: Order) {
        let mut records = self.records.lock().unwrap();
        records.orders.insert(order.order_id.clone(), order);
    }

    pub fn get_order(&self, order_id: &str) -> Option<Order> {
        self.records.lock().unwrap().orders.get(order_id).cloned()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
