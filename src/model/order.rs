use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Represents a customer order.
///
/// Orders are built once at batch start and read-only thereafter. The id is
/// unique within a batch; nothing else is an invariant.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub total: f64,
    pub customer_name: String,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the batch
    /// * `total` - Total price for the order
    /// * `customer_name` - Name of the customer placing the order
    pub fn new(id: impl Into<OrderId>, total: f64, customer_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            total,
            customer_name: customer_name.into(),
        }
    }
}

/// The ten fixed demo orders processed by the binary.
///
/// Integration tests reuse the same batch so "a batch" always means the same
/// thing across the crate.
pub fn sample_batch() -> Vec<Order> {
    vec![
        Order::new(1, 120.50, "Ana López"),
        Order::new(2, 89.99, "Carlos Gómez"),
        Order::new(3, 45.00, "Marta Ruiz"),
        Order::new(4, 300.10, "Diego Torres"),
        Order::new(5, 15.75, "Laura Fernández"),
        Order::new(6, 220.00, "Pedro Ramírez"),
        Order::new(7, 75.30, "Sofía Medina"),
        Order::new(8, 50.00, "Juan Pérez"),
        Order::new(9, 199.99, "Lucía Vargas"),
        Order::new(10, 130.00, "Jorge Castillo"),
    ]
}
