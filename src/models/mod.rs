pub mod customer;
pub mod intent;
pub mod order;
pub mod reply;

pub use customer::{Customer, CustomerFields};
pub use intent::Intent;
pub use order::{Order, OrderFields, OrderStatus};
pub use reply::{Reply, ReplyKind};
