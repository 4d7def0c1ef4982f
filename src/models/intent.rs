use serde::{Deserialize, Serialize};

/// Classified purpose of an inbound message. `OrderLookup` carries the order
/// id extracted from the message, if one was present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PriceInquiry,
    OrderStatusMenu,
    OrderLookup { order_id: Option<String> },
    Appointment,
    Measurements,
    Address,
    Unknown,
}
