pub mod chat;
pub mod customer;
pub mod health;
