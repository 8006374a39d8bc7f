pub mod error;
pub mod health;
pub mod inventory;
pub mod page;
pub mod tags;
