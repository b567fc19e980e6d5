pub mod health;
pub mod shipping;
