//! Order and order-line records.

pub mod line;
pub mod model;
pub mod status;

pub use line::OrderLine;
pub use model::Order;
pub use status::OrderStatus;
