//! # shopdesk-entity
//!
//! Typed schemas for the records served by the remote catalog API. Wire
//! field names follow the API (Spanish column names) while English aliases
//! are accepted on input. Fields the console does not model are kept in an
//! `extra` map so that read-modify-write updates never drop data.

pub mod order;
pub mod payment;
pub mod product;
pub mod record;
pub mod time;
pub mod user;

pub use order::{Order, OrderLine, OrderStatus};
pub use payment::Payment;
pub use product::{Product, ProductDraft};
pub use record::RemoteRecord;
pub use user::{User, UserDraft, UserRole, UserStatus};
