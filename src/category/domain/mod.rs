//! Domain model for task categories.

mod category;
mod error;
mod ids;
mod name;

pub use category::{Category, NewCategory};
pub use error::CategoryDomainError;
pub use ids::CategoryId;
pub use name::CategoryName;
