pub mod catalog;
pub mod product;
pub mod query;
pub mod response;

pub use catalog::*;
pub use product::*;
pub use query::*;
pub use response::*;
