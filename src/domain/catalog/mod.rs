//! Catalog aggregate: entities, pagination, selection and the gateway seam.

pub mod entities;
pub mod pagination;
pub mod repositories;
pub mod selection;
pub mod value_objects;

pub use entities::*;
pub use pagination::*;
pub use repositories::*;
pub use selection::*;
pub use value_objects::*;
