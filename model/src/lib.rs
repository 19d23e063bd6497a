pub mod schema;
pub mod sort;

pub mod prelude {
    pub use crate::schema::*;
    pub use crate::sort::*;
}
