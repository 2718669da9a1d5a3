pub mod aggregate;
pub mod decision;
pub mod explain;
pub mod scorer;

pub use aggregate::*;
pub use decision::*;
pub use explain::*;
pub use scorer::*;
