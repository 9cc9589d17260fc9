pub mod artist;
pub mod concerts;

pub use artist::Artist;
pub use concerts::{DateSet, LocationSet, RelationSet};
