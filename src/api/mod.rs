pub mod groupie;

pub use groupie::{GroupieClient, GroupieError};
