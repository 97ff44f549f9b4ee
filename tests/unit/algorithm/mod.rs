pub mod flood;
pub mod selection;
