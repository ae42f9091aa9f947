pub mod index;
pub mod shows;
