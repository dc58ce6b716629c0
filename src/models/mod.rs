pub mod aggregate;
pub mod vacancy;
