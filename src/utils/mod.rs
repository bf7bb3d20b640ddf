pub mod links;
pub mod regions;
