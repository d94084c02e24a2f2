pub mod cookies;
pub mod error;
pub mod extract;
pub mod id;
pub mod params;
