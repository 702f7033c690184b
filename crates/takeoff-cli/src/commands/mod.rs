pub mod extract;
pub mod profiles;
