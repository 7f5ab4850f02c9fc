pub mod inspector;
pub mod presence;
