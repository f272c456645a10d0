pub mod contact;
pub mod donation;
