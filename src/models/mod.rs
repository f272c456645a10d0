pub mod donation;
pub mod gallery;
pub mod testimony;
