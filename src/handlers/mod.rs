pub mod contact;
pub mod donations;
pub mod gallery;
pub mod testimonies;
