pub mod quick_contact;
pub mod whatsapp;
