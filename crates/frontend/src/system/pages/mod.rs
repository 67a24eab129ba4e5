pub mod admin;
pub mod chat;
pub mod help;
pub mod index;
pub mod login;
pub mod settings;
