pub mod budget;
pub mod dashboard;
mod entry_fields;
pub mod expenses;
pub mod income;
pub mod login;
pub mod profile;
pub mod register;
pub mod reports;
