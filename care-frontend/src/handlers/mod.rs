pub mod catalog;
pub mod discharge;
pub mod health;
pub mod invoices;
pub mod options;
pub mod patients;
pub mod pricing;
