pub mod activity;
pub mod message;
pub mod refdata;
