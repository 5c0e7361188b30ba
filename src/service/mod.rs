pub mod chat_service;
pub mod completion_service;
pub mod month_grid;
pub mod schedule_service;
