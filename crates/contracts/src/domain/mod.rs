pub mod a601_stored_report;
pub mod a602_task;
pub mod a603_feedback;
pub mod common;
