pub mod a601_stored_report;
pub mod a602_task;
pub mod a603_feedback;

pub use a601_stored_report::ReportsPage;
pub use a602_task::TasksPage;
pub use a603_feedback::FeedbackPage;
