//! Общие DTO и агрегаты Alyka, разделяемые сервером и клиентами.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
