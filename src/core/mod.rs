pub mod event;
pub mod goal;
pub mod habit;
pub mod task;
pub mod task_manager;
