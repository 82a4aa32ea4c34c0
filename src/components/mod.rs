pub mod goal_widget;
pub mod task_row;
