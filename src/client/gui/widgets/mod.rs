pub mod alert;
pub mod period;
pub mod trace_tree;
pub mod warning_bar;
