pub mod diagnostic_op;
pub mod event_op;
pub mod group_op;
pub mod media_op;
pub mod notify_op;
pub mod op_helper;
