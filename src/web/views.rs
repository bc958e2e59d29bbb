pub mod evaluate;
pub mod predict;
pub mod status;
pub mod train;
