pub mod predictions;
pub mod recommendations;
