pub mod databases;
pub mod executors;
