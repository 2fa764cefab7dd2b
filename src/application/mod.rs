pub mod dashboard;
pub mod data_accessor;
pub mod mixins;
pub mod pizza;
