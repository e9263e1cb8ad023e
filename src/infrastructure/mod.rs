//! 基础设施层

pub mod completion;
pub mod database;
pub mod logger;
