pub mod demo;
pub mod ops;
pub mod roster;

pub use crate::domain::model::{Student, StudentClass, StudentWithTeacher};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
