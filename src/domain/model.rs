use serde::{Deserialize, Serialize};

/// A student parsed from a "First Last" name string. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub class_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentClass {
    pub class_id: u32,
    pub teacher: String,
}

/// One row of the student/class join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentWithTeacher {
    pub first_name: String,
    pub last_name: String,
    pub teacher: String,
}
