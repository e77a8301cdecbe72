pub mod a001_classroom;
pub mod a002_student;
pub mod a003_parent;
pub mod a004_teacher;
