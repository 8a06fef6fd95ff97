pub mod prelude;

pub mod admins;
pub mod college;
pub mod courses;
pub mod faculty;
pub mod fees;
pub mod notices;
pub mod students;
pub mod syllabus;
pub mod timetables;
