pub use super::admins::Entity as Admins;
pub use super::college::Entity as College;
pub use super::courses::Entity as Courses;
pub use super::faculty::Entity as Faculty;
pub use super::fees::Entity as Fees;
pub use super::notices::Entity as Notices;
pub use super::students::Entity as Students;
pub use super::syllabus::Entity as Syllabus;
pub use super::timetables::Entity as Timetables;
