//! Request, response, and application data models.

pub mod admin;
pub mod api;
pub mod app;
pub mod college;
pub mod course;
pub mod faculty;
pub mod fee;
pub mod notice;
pub mod session;
pub mod student;
pub mod syllabus;
pub mod timetable;
