mod auth;
mod college;
mod course;
mod timetable;
