//! Data access layer repositories.
//!
//! One repository per collection. Repositories are the only place
//! `created_at` / `updated_at` are stamped; callers never set them. Deletes
//! return a [`sea_orm::DeleteResult`] and are a no-op for absent ids.

pub mod admin;
pub mod college;
pub mod course;
pub mod faculty;
pub mod fee;
pub mod notice;
pub mod student;
pub mod syllabus;
pub mod timetable;
