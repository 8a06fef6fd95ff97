//! HTTP request handlers.
//!
//! One controller module per entity plus authentication. Handlers extract the
//! session and application state, call into the service layer, and map results
//! to HTTP responses. Reads are public; every mutation first passes through
//! [`util::require_admin`].

pub mod auth;
pub mod college;
pub mod course;
pub mod faculty;
pub mod fee;
pub mod notice;
pub mod student;
pub mod syllabus;
pub mod timetable;
pub mod util;
