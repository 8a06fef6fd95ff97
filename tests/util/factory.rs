//! Request factories for the endpoint tests.

pub use registrar_test_utils::fixtures::factory::insert_mock_admin;

use registrar::model::{
    college::CollegeRequest,
    course::CourseRequest,
    timetable::{TimetableRequest, TimetableSlot},
};

pub fn mock_course_request(name: &str) -> CourseRequest {
    CourseRequest {
        name: name.to_string(),
        department: "Computer Applications".to_string(),
        affiliation: "State University".to_string(),
        duration: "3 Years".to_string(),
        total_seats: 60,
        fee_structure: "45000/year".to_string(),
        other_fee: None,
        scholarship: None,
        eligibility: Some("10+2 with Mathematics".to_string()),
        hod_name: Some("Dr. S. Iyer".to_string()),
        counsellor: None,
    }
}

pub fn mock_timetable_request(course: &str) -> TimetableRequest {
    TimetableRequest {
        course: course.to_string(),
        semester: "1".to_string(),
        slots: vec![TimetableSlot {
            day: "Monday".to_string(),
            time: "09:00-10:00".to_string(),
            subject: "Digital Logic".to_string(),
            faculty: Some("Dr. S. Iyer".to_string()),
            room: Some("A-101".to_string()),
        }],
    }
}

pub fn mock_college_request() -> CollegeRequest {
    CollegeRequest {
        name: "City College".to_string(),
        established_year: 1985,
        affiliation: "State University".to_string(),
        accreditation: Some("NAAC A".to_string()),
        address: "12 College Road".to_string(),
        phone: "0400000000".to_string(),
        email: "office@college.edu".to_string(),
        website: None,
        principal: None,
    }
}
