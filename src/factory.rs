//! Request factories shared by the crate's unit tests.

pub(crate) use registrar_test_utils::fixtures::factory::insert_mock_admin;

use chrono::{Duration, Utc};

use crate::model::{
    college::CollegeRequest,
    course::CourseRequest,
    faculty::{FacultyMember, FacultyRequest},
    fee::FeeRequest,
    notice::NoticeRequest,
    student::StudentRequest,
    syllabus::{SyllabusRequest, SyllabusSubject},
    timetable::{TimetableRequest, TimetableSlot},
};

pub(crate) fn mock_course_request(name: &str) -> CourseRequest {
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

pub(crate) fn mock_student_request(roll_no: &str) -> StudentRequest {
    StudentRequest {
        roll_no: roll_no.to_string(),
        name: "Asha Rao".to_string(),
        course: "BCA".to_string(),
        semester: "1".to_string(),
        email: "asha@college.edu".to_string(),
        phone: "9000000001".to_string(),
        date_of_birth: None,
        admission_date: None,
        address: None,
    }
}

#[allow(dead_code)]
pub(crate) fn mock_fee_request(course: &str) -> FeeRequest {
    FeeRequest {
        course: course.to_string(),
        admission_fee: 5000,
        semwise_fee: 12000,
        hostel_fee: Some(30000),
        bus_fee: None,
        scholarship: None,
        payment_link: None,
    }
}

/// A notice published an hour ago with no expiry, Active by default.
pub(crate) fn mock_notice_request(title: &str) -> NoticeRequest {
    NoticeRequest {
        title: title.to_string(),
        description: "<p>Details to follow.</p>".to_string(),
        publish_at: Utc::now().naive_utc() - Duration::hours(1),
        expires_on: None,
        posted_by: Some("Registrar Office".to_string()),
        audience: None,
        attachment_url: None,
    }
}

pub(crate) fn mock_faculty_request(department: &str) -> FacultyRequest {
    FacultyRequest {
        department: department.to_string(),
        hod_name: "Dr. S. Iyer".to_string(),
        members: vec![
            FacultyMember {
                name: "Dr. S. Iyer".to_string(),
                subject: "Data Structures".to_string(),
                email: Some("s.iyer@college.edu".to_string()),
                phone: None,
                qualification: Some("PhD".to_string()),
            },
            FacultyMember {
                name: "P. Menon".to_string(),
                subject: "Operating Systems".to_string(),
                email: None,
                phone: None,
                qualification: Some("MCA".to_string()),
            },
        ],
    }
}

pub(crate) fn mock_syllabus_request(course: &str, semester: &str) -> SyllabusRequest {
    SyllabusRequest {
        course: course.to_string(),
        semester: semester.to_string(),
        subjects: vec![
            SyllabusSubject {
                name: "Digital Logic".to_string(),
                code: "BCA-101".to_string(),
                marks: Some(100),
                credits: Some(4),
                content: None,
            },
            SyllabusSubject {
                name: "Programming in C".to_string(),
                code: "BCA-102".to_string(),
                marks: Some(100),
                credits: Some(4),
                content: None,
            },
        ],
        reference_books: None,
    }
}

pub(crate) fn mock_timetable_request(course: &str, semester: &str) -> TimetableRequest {
    TimetableRequest {
        course: course.to_string(),
        semester: semester.to_string(),
        slots: vec![
            TimetableSlot {
                day: "Monday".to_string(),
                time: "09:00-10:00".to_string(),
                subject: "Digital Logic".to_string(),
                faculty: Some("Dr. S. Iyer".to_string()),
                room: Some("A-101".to_string()),
            },
            TimetableSlot {
                day: "Monday".to_string(),
                time: "10:00-11:00".to_string(),
                subject: "Programming in C".to_string(),
                faculty: Some("P. Menon".to_string()),
                room: None,
            },
        ],
    }
}

pub(crate) fn mock_college_request() -> CollegeRequest {
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
