//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications and
//! collected into a single OpenAPI document. Swagger UI serves the interactive
//! documentation at `/api/docs` and the raw spec at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Handlers sharing a path are registered in a single `routes!` call so the
/// OpenAPI router does not see the same path twice.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Registrar", description = "College information API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::course::COURSE_TAG, description = "Course catalog routes"),
        (name = controller::student::STUDENT_TAG, description = "Student record routes"),
        (name = controller::faculty::FACULTY_TAG, description = "Department faculty routes"),
        (name = controller::fee::FEE_TAG, description = "Fee structure routes"),
        (name = controller::notice::NOTICE_TAG, description = "Notice board routes"),
        (name = controller::syllabus::SYLLABUS_TAG, description = "Syllabus routes"),
        (name = controller::timetable::TIMETABLE_TAG, description = "Weekly timetable routes"),
        (name = controller::college::COLLEGE_TAG, description = "College profile routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_admin))
        .routes(routes!(
            controller::course::get_courses,
            controller::course::create_course
        ))
        .routes(routes!(
            controller::course::get_course,
            controller::course::update_course,
            controller::course::delete_course
        ))
        .routes(routes!(controller::course::export_courses))
        .routes(routes!(controller::course::import_courses))
        .routes(routes!(
            controller::student::get_students,
            controller::student::create_student
        ))
        .routes(routes!(
            controller::student::get_student,
            controller::student::update_student,
            controller::student::delete_student
        ))
        .routes(routes!(controller::student::export_students))
        .routes(routes!(controller::student::import_students))
        .routes(routes!(
            controller::faculty::get_faculty,
            controller::faculty::create_faculty
        ))
        .routes(routes!(
            controller::faculty::get_faculty_group,
            controller::faculty::update_faculty,
            controller::faculty::delete_faculty
        ))
        .routes(routes!(controller::faculty::export_faculty))
        .routes(routes!(
            controller::fee::get_fees,
            controller::fee::create_fee
        ))
        .routes(routes!(
            controller::fee::get_fee,
            controller::fee::update_fee,
            controller::fee::delete_fee
        ))
        .routes(routes!(controller::fee::export_fees))
        .routes(routes!(controller::fee::import_fees))
        .routes(routes!(
            controller::notice::get_notices,
            controller::notice::create_notice
        ))
        .routes(routes!(
            controller::notice::get_notice,
            controller::notice::update_notice,
            controller::notice::delete_notice
        ))
        .routes(routes!(controller::notice::export_notices))
        .routes(routes!(controller::notice::import_notices))
        .routes(routes!(
            controller::syllabus::get_syllabus,
            controller::syllabus::create_syllabus
        ))
        .routes(routes!(
            controller::syllabus::get_syllabus_entry,
            controller::syllabus::update_syllabus,
            controller::syllabus::delete_syllabus
        ))
        .routes(routes!(controller::syllabus::export_syllabus))
        .routes(routes!(
            controller::timetable::get_timetables,
            controller::timetable::create_timetable
        ))
        .routes(routes!(
            controller::timetable::get_timetable,
            controller::timetable::update_timetable,
            controller::timetable::delete_timetable
        ))
        .routes(routes!(controller::timetable::export_timetables))
        .routes(routes!(
            controller::college::get_college,
            controller::college::put_college
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
