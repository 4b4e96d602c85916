use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod fetch_report;
mod fetch_reports;
mod report_content;
mod resolve_report;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        // Reports
        report_content::report_content,
        fetch_reports::fetch_reports,
        fetch_report::fetch_report,
        resolve_report::resolve_report,
    ]
}
