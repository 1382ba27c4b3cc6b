use sdust_ical::server::routes::route_request;

const SAMPLE: &str = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";

#[test]
fn index_page_links_to_the_calendar() {
    let response = route_request("GET", "/", Some(SAMPLE));
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "text/html; charset=utf-8");
    assert!(response.body.contains("/timetable.ics"));
}

#[test]
fn calendar_is_served_as_text_calendar() {
    let response = route_request("GET", "/timetable.ics", Some(SAMPLE));
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "text/calendar; charset=utf-8");
    assert_eq!(response.body, SAMPLE);

    let http = response.to_http_string();
    assert!(http.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(http.contains(&format!("Content-Length: {}", SAMPLE.len())));
}

#[test]
fn query_strings_are_ignored_for_routing() {
    let response = route_request("GET", "/timetable.ics?from=qr", Some(SAMPLE));
    assert_eq!(response.status_code, 200);
}

#[test]
fn missing_calendar_file_is_not_found() {
    let response = route_request("GET", "/timetable.ics", None);
    assert_eq!(response.status_code, 404);
}

#[test]
fn unknown_path_is_not_found() {
    let response = route_request("GET", "/grades.ics", Some(SAMPLE));
    assert_eq!(response.status_code, 404);
}

#[test]
fn non_get_methods_are_rejected() {
    let response = route_request("POST", "/timetable.ics", Some(SAMPLE));
    assert_eq!(response.status_code, 405);
}
