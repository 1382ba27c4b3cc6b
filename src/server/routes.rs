//! Routing for the serve command: an import-hint page and the calendar body.

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

/// `calendar` is the current on-disk .ics text, or None when the file is gone.
pub fn route_request(method: &str, path: &str, calendar: Option<&str>) -> HttpResponse {
    if method != "GET" {
        return error_response(405, "Method Not Allowed", "only GET is supported");
    }
    match path.split('?').next().unwrap_or(path) {
        "/" => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        "/timetable.ics" => match calendar {
            Some(body) => HttpResponse {
                status_code: 200,
                status_text: "OK",
                content_type: "text/calendar; charset=utf-8",
                body: body.to_string(),
            },
            None => error_response(404, "Not Found", "calendar file is missing; run generate first"),
        },
        _ => error_response(404, "Not Found", "unknown path"),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "text/plain; charset=utf-8",
        body: message.to_string(),
    }
}

fn index_html() -> String {
    concat!(
        "<!doctype html><html><head><meta charset=\"utf-8\">",
        "<title>课表</title></head><body>",
        "<h1>课表</h1>",
        "<p><a href=\"/timetable.ics\">下载 timetable.ics</a>，",
        "然后在手机日历应用中导入。</p>",
        "</body></html>"
    )
    .to_string()
}
