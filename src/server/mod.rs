//! Tiny HTTP server so a phone on the same network can fetch the generated
//! calendar. One connection at a time; the file is re-read per request so a
//! regenerated timetable is picked up without restarting.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;

pub mod routes;

pub fn run_server(bind_addr: &str, ics_path: &Path) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    println!(
        "serving {} on http://{bind_addr}/timetable.ics",
        ics_path.display()
    );

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream, ics_path) {
                    eprintln!("request error: {err}");
                }
            }
            Err(err) => eprintln!("connection failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream, ics_path: &Path) -> std::io::Result<()> {
    let mut buffer = [0_u8; 16_384];
    let bytes_read = stream.read(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(());
    }

    let request = String::from_utf8_lossy(&buffer[..bytes_read]);
    let request_line = request.lines().next().unwrap_or_default();
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET");
    let path = request_parts.next().unwrap_or("/");

    let calendar = std::fs::read_to_string(ics_path).ok();
    let response = routes::route_request(method, path, calendar.as_deref()).to_http_string();
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    Ok(())
}
