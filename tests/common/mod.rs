// tests/common/mod.rs
//
// Scripted local HTTP server shared by the integration tests:
// one connection per scripted response, then the listener closes.
#![allow(dead_code)]

use std::io::{ BufRead, BufReader, Write };
use std::net::{ TcpListener, TcpStream };
use std::sync::{ Arc, Mutex };
use std::thread;

pub const PAGE: &str = "<html><body><table class=\"stock-table-class\">\
    <tr><th>Symbol</th><th>Company</th><th>Price</th><th>Change</th><th>Volume</th></tr>\
    <tr><td>OGDC</td><td>Oil &amp; Gas Dev</td><td>120.10</td><td>3.25</td><td>1,200,000</td></tr>\
    <tr><td>HBL</td><td>Habib Bank</td><td>98.00</td><td>-1.10</td><td>450,500</td></tr>\
    </table></body></html>";

pub struct Scripted {
    pub url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl Scripted {
    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

fn read_request(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut head = String::new();
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let end = line == "\r\n";
                head.push_str(&line);
                if end { break; }
            }
        }
    }
    head
}

pub fn serve(script: Vec<(u16, &'static str)>) -> Scripted {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    thread::spawn(move || {
        for (status, body) in script {
            let Ok((mut stream, _)) = listener.accept() else { return };
            let head = read_request(&stream);
            seen.lock().unwrap().push(head);
            let resp = format!(
                "HTTP/1.1 {status} {}\r\nContent-Type: text/html; charset=utf-8\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                reason(status),
                body.len()
            );
            let _ = stream.write_all(resp.as_bytes());
            let _ = stream.flush();
        }
    });

    Scripted { url: format!("http://{addr}/market-summary"), requests }
}
