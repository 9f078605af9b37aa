//! Raw HTTP responders for cases a mock server cannot produce, such as bodies
//! without a Content-Length or connections closed before the declared length.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;

/// Serves exactly one request: reads the request head, writes `head` followed
/// by `body`, then closes the connection. Returns the URL to request.
pub(crate) fn serve_once(head: &'static str, body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 2 {
            line.clear();
        }
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
    });
    format!("http://{addr}/file.bin")
}

/// Address of a port nothing listens on.
pub(crate) fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/file")
}
