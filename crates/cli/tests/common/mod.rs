//! Minimal HTTP stub standing in for the Tortuga web service.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub struct StubServer {
    pub url: String,
    requests: Receiver<String>,
}

impl StubServer {
    /// Answers every request with `status` and `body`.
    pub fn start(status: &str, body: &str) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let url = format!("http://{}", listener.local_addr()?);
        let (tx, requests) = mpsc::channel();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut raw = Vec::new();
                let mut buf = [0u8; 1024];
                while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => raw.extend_from_slice(&buf[..n]),
                    }
                }
                if tx.send(String::from_utf8_lossy(&raw).into_owned()).is_err() {
                    break;
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });
        Ok(Self { url, requests })
    }

    pub fn rules(rules: &[(&str, &str)]) -> std::io::Result<Self> {
        let items: Vec<_> = rules
            .iter()
            .map(|(app, name)| serde_json::json!({"applicationName": app, "name": name}))
            .collect();
        Self::start("200 OK", &serde_json::json!({ "rules": items }).to_string())
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.try_iter().collect()
    }
}

/// A `get-rule-list` command isolated from the caller's environment and
/// config file.
pub fn get_rule_list(home: &std::path::Path) -> std::process::Command {
    use assert_cmd::prelude::*;
    let mut cmd = std::process::Command::cargo_bin("get-rule-list").expect("binary built");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("TORTUGA_WS_URL")
        .env_remove("TORTUGA_WS_USERNAME")
        .env_remove("TORTUGA_WS_PASSWORD")
        .env_remove("TORTUGA_WS_NO_VERIFY")
        .env_remove("TORTUGA_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy");
    cmd
}
