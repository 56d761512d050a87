//! Exit-code behavior of the `pkgstitch` binary.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::process::Command;
use std::thread;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const SHA1_ABC: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";
const SHA256_DEF: &str = "cb8379ac2098aa165029e3938a51da0bcecfc008fd6795f401178647f96c5b34";

fn pkgstitch() -> Command {
    let mut cmd = Command::cargo_bin("pkgstitch").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A port with nothing listening on it.
fn refused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Serve `/game.json`, `/A` and `/B` until the test process exits.
fn serve_scenario() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let manifest = format!(
        r#"{{"pieces":[{{"url":"{base}/A","fileOffset":0,"fileSize":3,"hashValue":"{SHA1_ABC}"}},{{"url":"{base}/B","fileOffset":3,"fileSize":3,"hashValue":"{SHA256_DEF}"}}],"originalFileSize":6}}"#
    );

    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }

            let body = match request_line.split_whitespace().nth(1) {
                Some("/game.json") => manifest.as_bytes(),
                Some("/A") => b"abc".as_slice(),
                Some("/B") => b"def".as_slice(),
                _ => b"not found".as_slice(),
            };
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(body).unwrap();
        }
    });

    base
}

#[test]
fn missing_url_prints_usage_and_exits_1() {
    pkgstitch()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn unreachable_manifest_prints_error_and_exits_1() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("x.pkg");
    let url = format!("http://127.0.0.1:{}/x_sc.pkg", refused_port());

    pkgstitch()
        .args(["-o", out.to_str().unwrap(), &url])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: transport error"))
        .stderr(predicate::str::contains("/x.json"));
}

#[test]
fn complete_run_exits_0() {
    let base = serve_scenario();
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("game.pkg");

    pkgstitch()
        .args(["-o", out.to_str().unwrap(), &format!("{}/game.json", base)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed game.pkg"))
        .stderr(predicate::str::contains("WARN").not());

    assert_eq!(fs::read(&out).unwrap(), b"abcdef");
}
