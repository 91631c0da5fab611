//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use mini_pokedex::error::{LookupError, NotificationError, StorageError};
use mini_pokedex::history::HistoryStore;
use mini_pokedex::lookup::CreatureLookup;
use mini_pokedex::notify::Notifier;
use mini_pokedex::{CreatureRecord, SearchEntry, Stat};
use reqwest::StatusCode;
use serde_json::{Value, json};

/// The pikachu record used across the flow tests
pub fn pikachu() -> CreatureRecord {
    CreatureRecord {
        name: "pikachu".to_string(),
        types: vec!["electric".to_string()],
        abilities: vec!["static".to_string()],
        stats: vec![Stat { name: "speed".to_string(), value: 90 }],
        sprite_url: Some("http://img/25.png".to_string()),
    }
}

/// Builder for PokeAPI `/pokemon/{id}` response bodies
pub struct CreatureJsonBuilder {
    name: String,
    types: Vec<String>,
    abilities: Vec<String>,
    stats: Vec<(String, u32)>,
    sprite: Option<String>,
}

impl CreatureJsonBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types: Vec::new(),
            abilities: Vec::new(),
            stats: Vec::new(),
            sprite: None,
        }
    }

    pub fn kind(mut self, name: &str) -> Self {
        self.types.push(name.to_string());
        self
    }

    pub fn ability(mut self, name: &str) -> Self {
        self.abilities.push(name.to_string());
        self
    }

    pub fn stat(mut self, name: &str, value: u32) -> Self {
        self.stats.push((name.to_string(), value));
        self
    }

    pub fn sprite(mut self, url: &str) -> Self {
        self.sprite = Some(url.to_string());
        self
    }

    pub fn to_json(&self) -> String {
        let types: Vec<Value> = self
            .types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": "https://pokeapi.co/api/v2/type/0/"}}))
            .collect();
        let abilities: Vec<Value> = self
            .abilities
            .iter()
            .map(|a| json!({"ability": {"name": a}, "is_hidden": false}))
            .collect();
        let stats: Vec<Value> = self
            .stats
            .iter()
            .map(|(n, v)| json!({"base_stat": v, "effort": 0, "stat": {"name": n}}))
            .collect();

        json!({
            "id": 25,
            "name": self.name,
            "types": types,
            "abilities": abilities,
            "stats": stats,
            "sprites": {"front_default": self.sprite, "back_default": null}
        })
        .to_string()
    }
}

/// A request captured by [`StubServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("Request body is not JSON")
    }
}

/// Local HTTP server answering a fixed sequence of responses, one per connection
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Serve `responses` as `(status, body)` pairs, in order
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let (stream, _) = listener.accept().expect("Failed to accept connection");
                let mut reader = BufReader::new(stream);
                let request = read_request(&mut reader);
                recorded.lock().unwrap().push(request);

                let mut stream = reader.into_inner();
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).expect("Failed to write response");
                stream.flush().unwrap();
            }
        });

        Self { base_url, requests, handle: Some(handle) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wait until every response has been served and return the captured requests
    pub fn finish(mut self) -> Vec<RecordedRequest> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("Stub server thread panicked");
        }
        self.requests.lock().unwrap().clone()
    }
}

fn read_request<R: BufRead>(reader: &mut R) -> RecordedRequest {
    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((k, v)) = line.split_once(':') {
            headers.push((k.trim().to_string(), v.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).unwrap();

    RecordedRequest { method, path, headers, body: String::from_utf8(body).unwrap() }
}

/// Lookup fake answering every query with one record, or failing with HTTP 404
pub struct FakeLookup {
    record: Option<CreatureRecord>,
    type_members: Vec<String>,
    pub queries: RefCell<Vec<String>>,
}

impl FakeLookup {
    pub fn returning(record: CreatureRecord) -> Self {
        Self { record: Some(record), type_members: Vec::new(), queries: RefCell::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { record: None, type_members: Vec::new(), queries: RefCell::new(Vec::new()) }
    }

    pub fn with_type_members(mut self, names: &[&str]) -> Self {
        self.type_members = names.iter().map(|n| n.to_string()).collect();
        self
    }

    fn not_found(key: &str) -> LookupError {
        LookupError::Status {
            url: format!("http://fake/{key}"),
            status: StatusCode::NOT_FOUND,
        }
    }
}

impl CreatureLookup for FakeLookup {
    fn fetch_by_name_or_id(&self, query: &str) -> Result<CreatureRecord, LookupError> {
        self.queries.borrow_mut().push(query.to_string());
        self.record.clone().ok_or_else(|| Self::not_found(query))
    }

    fn fetch_by_type(&self, type_name: &str) -> Result<Vec<String>, LookupError> {
        self.queries.borrow_mut().push(type_name.to_string());
        if self.record.is_none() {
            return Err(Self::not_found(type_name));
        }
        Ok(self.type_members.clone())
    }
}

/// Notifier fake that remembers announced names and can be told to fail
#[derive(Default)]
pub struct RecordingNotifier {
    fail: bool,
    pub initialized: usize,
    pub announced: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

impl Notifier for RecordingNotifier {
    fn initialize(&mut self) -> Result<(), NotificationError> {
        self.initialized += 1;
        if self.fail {
            return Err(NotificationError::MissingToken);
        }
        Ok(())
    }

    fn announce(&self, record: &CreatureRecord) -> Result<(), NotificationError> {
        self.announced.borrow_mut().push(record.name.clone());
        if self.fail {
            return Err(NotificationError::RoomNotProvisioned);
        }
        Ok(())
    }
}

/// History store whose every operation fails
#[derive(Default)]
pub struct FailingHistory {
    pub attempts: usize,
}

impl HistoryStore for FailingHistory {
    fn record(&mut self, _query: &str, _payload: &Value) -> Result<(), StorageError> {
        self.attempts += 1;
        Err(StorageError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    fn recent_distinct(&self) -> Result<Vec<SearchEntry>, StorageError> {
        Err(StorageError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }
}

/// Writer that rejects every write, like a closed stdout
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
