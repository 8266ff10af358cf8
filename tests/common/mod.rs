//! Shared fixtures for the storefront SDK integration tests.
//!
//! Provides sample products, a scripted [`CatalogSource`] that replays canned
//! outcomes, and a one-shot loopback HTTP server for wire-level tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use storefront_sdk::{CatalogSource, Product, Result, StorefrontError};

/// A product with predictable field values derived from `id`.
pub fn product(id: i64) -> Product {
    Product {
        id,
        title: format!("Product {}", id),
        price: 10.0 + id as f64 + 0.5,
        image: format!("https://img.example.com/{}.jpg", id),
        category: if id % 2 == 0 { "electronics" } else { "jewelery" }.to_string(),
        description: format!("Description of product {}", id),
        rating: None,
    }
}

/// Products with ids `1..=n`, in order.
pub fn sample_products(n: usize) -> Vec<Product> {
    (1..=n as i64).map(product).collect()
}

/// A genuine fetch-kind error without touching the network.
pub fn fetch_error() -> StorefrontError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    StorefrontError::Fetch(err)
}

// ---------------------------------------------------------------------------
// ScriptedCatalog
// ---------------------------------------------------------------------------

/// One canned response: wait `delay`, then succeed with products or fail.
pub struct Scripted {
    pub delay: Duration,
    pub outcome: Option<Vec<Product>>,
}

impl Scripted {
    pub fn ok(products: Vec<Product>) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Some(products),
        }
    }

    pub fn fail() -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: None,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// [`CatalogSource`] replaying scripted outcomes in order. Clones share
/// the script and the call counter.
#[derive(Clone, Default)]
pub struct ScriptedCatalog {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedCatalog {
    pub fn with_responses(responses: Vec<Scripted>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for ScriptedCatalog {
    fn fetch_catalog(&self) -> Result<Vec<Product>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop_front();
        let scripted = next.expect("no scripted response left");
        if !scripted.delay.is_zero() {
            thread::sleep(scripted.delay);
        }
        scripted.outcome.ok_or_else(fetch_error)
    }
}

// ---------------------------------------------------------------------------
// Loopback HTTP server
// ---------------------------------------------------------------------------

/// Serve exactly one HTTP response on a loopback port.
///
/// Returns the base URL and a handle yielding the raw request head that was
/// received, for header assertions.
pub fn serve_once(status: &str, body: &str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}", addr), handle)
}

/// Accept one connection and hold it open for `hold` without answering.
pub fn serve_silently(hold: Duration) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(hold);
        drop(stream);
    });

    (format!("http://{}", addr), handle)
}

/// JSON array body for `products`, as the catalog endpoint would send it.
pub fn catalog_body(products: &[Product]) -> String {
    serde_json::to_string(products).unwrap()
}
