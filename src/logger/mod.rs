//! Logger module
//!
//! Provides logging utilities for the order service including:
//! - Startup and shutdown messages
//! - Per-request logging with timing, plus formatted access log lines
//! - Error and warning logging
//! - File-based logging support

mod format;
mod level;
pub mod writer;

pub use format::AccessLogEntry;
pub use level::LogLevel;

use crate::config::Config;
use chrono::Local;
use hyper::{Method, StatusCode, Uri};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> io::Result<()> {
    let level: LogLevel = config
        .logging
        .level
        .parse()
        .map_err(|e: String| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    level::set_max_level(level);

    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Prefix a message with timestamp and level label
fn line(level: LogLevel, message: &str) -> String {
    format!(
        "{} - orders_api - {} - {message}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level.label()
    )
}

fn emit(level: LogLevel, message: &str) {
    if !level::enabled(level) {
        return;
    }
    let text = line(level, message);
    match (writer::get(), level) {
        (Some(w), LogLevel::Error | LogLevel::Warn) => w.write_error(&text),
        (Some(w), _) => w.write_info(&text),
        (None, LogLevel::Error | LogLevel::Warn) => eprintln!("{text}"),
        (None, _) => println!("{text}"),
    }
}

pub fn log_info(message: &str) {
    emit(LogLevel::Info, message);
}

pub fn log_debug(message: &str) {
    emit(LogLevel::Debug, message);
}

pub fn log_error(message: &str) {
    emit(LogLevel::Error, message);
}

pub fn log_warning(message: &str) {
    emit(LogLevel::Warn, message);
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, order_count: usize) {
    log_info("======================================");
    log_info("Order service started successfully");
    log_info(&format!("Listening on: http://{addr}"));
    log_info(&format!(
        "Serving {order_count} orders from {}",
        config.data.orders_file
    ));
    log_info(&format!("Log level: {}", level::max_level()));
    if let Some(workers) = config.server.workers {
        log_info(&format!("Worker threads: {workers}"));
    }
    if let Some(max) = config.performance.max_connections {
        log_info(&format!("Max connections: {max}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        log_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        log_info(&format!("Error log: {path}"));
    }
    log_info("  - GET /api/orders?id=&currency=&shipped_to=&cost=");
    log_info("  - GET /api/orders/sort?sort=ascend|descend");
    log_info("======================================");
}

pub fn log_dataset_loaded(path: &str, count: usize) {
    log_info(&format!("[Data] Loaded {count} orders from {path}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    log_debug(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("[Connection] Failed to serve connection: {err:?}"));
}

/// Request middleware: incoming side
pub fn log_request(method: &Method, uri: &Uri) {
    log_info(&format!("Request: {method} {uri}"));
}

/// Request middleware: outgoing side
pub fn log_response(status: StatusCode, elapsed: Duration) {
    log_info(&format!(
        "Response: {} - {:.3}s",
        status.as_u16(),
        elapsed.as_secs_f64()
    ));
}

/// Write a formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    let text = entry.format(format);
    match writer::get() {
        Some(w) => w.write_info(&text),
        None => println!("{text}"),
    }
}

pub fn log_shutdown(active_connections: usize) {
    log_info(&format!(
        "[Shutdown] Stopped accepting connections ({active_connections} still active)"
    ));
}
