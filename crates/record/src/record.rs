// Copyright (C) 2025 Red Hat
// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! This library provides the access-log record model for the [logmimic](https://github.com/logmimic/logmimic) project.
//!
//! An [AccessRecord] renders as a single combined-log style line:
//!
//! ```rust
//! # use logmimic_record::{AccessRecord, HttpMethod, HttpVersion};
//! # use chrono::TimeZone;
//! let record = AccessRecord {
//!     client: std::net::Ipv4Addr::new(10, 1, 2, 3),
//!     timestamp: chrono::Utc.with_ymd_and_hms(2025, 3, 25, 10, 0, 0).unwrap(),
//!     method: HttpMethod::Get,
//!     path: "/cart/list".to_string(),
//!     version: HttpVersion::Http11,
//!     status: 200,
//!     size: 4521,
//!     referer: "-".to_string(),
//!     user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0".to_string(),
//! };
//! assert_eq!(
//!     record.to_string(),
//!     "10.1.2.3 - - [25/Mar/2025:10:00:00 +0000] \"GET /cart/list HTTP/1.1\" 200 4521 \"-\" \"Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0\""
//! );
//! ```

use chrono::{DateTime, Utc};
use std::net::Ipv4Addr;

/// A http request method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
}

/// The methods a generated request can use.
pub const METHODS: [HttpMethod; 6] = [
    HttpMethod::Get,
    HttpMethod::Post,
    HttpMethod::Put,
    HttpMethod::Delete,
    HttpMethod::Options,
    HttpMethod::Head,
];

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        })
    }
}

/// A http protocol version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpVersion {
    /// HTTP/1.1
    Http11,
    /// HTTP/2.0
    Http2,
}

/// The versions a generated request can use.
pub const VERSIONS: [HttpVersion; 2] = [HttpVersion::Http11, HttpVersion::Http2];

impl std::fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            HttpVersion::Http11 => "HTTP/1.1",
            HttpVersion::Http2 => "HTTP/2.0",
        })
    }
}

/// The status codes a generated response can use.
pub const STATUS_CODES: [u16; 10] = [200, 204, 304, 400, 401, 403, 404, 500, 502, 503];

/// The largest response size allowed for a status code.
///
/// Bodyless statuses are always empty, errors stay small.
pub fn max_response_size(status: u16) -> u64 {
    match status {
        204 | 304 => 0,
        s if s >= 400 => 100,
        _ => 10_000,
    }
}

/// A synthetic http access-log record.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessRecord {
    /// The client address, always in a private range.
    pub client: Ipv4Addr,
    /// The request time, rendered with a fixed +0000 offset.
    pub timestamp: DateTime<Utc>,
    /// The request method.
    pub method: HttpMethod,
    /// The request path.
    pub path: String,
    /// The protocol version.
    pub version: HttpVersion,
    /// The response status code.
    pub status: u16,
    /// The response size in bytes, bounded by [max_response_size].
    pub size: u64,
    /// The referer, possibly `-` or empty.
    pub referer: String,
    /// The client user agent.
    pub user_agent: String,
}

impl std::fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} - - {} \"{} {} {}\" {} {} \"{}\" \"{}\"",
            self.client,
            self.timestamp.format("[%d/%b/%Y:%H:%M:%S %z]"),
            self.method,
            self.path,
            self.version,
            self.status,
            self.size,
            self.referer,
            self.user_agent,
        )
    }
}
