// Copyright (C) 2025 Red Hat
// SPDX-License-Identifier: Apache-2.0

//! Access-log generator
//!
//! The main function is [gen_lines]. The random source is seeded so that the
//! sequence is reproducible:
//!
//! ```rust
//! # use logmimic_generate::{gen_lines};
//! let first: Vec<String> = gen_lines().take(2).collect();
//! assert_eq!(first, gen_lines().take(2).collect::<Vec<String>>())
//! ```

use chrono::{DateTime, TimeZone, Utc};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use logmimic_faker::{FakeData, RngFaker};
use logmimic_record::{max_response_size, AccessRecord, METHODS, STATUS_CODES, VERSIONS};

const SEED: u64 = 42;

/// How many records one generator run emits.
pub const RECORD_COUNT: usize = 1000;

// Timestamps stay within a week of the reference instant.
const OFFSET_WINDOW: i64 = 3600 * 24 * 7;

const PATHS: [&str; 10] = [
    "/test/fake/{}/view",
    "/cart/find/here",
    "/foo/bar",
    "/shop/buy/products",
    "/ship/product/{}",
    "/dashboard/user/{}/info",
    "/user/data",
    "/cart/list",
    "/invoices",
    "/users/profile",
];

const REFERERS: [&str; 5] = [
    "https://www.youtube.com/",
    "https://www.google.com/",
    "https://app.example.com/",
    "-",
    "",
];

fn fixed_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(SEED)
}

fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 28, 14, 56, 53).unwrap()
}

fn pick<'a, T>(rng: &mut impl Rng, xs: &'a [T]) -> &'a T {
    &xs[rng.random_range(0..xs.len())]
}

fn gen_timestamp(rng: &mut impl Rng) -> DateTime<Utc> {
    reference_instant() + chrono::Duration::seconds(rng.random_range(-OFFSET_WINDOW..=OFFSET_WINDOW))
}

fn gen_path(rng: &mut impl Rng, fake: &mut impl FakeData) -> String {
    let template = pick(rng, &PATHS);
    if template.contains("{}") {
        template.replace("{}", &fake.token())
    } else {
        template.to_string()
    }
}

/// Draws a single record. The response size depends on the status code,
/// every other field is independent.
pub fn gen_record(rng: &mut impl Rng, fake: &mut impl FakeData) -> AccessRecord {
    let status = *pick(rng, &STATUS_CODES);
    AccessRecord {
        client: fake.ipv4_private(),
        timestamp: gen_timestamp(rng),
        method: *pick(rng, &METHODS),
        path: gen_path(rng, fake),
        version: *pick(rng, &VERSIONS),
        status,
        size: rng.random_range(0..=max_response_size(status)),
        referer: pick(rng, &REFERERS).to_string(),
        user_agent: fake.user_agent(),
    }
}

struct RandomRecord<R: Rng, F: FakeData> {
    rng: R,
    fake: F,
}

impl<R: Rng, F: FakeData> Iterator for RandomRecord<R, F> {
    type Item = AccessRecord;

    fn next(&mut self) -> Option<Self::Item> {
        Some(gen_record(&mut self.rng, &mut self.fake))
    }
}

/// An infinite record iterator over injected random and fake-data sources.
pub fn records_from<R: Rng, F: FakeData>(rng: R, fake: F) -> impl Iterator<Item = AccessRecord> {
    RandomRecord { rng, fake }
}

/// The seeded record iterator.
pub fn gen_records() -> impl Iterator<Item = AccessRecord> {
    records_from(fixed_rng(), RngFaker::new(ChaCha8Rng::seed_from_u64(SEED + 1)))
}

/// The seeded record iterator, rendered to lines.
pub fn gen_lines() -> impl Iterator<Item = String> {
    gen_records().map(|record| record.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;
    use regex::Regex;
    use std::net::Ipv4Addr;

    #[test]
    fn test_record_count() {
        assert_eq!(
            gen_lines().take(RECORD_COUNT).filter(|l| !l.is_empty()).count(),
            1000
        );
    }

    #[test]
    fn test_size_invariant() {
        for record in gen_records().take(RECORD_COUNT) {
            assert!(STATUS_CODES.contains(&record.status));
            match record.status {
                204 | 304 => assert_eq!(record.size, 0),
                s if s >= 400 => assert!(record.size <= 100),
                _ => assert!(record.size <= 10_000),
            }
        }
    }

    #[test]
    fn test_line_format() {
        lazy_static! {
            static ref LINE_RE: Regex = Regex::new(
                "^(\\d{1,3}\\.\\d{1,3}\\.\\d{1,3}\\.\\d{1,3}) - - \\[\\d{2}/[A-Z][a-z]{2}/\\d{4}:\\d{2}:\\d{2}:\\d{2} \\+0000\\] \"(GET|POST|PUT|DELETE|OPTIONS|HEAD) (\\S+) (HTTP/1\\.1|HTTP/2\\.0)\" (\\d{3}) (\\d+) \"(.*?)\" \"(.*?)\"$"
            )
            .unwrap();
            static ref PATH_RE: Regex = Regex::new(&format!(
                "^(?:{})$",
                PATHS
                    .iter()
                    .map(|t| t.replace("{}", "[0-9a-f]{32}"))
                    .collect::<Vec<_>>()
                    .join("|")
            ))
            .unwrap();
        }
        for (record, line) in gen_records().zip(gen_lines()).take(RECORD_COUNT) {
            assert!(LINE_RE.is_match(&line), "bad line: {}", line);
            assert!(PATH_RE.is_match(&record.path), "bad path: {}", record.path);
            assert!(REFERERS.contains(&record.referer.as_str()));
        }
    }

    #[test]
    fn test_timestamp_window() {
        for record in gen_records().take(RECORD_COUNT) {
            let offset = (record.timestamp - reference_instant()).num_seconds();
            assert!(offset.abs() <= OFFSET_WINDOW, "offset too large: {}", offset);
        }
    }

    #[test]
    fn test_determinism() {
        let lines: Vec<String> = gen_lines().take(10).collect();
        assert_eq!(lines, gen_lines().take(10).collect::<Vec<String>>());
    }

    struct StaticFake;

    impl FakeData for StaticFake {
        fn ipv4_private(&mut self) -> Ipv4Addr {
            Ipv4Addr::new(10, 0, 0, 1)
        }
        fn user_agent(&mut self) -> String {
            "test-agent".to_string()
        }
        fn token(&mut self) -> String {
            "f".repeat(32)
        }
    }

    #[test]
    fn test_injected_fake() {
        let record = records_from(fixed_rng(), StaticFake).next().unwrap();
        assert_eq!(record.client, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(record.user_agent, "test-agent");
    }
}
