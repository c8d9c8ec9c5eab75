// Copyright (C) 2025 Red Hat
// SPDX-License-Identifier: Apache-2.0

//! This library provides fake network and browser data for the [logmimic](https://github.com/logmimic/logmimic) project.
//!
//! The [FakeData] trait is the capability consumed by the generator, so that
//! tests can substitute a fixed-sequence stub. [RngFaker] is the default
//! implementation, driven by any injected [Rng]:
//!
//! ```rust
//! # use logmimic_faker::{FakeData, RngFaker};
//! use rand::SeedableRng;
//! let mut faker = RngFaker::new(rand_chacha::ChaCha8Rng::seed_from_u64(42));
//! assert!(faker.ipv4_private().is_private());
//! assert_eq!(faker.token().len(), 32);
//! assert!(faker.user_agent().starts_with("Mozilla/5.0 ("));
//! ```

use rand::Rng;
use std::net::Ipv4Addr;

/// The fake data a generated record needs.
pub trait FakeData {
    /// A syntactically valid IPv4 address in a private range.
    fn ipv4_private(&mut self) -> Ipv4Addr;
    /// A plausible browser user-agent string.
    fn user_agent(&mut self) -> String;
    /// A 32 character lowercase hexadecimal token.
    fn token(&mut self) -> String;
}

/// The default [FakeData] implementation on top of an injected [Rng].
pub struct RngFaker<R: Rng> {
    rng: R,
}

impl<R: Rng> RngFaker<R> {
    /// Creates a new faker from a random source.
    pub fn new(rng: R) -> RngFaker<R> {
        RngFaker { rng }
    }
}

const PLATFORMS: [&str; 4] = [
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
    "Windows NT 6.1; Win64; x64",
];

impl<R: Rng> FakeData for RngFaker<R> {
    fn ipv4_private(&mut self) -> Ipv4Addr {
        // The three RFC1918 blocks: 10/8, 172.16/12 and 192.168/16.
        match self.rng.random_range(0..3u8) {
            0 => Ipv4Addr::new(10, self.rng.random(), self.rng.random(), self.rng.random()),
            1 => Ipv4Addr::new(
                172,
                self.rng.random_range(16..=31),
                self.rng.random(),
                self.rng.random(),
            ),
            _ => Ipv4Addr::new(192, 168, self.rng.random(), self.rng.random()),
        }
    }

    fn user_agent(&mut self) -> String {
        let platform = PLATFORMS[self.rng.random_range(0..PLATFORMS.len())];
        match self.rng.random_range(0..4u8) {
            0 => format!(
                "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{}.0.{}.{} Safari/537.36",
                platform,
                self.rng.random_range(98..=124u32),
                self.rng.random_range(4000..=6500u32),
                self.rng.random_range(0..=199u32),
            ),
            1 => {
                let version = self.rng.random_range(91..=126u32);
                format!(
                    "Mozilla/5.0 ({}; rv:{}.0) Gecko/20100101 Firefox/{}.0",
                    platform, version, version,
                )
            }
            2 => format!(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{}.{} Safari/605.1.15",
                self.rng.random_range(14..=17u32),
                self.rng.random_range(0..=6u32),
            ),
            _ => {
                let major = self.rng.random_range(98..=124u32);
                let build = self.rng.random_range(4000..=6500u32);
                let patch = self.rng.random_range(0..=199u32);
                format!(
                    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{major}.0.{build}.{patch} Safari/537.36 Edg/{major}.0.{build}.{patch}",
                )
            }
        }
    }

    fn token(&mut self) -> String {
        // A v4 uuid in simple format, built from the injected rng so that
        // the sequence stays reproducible.
        uuid::Builder::from_random_bytes(self.rng.random())
            .into_uuid()
            .simple()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn faker() -> RngFaker<ChaCha8Rng> {
        RngFaker::new(ChaCha8Rng::seed_from_u64(42))
    }

    #[test]
    fn test_ipv4_private() {
        let mut faker = faker();
        for _ in 0..100 {
            let addr = faker.ipv4_private();
            let [a, b, _, _] = addr.octets();
            assert!(
                a == 10 || (a == 172 && (16..=31).contains(&b)) || (a == 192 && b == 168),
                "not a private address: {}",
                addr
            );
        }
    }

    #[test]
    fn test_token() {
        let mut faker = faker();
        let token = faker.token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
        // simple format puts the uuid version nibble at position 12
        assert_eq!(token.chars().nth(12), Some('4'));
        assert_ne!(token, faker.token());
    }

    #[test]
    fn test_user_agent() {
        let mut faker = faker();
        for _ in 0..100 {
            let agent = faker.user_agent();
            assert!(agent.starts_with("Mozilla/5.0 ("), "odd agent: {}", agent);
        }
    }

    #[test]
    fn test_determinism() {
        let (mut a, mut b) = (faker(), faker());
        for _ in 0..10 {
            assert_eq!(a.ipv4_private(), b.ipv4_private());
            assert_eq!(a.user_agent(), b.user_agent());
            assert_eq!(a.token(), b.token());
        }
    }
}
