//! Reading identifiers

use chrono::{DateTime, Utc};

use crate::config::IdScheme;

const PREFIX: &str = "reading_";

/// Generate an identifier for a reading created at `now`
pub fn generate(scheme: IdScheme, now: DateTime<Utc>) -> String {
    match scheme {
        IdScheme::Random => format!("{}{}", PREFIX, uuid::Uuid::new_v4().simple()),
        IdScheme::Timestamp => timestamp_id(now, fastrand::u16(1000..=9999)),
    }
}

/// Second-precision timestamp plus a four digit suffix.
///
/// Two readings in the same second can collide; the later one overwrites.
fn timestamp_id(now: DateTime<Utc>, suffix: u16) -> String {
    format!("{}{}_{}", PREFIX, now.format("%Y%m%d_%H%M%S"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn timestamp_layout() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(timestamp_id(now, 4321), "reading_20240309_070501_4321");
    }

    #[test]
    fn timestamp_suffix_is_four_digits() {
        let now = Utc::now();
        for _ in 0..200 {
            let id = generate(IdScheme::Timestamp, now);
            let suffix: u16 = id.rsplit('_').next().unwrap().parse().unwrap();
            assert!((1000..=9999).contains(&suffix));
        }
    }

    #[test]
    fn random_ids_are_unique() {
        let now = Utc::now();
        let ids: HashSet<_> = (0..1000).map(|_| generate(IdScheme::Random, now)).collect();
        assert_eq!(ids.len(), 1000);
        for id in &ids {
            assert!(id.starts_with(PREFIX));
            assert_eq!(id.len(), PREFIX.len() + 32);
        }
    }
}
