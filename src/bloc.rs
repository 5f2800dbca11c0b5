//! Fixed country bloc definitions.
//!
//! Membership is compile-time constant and the two sets are disjoint; a
//! country outside both lists is filtered out before labeling and never
//! reaches a `Bloc` value.

use std::fmt;

use serde::Serialize;

/// G7 member countries as named in the OWID dataset.
pub const G7_COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "Germany",
    "United Kingdom",
    "France",
    "Italy",
    "Japan",
];

/// BRICS member countries as named in the OWID dataset.
pub const BRICS_COUNTRIES: &[&str] = &["Brazil", "Russia", "India", "China", "South Africa"];

/// One of the two country blocs compared throughout the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Bloc {
    G7,
    Brics,
}

impl Bloc {
    /// Bloc membership lookup. Pure function of the country name.
    pub fn of(country: &str) -> Option<Bloc> {
        if G7_COUNTRIES.contains(&country) {
            Some(Bloc::G7)
        } else if BRICS_COUNTRIES.contains(&country) {
            Some(Bloc::Brics)
        } else {
            None
        }
    }

    /// Both blocs, in display order.
    pub const ALL: [Bloc; 2] = [Bloc::G7, Bloc::Brics];
}

impl fmt::Display for Bloc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bloc::G7 => write!(f, "G7"),
            Bloc::Brics => write!(f, "BRICS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_deterministic() {
        for country in G7_COUNTRIES {
            assert_eq!(Bloc::of(country), Some(Bloc::G7));
            assert_eq!(Bloc::of(country), Some(Bloc::G7));
        }
        for country in BRICS_COUNTRIES {
            assert_eq!(Bloc::of(country), Some(Bloc::Brics));
        }
    }

    #[test]
    fn bloc_lists_are_disjoint() {
        for country in G7_COUNTRIES {
            assert!(!BRICS_COUNTRIES.contains(country));
        }
    }

    #[test]
    fn unknown_country_has_no_bloc() {
        assert_eq!(Bloc::of("Norway"), None);
        assert_eq!(Bloc::of(""), None);
    }
}
