// ABOUTME: Typed identifiers for record store entities
// ABOUTME: Newtype wrappers over i64 keys with validity checks used by the query facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wrap a raw store key
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the raw store key
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }

            /// Whether this is a syntactically well-formed key (store keys
            /// start at 1; zero and negative values are malformed)
            #[must_use]
            pub const fn is_valid(self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

entity_id!(
    /// Identifier of an athlete
    AthleteId
);
entity_id!(
    /// Identifier of a trainer (program owner)
    TrainerId
);
entity_id!(
    /// Identifier of an exercise
    ExerciseId
);
entity_id!(
    /// Identifier of a workout session
    SessionId
);
entity_id!(
    /// Identifier of a training program
    ProgramId
);
