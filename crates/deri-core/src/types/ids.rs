use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    InvalidFormat { value: String },
    NotPositive { value: i64 },
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { value } => write!(f, "invalid id format: {value}"),
            Self::NotPositive { value } => write!(f, "id must be positive, got {value}"),
        }
    }
}

impl std::error::Error for IdError {}

// Primary keys are database serials; the newtypes keep a zone id from being
// passed where a vector id is expected.
macro_rules! int_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }

            pub fn parse(value: &str) -> Result<Self, IdError> {
                let parsed = value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| IdError::InvalidFormat {
                        value: value.to_string(),
                    })?;
                if parsed <= 0 {
                    return Err(IdError::NotPositive { value: parsed });
                }
                Ok(Self(parsed))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

int_id!(PoliceId);
int_id!(IncidentId);
int_id!(StatusId);
int_id!(ZoneId);
int_id!(VectorId);
int_id!(IncidentTypeId);
int_id!(TrackingStateId);
