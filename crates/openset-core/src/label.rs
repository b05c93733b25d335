//! Subject labels for open-set identification.
//!
//! The raw dataset convention stores labels as a single integer and reserves
//! `-1` for samples from subjects that were never enrolled. Internally the
//! sentinel is lifted into a tagged variant so rate formulas can match
//! exhaustively and a real subject index can never collide with the
//! "unenrolled" marker.

use serde::{Deserialize, Serialize};

use crate::errors::DataError;

/// Raw integer value that marks an unenrolled subject.
pub const UNKNOWN_SENTINEL: i64 = -1;

/// Ground-truth label of an evaluation sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectLabel {
    /// Enrolled subject, identified by its contiguous class index.
    Known(u32),
    /// Subject that was never enrolled; must be rejected, not identified.
    Unknown,
}

impl SubjectLabel {
    /// Lift a raw integer label into the tagged representation.
    ///
    /// `-1` maps to [`SubjectLabel::Unknown`], non-negative values map to
    /// [`SubjectLabel::Known`]. Any other negative value is a data error
    /// rather than a silent unknown.
    pub fn from_raw(raw: i64) -> Result<Self, DataError> {
        if raw == UNKNOWN_SENTINEL {
            Ok(Self::Unknown)
        } else if raw >= 0 {
            Ok(Self::Known(raw as u32))
        } else {
            Err(DataError::InvalidLabel { raw })
        }
    }

    /// Raw integer form, matching the on-disk dataset convention.
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Known(idx) => i64::from(idx),
            Self::Unknown => UNKNOWN_SENTINEL,
        }
    }

    /// Returns true for enrolled subjects.
    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_maps_to_unknown() {
        assert_eq!(SubjectLabel::from_raw(-1).unwrap(), SubjectLabel::Unknown);
    }

    #[test]
    fn test_non_negative_maps_to_known() {
        assert_eq!(SubjectLabel::from_raw(0).unwrap(), SubjectLabel::Known(0));
        assert_eq!(SubjectLabel::from_raw(17).unwrap(), SubjectLabel::Known(17));
    }

    #[test]
    fn test_other_negatives_are_rejected() {
        assert!(matches!(
            SubjectLabel::from_raw(-2),
            Err(DataError::InvalidLabel { raw: -2 })
        ));
    }

    #[test]
    fn test_raw_round_trip() {
        for raw in [-1i64, 0, 3, 255] {
            assert_eq!(SubjectLabel::from_raw(raw).unwrap().to_raw(), raw);
        }
    }
}
