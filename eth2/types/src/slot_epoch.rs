//! The `Slot` and `Epoch` types are defined as new types over u64 to enforce
//! type-safety between the two.
//!
//! Both permit conversion, comparison and math against `u64`, but specifically
//! not against each other: converting requires naming the epoch length, which
//! is where slot/epoch confusion bugs live.
//!
//! All math on `Slot` and `Epoch` is saturating, it never wraps.

use safe_arith::SafeArith;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(#[serde(with = "serde_utils::quoted_u64")] u64);

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Epoch(#[serde(with = "serde_utils::quoted_u64")] u64);

impl_common!(Slot);
impl_common!(Epoch);

impl Slot {
    pub const fn new(slot: u64) -> Slot {
        Slot(slot)
    }

    pub fn epoch(self, epoch_length: u64) -> Epoch {
        Epoch::new(self.0.safe_div(epoch_length).expect("epoch_length is not 0"))
    }

    pub fn max_value() -> Slot {
        Slot(u64::max_value())
    }
}

impl Epoch {
    pub const fn new(epoch: u64) -> Epoch {
        Epoch(epoch)
    }

    pub fn max_value() -> Epoch {
        Epoch(u64::max_value())
    }

    /// The first slot in the epoch.
    pub fn start_slot(self, epoch_length: u64) -> Slot {
        Slot::from(self.0.saturating_mul(epoch_length))
    }

    /// The last slot in the epoch.
    pub fn end_slot(self, epoch_length: u64) -> Slot {
        Slot::from(
            self.0
                .saturating_mul(epoch_length)
                .saturating_add(epoch_length.saturating_sub(1)),
        )
    }
}

#[cfg(test)]
mod slot_tests {
    use super::*;
    use ssz::{Decode, Encode};

    #[test]
    fn slot_to_epoch() {
        let epoch_length = 64;

        assert_eq!(Slot::new(0).epoch(epoch_length), Epoch::new(0));
        assert_eq!(Slot::new(63).epoch(epoch_length), Epoch::new(0));
        assert_eq!(Slot::new(64).epoch(epoch_length), Epoch::new(1));
        assert_eq!(Slot::new(128).epoch(epoch_length), Epoch::new(2));
    }

    #[test]
    fn subtraction_saturates() {
        assert_eq!(Slot::new(3) - 5, Slot::new(0));
        assert_eq!(Slot::new(3) - Slot::new(5), Slot::new(0));
    }

    #[test]
    fn max_slot_ssz() {
        let max_slot = Slot::max_value();
        assert_eq!(
            &max_slot.as_ssz_bytes(),
            &[255, 255, 255, 255, 255, 255, 255, 255]
        );
        assert_eq!(
            max_slot,
            Slot::from_ssz_bytes(&max_slot.as_ssz_bytes()).unwrap()
        );
    }
}
