//! Serialize a `BigSigned` as a `(sign, limbs)` tuple.

use crate::signed::{BigSigned, Sign};
use serde_core::ser::{Serialize, SerializeTuple, Serializer};

impl Serialize for Sign {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.signum())
    }
}

impl Serialize for BigSigned {
    /// Only the logical limbs are written, so two equal values serialize
    /// identically whatever their capacity.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.sign())?;
        tuple.serialize_element(self.limbs())?;
        tuple.end()
    }
}
