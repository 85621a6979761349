//! Deserialize a `BigSigned` from a `(sign, limbs)` tuple.

use crate::lib::{fmt, Vec};
use crate::limb::Limb;
use crate::signed::{BigSigned, Sign};
use serde_core::de::{self, Deserialize, Deserializer, SeqAccess, Unexpected, Visitor};

impl<'de> Deserialize<'de> for Sign {
    fn deserialize<D>(deserializer: D) -> Result<Sign, D::Error>
    where
        D: Deserializer<'de>,
    {
        let signum = i8::deserialize(deserializer)?;
        Sign::from_signum(signum).ok_or_else(|| {
            de::Error::invalid_value(Unexpected::Signed(signum as i64), &"-1, 0 or 1")
        })
    }
}

struct BigSignedVisitor;

impl<'de> Visitor<'de> for BigSignedVisitor {
    type Value = BigSigned;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a (sign, limbs) tuple")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<BigSigned, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let sign: Sign = match seq.next_element()? {
            Some(sign) => sign,
            None => return Err(de::Error::invalid_length(0, &self)),
        };
        let limbs: Vec<Limb> = match seq.next_element()? {
            Some(limbs) => limbs,
            None => return Err(de::Error::invalid_length(1, &self)),
        };
        BigSigned::from_limbs(sign, &limbs).ok_or_else(|| {
            de::Error::invalid_value(
                Unexpected::Other("sign that disagrees with the magnitude"),
                &self,
            )
        })
    }
}

impl<'de> Deserialize<'de> for BigSigned {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigSigned, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, BigSignedVisitor)
    }
}
