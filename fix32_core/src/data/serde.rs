use core::fmt;

use fix32_internals::*;
use serde::{
    de,
    de::{MapAccess, SeqAccess, Visitor},
    ser::SerializeStruct,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::Fix32;

/// A `serde_support` impl
impl Serialize for Fix32 {
    /// Serializes `self` in a platform independent way. In human readable
    /// form, it serializes into a struct named "Fix32" with two fields "value"
    /// and "raw". "value" is a decimal string with 9 decimals, and "raw" is
    /// the raw `i64` that exactly determines the value. Other formats get just
    /// the raw `i64`.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "Fix32".
    /// use fix32::{fix32, Fix32};
    /// use ron::to_string;
    ///
    /// assert_eq!(
    ///     to_string(&fix32!(-1.5)).unwrap(),
    ///     "(value:\"-1.500000000\",raw:-6442450944)"
    /// );
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            let mut buf = [0u8; MAX_STR_LEN];
            let len = self
                .to_u8_slice(&mut buf, 9)
                .map_err(serde::ser::Error::custom)?;
            // only ASCII is ever written
            let value = core::str::from_utf8(&buf[..len]).map_err(serde::ser::Error::custom)?;
            let mut s = serializer.serialize_struct("Fix32", 2)?;
            s.serialize_field("value", value)?;
            s.serialize_field("raw", &self.raw())?;
            s.end()
        } else {
            serializer.serialize_i64(self.raw())
        }
    }
}

const FIELDS: &[&str] = &["value", "raw"];

/// Helper for the deserialization impl
enum Field {
    Value,
    Raw,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("`value` or `raw`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Field, E>
            where
                E: de::Error,
            {
                match value {
                    "value" => Ok(Field::Value),
                    "raw" => Ok(Field::Raw),
                    _ => Err(de::Error::unknown_field(value, FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

/// The raw value wins if both are present. The decimal string is then not
/// parsed, since the formatted `Fix32::MAX` rounds up out of range.
fn from_fields<E: de::Error>(value: Option<&str>, raw: Option<i64>) -> Result<Fix32, E> {
    match (raw, value) {
        (Some(raw), _) => Ok(Fix32::from_raw(raw)),
        (None, Some(value)) => Fix32::from_bytes(value.as_bytes()).map_err(E::custom),
        (None, None) => Err(de::Error::missing_field("raw")),
    }
}

struct Fix32Visitor;

impl<'de> Visitor<'de> for Fix32Visitor {
    type Value = Fix32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "struct Fix32 consisting of a decimal string \"value\" and/or an integer \"raw\"",
        )
    }

    fn visit_map<V>(self, mut map: V) -> Result<Fix32, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut value: Option<&str> = None;
        let mut raw: Option<i64> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Value => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"))
                    }
                    value = Some(map.next_value()?);
                }
                Field::Raw => {
                    if raw.is_some() {
                        return Err(de::Error::duplicate_field("raw"))
                    }
                    raw = Some(map.next_value()?);
                }
            }
        }
        from_fields(value, raw)
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<Fix32, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let value: &str = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let raw: i64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        from_fields(Some(value), Some(raw))
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for Fix32 {
    /// Deserializes `self` in a platform independent way. In human readable
    /// form either field can be left out.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "Fix32".
    /// use fix32::{fix32, Fix32};
    /// use ron::from_str;
    ///
    /// let x: Fix32 = from_str("(value:\"-1.500000000\",raw:-6442450944)").unwrap();
    /// assert_eq!(x, fix32!(-1.5));
    /// let y: Fix32 = from_str("(value:\"2.25\")").unwrap();
    /// assert_eq!(y, fix32!(2.25));
    /// let z: Fix32 = from_str("(raw:1)").unwrap();
    /// assert_eq!(z, Fix32::EPSILON);
    /// ```
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_struct("Fix32", FIELDS, Fix32Visitor)
        } else {
            i64::deserialize(deserializer).map(Fix32::from_raw)
        }
    }
}
