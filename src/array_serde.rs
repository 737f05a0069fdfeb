// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::{Array2, Array2Base, Data, IndexRange};

/// Version of the serialized array format.
const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where E: de::Error
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// **Requires crate feature `"serde"`**
///
/// Serialized as the pair of bounds `(l, u)`.
impl Serialize for IndexRange
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        (self.l(), self.u()).serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for IndexRange
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        <(isize, isize)>::deserialize(deserializer).map(|(l, u)| IndexRange::new(l, u))
    }
}

/// **Requires crate feature `"serde"`**
impl<A, S> Serialize for Array2Base<S>
where
    A: Serialize,
    S: Data<Elem = A>,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        let mut state = serializer.serialize_struct("Array2", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("ranges", &(self.range1, self.range2))?;
        state.serialize_field("data", &Sequence(self.as_slice()))?;
        state.end()
    }
}

// private element sequence wrapper
struct Sequence<'a, A>(&'a [A]);

impl<'a, A> Serialize for Sequence<'a, A>
where A: Serialize
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for elt in self.0 {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<A>
{
    _marker_a: PhantomData<A>,
}

enum ArrayField
{
    Version,
    Ranges,
    Data,
}

impl<A> ArrayVisitor<A>
{
    pub fn new() -> Self
    {
        ArrayVisitor { _marker_a: PhantomData }
    }
}

static ARRAY_FIELDS: &[&str] = &["v", "ranges", "data"];

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for Array2<A>
where A: Deserialize<'de>
{
    fn deserialize<D>(deserializer: D) -> Result<Array2<A>, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_struct("Array2", ARRAY_FIELDS, ArrayVisitor::new())
    }
}

impl<'de> Deserialize<'de> for ArrayField
{
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where D: Deserializer<'de>
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor
        {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
            {
                formatter.write_str(r#""v", "ranges", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where E: de::Error
            {
                match value {
                    "v" => Ok(ArrayField::Version),
                    "ranges" => Ok(ArrayField::Ranges),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where E: de::Error
            {
                match value {
                    b"v" => Ok(ArrayField::Version),
                    b"ranges" => Ok(ArrayField::Ranges),
                    b"data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(&String::from_utf8_lossy(other), ARRAY_FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

fn build_array<A, E>(ranges: (IndexRange, IndexRange), data: Vec<A>) -> Result<Array2<A>, E>
where E: de::Error
{
    Array2::from_shape_vec(ranges.0, ranges.1, data)
        .map_err(|_| de::Error::custom("data and index ranges must match in size"))
}

impl<'de, A> Visitor<'de> for ArrayVisitor<A>
where A: Deserialize<'de>
{
    type Value = Array2<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("farray representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Array2<A>, V::Error>
    where V: SeqAccess<'de>
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(0, &self));
            }
        };

        verify_version(v)?;

        let ranges: (IndexRange, IndexRange) = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(1, &self));
            }
        };

        let data: Vec<A> = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(2, &self));
            }
        };

        build_array(ranges, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Array2<A>, V::Error>
    where V: MapAccess<'de>
    {
        let mut v: Option<u8> = None;
        let mut data: Option<Vec<A>> = None;
        let mut ranges: Option<(IndexRange, IndexRange)> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                ArrayField::Data => {
                    data = Some(visitor.next_value()?);
                }
                ArrayField::Ranges => {
                    ranges = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }
        let data = data.ok_or_else(|| de::Error::missing_field("data"))?;
        let ranges = ranges.ok_or_else(|| de::Error::missing_field("ranges"))?;

        build_array(ranges, data)
    }
}
