//! Rejects non-finite floats before encoding.
//!
//! `serde_json` writes `NaN` and the infinities as `null`, silently changing
//! the value. [`ensure_finite`] walks a value through a no-output
//! [`Serializer`] and fails on the first non-finite `f32`/`f64`.

use std::fmt;

use serde::ser::{self, Serialize, Serializer};

/// A value contained a float with no JSON representation.
#[derive(Debug)]
pub(crate) struct NonFinite(String);

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for NonFinite {}

impl ser::Error for NonFinite {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

type Walk = Result<(), NonFinite>;

/// Fails if `value` contains NaN or an infinity anywhere.
pub(crate) fn ensure_finite<T: ?Sized + Serialize>(value: &T) -> Walk {
    value.serialize(FiniteCheck)
}

fn check(value: f64) -> Walk {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NonFinite(format!("{value} is not representable in JSON")))
    }
}

struct FiniteCheck;

impl Serializer for FiniteCheck {
    type Ok = ();
    type Error = NonFinite;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _: bool) -> Walk {
        Ok(())
    }

    fn serialize_i8(self, _: i8) -> Walk {
        Ok(())
    }

    fn serialize_i16(self, _: i16) -> Walk {
        Ok(())
    }

    fn serialize_i32(self, _: i32) -> Walk {
        Ok(())
    }

    fn serialize_i64(self, _: i64) -> Walk {
        Ok(())
    }

    fn serialize_i128(self, _: i128) -> Walk {
        Ok(())
    }

    fn serialize_u8(self, _: u8) -> Walk {
        Ok(())
    }

    fn serialize_u16(self, _: u16) -> Walk {
        Ok(())
    }

    fn serialize_u32(self, _: u32) -> Walk {
        Ok(())
    }

    fn serialize_u64(self, _: u64) -> Walk {
        Ok(())
    }

    fn serialize_u128(self, _: u128) -> Walk {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Walk {
        check(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Walk {
        check(v)
    }

    fn serialize_char(self, _: char) -> Walk {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Walk {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Walk {
        Ok(())
    }

    fn serialize_none(self) -> Walk {
        Ok(())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Walk {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Walk {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Walk {
        Ok(())
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Walk {
        Ok(())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        value: &T,
    ) -> Walk {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Walk {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self, NonFinite> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self, NonFinite> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self, NonFinite> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, NonFinite> {
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self, NonFinite> {
        Ok(self)
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self, NonFinite> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, NonFinite> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteCheck {
    type Ok = ();
    type Error = NonFinite;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Walk {
        ensure_finite(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteCheck {
    type Ok = ();
    type Error = NonFinite;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Walk {
        ensure_finite(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteCheck {
    type Ok = ();
    type Error = NonFinite;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Walk {
        ensure_finite(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteCheck {
    type Ok = ();
    type Error = NonFinite;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Walk {
        ensure_finite(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteCheck {
    type Ok = ();
    type Error = NonFinite;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Walk {
        ensure_finite(key)
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Walk {
        ensure_finite(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteCheck {
    type Ok = ();
    type Error = NonFinite;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _: &'static str, value: &T) -> Walk {
        ensure_finite(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteCheck {
    type Ok = ();
    type Error = NonFinite;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _: &'static str, value: &T) -> Walk {
        ensure_finite(value)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}
