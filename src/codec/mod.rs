//! Scalar codecs shared by the decoder and the encoder.
//!
//! Every codec pairs a best-effort `parse` with a sparse `format`: parsing
//! never fails (bad text degrades to the type's default and is reported
//! through [`Parsed::valid`]), and formatting returns `None` for the default
//! value so the field is left out of the record.

/// Date and date+time codecs.
pub mod datetime;
/// Geo-coordinate codec.
pub mod geo;
/// Award and credit list codecs.
pub mod list;
/// Boolean, integer and floating point codecs.
pub mod number;
/// Upload and QSL status codecs.
pub mod status;

use std::marker::PhantomData;

use crate::{
    qso::Credit,
    types::{Axis, Timestamp, UploadStatus},
};

/// Result of a best-effort parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    /// Parsed value, or the type's default when the text was unusable.
    pub value: T,
    /// False when the text was present but could not be parsed.
    pub valid: bool,
}

impl<T> Parsed<T> {
    /// A successful parse.
    pub fn ok(value: T) -> Self {
        Self { value, valid: true }
    }

    /// A failed parse that degraded to `value`.
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            valid: false,
        }
    }
}

/// Text ⇄ typed value rules for one field type.
pub trait ScalarCodec {
    /// Typed representation.
    type Value;

    /// Parses field text. Empty text means absent.
    fn parse(text: &str) -> Parsed<Self::Value>;

    /// Formats `value`, or `None` when it equals the type's default.
    fn format(value: &Self::Value) -> Option<String>;
}

/// Free text, passed through unchanged.
pub struct Text;

impl ScalarCodec for Text {
    type Value = String;

    fn parse(text: &str) -> Parsed<String> {
        Parsed::ok(text.to_string())
    }

    fn format(value: &String) -> Option<String> {
        (!value.is_empty()).then(|| value.clone())
    }
}

/// `Y`/`N` flag.
pub struct Flag;

impl ScalarCodec for Flag {
    type Value = bool;

    fn parse(text: &str) -> Parsed<bool> {
        number::parse_bool(text)
    }

    fn format(value: &bool) -> Option<String> {
        number::format_bool(*value).map(str::to_string)
    }
}

/// Non-negative integer.
pub struct Unsigned;

impl ScalarCodec for Unsigned {
    type Value = u32;

    fn parse(text: &str) -> Parsed<u32> {
        number::parse_int(text)
    }

    fn format(value: &u32) -> Option<String> {
        number::format_int(*value)
    }
}

/// Signed integer.
pub struct Signed;

impl ScalarCodec for Signed {
    type Value = i32;

    fn parse(text: &str) -> Parsed<i32> {
        number::parse_int(text)
    }

    fn format(value: &i32) -> Option<String> {
        number::format_int(*value)
    }
}

/// Floating point number written with `DIGITS` significant digits.
pub struct Float<const DIGITS: u32>;

impl<const DIGITS: u32> ScalarCodec for Float<DIGITS> {
    type Value = f64;

    fn parse(text: &str) -> Parsed<f64> {
        number::parse_float(text)
    }

    fn format(value: &f64) -> Option<String> {
        number::format_float(*value, DIGITS)
    }
}

/// Frequency in MHz.
pub type Frequency = Float<6>;
/// Power in watts.
pub type Power = Float<2>;

/// Axis selector for [`Coordinate`].
pub trait AxisKind {
    /// The axis this marker stands for.
    const AXIS: Axis;
}

/// Marker for latitude.
pub struct North;
/// Marker for longitude.
pub struct East;

impl AxisKind for North {
    const AXIS: Axis = Axis::Latitude;
}

impl AxisKind for East {
    const AXIS: Axis = Axis::Longitude;
}

/// `<cardinal><degrees> <minutes>` coordinate on axis `A`.
pub struct Coordinate<A>(PhantomData<A>);

impl<A: AxisKind> ScalarCodec for Coordinate<A> {
    type Value = f64;

    fn parse(text: &str) -> Parsed<f64> {
        geo::parse_coordinate(text)
    }

    fn format(value: &f64) -> Option<String> {
        geo::format_coordinate(*value, A::AXIS)
    }
}

/// Latitude codec.
pub type Latitude = Coordinate<North>;
/// Longitude codec.
pub type Longitude = Coordinate<East>;

/// `YYYYMMDD` date.
pub struct Date;

impl ScalarCodec for Date {
    type Value = Option<Timestamp>;

    fn parse(text: &str) -> Parsed<Option<Timestamp>> {
        datetime::parse_date(text)
    }

    fn format(value: &Option<Timestamp>) -> Option<String> {
        datetime::format_date(value.as_ref())
    }
}

/// Tri-state upload status letter.
pub struct UploadState;

impl ScalarCodec for UploadState {
    type Value = UploadStatus;

    fn parse(text: &str) -> Parsed<UploadStatus> {
        status::parse_upload_status(text)
    }

    fn format(value: &UploadStatus) -> Option<String> {
        status::format_upload_status(*value).map(str::to_string)
    }
}

/// Comma-separated award list.
pub struct AwardList;

impl ScalarCodec for AwardList {
    type Value = Vec<String>;

    fn parse(text: &str) -> Parsed<Vec<String>> {
        Parsed::ok(list::parse_awards(text))
    }

    fn format(value: &Vec<String>) -> Option<String> {
        let joined = list::join_awards(value);
        (!joined.is_empty()).then_some(joined)
    }
}

/// Comma-separated `credit[:medium]` list.
pub struct CreditList;

impl ScalarCodec for CreditList {
    type Value = Vec<Credit>;

    fn parse(text: &str) -> Parsed<Vec<Credit>> {
        Parsed::ok(list::parse_credits(text))
    }

    fn format(value: &Vec<Credit>) -> Option<String> {
        let joined = list::join_credits(value);
        (!joined.is_empty()).then_some(joined)
    }
}
