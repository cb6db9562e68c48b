//! Values that can be interpolated between literal segments.
//!
//! [`Interpolate`] is the "convertible to a display string" capability. Besides
//! writing its string form, a value reports whether it is *falsy* (zero, `false`,
//! empty string, absent) or *nullish* (absent only), which drives substitution.
//!
//! # Example
//!
//! ```ignore
//! use gql_tag::{Interpolate, Text, gql};
//!
//! let id = 42_u64;
//! let name = Text(std::net::Ipv4Addr::LOCALHOST);
//! let q = gql(&["node(id: ", ", host: \"", "\")"], &[&id, &name]);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be placed between two literal segments.
pub trait Interpolate {
    /// Append the string form of this value to `out`.
    fn write_to(&self, out: &mut String);

    /// Loose truthiness: `true` for zero, `false`, the empty string and absent values.
    fn is_falsy(&self) -> bool;

    /// `true` only for absent values (`None`, `()`).
    fn is_nullish(&self) -> bool {
        false
    }

    /// The string form as an owned `String`.
    fn to_query_text(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

impl fmt::Debug for dyn Interpolate + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Interpolate")
            .field(&self.to_query_text())
            .finish()
    }
}

impl fmt::Debug for dyn Interpolate + Send + Sync + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Interpolate")
            .field(&self.to_query_text())
            .finish()
    }
}

/// Wraps any [`fmt::Display`] type so it can be interpolated.
///
/// Wrapped values are never falsy, even if they display as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Text<T>(pub T);

impl<T: fmt::Display> Interpolate for Text<T> {
    fn write_to(&self, out: &mut String) {
        use fmt::Write;
        let _ = write!(out, "{}", self.0);
    }

    fn is_falsy(&self) -> bool {
        false
    }
}

/// Implement [`Interpolate`] for types through their [`fmt::Display`] impl.
///
/// The generated impls are never falsy.
///
/// ```ignore
/// struct UserId(u64);
/// impl std::fmt::Display for UserId { /* ... */ }
///
/// gql_tag::impl_interpolate_display!(UserId);
/// ```
#[macro_export]
macro_rules! impl_interpolate_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Interpolate for $ty {
                fn write_to(&self, out: &mut ::std::string::String) {
                    use ::std::fmt::Write as _;
                    let _ = ::std::write!(out, "{}", self);
                }

                fn is_falsy(&self) -> bool {
                    false
                }
            }
        )+
    };
}

macro_rules! impl_interpolate_int {
    ($($ty:ty),+) => {
        $(
            impl Interpolate for $ty {
                fn write_to(&self, out: &mut String) {
                    use fmt::Write;
                    let _ = write!(out, "{}", self);
                }

                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )+
    };
}

impl_interpolate_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_interpolate_float {
    ($($ty:ty),+) => {
        $(
            impl Interpolate for $ty {
                fn write_to(&self, out: &mut String) {
                    use fmt::Write;
                    let _ = write!(out, "{}", self);
                }

                // -0.0 == 0.0, and NaN is falsy as well.
                fn is_falsy(&self) -> bool {
                    *self == 0.0 || self.is_nan()
                }
            }
        )+
    };
}

impl_interpolate_float!(f32, f64);

impl Interpolate for bool {
    fn write_to(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }

    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl Interpolate for char {
    fn write_to(&self, out: &mut String) {
        out.push(*self);
    }

    fn is_falsy(&self) -> bool {
        false
    }
}

impl Interpolate for str {
    fn write_to(&self, out: &mut String) {
        out.push_str(self);
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Interpolate for String {
    fn write_to(&self, out: &mut String) {
        out.push_str(self);
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Interpolate for Cow<'_, str> {
    fn write_to(&self, out: &mut String) {
        out.push_str(self);
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Interpolate for () {
    fn write_to(&self, _out: &mut String) {}

    fn is_falsy(&self) -> bool {
        true
    }

    fn is_nullish(&self) -> bool {
        true
    }
}

impl<T: Interpolate> Interpolate for Option<T> {
    fn write_to(&self, out: &mut String) {
        if let Some(v) = self {
            v.write_to(out);
        }
    }

    fn is_falsy(&self) -> bool {
        self.as_ref().is_none_or(Interpolate::is_falsy)
    }

    fn is_nullish(&self) -> bool {
        self.as_ref().is_none_or(Interpolate::is_nullish)
    }
}

macro_rules! forward_interpolate {
    ($($wrapper:ty),+) => {
        $(
            impl<T: Interpolate + ?Sized> Interpolate for $wrapper {
                fn write_to(&self, out: &mut String) {
                    (**self).write_to(out)
                }

                fn is_falsy(&self) -> bool {
                    (**self).is_falsy()
                }

                fn is_nullish(&self) -> bool {
                    (**self).is_nullish()
                }
            }
        )+
    };
}

forward_interpolate!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// JSON values follow JavaScript truthiness: `null`, `false`, `0` and `""` are falsy.
///
/// Strings are written unquoted; arrays and objects are written as JSON text.
#[cfg(feature = "serde_json")]
impl Interpolate for serde_json::Value {
    fn write_to(&self, out: &mut String) {
        use serde_json::Value;
        match self {
            Value::Null => {}
            Value::String(s) => out.push_str(s),
            other => {
                use fmt::Write;
                let _ = write!(out, "{}", other);
            }
        }
    }

    fn is_falsy(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan()),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }

    fn is_nullish(&self) -> bool {
        self.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_false_are_falsy_but_not_nullish() {
        assert!(0_i32.is_falsy());
        assert!(0_u64.is_falsy());
        assert!(false.is_falsy());
        assert!(!0_i32.is_nullish());
        assert!(!false.is_nullish());
    }

    #[test]
    fn floats_zero_negative_zero_and_nan_are_falsy() {
        assert!(0.0_f64.is_falsy());
        assert!((-0.0_f64).is_falsy());
        assert!(f32::NAN.is_falsy());
        assert!(!1.5_f64.is_falsy());
    }

    #[test]
    fn floats_render_in_plain_decimal() {
        assert_eq!(1e21_f64.to_query_text(), "1000000000000000000000");
        assert_eq!(1e-7_f64.to_query_text(), "0.0000001");
        assert_eq!(1.5_f64.to_query_text(), "1.5");
        assert_eq!(2.0_f32.to_query_text(), "2");
    }

    #[test]
    fn empty_strings_are_falsy() {
        assert!("".is_falsy());
        assert!(String::new().is_falsy());
        assert!(Cow::Borrowed("").is_falsy());
        assert!(!"x".is_falsy());
    }

    #[test]
    fn option_none_is_nullish_and_some_delegates() {
        assert!(None::<i32>.is_nullish());
        assert!(None::<i32>.is_falsy());
        assert!(Some(0_i32).is_falsy());
        assert!(!Some(0_i32).is_nullish());
        assert!(!Some(7_i32).is_falsy());
        assert_eq!(Some("abc").to_query_text(), "abc");
        assert_eq!(None::<&str>.to_query_text(), "");
    }

    #[test]
    fn unit_is_absent() {
        assert!(().is_nullish());
        assert_eq!(().to_query_text(), "");
    }

    #[test]
    fn wrappers_forward() {
        let boxed: Box<dyn Interpolate> = Box::new(0_i64);
        assert!(boxed.is_falsy());
        assert_eq!(Arc::new("id").to_query_text(), "id");
        assert_eq!(Rc::new(12_u8).to_query_text(), "12");
        assert_eq!((&&true).to_query_text(), "true");
    }

    #[test]
    fn text_wrapper_uses_display_and_is_truthy() {
        assert_eq!(Text(std::net::Ipv4Addr::LOCALHOST).to_query_text(), "127.0.0.1");
        assert!(!Text("").is_falsy());
    }

    #[test]
    fn display_macro_implements_interpolate() {
        struct UserId(u64);
        impl fmt::Display for UserId {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "user-{}", self.0)
            }
        }
        crate::impl_interpolate_display!(UserId);

        assert_eq!(UserId(0).to_query_text(), "user-0");
        assert!(!UserId(0).is_falsy());
    }

    #[test]
    fn strings_are_written_verbatim() {
        assert_eq!("a \"quoted\"\nline".to_query_text(), "a \"quoted\"\nline");
        assert_eq!('"'.to_query_text(), "\"");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_values_follow_js_truthiness() {
        use serde_json::json;

        assert!(json!(null).is_nullish());
        assert!(json!(0).is_falsy());
        assert!(json!(false).is_falsy());
        assert!(json!("").is_falsy());
        assert!(!json!([]).is_falsy());
        assert!(!json!({}).is_falsy());
        assert_eq!(json!("abc").to_query_text(), "abc");
        assert_eq!(json!([1, 2]).to_query_text(), "[1,2]");
        assert_eq!(json!(3.5).to_query_text(), "3.5");
    }
}
