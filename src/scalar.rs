use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use mint::{Vector2, Vector3, Vector4};
use uuid::Uuid as UUID;

/// A terminal value stored as the text of a single node.
pub trait Scalar: Sized {
    /// Name of the kind, used in parse errors.
    const KIND: &'static str;

    fn to_text(&self) -> String;

    /// Parses node text, returning `None` when it is not a valid value of this kind.
    fn from_text(text: &str) -> Option<Self>;
}

/// Implements [`Value`](crate::Value) for types that are stored as scalars.
///
/// Every listed type must implement [`Scalar`]. Types from outside this crate opt in the same way:
///
/// ```
/// use simpleserial::{Scalar, scalar_value};
///
/// #[derive(Default)]
/// struct Celsius(i32);
///
/// impl Scalar for Celsius {
///     const KIND: &'static str = "celsius";
///
///     fn to_text(&self) -> String {
///         self.0.to_string()
///     }
///
///     fn from_text(text: &str) -> Option<Self> {
///         text.trim().parse().ok().map(Celsius)
///     }
/// }
///
/// scalar_value!(Celsius);
/// ```
#[macro_export]
macro_rules! scalar_value {
    ($($qualifier:ty),* $(,)?) => {
        $(
            impl $crate::Value for $qualifier {
                fn dispatch<A: $crate::Archive>(&mut self, archive: &mut A) -> Result<(), A::Error> {
                    archive.scalar(self)
                }
            }
        )*
    };
}

macro_rules! declare_scalar {
    ($qualifier:ty, $kind:literal) => {
        impl Scalar for $qualifier {
            const KIND: &'static str = $kind;

            fn to_text(&self) -> String {
                self.to_string()
            }

            fn from_text(text: &str) -> Option<Self> {
                text.trim().parse().ok()
            }
        }

        crate::scalar_value!($qualifier);
    };
}

declare_scalar!(i8, "int");
declare_scalar!(i16, "int");
declare_scalar!(i32, "int");
declare_scalar!(i64, "int");
declare_scalar!(isize, "int");
declare_scalar!(u8, "uint");
declare_scalar!(u16, "uint");
declare_scalar!(u32, "uint");
declare_scalar!(u64, "uint");
declare_scalar!(usize, "uint");
declare_scalar!(f32, "float");
declare_scalar!(f64, "float");
declare_scalar!(bool, "bool");
declare_scalar!(UUID, "uuid");
declare_scalar!(NaiveDate, "date");

impl Scalar for String {
    const KIND: &'static str = "string";

    fn to_text(&self) -> String {
        self.clone()
    }

    fn from_text(text: &str) -> Option<Self> {
        Some(text.to_owned())
    }
}

impl Scalar for DateTime<Utc> {
    const KIND: &'static str = "datetime";

    fn to_text(&self) -> String {
        self.to_rfc3339()
    }

    fn from_text(text: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(text.trim()).ok().map(|time| time.with_timezone(&Utc))
    }
}

/// Seconds and nanoseconds written as `secs.nanos`, exact to the nanosecond.
impl Scalar for Duration {
    const KIND: &'static str = "time";

    fn to_text(&self) -> String {
        let text = format!("{}.{:09}", self.as_secs(), self.subsec_nanos());
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }

    fn from_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.') {
            return parse_seconds(text);
        }

        Duration::try_from_secs_f64(text.parse().ok()?).ok()
    }
}

/// Parses plain decimal seconds without going through a float. More than nine fraction digits is rejected.
fn parse_seconds(text: &str) -> Option<Duration> {
    let (seconds, fraction) = text.split_once('.').unwrap_or((text, ""));
    if seconds.is_empty() || fraction.len() > 9 || fraction.contains('.') {
        return None;
    }

    let nanos = format!("{fraction:0<9}").parse().ok()?;
    Some(Duration::new(seconds.parse().ok()?, nanos))
}

fn parse_components<const N: usize>(text: &str) -> Option<[f32; N]> {
    let mut components = [0.0; N];
    let mut parts = text.split_whitespace();

    for component in components.iter_mut() {
        *component = parts.next()?.parse().ok()?;
    }

    match parts.next() {
        Some(_) => None,
        None => Some(components),
    }
}

impl Scalar for Vector2<f32> {
    const KIND: &'static str = "vector2";

    fn to_text(&self) -> String {
        format!("{} {}", self.x, self.y)
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_components::<2>(text).map(Vector2::from)
    }
}

impl Scalar for Vector3<f32> {
    const KIND: &'static str = "vector3";

    fn to_text(&self) -> String {
        format!("{} {} {}", self.x, self.y, self.z)
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_components::<3>(text).map(Vector3::from)
    }
}

impl Scalar for Vector4<f32> {
    const KIND: &'static str = "vector4";

    fn to_text(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.z, self.w)
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_components::<4>(text).map(Vector4::from)
    }
}

crate::scalar_value!(String, DateTime<Utc>, Duration, Vector2<f32>, Vector3<f32>, Vector4<f32>);
