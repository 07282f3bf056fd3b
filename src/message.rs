//! The shapes of payload that severity methods accept.
//!
//! A [`Message`] is either text, which may span several lines, or an ordered
//! sequence of [`Element`]s. Elements are text, numbers, or tuples of
//! [`Scalar`]s that are read as `name, value, unit` metrics.
//!
//! Most of the time a `Message` is built implicitly through `From`:
//! ```
//! use concol::{message, Message, Metric};
//!
//! // text, possibly multi-line
//! let _: Message = "output a string\nwith carriage returns".into();
//! // a sequence of strings
//! let _: Message = vec!["array string", "and elements"].into();
//! // a single metric
//! let _: Message = ("code", 180, " lines").into();
//! let _: Message = Metric::new("modules required", 0).into();
//! // a blank spacer line
//! let _: Message = ().into();
//! // a mix of text and metrics
//! let _: Message = message!["fibonacci", ("first", 1), ("second", 1), ("third", 2)];
//! ```
use crate::number;
use std::fmt;

/// A loosely typed value inside a metric tuple.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

/// One element of a [`Message::Seq`].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(String),
    Number(f64),
    /// A `name, value, unit` candidate. Missing trailing parts default to empty.
    Tuple(Vec<Scalar>),
}

/// The payload of a severity method call.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Text, split into one line per `'\n'`.
    Text(String),
    /// An ordered sequence of elements.
    Seq(Vec<Element>),
}

/// A `name, value, unit` triple.
///
/// ```
/// use concol::Metric;
///
/// let metric = Metric::new("code", 180).with_unit(" lines");
/// assert_eq!(metric.name(), "code");
/// assert_eq!(metric.unit(), " lines");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    name: String,
    value: Scalar,
    unit: String,
}

impl Scalar {
    /// Returns the numeric reading of the value, if it has one.
    ///
    /// NaN is never numeric. See [`number::parse`] for the accepted text forms.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) if n.is_nan() => None,
            Scalar::Number(n) => Some(*n),
            Scalar::Text(text) => number::parse(text),
        }
    }

    /// Returns `true` if the value reads as empty: empty text or NaN.
    pub fn is_empty(&self) -> bool {
        match self {
            Scalar::Number(n) => n.is_nan(),
            Scalar::Text(text) => text.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Number(n) => write!(f, "{}", NumberDisplay(*n)),
        }
    }
}

impl Element {
    /// Returns the element as a single scalar, flattening tuples into
    /// comma-separated text.
    pub fn into_scalar(self) -> Scalar {
        match self {
            Element::Text(text) => Scalar::Text(text),
            Element::Number(n) => Scalar::Number(n),
            Element::Tuple(parts) => Scalar::Text(join(&parts)),
        }
    }

    /// Returns the numeric reading of the element, if it has one.
    ///
    /// Tuples are never numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Element::Text(text) => number::parse(text),
            Element::Number(n) if n.is_nan() => None,
            Element::Number(n) => Some(*n),
            Element::Tuple(_) => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Element::Text(text) => f.write_str(text),
            Element::Number(n) => write!(f, "{}", NumberDisplay(*n)),
            Element::Tuple(parts) => f.write_str(&join(parts)),
        }
    }
}

impl Message {
    /// Returns a message that renders as a single blank line.
    pub fn blank() -> Self {
        Message::Text(String::new())
    }
}

impl Default for Message {
    fn default() -> Self {
        Message::blank()
    }
}

impl Metric {
    /// Returns a metric with an empty unit.
    pub fn new(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Metric {
            name: name.into(),
            value: value.into(),
            unit: String::new(),
        }
    }

    /// Sets the unit, which is written directly after the value.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

fn join(parts: &[Scalar]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&part.to_string());
    }
    out
}

// Shortest round-trip digits, with exponent notation outside [1e-6, 1e21)
// written as `1e+21` / `1e-7`. Zero is unsigned and infinities are spelled out.
struct NumberDisplay(f64);

impl fmt::Display for NumberDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.0;
        if n.is_infinite() {
            f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
        } else if n.is_nan() {
            f.write_str("NaN")
        } else if n == 0.0 {
            f.write_str("0")
        } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
            let exp = format!("{:e}", n);
            match exp.find('e') {
                Some(at) if !exp[at + 1..].starts_with('-') => {
                    write!(f, "{}e+{}", &exp[..at], &exp[at + 1..])
                }
                _ => f.write_str(&exp),
            }
        } else {
            write!(f, "{}", n)
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(n: $ty) -> Self {
                    Scalar::Number(n as f64)
                }
            }

            impl From<$ty> for Element {
                fn from(n: $ty) -> Self {
                    Element::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

impl From<&String> for Scalar {
    fn from(text: &String) -> Self {
        Scalar::Text(text.clone())
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::Text(text.to_string())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::Text(text)
    }
}

impl From<&String> for Element {
    fn from(text: &String) -> Self {
        Element::Text(text.clone())
    }
}

impl From<Scalar> for Element {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => Element::Text(text),
            Scalar::Number(n) => Element::Number(n),
        }
    }
}

impl From<Vec<Scalar>> for Element {
    fn from(parts: Vec<Scalar>) -> Self {
        Element::Tuple(parts)
    }
}

impl From<Metric> for Element {
    fn from(metric: Metric) -> Self {
        Element::Tuple(vec![
            Scalar::Text(metric.name),
            metric.value,
            Scalar::Text(metric.unit),
        ])
    }
}

impl<N, V> From<(N, V)> for Element
where
    N: Into<Scalar>,
    V: Into<Scalar>,
{
    fn from((name, value): (N, V)) -> Self {
        Element::Tuple(vec![name.into(), value.into()])
    }
}

impl<N, V, U> From<(N, V, U)> for Element
where
    N: Into<Scalar>,
    V: Into<Scalar>,
    U: Into<Scalar>,
{
    fn from((name, value, unit): (N, V, U)) -> Self {
        Element::Tuple(vec![name.into(), value.into(), unit.into()])
    }
}

impl From<()> for Message {
    fn from(_: ()) -> Self {
        Message::blank()
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<Metric> for Message {
    fn from(metric: Metric) -> Self {
        Message::Seq(vec![metric.into()])
    }
}

impl<N, V> From<(N, V)> for Message
where
    N: Into<Scalar>,
    V: Into<Scalar>,
{
    fn from(pair: (N, V)) -> Self {
        Message::Seq(vec![pair.into()])
    }
}

impl<N, V, U> From<(N, V, U)> for Message
where
    N: Into<Scalar>,
    V: Into<Scalar>,
    U: Into<Scalar>,
{
    fn from(triple: (N, V, U)) -> Self {
        Message::Seq(vec![triple.into()])
    }
}

impl<T: Into<Element>> From<Vec<T>> for Message {
    fn from(elements: Vec<T>) -> Self {
        Message::Seq(elements.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Element>, const N: usize> From<[T; N]> for Message {
    fn from(elements: [T; N]) -> Self {
        Message::Seq(IntoIterator::into_iter(elements).map(Into::into).collect())
    }
}

impl<T: Into<Message>> From<Option<T>> for Message {
    fn from(message: Option<T>) -> Self {
        message.map(Into::into).unwrap_or_default()
    }
}
