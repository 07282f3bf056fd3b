/// Builds a [`Message`] from a mix of text, numbers and metric tuples.
///
/// Each argument is converted with [`Element::from`], so strings, numbers,
/// [`Metric`]s and `(name, value)` / `(name, value, unit)` tuples can sit side
/// by side in one message.
///
/// # Examples
///
/// ```
/// use concol::{message, ConCol, Color};
///
/// let concol = ConCol::new("App Two", Color::Green, None);
/// concol.log(message![
///     "\noutput the fibonacci sequence",
///     ("first", 1),
///     ("second", 1),
///     ("third", 2),
///     ("fourth", 3),
/// ]);
/// ```
///
/// [`Message`]: crate::Message
/// [`Element::from`]: crate::Element
/// [`Metric`]: crate::Metric
#[macro_export]
macro_rules! message {
    () => {
        $crate::Message::Seq(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Message::Seq(::std::vec![$($crate::Element::from($element)),+])
    };
}
