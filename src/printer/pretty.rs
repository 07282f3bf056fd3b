use crate::color::Color;
use crate::normalize::Line;
use crate::tag::Tag;
use colored::Colorize;

/// Width of a metric's name column, colon excluded, for untagged lines.
///
/// Tagged lines shrink the name column by the tag's width so that the colons
/// of tagged and untagged metrics line up.
pub const NAME_WIDTH: usize = 34;

/// Width of a metric's value column.
pub const VALUE_WIDTH: usize = 10;

/// Renders normalized lines into colorized, column-aligned text.
///
/// # Examples
///
/// ```log
/// 10:42:07.118 [App One  ] output a single string
/// 10:42:07.118 [App One  ]  WARN: output warning
/// 10:42:07.170 [App Two  ]                   modules required:         0
/// 10:42:07.170 [App Two  ]                               code:       180 lines
/// 10:42:07.170 [App Two  ]  WARN:            errors in module:         0 found
/// 10:42:07.221 [App Three] ERROR: error 1
/// ```
/// Each line is `<timestamp> [<label>] <tag><body>`. The timestamp is grey,
/// the label block is dimmed in the instance color, text bodies and metric
/// names use the instance color, and metric values are white.
#[derive(Debug, Clone)]
pub struct Pretty {
    label: String,
    color: Color,
    ansi: bool,
}

impl Pretty {
    pub(crate) fn new(label: String, color: Color, ansi: bool) -> Self {
        Pretty {
            label,
            color,
            ansi,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Renders every line, prefixing each with `timestamp` and the label
    /// padded to `width`.
    pub fn render<'a, I>(
        &self,
        lines: I,
        tag: Option<Tag>,
        timestamp: &str,
        width: usize,
    ) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Line>,
    {
        let prefix = self.prefix(timestamp, width);

        lines
            .into_iter()
            .map(|line| {
                let mut out = prefix.clone();
                if let Some(tag) = tag {
                    out.push_str(&self.paint(tag.text(), tag.color(), false));
                }
                out.push_str(&self.body(line, tag));
                out
            })
            .collect()
    }

    fn prefix(&self, timestamp: &str, width: usize) -> String {
        let label = format!(" [{:<width$}] ", self.label, width = width);
        let mut prefix = self.paint(timestamp, Color::Gray, false);
        prefix.push_str(&self.paint(&label, self.color, true));
        prefix
    }

    fn body(&self, line: &Line, tag: Option<Tag>) -> String {
        match line {
            Line::Text(text) => self.paint(text, self.color, false),
            Line::Metric { name, value, unit } => {
                let width = NAME_WIDTH.saturating_sub(tag.map_or(0, |tag| tag.width()));
                let name = format!("{:>width$}:", name, width = width);
                let value = format!("{:>width$}{}", value, unit, width = VALUE_WIDTH);

                let mut body = self.paint(&name, self.color, false);
                body.push_str(&self.paint(&value, Color::White, false));
                body
            }
        }
    }

    fn paint(&self, text: &str, color: Color, dim: bool) -> String {
        if !self.ansi {
            return text.to_string();
        }

        let styled = text.color(colored::Color::from(color));
        if dim {
            styled.dimmed().to_string()
        } else {
            styled.to_string()
        }
    }
}
