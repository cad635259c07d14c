use console::Style;

/// The role a piece of rendered text plays; a [`Styler`] decides what each
/// role looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Secondary text next to an id, such as the `| name` hint.
    Hint,
    /// A resource name shown in full.
    Name,
}

pub trait Styler {
    fn paint(&self, tone: Tone, text: &str) -> String;
}

/// Leaves text untouched. Use for pipes, files and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _tone: Tone, text: &str) -> String {
        text.to_string()
    }
}

/// Wraps text in ANSI escapes, whether or not stdout is a terminal. Pick
/// between this and [`PlainStyler`] up front.
#[derive(Debug, Clone)]
pub struct AnsiStyler {
    hint: Style,
    name: Style,
}

impl AnsiStyler {
    pub fn new(hint: Style, name: Style) -> Self {
        Self {
            hint: hint.force_styling(true),
            name: name.force_styling(true),
        }
    }

    pub fn style(&self, tone: Tone) -> &Style {
        match tone {
            Tone::Hint => &self.hint,
            Tone::Name => &self.name,
        }
    }
}

impl Default for AnsiStyler {
    fn default() -> Self {
        Self::new(Style::new().dim(), Style::new().yellow())
    }
}

impl Styler for AnsiStyler {
    fn paint(&self, tone: Tone, text: &str) -> String {
        self.style(tone).apply_to(text).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styler() {
        assert_eq!(PlainStyler.paint(Tone::Hint, "| web"), "| web");
        assert_eq!(PlainStyler.paint(Tone::Name, "[web]"), "[web]");
    }

    #[test]
    fn test_ansi_styler_default() {
        let styler = AnsiStyler::default();

        assert_eq!(styler.paint(Tone::Hint, "| web"), "\u{1b}[2m| web\u{1b}[0m");
        assert_eq!(styler.paint(Tone::Name, "[web]"), "\u{1b}[33m[web]\u{1b}[0m");
    }

    #[test]
    fn test_ansi_styler_custom() {
        let styler = AnsiStyler::new(Style::new().italic(), Style::new().cyan().bold());
        let painted = styler.paint(Tone::Name, "[db]");

        assert_ne!(painted, "[db]");
        assert_eq!(console::strip_ansi_codes(&painted), "[db]");
    }
}
