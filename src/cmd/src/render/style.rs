use crossterm::style::style;
use crossterm::style::Color;
use crossterm::style::Stylize;

pub const PLAIN_HIGHLIGHT_MARK: &str = "*..*";
pub const BASELINE_GLYPH: char = '█';
pub const UPLIFTED_GLYPH: char = '░';

// #FFDDC1
pub const HIGHLIGHT_BG: Color = Color::Rgb {
    r: 255,
    g: 221,
    b: 193,
};
pub const HIGHLIGHT_FG: Color = Color::Rgb { r: 0, g: 0, b: 0 };
// blue and red at 60% opacity over white
pub const BASELINE_FG: Color = Color::Rgb {
    r: 102,
    g: 102,
    b: 255,
};
pub const UPLIFTED_FG: Color = Color::Rgb {
    r: 255,
    g: 102,
    b: 102,
};
pub const DELTA_UP: Color = Color::Rgb { r: 9, g: 171, b: 59 };
pub const DELTA_DOWN: Color = Color::Rgb {
    r: 255,
    g: 43,
    b: 43,
};

/// Which of the two overlaid chart series a glyph belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Baseline,
    Uplifted,
}

impl Fill {
    pub fn glyph(&self) -> char {
        match self {
            Fill::Baseline => BASELINE_GLYPH,
            Fill::Uplifted => UPLIFTED_GLYPH,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Fill::Baseline => BASELINE_FG,
            Fill::Uplifted => UPLIFTED_FG,
        }
    }
}

/// Plain text for pipes and tests, crossterm styling for terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Plain,
    Ansi,
}

impl Paint {
    pub fn from_color(color: bool) -> Self {
        if color {
            Paint::Ansi
        } else {
            Paint::Plain
        }
    }

    fn colored(&self, s: &str, color: Color) -> String {
        match self {
            Paint::Plain => s.to_string(),
            Paint::Ansi => style(s).with(color).to_string(),
        }
    }

    pub fn bold(&self, s: &str) -> String {
        match self {
            Paint::Plain => s.to_string(),
            Paint::Ansi => style(s).bold().to_string(),
        }
    }

    pub fn highlight(&self, s: &str) -> String {
        match self {
            Paint::Plain => format!("*{s}*"),
            Paint::Ansi => style(s)
                .with(HIGHLIGHT_FG)
                .on(HIGHLIGHT_BG)
                .bold()
                .to_string(),
        }
    }

    pub fn fill(&self, fill: Fill, s: &str) -> String {
        self.colored(s, fill.color())
    }

    pub fn delta(&self, s: &str, negative: bool) -> String {
        self.colored(s, if negative { DELTA_DOWN } else { DELTA_UP })
    }
}

/// Drops escape sequences, leaving what the terminal shows.
#[cfg(test)]
pub(crate) fn strip_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}
