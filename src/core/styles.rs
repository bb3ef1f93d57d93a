//! Style roles expressed as an enum + macro mapping logical names to `colored::Color`.
//!
//! Coloring is applied only when the `enabled` flag passed to `paint()` is
//! true, so there is no global colour state to manage.
//!
//! ```
//! use kube_scanner::core::styles::StyleRole;
//! let plain = StyleRole::Header.paint("Title", false);
//! assert_eq!(plain, "Title");
//! let colored = StyleRole::Header.paint("Title", true);
//! assert!(colored.starts_with("\x1b["));
//! assert!(colored.ends_with("\x1b[0m"));
//! ```

use colored::Color;

macro_rules! style {
    ( $( $variant:ident => $color:expr ),+ $(,)? ) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum StyleRole { $( $variant ),+ }

        impl StyleRole {
            pub fn color(self) -> Option<Color> {
                match self { $( StyleRole::$variant => $color ),+ }
            }

            pub fn ansi_code(self) -> Option<String> {
                map_color_code(self.color()?)
            }

            pub fn paint(self, text: &str, enabled: bool) -> String {
                if !enabled { return text.to_string(); }
                if let Some(code) = self.ansi_code() { return format!("\x1b[{}m{}\x1b[0m", code, text); }
                text.to_string()
            }
        }
    }
}

// Value => None (uncoloured)
style! {
    Header      => Some(Color::Yellow),
    Literal     => Some(Color::Cyan),
    Placeholder => Some(Color::Green),
    Valid       => Some(Color::Green),
    Invalid     => Some(Color::Red),
    Error       => Some(Color::BrightRed),
    Warning     => Some(Color::BrightYellow),
    Success     => Some(Color::BrightGreen),
    Value       => None,
    Accent      => Some(Color::Blue),
    Dim         => Some(Color::BrightBlack)
}

fn map_color_code(c: Color) -> Option<String> {
    use Color::*;
    let code = match c {
        Black => "30",
        Red => "31",
        Green => "32",
        Yellow => "33",
        Blue => "34",
        Magenta => "35",
        Cyan => "36",
        White => "37",
        BrightBlack => "90",
        BrightRed => "91",
        BrightGreen => "92",
        BrightYellow => "93",
        BrightBlue => "94",
        BrightMagenta => "95",
        BrightCyan => "96",
        BrightWhite => "97",
        Color::AnsiColor(n) => return Some(format!("38;5;{}", n)),
        // ANSI TrueColor format: 38;2;R;G;B for foreground text
        TrueColor { r, g, b } => return Some(format!("38;2;{};{};{}", r, g, b)),
    };
    Some(code.to_string())
}

fn color_to_ansi(c: Color) -> Option<clap::builder::styling::AnsiColor> {
    use clap::builder::styling::AnsiColor as A;
    use Color::*;
    Some(match c {
        Black => A::Black,
        Red => A::Red,
        Green => A::Green,
        Yellow => A::Yellow,
        Blue => A::Blue,
        Magenta => A::Magenta,
        Cyan => A::Cyan,
        White => A::White,
        BrightBlack => A::BrightBlack,
        BrightRed => A::BrightRed,
        BrightGreen => A::BrightGreen,
        BrightYellow => A::BrightYellow,
        BrightBlue => A::BrightBlue,
        BrightMagenta => A::BrightMagenta,
        BrightCyan => A::BrightCyan,
        BrightWhite => A::BrightWhite,
        _ => return None,
    })
}

/// Build clap Styles for help and usage output
pub fn palette_to_clap(enabled: bool) -> clap::builder::Styles {
    use clap::builder::styling::{Color as ClapColor, Style};
    if !enabled {
        return clap::builder::Styles::plain();
    }

    let style = |role: StyleRole, bold: bool| {
        let mut s = Style::new();
        if let Some(col) = role.color().and_then(color_to_ansi) {
            s = s.fg_color(Some(ClapColor::Ansi(col)));
        }
        if bold {
            s = s.bold();
        }
        s
    };

    clap::builder::Styles::styled()
        .header(style(StyleRole::Header, true))
        .usage(style(StyleRole::Header, true))
        .literal(style(StyleRole::Literal, false))
        .placeholder(style(StyleRole::Placeholder, false))
        .valid(style(StyleRole::Valid, false))
        .invalid(style(StyleRole::Invalid, false))
        .error(style(StyleRole::Error, false))
}
