use std::env;

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn bright_black(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn green(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn yellow(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn red(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bold(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self.as_str()
        }
    }
    impl ColorizeShim for Plain {
        fn as_str(&self) -> &str {
            &self.0
        }
    }
}

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::render::SectionState;

fn no_color() -> bool {
    env::var("NO_COLOR").is_ok()
}

/// `languages    live` / `languages    fallback (empty)` / `... fallback (status 500)`
pub fn section_line(name: &str, state: &SectionState) -> String {
    let label = format!("{name:<12}");
    let plain = match state {
        SectionState::Live => "live".to_string(),
        SectionState::Empty => "fallback (empty)".to_string(),
        SectionState::Failed(msg) => format!("fallback ({msg})"),
    };
    if no_color() {
        return format!("{label} {plain}");
    }
    let colored = match state {
        SectionState::Live => plain.green().to_string(),
        SectionState::Empty => plain.yellow().to_string(),
        SectionState::Failed(_) => plain.red().to_string(),
    };
    format!("{} {}", label.bright_black(), colored)
}

/// Final line of a run, e.g. `✓ README.md updated (5/5 sections live)`.
pub fn completion_line(destination: &str, sections: &[(&'static str, SectionState)]) -> String {
    let live = sections
        .iter()
        .filter(|(_, s)| *s == SectionState::Live)
        .count();
    let counts = format!("({live}/{} sections live)", sections.len());
    if no_color() {
        return format!("✓ {destination} updated successfully {counts}");
    }
    let counts = if live == sections.len() {
        counts.green().to_string()
    } else {
        counts.yellow().to_string()
    };
    format!(
        "{} {destination} updated successfully {counts}",
        "✓".green().bold()
    )
}

pub fn print_report(destination: &str, sections: &[(&'static str, SectionState)], verbose: bool) {
    if verbose {
        for (name, state) in sections {
            eprintln!("{}", section_line(name, state));
        }
    }
    eprintln!("{}", completion_line(destination, sections));
}
