//! Line formatting
//!
//! `{icon} {file}.{function}[{line}]: {message}`

use crate::callsite::CallSite;
use crate::severity::Severity;
use std::fmt::{self, Display};

/// Render one log line (without trailing newline)
pub fn format_line(severity: Severity, site: &CallSite<'_>, message: impl Display) -> String {
    Line {
        severity,
        site,
        message,
    }
    .to_string()
}

struct Line<'a, M> {
    severity: Severity,
    site: &'a CallSite<'a>,
    message: M,
}

impl<M: Display> Display for Line<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{}[{}]: {}",
            self.severity.icon(),
            self.site.file_stem(),
            self.site.function_name(),
            self.site.line,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_layout() {
        let site = CallSite::new("src/net/client.rs", "app::net::client::connect", 42);

        assert_eq!(
            format_line(Severity::Info, &site, "connected"),
            "😊 client.connect[42]: connected"
        );
    }

    #[test]
    fn test_format_line_uses_severity_icon() {
        let site = CallSite::new("main.rs", "app::main", 7);

        for severity in Severity::ALL {
            let line = format_line(severity, &site, "x");
            assert!(line.starts_with(severity.icon()), "{}", line);
        }
    }

    #[test]
    fn test_format_line_display_message() {
        let site = CallSite::new("main.rs", "app::main::{{closure}}", 3);

        assert_eq!(
            format_line(Severity::Error, &site, format_args!("code {}", 500)),
            "☠ main.main[3]: code 500"
        );
    }
}
