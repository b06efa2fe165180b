//! Transient status notices printed to stderr

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
            NoticeKind::Warning => "⚠",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            NoticeKind::Success => "\x1b[32m",
            NoticeKind::Error => "\x1b[31m",
            NoticeKind::Warning => "\x1b[33m",
        }
    }
}

pub(crate) fn format_notice(kind: NoticeKind, message: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}\x1b[0m {}", kind.ansi(), kind.icon(), message)
    } else {
        format!("{} {}", kind.icon(), message)
    }
}

pub(crate) fn notify(kind: NoticeKind, message: &str, use_color: bool) {
    eprintln!("{}", format_notice(kind, message, use_color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_notice_has_icon_and_message() {
        assert_eq!(
            format_notice(NoticeKind::Success, "Copied!", false),
            "✓ Copied!"
        );
        assert_eq!(
            format_notice(NoticeKind::Error, "Invalid Base64 string", false),
            "✗ Invalid Base64 string"
        );
    }

    #[test]
    fn colored_notice_resets_after_icon() {
        let s = format_notice(NoticeKind::Warning, "careful", true);
        assert!(s.starts_with("\x1b[33m⚠\x1b[0m"));
        assert!(s.ends_with(" careful"));
    }
}
