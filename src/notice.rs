use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeIcon {
    Check,
    Cross,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub icon: NoticeIcon,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            icon: NoticeIcon::Check,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            icon: NoticeIcon::Cross,
            message: message.into(),
        }
    }

    /// Generic transport failure notice, worded by the theme.
    pub fn connection_error(theme: NoticeTheme) -> Self {
        Self {
            kind: NoticeKind::Error,
            icon: NoticeIcon::Warning,
            message: theme.connection_message().to_string(),
        }
    }
}

/// Visual conventions for notices. The two page styles share one renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeTheme {
    Bootstrap,
    #[default]
    Tailwind,
}

impl NoticeTheme {
    pub fn connection_message(self) -> &'static str {
        match self {
            NoticeTheme::Bootstrap => "Request failed",
            NoticeTheme::Tailwind => "Connection error. Please try again.",
        }
    }

    pub fn scrolls_into_view(self) -> bool {
        matches!(self, NoticeTheme::Tailwind)
    }

    fn container_class(self, kind: NoticeKind) -> &'static str {
        match (self, kind) {
            (NoticeTheme::Bootstrap, NoticeKind::Success) => "alert alert-success mt-3",
            (NoticeTheme::Bootstrap, NoticeKind::Error) => "alert alert-danger mt-3",
            (NoticeTheme::Tailwind, NoticeKind::Success) => {
                "bg-green-50 border-green-500 text-green-700 border-l-4 p-4 mb-6 rounded"
            }
            (NoticeTheme::Tailwind, NoticeKind::Error) => {
                "bg-red-50 border-red-500 text-red-700 border-l-4 p-4 mb-6 rounded"
            }
        }
    }

    fn icon_class(self, kind: NoticeKind, icon: NoticeIcon) -> &'static str {
        match self {
            NoticeTheme::Bootstrap => match icon {
                NoticeIcon::Check => "fas fa-check-circle",
                NoticeIcon::Cross => "fas fa-times-circle",
                NoticeIcon::Warning => "fas fa-exclamation-triangle",
            },
            // tailwind pages only distinguish by variant
            NoticeTheme::Tailwind => match kind {
                NoticeKind::Success => "fas fa-check-circle text-green-500 text-xl mr-3",
                NoticeKind::Error => "fas fa-exclamation-circle text-red-500 text-xl mr-3",
            },
        }
    }
}

impl FromStr for NoticeTheme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bootstrap" => Ok(NoticeTheme::Bootstrap),
            "tailwind" => Ok(NoticeTheme::Tailwind),
            other => Err(format!("unknown notice theme '{other}'")),
        }
    }
}

/// The status area of a page. Holds at most one notice; the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeRegion {
    current: Option<Notice>,
}

impl NoticeRegion {
    pub fn show(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn render(&self, theme: NoticeTheme) -> String {
        self.current
            .as_ref()
            .map(|notice| render_notice(notice, theme))
            .unwrap_or_default()
    }
}

pub fn render_notice(notice: &Notice, theme: NoticeTheme) -> String {
    let kind = match notice.kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
    };
    let scroll = if theme.scrolls_into_view() {
        r#" data-scroll="nearest""#
    } else {
        ""
    };
    let message = escape_html(&notice.message);
    let icon = theme.icon_class(notice.kind, notice.icon);
    let class = theme.container_class(notice.kind);

    match theme {
        NoticeTheme::Bootstrap => format!(
            r#"<div class="{class}" role="alert" data-kind="{kind}"{scroll}><i class="{icon}"></i> {message}</div>"#
        ),
        NoticeTheme::Tailwind => format!(
            r#"<div class="{class}" role="alert" data-kind="{kind}"{scroll}><div class="flex items-center"><i class="{icon}"></i><p class="font-semibold">{message}</p></div></div>"#
        ),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // keeps user text from matching page template placeholders
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}
