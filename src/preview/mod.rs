//! Preview classification: decides what a process preview shows.
//!
//! Classification is pure given `(process, resolver)`. The precedence order
//! file -> web-service -> database -> port -> generic is load-bearing:
//! several predicates overlap (a process can carry both `file` and `port`),
//! and the first match wins.

use chrono::{DateTime, Duration, Local};

use crate::registry::{FileResolver, ProcessRecord};
use crate::view::fmt::{format_elapsed, format_load_detail, truncate_chars};

/// Snippet cutoff for most file kinds.
pub const SNIPPET_LIMIT: usize = 100;
/// Plain text gets a longer snippet.
pub const TEXT_SNIPPET_LIMIT: usize = 150;
/// Generic previews truncate the command to this many characters.
pub const COMMAND_LIMIT: usize = 20;

/// Service tags treated as web servers.
const WEB_SERVICES: &[&str] = &["nginx", "node"];
/// Service tags (and command substrings) treated as databases.
const DATABASE_SERVICES: &[&str] = &["mysql", "postgres", "mongo"];

/// File kinds recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Html,
    Js,
    Css,
    Json,
    Shell,
    Text,
    Image,
    Pdf,
    Unknown,
}

impl FileKind {
    /// Derives the kind from the path's extension. Image extensions match
    /// case-insensitively; everything else is case-sensitive.
    pub fn from_path(path: &str) -> FileKind {
        let Some((_, ext)) = path.rsplit_once('.') else {
            return FileKind::Unknown;
        };
        match ext {
            "html" => return FileKind::Html,
            "js" => return FileKind::Js,
            "css" => return FileKind::Css,
            "json" => return FileKind::Json,
            "sh" | "bash" => return FileKind::Shell,
            "txt" | "md" | "log" => return FileKind::Text,
            "pdf" => return FileKind::Pdf,
            _ => {}
        }
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "svg" => FileKind::Image,
            _ => FileKind::Unknown,
        }
    }

    /// Thumbnail badge text, when the kind warrants one.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            FileKind::Html => Some("HTML"),
            FileKind::Js => Some("JS"),
            FileKind::Css => Some("CSS"),
            FileKind::Json => Some("JSON"),
            FileKind::Shell => Some("BASH"),
            FileKind::Text => Some("TXT"),
            FileKind::Image => Some("IMG"),
            FileKind::Pdf => Some("PDF"),
            FileKind::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Html => "HTML",
            FileKind::Js => "JS",
            FileKind::Css => "CSS",
            FileKind::Json => "JSON",
            FileKind::Shell => "SHELL",
            FileKind::Text => "TEXT",
            FileKind::Image => "IMAGE",
            FileKind::Pdf => "PDF",
            FileKind::Unknown => "FILE",
        }
    }
}

/// What the preview overlay shows for one process.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewContent {
    File {
        kind: FileKind,
        filename: String,
        snippet: String,
    },
    WebService {
        service: String,
        port: Option<u16>,
    },
    Database {
        service: String,
    },
    Port {
        port: u16,
    },
    Generic {
        command: String,
    },
}

fn is_web_service(process: &ProcessRecord) -> bool {
    process
        .service
        .as_deref()
        .is_some_and(|s| WEB_SERVICES.contains(&s))
        || process.command.contains("http")
}

fn database_tag(process: &ProcessRecord) -> Option<String> {
    if let Some(service) = process.service.as_deref()
        && DATABASE_SERVICES.contains(&service)
    {
        return Some(service.to_string());
    }
    DATABASE_SERVICES
        .iter()
        .find(|tag| process.command.contains(*tag))
        .map(|tag| (*tag).to_string())
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Classifies a process into its preview content.
pub fn classify(process: &ProcessRecord, resolver: &dyn FileResolver) -> PreviewContent {
    if let Some(path) = process.file.as_deref()
        && let Some(content) = resolver.get_file_content(path)
    {
        let kind = FileKind::from_path(path);
        let limit = if kind == FileKind::Text {
            TEXT_SNIPPET_LIMIT
        } else {
            SNIPPET_LIMIT
        };
        return PreviewContent::File {
            kind,
            filename: basename(path).to_string(),
            snippet: truncate_chars(content, limit),
        };
    }

    if is_web_service(process) {
        let service = process
            .service
            .clone()
            .unwrap_or_else(|| "http".to_string());
        return PreviewContent::WebService {
            service,
            port: process.port,
        };
    }

    if let Some(service) = database_tag(process) {
        return PreviewContent::Database { service };
    }

    if let Some(port) = process.port {
        return PreviewContent::Port { port };
    }

    PreviewContent::Generic {
        command: truncate_chars(&process.command, COMMAND_LIMIT),
    }
}

/// Thumbnail badge for a table row, or `None` when the row gets no badge.
///
/// Same precedence as [`classify`] for the file branch; service badges also
/// cover tags (python, java) that classification alone would fold into the
/// generic preview.
pub fn thumbnail_badge(process: &ProcessRecord, resolver: &dyn FileResolver) -> Option<&'static str> {
    if let Some(path) = process.file.as_deref()
        && resolver.get_file_content(path).is_some()
    {
        return FileKind::from_path(path).badge();
    }
    match process.service.as_deref() {
        Some("nginx") => Some("NGINX"),
        Some("node") => Some("NODE"),
        Some("python") => Some("PY"),
        Some("java") => Some("JAVA"),
        Some("mysql") | Some("postgres") | Some("mongo") => Some("SQL"),
        _ => None,
    }
}

/// Full preview overlay model: classification plus derived header fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewModel {
    pub pid: u32,
    pub title: String,
    pub content: PreviewContent,
    pub cpu_text: String,
    pub memory_text: String,
    pub cpu_fraction: f64,
    pub memory_fraction: f64,
    pub user: String,
    pub command: String,
    pub uptime: String,
    /// Wall-clock start derived from `now - elapsed`; absent when the
    /// record's `time` field is not parseable.
    pub started_at: Option<String>,
    pub background: bool,
}

/// Builds the overlay model. `now` is passed in so the result is a pure
/// function of its inputs.
pub fn build_preview(
    process: &ProcessRecord,
    resolver: &dyn FileResolver,
    now: DateTime<Local>,
) -> PreviewModel {
    let started_at = process
        .elapsed_secs()
        .map(|secs| (now - Duration::seconds(secs)).format("%Y-%m-%d %H:%M:%S").to_string());

    PreviewModel {
        pid: process.pid,
        title: format!("Process Preview: {} (PID: {})", process.command, process.pid),
        content: classify(process, resolver),
        cpu_text: format_load_detail(process.cpu),
        memory_text: format_load_detail(process.memory),
        cpu_fraction: process.cpu,
        memory_fraction: process.memory,
        user: process.user.clone(),
        command: process.command.clone(),
        uptime: format_elapsed(&process.time),
        started_at,
        background: process.is_background(),
    }
}
