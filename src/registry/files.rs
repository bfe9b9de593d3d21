//! File registry: resolves file paths to textual content for previews.

use std::collections::HashMap;

/// Contract the preview classifier consumes. Absent content degrades the
/// preview to the next classification, never to an error.
pub trait FileResolver {
    fn get_file_content(&self, path: &str) -> Option<&str>;
}

/// In-memory file registry.
///
/// Exact paths win; otherwise content falls back to a per-extension fixture
/// (the simulated filesystem serves the same sample content for every file
/// of a given type).
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: HashMap<String, String>,
    by_extension: HashMap<&'static str, &'static str>,
}

const SAMPLE_HTML: &str = "<!DOCTYPE html><html><head><title>Sample HTML</title></head>\
<body><h1>Sample HTML File</h1><p>This is a sample HTML file content.</p></body></html>";
const SAMPLE_JS: &str =
    "// Sample JavaScript file\nfunction hello() {\n  console.log(\"Hello, world!\");\n}\n\nhello();";
const SAMPLE_CSS: &str =
    "/* Sample CSS file */\nbody {\n  font-family: Arial, sans-serif;\n  margin: 0;\n  padding: 20px;\n}";
const SAMPLE_JSON: &str =
    "{\n  \"name\": \"sample\",\n  \"version\": \"1.0.0\",\n  \"description\": \"Sample JSON file\"\n}";
const SAMPLE_SH: &str = "#!/bin/bash\n# Sample shell script\nset -euo pipefail\necho \"backup started\"\n";

impl FileRegistry {
    /// An empty registry: every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with fixture content for the common extensions.
    pub fn with_fixtures() -> Self {
        let mut by_extension = HashMap::new();
        by_extension.insert("html", SAMPLE_HTML);
        by_extension.insert("js", SAMPLE_JS);
        by_extension.insert("css", SAMPLE_CSS);
        by_extension.insert("json", SAMPLE_JSON);
        by_extension.insert("sh", SAMPLE_SH);
        by_extension.insert("bash", SAMPLE_SH);
        Self { files: HashMap::new(), by_extension }
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl FileResolver for FileRegistry {
    fn get_file_content(&self, path: &str) -> Option<&str> {
        if let Some(content) = self.files.get(path) {
            return Some(content);
        }
        let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
        self.by_extension.get(ext).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_path_wins_over_extension_fixture() {
        let mut reg = FileRegistry::with_fixtures();
        reg.insert("/etc/nginx/index.html", "<html>custom</html>");
        assert_eq!(
            reg.get_file_content("/etc/nginx/index.html"),
            Some("<html>custom</html>")
        );
        assert_eq!(reg.get_file_content("/srv/www/other.html"), Some(SAMPLE_HTML));
    }

    #[test]
    fn unknown_extension_misses() {
        let reg = FileRegistry::with_fixtures();
        assert_eq!(reg.get_file_content("/var/lib/data.bin"), None);
        assert_eq!(reg.get_file_content("no-extension"), None);
    }

    #[test]
    fn empty_registry_always_misses() {
        let reg = FileRegistry::new();
        assert_eq!(reg.get_file_content("/srv/www/index.html"), None);
    }
}
