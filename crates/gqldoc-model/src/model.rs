use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

/// Output format of a generated documentation file.
///
/// Opaque to the writer; rendering adapters use it to route files into the
/// target framework's page/component structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// MDX page (Docusaurus and friends).
    Mdx,
    /// Plain Markdown page.
    Md,
    /// JSON sidecar (category metadata, manifests).
    Json,
    /// JavaScript component glue.
    Js,
    /// Python usage example.
    Py,
    /// Binary archive (bundled examples).
    Zip,
}

/// One output file produced by a documentation generation pass.
///
/// Descriptors are produced per run by the generation pipeline and consumed
/// exactly once by the output writer; they carry no identity across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Logical relative output path, used when no absolute override is given.
    pub path: String,
    /// Explicit absolute destination, bypassing the output-directory
    /// convention. Exempt from containment but not from safety checks; the
    /// writer refuses overrides that are not themselves absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<PathBuf>,
    /// Text payload.
    pub content: String,
    /// Raw byte payload; takes precedence over `content` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_content: Option<Vec<u8>>,
    /// Classification tag, opaque to the writer.
    pub kind: FileKind,
}

impl GeneratedFile {
    /// Creates a descriptor with a relative destination and text payload.
    pub fn new(path: impl Into<String>, content: impl Into<String>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            absolute_path: None,
            content: content.into(),
            binary_content: None,
            kind,
        }
    }

    /// Sets an explicit absolute destination for this descriptor.
    pub fn with_absolute_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.absolute_path = Some(path.into());
        self
    }

    /// Attaches a raw byte payload, which takes precedence over `content`.
    pub fn with_binary_content(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.binary_content = Some(bytes.into());
        self
    }

    /// Returns the bytes that should actually be written to disk.
    pub fn payload(&self) -> &[u8] {
        match &self.binary_content {
            Some(bytes) => bytes,
            None => self.content.as_bytes(),
        }
    }

    /// Resolves this descriptor to its single destination path.
    ///
    /// Uses the absolute override when present, otherwise joins the logical
    /// path onto `output_dir`. The result is lexically normalized (`.` and
    /// `..` components resolved) without touching the filesystem, so it is
    /// stable for destinations that do not exist yet.
    pub fn resolve(&self, output_dir: &Path) -> PathBuf {
        match &self.absolute_path {
            Some(absolute) => absolute.clean(),
            None => output_dir.join(&self.path).clean(),
        }
    }

    /// Provenance label for this descriptor's destination, used by
    /// duplicate-path diagnostics to name which field produced a resolution.
    pub fn provenance(&self) -> String {
        match &self.absolute_path {
            Some(absolute) => format!("absolutePath:{}", absolute.display()),
            None => format!("relativePath:{}", self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_path_under_output_dir() {
        let file = GeneratedFile::new("queries/get-user.mdx", "# Get User", FileKind::Mdx);
        let resolved = file.resolve(Path::new("/tmp/out"));
        assert_eq!(resolved, Path::new("/tmp/out/queries/get-user.mdx"));
    }

    #[test]
    fn resolves_traversal_segments_lexically() {
        let file = GeneratedFile::new("a/../b.md", "x", FileKind::Md);
        let resolved = file.resolve(Path::new("/tmp/out"));
        assert_eq!(resolved, Path::new("/tmp/out/b.md"));
    }

    #[test]
    fn absolute_override_wins_over_relative_path() {
        let file = GeneratedFile::new("ignored.md", "x", FileKind::Md)
            .with_absolute_path("/data/docs/site/page.md");
        let resolved = file.resolve(Path::new("/tmp/out"));
        assert_eq!(resolved, Path::new("/data/docs/site/page.md"));
    }

    #[test]
    fn provenance_names_the_originating_field() {
        let relative = GeneratedFile::new("a/b.md", "x", FileKind::Md);
        assert_eq!(relative.provenance(), "relativePath:a/b.md");

        let absolute = relative.clone().with_absolute_path("/data/docs/a/b.md");
        assert_eq!(absolute.provenance(), "absolutePath:/data/docs/a/b.md");
    }

    #[test]
    fn binary_payload_takes_precedence_over_text() {
        let file = GeneratedFile::new("examples.zip", "unused", FileKind::Zip)
            .with_binary_content(vec![0x50, 0x4b, 0x03, 0x04]);
        assert_eq!(file.payload(), &[0x50, 0x4b, 0x03, 0x04]);

        let text = GeneratedFile::new("page.mdx", "# Page", FileKind::Mdx);
        assert_eq!(text.payload(), b"# Page");
    }

    #[test]
    fn kind_serializes_to_adapter_format_tags() {
        let file = GeneratedFile::new("page.mdx", "# Page", FileKind::Mdx);
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["kind"], "mdx");
        assert!(json.get("absolute_path").is_none());
        assert!(json.get("binary_content").is_none());
    }
}
