//! Registry file patching.
//!
//! Engine registry files import every component and register it by type:
//!
//! ```text
//! import { BlockRegistry } from "@otl-core/block-registry";
//! import { MarkdownBlock } from "@/components/blocks/markdown";
//!
//! export const blockRegistry = new BlockRegistry();
//!
//! blockRegistry.register("markdown", MarkdownBlock);
//!
//! /**
//!  * Custom Blocks
//!  */
//! ```
//!
//! Patching is plain text splicing guided by two markers: the last
//! `import` line and the `Custom` doc comment. The file is not parsed.

use crate::config::{ComponentKind, GeneratorConfig};
use crate::error::CodegenError;
use crate::typescript::component::component_name;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Doc-comment opening that marks where registrations are inserted.
pub const CUSTOM_COMMENT_ANCHOR: &str = "/**\n * Custom ";

/// A line starting with `import `. Besides `\n` and `\r`, the Unicode line and
/// paragraph separators also end a line.
const IMPORT_LINE_PATTERN: &str = r"(?mR)(?:^|[\u{2028}\u{2029}])import [^\r\n\u{2028}\u{2029}]+";

static IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMPORT_LINE_PATTERN).expect("import line pattern is valid"));

/// Inserts an import line and a registration line into registry source.
///
/// Returns the input unchanged when it already contains `register_line`.
/// Otherwise the import goes right after the last `import` line (or at the
/// top when there is none) and the registration goes right before the
/// `Custom` doc comment (or at the end when there is none).
///
/// # Arguments
/// * `content` - Current registry file text
/// * `import_line` - Import statement for the component
/// * `register_line` - Registration call for the component
#[must_use]
pub fn patch_registry(content: &str, import_line: &str, register_line: &str) -> String {
    if content.contains(register_line) {
        return content.to_string();
    }

    let mut output = match IMPORT_LINE.find_iter(content).last() {
        Some(last) => {
            let mut output = String::with_capacity(content.len() + import_line.len() + 1);
            output.push_str(&content[..last.end()]);
            output.push('\n');
            output.push_str(import_line);
            output.push_str(&content[last.end()..]);
            output
        }
        None => format!("{import_line}\n{content}"),
    };

    match output.find(CUSTOM_COMMENT_ANCHOR) {
        Some(idx) => output.insert_str(idx, &format!("{register_line}\n\n")),
        None => {
            let trimmed = output.trim_end().len();
            output.truncate(trimmed);
            output.push('\n');
            output.push_str(register_line);
            output.push('\n');
        }
    }

    output
}

/// Import and registration lines for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Component kind.
    pub kind: ComponentKind,
    /// Kebab-case schema type.
    pub type_name: String,
    /// Component function name.
    pub component_name: String,
    /// Import statement.
    pub import_line: String,
    /// Registration call.
    pub register_line: String,
}

impl RegistryEntry {
    /// Creates the entry for a component using the default configuration.
    #[must_use]
    pub fn new(kind: ComponentKind, type_name: &str) -> Self {
        Self::with_config(&GeneratorConfig::default(), kind, type_name)
    }

    /// Creates the entry for a component.
    #[must_use]
    pub fn with_config(config: &GeneratorConfig, kind: ComponentKind, type_name: &str) -> Self {
        let component_name = component_name(kind, type_name);
        let import_line = format!(
            "import {{ {} }} from \"{}\";",
            component_name,
            config.component_import_path(kind, type_name)
        );
        let register_line = format!(
            "{}.register(\"{}\", {});",
            kind.registry_variable(),
            type_name,
            component_name
        );

        Self {
            kind,
            type_name: type_name.to_string(),
            component_name,
            import_line,
            register_line,
        }
    }

    /// Returns true if `content` already registers this component.
    #[must_use]
    pub fn is_registered_in(&self, content: &str) -> bool {
        content.contains(&self.register_line)
    }

    /// Applies the entry to registry source text.
    #[must_use]
    pub fn apply(&self, content: &str) -> String {
        patch_registry(content, &self.import_line, &self.register_line)
    }
}

/// Result of updating a registry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file was rewritten with the new entry.
    Patched,
    /// The component was already registered; the file was left untouched.
    AlreadyRegistered,
}

/// Reads, patches and writes a registry file.
///
/// # Errors
/// Returns `CodegenError::Registry` if the file cannot be read or written.
pub fn update_registry_file(
    path: &Path,
    entry: &RegistryEntry,
) -> Result<PatchOutcome, CodegenError> {
    let content = std::fs::read_to_string(path).map_err(|e| CodegenError::registry(path, e))?;

    if entry.is_registered_in(&content) {
        tracing::debug!(
            "{} '{}' already registered in {}",
            entry.kind,
            entry.type_name,
            path.display()
        );
        return Ok(PatchOutcome::AlreadyRegistered);
    }

    let patched = entry.apply(&content);
    std::fs::write(path, patched).map_err(|e| CodegenError::registry(path, e))?;
    tracing::info!("Registered {} in {}", entry.component_name, path.display());

    Ok(PatchOutcome::Patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_REGISTRY: &str = r#"import { BlockRegistry } from "@otl-core/block-registry";
import { MarkdownBlock } from "@/components/blocks/markdown";

export const blockRegistry = new BlockRegistry();

blockRegistry.register("markdown", MarkdownBlock);

/**
 * Custom Blocks
 * To add your own blocks:
 * 1. Create your component in src/components/blocks/
 * 2. Import it above
 * 3. Register it: blockRegistry.register('your-block-name', YourBlock);
 */
"#;

    const SECTION_REGISTRY: &str = r#"import { SectionRegistry } from "@otl-core/section-registry";
import { GridSection } from "@/components/sections/grid";

export const sectionRegistry = new SectionRegistry();

sectionRegistry.register("grid", GridSection);

/**
 * Custom Sections
 */
"#;

    const IMPORT_B: &str = "import { B } from \"b\";";
    const REGISTER_B: &str = "r.register(\"b\", B);";

    fn line_index(content: &str, needle: &str) -> usize {
        content
            .lines()
            .position(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("no line containing {needle}"))
    }

    #[test]
    fn test_entry_lines() {
        let entry = RegistryEntry::new(ComponentKind::Block, "pricing-card");
        assert_eq!(
            entry.import_line,
            r#"import { PricingCardBlock } from "@/components/blocks/pricing-card";"#
        );
        assert_eq!(
            entry.register_line,
            r#"blockRegistry.register("pricing-card", PricingCardBlock);"#
        );

        let entry = RegistryEntry::new(ComponentKind::Section, "pricing-table");
        assert_eq!(
            entry.import_line,
            r#"import { PricingTableSection } from "@/components/sections/pricing-table";"#
        );
        assert_eq!(
            entry.register_line,
            r#"sectionRegistry.register("pricing-table", PricingTableSection);"#
        );
    }

    #[test]
    fn test_patch_exact_output() {
        let entry = RegistryEntry::new(ComponentKind::Section, "hero");
        let output = entry.apply(SECTION_REGISTRY);

        let expected = r#"import { SectionRegistry } from "@otl-core/section-registry";
import { GridSection } from "@/components/sections/grid";
import { HeroSection } from "@/components/sections/hero";

export const sectionRegistry = new SectionRegistry();

sectionRegistry.register("grid", GridSection);

sectionRegistry.register("hero", HeroSection);

/**
 * Custom Sections
 */
"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn test_import_after_last_import() {
        let entry = RegistryEntry::new(ComponentKind::Block, "hero");
        let output = entry.apply(BLOCK_REGISTRY);

        assert!(line_index(&output, "HeroBlock }") > line_index(&output, "MarkdownBlock }"));
    }

    #[test]
    fn test_registration_before_anchor() {
        let entry = RegistryEntry::new(ComponentKind::Block, "card");
        let output = entry.apply(BLOCK_REGISTRY);

        let register_idx = output
            .find(r#"blockRegistry.register("card""#)
            .expect("registration inserted");
        let anchor_idx = output.find("/**\n * Custom Blocks").expect("anchor kept");
        assert!(register_idx < anchor_idx);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let entry = RegistryEntry::new(ComponentKind::Block, "pricing-card");
        let first = entry.apply(BLOCK_REGISTRY);
        let second = entry.apply(&first);

        assert_eq!(first, second);
        assert_eq!(first.matches(&entry.register_line).count(), 1);
    }

    #[test]
    fn test_no_anchor_appends_at_end() {
        let minimal = "import { BlockRegistry } from \"@otl-core/block-registry\";\n\n\
                       export const blockRegistry = new BlockRegistry();\n\n\n";
        let output = patch_registry(
            minimal,
            "import { X } from \"x\";",
            "blockRegistry.register(\"x\", X);",
        );

        assert!(output.ends_with("new BlockRegistry();\nblockRegistry.register(\"x\", X);\n"));
        let register_at = output.find("register(\"x\"").expect("registration");
        assert!(register_at > output.find("new BlockRegistry").expect("registry"));
    }

    #[test]
    fn test_no_imports_prepends() {
        let no_imports = "export const blockRegistry = {};\n\n/**\n * Custom Blocks\n */\n";
        let entry = RegistryEntry::new(ComponentKind::Block, "card");
        let output = entry.apply(no_imports);

        assert_eq!(output.lines().next(), Some(entry.import_line.as_str()));
        let expected = "blockRegistry.register(\"card\", CardBlock);\n\n/**\n * Custom Blocks";
        assert!(output.contains(expected));
    }

    #[test]
    fn test_empty_file() {
        let output = patch_registry("", "import { A } from \"a\";", "r.register(\"a\", A);");
        assert_eq!(output, "import { A } from \"a\";\nr.register(\"a\", A);\n");
    }

    #[test]
    fn test_indented_import_is_not_an_import_line() {
        let content = "import { A } from \"a\";\nfunction f() {\n  import(\"lazy\");\n}\n";
        let output = patch_registry(content, IMPORT_B, REGISTER_B);

        let expected = "import { A } from \"a\";\nimport { B } from \"b\";\nfunction f()";
        assert!(output.starts_with(expected));
    }

    #[test]
    fn test_crlf_import_lines() {
        let content = "import { A } from \"a\";\r\nexport const r = 1;\r\n";
        let output = patch_registry(content, IMPORT_B, REGISTER_B);

        let expected = "import { A } from \"a\";\nimport { B } from \"b\";\r\nexport";
        assert!(output.starts_with(expected));
    }

    #[test]
    fn test_unicode_line_separators_end_import_lines() {
        let content = "import { A } from \"a\";\u{2028}x\nexport const r = 1;\n";
        let output = patch_registry(content, IMPORT_B, REGISTER_B);

        let expected = "import { A } from \"a\";\nimport { B } from \"b\";\u{2028}x\n";
        assert!(output.starts_with(expected));
    }

    #[test]
    fn test_import_after_paragraph_separator() {
        let content = "let a;\u{2029}import { A } from \"a\";\nexport const r = 1;\n";
        let output = patch_registry(content, IMPORT_B, REGISTER_B);

        let expected = "let a;\u{2029}import { A } from \"a\";\nimport { B } from \"b\";\nexport";
        assert!(output.starts_with(expected));
    }

    #[test]
    fn test_update_registry_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("block-registry.ts");
        std::fs::write(&path, BLOCK_REGISTRY).expect("write registry");

        let entry = RegistryEntry::new(ComponentKind::Block, "pricing-card");
        let outcome = update_registry_file(&path, &entry).expect("update");
        assert_eq!(outcome, PatchOutcome::Patched);

        let after_first = std::fs::read_to_string(&path).expect("read registry");
        assert!(after_first.contains(&entry.import_line));
        assert!(after_first.contains(&entry.register_line));

        let outcome = update_registry_file(&path, &entry).expect("update");
        assert_eq!(outcome, PatchOutcome::AlreadyRegistered);
        let after_second = std::fs::read_to_string(&path).expect("read registry");
        assert_eq!(after_second, after_first);
    }

    #[test]
    fn test_update_missing_registry_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.ts");

        let entry = RegistryEntry::new(ComponentKind::Section, "grid");
        let err = update_registry_file(&path, &entry).unwrap_err();
        assert!(matches!(err, CodegenError::Registry { .. }));
        assert!(err.to_string().contains("missing.ts"));
    }
}
