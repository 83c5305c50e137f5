//! Field type resolution.
//!
//! Maps a field descriptor to the TypeScript type expression used for its
//! property, recording any auxiliary CMS type the expression references.

use crate::imports::{AuxType, TypeImportSet};
use otl_scaffold_schema::{FieldDescriptor, FieldTag, TypeExpr};

/// Outcome of resolving a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The field maps to a concrete expression.
    Expr(TypeExpr),
    /// The field is a group; the caller synthesizes a nested declaration.
    Group,
}

/// Resolves the type expression for a single field.
///
/// Never fails: tags this version does not know about resolve to `unknown`
/// without touching `imports`.
///
/// # Arguments
/// * `field` - Field descriptor
/// * `imports` - Accumulator for the auxiliary types referenced
pub fn resolve_field_type(field: &FieldDescriptor, imports: &mut TypeImportSet) -> Resolution {
    let expr = match field.tag() {
        FieldTag::Text
        | FieldTag::Textarea
        | FieldTag::Url
        | FieldTag::Markdown
        | FieldTag::Html
        | FieldTag::Code
        | FieldTag::Richtext
        | FieldTag::Date
        | FieldTag::Color
        | FieldTag::FormSelector
        | FieldTag::FormPage => TypeExpr::String,
        FieldTag::Number => TypeExpr::Number,
        FieldTag::Boolean => TypeExpr::Boolean,
        FieldTag::Json | FieldTag::Object => TypeExpr::OpenMap,
        FieldTag::Array => TypeExpr::UnknownList,
        FieldTag::ContainerBehavior => TypeExpr::ContainerBehavior,

        FieldTag::Select if field.is_multiple() => TypeExpr::StringList,
        FieldTag::Select => TypeExpr::String,

        FieldTag::ThemeColor | FieldTag::ThemeBackgroundColor | FieldTag::ThemeForegroundColor => {
            imports.mark(AuxType::ColorReference);
            TypeExpr::ColorReference
        }
        FieldTag::Image => {
            imports.mark(AuxType::MediaReference);
            TypeExpr::MediaReference
        }
        FieldTag::Spacing | FieldTag::CssValue | FieldTag::Columns => {
            imports.mark(AuxType::ResponsiveValue);
            TypeExpr::ResponsiveString
        }
        FieldTag::Blocks => {
            imports.mark(AuxType::BlockInstance);
            TypeExpr::BlockInstanceList
        }
        FieldTag::LocalizedText => {
            imports.mark(AuxType::LocalizedString);
            TypeExpr::LocalizedString
        }

        FieldTag::Group => return Resolution::Group,
        FieldTag::Unknown(_) => TypeExpr::Unknown,
    };

    Resolution::Expr(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(field_type: &str) -> (Resolution, TypeImportSet) {
        let mut imports = TypeImportSet::new();
        let field = FieldDescriptor::new("test", field_type);
        let resolution = resolve_field_type(&field, &mut imports);
        (resolution, imports)
    }

    #[test]
    fn test_simple_mappings() {
        let table = [
            ("text", "string"),
            ("textarea", "string"),
            ("url", "string"),
            ("markdown", "string"),
            ("html", "string"),
            ("code", "string"),
            ("richtext", "string"),
            ("date", "string"),
            ("number", "number"),
            ("boolean", "boolean"),
            ("color", "string"),
            ("form-selector", "string"),
            ("form-page", "string"),
            ("json", "Record<string, unknown>"),
            ("object", "Record<string, unknown>"),
            ("array", "unknown[]"),
            ("container-behavior", r#""boxed" | "edged" | "ignore""#),
        ];

        for (field_type, expected) in table {
            let (resolution, imports) = resolve(field_type);
            match resolution {
                Resolution::Expr(expr) => assert_eq!(expr.ts_type(), expected, "tag {field_type}"),
                Resolution::Group => panic!("tag {field_type} resolved to group"),
            }
            assert!(imports.is_empty(), "tag {field_type} marked an import");
        }
    }

    #[test]
    fn test_select() {
        let mut imports = TypeImportSet::new();

        let single = FieldDescriptor::new("plan", "select");
        assert_eq!(
            resolve_field_type(&single, &mut imports),
            Resolution::Expr(TypeExpr::String)
        );

        let explicit_single = FieldDescriptor::new("plan", "select").with_multiple(false);
        assert_eq!(
            resolve_field_type(&explicit_single, &mut imports),
            Resolution::Expr(TypeExpr::String)
        );

        let multi = FieldDescriptor::new("plans", "select").with_multiple(true);
        assert_eq!(
            resolve_field_type(&multi, &mut imports),
            Resolution::Expr(TypeExpr::StringList)
        );
        assert!(imports.is_empty());
    }

    #[test]
    fn test_theme_colors_mark_color_reference_only() {
        for tag in [
            "theme-color",
            "theme-background-color",
            "theme-foreground-color",
        ] {
            let (resolution, imports) = resolve(tag);
            assert_eq!(resolution, Resolution::Expr(TypeExpr::ColorReference));
            assert_eq!(imports.type_names(), vec!["ColorReference"]);
        }
    }

    #[test]
    fn test_image_marks_media_reference() {
        let (resolution, imports) = resolve("image");
        assert_eq!(resolution, Resolution::Expr(TypeExpr::MediaReference));
        assert_eq!(imports.type_names(), vec!["MediaReference"]);
    }

    #[test]
    fn test_responsive_tags() {
        for tag in ["spacing", "css-value", "columns"] {
            let (resolution, imports) = resolve(tag);
            assert_eq!(resolution, Resolution::Expr(TypeExpr::ResponsiveString));
            assert_eq!(imports.type_names(), vec!["ResponsiveValue"]);
        }
    }

    #[test]
    fn test_blocks_and_localized_text() {
        let (resolution, imports) = resolve("blocks");
        assert_eq!(resolution, Resolution::Expr(TypeExpr::BlockInstanceList));
        assert_eq!(imports.type_names(), vec!["BlockInstance"]);

        let (resolution, imports) = resolve("localized-text");
        assert_eq!(resolution, Resolution::Expr(TypeExpr::LocalizedString));
        assert_eq!(imports.type_names(), vec!["LocalizedString"]);
    }

    #[test]
    fn test_group_sentinel() {
        let (resolution, imports) = resolve("group");
        assert_eq!(resolution, Resolution::Group);
        assert!(imports.is_empty());
    }

    #[test]
    fn test_unknown_tag() {
        let (resolution, imports) = resolve("quantum-flux");
        assert_eq!(resolution, Resolution::Expr(TypeExpr::Unknown));
        assert!(imports.is_empty());
    }

    #[test]
    fn test_imports_accumulate() {
        let mut imports = TypeImportSet::new();
        resolve_field_type(&FieldDescriptor::new("a", "image"), &mut imports);
        resolve_field_type(&FieldDescriptor::new("b", "theme-color"), &mut imports);
        resolve_field_type(&FieldDescriptor::new("c", "text"), &mut imports);

        assert_eq!(
            imports.type_names(),
            vec!["ColorReference", "MediaReference"]
        );
    }
}
