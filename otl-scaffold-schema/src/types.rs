//! Field tag definitions.
//!
//! A field tag is the string discriminator that identifies the semantic kind
//! of a schema field (`"text"`, `"image"`, `"group"`, ...). The backend may
//! introduce new tags at any time, so parsing never fails: anything not
//! listed here becomes [`FieldTag::Unknown`].

use std::fmt;

/// Known schema field tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldTag {
    /// Single-line text.
    Text,
    /// Multi-line text.
    Textarea,
    /// URL.
    Url,
    /// Markdown source.
    Markdown,
    /// Raw HTML.
    Html,
    /// Source code.
    Code,
    /// Rich text document.
    Richtext,
    /// ISO date string.
    Date,
    /// Numeric input.
    Number,
    /// Checkbox / toggle.
    Boolean,
    /// Free color value.
    Color,
    /// Form picker.
    FormSelector,
    /// Form page picker.
    FormPage,
    /// Arbitrary JSON document.
    Json,
    /// Arbitrary object.
    Object,
    /// Arbitrary array.
    Array,
    /// Container behavior (`boxed`, `edged`, `ignore`).
    ContainerBehavior,
    /// Select, single or multiple.
    Select,
    /// Theme color.
    ThemeColor,
    /// Theme background color.
    ThemeBackgroundColor,
    /// Theme foreground color.
    ThemeForegroundColor,
    /// Image / media.
    Image,
    /// Responsive spacing.
    Spacing,
    /// Responsive CSS value.
    CssValue,
    /// Responsive grid columns.
    Columns,
    /// Nested block list.
    Blocks,
    /// Localized text.
    LocalizedText,
    /// Group of child fields.
    Group,
    /// Tag not known to this version of the scaffolder.
    Unknown(String),
}

impl FieldTag {
    /// Parses a field tag from its wire name.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "url" => Self::Url,
            "markdown" => Self::Markdown,
            "html" => Self::Html,
            "code" => Self::Code,
            "richtext" => Self::Richtext,
            "date" => Self::Date,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "color" => Self::Color,
            "form-selector" => Self::FormSelector,
            "form-page" => Self::FormPage,
            "json" => Self::Json,
            "object" => Self::Object,
            "array" => Self::Array,
            "container-behavior" => Self::ContainerBehavior,
            "select" => Self::Select,
            "theme-color" => Self::ThemeColor,
            "theme-background-color" => Self::ThemeBackgroundColor,
            "theme-foreground-color" => Self::ThemeForegroundColor,
            "image" => Self::Image,
            "spacing" => Self::Spacing,
            "css-value" => Self::CssValue,
            "columns" => Self::Columns,
            "blocks" => Self::Blocks,
            "localized-text" => Self::LocalizedText,
            "group" => Self::Group,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns the wire name of the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Url => "url",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Code => "code",
            Self::Richtext => "richtext",
            Self::Date => "date",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Color => "color",
            Self::FormSelector => "form-selector",
            Self::FormPage => "form-page",
            Self::Json => "json",
            Self::Object => "object",
            Self::Array => "array",
            Self::ContainerBehavior => "container-behavior",
            Self::Select => "select",
            Self::ThemeColor => "theme-color",
            Self::ThemeBackgroundColor => "theme-background-color",
            Self::ThemeForegroundColor => "theme-foreground-color",
            Self::Image => "image",
            Self::Spacing => "spacing",
            Self::CssValue => "css-value",
            Self::Columns => "columns",
            Self::Blocks => "blocks",
            Self::LocalizedText => "localized-text",
            Self::Group => "group",
            Self::Unknown(name) => name,
        }
    }

    /// Returns true if this is a group tag.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group)
    }

    /// Returns true if the tag was not recognized.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
