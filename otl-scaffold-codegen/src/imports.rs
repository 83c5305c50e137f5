//! Auxiliary type import tracking.
//!
//! Generated components only import the auxiliary CMS types they actually
//! reference. [`TypeImportSet`] accumulates those references while fields are
//! resolved; once a type is marked it stays marked.

use std::ops::BitOr;

/// Default module that exports the CMS component types.
pub const CMS_TYPES_MODULE: &str = "@otl-core/cms-types";

/// Auxiliary named types a generated interface may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AuxType {
    /// `ColorReference`
    ColorReference = 0,
    /// `MediaReference`
    MediaReference = 1,
    /// `ResponsiveValue`
    ResponsiveValue = 2,
    /// `BlockInstance`
    BlockInstance = 3,
    /// `LocalizedString`
    LocalizedString = 4,
}

impl AuxType {
    /// All auxiliary types in import emission order.
    pub const ALL: [Self; 5] = [
        Self::ColorReference,
        Self::MediaReference,
        Self::ResponsiveValue,
        Self::BlockInstance,
        Self::LocalizedString,
    ];

    /// Returns the exported type name.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::ColorReference => "ColorReference",
            Self::MediaReference => "MediaReference",
            Self::ResponsiveValue => "ResponsiveValue",
            Self::BlockInstance => "BlockInstance",
            Self::LocalizedString => "LocalizedString",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of auxiliary types needed by a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeImportSet(u8);

impl TypeImportSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Marks a type as needed.
    pub fn mark(&mut self, ty: AuxType) {
        self.0 |= ty.bit();
    }

    /// Returns true if the type is marked.
    #[must_use]
    pub const fn contains(&self, ty: AuxType) -> bool {
        self.0 & ty.bit() != 0
    }

    /// Returns true if nothing is marked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Adds every type marked in `other`.
    pub fn extend(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Iterates marked types in emission order.
    pub fn iter(&self) -> impl Iterator<Item = AuxType> {
        let set = *self;
        AuxType::ALL.into_iter().filter(move |&ty| set.contains(ty))
    }

    /// Returns the marked type names in emission order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&'static str> {
        self.iter().map(AuxType::type_name).collect()
    }
}

impl BitOr for TypeImportSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl FromIterator<AuxType> for TypeImportSet {
    fn from_iter<I: IntoIterator<Item = AuxType>>(iter: I) -> Self {
        let mut set = Self::new();
        for ty in iter {
            set.mark(ty);
        }
        set
    }
}

/// Builds the `import type` line for the marked auxiliary types.
///
/// # Returns
/// `None` when nothing is marked, so callers can omit the statement.
#[must_use]
pub fn build_import_line(imports: &TypeImportSet) -> Option<String> {
    build_import_line_from(imports, CMS_TYPES_MODULE)
}

/// Builds the `import type` line against a custom types module.
#[must_use]
pub fn build_import_line_from(imports: &TypeImportSet, module: &str) -> Option<String> {
    if imports.is_empty() {
        return None;
    }
    Some(merged_import_line(&[], imports, module))
}

/// Builds a single `import type` line naming `leading` followed by the
/// marked auxiliary types.
///
/// Unlike [`build_import_line`], the line is produced even when `imports` is
/// empty, as long as `leading` names something.
#[must_use]
pub fn merged_import_line(leading: &[&str], imports: &TypeImportSet, module: &str) -> String {
    let mut names = leading.to_vec();
    names.extend(imports.iter().map(|t| -> &str { t.type_name() }));
    format!(
        "import type {{ {} }} from \"{}\";",
        names.join(", "),
        module
    )
}
