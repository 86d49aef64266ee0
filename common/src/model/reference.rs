/// Server-supplied enumerations used to fill selection controls.
///
/// Each one is served as a flat JSON array of strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    LinesOfBusiness,
    FileTypes,
    TokenTypes,
    FieldTypes,
}

impl ReferenceKind {
    pub fn path(self) -> &'static str {
        match self {
            ReferenceKind::LinesOfBusiness => "/lines-of-business",
            ReferenceKind::FileTypes => "/file-types",
            ReferenceKind::TokenTypes => "/token-types",
            ReferenceKind::FieldTypes => "/field-types",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReferenceKind::LinesOfBusiness => "Line of Business",
            ReferenceKind::FileTypes => "File Type",
            ReferenceKind::TokenTypes => "Token Type",
            ReferenceKind::FieldTypes => "Field Type",
        }
    }
}

/// All four enumerations, as loaded by a screen that needs them.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ReferenceData {
    pub lines_of_business: Vec<String>,
    pub file_types: Vec<String>,
    pub token_types: Vec<String>,
    pub field_types: Vec<String>,
}
