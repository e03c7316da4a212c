use std::collections::BTreeSet;

///
/// Rendered
///
/// Output of a render step together with the imports it needs. Steps hand
/// their imports back explicitly; nothing is accumulated on the side.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub imports: BTreeSet<String>,
}

impl Rendered {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            imports: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.insert(import.into());
        self
    }

    /// Take the text, moving this step's imports into `imports`.
    pub fn into_text(self, imports: &mut BTreeSet<String>) -> String {
        imports.extend(self.imports);
        self.text
    }
}
