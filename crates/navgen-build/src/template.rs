//! Placeholder templates.
//!
//! A template is parsed once into literal text, placeholder slots and
//! optional sections. Rendering walks the segments a single time; values
//! are copied into the output and never scanned again, so a value that
//! happens to look like a token stays literal.

use navgen_schema::token::{find_token, token, token_name};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};
use thiserror::Error as ThisError;

///
/// Placeholder
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum Placeholder {
    AnimationDefaultParams,
    AnimationParamsToInner1,
    AnimationParamsToInner2,
    DefaultNavController,
    ExperimentalApi,
    Imports,
    InnerNavHost,
    NavGraphsDeclaration,
}

impl Placeholder {
    pub const ALL: [Self; 8] = [
        Self::AnimationDefaultParams,
        Self::AnimationParamsToInner1,
        Self::AnimationParamsToInner2,
        Self::DefaultNavController,
        Self::ExperimentalApi,
        Self::Imports,
        Self::InnerNavHost,
        Self::NavGraphsDeclaration,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AnimationDefaultParams => "ANIMATION_DEFAULT_PARAMS",
            Self::AnimationParamsToInner1 => "ANIMATION_PARAMS_TO_INNER_1",
            Self::AnimationParamsToInner2 => "ANIMATION_PARAMS_TO_INNER_2",
            Self::DefaultNavController => "DEFAULT_NAV_CONTROLLER",
            Self::ExperimentalApi => "EXPERIMENTAL_API",
            Self::Imports => "IMPORTS_BLOCK",
            Self::InnerNavHost => "INNER_NAV_HOST",
            Self::NavGraphsDeclaration => "NAV_GRAPHS_DECLARATION",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The bracketed form that appears in template text.
    #[must_use]
    pub fn token(self) -> String {
        token(self.name())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// Section
///
/// A demarcated region that is either rendered in full or skipped.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Section {
    Scaffold,
}

impl Section {
    pub const ALL: [Self; 1] = [Self::Scaffold];

    #[must_use]
    pub const fn start_marker(self) -> &'static str {
        match self {
            Self::Scaffold => "SCAFFOLD_START",
        }
    }

    #[must_use]
    pub const fn end_marker(self) -> &'static str {
        match self {
            Self::Scaffold => "SCAFFOLD_END",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scaffold => f.write_str("scaffold"),
        }
    }
}

///
/// TemplateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum TemplateError {
    #[error("template is missing required placeholder {}", .0.token())]
    MissingPlaceholder(Placeholder),

    #[error("{0} section opened inside another section")]
    NestedSection(Section),

    #[error("{0} section closed without being opened")]
    UnexpectedSectionEnd(Section),

    #[error("{0} section is never closed")]
    UnterminatedSection(Section),
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Slot {
        placeholder: Placeholder,
        indent: String,
    },
    Section {
        section: Section,
        body: Vec<Segment>,
    },
}

enum Marker {
    Slot(Placeholder),
    Open(Section),
    Close(Section),
}

impl Marker {
    fn from_name(name: &str) -> Option<Self> {
        if let Some(placeholder) = Placeholder::from_name(name) {
            return Some(Self::Slot(placeholder));
        }

        Section::ALL.into_iter().find_map(|section| {
            if section.start_marker() == name {
                Some(Self::Open(section))
            } else if section.end_marker() == name {
                Some(Self::Close(section))
            } else {
                None
            }
        })
    }
}

///
/// Template
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text. Bracketed names that are not known placeholders
    /// or section markers are kept as literal text.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut stack: Vec<(Section, Vec<Segment>)> = Vec::new();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = 0;

        while let Some(span) = find_token(&source[rest..]) {
            let start = rest + span.start;
            let end = rest + span.end;
            let name = token_name(source, start..end);

            let Some(marker) = Marker::from_name(name) else {
                literal.push_str(&source[rest..end]);
                rest = end;
                continue;
            };

            literal.push_str(&source[rest..start]);
            rest = end;

            let current = stack.last_mut().map_or(&mut segments, |(_, body)| body);
            if !literal.is_empty() {
                current.push(Segment::Literal(std::mem::take(&mut literal)));
            }

            match marker {
                Marker::Slot(placeholder) => current.push(Segment::Slot {
                    placeholder,
                    indent: line_indent(source, start).to_string(),
                }),
                Marker::Open(section) => {
                    if !stack.is_empty() {
                        return Err(TemplateError::NestedSection(section));
                    }
                    stack.push((section, Vec::new()));
                }
                Marker::Close(section) => match stack.pop() {
                    Some((open, body)) if open == section => {
                        segments.push(Segment::Section { section, body });
                    }
                    _ => return Err(TemplateError::UnexpectedSectionEnd(section)),
                },
            }
        }

        if let Some((section, _)) = stack.pop() {
            return Err(TemplateError::UnterminatedSection(section));
        }

        literal.push_str(&source[rest..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Fail unless every listed placeholder appears somewhere in the template.
    pub fn require(&self, placeholders: &[Placeholder]) -> Result<(), TemplateError> {
        let present = self.placeholders();

        match placeholders.iter().find(|p| !present.contains(p)) {
            Some(missing) => Err(TemplateError::MissingPlaceholder(*missing)),
            None => Ok(()),
        }
    }

    /// Every placeholder used, including those inside sections.
    #[must_use]
    pub fn placeholders(&self) -> BTreeSet<Placeholder> {
        let mut found = BTreeSet::new();
        collect_placeholders(&self.segments, &mut found);

        found
    }

    #[must_use]
    pub fn has_section(&self, section: Section) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Section { section: found, .. } if *found == section))
    }

    #[must_use]
    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut out = String::new();
        render_segments(&self.segments, ctx, &mut out);

        out
    }
}

///
/// RenderContext
///
/// Values for each placeholder plus the set of sections to keep. A
/// placeholder without a value renders as nothing.
///

#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    values: BTreeMap<Placeholder, String>,
    sections: BTreeSet<Section>,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<String>) -> &mut Self {
        self.values.insert(placeholder, value.into());
        self
    }

    pub fn include(&mut self, section: Section) -> &mut Self {
        self.sections.insert(section);
        self
    }

    #[must_use]
    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }
}

fn collect_placeholders(segments: &[Segment], found: &mut BTreeSet<Placeholder>) {
    for segment in segments {
        match segment {
            Segment::Literal(_) => {}
            Segment::Slot { placeholder, .. } => {
                found.insert(*placeholder);
            }
            Segment::Section { body, .. } => collect_placeholders(body, found),
        }
    }
}

fn render_segments(segments: &[Segment], ctx: &RenderContext, out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Slot {
                placeholder,
                indent,
            } => {
                if let Some(value) = ctx.get(*placeholder) {
                    push_indented(out, value, indent);
                }
            }
            Segment::Section { section, body } => {
                if ctx.sections.contains(section) {
                    render_segments(body, ctx, out);
                }
            }
        }
    }
}

// Continuation lines of a multi-line value line up with the line the slot sits on.
fn push_indented(out: &mut String, value: &str, indent: &str) {
    for (i, line) in value.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
}

// Leading whitespace of the line containing byte `pos`.
fn line_indent(source: &str, pos: usize) -> &str {
    let line_start = source[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..pos];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();

    &line[..width]
}

///
/// TESTS
///
