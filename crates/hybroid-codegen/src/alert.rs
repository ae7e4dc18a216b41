//! Diagnostic (alert) type synthesis.
//!
//! Each alert entry becomes a Go struct plus the accessor methods required by
//! Hybroid's `Alert` interface. Message and note templates are expanded by a
//! two-shape interpreter: a bare field reference, or a field passed through a
//! transform expression whose `{}` placeholder receives the field.

use crate::context::GenerationContext;
use crate::error::{CodegenError, CodegenResult};
use crate::schema::{RawAlert, RawSpecifier};
use indexmap::IndexMap;
use std::collections::BTreeSet;

const AUTO_GENERATED: &str = "// AUTO-GENERATED, DO NOT MANUALLY MODIFY!";

/// Field every alert carries first, locating the offending source snippet.
const SPECIFIER_FIELD: &str = "Specifier";
const DEFAULT_SPECIFIER_TYPE: &str = "Singleline";

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Sorted set of Go import paths required by a generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet(BTreeSet<String>);

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every module whose short name (last path segment) occurs in `expr`.
    pub fn record(&mut self, expr: &str, known_modules: &[String]) {
        for module in known_modules {
            let short = module.rsplit('/').next().unwrap_or(module);
            if !short.is_empty() && expr.contains(short) {
                self.0.insert(module.clone());
            }
        }
    }

    pub fn insert(&mut self, module: &str) {
        self.0.insert(module.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// A template substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    /// `receiver.field`
    Field(String),
    /// `transform` with `{}` replaced by `receiver.field`
    Transformed { field: String, transform: String },
}

impl Specifier {
    fn from_raw(raw: &RawSpecifier) -> CodegenResult<Self> {
        match raw {
            RawSpecifier::Field(field) => Ok(Specifier::Field(field.clone())),
            RawSpecifier::Transformed(entries) => entries
                .iter()
                .next()
                .map(|(field, transform)| Specifier::Transformed {
                    field: field.clone(),
                    transform: transform.clone(),
                })
                .ok_or_else(|| CodegenError::missing("field", raw)),
        }
    }

    fn render(&self, receiver: &str, ctx: &mut GenerationContext) -> String {
        match self {
            Specifier::Field(field) => format!("{receiver}.{field}"),
            Specifier::Transformed { field, transform } => {
                ctx.record_imports(transform);
                transform.replace("{}", &format!("{receiver}.{field}"))
            }
        }
    }
}

/// Derive a method receiver from a type name.
///
/// The capitals of `name` are joined and lower-cased; Go keywords get a `_`
/// prefix and a name without capitals falls back to `a`.
///
/// # Examples
///
/// ```
/// use hybroid_codegen::alert::to_receiver;
///
/// assert_eq!(to_receiver("UnexpectedToken"), "ut");
/// assert_eq!(to_receiver("InvalidFunction"), "_if");
/// ```
pub fn to_receiver(name: &str) -> String {
    let receiver: String = name
        .chars()
        .filter(char::is_ascii_uppercase)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if receiver.is_empty() {
        "a".to_string()
    } else if GO_KEYWORDS.contains(&receiver.as_str()) {
        format!("_{receiver}")
    } else {
        receiver
    }
}

/// Quote `s` as an interpreted Go string literal.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Expand a template into a Go string expression.
///
/// Without specifiers the template is returned as a literal; otherwise it
/// becomes a `fmt.Sprintf` call with one argument per specifier, in order.
pub fn format_template(
    template: &str,
    specifiers: &[Specifier],
    receiver: &str,
    ctx: &mut GenerationContext,
) -> String {
    if specifiers.is_empty() {
        return go_quote(template);
    }

    let args = specifiers
        .iter()
        .map(|specifier| specifier.render(receiver, ctx))
        .collect::<Vec<_>>()
        .join(", ");

    format!("fmt.Sprintf({}, {args})", go_quote(template))
}

/// A diagnostic type ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertModel {
    pub name: String,
    pub receiver: String,
    pub category: String,
    pub stage: String,
    pub fields: IndexMap<String, String>,
    pub message: String,
    pub message_format: Vec<Specifier>,
    pub note: String,
    pub note_format: Vec<Specifier>,
    pub id: u32,
}

impl AlertModel {
    /// Build an alert and assign it the next id of the batch.
    pub fn from_raw(raw: &RawAlert, stage: &str, ctx: &mut GenerationContext) -> CodegenResult<Self> {
        let name = raw
            .name
            .clone()
            .ok_or_else(|| CodegenError::missing("name", raw))?;
        let category = raw
            .category
            .clone()
            .ok_or_else(|| CodegenError::missing("type", raw))?;
        let message = raw
            .message
            .clone()
            .ok_or_else(|| CodegenError::missing("message", raw))?;

        let mut fields = IndexMap::new();
        fields.insert(
            SPECIFIER_FIELD.to_string(),
            DEFAULT_SPECIFIER_TYPE.to_string(),
        );
        for (field, ty) in &raw.fields {
            fields.insert(field.clone(), ty.clone());
        }

        let message_format = raw
            .message_format
            .iter()
            .map(Specifier::from_raw)
            .collect::<CodegenResult<Vec<_>>>()?;
        let note_format = raw
            .note_format
            .iter()
            .map(Specifier::from_raw)
            .collect::<CodegenResult<Vec<_>>>()?;

        Ok(Self {
            receiver: to_receiver(&name),
            name,
            category,
            stage: stage.to_string(),
            fields,
            message,
            message_format,
            note: raw.note.clone(),
            note_format,
            id: ctx.next_alert_id(),
        })
    }

    /// Stable identifier: prefix, zero-padded id, first letter of the stage.
    pub fn identifier(&self, prefix: &str) -> String {
        let stage_letter = self.stage.chars().next().map(String::from).unwrap_or_default();
        format!("{prefix}{:03}{stage_letter}", self.id)
    }

    /// Whether the rendered accessors call `fmt.Sprintf`.
    pub fn uses_fmt(&self) -> bool {
        !self.message_format.is_empty() || (!self.note.is_empty() && !self.note_format.is_empty())
    }

    /// Render the struct declaration and its accessors.
    pub fn render(&self, ctx: &mut GenerationContext) -> String {
        for ty in self.fields.values() {
            ctx.record_imports(ty);
        }

        let message = format_template(&self.message, &self.message_format, &self.receiver, ctx);
        let note = if self.note.is_empty() {
            go_quote("")
        } else {
            format_template(&self.note, &self.note_format, &self.receiver, ctx)
        };
        let id = go_quote(&self.identifier(ctx.alert_id_prefix()));
        let specifier = format!("&{}.{SPECIFIER_FIELD}", self.receiver);

        let mut code = String::new();
        code.push_str(&format!("type {} struct {{\n", self.name));
        for (field, ty) in &self.fields {
            code.push_str(&format!("\t{field} {ty}\n"));
        }
        code.push_str("}\n");

        let accessors = [
            ("GetMessage", "string", message.as_str()),
            ("GetSpecifier", "SnippetSpecifier", specifier.as_str()),
            ("GetNote", "string", note.as_str()),
            ("GetID", "string", id.as_str()),
            ("GetAlertType", "AlertType", self.category.as_str()),
        ];
        for (method, returns, value) in accessors {
            code.push_str(&format!(
                "\nfunc ({} *{}) {method}() {returns} {{\n\treturn {value}\n}}\n",
                self.receiver, self.name
            ));
        }

        code
    }
}

/// Render one alert batch into a complete `package alerts` source file.
///
/// Ids are assigned from the context's counter in input order.
pub fn render_alert_file(
    raw_alerts: &[RawAlert],
    stage: &str,
    ctx: &mut GenerationContext,
) -> CodegenResult<String> {
    let alerts = raw_alerts
        .iter()
        .map(|raw| AlertModel::from_raw(raw, stage, ctx))
        .collect::<CodegenResult<Vec<_>>>()?;

    let bodies: Vec<String> = alerts.iter().map(|alert| alert.render(ctx)).collect();

    let mut imports = ctx.imports().clone();
    if alerts.iter().any(AlertModel::uses_fmt) {
        imports.insert("fmt");
    }

    let mut code = String::new();
    code.push_str(AUTO_GENERATED);
    code.push_str("\n\npackage alerts\n");

    if !imports.is_empty() {
        code.push_str("\nimport (\n");
        for module in imports.iter() {
            code.push_str(&format!("\t{}\n", go_quote(module)));
        }
        code.push_str(")\n");
    }

    for body in &bodies {
        code.push('\n');
        code.push_str(AUTO_GENERATED);
        code.push('\n');
        code.push_str(body);
    }

    tracing::info!(stage, alerts = alerts.len(), "rendered alert batch");
    Ok(code)
}
