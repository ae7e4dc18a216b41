//! Recursive model of parameters, return values and struct fields.

use crate::context::GenerationContext;
use crate::descriptor::{BasicKind, Descriptor, ValueKind};
use crate::error::{CodegenError, CodegenResult, fragment_of};
use crate::exceptions::{self, CallbackSignature};
use crate::naming::{CaseConvention, to_camel_case};
use crate::schema::RawParam;
use crate::types::ApiType;

/// A typed value, possibly a struct of nested values.
///
/// `children` is non-empty exactly when `ty` is [`ApiType::Map`]. When `enum_`
/// is set it holds the mapped enum name and wins over `ty` when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    pub name: Option<String>,
    pub ty: ApiType,
    pub children: Vec<ValueModel>,
    pub enum_: Option<String>,
}

impl ValueModel {
    /// Build a model from a schema entry, registering referenced enums.
    pub fn from_raw(raw: &RawParam, ctx: &mut GenerationContext) -> CodegenResult<Self> {
        let tag = raw
            .ty
            .as_deref()
            .ok_or_else(|| CodegenError::missing("type", raw))?;
        let ty = ApiType::resolve(tag)?;

        let children = match (ty, &raw.map_entries) {
            (ApiType::Map, Some(entries)) if !entries.is_empty() => entries
                .clone()
                .into_entries()
                .iter()
                .map(|entry| Self::field_from_raw(entry, ctx))
                .collect::<CodegenResult<Vec<_>>>()?,
            (ApiType::Map, _) => {
                return Err(CodegenError::EmptyMapEntries {
                    fragment: fragment_of(raw),
                });
            }
            _ => Vec::new(),
        };

        let enum_ = raw
            .enum_
            .as_deref()
            .map(|key| ctx.mapper_mut().map_enum(key, CaseConvention::Pascal))
            .transpose()?;

        Ok(Self {
            name: raw.name.clone(),
            ty,
            children,
            enum_,
        })
    }

    /// Struct fields must be named.
    fn field_from_raw(raw: &RawParam, ctx: &mut GenerationContext) -> CodegenResult<Self> {
        if raw.name.is_none() {
            return Err(CodegenError::missing("name", raw));
        }
        Self::from_raw(raw, ctx)
    }

    fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Render the descriptor constructing this value's runtime type.
    ///
    /// `context_name` is the mapped name of the enclosing function for
    /// parameters and returns, and the field name for struct fields.
    pub fn generate(
        &self,
        as_parameter: bool,
        context_name: &str,
        ctx: &GenerationContext,
    ) -> CodegenResult<Descriptor> {
        if let Some(enum_name) = &self.enum_ {
            return Ok(Descriptor::enum_type(ctx.library(), enum_name));
        }

        if !self.children.is_empty() {
            let fields = self
                .children
                .iter()
                .map(|child| {
                    let value = match &child.enum_ {
                        Some(enum_name) => Descriptor::enum_value(ctx.library(), enum_name),
                        None => child.generate(false, child.name_or_empty(), ctx)?,
                    };
                    Ok((child.name_or_empty().to_string(), value))
                })
                .collect::<CodegenResult<Vec<_>>>()?;

            return Ok(Descriptor::Struct(fields));
        }

        render_type(self.ty, as_parameter, context_name, ctx.library())
    }

    /// Human-readable signature fragment used in generated docs.
    ///
    /// # Examples
    ///
    /// ```
    /// use hybroid_codegen::{ApiType, ValueModel};
    ///
    /// let value = ValueModel {
    ///     name: Some("player_idx".into()),
    ///     ty: ApiType::Number,
    ///     children: vec![],
    ///     enum_: None,
    /// };
    /// assert_eq!(value.doc_signature(), "number playerIdx");
    /// ```
    pub fn doc_signature(&self) -> String {
        let name = to_camel_case(self.name_or_empty());

        if let Some(enum_name) = &self.enum_ {
            return format!("{enum_name} {name}").trim().to_string();
        }

        if !self.children.is_empty() {
            let entries = self
                .children
                .iter()
                .map(ValueModel::doc_signature)
                .collect::<Vec<_>>()
                .join(",\n  ");
            return format!("struct {{\n  {entries}\n}}");
        }

        format!("{} {name}", self.ty.doc_name()).trim().to_string()
    }
}

/// Generic per-type rendering after the function-name exceptions.
fn render_type(
    ty: ApiType,
    as_parameter: bool,
    context_name: &str,
    library: &str,
) -> CodegenResult<Descriptor> {
    if ty == ApiType::Entity {
        return Ok(Descriptor::RawEntity);
    }

    if let Some(descriptor) = exceptions::context_override(ty, context_name, library) {
        return Ok(descriptor);
    }

    let descriptor = match (ty, as_parameter) {
        (ApiType::Callback, true) => CallbackSignature::for_function(context_name)
            .map(|signature| signature.descriptor(library))
            .ok_or_else(|| CodegenError::UnresolvedCallbackSignature(context_name.to_string()))?,
        (ApiType::Bool, true) => Descriptor::Basic(BasicKind::Bool),
        (ApiType::Number, true) => Descriptor::Basic(BasicKind::Number),
        (ApiType::Fixed, true) => Descriptor::FixedPoint,
        (ApiType::List, true) => Descriptor::Basic(BasicKind::List),
        (ApiType::String, true) => Descriptor::Basic(BasicKind::Text),
        (ApiType::Bool, false) => Descriptor::Value(ValueKind::Bool),
        (ApiType::Number, false) => Descriptor::Value(ValueKind::Number),
        (ApiType::Fixed, false) => Descriptor::Value(ValueKind::Fixed),
        (ApiType::String, false) => Descriptor::Value(ValueKind::String),
        (ApiType::Callback, false) => Descriptor::Closure {
            params: vec![
                Descriptor::RawEntity,
                Descriptor::Basic(BasicKind::Number),
                Descriptor::RawEntity,
            ],
        },
        (ApiType::List, false) | (ApiType::Map | ApiType::Entity, _) => {
            return Err(CodegenError::Unrenderable {
                ty: ty.to_string(),
                context: context_name.to_string(),
            });
        }
    };

    Ok(descriptor)
}
