//! Function and enum models built from schema entries.

use crate::context::GenerationContext;
use crate::error::{CodegenError, CodegenResult};
use crate::naming::CaseConvention;
use crate::schema::{RawEnum, RawFunction};
use crate::value::ValueModel;

/// A host function with its mapped name.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionModel {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ValueModel>,
    pub returns: Vec<ValueModel>,
}

impl FunctionModel {
    pub fn from_raw(raw: &RawFunction, ctx: &mut GenerationContext) -> CodegenResult<Self> {
        let key = raw
            .func_name
            .as_deref()
            .ok_or_else(|| CodegenError::missing("func_name", raw))?;
        let name = ctx.mapper_mut().map_function(key, CaseConvention::Host)?;

        let parameters = raw
            .parameters
            .iter()
            .map(|param| ValueModel::from_raw(param, ctx))
            .collect::<CodegenResult<Vec<_>>>()?;
        let returns = raw
            .return_types
            .iter()
            .map(|ret| ValueModel::from_raw(ret, ctx))
            .collect::<CodegenResult<Vec<_>>>()?;

        Ok(Self {
            name,
            description: raw.comment.clone(),
            parameters,
            returns,
        })
    }
}

/// An enum with mapped name and variants in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumModel {
    pub name: String,
    pub variants: Vec<String>,
}

impl EnumModel {
    pub fn from_raw(raw: &RawEnum, ctx: &mut GenerationContext) -> CodegenResult<Self> {
        let key = raw
            .name
            .as_deref()
            .ok_or_else(|| CodegenError::missing("name", raw))?;
        let mapper = ctx.mapper_mut();
        let name = mapper.map_enum(key, CaseConvention::Pascal)?;

        let variants = raw
            .values
            .iter()
            .map(|value| mapper.map_enum_variant(key, value, CaseConvention::Host))
            .collect::<CodegenResult<Vec<_>>>()?;

        Ok(Self { name, variants })
    }
}
