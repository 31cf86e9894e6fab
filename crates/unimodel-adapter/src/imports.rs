//! Import flattening.
//!
//! Each import statement becomes one [`ModelImport`] per imported item:
//!
//! - `import a.b, c` → `a.b`, `c`
//! - `from a import b, c` → `a.b`, `a.c`
//! - `from a import *` → `a` (on demand)
//! - `from ..pkg import x` → `..pkg.x`
//!
//! Aliases do not change the imported name.

use unimodel_ast::{CompilationUnit, ImportStatement};
use unimodel_core::model::ModelImport;
use unimodel_core::types::CodeElementType;

use crate::context::FileContext;

/// All imports of a compilation unit, in source order.
pub fn extract_imports(unit: &CompilationUnit, ctx: &FileContext<'_>) -> Vec<ModelImport> {
    unit.imports
        .iter()
        .flat_map(|statement| flatten_import(statement, ctx))
        .collect()
}

/// The dotted prefix of a `from` import, including relative-import dots.
fn from_prefix(statement: &ImportStatement) -> String {
    let dots = ".".repeat(statement.relative_level as usize);
    match &statement.module {
        Some(module) => format!("{}{}", dots, module),
        None => dots,
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else if prefix.ends_with('.') {
        format!("{}{}", prefix, name)
    } else {
        format!("{}.{}", prefix, name)
    }
}

pub fn flatten_import(statement: &ImportStatement, ctx: &FileContext<'_>) -> Vec<ModelImport> {
    let prefix = if statement.is_from_import() {
        from_prefix(statement)
    } else {
        String::new()
    };

    if statement.is_wildcard {
        let location = ctx.locate(&statement.meta, CodeElementType::ImportDeclaration);
        return vec![ModelImport::new(prefix, location)
            .on_demand()
            .with_static(statement.is_static)];
    }

    statement
        .items
        .iter()
        .map(|item| {
            let location = ctx.locate(&item.meta, CodeElementType::ImportDeclaration);
            ModelImport::new(join(&prefix, &item.name), location).with_static(statement.is_static)
        })
        .collect()
}
