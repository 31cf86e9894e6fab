//! Resolution utilities.
//!
//! Pure functions over paths, import lists and declarations:
//!
//! - [`resolve_qualified_type_name`]: qualify a type name from imports or the
//!   current package
//! - [`param_offset`]: how many leading parameters are implicit receivers
//! - [`extract_source_folder`], [`extract_file_path`], [`extract_package_name`],
//!   [`extract_module_name`]: location facts derived from a file path
//!
//! None of them fail. A lookup that finds nothing falls back to the input.

use unimodel_ast::MethodDeclaration;
use unimodel_core::model::ModelImport;

use crate::language::LanguageProfile;

// ============================================================================
// Qualified names
// ============================================================================

/// Qualify `name` using `imports` and `current_package`.
///
/// Rules, first match wins:
/// 1. `name` already contains a `.`: returned unchanged.
/// 2. An item import (not on-demand) equal to `name` or ending in `.name`:
///    that import's name.
/// 3. The first import whose name has no `.` (a bare module): `module.name`.
/// 4. A non-empty `current_package`: `current_package.name`.
/// 5. Otherwise `name` unchanged.
pub fn resolve_qualified_type_name(
    name: &str,
    imports: &[ModelImport],
    current_package: &str,
) -> String {
    if name.contains('.') {
        return name.to_string();
    }

    let suffix = format!(".{}", name);
    if let Some(import) = imports
        .iter()
        .filter(|i| !i.on_demand)
        .find(|i| i.name == name || i.name.ends_with(&suffix))
    {
        return import.name.clone();
    }

    if let Some(module) = imports.iter().find(|i| !i.name.contains('.')) {
        return format!("{}.{}", module.name, name);
    }

    if !current_package.is_empty() {
        return format!("{}.{}", current_package, name);
    }

    name.to_string()
}

// ============================================================================
// Parameter offset
// ============================================================================

/// Number of leading parameters that are implicit receivers.
///
/// Only languages with explicit receiver parameters skip anything. A first
/// parameter named like the instance receiver is skipped unless the method
/// is static. One named like the class receiver is skipped only when the
/// class-method decorator is present (matched ignoring ASCII case).
pub fn param_offset(method: &MethodDeclaration, profile: &LanguageProfile) -> usize {
    if !profile.implicit_receivers {
        return 0;
    }
    let Some(first) = method.parameters.first() else {
        return 0;
    };
    let identifier = first.identifier();

    if !profile.instance_receiver.is_empty()
        && identifier == profile.instance_receiver
        && !method.modifiers.is_static
    {
        return 1;
    }

    if !profile.class_receiver.is_empty()
        && identifier == profile.class_receiver
        && !profile.class_method_decorator.is_empty()
        && method.has_annotation_ignore_case(&profile.class_method_decorator)
    {
        return 1;
    }

    0
}

// ============================================================================
// Path inference
// ============================================================================

fn segments(path: &str) -> Vec<&str> {
    path.split(['/', '\\']).filter(|s| !s.is_empty()).collect()
}

/// Index one past the last directory segment that is a source folder marker.
fn source_folder_end(dirs: &[&str], markers: &[String]) -> usize {
    dirs.iter()
        .rposition(|segment| markers.iter().any(|m| m == segment))
        .map_or(0, |index| index + 1)
}

fn is_identifier_like(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// The path with forward slashes.
pub fn extract_file_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// The longest directory prefix of `path` ending in a marker folder, or the
/// empty string (project root) when no directory is a marker.
///
/// ```
/// use unimodel_adapter::resolve::extract_source_folder;
///
/// let markers = vec!["src".to_string()];
/// assert_eq!(extract_source_folder("proj/src/pkg/mod.py", &markers), "proj/src");
/// assert_eq!(extract_source_folder("pkg/mod.py", &markers), "");
/// ```
pub fn extract_source_folder(path: &str, markers: &[String]) -> String {
    let parts = segments(path);
    let dirs = &parts[..parts.len().saturating_sub(1)];
    let end = source_folder_end(dirs, markers);
    let prefix = dirs[..end].join("/");
    if path.starts_with(['/', '\\']) && !prefix.is_empty() {
        format!("/{}", prefix)
    } else {
        prefix
    }
}

/// Dotted package: the identifier-like directories between the source
/// folder and the file.
pub fn extract_package_name(path: &str, markers: &[String]) -> String {
    let parts = segments(path);
    let dirs = &parts[..parts.len().saturating_sub(1)];
    let start = source_folder_end(dirs, markers);
    dirs[start..]
        .iter()
        .copied()
        .filter(|segment| is_identifier_like(segment))
        .collect::<Vec<_>>()
        .join(".")
}

/// Dotted module: the package plus the file's base name without extension.
pub fn extract_module_name(path: &str, markers: &[String]) -> String {
    let parts = segments(path);
    let file_name = parts.last().copied().unwrap_or_default();
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let package = extract_package_name(path, markers);
    if package.is_empty() {
        stem.to_string()
    } else {
        format!("{}.{}", package, stem)
    }
}
