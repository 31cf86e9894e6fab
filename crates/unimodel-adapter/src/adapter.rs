//! The model adapter.
//!
//! [`ModelAdapter`] turns a [`SourceSet`] of compilation units into one
//! [`UnifiedModel`]. Each file is handled on its own:
//!
//! 1. Absent return types are replaced by the profile's no-return marker,
//!    on the AST itself.
//! 2. Imports are flattened.
//! 3. Every top-level type declaration becomes a [`ModelClass`] with its
//!    generalization edges, attributes and operations.
//! 4. Top-level methods, statements, comments or imports produce one module
//!    pseudo-class named after the module.
//!
//! Per-file results are merged in file order on the calling thread. With the
//! `parallel` feature and [`AdapterOptions::parallel`] set, step 1 to 4 run
//! on the rayon pool.

use tracing::{debug, enabled, info, trace, warn, Level};
use unimodel_ast::{
    walk_compilation_unit, Annotation, Assignment, Comment, CompilationUnit, MethodDeclaration,
    NodeMeta, SourceFile, SourceSet, Statement, TypeDeclaration, TypeName, VisitResult, Visitor,
};
use unimodel_core::hash::ContentHash;
use unimodel_core::model::{
    ClassFlags, CodeFragment, FileRecord, ModelAnnotation, ModelClass, ModelComment,
    ModelGeneralization, ModelImport, ModelOperation, ModelParameter, OperationFlags,
    StatementContainer, TypeRef, UnifiedModel, VariableDeclaration,
};
use unimodel_core::types::{CodeElementType, Visibility};

use crate::attributes::{initializer_attributes, scope_attributes};
use crate::context::FileContext;
use crate::error::{AdapterError, AdapterResult};
use crate::imports::extract_imports;
use crate::language::{Language, LanguageProfile};
use crate::options::AdapterOptions;
use crate::resolve::{param_offset, resolve_qualified_type_name};

// ============================================================================
// Adapter
// ============================================================================

/// Builds a unified model from parsed source files.
#[derive(Debug, Clone, Default)]
pub struct ModelAdapter {
    options: AdapterOptions,
}

impl ModelAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AdapterOptions) -> Self {
        ModelAdapter { options }
    }

    pub fn options(&self) -> &AdapterOptions {
        &self.options
    }

    /// Build the model for every file in `sources`.
    ///
    /// Files in an unsupported language are skipped with a warning, or fail
    /// the build when [`AdapterOptions::strict`] is set. Return types of the
    /// sources' methods are normalized in place.
    pub fn build(&self, sources: &mut SourceSet) -> AdapterResult<UnifiedModel> {
        let per_file = self.extract_all(sources)?;

        let mut model = UnifiedModel::new();
        for file_model in per_file.into_iter().flatten() {
            model.merge(file_model);
        }
        info!(
            files = model.files().count(),
            classes = model.classes().len(),
            operations = model.operation_count(),
            attributes = model.attribute_count(),
            generalizations = model.generalizations().len(),
            "built unified model"
        );
        Ok(model)
    }

    #[cfg(feature = "parallel")]
    fn extract_all(&self, sources: &mut SourceSet) -> AdapterResult<Vec<Option<UnifiedModel>>> {
        use rayon::prelude::*;

        if self.options.parallel {
            return sources
                .files_mut()
                .par_iter_mut()
                .map(|file| self.extract_or_skip(file))
                .collect();
        }
        sources.iter_mut().map(|file| self.extract_or_skip(file)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn extract_all(&self, sources: &mut SourceSet) -> AdapterResult<Vec<Option<UnifiedModel>>> {
        if self.options.parallel {
            debug!("parallel extraction requested but the `parallel` feature is off");
        }
        sources.iter_mut().map(|file| self.extract_or_skip(file)).collect()
    }

    /// `None` for a file the adapter has no profile for, unless strict.
    fn extract_or_skip(&self, file: &mut SourceFile) -> AdapterResult<Option<UnifiedModel>> {
        match self.extract_file(file) {
            Ok(model) => Ok(Some(model)),
            Err(AdapterError::UnsupportedLanguage { path }) if !self.options.strict => {
                warn!(file = %path, "skipping file in unsupported language");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Build the model contributed by one file.
    pub fn extract_file(&self, file: &mut SourceFile) -> AdapterResult<UnifiedModel> {
        let language = Language::from_path(&file.path)?;
        let ctx = FileContext::new(&file.path, &file.text, language, &self.options);
        normalize_return_types(&mut file.unit, &ctx.profile);

        let mut model = UnifiedModel::new();
        let imports = extract_imports(&file.unit, &ctx);

        for declaration in &file.unit.types {
            let (class, generalizations) = build_class(declaration, &imports, &ctx);
            for generalization in generalizations {
                model.add_generalization(generalization);
            }
            model.add_class(class);
        }

        if file.unit.has_module_scope_content() {
            let module = build_module_class(&file.unit, &imports, &ctx);
            debug!(
                file = %ctx.file_path,
                module = module.name(),
                operations = module.operations.len(),
                "synthesized module class"
            );
            model.add_class(module);
        }

        let class_count = model.classes().len();
        if enabled!(Level::DEBUG) {
            let counts = DeclarationCounter::count(&file.unit);
            debug!(
                file = %ctx.file_path,
                language = %language,
                classes = class_count,
                types = counts.types,
                methods = counts.methods,
                assignments = counts.assignments,
                "extracted file"
            );
        }
        model.add_file(FileRecord {
            path: ctx.file_path.clone(),
            source_folder: ctx.source_folder.clone(),
            module_name: ctx.module_name.clone(),
            language: language.as_str().to_string(),
            content_hash: ContentHash::compute(file.text.as_bytes()),
            class_count,
        });
        Ok(model)
    }
}

// ============================================================================
// Return type normalization
// ============================================================================

/// Give every method without a return type the profile's no-return marker.
///
/// The marker gets an empty span where the header ends: the body's start, or
/// the method's end when there is no body.
pub fn normalize_return_types(unit: &mut CompilationUnit, profile: &LanguageProfile) {
    let methods = unit
        .methods
        .iter_mut()
        .chain(unit.types.iter_mut().flat_map(|t| t.methods.iter_mut()));
    for method in methods {
        if method.return_type.is_none() {
            let position = match &method.body {
                Some(body) => body.meta.position.collapse_to_start(),
                None => method.meta.position.collapse_to_end(),
            };
            let meta = NodeMeta::new(position, method.meta.unit);
            method.return_type = Some(TypeName::new(meta, &profile.no_return_type));
        }
    }
}

// ============================================================================
// Declaration counts
// ============================================================================

#[derive(Debug, Default)]
struct DeclarationCounter {
    types: usize,
    methods: usize,
    assignments: usize,
}

impl DeclarationCounter {
    fn count(unit: &CompilationUnit) -> Self {
        let mut counter = DeclarationCounter::default();
        walk_compilation_unit(&mut counter, unit);
        counter
    }
}

impl<'a> Visitor<'a> for DeclarationCounter {
    fn visit_type_declaration(&mut self, _node: &'a TypeDeclaration) -> VisitResult {
        self.types += 1;
        VisitResult::Continue
    }

    fn visit_method_declaration(&mut self, _node: &'a MethodDeclaration) -> VisitResult {
        self.methods += 1;
        VisitResult::Continue
    }

    fn visit_assignment(&mut self, _node: &'a Assignment) -> VisitResult {
        self.assignments += 1;
        VisitResult::Continue
    }
}

// ============================================================================
// Classes
// ============================================================================

fn class_flags(declaration: &TypeDeclaration) -> ClassFlags {
    let m = &declaration.modifiers;
    ClassFlags {
        is_abstract: m.is_abstract,
        is_interface: m.is_interface,
        is_final: m.is_final,
        is_static: m.is_static,
        is_annotation: m.is_annotation,
        is_enum: m.is_enum,
        is_record: m.is_record,
        is_module: false,
        is_top_level: m.is_top_level,
    }
}

/// First line of the declaration's text.
fn header_text(meta: &NodeMeta, ctx: &FileContext<'_>) -> String {
    let text = ctx.text_of(meta);
    text.lines().next().unwrap_or_default().trim_end().to_string()
}

fn build_class(
    declaration: &TypeDeclaration,
    imports: &[ModelImport],
    ctx: &FileContext<'_>,
) -> (ModelClass, Vec<ModelGeneralization>) {
    let location = ctx.locate(&declaration.meta, CodeElementType::TypeDeclaration);
    let mut class = ModelClass::new(&ctx.module_name, &declaration.name.identifier, location);
    class.imports = imports.to_vec();
    class.visibility = declaration.visibility;
    class.flags = class_flags(declaration);
    class.actual_signature = header_text(&declaration.meta, ctx);
    class.annotations = convert_annotations(&declaration.annotations, ctx);

    let mut generalizations = Vec::new();
    if let Some(primary) = declaration.primary_super_type() {
        class.superclass = Some(TypeRef::parse(&primary.name));
    }
    for super_type in &declaration.super_types {
        generalizations.push(ModelGeneralization {
            child: class.name().to_string(),
            parent: resolve_qualified_type_name(&super_type.name, imports, &ctx.package_name),
            location: ctx.locate(&super_type.meta, CodeElementType::Type),
        });
    }

    for attribute in scope_attributes(&declaration.assignments, class.name(), ctx) {
        class.add_attribute_if_absent(attribute);
    }
    class.comments = convert_comments(&declaration.comments, ctx);

    let class_name = class.name().to_string();
    for method in &declaration.methods {
        class.operations.push(build_operation(method, &class_name, ctx));
        for attribute in initializer_attributes(method, &class_name, ctx) {
            class.add_attribute_if_absent(attribute);
        }
    }

    class.container = statement_container(&declaration.statements, &class_name, &declaration.meta, ctx);

    debug!(
        class = %class_name,
        attributes = class.attributes.len(),
        operations = class.operations.len(),
        supers = generalizations.len(),
        "built class"
    );
    (class, generalizations)
}

fn build_module_class(
    unit: &CompilationUnit,
    imports: &[ModelImport],
    ctx: &FileContext<'_>,
) -> ModelClass {
    let location = ctx.locate(&unit.meta, CodeElementType::TypeDeclaration);
    let mut class = ModelClass::module(&ctx.module_name, location);
    class.imports = imports.to_vec();
    class.visibility = Visibility::Public;
    class.actual_signature = class.name().to_string();

    let class_name = class.name().to_string();
    for attribute in scope_attributes(unit.module_assignments(), &class_name, ctx) {
        class.add_attribute_if_absent(attribute);
    }
    class.operations = unit
        .methods
        .iter()
        .map(|method| build_operation(method, &class_name, ctx))
        .collect();
    class.comments = convert_comments(&unit.comments, ctx);
    class.container = statement_container(&unit.statements, &class_name, &unit.meta, ctx);
    class
}

/// Container for side-effecting statements, `None` when there are none.
fn statement_container(
    statements: &[Statement],
    owner: &str,
    owner_meta: &NodeMeta,
    ctx: &FileContext<'_>,
) -> Option<StatementContainer> {
    if statements.is_empty() {
        return None;
    }
    let location = ctx.locate(owner_meta, CodeElementType::TypeDeclaration);
    let mut container = StatementContainer::new(owner, location);
    container.statements = code_fragments(statements, ctx);
    Some(container)
}

fn code_fragments(statements: &[Statement], ctx: &FileContext<'_>) -> Vec<CodeFragment> {
    statements
        .iter()
        .map(|statement| CodeFragment {
            kind: statement.kind().as_str().to_string(),
            text: ctx.text_of(statement.meta()).to_string(),
            location: ctx.locate(statement.meta(), CodeElementType::Statement),
        })
        .collect()
}

// ============================================================================
// Operations
// ============================================================================

fn operation_flags(method: &MethodDeclaration) -> OperationFlags {
    let m = &method.modifiers;
    OperationFlags {
        is_static: m.is_static,
        is_final: m.is_final,
        is_abstract: m.is_abstract,
        is_native: m.is_native,
        is_synchronized: m.is_synchronized,
        is_constructor: m.is_constructor,
        is_async: m.is_async,
    }
}

/// Declaration text from the method start through the body's first
/// character, or the whole method when it has no body.
fn signature_text(method: &MethodDeclaration, ctx: &FileContext<'_>) -> String {
    let start = method.meta.position.start_offset;
    let end = match &method.body {
        Some(body) => {
            let body_start = body.meta.position.start_offset;
            let first = ctx
                .text
                .get(body_start..)
                .and_then(|rest| rest.chars().next())
                .map_or(1, char::len_utf8);
            body_start + first
        }
        None => method.meta.position.end_offset,
    };
    match ctx.text.get(start..end) {
        Some(text) => text.to_string(),
        None => {
            warn!(
                method = method.identifier(),
                file = %ctx.file_path,
                start,
                end,
                "signature span outside source text"
            );
            String::new()
        }
    }
}

fn build_parameters(method: &MethodDeclaration, ctx: &FileContext<'_>) -> Vec<ModelParameter> {
    let offset = param_offset(method, &ctx.profile);
    method
        .parameters
        .iter()
        .skip(offset)
        .map(|param| {
            let location = ctx.locate(&param.meta, CodeElementType::Type);
            let type_name = match &param.type_annotation {
                Some(annotation) if !annotation.name.is_empty() => annotation.name.clone(),
                _ => ctx.profile.default_type.clone(),
            };
            let mut declaration = VariableDeclaration::new(param.identifier(), &type_name, location)
                .as_parameter(param.varargs);
            let default_value = param.default_value.as_ref().map(|d| ctx.expression_text(d));
            if let Some(text) = &default_value {
                declaration = declaration.with_initializer(text);
            }
            let mut parameter = ModelParameter::input(declaration, TypeRef::parse(&type_name));
            parameter.varargs = param.varargs;
            parameter.kwargs = param.kwargs;
            parameter.default_value = default_value;
            parameter
        })
        .collect()
}

/// Build the operation for `method`, owned by the class named `class_name`.
pub fn build_operation(method: &MethodDeclaration, class_name: &str, ctx: &FileContext<'_>) -> ModelOperation {
    let location = ctx.locate(&method.meta, CodeElementType::MethodDeclaration);
    let mut operation = ModelOperation::new(method.identifier(), class_name, location);
    operation.annotations = convert_annotations(&method.annotations, ctx);
    operation.parameters = build_parameters(method, ctx);
    operation.visibility = method.visibility;
    operation.flags = operation_flags(method);
    operation.comments = convert_comments(&method.comments, ctx);

    let return_type = match &method.return_type {
        Some(return_type) => return_type.name.as_str(),
        None => ctx.profile.no_return_type.as_str(),
    };
    if !ctx.profile.is_no_return(return_type) {
        let location = ctx.locate(&method.meta, CodeElementType::Type);
        operation
            .parameters
            .push(ModelParameter::returning(TypeRef::parse(return_type), location));
    }

    if let Some(body) = &method.body {
        let owner = format!("{}.{}", class_name, method.identifier());
        let mut container = StatementContainer::new(owner, ctx.locate(&body.meta, CodeElementType::Statement));
        container.statements = code_fragments(&body.statements, ctx);
        operation.body = Some(container);
    }
    operation.actual_signature = signature_text(method, ctx);

    trace!(
        class = class_name,
        operation = %operation.name,
        parameters = operation.input_parameters().count(),
        "built operation"
    );
    operation
}

// ============================================================================
// Annotations and comments
// ============================================================================

fn convert_annotations(annotations: &[Annotation], ctx: &FileContext<'_>) -> Vec<ModelAnnotation> {
    annotations
        .iter()
        .map(|annotation| {
            let mut converted = ModelAnnotation::new(
                &annotation.name,
                ctx.locate(&annotation.meta, CodeElementType::Annotation),
            );
            converted.arguments = annotation
                .arguments
                .iter()
                .map(|argument| ctx.expression_text(argument))
                .collect();
            converted.member_values = annotation
                .member_values
                .iter()
                .map(|pair| (pair.name.clone(), ctx.expression_text(&pair.value)))
                .collect();
            converted
        })
        .collect()
}

fn convert_comments(comments: &[Comment], ctx: &FileContext<'_>) -> Vec<ModelComment> {
    comments
        .iter()
        .map(|comment| {
            ModelComment::new(
                &comment.content,
                comment.kind,
                ctx.locate(&comment.meta, comment.kind.element_type()),
            )
        })
        .collect()
}
