//! Attribute discovery.
//!
//! Attributes come from two places:
//! - scope assignments (`name = value` directly in a class body or at module
//!   level)
//! - initializer bodies: `self.name = value` among the direct statements of
//!   a method the language profile marks as an initializer
//!
//! Names are unique per class. The first declaration of a name wins.

use std::collections::HashSet;

use tracing::trace;
use unimodel_ast::{Assignment, Expression, LiteralValue, MethodDeclaration};
use unimodel_core::model::{ModelAttribute, VariableDeclaration};
use unimodel_core::types::{CodeElementType, Visibility};

use crate::context::FileContext;
use crate::language::LanguageProfile;

/// Type of the value assigned by `assignment`.
///
/// An annotation wins. Otherwise literals map to the profile's literal type
/// names and a bare call to a capitalized name (`Point(1, 2)`) is taken as a
/// constructor call. Anything else is the profile's default type.
pub fn infer_type(assignment: &Assignment, profile: &LanguageProfile) -> String {
    if let Some(annotation) = &assignment.type_annotation {
        return annotation.name.clone();
    }
    let types = &profile.literal_types;
    match &assignment.right {
        Expression::Literal(literal) => match &literal.value {
            LiteralValue::Number(text) if text.contains('.') => types.float.clone(),
            LiteralValue::Number(_) => types.integer.clone(),
            LiteralValue::String(_) => types.string.clone(),
            LiteralValue::Boolean(_) => types.boolean.clone(),
            LiteralValue::Null | LiteralValue::Ellipsis => profile.default_type.clone(),
        },
        Expression::ListLiteral(_) => types.list.clone(),
        Expression::TupleLiteral(_) => types.tuple.clone(),
        Expression::DictLiteral(_) => types.dict.clone(),
        Expression::MethodInvocation(call)
            if call.receiver.is_none()
                && call.name.identifier.starts_with(|c: char| c.is_uppercase()) =>
        {
            call.name.identifier.clone()
        }
        _ => profile.default_type.clone(),
    }
}

fn declaration(
    name: &str,
    assignment: &Assignment,
    ctx: &FileContext<'_>,
) -> VariableDeclaration {
    let location = ctx.locate(&assignment.meta, CodeElementType::FieldDeclaration);
    VariableDeclaration::new(name, infer_type(assignment, &ctx.profile), location)
        .with_initializer(ctx.expression_text(&assignment.right))
        .as_attribute()
}

/// Attribute for a class- or module-scope `name = value`.
///
/// The attribute's type is the annotation if there is one, otherwise the
/// default type; the inferred type stays on the declaration record.
pub fn scope_attribute(
    assignment: &Assignment,
    class_name: &str,
    ctx: &FileContext<'_>,
) -> Option<ModelAttribute> {
    let target = assignment.target_name()?;
    let mut attribute = ModelAttribute::new(
        class_name,
        declaration(&target.identifier, assignment, ctx),
        Visibility::Public,
    );
    attribute.type_name = match &assignment.type_annotation {
        Some(annotation) => annotation.name.clone(),
        None => ctx.profile.default_type.clone(),
    };
    attribute.location = ctx.locate(&target.meta, CodeElementType::FieldDeclaration);
    Some(attribute)
}

/// Attribute for `self.name = value`, if `assignment` has that shape.
pub fn receiver_attribute(
    assignment: &Assignment,
    class_name: &str,
    ctx: &FileContext<'_>,
) -> Option<ModelAttribute> {
    let field = assignment.target_field()?;
    let receiver = field.receiver.as_simple_name()?;
    if !ctx.profile.is_self_name(&receiver.identifier) {
        return None;
    }
    let mut attribute = ModelAttribute::new(
        class_name,
        declaration(&field.name.identifier, assignment, ctx),
        Visibility::Public,
    );
    attribute.location = ctx.locate(&field.meta, CodeElementType::FieldDeclaration);
    Some(attribute)
}

/// Attributes assigned through the receiver in an initializer's body.
///
/// Returns nothing for methods that are not initializers. Only direct body
/// statements are scanned; assignments nested in control flow are not.
pub fn initializer_attributes(
    method: &MethodDeclaration,
    class_name: &str,
    ctx: &FileContext<'_>,
) -> Vec<ModelAttribute> {
    if !ctx.profile.is_initializer(method.identifier()) {
        return Vec::new();
    }
    let mut seen = HashSet::new();
    let mut attributes = Vec::new();
    for statement in method.body_statements() {
        let Some(assignment) = statement.as_assignment() else {
            continue;
        };
        let Some(attribute) = receiver_attribute(assignment, class_name, ctx) else {
            continue;
        };
        if seen.insert(attribute.name.clone()) {
            trace!(class = class_name, attribute = %attribute.name, ty = %attribute.type_name, "initializer attribute");
            attributes.push(attribute);
        }
    }
    attributes
}

/// Scope attributes for a list of assignments, first name wins.
pub fn scope_attributes<'n>(
    assignments: impl IntoIterator<Item = &'n Assignment>,
    class_name: &str,
    ctx: &FileContext<'_>,
) -> Vec<ModelAttribute> {
    let mut seen = HashSet::new();
    let mut attributes = Vec::new();
    for assignment in assignments {
        if let Some(attribute) = scope_attribute(assignment, class_name, ctx) {
            if seen.insert(attribute.name.clone()) {
                trace!(class = class_name, attribute = %attribute.name, "scope attribute");
                attributes.push(attribute);
            }
        }
    }
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::options::AdapterOptions;
    use unimodel_ast::{FileId, NodeFactory, Statement};

    const INIT: &str =
        "def __init__(self, x):\n    self.a = 1\n    self.b = 'hi'\n    self.a = x\n    other.c = 2\n    d = 3\n";

    fn ctx(text: &str) -> FileContext<'_> {
        FileContext::new("src/pkg/m.py", text, Language::Python, &AdapterOptions::default())
    }

    /// `receiver.field = value` as an expression statement.
    fn field_assignment(f: &NodeFactory<'_>, line: &str, value: Expression) -> Statement {
        let range = f.locate(line);
        let dot = line.find('.').unwrap_or_default();
        let eq = line.find(" =").unwrap_or_default();
        let target = f.field_access(
            range.start..range.start + eq,
            f.simple_name(range.start..range.start + dot),
            f.simple_name(range.start + dot + 1..range.start + eq),
        );
        f.expression_statement(f.assignment(range, target, value)).into()
    }

    fn init_method(f: &NodeFactory<'_>, name: &str) -> MethodDeclaration {
        let mut method = f.method_declaration(0..INIT.len(), f.simple_name(f.locate("__init__")));
        method.name.identifier = name.to_string();
        let one = f.number(f.locate("1"));
        let hi = f.string(f.locate("'hi'"));
        let x = f.simple_name(f.locate("x\n"));
        let two = f.number(f.locate("2"));
        let d = f.locate("d = 3");
        let statements = vec![
            field_assignment(f, "self.a = 1", one.into()),
            field_assignment(f, "self.b = 'hi'", hi.into()),
            field_assignment(f, "self.a = x", x.into()),
            field_assignment(f, "other.c = 2", two.into()),
            f.expression_statement(f.assignment(
                d.clone(),
                f.simple_name(d.start..d.start + 1),
                f.number(d.end - 1..d.end),
            ))
            .into(),
        ];
        method.body = Some(f.block(f.locate("self.a = 1").start..INIT.len(), statements));
        method
    }

    mod inference_tests {
        use super::*;

        fn assign(text: &str, right: impl Into<Expression>) -> Assignment {
            let f = NodeFactory::new(FileId::new(0), text);
            f.assignment(0..text.len(), f.simple_name(0..1), right)
        }

        #[test]
        fn literals() {
            let profile = LanguageProfile::python();
            let text = "x = 1.5";
            let f = NodeFactory::new(FileId::new(0), text);
            assert_eq!(infer_type(&assign(text, f.number(4..7)), &profile), "float");
            assert_eq!(infer_type(&assign(text, f.number(4..5)), &profile), "int");
            assert_eq!(
                infer_type(&assign(text, f.literal(4..7, LiteralValue::Boolean(true))), &profile),
                "bool"
            );
            assert_eq!(infer_type(&assign(text, f.list_literal(4..7, vec![])), &profile), "list");
            assert_eq!(infer_type(&assign(text, f.dict_literal(4..7, vec![])), &profile), "dict");
            assert_eq!(
                infer_type(&assign(text, f.literal(4..7, LiteralValue::Null)), &profile),
                "Object"
            );
        }

        #[test]
        fn constructor_call() {
            let text = "p = Point(1)";
            let f = NodeFactory::new(FileId::new(0), text);
            let call = f.method_invocation(4..12, None, f.simple_name(4..9), vec![f.number(10..11).into()]);
            assert_eq!(infer_type(&assign(text, call), &LanguageProfile::python()), "Point");

            let lower = f.method_invocation(4..12, None, f.simple_name(5..9), vec![]);
            assert_eq!(infer_type(&assign(text, lower), &LanguageProfile::python()), "Object");
        }

        #[test]
        fn annotation_wins() {
            let text = "x: float = 1";
            let f = NodeFactory::new(FileId::new(0), text);
            let mut assignment = f.assignment(0..12, f.simple_name(0..1), f.number(11..12));
            assignment.type_annotation = Some(f.type_name(3..8));
            assert_eq!(infer_type(&assignment, &LanguageProfile::python()), "float");
        }
    }

    mod initializer_tests {
        use super::*;

        #[test]
        fn receiver_assignments_only() {
            let f = NodeFactory::new(FileId::new(0), INIT);
            let method = init_method(&f, "__init__");
            let attributes = initializer_attributes(&method, "pkg.m.A", &ctx(INIT));
            let names: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(names, vec!["a", "b"]);
        }

        #[test]
        fn first_assignment_decides_type() {
            let f = NodeFactory::new(FileId::new(0), INIT);
            let method = init_method(&f, "_build");
            let attributes = initializer_attributes(&method, "pkg.m.A", &ctx(INIT));
            assert_eq!(attributes[0].type_name, "int");
            assert_eq!(attributes[0].variable_declaration.initializer.as_deref(), Some("1"));
            assert_eq!(attributes[1].type_name, "str");
            assert!(attributes[1].variable_declaration.is_attribute);
        }

        #[test]
        fn location_is_the_field_access() {
            let f = NodeFactory::new(FileId::new(0), INIT);
            let method = init_method(&f, "__init__");
            let attributes = initializer_attributes(&method, "pkg.m.A", &ctx(INIT));
            let start = INIT.find("self.a").unwrap();
            assert_eq!(attributes[0].location.position.start_offset, start);
            assert_eq!(attributes[0].location.position.end_offset, start + 6);
            assert_eq!(attributes[0].location.element_type, CodeElementType::FieldDeclaration);
            assert_eq!(attributes[0].class_name, "pkg.m.A");
            assert_eq!(attributes[0].visibility, Visibility::Public);
        }

        #[test]
        fn other_methods_ignored() {
            let f = NodeFactory::new(FileId::new(0), INIT);
            let method = init_method(&f, "setup");
            assert!(initializer_attributes(&method, "pkg.m.A", &ctx(INIT)).is_empty());
        }

        #[test]
        fn scanning_twice_gives_the_same_set() {
            let f = NodeFactory::new(FileId::new(0), INIT);
            let method = init_method(&f, "__init__");
            let first = initializer_attributes(&method, "pkg.m.A", &ctx(INIT));
            let second = initializer_attributes(&method, "pkg.m.A", &ctx(INIT));
            assert_eq!(first, second);
        }
    }

    mod scope_tests {
        use super::*;

        #[test]
        fn simple_names_become_attributes() {
            let text = "x = 1\ny = 2\nx = 3\nobj.z = 4\n";
            let f = NodeFactory::new(FileId::new(0), text);
            let x = f.assignment(0..5, f.simple_name(0..1), f.number(4..5));
            let y = f.assignment(6..11, f.simple_name(6..7), f.number(10..11));
            let x_again = f.assignment(12..17, f.simple_name(12..13), f.number(16..17));
            let field = f.field_access(18..23, f.simple_name(18..21), f.simple_name(22..23));
            let z = f.assignment(18..27, field, f.number(26..27));
            let assignments = [x, y, x_again, z];

            let attributes = scope_attributes(&assignments, "pkg.m", &ctx(text));
            let names: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(names, vec!["x", "y"]);
            assert_eq!(attributes[0].type_name, "Object");
            assert_eq!(attributes[0].variable_declaration.type_name, "int");
            assert_eq!(attributes[0].location.position.end_offset, 1);
            assert!(!attributes[0].is_static);
        }
    }
}
