//! Declaration extraction from the C syntax tree.

use glint_analysis_common::{
    DeclId, Declarations, FunctionDecl, LineSpan, Location, StorageDuration, VariableDecl,
};
use std::path::Path;
use tree_sitter::{Node, Tree};

/// Walk the tree and collect every function definition and variable
/// declaration, classified by storage duration.
pub(crate) fn collect(tree: &Tree, source: &str, path: &Path, in_header: bool) -> Declarations {
    let mut out = Declarations::default();
    visit(tree.root_node(), source, path, in_header, false, &mut out);
    out
}

/// `in_function` tracks whether the walk is under a function body, which
/// decides how a plain declaration is classified.
fn visit(
    node: Node<'_>,
    source: &str,
    path: &Path,
    in_header: bool,
    in_function: bool,
    out: &mut Declarations,
) {
    match node.kind() {
        "function_definition" => {
            if let Some(function) = function_decl(node, source, path, in_header) {
                out.functions.push(function);
            }
            for name_node in parameter_name_nodes(node) {
                out.variables.push(variable_decl(
                    name_node,
                    source,
                    path,
                    StorageDuration::Automatic,
                    in_header,
                ));
            }
            if let Some(body) = node.child_by_field_name("body") {
                visit(body, source, path, in_header, true, out);
            }
        }
        "declaration" => {
            // File-scope variables and explicit `static`/`extern` locals
            // have program lifetime; everything else is automatic.
            let storage = if !in_function
                || has_storage_class(node, source, "static")
                || has_storage_class(node, source, "extern")
            {
                StorageDuration::Static
            } else {
                StorageDuration::Automatic
            };
            for name_node in variable_declarator_names(node) {
                out.variables
                    .push(variable_decl(name_node, source, path, storage, in_header));
            }
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                visit(child, source, path, in_header, in_function, out);
            }
        }
    }
}

fn variable_decl(
    name_node: Node<'_>,
    source: &str,
    path: &Path,
    storage: StorageDuration,
    in_header: bool,
) -> VariableDecl {
    let name = node_text(name_node, source);
    let line = name_node.start_position().row as u32 + 1;
    VariableDecl {
        id: DeclId::new(path, line, &name),
        name,
        location: Location {
            file: path.to_path_buf(),
            line,
            column: name_node.start_position().column as u32,
        },
        storage,
        in_header,
    }
}

/// Extract a FunctionDecl from a function_definition node. The span covers
/// the whole definition, return type through closing brace.
fn function_decl(
    node: Node<'_>,
    source: &str,
    path: &Path,
    in_header: bool,
) -> Option<FunctionDecl> {
    let name_node = function_name_node(node)?;
    let name = node_text(name_node, source);
    let start = node.start_position().row as u32 + 1;
    let end = node.end_position().row as u32 + 1;

    Some(FunctionDecl {
        id: DeclId::new(path, start, &name),
        name,
        span: Some(LineSpan::new(start, end)),
        in_header,
    })
}

/// Find the identifier naming a function definition by descending its
/// declarator to the function_declarator.
pub(crate) fn function_name_node(definition: Node<'_>) -> Option<Node<'_>> {
    let declarator = definition.child_by_field_name("declarator")?;
    let mut queue = vec![declarator];
    while let Some(current) = queue.pop() {
        if current.kind() == "function_declarator" {
            let inner = current.child_by_field_name("declarator")?;
            return identifier_of(inner);
        }
        queue.extend(current.children(&mut current.walk()));
    }
    None
}

/// Identifier nodes declared as parameters of a function definition.
pub(crate) fn parameter_name_nodes(definition: Node<'_>) -> Vec<Node<'_>> {
    let mut names = Vec::new();
    let Some(declarator) = definition.child_by_field_name("declarator") else {
        return names;
    };

    let mut queue = vec![declarator];
    while let Some(current) = queue.pop() {
        if current.kind() == "function_declarator" {
            if let Some(parameters) = current.child_by_field_name("parameters") {
                let mut cursor = parameters.walk();
                for parameter in parameters.named_children(&mut cursor) {
                    if parameter.kind() != "parameter_declaration" {
                        continue;
                    }
                    // Unnamed parameters (`void f(int)`) have no declarator.
                    if let Some(inner) = parameter.child_by_field_name("declarator") {
                        if let Some(name) = variable_name_of(inner) {
                            names.push(name);
                        }
                    }
                }
            }
            return names;
        }
        queue.extend(current.children(&mut current.walk()));
    }
    names
}

/// Identifier nodes declared as variables by a declaration node. Function
/// prototypes and typedef-like declarators yield nothing.
pub(crate) fn variable_declarator_names(declaration: Node<'_>) -> Vec<Node<'_>> {
    let mut names = Vec::new();
    let mut cursor = declaration.walk();
    for declarator in declaration.children_by_field_name("declarator", &mut cursor) {
        if let Some(name) = variable_name_of(declarator) {
            names.push(name);
        }
    }
    names
}

/// Descend a declarator to the identifier it declares, if it declares a
/// variable. `int f(void);` declares a function and returns None;
/// `int (*fp)(void);` declares a function-pointer variable.
pub(crate) fn variable_name_of(declarator: Node<'_>) -> Option<Node<'_>> {
    let mut current = declarator;
    loop {
        match current.kind() {
            "identifier" => return Some(current),
            "init_declarator" | "pointer_declarator" | "array_declarator" => {
                current = current.child_by_field_name("declarator")?;
            }
            "parenthesized_declarator" => {
                current = current.named_child(0)?;
            }
            "function_declarator" => {
                let inner = current.child_by_field_name("declarator")?;
                if inner.kind() != "parenthesized_declarator" {
                    return None;
                }
                let unwrapped = inner.named_child(0)?;
                if unwrapped.kind() != "pointer_declarator" {
                    return None;
                }
                current = unwrapped;
            }
            _ => return None,
        }
    }
}

/// Descend a declarator through pointer and parenthesis wrappers to the
/// named identifier.
fn identifier_of(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node;
    loop {
        match current.kind() {
            "identifier" => return Some(current),
            "pointer_declarator" => {
                current = current.child_by_field_name("declarator")?;
            }
            "parenthesized_declarator" => {
                current = current.named_child(0)?;
            }
            _ => return None,
        }
    }
}

/// Whether a declaration carries the given storage-class keyword.
pub(crate) fn has_storage_class(node: Node<'_>, source: &str, keyword: &str) -> bool {
    let mut cursor = node.walk();
    let result = node.children(&mut cursor).any(|child| {
        child.kind() == "storage_class_specifier" && node_text(child, source) == keyword
    });
    result
}

pub(crate) fn node_text(node: Node<'_>, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tree_sitter::Parser;

    fn parse(source: &str) -> Declarations {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_c::LANGUAGE.into()).unwrap();
        let tree = parser.parse(source, None).unwrap();
        collect(&tree, source, Path::new("unit.c"), false)
    }

    #[test]
    fn extracts_function_definitions_with_spans() {
        let source = "int counter;\n\nvoid increment(void) {\n    counter++;\n}\n";
        let decls = parse(source);

        assert_eq!(decls.functions.len(), 1);
        let function = &decls.functions[0];
        assert_eq!(function.name, "increment");
        assert_eq!(function.span, Some(LineSpan::new(3, 5)));
    }

    #[test]
    fn file_scope_variables_are_static_storage() {
        let source = "int counter = 0;\nstatic double ratio;\nextern int total;\n";
        let decls = parse(source);

        let names: Vec<&str> = decls.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["counter", "ratio", "total"]);
        assert!(decls.variables.iter().all(|v| v.storage.is_static()));
    }

    #[test]
    fn block_scope_statics_are_static_storage() {
        let source = "void count(void) {\n    static int calls = 0;\n    int scratch = 0;\n    calls += scratch;\n}\n";
        let decls = parse(source);

        let calls = decls.variables.iter().find(|v| v.name == "calls").unwrap();
        assert_eq!(calls.storage, StorageDuration::Static);
        assert_eq!(calls.location.line, 2);

        let scratch = decls.variables.iter().find(|v| v.name == "scratch").unwrap();
        assert_eq!(scratch.storage, StorageDuration::Automatic);
    }

    #[test]
    fn parameters_are_automatic_variables() {
        let source = "int scale(int value, int factor) {\n    return value * factor;\n}\n";
        let decls = parse(source);

        let params: Vec<&str> = decls
            .variables
            .iter()
            .filter(|v| v.storage == StorageDuration::Automatic)
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(params, vec!["value", "factor"]);
    }

    #[test]
    fn prototypes_and_types_declare_no_variables() {
        let source = "int scale(int value, int factor);\nstruct point { int x; int y; };\n";
        let decls = parse(source);

        assert!(decls.functions.is_empty());
        assert!(decls.variables.is_empty());
    }

    #[test]
    fn multiple_declarators_split_into_declarations() {
        let source = "int width = 1, height = 2;\n";
        let decls = parse(source);

        let names: Vec<&str> = decls.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["width", "height"]);
    }

    #[test]
    fn pointer_and_array_declarators_resolve_names() {
        let source = "char *name;\nint table[16];\nint (*handler)(int);\n";
        let decls = parse(source);

        let names: Vec<&str> = decls.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["name", "table", "handler"]);
    }

    #[test]
    fn header_units_mark_every_declaration() {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_c::LANGUAGE.into()).unwrap();
        let source = "static int flag;\nvoid poll(void) {\n    flag = 1;\n}\n";
        let tree = parser.parse(source, None).unwrap();
        let decls = collect(&tree, source, Path::new("utils.h"), true);

        assert!(decls.variables.iter().all(|v| v.in_header));
        assert!(decls.functions.iter().all(|f| f.in_header));
    }
}
