//! Scope-aware identifier reference extraction.
//!
//! Resolves each identifier use against the unit's variable declarations:
//! innermost block scope first, then enclosing scopes, then file scope.
//! Identifiers that resolve to nothing produce no event. Identities are
//! minted exactly as in the declaration pass, so both passes agree on every
//! declaration's id.

use crate::declarations::{node_text, parameter_name_nodes, variable_declarator_names};
use glint_analysis_common::{DeclId, ReferenceEvent};
use std::collections::HashMap;
use std::path::Path;
use tree_sitter::{Node, Tree};

pub(crate) fn collect(tree: &Tree, source: &str, path: &Path) -> Vec<ReferenceEvent> {
    let mut resolver = Resolver {
        source,
        path,
        // Scope 0 is file scope and stays for the whole walk.
        scopes: vec![HashMap::new()],
        events: Vec::new(),
    };
    resolver.walk(tree.root_node());
    resolver.events
}

struct Resolver<'a> {
    source: &'a str,
    path: &'a Path,
    scopes: Vec<HashMap<String, DeclId>>,
    events: Vec<ReferenceEvent>,
}

impl Resolver<'_> {
    fn walk(&mut self, node: Node<'_>) {
        match node.kind() {
            "function_definition" => {
                self.scopes.push(HashMap::new());
                for name_node in parameter_name_nodes(node) {
                    self.declare(name_node);
                }
                // The declarator introduces names; only the body holds uses.
                if let Some(body) = node.child_by_field_name("body") {
                    self.walk_children(body);
                }
                self.scopes.pop();
            }
            "compound_statement" | "for_statement" => {
                self.scopes.push(HashMap::new());
                self.walk_children(node);
                self.scopes.pop();
            }
            "declaration" => {
                // Declare first: in C the name is in scope inside its own
                // initializer.
                for name_node in variable_declarator_names(node) {
                    self.declare(name_node);
                }
                let mut cursor = node.walk();
                let declarators: Vec<Node<'_>> = node
                    .children_by_field_name("declarator", &mut cursor)
                    .collect();
                for declarator in declarators {
                    self.walk_declarator_expressions(declarator);
                }
            }
            "identifier" => {
                let target = self.resolve(&node_text(node, self.source)).cloned();
                if let Some(target) = target {
                    self.events.push(ReferenceEvent {
                        target,
                        line: node.start_position().row as u32 + 1,
                    });
                }
            }
            // An enum constant's name is a declaration, not a use; its
            // value expression is real code.
            "enumerator" => {
                if let Some(value) = node.child_by_field_name("value") {
                    self.walk(value);
                }
            }
            // Macro definitions are unexpanded text, not uses.
            "preproc_def" | "preproc_function_def" => {}
            // Conditional-compilation names and conditions live in the
            // macro namespace; the guarded body is real code.
            "preproc_ifdef" => self.walk_children_except(node, "name"),
            "preproc_if" | "preproc_elif" => self.walk_children_except(node, "condition"),
            _ => self.walk_children(node),
        }
    }

    fn walk_children(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
        for child in children {
            self.walk(child);
        }
    }

    fn walk_children_except(&mut self, node: Node<'_>, field: &str) {
        let skipped = node.child_by_field_name(field).map(|n| n.id());
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
        for child in children {
            if Some(child.id()) != skipped {
                self.walk(child);
            }
        }
    }

    /// Visit the expression parts of a declarator: initializer values and
    /// array sizes, which may reference other variables. The declared name
    /// itself is not a use.
    fn walk_declarator_expressions(&mut self, declarator: Node<'_>) {
        match declarator.kind() {
            "init_declarator" => {
                if let Some(inner) = declarator.child_by_field_name("declarator") {
                    self.walk_declarator_expressions(inner);
                }
                if let Some(value) = declarator.child_by_field_name("value") {
                    self.walk(value);
                }
            }
            "array_declarator" => {
                if let Some(inner) = declarator.child_by_field_name("declarator") {
                    self.walk_declarator_expressions(inner);
                }
                if let Some(size) = declarator.child_by_field_name("size") {
                    self.walk(size);
                }
            }
            "pointer_declarator" | "parenthesized_declarator" => {
                let mut cursor = declarator.walk();
                let children: Vec<Node<'_>> = declarator.named_children(&mut cursor).collect();
                for child in children {
                    self.walk_declarator_expressions(child);
                }
            }
            _ => {}
        }
    }

    fn declare(&mut self, name_node: Node<'_>) {
        let name = node_text(name_node, self.source);
        let line = name_node.start_position().row as u32 + 1;
        let id = DeclId::new(self.path, line, &name);
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, id);
        }
    }

    fn resolve(&self, name: &str) -> Option<&DeclId> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}
