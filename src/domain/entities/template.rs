//! Template tree - the fixed set of files and directories a render may emit
//!
//! A tree is declared as a flat list of [`NodeSpec`]s and assembled once.
//! Parent directories that are not declared explicitly are created with an
//! `Always` predicate, so excluding a directory is the only way to drop a
//! whole subtree.

use crate::domain::value_objects::Predicate;
use crate::error::RenderError;

/// What a declared node is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Dir,
    File {
        /// Handlebars source
        source: &'static str,
        executable: bool,
    },
}

/// One entry of a declarative template table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    /// Relative `/`-separated output path
    pub path: &'static str,
    pub kind: NodeKind,
    pub when: Predicate,
}

impl NodeSpec {
    pub const fn dir(path: &'static str, when: Predicate) -> Self {
        Self {
            path,
            kind: NodeKind::Dir,
            when,
        }
    }

    pub const fn file(path: &'static str, source: &'static str, when: Predicate) -> Self {
        Self {
            path,
            kind: NodeKind::File {
                source,
                executable: false,
            },
            when,
        }
    }

    pub const fn executable(path: &'static str, source: &'static str, when: Predicate) -> Self {
        Self {
            path,
            kind: NodeKind::File {
                source,
                executable: true,
            },
            when,
        }
    }
}

/// A node in the assembled tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNode {
    path: String,
    when: Predicate,
    body: NodeBody,
    declared: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeBody {
    Dir(Vec<TemplateNode>),
    File {
        id: usize,
        source: &'static str,
        executable: bool,
    },
}

impl TemplateNode {
    fn dir(path: String, when: Predicate, declared: bool) -> Self {
        Self {
            path,
            when,
            body: NodeBody::Dir(Vec::new()),
            declared,
        }
    }

    /// Output path relative to the destination, empty for the root
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path segment
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("")
    }

    pub fn when(&self) -> &Predicate {
        &self.when
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.body, NodeBody::Dir(_))
    }

    /// Children of a directory; empty for files
    pub fn children(&self) -> &[TemplateNode] {
        match &self.body {
            NodeBody::Dir(children) => children,
            NodeBody::File { .. } => &[],
        }
    }

    /// Template source of a file node
    pub fn source(&self) -> Option<&'static str> {
        match self.body {
            NodeBody::File { source, .. } => Some(source),
            NodeBody::Dir(_) => None,
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(
            self.body,
            NodeBody::File {
                executable: true,
                ..
            }
        )
    }

    /// Unique registry name for a file node
    ///
    /// Variants share a path, so the declaration index disambiguates.
    pub fn template_key(&self) -> Option<String> {
        match self.body {
            NodeBody::File { id, .. } => Some(format!("{}#{}", self.path, id)),
            NodeBody::Dir(_) => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<TemplateNode>> {
        match &mut self.body {
            NodeBody::Dir(children) => Some(children),
            NodeBody::File { .. } => None,
        }
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a TemplateNode>) {
        for child in self.children() {
            out.push(child);
            child.walk(out);
        }
    }
}

/// The assembled, immutable template tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTree {
    root: TemplateNode,
}

impl TemplateTree {
    /// Assemble a tree from declarations
    ///
    /// Fails on malformed paths, on a file used as a directory, and on a
    /// directory declared twice. Several files may share a path; the
    /// renderer rejects the render if more than one of them is included.
    pub fn build(specs: &[NodeSpec]) -> Result<Self, RenderError> {
        let mut root = TemplateNode::dir(String::new(), Predicate::Always, true);
        for (id, spec) in specs.iter().enumerate() {
            validate_relative_path(spec.path)?;
            insert(&mut root, spec, id)?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &TemplateNode {
        &self.root
    }

    /// Every node, depth-first in declaration order
    pub fn nodes(&self) -> Vec<&TemplateNode> {
        let mut out = Vec::new();
        self.root.walk(&mut out);
        out
    }

    /// Every file node
    pub fn files(&self) -> impl Iterator<Item = &TemplateNode> {
        self.nodes().into_iter().filter(|n| !n.is_dir())
    }
}

fn insert(root: &mut TemplateNode, spec: &NodeSpec, id: usize) -> Result<(), RenderError> {
    let segments: Vec<&str> = spec.path.split('/').collect();
    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| invalid(spec.path, "empty path"))?;

    let mut current = root;
    let mut prefix = String::new();
    for segment in parents {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);

        let children = current
            .children_mut()
            .ok_or_else(|| invalid(spec.path, "a parent is declared as a file"))?;
        let index = match children.iter().position(|c| c.name() == *segment) {
            Some(index) => index,
            None => {
                children.push(TemplateNode::dir(prefix.clone(), Predicate::Always, false));
                children.len() - 1
            }
        };
        current = &mut children[index];
    }

    let children = current
        .children_mut()
        .ok_or_else(|| invalid(spec.path, "a parent is declared as a file"))?;
    let existing = children.iter().position(|c| c.name() == *last);

    match spec.kind {
        NodeKind::Dir => match existing {
            Some(index) if children[index].is_dir() && !children[index].declared => {
                children[index].when = spec.when;
                children[index].declared = true;
            }
            Some(index) if children[index].is_dir() => {
                return Err(invalid(spec.path, "directory declared twice"));
            }
            Some(_) => return Err(invalid(spec.path, "path is already declared as a file")),
            None => children.push(TemplateNode::dir(spec.path.to_string(), spec.when, true)),
        },
        NodeKind::File { source, executable } => {
            if existing.is_some_and(|index| children[index].is_dir()) {
                return Err(invalid(spec.path, "path is already declared as a directory"));
            }
            children.push(TemplateNode {
                path: spec.path.to_string(),
                when: spec.when,
                body: NodeBody::File {
                    id,
                    source,
                    executable,
                },
                declared: true,
            });
        }
    }
    Ok(())
}

/// Output paths stay inside the project root: relative, '/'-separated, no
/// empty, `.` or `..` segments
pub fn validate_relative_path(path: &str) -> Result<(), RenderError> {
    if path.is_empty() {
        return Err(invalid(path, "empty path"));
    }
    if path.starts_with('/') || path.contains('\\') || path.contains(':') {
        return Err(invalid(path, "must be a relative '/'-separated path"));
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err(invalid(path, "empty path segment")),
            "." | ".." => return Err(invalid(path, "'.' and '..' segments are not allowed")),
            _ => {}
        }
    }
    Ok(())
}

fn invalid(path: &str, message: &str) -> RenderError {
    RenderError::InvalidPath {
        path: path.to_string(),
        message: message.to_string(),
    }
}
