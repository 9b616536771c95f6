//! Template rendering
//!
//! Walks the template tree against a resolved [`FlagSet`]. Excluded nodes
//! are skipped together with their whole subtree; included files are
//! rendered with Handlebars in strict mode, so a placeholder that names
//! nothing in the context fails the render instead of producing an empty
//! string.

use handlebars::{handlebars_helper, Handlebars};
use serde_json::{Map, Value};

use crate::domain::entities::{FlagSet, RenderedArtifact, RenderedFile, TemplateNode, TemplateTree};
use crate::domain::ports::{ContextProvider, NoopEventSink, RenderEvent, RenderEventSink};
use crate::error::RenderError;

handlebars_helper!(quote: |value: str| serde_json::to_string(value).unwrap_or_default());
handlebars_helper!(html: |value: str| django_html(value));

/// Escape text for a Django HTML template
///
/// HTML-escapes the value and encodes braces, so it can neither close an
/// element nor open a `{% tag %}` or `{{ variable }}`.
pub fn django_html(value: &str) -> String {
    handlebars::html_escape(value)
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

/// Renders a template tree
///
/// All templates are compiled up front; a `Renderer` is read-only afterwards
/// and can be shared between threads.
pub struct Renderer {
    tree: TemplateTree,
    registry: Handlebars<'static>,
    context: Box<dyn ContextProvider>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("templates", &self.registry.get_templates().len())
            .finish_non_exhaustive()
    }
}

impl Renderer {
    /// Compile every file template of `tree`
    pub fn new(tree: TemplateTree, context: Box<dyn ContextProvider>) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("quote", Box::new(quote));
        registry.register_helper("html", Box::new(html));

        for node in tree.files() {
            let (Some(key), Some(source)) = (node.template_key(), node.source()) else {
                continue;
            };
            registry
                .register_template_string(&key, source)
                .map_err(|e| RenderError::Template {
                    path: node.path().to_string(),
                    message: e.to_string(),
                })?;
        }
        tracing::debug!(
            templates = registry.get_templates().len(),
            "template registry compiled"
        );

        Ok(Self {
            tree,
            registry,
            context,
        })
    }

    pub fn tree(&self) -> &TemplateTree {
        &self.tree
    }

    /// Flags plus derived values, as templates see them
    pub fn context(&self, flags: &FlagSet) -> Result<Value, RenderError> {
        let mut context = flags.to_json_map();
        let mut derived = Map::new();
        self.context.extend(flags, &mut derived)?;
        for (key, value) in derived {
            if context.contains_key(&key) {
                return Err(RenderError::Context {
                    message: format!("derived value '{}' shadows a flag", key),
                });
            }
            context.insert(key, value);
        }
        Ok(Value::Object(context))
    }

    /// Render the tree in memory
    pub fn render(&self, flags: &FlagSet) -> Result<RenderedArtifact, RenderError> {
        self.render_with_events(flags, &NoopEventSink)
    }

    /// Render the tree, reporting excluded nodes to `events`
    pub fn render_with_events(
        &self,
        flags: &FlagSet,
        events: &dyn RenderEventSink,
    ) -> Result<RenderedArtifact, RenderError> {
        let context = self.context(flags)?;
        let mut artifact = RenderedArtifact::new();
        self.render_children(self.tree.root(), flags, &context, &mut artifact, events)?;
        tracing::debug!(
            entries = artifact.len(),
            files = artifact.file_count(),
            "template tree rendered"
        );
        Ok(artifact)
    }

    fn render_children(
        &self,
        parent: &TemplateNode,
        flags: &FlagSet,
        context: &Value,
        artifact: &mut RenderedArtifact,
        events: &dyn RenderEventSink,
    ) -> Result<(), RenderError> {
        for node in parent.children() {
            let included = node.when().eval(flags).map_err(|e| RenderError::Predicate {
                path: node.path().to_string(),
                message: e.to_string(),
            })?;
            if !included {
                tracing::trace!(path = node.path(), when = %node.when(), "excluded");
                if events.wants_detailed_events() {
                    events.on_event(RenderEvent::NodeExcluded {
                        path: node.path().to_string(),
                    });
                }
                continue;
            }

            if node.is_dir() {
                artifact.add_dir(node.path());
                self.render_children(node, flags, context, artifact, events)?;
                continue;
            }

            let content = self.render_file(node, context)?;
            if !artifact.add_file(node.path(), RenderedFile::new(content, node.is_executable())) {
                return Err(RenderError::DuplicatePath {
                    path: node.path().to_string(),
                });
            }
        }
        Ok(())
    }

    fn render_file(&self, node: &TemplateNode, context: &Value) -> Result<String, RenderError> {
        let key = node.template_key().ok_or_else(|| RenderError::Substitution {
            path: node.path().to_string(),
            message: "not a file template".to_string(),
        })?;
        self.registry
            .render(&key, context)
            .map_err(|e| RenderError::Substitution {
                path: node.path().to_string(),
                message: e.to_string(),
            })
    }
}
