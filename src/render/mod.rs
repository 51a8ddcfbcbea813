//! HTML rendering for the web pages.
//!
//! Views never build markup themselves. They hand a small context to a
//! [`Renderer`], which turns it into a page. The default implementation uses
//! Tera templates compiled into the binary.

use serde::Serialize;
use tera::{Context, Tera};

use crate::storage::{Item, ListId};

const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");
const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");
const LIST_TEMPLATE: &str = include_str!("../../templates/list.html");

/// Errors produced while rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template parsing or rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Everything the list page needs to know.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListContext {
    pub list_id: ListId,

    /// Item texts in the order they were added
    pub items: Vec<String>,
}

impl ListContext {
    /// Builds the context from a list's stored items.
    pub fn new(list_id: ListId, items: &[Item]) -> Self {
        Self {
            list_id,
            items: items.iter().map(|i| i.text.clone()).collect(),
        }
    }
}

/// Turns page contexts into HTML.
pub trait Renderer: Send + Sync {
    /// The homepage with an empty new-list form.
    fn render_home(&self) -> Result<String, RenderError>;

    /// The detail page of one list.
    fn render_list(&self, context: &ListContext) -> Result<String, RenderError>;
}

/// [`Renderer`] backed by the bundled Tera templates.
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Compiles the bundled templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a bundled template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE_TEMPLATE),
            ("home.html", HOME_TEMPLATE),
            ("list.html", LIST_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }
}

impl Renderer for TeraRenderer {
    fn render_home(&self) -> Result<String, RenderError> {
        Ok(self.tera.render("home.html", &Context::new())?)
    }

    fn render_list(&self, context: &ListContext) -> Result<String, RenderError> {
        let context = Context::from_serialize(context)?;
        Ok(self.tera.render("list.html", &context)?)
    }
}
