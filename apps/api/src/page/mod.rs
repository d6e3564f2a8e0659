//! Server-rendered landing page.

use minijinja::Environment;

pub mod handlers;
pub mod view;

use crate::errors::AppError;
use view::PageView;

const INDEX_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Compiled page templates. Built once at startup; `.html` templates are
/// auto-escaped.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_NAME, INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &PageView) -> Result<String, AppError> {
        let template = self.env.get_template(INDEX_NAME)?;
        Ok(template.render(view)?)
    }
}
