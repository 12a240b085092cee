//! HTML templates for the form and result pages
//!
//! Templates are embedded at compile time and rendered with Tera, which
//! HTML-escapes interpolated values by default.

use tera::{Context, Tera};

/// Embedded page templates
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Compile the embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("index.html", include_str!("../templates/index.html")),
            ("result.html", include_str!("../templates/result.html")),
        ])?;
        Ok(Self { tera })
    }

    /// Render the search form page
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_index(&self) -> Result<String, tera::Error> {
        self.tera.render("index.html", &Context::new())
    }

    /// Render the result page for a searched place
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_result(&self, place: &str, message: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("place", place);
        context.insert("message", message);
        self.tera.render("result.html", &context)
    }
}
