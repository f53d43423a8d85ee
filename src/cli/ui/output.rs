use console::{StyledObject, style};

/// Styled status lines around hook reports.
///
/// Reports go to stdout unstyled so they match what the host receives;
/// only the lines a command adds around them are decorated.
#[derive(Default)]
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    fn line(&self, glyph: StyledObject<&str>, message: &str) {
        println!("{} {}", glyph, message);
    }

    pub fn success(&self, message: &str) {
        self.line(style("✓").green(), message);
    }

    pub fn warning(&self, message: &str) {
        self.line(style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        self.line(style("ℹ").blue().dim(), message);
    }

    /// Heading above one sample's report in `demo`
    pub fn section(&self, title: &str) {
        println!("\n{}", style(title).bold().cyan());
        println!("{}", style("-".repeat(50)).dim());
    }
}
