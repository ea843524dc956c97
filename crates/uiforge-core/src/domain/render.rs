use std::collections::BTreeMap;

/// Variables substituted into template bodies.
///
/// Placeholders use the `{{NAME}}` form. Unknown placeholders are left in
/// place so template bodies can contain other brace syntax.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self::default().with_variable("PROJECT_NAME", project_name)
    }

    pub fn with_variable(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known `{{KEY}}` in `template`.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
