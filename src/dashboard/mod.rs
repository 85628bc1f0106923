//! Analyst dashboard view.
//!
//! A presentational container: a heading, a short description, and a single
//! nested index route that mounts the embedded report viewer. No state.

use std::fmt::Write as _;

use crate::config::DashboardConfig;

pub const HEADING: &str = "Analyst Dashboard";
pub const DESCRIPTION: &str = "Reports and statistical data";

/// Embedded external report viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFrame {
    pub src: String,
    pub title: String,
}

impl ReportFrame {
    pub fn new(src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
        }
    }

    fn render(&self) -> String {
        format!(
            "<iframe class=\"report-frame\" title=\"{}\" src=\"{}\" \
             width=\"100%\" height=\"800\" frameborder=\"0\" allowfullscreen></iframe>",
            escape_html(&self.title),
            escape_html(&self.src),
        )
    }
}

/// Views that can be mounted under the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Report(ReportFrame),
}

impl View {
    fn render(&self) -> String {
        match self {
            View::Report(frame) => frame.render(),
        }
    }
}

/// Where a child route matches, relative to the dashboard mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePath {
    /// Matches the dashboard's own path (`""` or `"/"`).
    Index,
}

impl RoutePath {
    fn matches(&self, path: &str) -> bool {
        match self {
            RoutePath::Index => path.trim_matches('/').is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: RoutePath,
    pub view: View,
}

/// The dashboard container and its child routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub heading: String,
    pub description: String,
    routes: Vec<Route>,
}

impl DashboardView {
    /// Dashboard with the report frame mounted at the index route.
    pub fn new(report: ReportFrame) -> Self {
        Self {
            heading: HEADING.to_string(),
            description: DESCRIPTION.to_string(),
            routes: vec![Route {
                path: RoutePath::Index,
                view: View::Report(report),
            }],
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(ReportFrame::new(&config.report_url, &config.report_title))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The view mounted for `path`, if any route matches.
    pub fn resolve(&self, path: &str) -> Option<&View> {
        self.routes
            .iter()
            .find(|route| route.path.matches(path))
            .map(|route| &route.view)
    }

    /// Render the container as HTML. The outlet is empty when nothing matches.
    pub fn render(&self, path: &str) -> String {
        let mut html = String::new();
        let _ = writeln!(html, "<div class=\"dashboard\">");
        let _ = writeln!(html, "  <h1>{}</h1>", escape_html(&self.heading));
        let _ = writeln!(html, "  <p>{}</p>", escape_html(&self.description));
        let _ = writeln!(html, "  <div class=\"dashboard-outlet\">");
        if let Some(view) = self.resolve(path) {
            let _ = writeln!(html, "    {}", view.render());
        }
        let _ = writeln!(html, "  </div>");
        html.push_str("</div>\n");
        html
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> DashboardView {
        DashboardView::new(ReportFrame::new(
            "https://reports.example.com/embed?id=7&theme=dark",
            "Licenses",
        ))
    }

    #[test]
    fn index_path_resolves_report() {
        let d = dashboard();
        for path in ["", "/", "//"] {
            assert!(matches!(d.resolve(path), Some(View::Report(_))), "path {path:?}");
        }
        assert!(d.resolve("/settings").is_none());
        assert_eq!(d.routes().len(), 1);
    }

    #[test]
    fn render_index_includes_frame() {
        let html = dashboard().render("/");
        assert!(html.contains("<h1>Analyst Dashboard</h1>"));
        assert!(html.contains("<p>Reports and statistical data</p>"));
        assert!(html.contains("<iframe"));
        assert!(html.contains("src=\"https://reports.example.com/embed?id=7&amp;theme=dark\""));
        assert!(html.contains("title=\"Licenses\""));
    }

    #[test]
    fn render_unmatched_path_leaves_outlet_empty() {
        let html = dashboard().render("/other");
        assert!(html.contains("<h1>Analyst Dashboard</h1>"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn from_config_uses_report_settings() {
        let config = DashboardConfig {
            report_url: "https://r/\"x\"".to_string(),
            report_title: "<Stats>".to_string(),
        };
        let html = DashboardView::from_config(&config).render("");
        assert!(html.contains("src=\"https://r/&quot;x&quot;\""));
        assert!(html.contains("title=\"&lt;Stats&gt;\""));
    }
}
