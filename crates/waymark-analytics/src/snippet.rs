//! Browser snippet rendering.
//!
//! Produces the JavaScript that performs [`AnalyticsShim`](crate::AnalyticsShim)'s
//! contract in a real page: guard on `window`/`document`, install the
//! queueing global, inject one script tag before the first script, and fire
//! the two page events.

use std::fmt::Write;

use crate::config::{AnalyticsConfig, PAGE_EVENT, PUSH_STATE_EVENT};

/// Name of the route-change function exposed to the router.
pub const ROUTE_HOOK_NAME: &str = "__waymarkRouteChanged";

/// Render the snippet body (without `<script>` tags).
#[must_use]
pub fn render_snippet(config: &AnalyticsConfig) -> String {
    let global = &config.global_name;
    let id = js_string(&config.element_id);
    let src = js_string(&config.script_src);
    let page = js_string(PAGE_EVENT);
    let push_state = js_string(PUSH_STATE_EVENT);

    let mut js = String::with_capacity(1024);
    js.push_str("(function () {\n");
    js.push_str("  if (typeof window === \"undefined\" || typeof document === \"undefined\") return;\n");
    let _ = writeln!(
        js,
        "  window.{global} = window.{global} || function () {{\n    (window.{global}.q = window.{global}.q || []).push(arguments);\n  }};"
    );
    let _ = writeln!(
        js,
        "  function track() {{\n    window.{global}({page});\n    window.{global}({push_state});\n  }}"
    );
    if config.track_route_changes {
        let _ = writeln!(js, "  window.{ROUTE_HOOK_NAME} = track;");
    }
    let _ = writeln!(js, "  if (document.getElementById({id})) return;");
    js.push_str("  var s = document.createElement(\"script\");\n");
    let _ = writeln!(js, "  s.id = {id};");
    js.push_str("  s.async = true;\n");
    let _ = writeln!(js, "  s.src = {src};");
    js.push_str("  var first = document.getElementsByTagName(\"script\")[0];\n");
    js.push_str("  if (first && first.parentNode) {\n");
    js.push_str("    first.parentNode.insertBefore(s, first);\n");
    js.push_str("  } else {\n");
    js.push_str("    (document.head || document.documentElement).appendChild(s);\n");
    js.push_str("  }\n");
    js.push_str("  track();\n");
    js.push_str("})();\n");
    js
}

/// Render the snippet wrapped in an inline `<script>` element.
#[must_use]
pub fn render_script_tag(config: &AnalyticsConfig) -> String {
    format!("<script>\n{}</script>\n", render_snippet(config))
}

/// JavaScript string literal safe to embed inside an HTML `<script>` element.
fn js_string(value: &str) -> String {
    // JSON strings are valid JS literals; only `</` needs breaking up.
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_owned())
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalyticsConfig {
        AnalyticsConfig::new("https://stats.example.com/a.js")
    }

    #[test]
    fn test_snippet_guards_browser_globals() {
        let js = render_snippet(&config());
        assert!(js.contains("typeof window === \"undefined\""));
        assert!(js.contains("typeof document === \"undefined\""));
    }

    #[test]
    fn test_snippet_guards_by_element_id() {
        let js = render_snippet(&config());
        assert!(js.contains("document.getElementById(\"waymark-analytics\")"));
        assert!(js.contains("s.id = \"waymark-analytics\";"));
    }

    #[test]
    fn test_snippet_inserts_before_first_script() {
        let js = render_snippet(&config());
        assert!(js.contains("first.parentNode.insertBefore(s, first);"));
        assert!(js.contains("s.src = \"https://stats.example.com/a.js\";"));
    }

    #[test]
    fn test_snippet_queues_and_fires_events() {
        let js = render_snippet(&config());
        assert!(js.contains("window._wmq = window._wmq || function ()"));
        assert!(js.contains(".push(arguments)"));
        assert!(js.contains("window._wmq(\"page\");"));
        assert!(js.contains("window._wmq(\"trackPushState\");"));
        // events fire after injection
        let insert = js.find("insertBefore").unwrap();
        let fire = js.rfind("track();").unwrap();
        assert!(fire > insert);
    }

    #[test]
    fn test_route_hook_only_when_enabled() {
        assert!(!render_snippet(&config()).contains(ROUTE_HOOK_NAME));

        let mut enabled = config();
        enabled.track_route_changes = true;
        assert!(render_snippet(&enabled).contains("window.__waymarkRouteChanged = track;"));
    }

    #[test]
    fn test_js_string_escapes_script_close() {
        assert_eq!(js_string("a</script>"), "\"a<\\/script>\"");
        assert_eq!(js_string("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_script_tag_wraps_snippet() {
        let html = render_script_tag(&config());
        assert!(html.starts_with("<script>\n(function () {"));
        assert!(html.ends_with("})();\n</script>\n"));
    }
}
