use std::sync::LazyLock;

use regex::Regex;

use crate::case::kebab_case;
use crate::conformance::TestInfo;
use crate::model::Inheritance;

/// API route prefix for inherited components documented in this corpus.
pub const DEFAULT_API_ROUTE: &str = "/api";

/// Props documentation of the transition primitive lives upstream.
pub const TRANSITION_PROPS_URL: &str =
    "https://reactcommunity.org/react-transition-group/transition#Transition-props";

static INHERITED_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"// @inheritedComponent (.*)").expect("valid regex"));

/// Resolves which component receives a component's remaining props.
#[derive(Debug, Clone)]
pub struct InheritanceResolver {
    api_route: String,
}

impl Default for InheritanceResolver {
    fn default() -> Self {
        Self::new(DEFAULT_API_ROUTE)
    }
}

impl InheritanceResolver {
    pub fn new(api_route: impl Into<String>) -> Self {
        let api_route = api_route.into();
        Self {
            api_route: api_route.trim_end_matches('/').to_string(),
        }
    }

    /// Test metadata first, then the `// @inheritedComponent` comment.
    pub fn resolve(&self, test_info: &TestInfo, source: &str) -> Option<Inheritance> {
        let component = test_info
            .inherit_component
            .clone()
            .or_else(|| inherited_component_marker(source))?;
        let pathname = self.pathname(&component);
        Some(Inheritance {
            component,
            pathname,
        })
    }

    /// Documentation URL of an inherited component.
    pub fn pathname(&self, component: &str) -> String {
        match component {
            "Transition" => TRANSITION_PROPS_URL.to_string(),
            other => format!("{}/{}", self.api_route, kebab_case(other)),
        }
    }
}

fn inherited_component_marker(source: &str) -> Option<String> {
    let captures = INHERITED_COMPONENT.captures(source)?;
    let name = captures[1].trim();
    (!name.is_empty()).then(|| name.to_string())
}
