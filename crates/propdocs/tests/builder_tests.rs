use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use propdocs::model::ForwardsRefTo;
use propdocs::{
    ComponentApiBuilder, ComponentSource, DocsError, DocumentationPageIndex, OutputLayout,
    StyleExtractor, find_components, render_json,
};
use tempfile::TempDir;

const BUTTON: &str = r#"import * as React from 'react';
import PropTypes from 'prop-types';
import withStyles from '../styles/withStyles';
import ButtonBase from '../ButtonBase';

export const styles = (theme) => ({
  /* Styles applied to the root element. */
  root: {
    padding: '6px 16px',
  },
  /* Styles applied to the root element if `variant="outlined"`. */
  outlined: {
    border: '1px solid',
  },
  [theme.breakpoints.down('xs')]: {
    root: { minWidth: 0 },
  },
  /* Pseudo-class applied to the root element if `disabled={true}`. */
  disabled: {},
});

/**
 * Buttons allow users to take actions.
 */
const Button = React.forwardRef(function Button(props, ref) {
  const { children, disabled = false, variant = 'text', ...other } = props;
  return (
    <ButtonBase ref={ref} disabled={disabled} {...other}>
      {children}
    </ButtonBase>
  );
});

Button.propTypes = {
  /**
   * The content of the button.
   */
  children: PropTypes.node,
  /**
   * If `true`, the button will be disabled.
   */
  disabled: PropTypes.bool,
  /**
   * @ignore
   */
  tabIndex: PropTypes.number,
  /**
   * The variant to use.
   */
  variant: PropTypes.oneOf(['contained', 'outlined', 'text']),
};

export default withStyles(styles, { name: 'MuiButton' })(Button);
"#;

const BUTTON_TEST: &str = r#"import * as React from 'react';
import { createMount, describeConformance } from 'test/utils';
import ButtonBase from '../ButtonBase';
import Button from './Button';

describe('<Button />', () => {
  const mount = createMount();

  describeConformance(<Button>Conformance?</Button>, () => ({
    classes: {},
    inheritComponent: ButtonBase,
    mount,
    refInstanceof: window.HTMLButtonElement,
    skip: ['componentProp'],
  }));
});
"#;

const BUTTONS_PAGE: &str = "---\ntitle: Button React component\ncomponents: Button, ButtonBase\n---\n\n# Button\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };
        fixture.write("src/Button/Button.js", BUTTON);
        fixture.write("src/Button/Button.test.js", BUTTON_TEST);
        fixture.write("pages/components/buttons/buttons.md", BUTTONS_PAGE);
        fixture
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn builder(&self) -> ComponentApiBuilder {
        let pages = DocumentationPageIndex::build(&self.root().join("pages")).unwrap();
        ComponentApiBuilder::new(
            self.root(),
            StyleExtractor::new(self.root().join("data")),
            pages,
        )
    }

    fn source(&self, relative: &str) -> ComponentSource {
        ComponentSource::new(self.root().join(relative))
    }
}

#[test]
fn builds_the_full_api_record() {
    let fixture = Fixture::new();
    let data = fixture
        .builder()
        .build(&fixture.source("src/Button/Button.js"))
        .unwrap()
        .expect("Button is documented");
    let api = &data.api;

    assert_eq!(api.name, "Button");
    assert_eq!(api.filename, "/src/Button/Button.js");
    assert_eq!(api.description, "Buttons allow users to take actions.");
    assert!(api.spread);
    assert_eq!(api.used_in_pages, vec!["/components/buttons"]);

    let names: Vec<_> = api.props.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["children", "disabled", "variant"]);
    assert_eq!(
        api.props["variant"].default_value.as_ref().unwrap().value,
        "'text'"
    );

    assert_eq!(api.styles.class_names, vec!["root", "outlined", "disabled"]);
    assert_eq!(api.styles.source_name.as_deref(), Some("MuiButton"));
    assert_eq!(api.styles.generated_class_names["root"], "MuiButton-root");
    assert_eq!(api.styles.generated_class_names["disabled"], "Mui-disabled");
    assert_eq!(
        api.styles.descriptions["outlined"],
        "Styles applied to the root element if `variant=\"outlined\"`."
    );

    assert_eq!(
        api.forwards_ref_to,
        ForwardsRefTo::DomElement {
            element: "HTMLButtonElement".into()
        }
    );
    let inheritance = api.inheritance.as_ref().expect("inherits from ButtonBase");
    assert_eq!(inheritance.component, "ButtonBase");
    assert_eq!(inheritance.pathname, "/api/button-base");
}

#[test]
fn translations_cover_every_non_empty_text() {
    let fixture = Fixture::new();
    let data = fixture
        .builder()
        .build(&fixture.source("src/Button/Button.js"))
        .unwrap()
        .unwrap();

    let keys: Vec<_> = data.i18n_json.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "description",
            "propChildren",
            "propDisabled",
            "propVariant",
            "stylesRoot",
            "stylesOutlined",
            "stylesDisabled",
        ]
    );
    assert_eq!(data.i18n_json["propChildren"], "The content of the button.");
    for item in &data.i18n.props {
        let name = item
            .path
            .strip_prefix("props.")
            .and_then(|rest| rest.strip_suffix(".description"))
            .unwrap();
        assert_eq!(
            data.api.props[name].description.as_deref(),
            Some(item.value.as_str())
        );
    }
}

#[test]
fn repeated_builds_render_identical_json() {
    let fixture = Fixture::new();
    let builder = fixture.builder();
    let source = fixture.source("src/Button/Button.js");

    let first = builder.build(&source).unwrap().unwrap();
    let second = builder.build(&source).unwrap().unwrap();
    assert_eq!(render_json(&first.api).unwrap(), render_json(&second.api).unwrap());
    assert_eq!(
        render_json(&first.i18n_json).unwrap(),
        render_json(&second.i18n_json).unwrap()
    );
}

#[test]
fn undocumented_components_are_skipped() {
    let fixture = Fixture::new();
    fixture.write(
        "src/Ripple/Ripple.js",
        "/**\n * @ignore - internal component.\n */\nfunction Ripple() { return null; }\nexport default Ripple;\n",
    );

    let result = fixture
        .builder()
        .build(&fixture.source("src/Ripple/Ripple.js"))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn undescribed_default_props_fail_the_component() {
    let fixture = Fixture::new();
    fixture.write(
        "src/Badge/Badge.js",
        "import PropTypes from 'prop-types';\n\nfunction Badge(props) { return null; }\n\nBadge.propTypes = {\n  /** The badge content. */\n  badgeContent: PropTypes.node,\n};\n\nBadge.defaultProps = { max: 99 };\n\nexport default Badge;\n",
    );

    let err = fixture
        .builder()
        .build(&fixture.source("src/Badge/Badge.js"))
        .unwrap_err();
    assert!(matches!(err, DocsError::MissingDescription { ref prop, .. } if prop == "max"));
    assert!(err.is_fatal());
}

#[test]
fn components_without_styles_metadata_get_an_empty_record() {
    let fixture = Fixture::new();
    fixture.write(
        "src/Box/Box.js",
        "import PropTypes from 'prop-types';\n\nconst Box = styled('div')();\n\nBox.propTypes = {\n  /** The content. */\n  children: PropTypes.node,\n};\n\nexport default Box;\n",
    );

    let data = fixture
        .builder()
        .build(&fixture.source("src/Box/Box.js"))
        .unwrap()
        .unwrap();
    assert!(data.api.styles.class_names.is_empty());
    assert!(data.api.styles.generated_class_names.is_empty());
    assert_eq!(data.api.forwards_ref_to, ForwardsRefTo::None);
    assert!(data.api.inheritance.is_none());
    assert!(data.api.used_in_pages.is_empty());
}

#[test]
fn companion_metadata_feeds_plain_components() {
    let fixture = Fixture::new();
    fixture.write(
        "src/Box/Box.js",
        "import PropTypes from 'prop-types';\n\nconst Box = styled('div')();\n\nBox.propTypes = {\n  /** The content. */\n  children: PropTypes.node,\n};\n\nexport default Box;\n",
    );
    fixture.write(
        "data/box.json",
        r#"{"name":"MuiBox","css":{"root":{"description":"Styles applied to the root element."}}}"#,
    );

    let data = fixture
        .builder()
        .build(&fixture.source("src/Box/Box.js"))
        .unwrap()
        .unwrap();
    assert_eq!(data.api.styles.class_names, vec!["root"]);
    assert_eq!(data.api.styles.generated_class_names["root"], "MuiBox-root");
    assert_eq!(data.i18n_json["stylesRoot"], "Styles applied to the root element.");
}

#[test]
fn writes_and_prunes_artifacts() {
    let fixture = Fixture::new();
    let builder = fixture.builder();
    let out = OutputLayout::new(fixture.root().join("out"));
    fs::create_dir_all(out.translations_dir().join("Stale")).unwrap();

    let components = find_components(&fixture.root().join("src")).unwrap();
    assert_eq!(components.len(), 1);

    let mut keep = BTreeSet::new();
    for component in &components {
        if let Some(data) = builder.build(component).unwrap() {
            keep.insert(data.api.name.clone());
            out.write(&data).unwrap();
        }
    }
    let removed = out.prune_stale_translations(&keep).unwrap();
    assert_eq!(removed, vec!["Stale"]);

    let api: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out.components_dir().join("Button.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(api["name"], "Button");
    assert_eq!(api["forwardsRefTo"]["kind"], "domElement");

    let translations =
        fs::read_to_string(out.translations_dir().join("Button").join("Button.json")).unwrap();
    assert!(translations.ends_with("}\n"));
    assert!(translations.contains("\"propVariant\": \"The variant to use.\""));
}
