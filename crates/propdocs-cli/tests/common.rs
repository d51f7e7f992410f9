//! Shared fixture: a tiny component repository in a temp directory.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const BUTTON: &str = r#"import * as React from 'react';
import PropTypes from 'prop-types';
import withStyles from '../styles/withStyles';

export const styles = {
  /* Styles applied to the root element. */
  root: {
    padding: '6px 16px',
  },
  /* Pseudo-class applied to the root element if `disabled={true}`. */
  disabled: {},
};

/**
 * Buttons allow users to take actions.
 */
const Button = React.forwardRef(function Button(props, ref) {
  const { children, disabled = false, ...other } = props;
  return <button ref={ref} disabled={disabled} {...other}>{children}</button>;
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
};

export default withStyles(styles, { name: 'MuiButton' })(Button);
"#;

pub const CHIP: &str = r#"import * as React from 'react';
import PropTypes from 'prop-types';

/**
 * Chips represent complex entities in small blocks.
 */
function Chip(props) {
  const { label, size = 'medium' } = props;
  return <div>{label}</div>;
}

Chip.propTypes = {
  /**
   * The content of the label.
   */
  label: PropTypes.node,
  /**
   * The size of the chip.
   */
  size: PropTypes.oneOf(['medium', 'small']),
};

export default Chip;
"#;

pub const RIPPLE: &str = r#"import * as React from 'react';
import PropTypes from 'prop-types';

/**
 * @ignore - internal component.
 */
function Ripple(props) {
  return <span />;
}

Ripple.propTypes = {
  pulsate: PropTypes.bool,
};

export default Ripple;
"#;

/// Has a `defaultProps` entry with no matching `propTypes` documentation.
pub const BADGE: &str = "import PropTypes from 'prop-types';\n\nfunction Badge(props) { return null; }\n\nBadge.propTypes = {\n  /** The badge content. */\n  badgeContent: PropTypes.node,\n};\n\nBadge.defaultProps = { max: 99 };\n\nexport default Badge;\n";

pub const BUTTONS_PAGE: &str =
    "---\ntitle: Button React component\ncomponents: Button\n---\n\n# Button\n";

pub struct Repo {
    pub dir: TempDir,
}

impl Repo {
    /// Button, Chip and the undocumented Ripple, plus one documentation page.
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().unwrap(),
        };
        repo.write("src/Button/Button.js", BUTTON);
        repo.write("src/Chip/Chip.js", CHIP);
        repo.write("src/internal/Ripple.js", RIPPLE);
        repo.write("docs/src/pages/components/buttons/buttons.md", BUTTONS_PAGE);
        repo
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn out(&self) -> PathBuf {
        self.root().join("out")
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        let text = fs::read_to_string(self.out().join(relative)).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}
