//! Path syntax validation.
//!
//! Each dialect has a fixed grammar expressed as a regular expression. The
//! grammars are disjoint: drive-rooted paths start with a letter, root-slash
//! paths start with `/`.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::path::types::ValidatedPath;
use crate::path::PathDialect;

const DRIVE_ROOTED_GRAMMAR: &str = r#"^[a-zA-Z]:\\$|^[a-zA-Z]:\\[^/:*?<>"|]*[^\\/:*?<>"|]$"#;
const ROOT_SLASH_GRAMMAR: &str = r"^/[^\x00]*[^\x00/]$|^/$";

fn grammar(dialect: PathDialect) -> &'static Regex {
    static DRIVE_ROOTED: OnceLock<Regex> = OnceLock::new();
    static ROOT_SLASH: OnceLock<Regex> = OnceLock::new();

    let (cell, pattern) = match dialect {
        PathDialect::DriveRooted => (&DRIVE_ROOTED, DRIVE_ROOTED_GRAMMAR),
        PathDialect::RootSlash => (&ROOT_SLASH, ROOT_SLASH_GRAMMAR),
    };
    cell.get_or_init(|| Regex::new(pattern).expect("path grammar is a valid regex"))
}

/// Check whether `path` matches the grammar of `dialect`.
///
/// # Examples
///
/// ```
/// use dirinfo::path::{is_path_syntax_correct, PathDialect};
///
/// assert!(is_path_syntax_correct("/kat/kat2", PathDialect::RootSlash));
/// assert!(is_path_syntax_correct("/", PathDialect::RootSlash));
/// assert!(!is_path_syntax_correct("relative/path", PathDialect::RootSlash));
///
/// assert!(is_path_syntax_correct("d:\\kat", PathDialect::DriveRooted));
/// assert!(is_path_syntax_correct("d:\\", PathDialect::DriveRooted));
/// assert!(!is_path_syntax_correct("d:\\kat\\", PathDialect::DriveRooted));
/// ```
#[must_use]
pub fn is_path_syntax_correct(path: &str, dialect: PathDialect) -> bool {
    grammar(dialect).is_match(path)
}

impl ValidatedPath {
    /// Validate `path` against `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSyntax`] if the path does not match the
    /// dialect's grammar.
    pub fn parse(path: &str, dialect: PathDialect) -> Result<Self> {
        if is_path_syntax_correct(path, dialect) {
            Ok(Self::new_unchecked(path.to_string(), dialect))
        } else {
            Err(Error::InvalidSyntax {
                path: path.to_string(),
                dialect,
            })
        }
    }
}
