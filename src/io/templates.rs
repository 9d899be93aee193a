use crate::io::error::Error;
use std::fs;
use std::path::Path;

/// Template name used when no template structures are available.
pub const NO_TEMPLATE: &str = "no_template";

/// Names of the `*.pdb` templates in `dir`, sorted.
///
/// Each name is the file stem with every run of characters other than
/// Unicode letters, digits and `_` replaced by a single `_`, so
/// `.hidden.pdb` becomes `_hidden`. Only regular files count; a directory
/// named `*.pdb` is skipped.
///
/// Returns `["no_template"]` when the directory does not exist or holds no
/// templates.
pub fn template_names(dir: &Path) -> Result<Vec<String>, Error> {
    if !dir.exists() {
        return Ok(vec![NO_TEMPLATE.to_string()]);
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "pdb") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        names.push(sanitize_name(stem));
    }

    if names.is_empty() {
        return Ok(vec![NO_TEMPLATE.to_string()]);
    }

    names.sort();
    Ok(names)
}

/// Collapses each run of non-word characters into `_`.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}
