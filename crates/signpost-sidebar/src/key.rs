//! Path helpers for group keys, item keys and links.

/// Remove one leading and one trailing `/`.
pub fn trim_slash(s: &str) -> &str {
    let s = s.strip_prefix('/').unwrap_or(s);
    s.strip_suffix('/').unwrap_or(s)
}

/// Join a group path and a relative key into an absolute item key.
///
/// `("/", "intro")` becomes `/intro`, `("/loop/", "/intro/")` becomes `/loop/intro`.
pub fn item_key(group: &str, key: &str) -> String {
    let group = trim_slash(group);
    let key = trim_slash(key);
    if group.is_empty() {
        format!("/{key}")
    } else {
        format!("/{group}/{key}")
    }
}

/// The group path owning an absolute item key.
pub fn owning_group(key: &str) -> String {
    match trim_slash(key).rsplit_once('/') {
        Some((group, _)) => format!("/{group}"),
        None => "/".to_string(),
    }
}

/// Parent path of a group, or `None` for a top-level group.
///
/// `/` and `/loop` are both top-level; `/loop/mapped-types` has parent `/loop`.
pub fn parent_group(path: &str) -> Option<&str> {
    let (parent, _) = path.rsplit_once('/')?;
    if parent.is_empty() {
        None
    } else {
        Some(parent)
    }
}

/// Check that a group path is usable for hierarchy parsing.
pub fn is_valid_group_key(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    match path.strip_prefix('/') {
        Some(rest) => rest.split('/').all(|segment| !segment.is_empty()),
        None => false,
    }
}

/// Resolve an item link against its owning group, then prepend `prefix`.
pub fn resolve_link(prefix: &str, group: &str, link: &str) -> String {
    let group = trim_slash(group);
    let link = trim_slash(link);
    if group.is_empty() {
        format!("{prefix}/{link}")
    } else {
        format!("{prefix}/{group}/{link}")
    }
}
