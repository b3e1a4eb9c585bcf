use std::path::{Component, Path};

/// Whether `name` is exactly one normal path component, so joining it onto a
/// directory cannot leave that directory.
pub fn is_single_component(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\', '\0']) {
        return false;
    }

    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// `name` without its last extension. Leading dots do not start an extension,
/// so `.bashrc` and `..` are returned unchanged.
pub(crate) fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => &name[..idx],
        _ => name,
    }
}
