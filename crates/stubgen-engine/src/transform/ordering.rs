//! Input class list and processing order.

use std::path::PathBuf;

use stubgen_core::errors::SourceError;
use stubgen_core::ClassLister;

/// Nested classes (`Outer$Inner`) first. The sort is stable, so ties keep
/// their enumeration order.
pub fn order_for_processing(classes: &mut [String]) {
    classes.sort_by_key(|name| !name.contains('$'));
}

/// Concatenate the class lists of every source, in source order, then order
/// them for processing. A source that cannot be listed fails the whole list.
pub fn input_class_list<L: ClassLister + ?Sized>(
    lister: &L,
    sources: &[PathBuf],
) -> Result<Vec<String>, SourceError> {
    let mut classes = Vec::new();
    for source in sources {
        let listed = lister.list(source)?;
        tracing::debug!(source = %source.display(), count = listed.len(), "listed source");
        classes.extend(listed);
    }
    order_for_processing(&mut classes);
    Ok(classes)
}
