use std::fmt::{self, Debug, Formatter};

/// Prints the contained String verbatim when formatted with [`Debug`], allowing pre-rendered
/// fragments to sit inside `debug_list` and friends without extra quoting.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders a cloneable iterator as a list when formatted with [`Debug`]. Used for the `contents`
/// field of the collections' Debug output.
pub struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Joins the [`Debug`] rendering of each item with `sep`.
pub fn join_debug<I>(iter: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: Debug,
{
    let mut out = String::new();
    for (index, item) in iter.into_iter().enumerate() {
        if index != 0 {
            out.push_str(sep);
        }
        out.push_str(&format!("{item:?}"));
    }
    out
}
