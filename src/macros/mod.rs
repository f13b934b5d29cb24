// std::borrow::Cow

/// Takes the owned value out of a cow, or falls back to the given
/// value when the cow only borrows.
///
/// Regex replacements and prefix stripping return `Cow::Borrowed` when
/// nothing changed, in which case the original owned string is reused
/// instead of being copied.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
