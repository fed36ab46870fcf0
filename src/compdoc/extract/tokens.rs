use crate::host::StyleLookup;
use crate::model::Facet;

/// Map a style reference to the style's display name.
///
/// Empty references and references the lookup does not know yield `None`.
pub fn resolve_token<L: StyleLookup + ?Sized>(
    styles: &L,
    style_ref: Option<&str>,
) -> Option<String> {
    let style_id = style_ref.filter(|id| !id.is_empty())?;
    styles.style_by_id(style_id).map(|style| style.name.clone())
}

/// Resolve a style-id facet; mixed and absent references are never looked up.
pub fn resolve_facet<L: StyleLookup + ?Sized>(
    styles: &L,
    style_ref: &Facet<String>,
) -> Option<String> {
    resolve_token(styles, style_ref.uniform().map(String::as_str))
}
