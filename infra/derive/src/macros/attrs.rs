use fxhash::FxHashSet;
use syn::Attribute;

/// Collects the trait names already present in `#[derive(...)]` attributes.
///
/// Paths are reduced to their last segment, so `serde::Serialize` and
/// `Serialize` are treated the same.
pub fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}
