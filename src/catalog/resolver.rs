use super::CommandItem;

/// Outcome of resolving a free-text query against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Exactly one item name starts with the query.
    Match(&'a CommandItem),
    NotFound,
    /// All matching names, in catalog order, for display to the requester.
    Ambiguous(Vec<String>),
}

/// Case-insensitive "name starts with query" matching.
///
/// No tie-breaking is performed beyond the match count; keeping prefixes
/// distinguishable is the catalog author's job.
pub fn resolve<'a>(items: &'a [CommandItem], query: &str) -> Resolution<'a> {
    let query = query.to_lowercase();
    let matches: Vec<&CommandItem> = items
        .iter()
        .filter(|item| item.name.to_lowercase().starts_with(&query))
        .collect();

    match matches.as_slice() {
        [] => Resolution::NotFound,
        [item] => Resolution::Match(*item),
        _ => Resolution::Ambiguous(matches.iter().map(|item| item.name.clone()).collect()),
    }
}
