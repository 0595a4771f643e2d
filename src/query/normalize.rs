//! Suffix-stripping keyword normalization.
//!
//! A deliberately tiny stemmer: four suffix rules applied in priority order,
//! first match wins. Indexed labels are never stemmed; only query-time
//! keywords pass through here, and the wildcard clause built in
//! [`crate::clients::search_index`] absorbs the resulting mismatch
//! (keyword `cat` still matches indexed label `cats` via `cat*`).

/// Normalize a keyword by removing common plural/verb suffixes.
///
/// Input is expected lowercased and trimmed. Total function: always returns
/// a string, unchanged when no rule fires.
///
/// The `ing` rule does not restore the root form (`running` becomes `runn`,
/// not `run`). That output is only ever compared against other normalized
/// keywords and used as a wildcard prefix, so the non-word is harmless and
/// kept for index/query consistency.
pub fn normalize_keyword(keyword: &str) -> String {
    if let Some(stem) = keyword.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if keyword.ends_with("es") && keyword.len() > 3 {
        return keyword[..keyword.len() - 2].to_string();
    }
    if keyword.ends_with('s') && keyword.len() > 2 {
        return keyword[..keyword.len() - 1].to_string();
    }
    if keyword.ends_with("ing") && keyword.len() > 4 {
        return keyword[..keyword.len() - 3].to_string();
    }
    keyword.to_string()
}
