//! Label merging at index time.
//!
//! Vision labels and user-supplied custom labels are lowercased, trimmed,
//! and unioned. No stemming happens here: labels are indexed as-is, and the
//! query side's wildcard clause bridges the gap to its normalized keywords.

use crate::clients::vision::DetectedLabel;

/// Merge vision-detected labels with a raw comma-separated custom-label
/// string into the deduplicated label set for one photo.
///
/// First occurrence wins on duplicates, so label order is stable: vision
/// labels in detection order, then custom labels in written order.
pub fn merge_labels(vision_labels: &[DetectedLabel], custom_labels: Option<&str>) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();

    for label in vision_labels {
        push_unique(&mut labels, label.name.to_lowercase());
    }
    for piece in parse_custom_labels(custom_labels) {
        push_unique(&mut labels, piece);
    }

    labels
}

/// Split a comma-separated custom-label string into lowercased, trimmed,
/// non-empty pieces. Absent or empty input yields nothing.
pub fn parse_custom_labels(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(',')
        .map(|piece| piece.trim().to_lowercase())
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn push_unique(labels: &mut Vec<String>, label: String) {
    if !label.is_empty() && !labels.contains(&label) {
        labels.push(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected(name: &str, confidence: f32) -> DetectedLabel {
        DetectedLabel {
            name: name.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_merge_lowercases_and_deduplicates() {
        let vision = vec![detected("Cat", 91.0)];
        let labels = merge_labels(&vision, Some("cat, pet, Feline"));
        assert_eq!(labels, vec!["cat", "pet", "feline"]);
    }

    #[test]
    fn test_merge_without_custom_labels_keeps_vision_only() {
        let vision = vec![detected("Dog", 88.5), detected("Animal", 72.0)];
        assert_eq!(merge_labels(&vision, None), vec!["dog", "animal"]);
        assert_eq!(merge_labels(&vision, Some("")), vec!["dog", "animal"]);
    }

    #[test]
    fn test_merge_keeps_labels_unstemmed() {
        let vision = vec![detected("Cats", 95.0)];
        assert_eq!(merge_labels(&vision, None), vec!["cats"]);
    }

    #[test]
    fn test_custom_labels_trim_and_drop_empty_pieces() {
        assert_eq!(
            parse_custom_labels(Some("  beach ,, sunset ,")),
            vec!["beach", "sunset"]
        );
    }

    #[test]
    fn test_custom_labels_absent_is_empty() {
        assert!(parse_custom_labels(None).is_empty());
        assert!(parse_custom_labels(Some("   ")).is_empty());
    }

    #[test]
    fn test_merge_never_produces_empty_strings() {
        let vision = vec![detected("", 90.0)];
        assert!(merge_labels(&vision, Some(" , ,")).is_empty());
    }
}
