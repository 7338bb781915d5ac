//! List helpers for the string collections edited through tag inputs
//! (resume skills, project technologies, experience achievements).

/// Appends the trimmed value unless it is empty or already present.
/// Returns `None` when the add is a no-op.
pub fn add_unique(list: &[String], value: &str) -> Option<Vec<String>> {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v.trim() == value) {
        return None;
    }
    let mut next = list.to_vec();
    next.push(value.to_string());
    Some(next)
}

/// Drops every element equal to `value`.
pub fn remove_value(list: &[String], value: &str) -> Vec<String> {
    list.iter().filter(|v| *v != value).cloned().collect()
}

/// Appends the trimmed value unless it is empty. Duplicates are allowed.
pub fn append_trimmed(list: &[String], value: &str) -> Option<Vec<String>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let mut next = list.to_vec();
    next.push(value.to_string());
    Some(next)
}

/// Returns the list without the element at `index`, or `None` if out of range.
pub fn remove_at(list: &[String], index: usize) -> Option<Vec<String>> {
    if index >= list.len() {
        return None;
    }
    let mut next = list.to_vec();
    next.remove(index);
    Some(next)
}

/// First value that breaks the tag-list invariant: blank, or equal to an
/// earlier value once both are trimmed.
pub fn first_invalid(list: &[String]) -> Option<&str> {
    list.iter().enumerate().find_map(|(i, v)| {
        let trimmed = v.trim();
        if trimmed.is_empty() || list[..i].iter().any(|prev| prev.trim() == trimmed) {
            Some(v.as_str())
        } else {
            None
        }
    })
}

/// Trimmed, non-blank values in first-seen order with repeats dropped.
pub fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().fold(Vec::new(), |acc, value| {
        add_unique(&acc, value).unwrap_or(acc)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_new_value_grows_by_one() {
        let before = list(&["Rust", "Go"]);
        let after = add_unique(&before, "  Zig ").unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().map(String::as_str), Some("Zig"));
    }

    #[test]
    fn test_add_existing_after_trim_is_noop() {
        assert!(add_unique(&list(&["Rust"]), " Rust ").is_none());
    }

    #[test]
    fn test_add_blank_is_noop() {
        assert!(add_unique(&list(&["Rust"]), "   ").is_none());
        assert!(append_trimmed(&list(&[]), "").is_none());
    }

    #[test]
    fn test_append_allows_duplicates() {
        let after = append_trimmed(&list(&["Led team"]), "Led team").unwrap();
        assert_eq!(after, list(&["Led team", "Led team"]));
    }

    #[test]
    fn test_remove_value() {
        assert_eq!(
            remove_value(&list(&["a", "b", "c"]), "b"),
            list(&["a", "c"])
        );
        assert_eq!(remove_value(&list(&["a"]), "z"), list(&["a"]));
    }

    #[test]
    fn test_remove_at_bounds() {
        assert_eq!(remove_at(&list(&["a", "b"]), 0), Some(list(&["b"])));
        assert_eq!(remove_at(&list(&["a"]), 1), None);
    }

    #[test]
    fn test_first_invalid() {
        assert_eq!(first_invalid(&list(&["a", "b"])), None);
        assert_eq!(first_invalid(&list(&["a", "b", "a"])), Some("a"));
        assert_eq!(first_invalid(&list(&["a", " "])), Some(" "));
    }

    #[test]
    fn test_first_invalid_compares_trimmed() {
        assert_eq!(first_invalid(&list(&["Rust", " Rust"])), Some(" Rust"));
        assert_eq!(first_invalid(&list(&["Rust ", "Go"])), None);
    }

    #[test]
    fn test_add_matches_untrimmed_existing() {
        assert!(add_unique(&list(&["Rust "]), "Rust").is_none());
    }

    #[test]
    fn test_distinct_keeps_first_seen() {
        let values = ["React", " CSS ", "React", "", "CSS", "Go"];
        assert_eq!(distinct(values), list(&["React", "CSS", "Go"]));
        assert_eq!(first_invalid(&distinct(values)), None);
    }
}
