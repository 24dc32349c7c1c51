use crate::api::Item;

/// Case-insensitive substring filter on item names. An empty search
/// term returns the catalog unchanged, in original order.
pub fn filter<'a>(items: &'a [Item], search: &str) -> Vec<&'a Item> {
    if search.is_empty() {
        return items.iter().collect();
    }
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item {
            id: name.to_lowercase(),
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let items = vec![item("Alpha"), item("Beta")];
        let matched = filter(&items, "al");
        let names: Vec<&str> = matched.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha"]);
    }

    #[test]
    fn empty_term_returns_all_in_order() {
        let items = vec![item("Beta"), item("Alpha")];
        let matched = filter(&items, "");
        let names: Vec<&str> = matched.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alpha"]);
    }

    #[test]
    fn no_match_returns_empty() {
        let items = vec![item("Alpha"), item("Beta")];
        assert!(filter(&items, "zzz").is_empty());
    }
}
