// Category extraction, filter resolution and grouping.
//
// A category is whatever comes before the first underscore in an emoji name.
// The grouping keeps categories in the order they were first seen so the
// multi-category reply lists them the way the guild returned its emoji.

use super::emoji_count_models::GuildEmoji;
use std::collections::HashMap;

/// Category of an emoji name: the text before the first `_`, or the whole
/// name when there is no underscore. No trimming or case folding.
pub fn category_of(name: &str) -> &str {
    name.split('_').next().unwrap_or(name)
}

/// Insertion-ordered mapping of category -> member emoji.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups {
    entries: Vec<(String, Vec<GuildEmoji>)>,
    index: HashMap<String, usize>,
}

impl CategoryGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with no members. Returns false if it was already present.
    pub fn insert_category(&mut self, category: &str) -> bool {
        if self.index.contains_key(category) {
            return false;
        }
        self.index.insert(category.to_string(), self.entries.len());
        self.entries.push((category.to_string(), Vec::new()));
        true
    }

    #[allow(dead_code)]
    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Members of a category, if it is a key.
    #[allow(dead_code)]
    pub fn get(&self, category: &str) -> Option<&[GuildEmoji]> {
        self.index
            .get(category)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    fn push_member(&mut self, category: &str, emoji: GuildEmoji) -> bool {
        match self.index.get(category) {
            Some(&slot) => {
                self.entries[slot].1.push(emoji);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(category, _)| category.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GuildEmoji])> {
        self.entries
            .iter()
            .map(|(category, members)| (category.as_str(), members.as_slice()))
    }
}

/// Every distinct category among `emojis`, in first-seen order.
pub fn distinct_categories(emojis: &[GuildEmoji]) -> Vec<String> {
    let mut groups = CategoryGroups::new();
    for emoji in emojis {
        groups.insert_category(category_of(&emoji.name));
    }
    groups.categories().map(str::to_string).collect()
}

/// Decide which categories the invocation is about.
///
/// Without a filter every observed category is a candidate. With a filter a
/// category is a candidate when it occurs *inside* the filter text, so
/// `"tech and fun"` selects both `tech` and `fun`.
pub fn resolve_candidates(emojis: &[GuildEmoji], filter: Option<&str>) -> CategoryGroups {
    let mut candidates = CategoryGroups::new();

    for emoji in emojis {
        let category = category_of(&emoji.name);
        match filter {
            None => {
                candidates.insert_category(category);
            }
            Some(filter) if filter.contains(category) => {
                candidates.insert_category(category);
            }
            Some(_) => {}
        }
    }

    tracing::trace!(candidates = candidates.len(), "Emoji categories resolved");
    candidates
}

/// Fill the candidate categories with their member emoji.
///
/// Emoji whose category is not already a candidate are dropped; the key set
/// is fixed before grouping starts.
pub fn group_emojis(mut candidates: CategoryGroups, emojis: &[GuildEmoji]) -> CategoryGroups {
    for emoji in emojis {
        candidates.push_member(category_of(&emoji.name), emoji.clone());
    }

    tracing::trace!(categories = candidates.len(), "Emoji groups built");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emoji(name: &str, id: u64) -> GuildEmoji {
        GuildEmoji {
            id,
            name: name.to_string(),
            url: format!("https://cdn.discordapp.com/emojis/{}.png", id),
            animated: false,
        }
    }

    fn sample() -> Vec<GuildEmoji> {
        vec![emoji("tech_a", 1), emoji("tech_b", 2), emoji("fun_c", 3)]
    }

    #[test]
    fn category_without_underscore_is_whole_name() {
        for name in ["tech", "Tech", " spaced ", "", "emoji-with-dash"] {
            assert_eq!(category_of(name), name);
        }
    }

    #[test]
    fn category_stops_at_first_underscore() {
        assert_eq!(category_of("tech_a"), "tech");
        assert_eq!(category_of("tech_a_b"), "tech");
        assert_eq!(category_of("Tech_A"), "Tech");
        assert_eq!(category_of("_leading"), "");
        assert_eq!(category_of("trailing_"), "trailing");
    }

    #[test]
    fn no_filter_groups_every_category_in_first_seen_order() {
        let emojis = sample();
        let groups = group_emojis(resolve_candidates(&emojis, None), &emojis);

        assert_eq!(groups.categories().collect::<Vec<_>>(), vec!["tech", "fun"]);
        assert_eq!(groups.get("tech").unwrap(), &emojis[..2]);
        assert_eq!(groups.get("fun").unwrap(), &emojis[2..]);
    }

    #[test]
    fn no_filter_partitions_without_loss_or_duplication() {
        let emojis = vec![
            emoji("a_1", 1),
            emoji("b_1", 2),
            emoji("a_2", 3),
            emoji("plain", 4),
            emoji("b_2", 5),
            emoji("_x", 6),
        ];
        let groups = group_emojis(resolve_candidates(&emojis, None), &emojis);

        let mut seen: Vec<u64> = groups
            .iter()
            .flat_map(|(_, members)| members.iter().map(|e| e.id))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);

        for (category, members) in groups.iter() {
            assert!(members.iter().all(|e| category_of(&e.name) == category));
        }
    }

    #[test]
    fn filter_matches_categories_contained_in_it() {
        let emojis = sample();

        let groups = group_emojis(resolve_candidates(&emojis, Some("tech")), &emojis);
        assert_eq!(groups.categories().collect::<Vec<_>>(), vec!["tech"]);
        assert_eq!(groups.get("tech").unwrap().len(), 2);

        let groups = group_emojis(resolve_candidates(&emojis, Some("fun and tech")), &emojis);
        assert_eq!(groups.categories().collect::<Vec<_>>(), vec!["tech", "fun"]);
    }

    #[test]
    fn filter_is_not_matched_the_other_way_round() {
        let emojis = sample();
        // "te" is inside "tech" but "tech" is not inside "te".
        assert!(resolve_candidates(&emojis, Some("te")).is_empty());
        assert!(resolve_candidates(&emojis, Some("xyz")).is_empty());
        assert!(resolve_candidates(&emojis, Some("TECH")).is_empty());
    }

    #[test]
    fn grouping_drops_emoji_outside_the_candidates() {
        let emojis = sample();
        let mut candidates = CategoryGroups::new();
        candidates.insert_category("fun");
        candidates.insert_category("ghost");

        let groups = group_emojis(candidates, &emojis);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get("fun").unwrap().len(), 1);
        assert!(groups.get("ghost").unwrap().is_empty());
        assert!(!groups.contains("tech"));
    }

    #[test]
    fn distinct_categories_ignore_duplicates() {
        assert_eq!(distinct_categories(&sample()), vec!["tech", "fun"]);
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn duplicate_category_insert_is_rejected() {
        let mut groups = CategoryGroups::new();
        assert!(groups.insert_category("tech"));
        assert!(!groups.insert_category("tech"));
        assert_eq!(groups.len(), 1);
    }
}
