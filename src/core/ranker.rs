use crate::models::Prospect;

/// Prospects returned when the caller does not ask for a limit.
pub const DEFAULT_RANK_LIMIT: usize = 30;

/// Sorts prospects by match score, highest first, and keeps the top
/// `limit`. The sort is stable, so prospects with equal scores keep
/// their input order.
pub fn rank(mut prospects: Vec<Prospect>, limit: usize) -> Vec<Prospect> {
    prospects.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    prospects.truncate(limit);
    prospects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(name: &str, score: u32) -> Prospect {
        let mut prospect = Prospect::default();
        prospect.company.name = Some(name.to_string());
        prospect.match_score = score;
        prospect
    }

    fn names(prospects: &[Prospect]) -> Vec<&str> {
        prospects
            .iter()
            .filter_map(|p| p.company.name.as_deref())
            .collect()
    }

    #[test]
    fn test_rank_orders_descending_and_truncates() {
        let prospects = vec![
            scored("a", 10),
            scored("b", 90),
            scored("c", 50),
            scored("d", 90),
            scored("e", 30),
        ];

        let ranked = rank(prospects, 2);

        // Equal scores keep input order, so b stays ahead of d
        assert_eq!(names(&ranked), vec!["b", "d"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let prospects = vec![scored("x", 40), scored("y", 40), scored("z", 40)];

        let ranked = rank(prospects, DEFAULT_RANK_LIMIT);

        assert_eq!(names(&ranked), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_rank_limit_larger_than_input() {
        let ranked = rank(vec![scored("only", 5)], 10);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank(Vec::new(), DEFAULT_RANK_LIMIT).is_empty());
    }
}
