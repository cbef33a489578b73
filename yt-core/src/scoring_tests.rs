#[cfg(test)]
mod tests {
    use crate::{score_for, scores_for_held, Category};

    /// Every sequence of `len` faces, in lexicographic order.
    fn all_hands(len: usize) -> Vec<Vec<u8>> {
        let mut out = vec![Vec::new()];
        for _ in 0..len {
            out = out
                .into_iter()
                .flat_map(|h| {
                    (1u8..=6).map(move |f| {
                        let mut n = h.clone();
                        n.push(f);
                        n
                    })
                })
                .collect();
        }
        out
    }

    #[test]
    fn upper_section_sums_matching_faces_exhaustive() {
        for len in 0..=5 {
            for hand in all_hands(len) {
                let preview = scores_for_held(&hand);
                for (i, cat) in Category::ALL[..6].iter().enumerate() {
                    let face = i as u8 + 1;
                    let expected: u32 = hand.iter().filter(|&&v| v == face).map(|&v| v as u32).sum();
                    assert_eq!(preview.get(*cat), expected, "{} for {:?}", cat, hand);
                }
            }
        }
    }

    #[test]
    fn preview_is_order_independent() {
        for hand in all_hands(5) {
            let mut sorted = hand.clone();
            sorted.sort_unstable();
            let mut reversed = hand.clone();
            reversed.reverse();
            let base = scores_for_held(&hand);
            assert_eq!(base, scores_for_held(&sorted), "sorted {:?}", hand);
            assert_eq!(base, scores_for_held(&reversed), "reversed {:?}", hand);
        }
    }

    #[test]
    fn chance_is_sum_of_held() {
        assert_eq!(score_for(Category::Chance, &[]), 0);
        assert_eq!(score_for(Category::Chance, &[6, 6]), 12);
        assert_eq!(score_for(Category::Chance, &[1, 2, 3, 4, 6]), 16);
    }

    #[test]
    fn full_house_only_for_three_and_two() {
        assert_eq!(score_for(Category::FullHouse, &[5, 5, 5, 2, 2]), 25);
        assert_eq!(score_for(Category::FullHouse, &[2, 5, 2, 5, 5]), 25);
        // {5}
        assert_eq!(score_for(Category::FullHouse, &[4, 4, 4, 4, 4]), 0);
        // {4,1}
        assert_eq!(score_for(Category::FullHouse, &[4, 4, 4, 4, 1]), 0);
        // {3,1,1}
        assert_eq!(score_for(Category::FullHouse, &[3, 3, 3, 1, 2]), 0);
        // {2,2,1}
        assert_eq!(score_for(Category::FullHouse, &[3, 3, 1, 1, 2]), 0);
        // {3} only
        assert_eq!(score_for(Category::FullHouse, &[3, 3, 3]), 0);
    }

    #[test]
    fn full_house_matches_count_distribution_exhaustive() {
        for hand in all_hands(5) {
            let mut counts = [0u8; 6];
            for &v in &hand {
                counts[(v - 1) as usize] += 1;
            }
            let mut groups: Vec<u8> = counts.iter().copied().filter(|&c| c > 0).collect();
            groups.sort_unstable();
            let expected = if groups == [2, 3] { 25 } else { 0 };
            assert_eq!(score_for(Category::FullHouse, &hand), expected, "{:?}", hand);
        }
    }

    #[test]
    fn four_of_a_kind_scores_all_held() {
        assert_eq!(score_for(Category::FourOfAKind, &[3, 3, 3, 3, 6]), 18);
        assert_eq!(score_for(Category::FourOfAKind, &[2, 2, 2, 2, 2]), 10);
        assert_eq!(score_for(Category::FourOfAKind, &[6, 6, 6, 6]), 24);
        assert_eq!(score_for(Category::FourOfAKind, &[3, 3, 3, 6, 6]), 0);
    }

    #[test]
    fn straights_ignore_duplicates_and_order() {
        assert_eq!(score_for(Category::SmallStraight, &[1, 2, 2, 3, 4]), 30);
        assert_eq!(score_for(Category::SmallStraight, &[4, 3, 2, 2, 1]), 30);
        assert_eq!(score_for(Category::SmallStraight, &[6, 3, 5, 4, 4]), 30);
        assert_eq!(score_for(Category::SmallStraight, &[3, 4, 5, 6]), 30);
        assert_eq!(score_for(Category::SmallStraight, &[1, 2, 3, 5, 6]), 0);
        assert_eq!(score_for(Category::LargeStraight, &[1, 2, 2, 3, 4]), 0);

        assert_eq!(score_for(Category::LargeStraight, &[5, 3, 1, 2, 4]), 40);
        assert_eq!(score_for(Category::LargeStraight, &[2, 3, 4, 5, 6]), 40);
        assert_eq!(score_for(Category::LargeStraight, &[1, 2, 3, 4, 6]), 0);
    }

    #[test]
    fn large_straight_also_previews_small_straight() {
        let preview = scores_for_held(&[1, 2, 3, 4, 5]);
        assert_eq!(preview.get(Category::SmallStraight), 30);
        assert_eq!(preview.get(Category::LargeStraight), 40);
    }

    #[test]
    fn yacht_needs_five_equal() {
        assert_eq!(score_for(Category::Yacht, &[6, 6, 6, 6, 6]), 50);
        assert_eq!(score_for(Category::Yacht, &[6, 6, 6, 6, 1]), 0);
        assert_eq!(score_for(Category::Yacht, &[6, 6, 6, 6]), 0);
        assert_eq!(score_for(Category::Yacht, &[]), 0);
    }

    #[test]
    fn empty_hand_scores_zero_everywhere() {
        let preview = scores_for_held(&[]);
        assert!(preview.iter().all(|(_, s)| s == 0));
    }
}
