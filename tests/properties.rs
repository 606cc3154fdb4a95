use positional_radix::PositionalTrie;
use quickcheck::{quickcheck, TestResult};

// Heavy on shared prefixes so splits, markers and compressions all get exercised
const VOCAB: &[&str] = &["a", "ab", "abc", "abd", "b", "ba", "bab", "babe", "c", "abcd"];

fn word(code: u8) -> &'static str {
    VOCAB[code as usize % VOCAB.len()]
}

/// Applies the operations to both the trie and a plain vector model.
fn replay(ops: &[(bool, u8)]) -> (PositionalTrie<String>, Vec<String>) {
    let mut trie = PositionalTrie::new();
    let mut model: Vec<String> = Vec::new();
    for &(insert, code) in ops {
        let key = word(code);
        if insert {
            trie.insert(key);
            model.push(key.to_string());
        } else {
            let removed = trie.remove(key);
            if let Some(idx) = model.iter().rposition(|w| w == key) {
                model.remove(idx);
                assert!(removed);
            } else {
                assert!(!removed);
            }
        }
    }
    (trie, model)
}

fn model_positions(model: &[String], key: &str) -> Option<Vec<usize>> {
    let positions: Vec<usize> = model
        .iter()
        .enumerate()
        .filter(|(_, w)| w.as_str() == key)
        .map(|(idx, _)| idx + 1)
        .collect();
    if positions.is_empty() {
        None
    } else {
        Some(positions)
    }
}

quickcheck! {
    fn prop_structure_stays_valid(ops: Vec<(bool, u8)>) -> bool {
        let (trie, model) = replay(&ops);
        trie.check_invariants().is_ok() && trie.len() == model.len()
    }

    fn prop_ordered_sequence_matches_model(ops: Vec<(bool, u8)>) -> bool {
        let (trie, model) = replay(&ops);
        trie.to_vec() == model && trie.iter().collect::<Vec<_>>() == model
    }

    fn prop_lookups_match_model(ops: Vec<(bool, u8)>) -> bool {
        let (trie, model) = replay(&ops);
        VOCAB.iter().all(|&key| {
            let expected = model_positions(&model, key);
            trie.find_all(key) == expected
                && trie.find(key) == expected.as_ref().map(|p| p[0])
                && trie.contains(key) == expected.is_some()
        })
    }

    fn prop_round_trip(words: Vec<String>) -> bool {
        let words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
        let trie: PositionalTrie<String> = words.iter().map(String::as_str).collect();
        trie.len() == words.len() && trie.to_vec() == words && trie.check_invariants().is_ok()
    }

    fn prop_remove_takes_newest_occurrence(ops: Vec<(bool, u8)>, code: u8) -> TestResult {
        let (mut trie, _) = replay(&ops);
        let key = word(code);
        let before = match trie.find_all(key) {
            Some(positions) => positions,
            None => return TestResult::discard(),
        };

        let newest = before[before.len() - 1];
        if !trie.remove(key) {
            return TestResult::failed();
        }

        // Older occurrences sit below the removed one and keep their numbers
        let expected = if before.len() > 1 {
            Some(before[..before.len() - 1].to_vec())
        } else {
            None
        };
        TestResult::from_bool(
            trie.find_all(key) == expected && before.iter().all(|&p| p <= newest),
        )
    }

    fn prop_absent_removal_is_noop(ops: Vec<(bool, u8)>, code: u8) -> TestResult {
        let (mut trie, _) = replay(&ops);
        let key = format!("{}{}", word(code), "zz");
        if trie.contains(key.as_str()) {
            return TestResult::discard();
        }

        let before = trie.clone();
        TestResult::from_bool(
            !trie.remove(key.as_str()) && trie == before && trie.len() == before.len(),
        )
    }
}
