//! Examples of using the positional trie
use positional_radix::PositionalTrie;

fn main() {
    // Create a new trie with string keys
    let mut trie = PositionalTrie::<String>::new();

    // Every insertion takes the next position
    trie.insert("hello");
    trie.insert("help");
    trie.insert("world");
    trie.insert("hello");

    assert_eq!(trie.len(), 4);
    assert_eq!(trie.find("hello"), Some(1));
    assert_eq!(trie.find_all("hello"), Some(vec![1, 4]));
    assert_eq!(trie.find("missing"), None);

    // Removal drops the newest occurrence and renumbers what came after it
    trie.remove("help");
    assert_eq!(trie.find("world"), Some(2));
    assert_eq!(trie.find_all("hello"), Some(vec![1, 3]));

    // Iteration replays the surviving keys in insertion order
    let words: Vec<String> = trie.iter().collect();
    assert_eq!(words, vec!["hello", "world", "hello"]);
    println!("{}", trie);

    // Any `Vec<T>` works as a key, e.g. token ids
    let mut tokens: PositionalTrie<Vec<u32>> = PositionalTrie::new();
    tokens.insert(vec![101u32, 2009, 102]);
    tokens.insert(vec![101u32, 2009]);
    assert_eq!(tokens.find(vec![101u32, 2009]), Some(2));
    println!("{:?}", tokens);
}

#[test]
fn test_rebuild_sequence() {
    let mut trie: PositionalTrie<String> = "to be or not to be".split_whitespace().collect();

    assert_eq!(trie.find_all("to"), Some(vec![1, 5]));
    assert_eq!(trie.find_all("be"), Some(vec![2, 6]));

    trie.remove("or");
    assert_eq!(trie.to_string(), "to be not to be");
    assert_eq!(trie.check_invariants(), Ok(()));
}
