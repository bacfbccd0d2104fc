use proptest::prelude::*;
use scope_retrieval::chunking::{chunk_text, normalize_whitespace, split_sentences};

/// Sentences of 1-12 lowercase words ending in a terminator, joined by
/// arbitrary whitespace.
fn document() -> impl Strategy<Value = String> {
    let word = "[a-z]{1,12}";
    let sentence = (prop::collection::vec(word, 1..12), prop::sample::select(vec![".", "!", "?"]))
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end));
    let gap = prop::sample::select(vec![" ", "  ", "\n", "\t ", " \n\n "]);
    prop::collection::vec((sentence, gap), 0..25).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(s, g)| format!("{s}{g}"))
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn fresh_text_reconstructs_normalized_document(
        doc in document(),
        size in 20usize..300,
        overlap in 0usize..60,
    ) {
        let chunks = chunk_text(&doc, size, overlap);
        let rebuilt = chunks
            .iter()
            .map(|c| c.fresh_text())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(rebuilt, normalize_whitespace(&doc));
    }

    #[test]
    fn chunks_respect_size_unless_single_sentence(
        doc in document(),
        size in 20usize..300,
        overlap in 0usize..60,
    ) {
        for chunk in chunk_text(&doc, size, overlap) {
            if chunk.char_len() > size {
                prop_assert_eq!(chunk.overlap_chars, 0);
                prop_assert_eq!(split_sentences(&chunk.text).len(), 1);
            }
        }
    }

    #[test]
    fn overlap_prefix_is_tail_of_previous_chunk(
        doc in document(),
        size in 20usize..300,
        overlap in 0usize..60,
    ) {
        let chunks = chunk_text(&doc, size, overlap);
        for pair in chunks.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            prop_assert!(next.overlap_chars <= overlap.min(prev.char_len()));
            let prefix: String = next.text.chars().take(next.overlap_chars).collect();
            prop_assert!(prev.text.ends_with(&prefix));
        }
    }

    #[test]
    fn no_chunk_is_empty(doc in document(), size in 1usize..300, overlap in 0usize..60) {
        for chunk in chunk_text(&doc, size, overlap) {
            prop_assert!(!chunk.text.is_empty());
        }
    }

    #[test]
    fn chunking_is_deterministic(doc in document(), size in 20usize..300) {
        prop_assert_eq!(chunk_text(&doc, size, 10), chunk_text(&doc, size, 10));
    }
}
