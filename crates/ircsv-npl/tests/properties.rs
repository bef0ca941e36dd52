//! Property-based tests for the NPL parsers

use ircsv_npl::{parse_documents_str, parse_judgments_str};
use proptest::prelude::*;

fn group() -> impl Strategy<Value = (i64, Vec<Vec<i64>>)> {
    (
        0i64..20_000,
        prop::collection::vec(prop::collection::vec(0i64..20_000, 0..6), 0..4),
    )
}

proptest! {
    #[test]
    fn prop_one_row_per_listed_document(groups in prop::collection::vec(group(), 0..12)) {
        let mut content = String::new();
        let mut expected = Vec::new();

        for (query_id, lines) in &groups {
            content.push_str(&format!("{query_id}\n"));
            for line in lines {
                let ids: Vec<String> = line.iter().map(ToString::to_string).collect();
                content.push_str(&format!("{}\n", ids.join(" ")));
                expected.extend(line.iter().map(|doc_id| (*query_id, *doc_id)));
            }
            // Groups without documents keep their query ID open; close them
            // with a document so each group stands alone.
            if lines.iter().all(Vec::is_empty) {
                content.push_str("1\n");
                expected.push((*query_id, 1));
            }
            content.push_str("   /\n");
        }

        let rows: Vec<(i64, i64)> = parse_judgments_str(&content)
            .into_iter()
            .map(|j| {
                assert_eq!(j.relevance, 1);
                (j.query_id, j.doc_id)
            })
            .collect();
        prop_assert_eq!(rows, expected);
    }

    #[test]
    fn prop_separator_only_input_has_no_documents(count in 0usize..10) {
        let content = "   /\n\n".repeat(count);
        prop_assert!(parse_documents_str(&content).is_empty());
    }
}
