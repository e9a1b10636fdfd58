//! Property-based tests for filtering and the view state machine.
//!
//! Tests validate:
//! 1. An empty query keeps every record, in order
//! 2. Filter output is an order-preserving subsequence of its input
//! 3. Every filtered record matches, every dropped record does not
//! 4. Selection stays in range under any key sequence
//! 5. Opening prompts without committing never changes the visible list

use elv::model::{KeyAction, LogRecord};
use elv::state::{filter, filter_indices, handle_event, Mode, ViewEvent, ViewState};
use proptest::prelude::*;
use serde_json::{Map, Value};

// ===== Strategies =====

fn arb_record(line_number: usize) -> impl Strategy<Value = LogRecord> {
    (
        prop::sample::select(vec!["GET", "POST", "PUT", "DELETE"]),
        prop::sample::select(vec![0u16, 200, 204, 404, 503, 504]),
        prop::sample::select(vec!["-", "UF", "UH", "UF,URX", "NR"]),
        "/[a-z]{1,8}",
    )
        .prop_map(move |(method, code, flags, path)| {
            let mut fields = Map::new();
            fields.insert("method".into(), Value::from(method));
            fields.insert("response_code".into(), Value::from(code));
            fields.insert("response_flags".into(), Value::from(flags));
            fields.insert("path".into(), Value::from(path));
            let raw = Value::Object(fields.clone()).to_string();
            LogRecord::new(raw, fields, line_number)
        })
}

fn arb_records() -> impl Strategy<Value = Vec<LogRecord>> {
    (0usize..40).prop_flat_map(|len| {
        (1..=len)
            .map(arb_record)
            .collect::<Vec<_>>()
    })
}

fn arb_query() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "", "get", "GET", "post", "503", "uf", "URX", "/", "method", "nothing-here",
    ])
    .prop_map(str::to_string)
}

fn arb_event() -> impl Strategy<Value = ViewEvent> {
    prop_oneof![
        Just(ViewEvent::Action(KeyAction::SelectNext)),
        Just(ViewEvent::Action(KeyAction::SelectPrevious)),
        Just(ViewEvent::Action(KeyAction::StartSearch)),
        Just(ViewEvent::Action(KeyAction::StartJump)),
        Just(ViewEvent::Action(KeyAction::Submit)),
        Just(ViewEvent::Action(KeyAction::Cancel)),
        Just(ViewEvent::Backspace),
        prop::sample::select(vec!['1', '2', '5', 'G', 'E', 'T', 'U', 'F', 'x'])
            .prop_map(ViewEvent::Input),
    ]
}

fn matches(record: &LogRecord, query: &str) -> bool {
    let query = query.to_lowercase();
    record.raw_text().to_lowercase().contains(&query)
        || record.fields().iter().any(|(k, v)| {
            k.to_lowercase().contains(&query)
                || elv::model::value_to_string(v).to_lowercase().contains(&query)
        })
}

// ===== Property 1-3: Filter =====

proptest! {
    #[test]
    fn empty_query_is_identity(records in arb_records()) {
        let kept = filter(&records, "");
        prop_assert_eq!(kept.len(), records.len());
        for (kept, original) in kept.iter().zip(records.iter()) {
            prop_assert_eq!(kept.line_number(), original.line_number());
        }
    }

    #[test]
    fn filter_preserves_order(records in arb_records(), query in arb_query()) {
        let indices = filter_indices(&records, &query);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(indices.iter().all(|&i| i < records.len()));
    }

    #[test]
    fn filter_keeps_exactly_the_matches(records in arb_records(), query in arb_query()) {
        let indices = filter_indices(&records, &query);
        for (idx, record) in records.iter().enumerate() {
            prop_assert_eq!(indices.contains(&idx), matches(record, &query));
        }
    }

    #[test]
    fn filter_ignores_case(records in arb_records(), query in arb_query()) {
        prop_assert_eq!(
            filter_indices(&records, &query.to_uppercase()),
            filter_indices(&records, &query.to_lowercase())
        );
    }
}

// ===== Property 4-5: State machine =====

proptest! {
    #[test]
    fn selection_stays_in_range(
        records in arb_records(),
        events in prop::collection::vec(arb_event(), 0..60),
    ) {
        let mut state = ViewState::new(records);
        for event in events {
            state = handle_event(state, event).0;
            if !state.is_empty() {
                prop_assert!(state.selected_index() < state.visible_len());
                prop_assert!(state.selected_record().is_some());
            }
            if state.mode() == Mode::Normal {
                prop_assert_eq!(state.input_buffer(), "");
            }
        }
    }

    #[test]
    fn down_then_up_restores_selection(records in arb_records(), start in 0usize..40) {
        prop_assume!(records.len() >= 2);
        let mut state = ViewState::new(records);
        for _ in 0..start.min(state.visible_len() - 2) {
            state = handle_event(state, ViewEvent::Action(KeyAction::SelectNext)).0;
        }
        let before = state.selected_index();

        state = handle_event(state, ViewEvent::Action(KeyAction::SelectNext)).0;
        state = handle_event(state, ViewEvent::Action(KeyAction::SelectPrevious)).0;

        prop_assert_eq!(state.selected_index(), before);
    }

    #[test]
    fn prompts_without_commit_never_filter(
        records in arb_records(),
        typed in prop::collection::vec(prop::sample::select(vec!['5', '0', '3', 'G']), 0..6),
    ) {
        let state = ViewState::new(records);
        let visible_before = state.visible_indices().to_vec();

        let mut state = handle_event(state, ViewEvent::Action(KeyAction::StartSearch)).0;
        for ch in &typed {
            state = handle_event(state, ViewEvent::Input(*ch)).0;
        }
        state = handle_event(state, ViewEvent::Action(KeyAction::StartJump)).0;
        for ch in &typed {
            state = handle_event(state, ViewEvent::Input(*ch)).0;
        }
        state = handle_event(state, ViewEvent::Action(KeyAction::Cancel)).0;

        prop_assert_eq!(state.visible_indices(), visible_before.as_slice());
        prop_assert_eq!(state.mode(), Mode::Normal);
    }
}
