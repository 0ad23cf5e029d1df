//! Property tests: any record list written through RecordStore reads back
//! unchanged after reopen.

use std::sync::Arc;

use proptest::prelude::*;

use quotesync_core::models::Record;
use quotesync_storage::{MemoryStore, RecordStore};

fn arb_record() -> impl Strategy<Value = Record> {
    (
        proptest::option::of(1u64..10_000),
        "[a-zA-Z0-9 .,!?]{1,60}",
        "[a-zA-Z]{1,12}",
    )
        .prop_map(|(id, text, category)| Record { id, text, category })
}

proptest! {
    #[test]
    fn prop_replace_all_survives_reopen(records in proptest::collection::vec(arb_record(), 0..20)) {
        let backend = Arc::new(MemoryStore::new());
        {
            let mut store = RecordStore::open(backend.clone()).unwrap();
            store.replace_all(records.clone()).unwrap();
        }
        let reopened = RecordStore::open(backend).unwrap();
        prop_assert_eq!(reopened.records(), records.as_slice());
    }
}
