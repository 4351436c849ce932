/*!
# japanki vocabulary model

Typed records for the vocabulary table and the category-filtered random pick
used by `japanki show`.

```rust
use japanki_vocab::{pick_from_categories, Category, Vocab};

let table = vec![
    Vocab::new(0, "いま", Some("今".into()), "now", Category::Time, None, "ima").unwrap(),
    Vocab::new(1, "たべる", None, "to eat", Category::Verb, None, "taberu").unwrap(),
];

let picked = pick_from_categories(&table, &["time"], &mut rand::thread_rng()).unwrap();
assert_eq!(picked.to_string(), "[Time] | 0 | いま | 今 | ima");
```
*/

pub mod category;
pub mod errors;
pub mod picker;
pub mod vocab;

pub use category::Category;
pub use errors::{VocabError, VocabResult};
pub use picker::{filter_by_categories, parse_categories, pick_from_categories, pick_random};
pub use vocab::Vocab;
