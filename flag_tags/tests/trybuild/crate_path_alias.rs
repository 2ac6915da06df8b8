//! Trybuild fixture verifying `#[flag(crate = "...")]` with a renamed import.

use flag_tags as tags;
use tags::{FlagTags, Options};

#[derive(FlagTags, Default)]
#[flag(crate = "tags")]
struct Aliased {
    #[flag(value = "8")]
    pub workers: i64,
}

fn main() {
    let mut aliased = Aliased::default();
    let options = Options::default().with_flag_prefix("pool-");
    let result = tags::resolve_with(&mut aliased, &options);
    let _: tags::FlagResult<Vec<tags::Binding<'_>>> = result;
}
