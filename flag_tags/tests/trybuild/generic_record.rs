//! Trybuild fixture verifying the derive keeps generic parameters and bounds.

use flag_tags::{FlagTags, Record, resolve};

#[derive(FlagTags, Default)]
struct Endpoint {
    pub url: String,
}

/// Wraps any record alongside a label of its own.
#[derive(FlagTags, Default)]
struct Labelled<T>
where
    T: Record,
{
    pub label: String,
    #[flag(flatten)]
    pub inner: T,
}

fn main() {
    let mut labelled = Labelled::<Endpoint>::default();
    let bindings = resolve(&mut labelled);
    let _: usize = bindings.map(|found| found.len()).unwrap_or_default();
}
