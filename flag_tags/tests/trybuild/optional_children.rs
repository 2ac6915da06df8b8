//! Trybuild fixture verifying optional, boxed and raw-identifier fields.

use flag_tags::{FlagResult, FlagTags, Record};

#[derive(FlagTags, Default)]
struct Tls {
    #[flag(usage = "Certificate path")]
    pub cert: String,
}

#[derive(FlagTags, Default)]
struct Server {
    pub r#type: String,
    pub tls: Option<Tls>,
    pub fallback: Box<Tls>,
    pub mirror: Option<Box<Tls>>,
    #[flag(unknown_key = "ignored")]
    pub(crate) port: i64,
}

fn count(server: &mut Server) -> FlagResult<usize> {
    server.bindings().map(|found| found.len())
}

fn main() {
    let mut server = Server::default();
    let _ = count(&mut server);
}
