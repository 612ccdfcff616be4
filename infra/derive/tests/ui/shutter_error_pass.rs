use shutter_derive::shutter_error;
use std::borrow::Cow;

#[shutter_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing field{}: {path}", format_context(.context))]
    Missing { path: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let _from_str: DemoError = "boom".into();
    let _from_io: DemoError = std::io::Error::other("disk").into();
}
