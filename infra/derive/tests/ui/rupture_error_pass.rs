use rupture_derive::rupture_error;
use std::borrow::Cow;

#[rupture_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Bad value{}: {value}", format_context(.context))]
    BadValue { value: f64, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    let text = std::fs::read_to_string("/definitely/not/here").context("Reading demo")?;
    Ok(text)
}

fn main() {
    let _ = read();
    let _: DemoError = "internal".into();
    let _: DemoError = std::io::Error::other("io").into();
}
