// Copyright (C) 2020-2026 Andy Kurnia.

pub struct CheatError {
    s: String,
}

impl std::fmt::Display for CheatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for CheatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for CheatError {}

pub fn new(s: String) -> CheatError {
    CheatError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

// prefixes the underlying error with what was being attempted,
// e.g. "cannot read lexicon words.txt: No such file or directory".
pub trait Context<T> {
    fn context_with<F: FnOnce() -> String>(self, what: F) -> Returns<T>;
}

impl<T, E: std::fmt::Display> Context<T> for Result<T, E> {
    fn context_with<F: FnOnce() -> String>(self, what: F) -> Returns<T> {
        self.map_err(|err| new(format!("{}: {}", what(), err)).into())
    }
}

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails(n: i32) -> Returns<i32> {
        if n < 0 {
            return_error!(format!("negative {}", n));
        }
        Ok(n)
    }

    #[test]
    fn return_error_carries_message() {
        assert_eq!(fails(3).ok(), Some(3));
        let err = fails(-2).unwrap_err();
        assert_eq!(err.to_string(), "negative -2");
        assert_eq!(format!("{:?}", new("x".into())), "x");
    }

    #[test]
    fn context_prefixes_the_cause() {
        let parsed = "12".parse::<u8>().context_with(|| "reading count".into());
        assert_eq!(parsed.ok(), Some(12));
        let err = "300"
            .parse::<u8>()
            .context_with(|| format!("reading count {:?}", "300"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "reading count \"300\": number too large to fit in target type"
        );
        let boxed: Returns<()> = Err(new("inner".into()).into());
        assert_eq!(
            boxed.context_with(|| "outer".into()).unwrap_err().to_string(),
            "outer: inner"
        );
    }
}
