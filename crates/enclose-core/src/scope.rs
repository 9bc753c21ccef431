use std::io::{self, Write};

/// Builds a reporter closing over a value declared in this function's scope.
///
/// The returned closure keeps the binding alive after `make_reporter`
/// itself has returned; every invocation writes the value that was in
/// scope at construction time.
pub fn make_reporter() -> impl Fn(&mut dyn Write) -> io::Result<()> {
    let captured = 100;

    move |out: &mut dyn Write| writeln!(out, "{}", captured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporter_writes_construction_time_value() {
        let report = make_reporter();

        let mut buf = Vec::new();
        report(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "100\n");
    }

    #[test]
    fn reporter_is_stable_across_invocations() {
        let report = make_reporter();

        for _ in 0..3 {
            let mut buf = Vec::new();
            report(&mut buf).unwrap();
            assert_eq!(buf, b"100\n");
        }
    }
}
