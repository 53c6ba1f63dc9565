use std::io::{self, BufWriter, Write};

/// Runs `f` against a buffered, locked stdout and flushes it afterwards.
///
/// A closed pipe (`cidr 10.0.0.0/8 | head`) ends output quietly.
pub fn to_stdout<F>(f: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut dyn Write) -> anyhow::Result<()>,
{
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = f(&mut out).and_then(|()| Ok(out.flush()?));
    match result {
        Err(e) if is_broken_pipe(&e) => Ok(()),
        other => other,
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}
