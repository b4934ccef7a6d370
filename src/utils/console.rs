use std::io::Write;
use std::sync::{Arc, Mutex};
use crate::core::library::{LibraryError, LibraryResult};

// SharedOutput is the line-oriented writer shared by the scenario and the console sinks
pub type SharedOutput = Arc<Mutex<dyn Write + Send>>;

pub fn stdout() -> SharedOutput {
    Arc::new(Mutex::new(std::io::stdout()))
}

// writes one line and flushes so interleaved writers keep their order
pub fn write_line(out: &SharedOutput, line: &str) -> LibraryResult<()> {
    let mut guard = out.lock()
        .map_err(|err| LibraryError::runtime(format!("output lock poisoned {:?}", err).as_str(), None))?;
    writeln!(guard, "{}", line)?;
    guard.flush()?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn buffer() -> (SharedOutput, Arc<Mutex<Vec<u8>>>) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let out: SharedOutput = buf.clone();
    (out, buf)
}

#[cfg(test)]
pub(crate) fn lines(buf: &Arc<Mutex<Vec<u8>>>) -> Vec<String> {
    let bytes = buf.lock().expect("buffer lock").clone();
    String::from_utf8(bytes).expect("utf8 output").lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use crate::utils::console::{buffer, lines, write_line};

    #[tokio::test]
    async fn test_should_write_lines_in_order() {
        let (out, buf) = buffer();
        write_line(&out, "first").expect("should write");
        write_line(&out, "second").expect("should write");
        assert_eq!(vec!["first".to_string(), "second".to_string()], lines(&buf));
    }
}
