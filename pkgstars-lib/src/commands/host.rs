use std::io::Write;

/// Process environment the commands write to.
pub trait Host: Send + Sync {
    /// Stream for results (e.g., stdout).
    fn output(&mut self) -> impl Write;

    /// Stream for diagnostics and failures (e.g., stderr).
    fn error(&mut self) -> impl Write;
}

/// Host capturing both streams in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
}

#[cfg(test)]
impl TestHost {
    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }
}
